//! opkit Core Types
//!
//! This crate provides the foundational types shared by the opkit crates:
//! - Identity types (ContainerId)
//! - Value types (the Value enum carried by parameter items)
//! - Common message constants

mod id;
pub mod messages;
mod value;

pub use id::*;
pub use value::*;

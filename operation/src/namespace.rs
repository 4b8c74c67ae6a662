//! Namespaces: named collections of members scanned by the bulk importer.
//!
//! A member is either a type (with its direct base types), a plain value, or
//! a nested namespace. Only types can be operations.

use opkit_core::Value;

use crate::error::OperationResult;
use crate::operation::Operation;

/// Constructs a fresh operation instance.
pub type OperationFactory = fn() -> OperationResult<Box<dyn Operation>>;

/// Description of a type visible in a namespace.
#[derive(Debug, Clone)]
pub struct TypeInfo {
    pub name: String,
    /// Direct base types, by name.
    pub bases: Vec<String>,
    pub factory: Option<OperationFactory>,
}

impl TypeInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bases: Vec::new(),
            factory: None,
        }
    }

    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.bases.push(base.into());
        self
    }

    pub fn with_factory(mut self, factory: OperationFactory) -> Self {
        self.factory = Some(factory);
        self
    }
}

/// What a namespace member is bound to.
#[derive(Debug, Clone)]
pub enum MemberValue {
    Type(TypeInfo),
    Value(Value),
    /// A nested namespace, by name. Never scanned.
    Namespace(String),
}

impl MemberValue {
    /// The type description, if this member is a type.
    pub fn as_type(&self) -> Option<&TypeInfo> {
        match self {
            MemberValue::Type(info) => Some(info),
            _ => None,
        }
    }

    pub fn is_namespace(&self) -> bool {
        matches!(self, MemberValue::Namespace(_))
    }
}

impl From<TypeInfo> for MemberValue {
    fn from(info: TypeInfo) -> Self {
        MemberValue::Type(info)
    }
}

impl From<Value> for MemberValue {
    fn from(value: Value) -> Self {
        MemberValue::Value(value)
    }
}

/// One (name, value) pair visible in a namespace.
#[derive(Debug, Clone)]
pub struct NamespaceMember {
    pub name: String,
    pub value: MemberValue,
}

impl NamespaceMember {
    pub fn new(name: impl Into<String>, value: impl Into<MemberValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A named set of members, kept sorted by member name.
#[derive(Debug, Clone, Default)]
pub struct Namespace {
    pub name: String,
    members: Vec<NamespaceMember>,
}

impl Namespace {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Bind `name` to `value`, replacing any earlier member of that name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<MemberValue>) {
        let member = NamespaceMember::new(name, value);
        match self
            .members
            .binary_search_by(|m| m.name.as_str().cmp(&member.name))
        {
            Ok(pos) => self.members[pos] = member,
            Err(pos) => self.members.insert(pos, member),
        }
    }

    /// Builder form of `insert`.
    pub fn member(mut self, name: impl Into<String>, value: impl Into<MemberValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Add a type under its own name.
    pub fn with_type(self, info: TypeInfo) -> Self {
        let name = info.name.clone();
        self.member(name, info)
    }

    pub fn with_namespace(self, name: impl Into<String>) -> Self {
        let name = name.into();
        let nested = MemberValue::Namespace(format!("{}.{}", self.name, name));
        self.member(name, nested)
    }

    pub fn get(&self, name: &str) -> Option<&MemberValue> {
        self.members
            .binary_search_by(|m| m.name.as_str().cmp(name))
            .ok()
            .map(|pos| &self.members[pos].value)
    }

    pub fn members(&self) -> &[NamespaceMember] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

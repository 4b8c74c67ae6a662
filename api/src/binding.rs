//! Bound methods.
//!
//! A `Binding` captures an item *name* and the kind of accessor. Every
//! invocation looks the item up again with `Parameters::find_mut`, so a call
//! always sees the container's current items.

use opkit_attribute::{Capability, Parameters};
use opkit_core::Value;
use std::fmt;

use crate::error::{SynthesisError, SynthesisResult};

/// The accessor a synthesized method performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethodKind {
    /// `set<Tokens>(value)` or `set<Tokens>(index, value)`.
    SetValue,
    /// `<tokens>()` or `<tokens>(index)`.
    Value,
    /// `enable<Tokens>(enabled)`.
    Enable,
    /// `<tokens>Enabled()`.
    IsEnabled,
    /// `set<Tokens>Index(index, choice)`.
    SetDiscreteIndex,
    /// `<tokens>Index(index)`.
    DiscreteIndex,
}

impl MethodKind {
    /// Method kinds synthesized for each facet, setter first.
    pub const VALUE: [MethodKind; 2] = [MethodKind::SetValue, MethodKind::Value];
    pub const OPTIONAL: [MethodKind; 2] = [MethodKind::Enable, MethodKind::IsEnabled];
    pub const DISCRETE: [MethodKind; 2] = [MethodKind::SetDiscreteIndex, MethodKind::DiscreteIndex];

    /// The facet this kind delegates to.
    pub fn capability(&self) -> Capability {
        match self {
            MethodKind::SetValue | MethodKind::Value => Capability::Value,
            MethodKind::Enable | MethodKind::IsEnabled => Capability::Optional,
            MethodKind::SetDiscreteIndex | MethodKind::DiscreteIndex => Capability::Discrete,
        }
    }

    /// Human-readable argument shape, used in arity errors.
    pub fn signature(&self) -> &'static str {
        match self {
            MethodKind::SetValue => "(value) or (index, value)",
            MethodKind::Value => "() or (index)",
            MethodKind::Enable => "(enabled)",
            MethodKind::IsEnabled => "()",
            MethodKind::SetDiscreteIndex => "(index, choice)",
            MethodKind::DiscreteIndex => "(index)",
        }
    }
}

impl fmt::Display for MethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MethodKind::SetValue => "set value",
            MethodKind::Value => "value",
            MethodKind::Enable => "enable",
            MethodKind::IsEnabled => "is enabled",
            MethodKind::SetDiscreteIndex => "set discrete index",
            MethodKind::DiscreteIndex => "discrete index",
        };
        f.write_str(s)
    }
}

/// A synthesized method: which item it targets and what it does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// Name of the item the method resolves on every call.
    pub item: String,
    pub kind: MethodKind,
}

impl Binding {
    pub fn new(item: impl Into<String>, kind: MethodKind) -> Self {
        Self {
            item: item.into(),
            kind,
        }
    }

    /// Run the method named `method` against `parameters`.
    ///
    /// Setters return `Value::Null`; getters return the read value. An unset
    /// discrete slot reads as `Value::Null`.
    pub fn invoke(
        &self,
        method: &str,
        parameters: &mut Parameters,
        args: &[Value],
    ) -> SynthesisResult<Value> {
        let item = parameters
            .find_mut(&self.item)
            .ok_or_else(|| SynthesisError::item_not_found(&self.item))?;
        let missing = || SynthesisError::missing_capability(&self.item, self.kind.capability());

        match self.kind {
            MethodKind::SetValue => {
                let (index, value) = match args {
                    [value] => (0, value.clone()),
                    [index, value] => (index_arg(method, 0, index)?, value.clone()),
                    _ => return Err(self.arity(method, args)),
                };
                item.as_value_mut()
                    .ok_or_else(missing)?
                    .set_value(index, value)?;
                Ok(Value::Null)
            }
            MethodKind::Value => {
                let index = match args {
                    [] => 0,
                    [index] => index_arg(method, 0, index)?,
                    _ => return Err(self.arity(method, args)),
                };
                Ok(item.as_value().ok_or_else(missing)?.value(index)?)
            }
            MethodKind::Enable => {
                let [enabled] = args else {
                    return Err(self.arity(method, args));
                };
                let enabled = enabled.as_bool().ok_or_else(|| {
                    SynthesisError::argument_type(method, 0, "Bool", enabled.type_name())
                })?;
                item.as_optional_mut()
                    .ok_or_else(missing)?
                    .set_is_enabled(enabled);
                Ok(Value::Null)
            }
            MethodKind::IsEnabled => {
                if !args.is_empty() {
                    return Err(self.arity(method, args));
                }
                Ok(Value::Bool(item.as_optional().ok_or_else(missing)?.is_enabled()))
            }
            MethodKind::SetDiscreteIndex => {
                let [index, choice] = args else {
                    return Err(self.arity(method, args));
                };
                let index = index_arg(method, 0, index)?;
                let choice = index_arg(method, 1, choice)?;
                item.as_discrete_mut()
                    .ok_or_else(missing)?
                    .set_discrete_index(index, choice)?;
                Ok(Value::Null)
            }
            MethodKind::DiscreteIndex => {
                let [index] = args else {
                    return Err(self.arity(method, args));
                };
                let index = index_arg(method, 0, index)?;
                let choice = item.as_discrete().ok_or_else(missing)?.discrete_index(index)?;
                Ok(choice.map(Value::from).unwrap_or(Value::Null))
            }
        }
    }

    fn arity(&self, method: &str, args: &[Value]) -> SynthesisError {
        SynthesisError::arity(method, self.kind.signature(), args.len())
    }
}

fn index_arg(method: &str, position: usize, arg: &Value) -> SynthesisResult<usize> {
    arg.as_index().ok_or_else(|| {
        SynthesisError::argument_type(method, position, "non-negative Int", arg.to_string())
    })
}

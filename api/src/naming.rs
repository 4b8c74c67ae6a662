//! Method-name derivation.
//!
//! Rules:
//! 1. Title-case the item name: a letter is upper-cased when it follows a
//!    non-letter (or starts the name) and lower-cased otherwise. A letter whose
//!    upper case spans several characters keeps only the first one upper
//!    (`ß` becomes `Ss`).
//! 2. Split on every run of characters outside `[a-zA-Z0-9]`, dropping empty
//!    pieces. The pieces are the tokens.
//! 3. Getters lower-case the first token and append the rest unchanged;
//!    setters and actions prefix a verb to all tokens. Discrete accessors and
//!    the enabled-state getter append a suffix.
//!
//! Derivation is pure: the same item name always yields the same names.

use regex_lite::Regex;
use std::sync::OnceLock;

use crate::binding::MethodKind;
use crate::error::{SynthesisError, SynthesisResult};
use crate::options::NamingVerbs;

const SEPARATOR_PATTERN: &str = r"[^a-zA-Z0-9]+";

fn separator() -> SynthesisResult<&'static Regex> {
    static SEPARATOR: OnceLock<Result<Regex, String>> = OnceLock::new();
    SEPARATOR
        .get_or_init(|| Regex::new(SEPARATOR_PATTERN).map_err(|e| e.to_string()))
        .as_ref()
        .map_err(|message| SynthesisError::invalid_pattern(SEPARATOR_PATTERN, message.as_str()))
}

/// Title-case `name`, word boundaries being any non-letter.
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut previous_is_letter = false;
    for c in name.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                out.extend(c.to_lowercase());
            } else {
                let mut upper = c.to_uppercase();
                out.extend(upper.next());
                out.extend(upper.flat_map(char::to_lowercase));
            }
            previous_is_letter = true;
        } else {
            out.push(c);
            previous_is_letter = false;
        }
    }
    out
}

/// Split an item name into capitalized tokens.
pub fn tokenize(name: &str) -> SynthesisResult<Vec<String>> {
    Ok(separator()?
        .split(&title_case(name))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect())
}

/// The token sequence of one item name and the method names built from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodNames {
    tokens: Vec<String>,
}

impl MethodNames {
    /// Derive tokens for `item_name`. Fails if the name has no alphanumerics.
    pub fn derive(item_name: &str) -> SynthesisResult<Self> {
        let tokens = tokenize(item_name)?;
        if tokens.is_empty() {
            return Err(SynthesisError::empty_method_name(item_name));
        }
        Ok(Self { tokens })
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// All tokens concatenated: `MaxIterations`.
    pub fn pascal(&self) -> String {
        self.tokens.concat()
    }

    /// First token lower-cased, rest unchanged: `maxIterations`.
    pub fn camel(&self) -> String {
        let mut out = self.tokens[0].to_lowercase();
        for token in &self.tokens[1..] {
            out.push_str(token);
        }
        out
    }

    /// Method name for `kind`.
    pub fn method(&self, kind: MethodKind, verbs: &NamingVerbs) -> String {
        match kind {
            MethodKind::SetValue => format!("{}{}", verbs.set, self.pascal()),
            MethodKind::Value => self.camel(),
            MethodKind::Enable => format!("{}{}", verbs.enable, self.pascal()),
            MethodKind::IsEnabled => format!("{}{}", self.camel(), verbs.enabled),
            MethodKind::SetDiscreteIndex => {
                format!("{}{}{}", verbs.set, self.pascal(), verbs.index)
            }
            MethodKind::DiscreteIndex => format!("{}{}", self.camel(), verbs.index),
        }
    }
}

//! ModuleKey - module family identifier.
//!
//! # 命名規約
//! - キーは型名の断片になるため、ASCII 英数字と `_` のみ
//! - 先頭は数字不可
//! - 例: `login` → `LoginView`, `LoginPresenter`, ...

use std::fmt;
use std::str::FromStr;

use super::errors::KeyError;
use super::kind::ComponentKind;
use super::naming::title_case;

/// Identifier shared by every component type of one module family.
///
/// Also carries the name of the layout resource views are loaded from,
/// which defaults to the key itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleKey {
    value: String,
    layout: Option<String>,
}

impl ModuleKey {
    pub fn new(value: impl Into<String>) -> Result<Self, KeyError> {
        let value = value.into();
        Self::validate(&value)?;
        Ok(Self {
            value,
            layout: None,
        })
    }

    fn validate(value: &str) -> Result<(), KeyError> {
        let Some(first) = value.chars().next() else {
            return Err(KeyError::Empty);
        };
        if first.is_ascii_digit() {
            return Err(KeyError::LeadingDigit(value.to_string()));
        }
        if let Some(ch) = value
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
        {
            return Err(KeyError::InvalidCharacter {
                key: value.to_string(),
                ch,
            });
        }
        Ok(())
    }

    /// Load views from a differently named layout resource.
    pub fn with_layout(mut self, layout: impl Into<String>) -> Self {
        self.layout = Some(layout.into());
        self
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// `"login"` → `"Login"`.
    pub fn capitalized(&self) -> String {
        title_case(&self.value)
    }

    /// Capitalized layout resource name.
    pub fn layout_name(&self) -> String {
        title_case(self.layout.as_deref().unwrap_or(&self.value))
    }

    /// Unqualified type name for a role: `Capitalize(key) + Capitalize(role)`.
    pub fn base_name(&self, kind: ComponentKind) -> String {
        format!("{}{}", self.capitalized(), kind.fragment())
    }
}

impl FromStr for ModuleKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for ModuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

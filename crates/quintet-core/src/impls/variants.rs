//! Form-factor based view variants.

use crate::domain::{Environment, FormFactor};
use crate::ports::VariantResolver;

pub const DEFAULT_VARIANT_SUFFIX: &str = "Pad";

/// Appends `suffix` to the view name when the environment has `form_factor`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFactorVariants {
    suffix: String,
    form_factor: FormFactor,
}

impl FormFactorVariants {
    pub fn new(suffix: impl Into<String>, form_factor: FormFactor) -> Self {
        Self {
            suffix: suffix.into(),
            form_factor,
        }
    }
}

impl Default for FormFactorVariants {
    fn default() -> Self {
        Self::new(DEFAULT_VARIANT_SUFFIX, FormFactor::Large)
    }
}

impl VariantResolver for FormFactorVariants {
    fn variant_suffix(&self, environment: &Environment) -> Option<&str> {
        if environment.form_factor == self.form_factor && !self.suffix.is_empty() {
            Some(self.suffix.as_str())
        } else {
            None
        }
    }
}

/// Never selects a variant.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoVariants;

impl VariantResolver for NoVariants {
    fn variant_suffix(&self, _environment: &Environment) -> Option<&str> {
        None
    }
}

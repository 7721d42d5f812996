//! AssemblerConfig - JSON configuration for the assembler.
//!
//! ```json
//! { "namespace": "My App", "variant_suffix": "Pad", "variant_form_factor": "large" }
//! ```
//! Every field is optional.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{ConfigError, FormFactor, Namespace};
use crate::impls::FormFactorVariants;
use crate::impls::variants::DEFAULT_VARIANT_SUFFIX;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssemblerConfig {
    /// Host application identity used to qualify type names.
    pub namespace: String,
    /// Appended to the view name when the variant applies.
    pub variant_suffix: String,
    /// Form factor that selects the variant.
    pub variant_form_factor: FormFactor,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            namespace: String::new(),
            variant_suffix: DEFAULT_VARIANT_SUFFIX.to_string(),
            variant_form_factor: FormFactor::Large,
        }
    }
}

impl AssemblerConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn namespace(&self) -> Namespace {
        Namespace::new(&self.namespace)
    }

    pub fn variant_resolver(&self) -> FormFactorVariants {
        FormFactorVariants::new(self.variant_suffix.clone(), self.variant_form_factor)
    }
}

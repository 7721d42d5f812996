//! Environment descriptor passed explicitly into assembly.

use serde::{Deserialize, Serialize};

/// Device form factor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormFactor {
    #[default]
    Compact,
    Large,
}

/// Environment は組み立て時の環境情報
///
/// グローバル状態を読む代わりに `assemble` へ明示的に渡します。
/// 中身を解釈するのは `VariantResolver` だけです。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Environment {
    #[serde(default)]
    pub form_factor: FormFactor,
}

impl Environment {
    pub fn new(form_factor: FormFactor) -> Self {
        Self { form_factor }
    }

    pub fn compact() -> Self {
        Self::new(FormFactor::Compact)
    }

    pub fn large() -> Self {
        Self::new(FormFactor::Large)
    }
}

//! Module identity.
//!
//! 各 assemble 呼び出しは独立した Module を生成します。
//! Back-reference はこの ID を持つことで、別 Module のコンポーネントを
//! 指していないことを検証できます。

use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

/// Identifier of one assembled module (ULID based).
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ModuleId(Ulid);

impl ModuleId {
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    pub fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid)
    }

    pub fn as_ulid(&self) -> Ulid {
        self.0
    }
}

impl Default for ModuleId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Ulid> for ModuleId {
    fn from(ulid: Ulid) -> Self {
        Self::from_ulid(ulid)
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "module-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        assert_ne!(ModuleId::new(), ModuleId::new());
    }

    #[test]
    fn display_has_prefix() {
        let ulid = Ulid::new();
        let id: ModuleId = ulid.into();
        assert_eq!(id.as_ulid(), ulid);
        assert_eq!(id.to_string(), format!("module-{ulid}"));
    }
}

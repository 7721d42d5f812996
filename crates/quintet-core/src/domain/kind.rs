//! ComponentKind - the five fixed roles of a module.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::naming::capitalize_first;

/// ComponentKind は module を構成する 5 つの役割
///
/// 型名を導出するためのキーとしてだけ使われ、実行時オブジェクトにはなりません。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ComponentKind {
    View,
    Interactor,
    Presenter,
    Router,
    DisplayData,
}

impl ComponentKind {
    /// Resolution order used by the assembler.
    pub const ALL: [ComponentKind; 5] = [
        ComponentKind::View,
        ComponentKind::Interactor,
        ComponentKind::Presenter,
        ComponentKind::Router,
        ComponentKind::DisplayData,
    ];

    /// Role name as it appears in configuration and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ComponentKind::View => "view",
            ComponentKind::Interactor => "interactor",
            ComponentKind::Presenter => "presenter",
            ComponentKind::Router => "router",
            ComponentKind::DisplayData => "displayData",
        }
    }

    /// Type-name fragment: the role name with its first letter uppercased.
    ///
    /// `DisplayData` keeps its inner capital (`"displayData"` → `"DisplayData"`).
    pub fn fragment(self) -> String {
        capitalize_first(self.as_str())
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

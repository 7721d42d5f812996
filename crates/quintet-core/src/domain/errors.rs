//! Errors - 組み立て・差し替え・登録のエラー型
//!
//! # 分類
//! - 設定ミス（開発中に検出されるべきもの）: TypeNotFound, TypeMismatch, RegistryError, KeyError
//! - 外部サービス由来: ViewInstantiationError（そのまま伝播）
//! - Module 操作: SubstitutionError

use thiserror::Error;

use super::edge::Edge;
use super::kind::ComponentKind;

/// KeyError は不正な module key
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("module key must not be empty")]
    Empty,

    #[error("module key '{0}' must not start with a digit")]
    LeadingDigit(String),

    #[error("module key '{key}' contains '{ch}'; only ASCII letters, digits and '_' are allowed")]
    InvalidCharacter { key: String, ch: char },
}

/// Failure reported by a view factory. The assembler never interprets it.
#[derive(Debug, Error)]
pub enum ViewInstantiationError {
    #[error("layout resource '{0}' not found")]
    MissingLayout(String),

    #[error("layout '{layout}' has no view with identifier '{identifier}'")]
    MissingIdentifier { layout: String, identifier: String },

    #[error("{0}")]
    Other(String),
}

/// AssemblyError は module 組み立ての失敗
///
/// どの役割のどの型名で失敗したかを含め、命名規約のずれを診断できるようにします。
#[derive(Debug, Error)]
pub enum AssemblyError {
    #[error("no type found for {kind} role: {name} (looked up as '{qualified}')")]
    TypeNotFound {
        kind: ComponentKind,
        name: String,
        qualified: String,
    },

    #[error("type {name} was resolved for the {kind} role but provides a {found}")]
    TypeMismatch {
        kind: ComponentKind,
        name: String,
        found: ComponentKind,
    },

    #[error("view instantiation failed: {0}")]
    ViewInstantiation(#[from] ViewInstantiationError),
}

/// SubstitutionError は Module の差し替え失敗
#[derive(Debug, Error)]
pub enum SubstitutionError {
    #[error("component for the {supplied} role cannot replace the {role}")]
    RoleMismatch {
        role: ComponentKind,
        supplied: ComponentKind,
    },

    #[error("module is not fully wired; missing edges: {0:?}")]
    NotWired(Vec<Edge>),
}

/// RegistryError は TypeRegistry の操作エラー
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("type '{0}' is already registered")]
    AlreadyRegistered(String),
}

/// BuildError は assembler 構築時の検証エラー
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("no type lookup service was configured")]
    MissingLookup,

    #[error("Incomplete modules: {0:?}. These roles were expected but could not be resolved.")]
    IncompleteModules(Vec<String>),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

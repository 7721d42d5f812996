//! Domain model (roles, module keys, environment, edges, errors).
//!
//! 組み立て処理が参照する値型だけを置きます。
//! コンポーネント本体（trait）は `components`、外部サービスは `ports` にあります。

pub mod kind;
pub mod naming;
pub mod key;
pub mod environment;
pub mod edge;
pub mod ids;
pub mod errors;

// 主要な型を再エクスポート
pub use self::kind::ComponentKind;
pub use self::naming::Namespace;
pub use self::key::ModuleKey;
pub use self::environment::{Environment, FormFactor};
pub use self::edge::Edge;
pub use self::ids::ModuleId;
pub use self::errors::{
    AssemblyError, BuildError, ConfigError, KeyError, RegistryError, SubstitutionError,
    ViewInstantiationError,
};

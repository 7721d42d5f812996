//! TypeLookup port - qualified type name to type handle.

use std::fmt;
use std::sync::Arc;

use crate::components::{DisplayData, Interactor, Presenter, Router};
use crate::domain::ComponentKind;

/// What a registered type can produce.
///
/// Views carry no constructor: they are materialized by a `ViewFactory`.
/// The other four roles are built through their default constructor.
#[derive(Clone, Copy)]
pub enum Provides {
    View,
    Interactor(fn() -> Box<dyn Interactor>),
    Presenter(fn() -> Box<dyn Presenter>),
    Router(fn() -> Box<dyn Router>),
    DisplayData(fn() -> Box<dyn DisplayData>),
}

impl Provides {
    pub fn kind(&self) -> ComponentKind {
        match self {
            Provides::View => ComponentKind::View,
            Provides::Interactor(_) => ComponentKind::Interactor,
            Provides::Presenter(_) => ComponentKind::Presenter,
            Provides::Router(_) => ComponentKind::Router,
            Provides::DisplayData(_) => ComponentKind::DisplayData,
        }
    }
}

impl fmt::Debug for Provides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Provides({})", self.kind())
    }
}

/// Lookup result: a concrete, instantiable type.
///
/// Not owned by anything; discarded after instantiation.
#[derive(Debug, Clone)]
pub struct TypeHandle {
    qualified_name: Arc<str>,
    provides: Provides,
}

impl TypeHandle {
    pub fn new(qualified_name: impl Into<Arc<str>>, provides: Provides) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            provides,
        }
    }

    /// `Namespace.TypeName`
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    /// Type name without its namespace.
    pub fn identifier(&self) -> &str {
        self.qualified_name
            .rsplit('.')
            .next()
            .unwrap_or(&self.qualified_name)
    }

    pub fn kind(&self) -> ComponentKind {
        self.provides.kind()
    }

    pub fn provides(&self) -> Provides {
        self.provides
    }
}

/// TypeLookup は修飾名で型を探す
///
/// # Thread Safety
/// - 複数スレッドからの読み取り専用クエリに耐える必要がある（`Send + Sync`）
/// - 見つからない場合はエラーではなく `None`
pub trait TypeLookup: Send + Sync {
    fn lookup(&self, qualified_name: &str) -> Option<TypeHandle>;
}

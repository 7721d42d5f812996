//! Components - 5 つの役割の capability trait
//!
//! # 所有と参照
//! - 各コンポーネントは `Module` が唯一の所有者（`Box<dyn ...>`）
//! - 兄弟への参照は `Link<R>`（所有しないハンドル）で保持
//! - `Link` は `Module::follow` でのみ解決できる
//!
//! # 実装例
//! ```ignore
//! #[derive(Default)]
//! struct LoginPresenter {
//!     links: PresenterLinks,
//! }
//!
//! impl Presenter for LoginPresenter {
//!     fn links(&self) -> &PresenterLinks { &self.links }
//!     fn links_mut(&mut self) -> &mut PresenterLinks { &mut self.links }
//! }
//! ```

pub mod links;

use std::any::Any;

pub use self::links::{InteractorLinks, Link, PresenterLinks, RouterLinks, ViewLinks};

use crate::domain::ComponentKind;

/// Downcasting support for component trait objects.
///
/// Call through `&dyn Role` (e.g. `module.view().as_any()`), never through
/// the owning `Box`, or the box itself is what gets inspected.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn type_label(&self) -> &'static str;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_label(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// Renders display data and forwards user events to its presenter.
pub trait View: AsAny + Send + Sync {
    fn links(&self) -> &ViewLinks;
    fn links_mut(&mut self) -> &mut ViewLinks;
}

/// Business logic; reports back to its presenter.
pub trait Interactor: AsAny + Send + Sync {
    fn links(&self) -> &InteractorLinks;
    fn links_mut(&mut self) -> &mut InteractorLinks;
}

/// Mediates between view, interactor and router.
pub trait Presenter: AsAny + Send + Sync {
    fn links(&self) -> &PresenterLinks;
    fn links_mut(&mut self) -> &mut PresenterLinks;
}

/// Navigation out of the module.
pub trait Router: AsAny + Send + Sync {
    fn links(&self) -> &RouterLinks;
    fn links_mut(&mut self) -> &mut RouterLinks;
}

/// Static data the view displays. Holds no back-references.
pub trait DisplayData: AsAny + Send + Sync {}

/// An owned component of any role, used for substitution.
pub enum Component {
    View(Box<dyn View>),
    Interactor(Box<dyn Interactor>),
    Presenter(Box<dyn Presenter>),
    Router(Box<dyn Router>),
    DisplayData(Box<dyn DisplayData>),
}

impl Component {
    pub fn kind(&self) -> ComponentKind {
        match self {
            Component::View(_) => ComponentKind::View,
            Component::Interactor(_) => ComponentKind::Interactor,
            Component::Presenter(_) => ComponentKind::Presenter,
            Component::Router(_) => ComponentKind::Router,
            Component::DisplayData(_) => ComponentKind::DisplayData,
        }
    }

    /// Rust type name of the concrete component.
    pub fn type_label(&self) -> &'static str {
        match self {
            Component::View(c) => c.as_ref().type_label(),
            Component::Interactor(c) => c.as_ref().type_label(),
            Component::Presenter(c) => c.as_ref().type_label(),
            Component::Router(c) => c.as_ref().type_label(),
            Component::DisplayData(c) => c.as_ref().type_label(),
        }
    }

    pub fn into_view(self) -> Option<Box<dyn View>> {
        match self {
            Component::View(view) => Some(view),
            _ => None,
        }
    }
}

impl std::fmt::Debug for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Component")
            .field(&self.kind())
            .field(&self.type_label())
            .finish()
    }
}

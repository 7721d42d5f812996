//! Non-owning back-references between sibling components.
//!
//! Design:
//! - A `Link` names a module and a slot generation; it never owns the target.
//! - Replacing a component bumps its slot generation, so links that still
//!   point at the old component stop resolving.
//! - Invariant: after assembly every `Option<Link<_>>` below is `Some` and current.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use super::{DisplayData, Interactor, Presenter, Router, View};
use crate::domain::ModuleId;

/// Handle to the component of role `R` inside one module.
///
/// `R` is the role trait object (`dyn Presenter`, ...). It is only a marker:
/// `Link<dyn Presenter>` and `Link<dyn Router>` cannot be mixed up.
pub struct Link<R: ?Sized> {
    module: ModuleId,
    generation: u32,
    _role: PhantomData<fn() -> Box<R>>,
}

impl<R: ?Sized> Link<R> {
    pub(crate) fn new(module: ModuleId, generation: u32) -> Self {
        Self {
            module,
            generation,
            _role: PhantomData,
        }
    }

    pub fn module(&self) -> ModuleId {
        self.module
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl<R: ?Sized> Clone for Link<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: ?Sized> Copy for Link<R> {}

impl<R: ?Sized> PartialEq for Link<R> {
    fn eq(&self, other: &Self) -> bool {
        self.module == other.module && self.generation == other.generation
    }
}

impl<R: ?Sized> Eq for Link<R> {}

impl<R: ?Sized> Hash for Link<R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.module.hash(state);
        self.generation.hash(state);
    }
}

impl<R: ?Sized> fmt::Debug for Link<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Link({}#{})", self.module, self.generation)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ViewLinks {
    pub presenter: Option<Link<dyn Presenter>>,
    pub display_data: Option<Link<dyn DisplayData>>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InteractorLinks {
    pub presenter: Option<Link<dyn Presenter>>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PresenterLinks {
    pub view: Option<Link<dyn View>>,
    pub interactor: Option<Link<dyn Interactor>>,
    pub router: Option<Link<dyn Router>>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RouterLinks {
    pub presenter: Option<Link<dyn Presenter>>,
}

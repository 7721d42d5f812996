//! Test fixtures shared across modules.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::components::{
    DisplayData, Interactor, InteractorLinks, Presenter, PresenterLinks, Router, RouterLinks,
    View, ViewLinks,
};
use crate::domain::{ModuleKey, Namespace, ViewInstantiationError};
use crate::impls::TypeRegistry;
use crate::ports::{ViewFactory, ViewRequest};

pub const NAMESPACE: &str = "Test App";

#[derive(Debug, Default)]
pub struct TestView {
    links: ViewLinks,
}

impl View for TestView {
    fn links(&self) -> &ViewLinks {
        &self.links
    }

    fn links_mut(&mut self) -> &mut ViewLinks {
        &mut self.links
    }
}

#[derive(Debug, Default)]
pub struct MockView {
    links: ViewLinks,
}

impl View for MockView {
    fn links(&self) -> &ViewLinks {
        &self.links
    }

    fn links_mut(&mut self) -> &mut ViewLinks {
        &mut self.links
    }
}

#[derive(Debug, Default)]
pub struct TestInteractor {
    links: InteractorLinks,
}

impl Interactor for TestInteractor {
    fn links(&self) -> &InteractorLinks {
        &self.links
    }

    fn links_mut(&mut self) -> &mut InteractorLinks {
        &mut self.links
    }
}

#[derive(Debug, Default)]
pub struct TestPresenter {
    links: PresenterLinks,
}

impl Presenter for TestPresenter {
    fn links(&self) -> &PresenterLinks {
        &self.links
    }

    fn links_mut(&mut self) -> &mut PresenterLinks {
        &mut self.links
    }
}

#[derive(Debug, Default)]
pub struct TestRouter {
    links: RouterLinks,
}

impl Router for TestRouter {
    fn links(&self) -> &RouterLinks {
        &self.links
    }

    fn links_mut(&mut self) -> &mut RouterLinks {
        &mut self.links
    }
}

#[derive(Debug, Default)]
pub struct TestDisplayData;

impl DisplayData for TestDisplayData {}

/// Registry in `NAMESPACE` with all five roles registered for each key.
pub fn registry_with(keys: &[&str]) -> TypeRegistry {
    let mut registry = TypeRegistry::new(Namespace::new(NAMESPACE));
    for raw in keys {
        let key = ModuleKey::new(*raw).unwrap();
        registry
            .register_module::<TestInteractor, TestPresenter, TestRouter, TestDisplayData>(&key)
            .unwrap();
    }
    registry
}

/// Builds a `TestView` for any request.
pub struct PlainViews;

impl ViewFactory for PlainViews {
    fn instantiate(&self, _request: &ViewRequest) -> Result<Box<dyn View>, ViewInstantiationError> {
        Ok(Box::new(TestView::default()))
    }
}

/// Like `PlainViews`, counting calls.
#[derive(Default)]
pub struct CountingViews {
    pub calls: AtomicUsize,
}

impl ViewFactory for CountingViews {
    fn instantiate(&self, _request: &ViewRequest) -> Result<Box<dyn View>, ViewInstantiationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(TestView::default()))
    }
}

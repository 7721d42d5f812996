//! Back-reference edges between the components of one module.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::kind::ComponentKind;

/// A non-owning reference from one component to a sibling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    ViewToPresenter,
    PresenterToView,
    InteractorToPresenter,
    PresenterToRouter,
    RouterToPresenter,
    PresenterToInteractor,
    ViewToDisplayData,
}

impl Edge {
    /// All seven edges in the order they are wired.
    pub const WIRING_ORDER: [Edge; 7] = [
        Edge::ViewToPresenter,
        Edge::PresenterToView,
        Edge::InteractorToPresenter,
        Edge::PresenterToRouter,
        Edge::RouterToPresenter,
        Edge::PresenterToInteractor,
        Edge::ViewToDisplayData,
    ];

    pub fn source(self) -> ComponentKind {
        match self {
            Edge::ViewToPresenter | Edge::ViewToDisplayData => ComponentKind::View,
            Edge::InteractorToPresenter => ComponentKind::Interactor,
            Edge::RouterToPresenter => ComponentKind::Router,
            Edge::PresenterToView | Edge::PresenterToRouter | Edge::PresenterToInteractor => {
                ComponentKind::Presenter
            }
        }
    }

    pub fn target(self) -> ComponentKind {
        match self {
            Edge::ViewToPresenter | Edge::InteractorToPresenter | Edge::RouterToPresenter => {
                ComponentKind::Presenter
            }
            Edge::PresenterToView => ComponentKind::View,
            Edge::PresenterToRouter => ComponentKind::Router,
            Edge::PresenterToInteractor => ComponentKind::Interactor,
            Edge::ViewToDisplayData => ComponentKind::DisplayData,
        }
    }

    /// Whether replacing `kind` invalidates this edge.
    pub fn touches(self, kind: ComponentKind) -> bool {
        self.source() == kind || self.target() == kind
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source(), self.target())
    }
}

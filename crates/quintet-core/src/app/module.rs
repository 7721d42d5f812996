//! Module - 5 つのコンポーネントを所有する配線済みグラフ
//!
//! # 所有モデル
//! - Module が各コンポーネントの唯一の所有者
//! - コンポーネント間の参照は `Link`（非所有）なので循環参照にならない
//! - Module を drop すると 5 つのコンポーネントも一緒に破棄される
//!
//! # 不変条件
//! - `assemble` が返した時点で 7 本の edge がすべて接続済み
//! - 差し替え後も同じ条件が成り立つ

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::components::{Component, DisplayData, Interactor, Link, Presenter, Router, View};
use crate::domain::{ComponentKind, Edge, ModuleId, ModuleKey, SubstitutionError};

/// Role trait objects that can be addressed inside a module.
pub trait Role: 'static {
    const KIND: ComponentKind;

    fn slot(module: &Module) -> &Self;
}

impl Role for dyn View {
    const KIND: ComponentKind = ComponentKind::View;

    fn slot(module: &Module) -> &Self {
        module.view.as_ref()
    }
}

impl Role for dyn Interactor {
    const KIND: ComponentKind = ComponentKind::Interactor;

    fn slot(module: &Module) -> &Self {
        module.interactor.as_ref()
    }
}

impl Role for dyn Presenter {
    const KIND: ComponentKind = ComponentKind::Presenter;

    fn slot(module: &Module) -> &Self {
        module.presenter.as_ref()
    }
}

impl Role for dyn Router {
    const KIND: ComponentKind = ComponentKind::Router;

    fn slot(module: &Module) -> &Self {
        module.router.as_ref()
    }
}

impl Role for dyn DisplayData {
    const KIND: ComponentKind = ComponentKind::DisplayData;

    fn slot(module: &Module) -> &Self {
        module.display_data.as_ref()
    }
}

/// Freshly instantiated, not yet wired components.
pub(crate) struct Parts {
    pub view: Box<dyn View>,
    pub interactor: Box<dyn Interactor>,
    pub presenter: Box<dyn Presenter>,
    pub router: Box<dyn Router>,
    pub display_data: Box<dyn DisplayData>,
    /// Qualified type names, indexed by `ComponentKind`.
    pub type_names: [String; 5],
}

/// The wired bundle of one module's five components.
pub struct Module {
    id: ModuleId,
    key: ModuleKey,
    generations: [u32; 5],
    type_names: [String; 5],
    substituted: [bool; 5],
    view: Box<dyn View>,
    interactor: Box<dyn Interactor>,
    presenter: Box<dyn Presenter>,
    router: Box<dyn Router>,
    display_data: Box<dyn DisplayData>,
}

impl Module {
    /// Unwired module. Only the assembler may hold one of these, and it must
    /// connect every edge before handing it out.
    pub(crate) fn from_parts(key: ModuleKey, parts: Parts) -> Self {
        Self {
            id: ModuleId::new(),
            key,
            generations: [0; 5],
            type_names: parts.type_names,
            substituted: [false; 5],
            view: parts.view,
            interactor: parts.interactor,
            presenter: parts.presenter,
            router: parts.router,
            display_data: parts.display_data,
        }
    }

    pub fn id(&self) -> ModuleId {
        self.id
    }

    pub fn key(&self) -> &ModuleKey {
        &self.key
    }

    /// Qualified name of the registered type, or the Rust type name of a
    /// substituted component (see `is_substituted`).
    pub fn type_name(&self, kind: ComponentKind) -> &str {
        &self.type_names[kind.index()]
    }

    /// Whether the component of `kind` was swapped in after assembly.
    pub fn is_substituted(&self, kind: ComponentKind) -> bool {
        self.substituted[kind.index()]
    }

    pub fn view(&self) -> &dyn View {
        self.view.as_ref()
    }

    pub fn interactor(&self) -> &dyn Interactor {
        self.interactor.as_ref()
    }

    pub fn presenter(&self) -> &dyn Presenter {
        self.presenter.as_ref()
    }

    pub fn router(&self) -> &dyn Router {
        self.router.as_ref()
    }

    pub fn display_data(&self) -> &dyn DisplayData {
        self.display_data.as_ref()
    }

    pub fn view_as<T: View>(&self) -> Option<&T> {
        self.view().as_any().downcast_ref()
    }

    pub fn interactor_as<T: Interactor>(&self) -> Option<&T> {
        self.interactor().as_any().downcast_ref()
    }

    pub fn presenter_as<T: Presenter>(&self) -> Option<&T> {
        self.presenter().as_any().downcast_ref()
    }

    pub fn router_as<T: Router>(&self) -> Option<&T> {
        self.router().as_any().downcast_ref()
    }

    pub fn display_data_as<T: DisplayData>(&self) -> Option<&T> {
        self.display_data().as_any().downcast_ref()
    }

    /// Current link to this module's component of role `R`.
    pub fn link_to<R: Role + ?Sized>(&self) -> Link<R> {
        Link::new(self.id, self.generations[R::KIND.index()])
    }

    /// Resolve a back-reference. `None` if the link belongs to another module
    /// or points at a component that has since been replaced.
    pub fn follow<R: Role + ?Sized>(&self, link: Link<R>) -> Option<&R> {
        if self.is_current(Some(link)) {
            Some(R::slot(self))
        } else {
            None
        }
    }

    fn is_current<R: Role + ?Sized>(&self, link: Option<Link<R>>) -> bool {
        link.is_some_and(|l| l.module() == self.id && l.generation() == self.generations[R::KIND.index()])
    }

    /// Set one back-reference to the current component of its target role.
    pub(crate) fn connect(&mut self, edge: Edge) {
        match edge {
            Edge::ViewToPresenter => {
                let link = self.link_to::<dyn Presenter>();
                self.view.links_mut().presenter = Some(link);
            }
            Edge::PresenterToView => {
                let link = self.link_to::<dyn View>();
                self.presenter.links_mut().view = Some(link);
            }
            Edge::InteractorToPresenter => {
                let link = self.link_to::<dyn Presenter>();
                self.interactor.links_mut().presenter = Some(link);
            }
            Edge::PresenterToRouter => {
                let link = self.link_to::<dyn Router>();
                self.presenter.links_mut().router = Some(link);
            }
            Edge::RouterToPresenter => {
                let link = self.link_to::<dyn Presenter>();
                self.router.links_mut().presenter = Some(link);
            }
            Edge::PresenterToInteractor => {
                let link = self.link_to::<dyn Interactor>();
                self.presenter.links_mut().interactor = Some(link);
            }
            Edge::ViewToDisplayData => {
                let link = self.link_to::<dyn DisplayData>();
                self.view.links_mut().display_data = Some(link);
            }
        }
    }

    /// Whether `edge` is populated and points at the current target.
    pub fn is_connected(&self, edge: Edge) -> bool {
        match edge {
            Edge::ViewToPresenter => self.is_current(self.view.links().presenter),
            Edge::PresenterToView => self.is_current(self.presenter.links().view),
            Edge::InteractorToPresenter => self.is_current(self.interactor.links().presenter),
            Edge::PresenterToRouter => self.is_current(self.presenter.links().router),
            Edge::RouterToPresenter => self.is_current(self.router.links().presenter),
            Edge::PresenterToInteractor => self.is_current(self.presenter.links().interactor),
            Edge::ViewToDisplayData => self.is_current(self.view.links().display_data),
        }
    }

    pub fn missing_edges(&self) -> Vec<Edge> {
        Edge::WIRING_ORDER
            .into_iter()
            .filter(|edge| !self.is_connected(*edge))
            .collect()
    }

    pub fn is_fully_wired(&self) -> bool {
        Edge::WIRING_ORDER
            .into_iter()
            .all(|edge| self.is_connected(edge))
    }

    fn ensure_wired(&self) -> Result<(), SubstitutionError> {
        let missing = self.missing_edges();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(SubstitutionError::NotWired(missing))
        }
    }

    /// Invalidate links to the replaced component and reconnect every edge
    /// touching `role`.
    fn rewire(&mut self, role: ComponentKind, type_label: &'static str) {
        let slot = role.index();
        self.generations[slot] = self.generations[slot].wrapping_add(1);
        self.type_names[slot] = type_label.to_string();
        self.substituted[slot] = true;
        for edge in Edge::WIRING_ORDER.into_iter().filter(|e| e.touches(role)) {
            self.connect(edge);
        }
        info!(module = %self.key, id = %self.id, role = %role, component = type_label, "component substituted");
    }

    /// Replace the component of `role` and re-establish every edge that
    /// touches it. Returns the released component.
    ///
    /// Not safe to race with other users of the same module; `&mut self`
    /// already rules that out in safe code.
    pub fn substitute(
        &mut self,
        role: ComponentKind,
        component: Component,
    ) -> Result<Component, SubstitutionError> {
        if component.kind() != role {
            return Err(SubstitutionError::RoleMismatch {
                role,
                supplied: component.kind(),
            });
        }
        self.ensure_wired()?;

        let type_label = component.type_label();
        let released = match component {
            Component::View(c) => Component::View(std::mem::replace(&mut self.view, c)),
            Component::Interactor(c) => {
                Component::Interactor(std::mem::replace(&mut self.interactor, c))
            }
            Component::Presenter(c) => {
                Component::Presenter(std::mem::replace(&mut self.presenter, c))
            }
            Component::Router(c) => Component::Router(std::mem::replace(&mut self.router, c)),
            Component::DisplayData(c) => {
                Component::DisplayData(std::mem::replace(&mut self.display_data, c))
            }
        };
        self.rewire(role, type_label);
        Ok(released)
    }

    /// Swap in a test double for the view. Returns the released view.
    pub fn inject_mock_view(
        &mut self,
        view: Box<dyn View>,
    ) -> Result<Box<dyn View>, SubstitutionError> {
        self.ensure_wired()?;
        let type_label = view.as_ref().type_label();
        let released = std::mem::replace(&mut self.view, view);
        self.rewire(ComponentKind::View, type_label);
        Ok(released)
    }

    pub fn report(&self) -> ModuleReport {
        ModuleReport {
            id: self.id,
            key: self.key.to_string(),
            components: ComponentKind::ALL
                .into_iter()
                .map(|kind| (kind, self.type_name(kind).to_string()))
                .collect(),
            substituted: ComponentKind::ALL
                .into_iter()
                .filter(|kind| self.is_substituted(*kind))
                .collect(),
            edges: Edge::WIRING_ORDER
                .into_iter()
                .map(|edge| EdgeReport {
                    edge,
                    connected: self.is_connected(edge),
                })
                .collect(),
        }
    }
}

impl fmt::Debug for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Module")
            .field("id", &self.id)
            .field("key", &self.key)
            .field("type_names", &self.type_names)
            .field("generations", &self.generations)
            .field("substituted", &self.substituted)
            .finish()
    }
}

/// Serializable view of a module's wiring.
///
/// `components` holds registry-qualified names (`App.LoginView`) for assembled
/// components and Rust type paths for the roles listed in `substituted`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleReport {
    pub id: ModuleId,
    pub key: String,
    pub components: BTreeMap<ComponentKind, String>,
    #[serde(default)]
    pub substituted: Vec<ComponentKind>,
    pub edges: Vec<EdgeReport>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeReport {
    pub edge: Edge,
    pub connected: bool,
}

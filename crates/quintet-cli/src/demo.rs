//! Sample components for the `login` and `profile` modules.

use quintet_core::components::{
    DisplayData, Interactor, InteractorLinks, Presenter, PresenterLinks, Router, RouterLinks,
    View, ViewLinks,
};
use quintet_core::domain::{KeyError, ModuleKey, Namespace};
use quintet_core::impls::{LayoutCatalog, TypeRegistry};

macro_rules! linked {
    ($name:ident, $role:ident, $links:ident) => {
        #[derive(Debug, Default)]
        pub struct $name {
            links: $links,
        }

        impl $role for $name {
            fn links(&self) -> &$links {
                &self.links
            }

            fn links_mut(&mut self) -> &mut $links {
                &mut self.links
            }
        }
    };
}

linked!(LoginView, View, ViewLinks);
linked!(LoginViewPad, View, ViewLinks);
linked!(LoginInteractor, Interactor, InteractorLinks);
linked!(LoginPresenter, Presenter, PresenterLinks);
linked!(LoginRouter, Router, RouterLinks);

linked!(ProfileView, View, ViewLinks);
linked!(ProfileInteractor, Interactor, InteractorLinks);
linked!(ProfilePresenter, Presenter, PresenterLinks);
linked!(ProfileRouter, Router, RouterLinks);

#[derive(Debug, Default)]
pub struct LoginDisplayData;

impl DisplayData for LoginDisplayData {}

#[derive(Debug, Default)]
pub struct ProfileDisplayData;

impl DisplayData for ProfileDisplayData {}

pub fn registry(namespace: Namespace) -> anyhow::Result<TypeRegistry> {
    let mut registry = TypeRegistry::new(namespace);
    registry
        .register_module::<LoginInteractor, LoginPresenter, LoginRouter, LoginDisplayData>(
            &login()?,
        )?
        .register_view("LoginViewPad")?
        .register_module::<ProfileInteractor, ProfilePresenter, ProfileRouter, ProfileDisplayData>(
            &profile()?,
        )?;
    Ok(registry)
}

pub fn layouts() -> LayoutCatalog {
    let mut catalog = LayoutCatalog::new();
    catalog
        .add::<LoginView>("Login", "LoginView")
        .add::<LoginViewPad>("Login", "LoginViewPad")
        .add::<ProfileView>("Profile", "ProfileView");
    catalog
}

pub fn login() -> Result<ModuleKey, KeyError> {
    ModuleKey::new("login")
}

pub fn profile() -> Result<ModuleKey, KeyError> {
    ModuleKey::new("profile")
}

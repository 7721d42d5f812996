//! ModuleAssembler - resolve, instantiate and wire one module.
//!
//! # Atomicity
//! 1. 5 つの役割すべての型を解決・検証する（ここでは何も生成しない）
//! 2. View を ViewFactory で、残り 4 つを default constructor で生成
//! 3. 7 本の edge を接続
//! 4. 完成した Module を返す
//!
//! どの段階で失敗しても呼び出し側にはエラーだけが返り、
//! 配線途中の Module が外に出ることはありません。

use std::sync::Arc;

use tracing::info;

use super::config::AssemblerConfig;
use super::module::{Module, Parts};
use super::resolver::TypeResolver;
use crate::components::{DisplayData, Interactor, Presenter, Router};
use crate::domain::{AssemblyError, ComponentKind, Edge, Environment, ModuleKey};
use crate::ports::{Provides, TypeHandle, TypeLookup, ViewFactory, ViewRequest};

/// Types resolved for every role, ready to instantiate.
struct Resolved {
    view: TypeHandle,
    interactor: fn() -> Box<dyn Interactor>,
    presenter: fn() -> Box<dyn Presenter>,
    router: fn() -> Box<dyn Router>,
    display_data: fn() -> Box<dyn DisplayData>,
    type_names: [String; 5],
}

fn mismatch(kind: ComponentKind, handle: &TypeHandle) -> AssemblyError {
    AssemblyError::TypeMismatch {
        kind,
        name: handle.identifier().to_string(),
        found: handle.kind(),
    }
}

/// Builds modules. Holds no per-module state, so one assembler can serve
/// any number of (concurrent) `assemble` calls.
#[derive(Debug, Clone)]
pub struct ModuleAssembler {
    resolver: TypeResolver,
}

impl ModuleAssembler {
    pub fn new(resolver: TypeResolver) -> Self {
        Self { resolver }
    }

    pub fn from_config(config: &AssemblerConfig, lookup: Arc<dyn TypeLookup>) -> Self {
        Self::new(TypeResolver::new(
            lookup,
            Arc::new(config.variant_resolver()),
            config.namespace(),
        ))
    }

    pub fn resolver(&self) -> &TypeResolver {
        &self.resolver
    }

    /// Resolve one role and check the type actually provides that role.
    pub fn resolve_role(
        &self,
        key: &ModuleKey,
        kind: ComponentKind,
        environment: &Environment,
    ) -> Result<TypeHandle, AssemblyError> {
        let handle = self.resolver.resolve(key, kind, environment)?;
        if handle.kind() != kind {
            return Err(mismatch(kind, &handle));
        }
        Ok(handle)
    }

    fn resolve_all(
        &self,
        key: &ModuleKey,
        environment: &Environment,
    ) -> Result<Resolved, AssemblyError> {
        let view = self.resolve_role(key, ComponentKind::View, environment)?;

        let interactor_type = self.resolve_role(key, ComponentKind::Interactor, environment)?;
        let Provides::Interactor(interactor) = interactor_type.provides() else {
            return Err(mismatch(ComponentKind::Interactor, &interactor_type));
        };

        let presenter_type = self.resolve_role(key, ComponentKind::Presenter, environment)?;
        let Provides::Presenter(presenter) = presenter_type.provides() else {
            return Err(mismatch(ComponentKind::Presenter, &presenter_type));
        };

        let router_type = self.resolve_role(key, ComponentKind::Router, environment)?;
        let Provides::Router(router) = router_type.provides() else {
            return Err(mismatch(ComponentKind::Router, &router_type));
        };

        let display_data_type = self.resolve_role(key, ComponentKind::DisplayData, environment)?;
        let Provides::DisplayData(display_data) = display_data_type.provides() else {
            return Err(mismatch(ComponentKind::DisplayData, &display_data_type));
        };

        let type_names = [
            &view,
            &interactor_type,
            &presenter_type,
            &router_type,
            &display_data_type,
        ]
        .map(|handle| handle.qualified_name().to_string());

        Ok(Resolved {
            view,
            interactor,
            presenter,
            router,
            display_data,
            type_names,
        })
    }

    /// Check that every role of `key` resolves, without instantiating anything.
    pub fn verify(&self, key: &ModuleKey, environment: &Environment) -> Result<(), AssemblyError> {
        self.resolve_all(key, environment).map(|_| ())
    }

    /// Build a fully wired module for `key`.
    pub fn assemble(
        &self,
        key: &ModuleKey,
        environment: &Environment,
        view_factory: &dyn ViewFactory,
    ) -> Result<Module, AssemblyError> {
        let resolved = self.resolve_all(key, environment)?;

        let view = view_factory.instantiate(&ViewRequest {
            handle: resolved.view,
            layout: key.layout_name(),
        })?;
        let parts = Parts {
            view,
            interactor: (resolved.interactor)(),
            presenter: (resolved.presenter)(),
            router: (resolved.router)(),
            display_data: (resolved.display_data)(),
            type_names: resolved.type_names,
        };

        let mut module = Module::from_parts(key.clone(), parts);
        for edge in Edge::WIRING_ORDER {
            module.connect(edge);
        }
        debug_assert!(module.is_fully_wired());

        info!(
            module = %key,
            id = %module.id(),
            view = module.type_name(ComponentKind::View),
            "module assembled"
        );
        Ok(module)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Link, View};
    use crate::domain::{Namespace, ViewInstantiationError};
    use crate::impls::{FormFactorVariants, LayoutCatalog, TypeRegistry};
    use crate::testing::{
        CountingViews, MockView, PlainViews, TestDisplayData, TestInteractor, TestPresenter,
        TestRouter, TestView, registry_with,
    };
    use std::sync::atomic::Ordering;

    fn assembler(registry: TypeRegistry) -> ModuleAssembler {
        let namespace = registry.namespace().clone();
        ModuleAssembler::new(TypeResolver::new(
            Arc::new(registry),
            Arc::new(FormFactorVariants::default()),
            namespace,
        ))
    }

    fn key(raw: &str) -> ModuleKey {
        ModuleKey::new(raw).unwrap()
    }

    #[test]
    fn assembled_module_is_fully_wired() {
        let module = assembler(registry_with(&["profile"]))
            .assemble(&key("profile"), &Environment::default(), &PlainViews)
            .unwrap();

        assert!(module.is_fully_wired());
        for edge in Edge::WIRING_ORDER {
            assert!(module.is_connected(edge), "{edge} not connected");
        }
    }

    #[test]
    fn profile_round_trip() {
        let module = assembler(registry_with(&["profile"]))
            .assemble(&key("profile"), &Environment::default(), &PlainViews)
            .unwrap();

        let interactor = module
            .follow(module.presenter().links().interactor.unwrap())
            .unwrap();
        assert!(std::ptr::addr_eq(interactor, module.interactor()));

        let presenter = module.follow(module.view().links().presenter.unwrap()).unwrap();
        assert!(std::ptr::addr_eq(presenter, module.presenter()));

        let presenter = module.follow(module.router().links().presenter.unwrap()).unwrap();
        assert!(std::ptr::addr_eq(presenter, module.presenter()));

        let display_data = module
            .follow(module.view().links().display_data.unwrap())
            .unwrap();
        assert!(std::ptr::addr_eq(display_data, module.display_data()));

        assert!(module.view_as::<TestView>().is_some());
        assert!(module.interactor_as::<TestInteractor>().is_some());
        assert!(module.presenter_as::<TestPresenter>().is_some());
        assert!(module.router_as::<TestRouter>().is_some());
        assert!(module.display_data_as::<TestDisplayData>().is_some());
        assert_eq!(module.type_name(ComponentKind::Presenter), "Test_App.ProfilePresenter");
    }

    #[test]
    fn missing_router_fails_without_building_anything() {
        let mut registry = TypeRegistry::new(Namespace::new("Test App"));
        registry
            .register_view("ProfileView")
            .unwrap()
            .register_interactor::<TestInteractor>("ProfileInteractor")
            .unwrap()
            .register_presenter::<TestPresenter>("ProfilePresenter")
            .unwrap()
            .register_display_data::<TestDisplayData>("ProfileDisplayData")
            .unwrap();
        let views = CountingViews::default();

        let err = assembler(registry)
            .assemble(&key("profile"), &Environment::default(), &views)
            .unwrap_err();

        assert!(matches!(
            err,
            AssemblyError::TypeNotFound { kind: ComponentKind::Router, ref name, .. } if name == "ProfileRouter"
        ));
        assert_eq!(views.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn wrong_capability_is_a_type_mismatch() {
        let mut registry = registry_with(&[]);
        registry
            .register_view("CartView")
            .unwrap()
            .register_interactor::<TestInteractor>("CartInteractor")
            .unwrap()
            .register_presenter::<TestPresenter>("CartPresenter")
            .unwrap()
            // router name, interactor constructor
            .register_interactor::<TestInteractor>("CartRouter")
            .unwrap()
            .register_display_data::<TestDisplayData>("CartDisplayData")
            .unwrap();

        let err = assembler(registry)
            .assemble(&key("cart"), &Environment::default(), &PlainViews)
            .unwrap_err();
        assert!(matches!(
            err,
            AssemblyError::TypeMismatch {
                kind: ComponentKind::Router,
                ref name,
                found: ComponentKind::Interactor
            } if name == "CartRouter"
        ));
    }

    #[test]
    fn variant_view_is_used_on_large_screens() {
        let mut registry = registry_with(&["login"]);
        registry.register_view("LoginViewPad").unwrap();
        let mut catalog = LayoutCatalog::new();
        catalog
            .add::<TestView>("Login", "LoginView")
            .add::<MockView>("Login", "LoginViewPad");

        let assembler = assembler(registry);
        let large = assembler
            .assemble(&key("login"), &Environment::large(), &catalog)
            .unwrap();
        assert!(large.view_as::<MockView>().is_some());
        assert_eq!(large.type_name(ComponentKind::View), "Test_App.LoginViewPad");

        let compact = assembler
            .assemble(&key("login"), &Environment::compact(), &catalog)
            .unwrap();
        assert!(compact.view_as::<TestView>().is_some());
    }

    #[test]
    fn missing_variant_falls_back_to_base_view() {
        let module = assembler(registry_with(&["login"]))
            .assemble(&key("login"), &Environment::large(), &PlainViews)
            .unwrap();
        assert_eq!(module.type_name(ComponentKind::View), "Test_App.LoginView");
        assert!(module.is_fully_wired());
    }

    #[test]
    fn view_factory_errors_propagate_verbatim() {
        let catalog = LayoutCatalog::new();
        let err = assembler(registry_with(&["login"]))
            .assemble(&key("login"), &Environment::default(), &catalog)
            .unwrap_err();
        assert!(matches!(
            err,
            AssemblyError::ViewInstantiation(ViewInstantiationError::MissingLayout(ref l)) if l == "Login"
        ));
    }

    #[test]
    fn view_factory_receives_layout_override() {
        let mut catalog = LayoutCatalog::new();
        catalog.add::<TestView>("Auth", "LoginView");

        let module = assembler(registry_with(&["login"]))
            .assemble(&key("login").with_layout("auth"), &Environment::default(), &catalog)
            .unwrap();
        assert!(module.view_as::<TestView>().is_some());
    }

    #[test]
    fn each_assembly_produces_an_independent_module() {
        let assembler = assembler(registry_with(&["profile"]));
        let a = assembler
            .assemble(&key("profile"), &Environment::default(), &PlainViews)
            .unwrap();
        let b = assembler
            .assemble(&key("profile"), &Environment::default(), &PlainViews)
            .unwrap();

        assert_ne!(a.id(), b.id());
        let foreign: Link<dyn View> = b.link_to();
        assert!(a.follow(foreign).is_none());
    }

    #[test]
    fn concurrent_assemblies_are_independent() {
        let assembler = assembler(registry_with(&["profile", "login"]));
        let modules: Vec<Module> = std::thread::scope(|scope| {
            let handles: Vec<_> = ["profile", "login", "profile", "login"]
                .into_iter()
                .map(|raw| {
                    let assembler = &assembler;
                    scope.spawn(move || {
                        assembler
                            .assemble(&key(raw), &Environment::default(), &PlainViews)
                            .unwrap()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(modules.len(), 4);
        assert!(modules.iter().all(Module::is_fully_wired));
        assert_ne!(modules[0].id(), modules[2].id());
    }

    #[test]
    fn substitution_after_assembly_keeps_invariants() {
        let mut module = assembler(registry_with(&["profile"]))
            .assemble(&key("profile"), &Environment::default(), &PlainViews)
            .unwrap();

        module.inject_mock_view(Box::new(MockView::default())).unwrap();

        let presenter = module.follow(module.view().links().presenter.unwrap()).unwrap();
        assert!(std::ptr::addr_eq(presenter, module.presenter()));
        let view = module.follow(module.presenter().links().view.unwrap()).unwrap();
        assert!(std::ptr::addr_eq(view, module.view()));
        assert!(module.view_as::<MockView>().is_some());
        assert!(module.is_fully_wired());
    }

    #[test]
    fn verify_checks_without_instantiating() {
        let assembler = assembler(registry_with(&["profile"]));
        assert!(assembler.verify(&key("profile"), &Environment::default()).is_ok());
        assert!(matches!(
            assembler.verify(&key("login"), &Environment::default()),
            Err(AssemblyError::TypeNotFound { kind: ComponentKind::View, .. })
        ));
    }

    #[test]
    fn from_config_applies_namespace_and_suffix() {
        let config = AssemblerConfig {
            namespace: "Shop App".into(),
            variant_suffix: "Wide".into(),
            ..AssemblerConfig::default()
        };
        let mut registry = TypeRegistry::new(config.namespace());
        registry
            .register_module::<TestInteractor, TestPresenter, TestRouter, TestDisplayData>(&key("cart"))
            .unwrap()
            .register_view("CartViewWide")
            .unwrap();

        let assembler = ModuleAssembler::from_config(&config, Arc::new(registry));
        let module = assembler
            .assemble(&key("cart"), &Environment::large(), &PlainViews)
            .unwrap();
        assert_eq!(module.type_name(ComponentKind::View), "Shop_App.CartViewWide");
    }

    #[test]
    fn closures_can_serve_as_view_factories() {
        let factory = |request: &ViewRequest| -> Result<Box<dyn View>, ViewInstantiationError> {
            assert_eq!(request.layout, "Profile");
            Ok(Box::new(MockView::default()))
        };
        let module = assembler(registry_with(&["profile"]))
            .assemble(&key("profile"), &Environment::default(), &factory)
            .unwrap();
        assert!(module.view_as::<MockView>().is_some());
    }
}

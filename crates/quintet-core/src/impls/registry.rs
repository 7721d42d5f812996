//! TypeRegistry - 型名 → TypeHandle の明示的レジストリ
//!
//! 実行時リフレクションの代わりに、起動時に型を登録します。
//! 構築後は読み取り専用なので、ロックなしで複数スレッドから参照できます。
//!
//! # 使用例
//! ```ignore
//! let mut registry = TypeRegistry::new(Namespace::new("My App"));
//! registry
//!     .register_view("LoginView")?
//!     .register_view("LoginViewPad")?
//!     .register_interactor::<LoginInteractor>("LoginInteractor")?;
//! ```

use std::collections::HashMap;

use crate::components::{DisplayData, Interactor, Presenter, Router};
use crate::domain::{ComponentKind, ModuleKey, Namespace, RegistryError};
use crate::ports::{Provides, TypeHandle, TypeLookup};

fn make_interactor<T: Interactor + Default>() -> Box<dyn Interactor> {
    Box::new(T::default())
}

fn make_presenter<T: Presenter + Default>() -> Box<dyn Presenter> {
    Box::new(T::default())
}

fn make_router<T: Router + Default>() -> Box<dyn Router> {
    Box::new(T::default())
}

fn make_display_data<T: DisplayData + Default>() -> Box<dyn DisplayData> {
    Box::new(T::default())
}

/// Registry of component types, keyed by namespace-qualified name.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    namespace: Namespace,
    types: HashMap<String, TypeHandle>,
}

impl TypeRegistry {
    pub fn new(namespace: Namespace) -> Self {
        Self {
            namespace,
            types: HashMap::new(),
        }
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// Register `name` (unqualified) inside this registry's namespace.
    pub fn register(&mut self, name: &str, provides: Provides) -> Result<&mut Self, RegistryError> {
        let qualified = self.namespace.qualify(name);
        if self.types.contains_key(&qualified) {
            return Err(RegistryError::AlreadyRegistered(qualified));
        }
        let handle = TypeHandle::new(qualified.as_str(), provides);
        self.types.insert(qualified, handle);
        Ok(self)
    }

    pub fn register_view(&mut self, name: &str) -> Result<&mut Self, RegistryError> {
        self.register(name, Provides::View)
    }

    pub fn register_interactor<T: Interactor + Default>(
        &mut self,
        name: &str,
    ) -> Result<&mut Self, RegistryError> {
        self.register(name, Provides::Interactor(make_interactor::<T>))
    }

    pub fn register_presenter<T: Presenter + Default>(
        &mut self,
        name: &str,
    ) -> Result<&mut Self, RegistryError> {
        self.register(name, Provides::Presenter(make_presenter::<T>))
    }

    pub fn register_router<T: Router + Default>(
        &mut self,
        name: &str,
    ) -> Result<&mut Self, RegistryError> {
        self.register(name, Provides::Router(make_router::<T>))
    }

    pub fn register_display_data<T: DisplayData + Default>(
        &mut self,
        name: &str,
    ) -> Result<&mut Self, RegistryError> {
        self.register(name, Provides::DisplayData(make_display_data::<T>))
    }

    /// Register all five roles of `key` under their conventional names.
    pub fn register_module<I, P, R, D>(&mut self, key: &ModuleKey) -> Result<&mut Self, RegistryError>
    where
        I: Interactor + Default,
        P: Presenter + Default,
        R: Router + Default,
        D: DisplayData + Default,
    {
        self.register_view(&key.base_name(ComponentKind::View))?
            .register_interactor::<I>(&key.base_name(ComponentKind::Interactor))?
            .register_presenter::<P>(&key.base_name(ComponentKind::Presenter))?
            .register_router::<R>(&key.base_name(ComponentKind::Router))?
            .register_display_data::<D>(&key.base_name(ComponentKind::DisplayData))
    }

    /// Qualified names of every registered type, sorted.
    pub fn registered_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.types.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl TypeLookup for TypeRegistry {
    fn lookup(&self, qualified_name: &str) -> Option<TypeHandle> {
        self.types.get(qualified_name).cloned()
    }
}

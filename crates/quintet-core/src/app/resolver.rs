//! TypeResolver - module key + role → concrete type.
//!
//! Naming convention:
//! - base name: `Capitalize(key) + Capitalize(role)` (e.g. `LoginPresenter`)
//! - view only: try `base + variant suffix` first, fall back to `base`
//! - the final name is qualified with the host namespace before lookup

use std::sync::Arc;

use tracing::debug;

use crate::domain::{AssemblyError, ComponentKind, Environment, ModuleKey, Namespace};
use crate::ports::{TypeHandle, TypeLookup, VariantResolver};

#[derive(Clone)]
pub struct TypeResolver {
    lookup: Arc<dyn TypeLookup>,
    variants: Arc<dyn VariantResolver>,
    namespace: Namespace,
}

impl TypeResolver {
    pub fn new(
        lookup: Arc<dyn TypeLookup>,
        variants: Arc<dyn VariantResolver>,
        namespace: Namespace,
    ) -> Self {
        Self {
            lookup,
            variants,
            namespace,
        }
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// Resolve the type for one role.
    ///
    /// A missing variant is not an error; a missing base type is
    /// `TypeNotFound`, whatever the environment.
    pub fn resolve(
        &self,
        key: &ModuleKey,
        kind: ComponentKind,
        environment: &Environment,
    ) -> Result<TypeHandle, AssemblyError> {
        let base = key.base_name(kind);

        if kind == ComponentKind::View {
            if let Some(suffix) = self.variants.variant_suffix(environment) {
                let variant = format!("{base}{suffix}");
                let qualified = self.namespace.qualify(&variant);
                if let Some(handle) = self.lookup.lookup(&qualified) {
                    debug!(module = %key, role = %kind, name = %qualified, variant = true, "resolved component type");
                    return Ok(handle);
                }
                debug!(module = %key, name = %qualified, "no variant registered, falling back to base type");
            }
        }

        let qualified = self.namespace.qualify(&base);
        match self.lookup.lookup(&qualified) {
            Some(handle) => {
                debug!(module = %key, role = %kind, name = %qualified, variant = false, "resolved component type");
                Ok(handle)
            }
            None => Err(AssemblyError::TypeNotFound {
                kind,
                name: base,
                qualified,
            }),
        }
    }
}

impl std::fmt::Debug for TypeResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeResolver")
            .field("namespace", &self.namespace)
            .finish_non_exhaustive()
    }
}

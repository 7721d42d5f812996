//! ViewFactory port - materializes views from a type handle.
//!
//! Views are not plain-constructed: the host loads them from a layout
//! resource keyed by the view type's identifier.

use crate::components::View;
use crate::domain::ViewInstantiationError;

use super::type_lookup::TypeHandle;

/// Everything a factory gets to build one view.
#[derive(Debug, Clone)]
pub struct ViewRequest {
    /// Resolved view type (possibly a form-factor variant).
    pub handle: TypeHandle,
    /// Capitalized layout resource name of the module.
    pub layout: String,
}

impl ViewRequest {
    pub fn identifier(&self) -> &str {
        self.handle.identifier()
    }
}

pub trait ViewFactory {
    fn instantiate(&self, request: &ViewRequest) -> Result<Box<dyn View>, ViewInstantiationError>;
}

impl<F> ViewFactory for F
where
    F: Fn(&ViewRequest) -> Result<Box<dyn View>, ViewInstantiationError>,
{
    fn instantiate(&self, request: &ViewRequest) -> Result<Box<dyn View>, ViewInstantiationError> {
        self(request)
    }
}

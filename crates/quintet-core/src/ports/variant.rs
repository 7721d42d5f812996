//! VariantResolver port - environment-dependent view variants.

use crate::domain::Environment;

/// Decides whether the view should prefer an alternate implementation.
///
/// Only the view role consults this. Returning a suffix does not guarantee a
/// variant exists: the resolver tries `Base + suffix` first and silently falls
/// back to `Base`.
pub trait VariantResolver: Send + Sync {
    fn variant_suffix(&self, environment: &Environment) -> Option<&str>;
}

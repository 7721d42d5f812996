//! LayoutCatalog - in-process stand-in for UI layout resources.
//!
//! A layout is named after its module (capitalized) and maps view identifiers
//! (unqualified type names) to constructors, so one layout can hold both the
//! base view and its form-factor variants.

use std::collections::HashMap;

use crate::components::View;
use crate::domain::ViewInstantiationError;
use crate::ports::{ViewFactory, ViewRequest};

fn make_view<T: View + Default>() -> Box<dyn View> {
    Box::new(T::default())
}

#[derive(Default)]
pub struct LayoutCatalog {
    layouts: HashMap<String, HashMap<String, fn() -> Box<dyn View>>>,
}

impl LayoutCatalog {
    pub fn new() -> Self {
        Self {
            layouts: HashMap::new(),
        }
    }

    /// Add view `identifier` to `layout`, built with `T::default()`.
    /// A later entry for the same identifier replaces the earlier one.
    pub fn add<T: View + Default>(&mut self, layout: &str, identifier: &str) -> &mut Self {
        self.layouts
            .entry(layout.to_string())
            .or_default()
            .insert(identifier.to_string(), make_view::<T>);
        self
    }

    pub fn layout_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.layouts.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl std::fmt::Debug for LayoutCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (layout, views) in &self.layouts {
            let mut identifiers: Vec<&String> = views.keys().collect();
            identifiers.sort();
            map.entry(layout, &identifiers);
        }
        map.finish()
    }
}

impl ViewFactory for LayoutCatalog {
    fn instantiate(&self, request: &ViewRequest) -> Result<Box<dyn View>, ViewInstantiationError> {
        let layout = self
            .layouts
            .get(&request.layout)
            .ok_or_else(|| ViewInstantiationError::MissingLayout(request.layout.clone()))?;
        let make = layout.get(request.identifier()).ok_or_else(|| {
            ViewInstantiationError::MissingIdentifier {
                layout: request.layout.clone(),
                identifier: request.identifier().to_string(),
            }
        })?;
        Ok(make())
    }
}

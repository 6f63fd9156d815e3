use std::collections::BTreeSet;

use crate::filter::{ConfigurationFilter, DependencyFilter};
use crate::source::ProjectSource;

/// Reduces a project's declared dependencies to a deduplicated set of
/// canonical coordinates.
///
/// Scopes are selected first, then their declarations are flattened, filtered
/// and canonicalized. An absent filter accepts everything, so a collector
/// built with `(None, None)` reports every declaration in the project.
pub struct DependencyCollector {
    configuration_filter: Option<ConfigurationFilter>,
    dependency_filter: Option<DependencyFilter>,
}

impl DependencyCollector {
    pub fn new(
        configuration_filter: Option<ConfigurationFilter>,
        dependency_filter: Option<DependencyFilter>,
    ) -> Self {
        Self {
            configuration_filter,
            dependency_filter,
        }
    }

    /// Collect coordinates from the current snapshot of `source`.
    ///
    /// Pure read: the result depends only on the source contents and the
    /// configured filters, and the source is never mutated. A scope with no
    /// dependencies contributes nothing.
    pub fn collect(&self, source: &dyn ProjectSource) -> BTreeSet<String> {
        source
            .scopes()
            .iter()
            .filter(|scope| {
                self.configuration_filter
                    .as_ref()
                    .map_or(true, |f| f.test(&scope.name))
            })
            .flat_map(|scope| scope.dependencies.iter())
            .filter(|dep| {
                self.dependency_filter
                    .as_ref()
                    .map_or(true, |f| f.test(dep))
            })
            .map(|dep| dep.coordinate())
            .collect()
    }
}

use anyhow::{Context, Result};
use regex::Regex;

use crate::models::DependencyDeclaration;

/// Boolean test over an individual dependency declaration.
///
/// Filters are pure function values: evaluating one has no side effects, and
/// the same declaration always yields the same answer.
pub struct DependencyFilter {
    test: Box<dyn Fn(&DependencyDeclaration) -> bool + Send + Sync>,
}

impl DependencyFilter {
    /// Predicate accepting declarations whose group matches `pattern`.
    ///
    /// An absent group is matched as the empty string, so it fails every
    /// non-empty pattern and passes only patterns that match "".
    pub fn of_group_regex(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .with_context(|| format!("invalid group regex '{pattern}'"))?;
        Ok(Self {
            test: Box::new(move |dep| regex.is_match(dep.group_str())),
        })
    }

    /// Combine two predicates into one that passes only declarations passing
    /// both. Evaluation short-circuits on the left operand; both operands are
    /// pure, so the order cannot change which declarations pass.
    pub fn and(self, other: DependencyFilter) -> Self {
        Self {
            test: Box::new(move |dep| (self.test)(dep) && (other.test)(dep)),
        }
    }

    pub fn test(&self, dep: &DependencyDeclaration) -> bool {
        (self.test)(dep)
    }

    /// Reduce a list of group regex patterns into a single predicate.
    ///
    /// Zero patterns means no filter at all (`None`, accept everything), one
    /// pattern is used as-is, and two or more are AND-combined left to right:
    /// a declaration must match ALL supplied patterns to pass.
    pub fn from_patterns(patterns: &[String]) -> Result<Option<Self>> {
        let mut filters = patterns.iter().map(|p| Self::of_group_regex(p));
        let Some(first) = filters.next() else {
            return Ok(None);
        };
        let mut combined = first?;
        for filter in filters {
            combined = combined.and(filter?);
        }
        Ok(Some(combined))
    }
}

/// Boolean test over a configuration scope name.
pub struct ConfigurationFilter {
    test: Box<dyn Fn(&str) -> bool + Send + Sync>,
}

impl ConfigurationFilter {
    /// Predicate accepting exactly the named scopes.
    pub fn of_names(names: Vec<String>) -> Self {
        Self {
            test: Box::new(move |name| names.iter().any(|n| n == name)),
        }
    }

    pub fn test(&self, scope_name: &str) -> bool {
        (self.test)(scope_name)
    }

    /// `None` when no scope names were given: every scope participates.
    pub fn from_names(names: &[String]) -> Option<Self> {
        if names.is_empty() {
            None
        } else {
            Some(Self::of_names(names.to_vec()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DependencyDeclaration;

    fn decl(group: Option<&str>) -> DependencyDeclaration {
        DependencyDeclaration::new(group, "artifact", Some("1.0"))
    }

    #[test]
    fn test_group_regex_matches() {
        let filter = DependencyFilter::of_group_regex(r"^com\.example.*").unwrap();
        assert!(filter.test(&decl(Some("com.example"))));
        assert!(filter.test(&decl(Some("com.example.core"))));
        assert!(!filter.test(&decl(Some("org.other"))));
    }

    #[test]
    fn test_absent_group_fails_non_empty_pattern() {
        let filter = DependencyFilter::of_group_regex(r"^com\..*").unwrap();
        assert!(!filter.test(&decl(None)));
    }

    #[test]
    fn test_absent_group_passes_empty_matching_pattern() {
        let filter = DependencyFilter::of_group_regex(r".*").unwrap();
        assert!(filter.test(&decl(None)));
    }

    #[test]
    fn test_and_requires_both() {
        let filter = DependencyFilter::of_group_regex(r"^com\..*")
            .unwrap()
            .and(DependencyFilter::of_group_regex(r".*\.core$").unwrap());
        assert!(filter.test(&decl(Some("com.example.core"))));
        assert!(!filter.test(&decl(Some("com.example.util"))));
        assert!(!filter.test(&decl(Some("org.example.core"))));
    }

    #[test]
    fn test_from_patterns_zero_means_no_filter() {
        assert!(DependencyFilter::from_patterns(&[]).unwrap().is_none());
    }

    #[test]
    fn test_from_patterns_single() {
        let filter = DependencyFilter::from_patterns(&[r"^com\..*".to_string()])
            .unwrap()
            .unwrap();
        assert!(filter.test(&decl(Some("com.example"))));
        assert!(!filter.test(&decl(Some("org.other"))));
    }

    #[test]
    fn test_from_patterns_multiple_conjoin() {
        let patterns = vec![r"^com\..*".to_string(), r".*\.core$".to_string()];
        let filter = DependencyFilter::from_patterns(&patterns).unwrap().unwrap();
        assert!(filter.test(&decl(Some("com.example.core"))));
        assert!(!filter.test(&decl(Some("com.example.util"))));
    }

    #[test]
    fn test_from_patterns_rejects_invalid_regex() {
        assert!(DependencyFilter::from_patterns(&["[".to_string()]).is_err());
    }

    #[test]
    fn test_configuration_filter_names() {
        let filter = ConfigurationFilter::of_names(vec![
            "implementation".to_string(),
            "api".to_string(),
        ]);
        assert!(filter.test("implementation"));
        assert!(filter.test("api"));
        assert!(!filter.test("testImplementation"));
    }

    #[test]
    fn test_configuration_filter_from_empty_names() {
        assert!(ConfigurationFilter::from_names(&[]).is_none());
    }
}

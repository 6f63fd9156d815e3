/// A single declared (unresolved) dependency, as written in the build definition.
///
/// This is a read-only snapshot: the build definition owns the data, the
/// collector only reads it. No resolution happens anywhere in this tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyDeclaration {
    pub group: Option<String>,
    pub name: String,
    pub version: Option<String>,
}

impl DependencyDeclaration {
    pub fn new(
        group: Option<impl Into<String>>,
        name: impl Into<String>,
        version: Option<impl Into<String>>,
    ) -> Self {
        Self {
            group: group.map(Into::into),
            name: name.into(),
            version: version.map(Into::into),
        }
    }

    /// Group as seen by filters and canonicalization: an absent group behaves
    /// like the empty string.
    pub fn group_str(&self) -> &str {
        self.group.as_deref().unwrap_or("")
    }

    /// Canonical coordinate string.
    ///
    /// `group:name:version` when a non-blank version is declared, otherwise
    /// `group:name` — no trailing separator and no placeholder token, so two
    /// declarations of the same (group, name, version) triple always produce
    /// the identical string.
    pub fn coordinate(&self) -> String {
        match self.version.as_deref() {
            Some(v) if !v.trim().is_empty() => {
                format!("{}:{}:{}", self.group_str(), self.name, v)
            }
            _ => format!("{}:{}", self.group_str(), self.name),
        }
    }
}

/// A named configuration scope and the dependencies declared under it.
#[derive(Debug, Clone)]
pub struct Scope {
    pub name: String,
    pub dependencies: Vec<DependencyDeclaration>,
}

/// Project identity, used to build the registration endpoint path.
#[derive(Debug, Clone)]
pub struct ProjectInfo {
    pub group: String,
    pub name: String,
    pub version: String,
}

use std::path::Path;

use anyhow::{anyhow, Result};
use regex::Regex;

use crate::models::{DependencyDeclaration, ProjectInfo, Scope};

/// Build definition read from `build.gradle` / `build.gradle.kts`.
///
/// Declarations are parsed textually, not evaluated: the declared (unresolved)
/// coordinates are all this tool needs, so running Gradle itself is avoided.
/// Both the Groovy shorthand (`implementation 'g:a:v'`), the parenthesized
/// Kotlin form (`implementation("g:a:v")`) and the map style
/// (`implementation group: 'g', name: 'a', version: 'v'`) are recognized,
/// grouped into scopes by configuration keyword.
pub struct GradleSource {
    project: ProjectInfo,
    scopes: Vec<Scope>,
}

impl GradleSource {
    /// Read the build definition rooted at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let build_file = ["build.gradle", "build.gradle.kts"]
            .iter()
            .map(|f| path.join(f))
            .find(|p| p.exists())
            .ok_or_else(|| {
                anyhow!(
                    "no build.gradle or build.gradle.kts found in {}",
                    path.display()
                )
            })?;

        let content = std::fs::read_to_string(&build_file)?;
        let scopes = parse_scopes(&content)?;
        let project = read_project_info(path, &content)?;

        Ok(Self { project, scopes })
    }
}

impl super::ProjectSource for GradleSource {
    fn project(&self) -> &ProjectInfo {
        &self.project
    }

    fn scopes(&self) -> &[Scope] {
        &self.scopes
    }
}

fn push_declaration(scopes: &mut Vec<Scope>, configuration: &str, dep: DependencyDeclaration) {
    match scopes.iter_mut().find(|s| s.name == configuration) {
        Some(scope) => scope.dependencies.push(dep),
        None => scopes.push(Scope {
            name: configuration.to_string(),
            dependencies: vec![dep],
        }),
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

/// Extract scoped dependency declarations from a build file body.
fn parse_scopes(content: &str) -> Result<Vec<Scope>> {
    let mut scopes: Vec<Scope> = Vec::new();

    // Matches: implementation 'group:artifact:version'
    //          implementation "group:artifact"
    //          implementation("group:artifact:version")
    let re_shorthand = Regex::new(
        r#"(?m)^\s*(\w+)\s*\(?\s*['"]([A-Za-z0-9._\-]*):([A-Za-z0-9._\-]+)(?::([^'"]*))?['"]\s*\)?"#,
    )?;

    for caps in re_shorthand.captures_iter(content) {
        let configuration = &caps[1];
        let group = non_empty(&caps[2]);
        let name = caps[3].to_string();
        let version = caps.get(4).and_then(|v| non_empty(v.as_str()));
        push_declaration(
            &mut scopes,
            configuration,
            DependencyDeclaration { group, name, version },
        );
    }

    // Matches: implementation group: 'com.example', name: 'foo', version: '1.0'
    // (version clause optional)
    let re_map = Regex::new(
        r#"(?m)^\s*(\w+)\s+group:\s*['"]([^'"]*)['"]\s*,\s*name:\s*['"]([^'"]+)['"](?:\s*,\s*version:\s*['"]([^'"]*)['"])?"#,
    )?;

    for caps in re_map.captures_iter(content) {
        let configuration = &caps[1];
        let group = non_empty(&caps[2]);
        let name = caps[3].to_string();
        let version = caps.get(4).and_then(|v| non_empty(v.as_str()));
        push_declaration(
            &mut scopes,
            configuration,
            DependencyDeclaration { group, name, version },
        );
    }

    Ok(scopes)
}

/// Determine project identity the way Gradle itself defaults it:
/// name from `settings.gradle(.kts)` or the directory name, group from a
/// top-level `group` assignment or empty, version from a top-level `version`
/// assignment or `unspecified`.
fn read_project_info(path: &Path, build_content: &str) -> Result<ProjectInfo> {
    let group = find_assignment(build_content, "group")?.unwrap_or_default();
    let version =
        find_assignment(build_content, "version")?.unwrap_or_else(|| "unspecified".to_string());

    let name = match settings_project_name(path)? {
        Some(name) => name,
        None => path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "unnamed".to_string()),
    };

    Ok(ProjectInfo { group, name, version })
}

/// Find a top-level `key = 'value'` (or Groovy `key 'value'`) assignment.
fn find_assignment(content: &str, key: &str) -> Result<Option<String>> {
    let re = Regex::new(&format!(r#"(?m)^\s*{key}\s*=?\s*['"]([^'"]+)['"]"#))?;
    Ok(re.captures(content).map(|caps| caps[1].to_string()))
}

/// Read `rootProject.name` from `settings.gradle` / `settings.gradle.kts`.
fn settings_project_name(path: &Path) -> Result<Option<String>> {
    let settings_file = ["settings.gradle", "settings.gradle.kts"]
        .iter()
        .map(|f| path.join(f))
        .find(|p| p.exists());

    let Some(settings_file) = settings_file else {
        return Ok(None);
    };

    let content = std::fs::read_to_string(&settings_file)?;
    let re = Regex::new(r#"rootProject\.name\s*=\s*['"]([^'"]+)['"]"#)?;
    Ok(re.captures(&content).map(|caps| caps[1].to_string()))
}

//! Read-only access to a project's build definition.
//!
//! The collector only needs three things from a build system: the project
//! identity, the named scopes, and the dependency declarations under each
//! scope. [`ProjectSource`] is that seam; [`gradle`] implements it for
//! Gradle build files.

pub mod gradle;

use crate::models::{ProjectInfo, Scope};

pub trait ProjectSource {
    fn project(&self) -> &ProjectInfo;
    fn scopes(&self) -> &[Scope];
}

//! Field rules.
//!
//! The built-in rules cover the identifiers our endpoints accept most often. Endpoints that need
//! something else can use [`PatternRule`] or [`FnRule`], or implement
//! [`FieldRule`](crate::FieldRule) directly.

mod azkaban_project;
mod custom;
mod git_sha;
mod kubernetes_name;

pub use azkaban_project::AzkabanProjectRule;
pub use custom::{FnRule, PatternRule};
pub use git_sha::GitShaRule;
pub use kubernetes_name::KubernetesNameRule;

//! Build configuration resolution.
//!
//! [`resolve`] turns a mode, an environment snapshot and a project layout into
//! a [`ResolvedConfig`]. It performs no I/O and emits no logs; callers that
//! want a diagnostic line log the returned record themselves.

use indexmap::IndexMap;

use crate::bundle::{
    build_defines, helpers::default_base_path, ChunkPlan, OutputSpec, ResolvedConfig, SOURCE_ALIAS,
};
use crate::env::{EnvironmentSnapshot, DEFAULT_ENV_PREFIX, PROJECT_ID_VAR};
use crate::mode::BuildMode;
use crate::project::ProjectLayout;

/// Resolve the build configuration for `mode`.
///
/// Missing variables fall back to defaults and unknown modes are treated as
/// not production, so this never fails.
///
/// # Example
///
/// ```
/// use kiln_config::{resolve, BuildMode, EnvironmentSnapshot, Minifier, ProjectLayout};
///
/// let project = ProjectLayout::new("/work/app");
/// let env = EnvironmentSnapshot::new().with("VITE_PROJECT_ID", "proj-42");
///
/// let config = resolve(&BuildMode::Development, &env, &project);
/// assert!(!config.is_production);
/// assert_eq!(config.project_id, "proj-42");
/// assert!(config.output.sourcemap);
/// assert_eq!(config.output.minify, Minifier::None);
/// ```
pub fn resolve(
    mode: &BuildMode,
    env: &EnvironmentSnapshot,
    project: &ProjectLayout,
) -> ResolvedConfig {
    let is_production = mode.is_production();
    let base_path = default_base_path();
    let project_id = env.get_or(PROJECT_ID_VAR, "").to_string();

    let mut path_aliases = IndexMap::new();
    path_aliases.insert(SOURCE_ALIAS.to_string(), project.source_path());

    let public_env = env.filter_prefix(DEFAULT_ENV_PREFIX);
    let defines = build_defines(mode, &base_path, &project_id, &public_env);

    let chunk_plan = ChunkPlan::default_vendor();
    let prebundle = chunk_plan.modules();

    ResolvedConfig {
        mode: mode.clone(),
        base_path,
        is_production,
        project_id,
        path_aliases,
        defines,
        output: OutputSpec::for_entry(project.entry_path(), is_production),
        chunk_plan,
        prebundle,
    }
}

/// Resolver bound to one project layout.
///
/// Holds no mutable state, so one instance can resolve several modes,
/// including from different threads.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    project: ProjectLayout,
}

impl ConfigResolver {
    pub fn new(project: ProjectLayout) -> Self {
        Self { project }
    }

    pub fn project(&self) -> &ProjectLayout {
        &self.project
    }

    pub fn resolve(&self, mode: &BuildMode, env: &EnvironmentSnapshot) -> ResolvedConfig {
        resolve(mode, env, &self.project)
    }
}

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Framework core, DOM renderer and router.
pub const UI_VENDOR_CHUNK: &str = "vendor";
pub const UI_VENDOR_MODULES: &[&str] = &["react", "react-dom", "react-router-dom"];

/// Hosted backend SDK.
pub const BACKEND_VENDOR_CHUNK: &str = "supabase";
pub const BACKEND_VENDOR_MODULES: &[&str] = &["@supabase/supabase-js"];

/// Vendor chunk splitting: chunk name → modules grouped into that chunk.
///
/// Every module belongs to at most one chunk. The plan can only be built
/// through [`ChunkPlan::from_groups`] or [`ChunkPlanBuilder`], both of which
/// reject overlaps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ChunkPlan {
    groups: IndexMap<String, Vec<String>>,
}

impl ChunkPlan {
    pub fn builder() -> ChunkPlanBuilder {
        ChunkPlanBuilder::default()
    }

    /// The two vendor groups every app build uses.
    pub fn default_vendor() -> Self {
        let groups: IndexMap<String, Vec<String>> = [
            (UI_VENDOR_CHUNK, UI_VENDOR_MODULES),
            (BACKEND_VENDOR_CHUNK, BACKEND_VENDOR_MODULES),
        ]
        .into_iter()
        .map(|(name, modules)| {
            let modules = modules.iter().map(|m| m.to_string()).collect();
            (name.to_string(), modules)
        })
        .collect();

        debug_assert!(
            check_partition(&groups).is_ok(),
            "vendor chunk constants must be disjoint"
        );
        Self { groups }
    }

    /// Re-check the partition rule.
    pub fn validate(&self) -> Result<()> {
        check_partition(&self.groups)
    }

    pub fn from_groups<I, N, M, S>(groups: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, M)>,
        N: Into<String>,
        M: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut builder = Self::builder();
        for (name, modules) in groups {
            builder.group(name, modules);
        }
        builder.build()
    }

    /// Name of the chunk `module` is assigned to, if any.
    pub fn chunk_for(&self, module: &str) -> Option<&str> {
        self.groups
            .iter()
            .find(|(_, modules)| modules.iter().any(|m| m == module))
            .map(|(name, _)| name.as_str())
    }

    pub fn get(&self, chunk: &str) -> Option<&[String]> {
        self.groups.get(chunk).map(Vec::as_slice)
    }

    /// Every grouped module, in chunk order.
    pub fn modules(&self) -> Vec<String> {
        self.groups.values().flatten().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups
            .iter()
            .map(|(name, modules)| (name.as_str(), modules.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl<'de> Deserialize<'de> for ChunkPlan {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let groups = IndexMap::<String, Vec<String>>::deserialize(deserializer)?;
        ChunkPlan::from_groups(groups).map_err(serde::de::Error::custom)
    }
}

/// Collects chunk groups and checks the partition rule on [`build`](Self::build).
///
/// Repeating a chunk name appends to the existing group.
#[derive(Debug, Default)]
pub struct ChunkPlanBuilder {
    groups: IndexMap<String, Vec<String>>,
}

impl ChunkPlanBuilder {
    pub fn group<N, M, S>(&mut self, name: N, modules: M) -> &mut Self
    where
        N: Into<String>,
        M: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups
            .entry(name.into())
            .or_default()
            .extend(modules.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> Result<ChunkPlan> {
        check_partition(&self.groups)?;
        Ok(ChunkPlan {
            groups: self.groups,
        })
    }
}

/// Chunk names are non-blank and no module appears twice.
fn check_partition(groups: &IndexMap<String, Vec<String>>) -> Result<()> {
    let mut owner: IndexMap<&str, &str> = IndexMap::new();

    for (name, modules) in groups {
        if name.trim().is_empty() {
            return Err(ConfigError::EmptyChunkName);
        }
        for module in modules {
            if let Some(first) = owner.insert(module.as_str(), name.as_str()) {
                return Err(ConfigError::OverlappingChunk {
                    module: module.clone(),
                    first: first.to_string(),
                    second: name.clone(),
                });
            }
        }
    }

    Ok(())
}

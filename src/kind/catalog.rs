//! On-disk list of kind descriptors.
//!
//! A catalog is a JSON document carrying a schema version and the kinds to
//! register. Loading checks the envelope only; per-kind validation is left to
//! the registry so both paths report the same errors.

use crate::kind::model::{Kind, KindInfo, StaticKind};
use crate::registry::KindRegistry;
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub const KIND_CATALOG_SCHEMA_VERSION: &str = "kind_catalog_v1";

/// Environment variable naming a catalog to load instead of the builtins.
pub const CATALOG_ENV: &str = "KINDEX_CATALOG";

#[derive(Clone, Debug, Deserialize)]
/// Kind catalog as stored on disk.
pub struct KindCatalog {
    pub schema_version: String,
    pub kinds: Vec<KindInfo>,
}

impl KindCatalog {
    /// Parse and check a catalog from JSON text.
    pub fn from_json(data: &str) -> Result<Self> {
        let catalog: KindCatalog =
            serde_json::from_str(data).context("parsing kind catalog")?;
        validate_schema_version(&catalog.schema_version)?;
        if catalog.kinds.is_empty() {
            bail!("kind catalog contains no kinds");
        }
        Ok(catalog)
    }

    pub fn to_kinds(&self) -> Vec<Arc<dyn Kind>> {
        self.kinds.iter().cloned().map(StaticKind::shared).collect()
    }

    /// Build a registry holding every kind in the catalog, or nothing at all.
    pub fn into_registry(self) -> Result<KindRegistry> {
        let registry = KindRegistry::with_kinds(self.to_kinds())?;
        Ok(registry)
    }
}

/// Read a kind catalog from disk.
pub fn load_kind_catalog_from_path(path: &Path) -> Result<KindCatalog> {
    let data =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    KindCatalog::from_json(&data).with_context(|| format!("loading {}", path.display()))
}

/// Catalog path requested through `KINDEX_CATALOG`, if any.
pub fn catalog_path_from_env() -> Option<PathBuf> {
    env::var_os(CATALOG_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn validate_schema_version(schema_version: &str) -> Result<()> {
    if schema_version.is_empty() {
        bail!("schema_version must not be empty");
    }

    if !schema_version
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
    {
        bail!(
            "schema_version must match ^[A-Za-z0-9_.-]+$, got {}",
            schema_version
        );
    }

    if schema_version != KIND_CATALOG_SCHEMA_VERSION {
        bail!(
            "schema_version '{}' is not supported (expected {})",
            schema_version,
            KIND_CATALOG_SCHEMA_VERSION
        );
    }

    Ok(())
}

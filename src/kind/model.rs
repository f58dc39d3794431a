//! Kind descriptors and the capability trait the registry stores.
//!
//! The registry only ever asks a kind to describe itself; anything that can
//! hand back a `KindInfo` is a kind. `StaticKind` is the plain data
//! implementation used by catalogs and the builtin set.

use crate::kind::identity::{KindCategory, KindId};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::sync::Arc;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// Immutable self-description of a kind.
pub struct KindInfo {
    pub id: KindId,
    #[serde(alias = "fileSuffix")]
    pub file_suffix: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<KindCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl KindInfo {
    pub fn new(id: impl Into<String>, file_suffix: impl Into<String>) -> Self {
        Self {
            id: KindId(id.into()),
            file_suffix: file_suffix.into(),
            category: None,
            description: None,
        }
    }

    pub fn with_category(mut self, category: KindCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Anything that can report an id and a file suffix.
pub trait Kind: Debug + Send + Sync {
    fn info(&self) -> &KindInfo;
}

#[derive(Clone, Debug, Eq, PartialEq)]
/// A kind that is nothing more than its descriptor.
pub struct StaticKind {
    info: KindInfo,
}

impl StaticKind {
    pub fn new(info: KindInfo) -> Self {
        Self { info }
    }

    /// Wrap the descriptor for storage in a registry.
    pub fn shared(info: KindInfo) -> Arc<dyn Kind> {
        Arc::new(Self::new(info))
    }
}

impl Kind for StaticKind {
    fn info(&self) -> &KindInfo {
        &self.info
    }
}

impl From<KindInfo> for StaticKind {
    fn from(info: KindInfo) -> Self {
        Self::new(info)
    }
}

/// Default kinds for dashboards, data files and images.
pub fn builtin_kinds() -> Vec<Arc<dyn Kind>> {
    [
        KindInfo::new("dashboard", "-dash.json"),
        KindInfo::new("alert", "-alert.json"),
        KindInfo::new("datasource", "-ds.json"),
        KindInfo::new("playlist", "-playlist.json"),
        KindInfo::new("annotation", "-anno.json").with_description("Single annotation event"),
        KindInfo::new("readme", "README.md"),
        KindInfo::new("folder", "__folder.json"),
        KindInfo::new("dataFrame", "-df.json").with_category(KindCategory::Data),
        KindInfo::new("dataQueryResponse", "-dqr.json")
            .with_category(KindCategory::Data)
            .with_description("query result format"),
        KindInfo::new("CSV", ".csv").with_category(KindCategory::Data),
        KindInfo::new("GeoJSON", ".geojson").with_category(KindCategory::Data),
        KindInfo::new("WorldMap location lookup", "-wm.json").with_category(KindCategory::Data),
        KindInfo::new("SVG", ".svg").with_category(KindCategory::Image),
        KindInfo::new("PNG", ".png").with_category(KindCategory::Image),
        KindInfo::new("JPEG", ".jpg").with_category(KindCategory::Image),
        KindInfo::new("GIF", ".gif").with_category(KindCategory::Image),
    ]
    .into_iter()
    .map(StaticKind::shared)
    .collect()
}

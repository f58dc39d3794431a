//! Kind descriptors and catalogs.
//!
//! Types here describe what a kind is (`KindInfo`, the `Kind` trait) and how
//! a list of kinds is loaded from disk. Registration and lookup live in
//! `crate::registry`.

pub mod catalog;
pub mod identity;
pub mod model;

pub use catalog::{
    CATALOG_ENV, KIND_CATALOG_SCHEMA_VERSION, KindCatalog, catalog_path_from_env,
    load_kind_catalog_from_path,
};
pub use identity::{KindCategory, KindId};
pub use model::{Kind, KindInfo, StaticKind, builtin_kinds};

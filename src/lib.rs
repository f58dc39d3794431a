//! Kind registry with suffix-based dispatch.
//!
//! A `KindRegistry` maps registered kinds (typed artifact definitions) to the
//! file names that belong to them. Each kind declares a file suffix such as
//! `-dash.json` or `.svg`; the registry indexes those suffixes in a reverse
//! token trie so an arbitrary path can be resolved back to the kind whose
//! suffix matches it most specifically.
//!
//! Registries are plain values: construct one explicitly, share it behind an
//! `Arc`, and register kinds from whichever component owns startup.

pub mod error;
pub mod kind;
pub mod registry;
pub mod suffix;

pub use error::{InvalidSuffixReason, RESERVED_SUFFIX_CHARS, ValidationError};
pub use kind::{
    CATALOG_ENV, KIND_CATALOG_SCHEMA_VERSION, Kind, KindCatalog, KindCategory, KindId, KindInfo,
    StaticKind, builtin_kinds, catalog_path_from_env, load_kind_catalog_from_path,
};
pub use registry::{KindRegistry, RegistryView};
pub use suffix::{InsertError, SuffixTree, file_name, tokenize_suffix};

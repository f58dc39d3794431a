use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;

/// Stable identifier for a registered kind (e.g., `dashboard`).
///
/// Ids are the primary key of the registry; two kinds may never share one.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KindId(pub String);

impl KindId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for KindId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for KindId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for KindId {
    fn from(value: &str) -> Self {
        KindId(value.to_string())
    }
}

/// Descriptive grouping for a kind. Not used for matching.
///
/// Known variants are read in either `data` or `Data` spelling and always
/// written lowercase; `Other` keeps unknown categories exactly as given.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum KindCategory {
    Data,
    Image,
    Other(String),
}

impl Serialize for KindCategory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for KindCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_str(&value))
    }
}

impl KindCategory {
    pub fn as_str(&self) -> &str {
        match self {
            KindCategory::Data => "data",
            KindCategory::Image => "image",
            KindCategory::Other(value) => value.as_str(),
        }
    }

    fn from_str(value: &str) -> Self {
        match value {
            "data" | "Data" => KindCategory::Data,
            "image" | "Image" => KindCategory::Image,
            other => KindCategory::Other(other.to_string()),
        }
    }
}

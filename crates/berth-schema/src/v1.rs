//! Embedded v1 schema dialect.
//!
//! The schema JSON lives under the [`RESERVED_ATTRIBUTES_KEY`] key inside
//! the artifact's configuration blob:
//!
//! ```json
//! {
//!     "schemaVersion": 1,
//!     "icon": "https://example.com/logo.png",
//!     "additions": [
//!         {
//!             "contentType": "text/plain; charset=utf-8",
//!             "name": "readme",
//!             "digest": "sha256:6dba1ad7ead7a5ee681441ec4b56b6a24690de6411d4574b927ce654c303f3c6"
//!         }
//!     ],
//!     "skipKeyList": [
//!         "metrics",
//!         "dataset"
//!     ]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Reserved top-level key in the configuration blob under which the schema
/// JSON is embedded.
pub const RESERVED_ATTRIBUTES_KEY: &str = "xBerthAttributes";

/// The single schema version this dialect supports.
pub const SCHEMA_VERSION_V1: i64 = 1;

/// Self-description schema driving metadata extraction and addition
/// resolution for an artifact.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// Schema dialect version; must equal [`SCHEMA_VERSION_V1`].
    #[serde(default)]
    pub schema_version: i64,

    /// Online icon URL for the artifact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Named side payloads backed by layer digests.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additions: Vec<AdditionSchema>,

    /// Configuration keys to redact from the extracted attribute map.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skip_key_list: Vec<String>,
}

impl Schema {
    /// Finds a declared addition by name.
    pub fn addition(&self, name: &str) -> Option<&AdditionSchema> {
        self.additions.iter().find(|add| add.name == name)
    }

    /// Names of all declared additions, in declaration order.
    pub fn addition_names(&self) -> Vec<String> {
        self.additions.iter().map(|add| add.name.clone()).collect()
    }
}

/// A single addition declaration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionSchema {
    /// Content type served alongside the addition bytes.
    #[serde(default)]
    pub content_type: String,
    /// Name the addition is requested by.
    #[serde(default)]
    pub name: String,
    /// Layer digest the addition content lives at, within the artifact's
    /// own repository.
    #[serde(default)]
    pub digest: String,
}

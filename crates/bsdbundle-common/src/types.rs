//! Mount declarations as they appear in an OCI runtime configuration.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One filesystem mount declared in a bundle's `config.json`.
///
/// Keys other than the four below (for example `uidMappings`) are kept
/// verbatim in [`Mount::extra`] and written back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mount {
    /// Mount point inside the container.
    pub destination: String,
    /// Filesystem type, empty when the document omits it.
    #[serde(
        rename = "type",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub typ: String,
    /// Source device or pseudo-device name.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub source: String,
    /// Mount flags in declaration order.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub options: Vec<String>,
    /// Unrecognized keys, passed through.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Reads an explicit `null` as the type's empty value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Mount {
    /// Creates a mount with no pass-through keys.
    #[must_use]
    pub fn new<I, S>(
        destination: impl Into<String>,
        typ: impl Into<String>,
        source: impl Into<String>,
        options: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            destination: destination.into(),
            typ: typ.into(),
            source: source.into(),
            options: options.into_iter().map(Into::into).collect(),
            extra: Map::new(),
        }
    }
}

impl fmt::Display for Mount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (type={}, source={}, options={})",
            self.destination,
            self.typ,
            self.source,
            self.options.join(",")
        )
    }
}

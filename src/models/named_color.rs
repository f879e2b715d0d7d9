//! Named colors from the reference catalog.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::RgbColor;

/// A color paired with its catalog name.
///
/// Serialized as `{"name": "...", "hex": "#RRGGBB"}`, the catalog file format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedColor {
    /// Unique display name (e.g., "Crimson")
    pub name: String,
    /// The color value
    #[serde(rename = "hex", with = "hex_string")]
    pub color: RgbColor,
}

impl NamedColor {
    /// Creates a named color.
    pub fn new(name: impl Into<String>, color: RgbColor) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }

    /// Canonical hex of the color.
    #[must_use]
    pub fn hex(&self) -> String {
        self.color.to_hex()
    }
}

mod hex_string {
    use super::{Deserialize, Deserializer, RgbColor, Serializer};

    pub fn serialize<S: Serializer>(color: &RgbColor, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&color.to_hex())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<RgbColor, D::Error> {
        let hex = String::deserialize(deserializer)?;
        RgbColor::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let crimson = NamedColor::new("Crimson", RgbColor::new(0xDC, 0x14, 0x3C));
        let json = serde_json::to_value(&crimson).unwrap();
        assert_eq!(json["name"], "Crimson");
        assert_eq!(json["hex"], "#DC143C");

        let parsed: NamedColor =
            serde_json::from_str(r##"{"name":"Azure","hex":"#f0ffff"}"##).unwrap();
        assert_eq!(parsed, NamedColor::new("Azure", RgbColor::new(240, 255, 255)));
    }

    #[test]
    fn test_bad_hex_rejected() {
        let parsed = serde_json::from_str::<NamedColor>(r##"{"name":"Bad","hex":"#12"}"##);
        assert!(parsed.is_err());
    }
}

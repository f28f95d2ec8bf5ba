use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Site conventions the generators apply.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TranslationProfile {
    /// VLAN id reserved for IP phones.
    pub voice_vlan: String,
    /// Port that is always rendered as a trunk on Aruba when it carries VLANs.
    pub uplink_port: String,
    /// Native VLAN used when a trunk has neither a native nor an access VLAN.
    pub default_native_vlan: String,
    /// Member/slot prefix for Aruba interface names.
    pub aruba_port_prefix: String,
}

impl Default for TranslationProfile {
    fn default() -> Self {
        Self {
            voice_vlan: "901".to_string(),
            uplink_port: "1".to_string(),
            default_native_vlan: "1".to_string(),
            aruba_port_prefix: "1/1/".to_string(),
        }
    }
}

/// Errors returned when loading profile files.
#[derive(Debug, Error)]
pub enum ProfileLoadError {
    #[error("failed to read profile file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse profile file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

/// Load a profile from a TOML file. Keys left out keep their defaults.
pub fn load_profile(path: &Path) -> Result<TranslationProfile, ProfileLoadError> {
    let raw = fs::read_to_string(path).map_err(|source| ProfileLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    parse_profile(&raw, path.display().to_string())
}

/// Profile shipped with the crate.
pub fn embedded_profile() -> TranslationProfile {
    let embedded = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/profiles/default.toml"
    ));
    parse_profile(embedded, "embedded profile".to_string()).unwrap_or_default()
}

fn parse_profile(raw: &str, path: String) -> Result<TranslationProfile, ProfileLoadError> {
    toml::from_str(raw).map_err(|source| ProfileLoadError::Parse { path, source })
}

/// Loading and saving the configuration file.
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Persisted configuration. There is one recognized option; unknown keys in
/// the file are ignored.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// When true, labels are uppercased before hashing so case variants of
    /// a label share one color. The displayed pill text is uppercased
    /// either way.
    #[serde(default)]
    pub case_insensitive: bool,
}

/// Returns the default settings path inside the user's config directory.
/// Falls back to `./pillbox.json` when no config dir is found.
pub fn default_settings_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_local_dir() {
        let pillbox_dir = config_dir.join("pillbox");
        fs::create_dir_all(&pillbox_dir).ok();
        pillbox_dir.join("config.json")
    } else {
        PathBuf::from("pillbox.json")
    }
}

/// Loads settings from `path`, defaulting when the file does not exist.
pub fn load(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Saves settings to `path` as pretty-printed JSON.
pub fn save(settings: &Settings, path: &Path) -> Result<()> {
    fs::write(path, serde_json::to_string_pretty(settings)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_defaults() {
        let path = std::env::temp_dir().join("pillbox-settings-missing.json");
        let _ = fs::remove_file(&path);
        let settings = load(&path).unwrap();
        assert!(!settings.case_insensitive);
    }

    #[test]
    fn save_and_load_round_trip() {
        let path = std::env::temp_dir().join("pillbox-settings-roundtrip.json");
        save(&Settings { case_insensitive: true }, &path).unwrap();
        let settings = load(&path).unwrap();
        assert!(settings.case_insensitive);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let settings: Settings =
            serde_json::from_str(r#"{"caseInsensitive": true, "legacyOption": 3}"#).unwrap();
        assert!(settings.case_insensitive);
    }

    #[test]
    fn field_uses_camel_case_on_disk() {
        let json = serde_json::to_string(&Settings { case_insensitive: true }).unwrap();
        assert!(json.contains("caseInsensitive"));
    }
}

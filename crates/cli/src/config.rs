//! CLI configuration utilities

use anyhow::Result;
use std::path::Path;
use taskdesk_core::Settings;

/// Save settings to a JSON file
pub fn save_settings<P: AsRef<Path>>(settings: &Settings, path: P) -> Result<()> {
    let content = serde_json::to_string_pretty(settings)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Generate a default configuration file
pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    save_settings(&Settings::default(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conf").join("taskdesk.json");

        generate_default_config(&path).unwrap();
        let loaded = Settings::load(Some(&path)).unwrap();

        let defaults = Settings::default();
        assert_eq!(loaded.routes, defaults.routes);
        assert_eq!(loaded.storage.token_file, defaults.storage.token_file);
    }
}

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub listen: String,
    pub database_path: String,
    pub uploads_dir: String,
    pub pages_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: "0.0.0.0:8000".to_string(),
            database_path: "./optiextract.db".to_string(),
            uploads_dir: "./uploaded_files".to_string(),
            pages_dir: "./pages".to_string(),
        }
    }
}

impl Config {
    /// Reads `config.toml` from the working directory, writing out the
    /// defaults first if the file does not exist yet.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    pub fn load_from(config_path: &Path) -> anyhow::Result<Self> {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .with_context(|| format!("failed to read {}", config_path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("failed to parse {}", config_path.display()))
        } else {
            let default_config = Config::default();
            let toml_string = toml::to_string_pretty(&default_config)
                .context("failed to serialize default config")?;
            std::fs::write(config_path, toml_string)
                .with_context(|| format!("failed to create {}", config_path.display()))?;
            Ok(default_config)
        }
    }

    pub fn page_path(&self, page: &str) -> PathBuf {
        Path::new(&self.pages_dir).join(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.listen, "0.0.0.0:8000");
        assert!(path.exists());

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.uploads_dir, cfg.uploads_dir);
        assert_eq!(reloaded.database_path, cfg.database_path);
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "uploads_dir = \"/srv/uploads\"\n").unwrap();

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.uploads_dir, "/srv/uploads");
        assert_eq!(cfg.listen, "0.0.0.0:8000");
        assert_eq!(cfg.pages_dir, "./pages");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "listen = [").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn page_path_joins_pages_dir() {
        let cfg = Config {
            pages_dir: "/var/www".into(),
            ..Config::default()
        };
        assert_eq!(cfg.page_path("upload.html"), PathBuf::from("/var/www/upload.html"));
    }
}

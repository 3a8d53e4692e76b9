//! Config file loading

use crate::domain::Config;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const SECTION: &str = "scad-customizer";

pub fn load_config(cwd: &Path, config_path: Option<&Path>) -> Result<Config> {
    let config_path_provided = config_path.is_some();

    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(cwd),
    };

    let Some(config_file) = discovered else {
        return Ok(Config::default());
    };

    tracing::debug!("Using config file {}", config_file.display());
    let content = fs::read_to_string(&config_file)
        .with_context(|| format!("Failed reading config file: {}", config_file.display()))?;

    let ext = config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

    let parsed = match ext.as_str() {
        "toml" => parse_toml_config(&content, &config_file),
        "yaml" | "yml" => parse_yaml_config(&content, &config_file),
        other => Err(anyhow::anyhow!(
            "Unsupported config extension '.{}' for file {}",
            other,
            config_file.display()
        )),
    };

    match parsed {
        Ok(cfg) => Ok(cfg),
        Err(e) if config_path_provided => Err(e),
        Err(e) => {
            // Auto-discovered: warn and fall back to defaults
            tracing::warn!(
                "Failed to parse auto-discovered config {}: {:#}",
                config_file.display(),
                e
            );
            Ok(Config::default())
        }
    }
}

/// Parse TOML config, optionally nested under a [scad-customizer] table.
fn parse_toml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: toml::Value = toml::from_str(content)
        .with_context(|| format!("Invalid TOML syntax: {}", config_file.display()))?;

    let config_val = match raw.get(SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    config_val.try_into().with_context(|| format!("Invalid TOML config: {}", config_file.display()))
}

/// Parse YAML config, optionally nested under a scad-customizer key.
fn parse_yaml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: serde_yaml::Value = serde_yaml::from_str(content)
        .with_context(|| format!("Invalid YAML syntax: {}", config_file.display()))?;

    let config_val = match raw.get(SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    serde_yaml::from_value(config_val)
        .with_context(|| format!("Invalid YAML config: {}", config_file.display()))
}

fn discover_config(cwd: &Path) -> Option<PathBuf> {
    let candidates = [
        "scad-customizer.toml",
        ".scad-customizer.toml",
        "scad-customizer.yml",
        ".scad-customizer.yml",
        "scad-customizer.yaml",
        ".scad-customizer.yaml",
    ];

    candidates.iter().map(|candidate| cwd.join(candidate)).find(|path| path.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_defaults_when_missing() {
        let tmp = TempDir::new().expect("tmp");
        let cfg = load_config(tmp.path(), None).expect("config");
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn test_load_discovered_toml_config() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(
            tmp.path().join("scad-customizer.toml"),
            "directories = ['flavours']\noutput = 'customizer.json'\n",
        )
        .expect("write");

        let cfg = load_config(tmp.path(), None).expect("config");
        assert_eq!(cfg.directories, vec![PathBuf::from("flavours")]);
        assert_eq!(cfg.output, Some(PathBuf::from("customizer.json")));
        assert!(!cfg.list);
    }

    #[test]
    fn test_load_nested_toml_section() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("project.toml");
        fs::write(&path, "[scad-customizer]\nlist = true\ninputs = ['a.yaml', 'b.json']\n")
            .expect("write");

        let cfg = load_config(tmp.path(), Some(&path)).expect("config");
        assert!(cfg.list);
        assert_eq!(cfg.inputs, vec![PathBuf::from("a.yaml"), PathBuf::from("b.json")]);
    }

    #[test]
    fn test_load_yaml_config() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join(".scad-customizer.yml"), "split: sets\n").expect("write");

        let cfg = load_config(tmp.path(), None).expect("config");
        assert_eq!(cfg.split, Some(PathBuf::from("sets")));
    }

    #[test]
    fn test_toml_preferred_over_yaml() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("scad-customizer.toml"), "list = true\n").expect("write");
        fs::write(tmp.path().join("scad-customizer.yml"), "split: sets\n").expect("write");

        let cfg = load_config(tmp.path(), None).expect("config");
        assert!(cfg.list);
        assert!(cfg.split.is_none());
    }

    #[test]
    fn test_explicit_config_unknown_key_returns_err() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("bad.toml");
        fs::write(&path, "outptu = 'typo.json'\n").expect("write");

        assert!(load_config(tmp.path(), Some(&path)).is_err());
    }

    #[test]
    fn test_explicit_config_invalid_type_returns_err() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("bad.yaml");
        fs::write(&path, "list: [1, 2]\n").expect("write");

        assert!(load_config(tmp.path(), Some(&path)).is_err());
    }

    #[test]
    fn test_explicit_config_unsupported_extension_returns_err() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("config.ini");
        fs::write(&path, "list=true\n").expect("write");

        let err = load_config(tmp.path(), Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Unsupported config extension"));
    }

    #[test]
    fn test_explicit_config_missing_file_returns_err() {
        let tmp = TempDir::new().expect("tmp");
        assert!(load_config(tmp.path(), Some(&tmp.path().join("nope.toml"))).is_err());
    }

    #[test]
    fn test_auto_discovered_invalid_config_returns_default() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("scad-customizer.toml"), "list = 'yes'\n").expect("write");

        let cfg = load_config(tmp.path(), None).expect("should not error on auto-discovery");
        assert_eq!(cfg, Config::default());
    }
}

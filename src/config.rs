//! Configuration file support for nupkg-graph.
//!
//! Provides TOML-based configuration through `nupkg-graph.toml` files,
//! including data structures, file loading, validation, and merging
//! with command-line arguments.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::cli::Args;
use crate::ports::outbound::ImageFormat;
use crate::shared::error::GraphError;
use crate::shared::Result;

const CONFIG_FILENAME: &str = "nupkg-graph.toml";

/// Default maximum traversal depth when neither the CLI nor the config
/// file specifies one.
pub const DEFAULT_MAX_DEPTH: i32 = 3;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub visualizer: VisualizerSection,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, toml::Value>,
}

/// The `[visualizer]` table of the configuration file.
#[derive(Debug, Deserialize, Default)]
pub struct VisualizerSection {
    pub package_name: Option<String>,
    pub output_image: Option<String>,
    pub max_depth: Option<i32>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, toml::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = toml::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid TOML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref package_name) = config.visualizer.package_name {
        if package_name.trim().is_empty() {
            bail!(
                "Invalid config: visualizer.package_name must not be empty.\n\n\
                 💡 Hint: Set package_name to the identifier of the package archive to inspect."
            );
        }
    }
    if let Some(ref output_image) = config.visualizer.output_image {
        if output_image.trim().is_empty() {
            bail!(
                "Invalid config: visualizer.output_image must not be empty.\n\n\
                 💡 Hint: Set output_image to the file the rendered graph should be written to."
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
    for key in config.visualizer.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field 'visualizer.{}' will be ignored.",
            key
        );
    }
}

/// Effective settings after merging CLI arguments over the config file.
/// CLI flags always win.
#[derive(Debug)]
pub struct Settings {
    pub package: String,
    pub output: PathBuf,
    pub max_depth: i32,
    pub format: ImageFormat,
}

impl Settings {
    pub fn resolve(args: &Args, config: Option<ConfigFile>) -> Result<Self> {
        let visualizer = config.map(|c| c.visualizer).unwrap_or_default();

        let package = args
            .package
            .clone()
            .or(visualizer.package_name)
            .ok_or(GraphError::PackageNotSpecified)?;

        let output = args
            .output
            .clone()
            .or(visualizer.output_image)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(format!("{}.png", package)));

        let max_depth = args
            .depth
            .or(visualizer.max_depth)
            .unwrap_or(DEFAULT_MAX_DEPTH);

        let format = match args.format {
            Some(format) => format,
            None => ImageFormat::from_path(&output),
        };

        Ok(Self {
            package,
            output,
            max_depth,
            format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn args_from(argv: &[&str]) -> Args {
        Args::parse_from(argv)
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(
            &config_path,
            r#"
[visualizer]
package_name = "Newtonsoft.Json"
output_image = "deps.png"
max_depth = 2
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(
            config.visualizer.package_name.as_deref(),
            Some("Newtonsoft.Json")
        );
        assert_eq!(config.visualizer.output_image.as_deref(), Some("deps.png"));
        assert_eq!(config.visualizer.max_depth, Some(2));
    }

    #[test]
    fn test_load_config_all_keys_optional() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "[visualizer]\nmax_depth = 5\n").unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert!(config.visualizer.package_name.is_none());
        assert!(config.visualizer.output_image.is_none());
        assert_eq!(config.visualizer.max_depth, Some(5));
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(CONFIG_FILENAME);
        fs::write(
            &config_path,
            r#"
[visualizer]
package_name = "Serilog"
"#,
        )
        .unwrap();

        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_some());
        assert_eq!(
            config.unwrap().visualizer.package_name.as_deref(),
            Some("Serilog")
        );
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.toml");
        fs::write(&config_path, "invalid toml [[[broken").unwrap();

        let result = load_config_from_path(&config_path);
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_empty_package_name_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(
            &config_path,
            r#"
[visualizer]
package_name = "   "
"#,
        )
        .unwrap();

        let result = load_config_from_path(&config_path);
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("must not be empty"));
    }

    #[test]
    fn test_settings_resolve_cli_only() {
        let args = args_from(&["nupkg-graph", "-p", "Serilog", "-o", "out.svg", "-d", "4"]);
        let settings = Settings::resolve(&args, None).unwrap();

        assert_eq!(settings.package, "Serilog");
        assert_eq!(settings.output, PathBuf::from("out.svg"));
        assert_eq!(settings.max_depth, 4);
        // Inferred from the output extension.
        assert_eq!(settings.format, ImageFormat::Svg);
    }

    #[test]
    fn test_settings_resolve_config_only() {
        let config: ConfigFile = toml::from_str(
            r#"
[visualizer]
package_name = "Serilog"
output_image = "graph.dot"
max_depth = 1
"#,
        )
        .unwrap();

        let args = args_from(&["nupkg-graph"]);
        let settings = Settings::resolve(&args, Some(config)).unwrap();

        assert_eq!(settings.package, "Serilog");
        assert_eq!(settings.output, PathBuf::from("graph.dot"));
        assert_eq!(settings.max_depth, 1);
        assert_eq!(settings.format, ImageFormat::Dot);
    }

    #[test]
    fn test_settings_resolve_cli_overrides_config() {
        let config: ConfigFile = toml::from_str(
            r#"
[visualizer]
package_name = "FromConfig"
output_image = "config.png"
max_depth = 1
"#,
        )
        .unwrap();

        let args = args_from(&["nupkg-graph", "-p", "FromCli", "-d", "9"]);
        let settings = Settings::resolve(&args, Some(config)).unwrap();

        assert_eq!(settings.package, "FromCli");
        // Output not set on the CLI, so the config value survives.
        assert_eq!(settings.output, PathBuf::from("config.png"));
        assert_eq!(settings.max_depth, 9);
    }

    #[test]
    fn test_settings_resolve_defaults() {
        let args = args_from(&["nupkg-graph", "-p", "Serilog"]);
        let settings = Settings::resolve(&args, None).unwrap();

        assert_eq!(settings.output, PathBuf::from("Serilog.png"));
        assert_eq!(settings.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(settings.format, ImageFormat::Png);
    }

    #[test]
    fn test_settings_resolve_explicit_format_wins_over_extension() {
        let args = args_from(&["nupkg-graph", "-p", "Serilog", "-o", "out.png", "-f", "dot"]);
        let settings = Settings::resolve(&args, None).unwrap();

        assert_eq!(settings.format, ImageFormat::Dot);
    }

    #[test]
    fn test_settings_resolve_no_package_anywhere() {
        let args = args_from(&["nupkg-graph"]);
        let result = Settings::resolve(&args, None);

        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("No target package specified"));
    }
}

//! Config command - show or initialize the configuration file

use crate::{
    cli::ConfigCommands,
    config::MetcatConfig,
    MetcatError,
};
use std::io::Write;
use std::path::Path;

type Result<T> = std::result::Result<T, MetcatError>;

/// Execute the config command against the file at `path`
///
/// # Errors
///
/// Returns `MetcatError::InvalidInput` when `init` would overwrite an
/// existing file without `--force`, `MetcatError::ConfigError` if the file
/// cannot be written, or `MetcatError::IoError` if output fails.
pub fn execute<W: Write>(
    config: &MetcatConfig,
    command: &ConfigCommands,
    path: &Path,
    out: &mut W,
    quiet: bool,
) -> Result<()> {
    match command {
        ConfigCommands::Path => {
            writeln!(out, "{}", path.display())?;
        }
        ConfigCommands::Show => {
            let rendered = toml::to_string_pretty(config)
                .map_err(|e| MetcatError::InvalidInput(format!("Failed to serialize config: {e}")))?;
            write!(out, "{rendered}")?;
        }
        ConfigCommands::Init { force } => {
            if path.exists() && !force {
                return Err(MetcatError::InvalidInput(format!(
                    "Config file already exists at {} (use --force to overwrite)",
                    path.display()
                )));
            }
            MetcatConfig::default().save_to(path)?;
            if !quiet {
                writeln!(out, "✓ Wrote default configuration to {}", path.display())?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let mut out = Vec::new();
        execute(
            &MetcatConfig::default(),
            &ConfigCommands::Path,
            Path::new("/tmp/metcat/config.toml"),
            &mut out,
            false,
        )
        .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "/tmp/metcat/config.toml\n");
    }

    #[test]
    fn test_config_show_is_toml() {
        let mut out = Vec::new();
        execute(
            &MetcatConfig::default(),
            &ConfigCommands::Show,
            Path::new("unused.toml"),
            &mut out,
            false,
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("favorites_key = \"@favorites\""));
        assert!(text.contains("page_size = 10"));
    }

    #[test]
    fn test_config_init_writes_defaults_once() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let init = ConfigCommands::Init { force: false };
        let config = MetcatConfig::default();

        let mut out = Vec::new();
        execute(&config, &init, &path, &mut out, true).unwrap();
        assert_eq!(MetcatConfig::load_from(&path).unwrap(), MetcatConfig::default());

        let err = execute(&config, &init, &path, &mut out, true).unwrap_err();
        assert!(matches!(err, MetcatError::InvalidInput(_)));

        execute(&config, &ConfigCommands::Init { force: true }, &path, &mut out, true).unwrap();
        assert!(out.is_empty());
    }
}

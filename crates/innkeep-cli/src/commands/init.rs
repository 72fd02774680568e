//! `innkeep init`: create a configuration file.

use std::path::Path;

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::{AppConfig, write_file},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Write the current settings (defaults plus `--api-url`) to the config file.
pub fn execute(
    args: InitArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let config_path = AppConfig::resolve_path(global.config.as_ref());
    output.info("Initialising configuration...")?;

    if config_path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
        return Ok(());
    }

    let mut initial = AppConfig::default();
    initial.api.base_url = config.api.base_url.clone();
    write_config(&config_path, &initial)?;

    output.success(&format!(
        "Configuration created at {}",
        config_path.display(),
    ))?;
    Ok(())
}

fn write_config(path: &Path, config: &AppConfig) -> CliResult<()> {
    let toml = toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;
    Ok(write_file(path, &toml)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn written_config_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut cfg = AppConfig::default();
        cfg.api.base_url = "https://hotels.test/api".into();

        write_config(&path, &cfg).unwrap();

        let loaded = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded.api.base_url, "https://hotels.test/api");
        assert_eq!(loaded.api.timeout_secs, 30);
    }
}

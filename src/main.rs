use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use usertally::config::{Config, ConfigError};
use usertally::logging::init_tracing;
use usertally::ui::runtime;

/// Terminal screen showing the total user count of the staging service.
#[derive(Debug, Parser)]
#[command(name = "usertally", version, about)]
struct Cli {
    /// Override the API base URL from the config file.
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Read configuration from this file instead of the default location.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().context("loading config")?,
    };
    apply_overrides(&mut config, &cli).context("applying command-line overrides")?;

    runtime::run(config).context("running UI")?;
    Ok(())
}

/// Command-line flags win over the config file.
fn apply_overrides(config: &mut Config, cli: &Cli) -> Result<(), ConfigError> {
    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
        config.validate()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_without_args() {
        let cli = Cli::try_parse_from(["usertally"]).unwrap();
        assert!(cli.base_url.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn parses_base_url_flag() {
        let cli =
            Cli::try_parse_from(["usertally", "--base-url", "http://localhost:9000/api/"]).unwrap();
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:9000/api/"));
    }

    #[test]
    fn base_url_flag_overrides_config() {
        let cli =
            Cli::try_parse_from(["usertally", "--base-url", "http://localhost:9000/api/"]).unwrap();
        let mut config = Config::default();

        apply_overrides(&mut config, &cli).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:9000/api/");
    }

    #[test]
    fn without_flags_config_is_untouched() {
        let cli = Cli::try_parse_from(["usertally"]).unwrap();
        let mut config = Config::default();

        apply_overrides(&mut config, &cli).unwrap();
        assert_eq!(config.api.base_url, usertally::api::DEFAULT_BASE_URL);
    }

    #[test]
    fn invalid_override_is_rejected() {
        let cli = Cli::try_parse_from(["usertally", "--base-url", "not-a-url"]).unwrap();
        let mut config = Config::default();

        assert!(apply_overrides(&mut config, &cli).is_err());
    }
}

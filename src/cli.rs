use std::path::PathBuf;

use clap::Parser;

/// Command line surface for the connectivity check.
#[derive(Debug, Parser)]
#[command(name = "snowflake-check", version, about)]
pub struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long, env = "CONFIG_PATH", default_value = "config.yaml")]
    pub config: PathBuf,

    /// Override the configured log level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::Args;
    use crate::utils::test_env;
    use clap::Parser;

    #[test]
    fn parses_config_path_and_log_level() {
        let args = Args::try_parse_from([
            "snowflake-check",
            "--config",
            "/etc/snowflake-check/config.yaml",
            "--log-level",
            "debug",
        ])
        .expect("args parse");

        assert_eq!(
            args.config.to_string_lossy(),
            "/etc/snowflake-check/config.yaml"
        );
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn defaults_to_config_yaml_in_cwd() {
        let _guard = test_env::lock();
        std::env::remove_var("CONFIG_PATH");
        let args = Args::try_parse_from(["snowflake-check"]).expect("args parse");
        assert_eq!(args.config.to_string_lossy(), "config.yaml");
        assert!(args.log_level.is_none());
    }
}

//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;

use clap::{Parser, ValueEnum};

use crate::api::DEFAULT_SERVER;
use crate::config::{Config, ConfigColorMode};

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser)]
#[command(name = "adminctl")]
#[command(about = "User and role administration client", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Server base URL (e.g. "http://localhost:8000")
    #[arg(short, long, global = true, value_name = "URL")]
    pub(crate) server: Option<String>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Show timestamps as relative times ("5 minutes ago")
    #[arg(short, long, global = true)]
    pub(crate) relative: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Timezone for timestamp display (e.g. "Asia/Shanghai", "UTC")
    #[arg(long, global = true, value_name = "TZ")]
    pub(crate) timezone: Option<String>,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if self.server.is_none() {
            self.server = config.server.clone();
        }
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }
        if !self.relative && config.relative {
            self.relative = true;
        }
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if let Some(color) = config.color
            && self.color == ColorMode::Auto
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }
        self
    }

    pub(crate) fn server_url(&self) -> &str {
        self.server.as_deref().unwrap_or(DEFAULT_SERVER)
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args.iter().copied()).expect("parse cli")
    }

    #[test]
    fn config_server_applies_when_flag_absent() {
        let config = Config {
            server: Some("http://intranet:9000".to_string()),
            ..Config::default()
        };
        let cli = parse(&["adminctl", "menu"]).with_config(&config);
        assert_eq!(cli.server_url(), "http://intranet:9000");
    }

    #[test]
    fn cli_server_wins_over_config() {
        let config = Config {
            server: Some("http://intranet:9000".to_string()),
            ..Config::default()
        };
        let cli = parse(&["adminctl", "menu", "--server", "http://other:1234"]).with_config(&config);
        assert_eq!(cli.server_url(), "http://other:1234");
    }

    #[test]
    fn default_server_used_without_flag_or_config() {
        let cli = parse(&["adminctl", "menu"]).with_config(&Config::default());
        assert_eq!(cli.server_url(), DEFAULT_SERVER);
    }

    #[test]
    fn no_color_flag_disables_color() {
        let cli = parse(&["adminctl", "menu", "--no-color", "--color", "always"]);
        assert!(!cli.use_color());
    }

    #[test]
    fn config_relative_applies() {
        let config = Config {
            relative: true,
            ..Config::default()
        };
        let cli = parse(&["adminctl", "menu"]).with_config(&config);
        assert!(cli.relative);
    }

    #[test]
    fn config_color_only_applies_at_auto() {
        let config = Config {
            color: Some(ConfigColorMode::Always),
            ..Config::default()
        };
        let cli = parse(&["adminctl", "menu", "--color", "never"]).with_config(&config);
        assert_eq!(cli.color, ColorMode::Never);

        let cli = parse(&["adminctl", "menu"]).with_config(&config);
        assert_eq!(cli.color, ColorMode::Always);
    }
}

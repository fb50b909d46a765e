// ~/quote-widget/src/cli.rs
// Command line switches layered over config.yaml.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::config::WidgetConfig;
use crate::quote::QuotePolicy;

#[derive(Parser, Debug, Default)]
#[command(author, version, about = "Daily quote sticky note for the desktop")]
pub struct Cli {
    /// Log info lines and mirror the log to stderr.
    #[arg(long, action = ArgAction::SetTrue)]
    pub debug: bool,

    /// Config file to use instead of config.yaml next to the executable.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the configured quote policy.
    #[arg(long, value_enum)]
    pub policy: Option<QuotePolicy>,

    /// Print today's quote and exit without opening the widget.
    #[arg(long, action = ArgAction::SetTrue)]
    pub print: bool,
}

impl Cli {
    pub fn apply_overrides(&self, cfg: &mut WidgetConfig) {
        if let Some(policy) = self.policy {
            cfg.quote_policy = policy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_open_the_widget() {
        let cli = Cli::try_parse_from(["quote-widget"]).unwrap();
        assert!(!cli.debug);
        assert!(!cli.print);
        assert!(cli.config.is_none());
        assert!(cli.policy.is_none());
    }

    #[test]
    fn policy_override_replaces_config() {
        let cli = Cli::try_parse_from(["quote-widget", "--policy", "cached-random", "--print"]).unwrap();
        let mut cfg = WidgetConfig {
            quote_policy: QuotePolicy::Remote,
            ..WidgetConfig::default()
        };
        cli.apply_overrides(&mut cfg);
        assert_eq!(cfg.quote_policy, QuotePolicy::CachedRandom);
        assert!(cli.print);
    }

    #[test]
    fn no_override_keeps_config() {
        let cli = Cli::try_parse_from(["quote-widget", "--config", "alt.yaml"]).unwrap();
        let mut cfg = WidgetConfig {
            quote_policy: QuotePolicy::Deterministic,
            ..WidgetConfig::default()
        };
        cli.apply_overrides(&mut cfg);
        assert_eq!(cfg.quote_policy, QuotePolicy::Deterministic);
        assert_eq!(cli.config, Some(PathBuf::from("alt.yaml")));
    }

    #[test]
    fn unknown_policy_is_rejected() {
        assert!(Cli::try_parse_from(["quote-widget", "--policy", "weekly"]).is_err());
    }
}

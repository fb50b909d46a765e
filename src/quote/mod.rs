// ~/quote-widget/src/quote/mod.rs
// Quote of the day: deterministic, cached random or remote lookup.

pub mod cache;
pub mod deterministic;
pub mod remote;

use std::path::Path;
use std::time::Duration;

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::config::WidgetConfig;
use crate::info;

pub const QUOTES: [&str; 5] = [
    "Believe in yourself!",
    "You can do hard things.",
    "Start before you're ready.",
    "Small steps every day lead to big results.",
    "Your future is created by what you do today.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum QuotePolicy {
    /// Same quote for everyone on a given day, no I/O.
    Deterministic,
    /// Random pick, remembered for the rest of the day.
    #[default]
    CachedRandom,
    /// Ask a quotes API, fixed fallback on any failure.
    Remote,
}

/// Today's quote under the configured policy. Never fails.
pub fn daily_quote(cfg: &WidgetConfig, root: &Path, today: NaiveDate) -> String {
    let quotes = cfg.quote_list();

    match cfg.quote_policy {
        QuotePolicy::Deterministic => {
            let quote = deterministic::quote_for_day(today, &quotes).to_string();
            info!("Deterministic quote for {today}: {quote}");
            quote
        }
        QuotePolicy::CachedRandom => {
            let path = cfg.cache_path(root);
            let (quote, outcome) =
                cache::cached_random_quote(&path, today, &quotes, &mut rand::thread_rng());
            info!("Cached quote for {today} ({outcome:?}): {quote}");
            quote
        }
        QuotePolicy::Remote => {
            let timeout = Duration::from_millis(cfg.remote_timeout_ms);
            remote::fetch_on_worker(&cfg.remote_url, timeout, &cfg.fallback_quote)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn deterministic_policy_is_reproducible() {
        let cfg = WidgetConfig {
            quote_policy: QuotePolicy::Deterministic,
            ..WidgetConfig::default()
        };
        let root = Path::new("unused");
        let today = day(2026, 10, 16);
        assert_eq!(daily_quote(&cfg, root, today), daily_quote(&cfg, root, today));
        assert!(QUOTES.contains(&daily_quote(&cfg, root, today).as_str()));
    }

    #[test]
    fn cached_policy_writes_under_root() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = WidgetConfig::default();
        let today = day(2026, 10, 16);

        let first = daily_quote(&cfg, dir.path(), today);
        assert!(dir.path().join("daily_quote.json").exists());
        assert_eq!(daily_quote(&cfg, dir.path(), today), first);
    }

    #[test]
    fn remote_policy_falls_back_on_unreachable_host() {
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let cfg = WidgetConfig {
            quote_policy: QuotePolicy::Remote,
            remote_url: format!("http://127.0.0.1:{port}/api/today"),
            remote_timeout_ms: 500,
            ..WidgetConfig::default()
        };
        let quote = daily_quote(&cfg, Path::new("unused"), day(2026, 1, 1));
        assert_eq!(quote, cfg.fallback_quote);
    }

    #[test]
    fn policy_names_match_config_spelling() {
        let yaml = serde_yaml::to_string(&QuotePolicy::CachedRandom).unwrap();
        assert_eq!(yaml.trim(), "cached_random");
        let parsed: QuotePolicy = serde_yaml::from_str("remote").unwrap();
        assert_eq!(parsed, QuotePolicy::Remote);
    }
}

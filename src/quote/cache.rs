// ~/quote-widget/src/quote/cache.rs

use std::fs::File;
use std::path::Path;

use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::QUOTES;
use crate::error::CacheError;
use crate::{info, warn};

/// The single persisted record: `{"date": "YYYY-MM-DD", "quote": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    pub date: String,
    pub quote: String,
}

impl QuoteRecord {
    pub fn new(day: NaiveDate, quote: impl Into<String>) -> Self {
        Self {
            date: iso_date(day),
            quote: quote.into(),
        }
    }

    pub fn is_for(&self, day: NaiveDate) -> bool {
        self.date == iso_date(day)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheOutcome {
    /// Same-day record reused, nothing written.
    Hit,
    /// Fresh pick written to disk.
    Stored,
    /// Fresh pick, but the write failed.
    Unpersisted,
}

fn iso_date(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

pub fn load_record(path: &Path) -> Result<QuoteRecord, CacheError> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(file)?)
}

pub fn save_record(path: &Path, record: &QuoteRecord) -> Result<(), CacheError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    serde_json::to_writer(file, record)?;
    Ok(())
}

/// Reuse today's record if there is one, otherwise pick at random and
/// remember the pick. Cache problems only cost persistence, never the quote.
pub fn cached_random_quote<R: Rng + ?Sized>(
    path: &Path,
    today: NaiveDate,
    quotes: &[String],
    rng: &mut R,
) -> (String, CacheOutcome) {
    match load_record(path) {
        Ok(record) if record.is_for(today) => return (record.quote, CacheOutcome::Hit),
        Ok(record) => info!("Cached quote is from {}, picking a new one", record.date),
        Err(CacheError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            info!("No quote cache at {}", path.display());
        }
        Err(e) => warn!("Ignoring quote cache {}: {e}", path.display()),
    }

    let quote = pick(quotes, rng);
    match save_record(path, &QuoteRecord::new(today, quote.clone())) {
        Ok(()) => (quote, CacheOutcome::Stored),
        Err(e) => {
            warn!("Could not persist quote cache {}: {e}", path.display());
            (quote, CacheOutcome::Unpersisted)
        }
    }
}

fn pick<R: Rng + ?Sized>(quotes: &[String], rng: &mut R) -> String {
    match quotes.choose(rng) {
        Some(q) => q.clone(),
        None => QUOTES.choose(rng).copied().unwrap_or(QUOTES[0]).to_string(),
    }
}

// ~/quote-widget/src/quote/deterministic.rs

use chrono::{Datelike, NaiveDate};

use super::QUOTES;

/// Day ordinal with 0001-01-01 as day 1.
pub fn day_ordinal(day: NaiveDate) -> i64 {
    i64::from(day.num_days_from_ce())
}

/// Pick `quotes[ordinal mod len]`. An empty list falls back to the built-ins.
pub fn quote_for_day(day: NaiveDate, quotes: &[String]) -> &str {
    if quotes.is_empty() {
        return QUOTES[index_for_day(day, QUOTES.len())];
    }
    &quotes[index_for_day(day, quotes.len())]
}

fn index_for_day(day: NaiveDate, len: usize) -> usize {
    day_ordinal(day).rem_euclid(len as i64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn builtin() -> Vec<String> {
        QUOTES.iter().map(|q| q.to_string()).collect()
    }

    #[test]
    fn ordinal_starts_at_one() {
        assert_eq!(day_ordinal(day(1, 1, 1)), 1);
        assert_eq!(day_ordinal(day(1, 1, 2)), 2);
        // 2000-01-01 has ordinal 730120
        assert_eq!(day_ordinal(day(2000, 1, 1)), 730_120);
    }

    #[test]
    fn index_is_ordinal_mod_len() {
        let quotes = builtin();
        let d = day(2000, 1, 1);
        assert_eq!(quote_for_day(d, &quotes), quotes[730_120 % 5]);
    }

    #[test]
    fn days_congruent_mod_len_share_a_quote() {
        let quotes = builtin();
        let start = day(2026, 3, 1);
        for offset in 0..40 {
            let a = start + chrono::Days::new(offset);
            let b = a + chrono::Days::new(quotes.len() as u64);
            assert_eq!(quote_for_day(a, &quotes), quote_for_day(b, &quotes));
        }
    }

    #[test]
    fn consecutive_days_cycle_the_whole_list() {
        let quotes = builtin();
        let start = day(2026, 10, 16);
        let seen: std::collections::HashSet<&str> = (0..quotes.len() as u64)
            .map(|i| quote_for_day(start + chrono::Days::new(i), &quotes))
            .collect();
        assert_eq!(seen.len(), quotes.len());
    }

    #[test]
    fn empty_list_uses_builtin_quotes() {
        let q = quote_for_day(day(2026, 10, 16), &[]);
        assert!(QUOTES.contains(&q));
    }
}

// ~/quote-widget/src/logging.rs

use std::{
    fs::OpenOptions,
    io::Write,
    path::PathBuf,
    sync::{
        atomic::{AtomicBool, Ordering},
        mpsc::{self, Sender},
        OnceLock,
    },
    thread,
};

use crate::paths::widget_root_dir;

/* =========================
   GLOBAL STATE
   ========================= */

static ENABLED: AtomicBool = AtomicBool::new(false);
static LOG_PATH: OnceLock<PathBuf> = OnceLock::new();
static LOG_TX: OnceLock<Sender<String>> = OnceLock::new();

const LOG_FILE_NAME: &str = "quote-widget.log";

/* =========================
   PUBLIC API
   ========================= */

/// Start the log writer. `debug` turns on `info!` lines and mirrors
/// every line to stderr. Calling it twice keeps the first writer.
pub fn init(debug: bool) {
    ENABLED.store(debug, Ordering::Relaxed);

    let (tx, rx) = mpsc::channel::<String>();
    if LOG_TX.set(tx).is_err() {
        return;
    }

    let path = log_path().clone();
    thread::spawn(move || {
        let mut file = match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => Some(file),
            Err(e) => {
                eprintln!("quote-widget: cannot open log file {}: {e}", path.display());
                None
            }
        };

        while let Ok(line) = rx.recv() {
            if enabled() {
                eprintln!("{line}");
            }
            if let Some(file) = file.as_mut() {
                let _ = writeln!(file, "{line}");
                let _ = file.flush();
            }
        }
    });
}

#[inline]
pub fn enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}

/* =========================
   INTERNAL
   ========================= */

#[inline]
pub fn enqueue(level: &str, msg: String) {
    if let Some(tx) = LOG_TX.get() {
        let _ = tx.send(format_line(level, &msg));
    }
}

fn format_line(level: &str, msg: &str) -> String {
    format!("{} [{level}] {msg}", timestamp())
}

fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string()
}

/* =========================
   MACROS
   ========================= */

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {{
        if $crate::logging::enabled() {
            $crate::logging::enqueue(
                "INFO",
                format!($($arg)*)
            );
        }
    }};
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {{
        $crate::logging::enqueue(
            "WARN",
            format!($($arg)*)
        );
    }};
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {{
        $crate::logging::enqueue(
            "ERROR",
            format!($($arg)*)
        );
    }};
}

/* =========================
   PATH
   ========================= */

fn log_path() -> &'static PathBuf {
    LOG_PATH.get_or_init(|| widget_root_dir().join(LOG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_carries_level_and_message() {
        let line = format_line("WARN", "cache miss");
        assert!(line.ends_with(" [WARN] cache miss"));
        // "YYYY-MM-DD HH:MM:SS.mmm"
        let ts = line.split(" [").next().unwrap_or_default();
        assert_eq!(ts.len(), 23);
    }

    #[test]
    fn enqueue_before_init_is_a_no_op() {
        enqueue("ERROR", "nobody listening".to_string());
        crate::warn!("still fine: {}", 1);
    }
}

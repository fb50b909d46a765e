// ~/quote-widget/src/widget/zorder.rs

use std::time::{Duration, Instant};

use crate::desktop::{HostWindowControl, NativeWindow};
use crate::{info, warn};

/// Periodically pushes the widget back to the bottom of the z-order.
#[derive(Debug)]
pub struct ZOrderEnforcer {
    interval: Duration,
    last_run: Option<Instant>,
    failing: bool,
}

impl ZOrderEnforcer {
    /// `None` when the interval is zero (enforcer disabled).
    pub fn new(interval: Duration) -> Option<Self> {
        if interval.is_zero() {
            info!("[ZOrder] Enforcer disabled");
            return None;
        }
        Some(Self {
            interval,
            last_run: None,
            failing: false,
        })
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// True on the first check, then once per elapsed interval.
    pub fn due(&mut self, now: Instant) -> bool {
        let due = match self.last_run {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.interval,
        };
        if due {
            self.last_run = Some(now);
        }
        due
    }

    /// Lower the window if due. Returns whether a request was issued.
    pub fn enforce(&mut self, host: &dyn HostWindowControl, window: NativeWindow, now: Instant) -> bool {
        if !self.due(now) {
            return false;
        }
        match host.lower_to_bottom(window) {
            Ok(()) => {
                if self.failing {
                    info!("[ZOrder] lower_to_bottom recovered");
                }
                self.failing = false;
            }
            Err(e) => {
                if !self.failing {
                    warn!("[ZOrder] lower_to_bottom failed: {e}");
                }
                self.failing = true;
            }
        }
        true
    }
}

// ~/quote-widget/src/desktop/mod.rs
// Pins the widget to the desktop layer through the host window manager.

#[cfg(windows)]
pub mod composition;
#[cfg(windows)]
pub mod win32;
pub mod unsupported;

use raw_window_handle::{HasWindowHandle, RawWindowHandle};

use crate::error::HostError;
use crate::{info, warn};

/// Raw native window handle (an HWND on Windows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NativeWindow(pub isize);

impl NativeWindow {
    /// Extract the native handle from a windowing toolkit object.
    pub fn from_handle_source(source: &impl HasWindowHandle) -> Option<Self> {
        let handle = source.window_handle().ok()?;
        match handle.as_raw() {
            RawWindowHandle::Win32(h) => Some(Self(h.hwnd.get())),
            other => {
                info!("[Desktop] No Win32 handle available ({other:?})");
                None
            }
        }
    }
}

/// Window-manager capabilities the widget relies on. Each call reports
/// success, an unsupported capability, or the OS refusing it.
pub trait HostWindowControl {
    fn name(&self) -> &'static str;

    /// The window sitting behind the desktop icons.
    fn find_background_host(&self) -> Result<NativeWindow, HostError>;

    fn reparent(&self, window: NativeWindow, host: NativeWindow) -> Result<(), HostError>;

    /// Layered-window alpha, 0 transparent to 255 opaque.
    fn set_translucency(&self, window: NativeWindow, alpha: u8) -> Result<(), HostError>;

    fn try_enable_blur(&self, window: NativeWindow) -> Result<(), HostError>;

    fn exclude_from_taskbar(&self, window: NativeWindow) -> Result<(), HostError>;

    /// Bottom of the z-order, no resize, no activation.
    fn lower_to_bottom(&self, window: NativeWindow) -> Result<(), HostError>;
}

/// Window manager for the running OS.
pub fn platform_host() -> Box<dyn HostWindowControl> {
    #[cfg(windows)]
    {
        Box::new(win32::Win32Host::new())
    }
    #[cfg(not(windows))]
    {
        Box::new(unsupported::UnsupportedHost)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttachOptions {
    pub blur: bool,
    pub alpha: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualEffect {
    Blur,
    Layered,
    None,
}

/// What the attach sequence actually managed to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttachReport {
    pub host_found: bool,
    pub reparented: bool,
    pub effect: VisualEffect,
    pub hidden_from_taskbar: bool,
}

/// One-shot desktop attachment. Every step is best effort: a failed step
/// is logged and the next one still runs.
pub fn attach_to_desktop(
    host: &dyn HostWindowControl,
    window: NativeWindow,
    options: AttachOptions,
) -> AttachReport {
    info!("[Desktop] Attaching window {:#x} via {}", window.0, host.name());

    let background = match host.find_background_host() {
        Ok(h) => {
            info!("[Desktop] Background host window {:#x}", h.0);
            Some(h)
        }
        Err(e) if e.is_unsupported() => {
            info!("[Desktop] {e}, staying in the normal window layer");
            None
        }
        Err(e) => {
            warn!("[Desktop] Staying in the normal window layer: {e}");
            None
        }
    };

    let reparented = match background {
        Some(parent) => match host.reparent(window, parent) {
            Ok(()) => true,
            Err(e) => {
                warn!("[Desktop] Reparent failed: {e}");
                false
            }
        },
        None => false,
    };

    let effect = apply_effect(host, window, options);

    let hidden_from_taskbar = match host.exclude_from_taskbar(window) {
        Ok(()) => true,
        Err(e) => {
            warn!("[Desktop] Could not hide from taskbar: {e}");
            false
        }
    };

    let report = AttachReport {
        host_found: background.is_some(),
        reparented,
        effect,
        hidden_from_taskbar,
    };
    info!("[Desktop] Attach finished: {report:?}");
    report
}

fn apply_effect(host: &dyn HostWindowControl, window: NativeWindow, options: AttachOptions) -> VisualEffect {
    if options.blur {
        match host.try_enable_blur(window) {
            Ok(()) => return VisualEffect::Blur,
            Err(e) => info!("[Desktop] Blur unavailable, using layered alpha: {e}"),
        }
    }

    match host.set_translucency(window, options.alpha) {
        Ok(()) => VisualEffect::Layered,
        Err(e) => {
            warn!("[Desktop] Translucency failed: {e}");
            VisualEffect::None
        }
    }
}

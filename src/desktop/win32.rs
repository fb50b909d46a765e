// ~/quote-widget/src/desktop/win32.rs

use std::cell::RefCell;
use std::ffi::c_void;

use windows::{
    core::{BOOL, PCWSTR},
    Win32::{
        Foundation::{COLORREF, HWND, LPARAM, WPARAM},
        UI::WindowsAndMessaging::{
            EnumWindows, FindWindowExW, FindWindowW, GetWindowLongW, SendMessageTimeoutW,
            SetLayeredWindowAttributes, SetParent, SetWindowLongW, SetWindowPos, GWL_EXSTYLE,
            HWND_BOTTOM, LWA_ALPHA, SMTO_NORMAL, SWP_NOACTIVATE, SWP_NOMOVE, SWP_NOSIZE,
            WINDOW_EX_STYLE, WS_EX_LAYERED, WS_EX_TOOLWINDOW,
        },
    },
};
use windows_strings::w;

use super::composition::{self, AccentState};
use super::{HostWindowControl, NativeWindow};
use crate::error::HostError;
use crate::{info, warn};

/// Progman message that makes Explorer spawn a WorkerW behind the icons.
const SPAWN_WORKERW: u32 = 0x052C;
const SPAWN_TIMEOUT_MS: u32 = 1000;

fn hwnd(window: NativeWindow) -> HWND {
    HWND(window.0 as *mut c_void)
}

fn native(hwnd: HWND) -> NativeWindow {
    NativeWindow(hwnd.0 as isize)
}

pub struct Win32Host;

impl Win32Host {
    pub fn new() -> Self {
        info!("[Win32] Window manager host initialized");
        Self
    }

    /// Top-level windows owning a SHELLDLL_DefView child (the icon host).
    unsafe fn windows_hosting_icons() -> Vec<HWND> {
        thread_local! {
            static ENUM_HANDLES: RefCell<Vec<HWND>> = const { RefCell::new(Vec::new()) };
        }

        unsafe extern "system" fn enum_proc(hwnd: HWND, _lparam: LPARAM) -> BOOL {
            if FindWindowExW(Some(hwnd), None, w!("SHELLDLL_DefView"), PCWSTR::null()).is_ok() {
                ENUM_HANDLES.with(|handles| handles.borrow_mut().push(hwnd));
            }
            BOOL::from(true)
        }

        ENUM_HANDLES.with(|handles| handles.borrow_mut().clear());
        let _ = EnumWindows(Some(enum_proc), LPARAM(0));
        ENUM_HANDLES.with(|handles| handles.borrow().clone())
    }

    unsafe fn add_ex_style(window: HWND, bits: WINDOW_EX_STYLE, op: &'static str) -> Result<(), HostError> {
        let current = GetWindowLongW(window, GWL_EXSTYLE);
        SetWindowLongW(window, GWL_EXSTYLE, current | bits.0 as i32);

        let applied = GetWindowLongW(window, GWL_EXSTYLE) as u32;
        if applied & bits.0 == bits.0 {
            Ok(())
        } else {
            Err(HostError::Refused { op })
        }
    }
}

impl HostWindowControl for Win32Host {
    fn name(&self) -> &'static str {
        "win32"
    }

    fn find_background_host(&self) -> Result<NativeWindow, HostError> {
        unsafe {
            let progman = FindWindowW(w!("Progman"), PCWSTR::null())
                .map_err(|_| HostError::NotFound("Progman window"))?;

            SendMessageTimeoutW(
                progman,
                SPAWN_WORKERW,
                WPARAM(0),
                LPARAM(0),
                SMTO_NORMAL,
                SPAWN_TIMEOUT_MS,
                None,
            );

            let candidates = Self::windows_hosting_icons();
            match candidates.first() {
                Some(&host) => {
                    info!("[Win32] {} icon host window(s), using {:?}", candidates.len(), host.0);
                    Ok(native(host))
                }
                None => {
                    warn!("[Win32] No WorkerW hosting the desktop icons, falling back to Progman");
                    Ok(native(progman))
                }
            }
        }
    }

    fn reparent(&self, window: NativeWindow, host: NativeWindow) -> Result<(), HostError> {
        unsafe {
            SetParent(hwnd(window), Some(hwnd(host)))
                .map(|_| ())
                .map_err(|source| HostError::Os { op: "SetParent", source })
        }
    }

    fn set_translucency(&self, window: NativeWindow, alpha: u8) -> Result<(), HostError> {
        unsafe {
            let h = hwnd(window);
            Self::add_ex_style(h, WS_EX_LAYERED, "WS_EX_LAYERED")?;
            SetLayeredWindowAttributes(h, COLORREF(0), alpha, LWA_ALPHA)
                .map_err(|source| HostError::Os { op: "SetLayeredWindowAttributes", source })
        }
    }

    fn try_enable_blur(&self, window: NativeWindow) -> Result<(), HostError> {
        if !composition::is_available() {
            return Err(HostError::Unsupported("SetWindowCompositionAttribute"));
        }

        let h = hwnd(window);
        if composition::apply_accent(h, AccentState::AcrylicBlurBehind)
            || composition::apply_accent(h, AccentState::BlurBehind)
        {
            Ok(())
        } else {
            Err(HostError::Refused { op: "SetWindowCompositionAttribute" })
        }
    }

    fn exclude_from_taskbar(&self, window: NativeWindow) -> Result<(), HostError> {
        unsafe { Self::add_ex_style(hwnd(window), WS_EX_TOOLWINDOW, "WS_EX_TOOLWINDOW") }
    }

    fn lower_to_bottom(&self, window: NativeWindow) -> Result<(), HostError> {
        unsafe {
            SetWindowPos(
                hwnd(window),
                Some(HWND_BOTTOM),
                0,
                0,
                0,
                0,
                SWP_NOMOVE | SWP_NOSIZE | SWP_NOACTIVATE,
            )
            .map_err(|source| HostError::Os { op: "SetWindowPos", source })
        }
    }
}

// ~/quote-widget/src/desktop/composition.rs
// Undocumented user32 SetWindowCompositionAttribute, resolved at runtime.

use std::ffi::c_void;
use std::sync::OnceLock;

use windows::{
    core::BOOL,
    Win32::{
        Foundation::HWND,
        System::LibraryLoader::{GetModuleHandleW, GetProcAddress},
    },
};
use windows_strings::{s, w};

use crate::{info, warn};

const WCA_ACCENT_POLICY: i32 = 19;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum AccentState {
    BlurBehind = 3,
    AcrylicBlurBehind = 4,
}

/// Tint for acrylic, 0xAABBGGRR.
const ACRYLIC_TINT: u32 = 0x99FF_FFFF;

#[repr(C)]
struct AccentPolicy {
    accent_state: i32,
    accent_flags: i32,
    gradient_color: u32,
    animation_id: i32,
}

#[repr(C)]
struct WindowCompositionAttribData {
    attribute: i32,
    data: *mut c_void,
    size_of_data: usize,
}

type SetWindowCompositionAttributeFn =
    unsafe extern "system" fn(HWND, *mut WindowCompositionAttribData) -> BOOL;

static SET_WCA: OnceLock<Option<SetWindowCompositionAttributeFn>> = OnceLock::new();

fn set_window_composition_attribute() -> Option<SetWindowCompositionAttributeFn> {
    *SET_WCA.get_or_init(|| unsafe {
        let user32 = match GetModuleHandleW(w!("user32.dll")) {
            Ok(m) => m,
            Err(e) => {
                warn!("[Composition] user32.dll not loaded: {e}");
                return None;
            }
        };
        match GetProcAddress(user32, s!("SetWindowCompositionAttribute")) {
            Some(proc) => {
                info!("[Composition] SetWindowCompositionAttribute resolved");
                Some(std::mem::transmute::<
                    unsafe extern "system" fn() -> isize,
                    SetWindowCompositionAttributeFn,
                >(proc))
            }
            None => {
                info!("[Composition] SetWindowCompositionAttribute not exported");
                None
            }
        }
    })
}

pub fn is_available() -> bool {
    set_window_composition_attribute().is_some()
}

/// Apply an accent policy. `false` when the call is missing or refused.
pub fn apply_accent(hwnd: HWND, state: AccentState) -> bool {
    let Some(set_wca) = set_window_composition_attribute() else {
        return false;
    };

    let mut accent = AccentPolicy {
        accent_state: state as i32,
        accent_flags: 0,
        gradient_color: if state == AccentState::AcrylicBlurBehind { ACRYLIC_TINT } else { 0 },
        animation_id: 0,
    };
    let mut data = WindowCompositionAttribData {
        attribute: WCA_ACCENT_POLICY,
        data: &mut accent as *mut AccentPolicy as *mut c_void,
        size_of_data: std::mem::size_of::<AccentPolicy>(),
    };

    let ok = unsafe { set_wca(hwnd, &mut data) }.as_bool();
    info!("[Composition] Accent {:?} -> {}", state, ok);
    ok
}

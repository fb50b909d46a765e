// ~/quote-widget/src/desktop/unsupported.rs

use super::{HostWindowControl, NativeWindow};
use crate::error::HostError;

/// Stand-in for platforms without a desktop-layer implementation.
/// Every capability reports itself as missing.
pub struct UnsupportedHost;

impl HostWindowControl for UnsupportedHost {
    fn name(&self) -> &'static str {
        "unsupported"
    }

    fn find_background_host(&self) -> Result<NativeWindow, HostError> {
        Err(HostError::Unsupported("find_background_host"))
    }

    fn reparent(&self, _window: NativeWindow, _host: NativeWindow) -> Result<(), HostError> {
        Err(HostError::Unsupported("reparent"))
    }

    fn set_translucency(&self, _window: NativeWindow, _alpha: u8) -> Result<(), HostError> {
        Err(HostError::Unsupported("set_translucency"))
    }

    fn try_enable_blur(&self, _window: NativeWindow) -> Result<(), HostError> {
        Err(HostError::Unsupported("try_enable_blur"))
    }

    fn exclude_from_taskbar(&self, _window: NativeWindow) -> Result<(), HostError> {
        Err(HostError::Unsupported("exclude_from_taskbar"))
    }

    fn lower_to_bottom(&self, _window: NativeWindow) -> Result<(), HostError> {
        Err(HostError::Unsupported("lower_to_bottom"))
    }
}

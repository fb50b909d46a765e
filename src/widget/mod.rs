// ~/quote-widget/src/widget/mod.rs
pub mod app;
pub mod drag;
pub mod layout;
pub mod render;
pub mod zorder;

pub use app::run_widget;

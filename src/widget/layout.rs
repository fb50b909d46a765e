// ~/quote-widget/src/widget/layout.rs

use eframe::egui::{pos2, vec2, Pos2, Rect, Vec2};

pub const CARD_WIDTH: f32 = 360.0;
pub const CARD_HEIGHT: f32 = 140.0;
pub const CORNER_RADIUS: u8 = 20;

pub const TEXT_WRAP_WIDTH: f32 = 300.0;
/// Quote sits slightly above the vertical middle.
pub const TEXT_LIFT: f32 = 6.0;

/// Close glyph centre, measured from the top-right corner.
pub const CLOSE_INSET: f32 = 26.0;
pub const CLOSE_HIT_RADIUS: f32 = 18.0;

pub const SHADOW_OFFSET: f32 = 4.0;

/// Used until the monitor size is known.
pub const DEFAULT_POSITION: Pos2 = pos2(50.0, 50.0);

pub fn card_size() -> Vec2 {
    vec2(CARD_WIDTH, CARD_HEIGHT)
}

pub fn close_center() -> Pos2 {
    pos2(CARD_WIDTH - CLOSE_INSET, CLOSE_INSET)
}

/// Whether a window-local point lands on the close glyph.
pub fn hits_close(local: Pos2) -> bool {
    local.distance_sq(close_center()) <= CLOSE_HIT_RADIUS * CLOSE_HIT_RADIUS
}

/// Card and (optional) shadow rectangles inside the fixed window.
pub fn card_rects(window: Rect, shadow: bool) -> (Rect, Option<Rect>) {
    if !shadow {
        return (window, None);
    }
    let card = Rect::from_min_max(window.min, window.max - vec2(SHADOW_OFFSET, SHADOW_OFFSET));
    let shadow = card.translate(vec2(SHADOW_OFFSET, SHADOW_OFFSET));
    (card, Some(shadow))
}

pub fn text_anchor(card: Rect) -> Pos2 {
    card.center() - vec2(0.0, TEXT_LIFT)
}

/// Bottom-right placement with the given margins.
pub fn initial_position(monitor: Option<Vec2>, margin_right: f32, margin_bottom: f32) -> Pos2 {
    match monitor {
        Some(size) => pos2(
            (size.x - margin_right - CARD_WIDTH).max(0.0),
            (size.y - margin_bottom - CARD_HEIGHT).max(0.0),
        ),
        None => DEFAULT_POSITION,
    }
}

// ~/quote-widget/src/widget/render.rs

use std::path::PathBuf;
use std::sync::Arc;

use eframe::egui::{
    text::LayoutJob, Align, Align2, Color32, Context, CornerRadius, FontData, FontDefinitions,
    FontFamily, FontId, Painter, Rect,
};

use super::layout::{card_rects, close_center, text_anchor, CORNER_RADIUS, TEXT_WRAP_WIDTH};
use crate::{info, warn};

const BASE_FILL: Color32 = Color32::from_rgb(0xEA, 0xF6, 0xFF);
// Premultiplied white at ~25% alpha, the frosted layer.
const GLASS_OVERLAY: Color32 = Color32::from_rgba_premultiplied(64, 64, 64, 64);
const SHADOW_FILL: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 60);
const QUOTE_COLOR: Color32 = Color32::WHITE;
const CLOSE_COLOR: Color32 = Color32::from_rgb(0x2A, 0x2A, 0x2A);

const QUOTE_SIZE: f32 = 16.0;
const CLOSE_SIZE: f32 = 24.0;
const CLOSE_GLYPH: &str = "\u{00D7}";

const QUOTE_FONT_KEY: &str = "quote_bold";

#[derive(Debug, Clone, Copy, Default)]
pub struct CardStyle {
    pub shadow: bool,
}

/// Draw the whole card. Stateless, so repainting is idempotent.
pub fn paint_card(painter: &Painter, window: Rect, quote: &str, style: CardStyle) {
    let radius = CornerRadius::same(CORNER_RADIUS);
    let (card, shadow) = card_rects(window, style.shadow);

    if let Some(shadow) = shadow {
        painter.rect_filled(shadow, radius, SHADOW_FILL);
    }
    painter.rect_filled(card, radius, BASE_FILL);
    painter.rect_filled(card, radius, GLASS_OVERLAY);

    let mut job = LayoutJob::simple(
        quote.to_owned(),
        FontId::proportional(QUOTE_SIZE),
        QUOTE_COLOR,
        TEXT_WRAP_WIDTH,
    );
    job.halign = Align::Center;
    let galley = painter.layout_job(job);
    let pos = text_anchor(card) - galley.rect.center().to_vec2();
    painter.galley(pos, galley, QUOTE_COLOR);

    painter.text(
        close_center(),
        Align2::CENTER_CENTER,
        CLOSE_GLYPH,
        FontId::proportional(CLOSE_SIZE),
        CLOSE_COLOR,
    );
}

fn system_font_path() -> Option<PathBuf> {
    if cfg!(windows) {
        let windir = std::env::var_os("WINDIR").unwrap_or_else(|| "C:\\Windows".into());
        Some(PathBuf::from(windir).join("Fonts").join("segoeuib.ttf"))
    } else {
        None
    }
}

/// Prefer Segoe UI Bold for the quote when the system has it.
pub fn install_fonts(ctx: &Context) {
    let Some(path) = system_font_path() else {
        return;
    };

    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("[Render] Keeping default fonts, cannot read {}: {e}", path.display());
            return;
        }
    };

    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(QUOTE_FONT_KEY.to_owned(), Arc::new(FontData::from_owned(bytes)));
    fonts
        .families
        .entry(FontFamily::Proportional)
        .or_default()
        .insert(0, QUOTE_FONT_KEY.to_owned());
    ctx.set_fonts(fonts);
    info!("[Render] Loaded {}", path.display());
}

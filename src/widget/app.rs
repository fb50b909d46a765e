// ~/quote-widget/src/widget/app.rs

use std::time::{Duration, Instant};

use eframe::egui::{self, LayerId, Pos2, Vec2, ViewportBuilder, ViewportCommand};

use super::drag::{DragController, PointerFrame, WidgetCommand};
use super::layout::{card_size, initial_position, DEFAULT_POSITION};
use super::render::{install_fonts, paint_card, CardStyle};
use super::zorder::ZOrderEnforcer;
use crate::config::WidgetConfig;
use crate::desktop::{attach_to_desktop, platform_host, AttachOptions, HostWindowControl, NativeWindow};
use crate::{info, warn};

const WINDOW_TITLE: &str = "Daily Quote (Desktop)";

pub struct QuoteWidget {
    quote: String,
    style: CardStyle,
    drag: DragController,
    zorder: Option<ZOrderEnforcer>,
    host: Box<dyn HostWindowControl>,
    window: Option<NativeWindow>,
    margins: (f32, f32),
    positioned: bool,
}

impl QuoteWidget {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        quote: String,
        cfg: &WidgetConfig,
        host: Box<dyn HostWindowControl>,
    ) -> Self {
        install_fonts(&cc.egui_ctx);

        // The window exists but has not been shown yet.
        let window = NativeWindow::from_handle_source(cc);
        match window {
            Some(w) if cfg.attach_to_desktop => {
                attach_to_desktop(
                    host.as_ref(),
                    w,
                    AttachOptions {
                        blur: cfg.blur,
                        alpha: cfg.alpha,
                    },
                );
            }
            Some(_) => info!("Desktop attachment disabled by config"),
            None => warn!("No native window handle, skipping desktop attachment"),
        }

        Self {
            quote,
            style: CardStyle { shadow: cfg.shadow },
            drag: DragController::new(),
            zorder: ZOrderEnforcer::new(Duration::from_millis(cfg.z_order_interval_ms)),
            host,
            window,
            margins: (cfg.margin_right, cfg.margin_bottom),
            positioned: false,
        }
    }

    fn place_once(&mut self, ctx: &egui::Context) {
        if self.positioned {
            return;
        }
        self.positioned = true;

        let monitor = ctx.input(|i| i.viewport().monitor_size);
        let target = initial_position(monitor, self.margins.0, self.margins.1);
        if target != DEFAULT_POSITION {
            info!("Placing widget at ({}, {})", target.x, target.y);
            ctx.send_viewport_cmd(ViewportCommand::OuterPosition(target));
        }
    }

    fn handle_pointer(&mut self, ctx: &egui::Context) {
        let frame = ctx.input(|i| PointerFrame {
            pressed: i.pointer.primary_pressed(),
            released: i.pointer.primary_released(),
            pointer: i.pointer.latest_pos(),
            moved: i.pointer.delta() != Vec2::ZERO,
            window_origin: i.viewport().outer_rect.map(|r| r.min),
        });

        match self.drag.step(frame) {
            Some(WidgetCommand::Close) => {
                info!("Close glyph pressed");
                ctx.send_viewport_cmd(ViewportCommand::Close);
            }
            Some(WidgetCommand::MoveTo(target)) => {
                ctx.send_viewport_cmd(ViewportCommand::OuterPosition(target));
            }
            None => {}
        }
    }

    fn enforce_z_order(&mut self, ctx: &egui::Context) {
        let (Some(zorder), Some(window)) = (self.zorder.as_mut(), self.window) else {
            return;
        };
        zorder.enforce(self.host.as_ref(), window, Instant::now());
        ctx.request_repaint_after(zorder.interval());
    }
}

impl eframe::App for QuoteWidget {
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        [0.0, 0.0, 0.0, 0.0]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.place_once(ctx);
        self.handle_pointer(ctx);

        let painter = ctx.layer_painter(LayerId::background());
        paint_card(&painter, ctx.screen_rect(), &self.quote, self.style);

        self.enforce_z_order(ctx);
    }
}

fn viewport(start: Pos2) -> ViewportBuilder {
    ViewportBuilder::default()
        .with_title(WINDOW_TITLE)
        .with_inner_size(card_size())
        .with_position(start)
        .with_resizable(false)
        .with_decorations(false)
        .with_transparent(true)
        .with_taskbar(false)
}

/// Open the widget window and block until it is closed.
pub fn run_widget(quote: String, cfg: &WidgetConfig) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: viewport(DEFAULT_POSITION),
        ..Default::default()
    };

    let cfg = cfg.clone();
    info!("Opening widget window");
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(QuoteWidget::new(cc, quote, &cfg, platform_host())))),
    )
}

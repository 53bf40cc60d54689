//! Full-window dot field viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the [`AnimationState`] and
//! the two media widgets, and implements [`eframe::App`] to feed egui
//! pointer/resize input into the core and paint every frame.

use eframe::App;
use field_core::{
    animation::AnimationState,
    config::Config,
    media::{self, ImageCycle},
    surface::Surface,
    types::Color,
};
use glam::Vec2;
use log::{debug, info};

/// Adapts an [`egui::Painter`] clipped to the field rect to [`Surface`].
///
/// Core coordinates are relative to the rect's top-left corner.
struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    rect: egui::Rect,
    background: Color,
}

impl Surface for PainterSurface<'_> {
    fn clear(&mut self) {
        self.painter
            .rect_filled(self.rect, 0.0, to_color32(self.background));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let p = egui::pos2(self.rect.min.x + center.x, self.rect.min.y + center.y);
        self.painter.circle_filled(p, radius, to_color32(color));
    }
}

fn to_color32([r, g, b, a]: Color) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Main application state for the viewer.
///
/// ### Fields
/// - `state` - Dot field, cursor and pending resize.
/// - `initialized` - Whether the field has been built for the real panel size.
/// - `last_size` - Panel size seen on the previous frame.
/// - `pointer_inside` - Whether the pointer was over the window last frame.
/// - `playlist` - Embed URL picked once at startup, if any were configured.
/// - `pictures` - Click-to-cycle picture sources.
pub struct Viewer {
    state: AnimationState,
    initialized: bool,
    last_size: Vec2,
    pointer_inside: bool,

    playlist: Option<String>,
    pictures: ImageCycle,
}

impl Viewer {
    /// Creates the viewer with a placeholder viewport.
    ///
    /// The field is rebuilt for the actual panel size on the first frame.
    /// The playlist is drawn at random from `cfg.playlists` here, once.
    pub fn new(cfg: Config) -> Self {
        let mut rng = rand::rng();
        let playlist = media::pick_random(&cfg.playlists, &mut rng).map(str::to_owned);
        if let Some(url) = &playlist {
            info!("selected playlist {url}");
        }
        let pictures = ImageCycle::new(cfg.pictures.clone());

        Self {
            state: AnimationState::new(cfg, Vec2::ZERO),
            initialized: false,
            last_size: Vec2::ZERO,
            pointer_inside: false,
            playlist,
            pictures,
        }
    }

    /// Feeds the current panel size into the core.
    ///
    /// The first call builds the field immediately; later size changes go
    /// through the debounced resize.
    fn handle_viewport(&mut self, size: Vec2, now: f64) {
        if !self.initialized {
            self.state.rebuild(size);
            self.initialized = true;
        } else if size != self.last_size {
            self.state.resized(size, now);
        }
        self.last_size = size;
    }

    /// Feeds the pointer position (relative to the field) into the core.
    ///
    /// `None` means the pointer is outside the window.
    fn handle_pointer(&mut self, pos: Option<Vec2>) {
        match pos {
            Some(p) => {
                if !self.pointer_inside {
                    debug!("pointer entered");
                }
                self.pointer_inside = true;
                self.state.pointer_moved(p);
            }
            None if self.pointer_inside => {
                self.pointer_inside = false;
                self.state.pointer_left();
            }
            None => {}
        }
    }

    /// Advances the picture cycle; bound to clicks on the picture button.
    fn click_picture(&mut self) {
        if let Some(src) = self.pictures.advance() {
            debug!("picture -> {src}");
        }
    }

    /// Builds the bottom status bar (viewport, point count, rebuilds, cursor).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        let now = ctx.input(|i| i.time);
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if let Some(left) = self.state.resize_remaining(now) {
                    ui.label(format!("resizing in {:.2} s", left));
                }
                ui.label(format!("rebuilds = {}", self.state.rebuilds()));
                let vp = self.state.viewport();
                ui.label(format!("viewport = {:.0}x{:.0}", vp.x, vp.y));
                ui.separator();
                ui.label(format!("points = {}", self.state.field.len()));
                if self.state.cursor.is_away() {
                    ui.label("cursor = away");
                } else {
                    let c = self.state.cursor.pos;
                    ui.label(format!("cursor = ({:.0}, {:.0})", c.x, c.y));
                }
            });
        });
    }

    /// Builds the floating media box (playlist link and clickable picture).
    fn ui_media(&mut self, ctx: &egui::Context) {
        egui::Area::new("media".into())
            .anchor(egui::Align2::LEFT_TOP, egui::vec2(10.0, 10.0))
            .movable(false)
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(egui::Color32::from_rgba_unmultiplied(0, 0, 0, 96))
                    .inner_margin(egui::Margin::same(6))
                    .show(ui, |ui| {
                        ui.vertical(|ui| {
                            if let Some(url) = &self.playlist {
                                ui.hyperlink_to("♫ Playlist", url);
                            }

                            if let Some(src) = self.pictures.current() {
                                let clicked = ui.button(format!("🖼 {src}")).clicked();
                                if clicked {
                                    self.click_picture();
                                }
                            }
                        });
                    });
            });
    }

    /// Builds the central panel: reads size and pointer, then runs one tick.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new())
            .show(ctx, |ui| {
                let response = ui.allocate_response(ui.available_size(), egui::Sense::hover());
                let rect = response.rect;
                let painter = ui.painter_at(rect);
                let now = ctx.input(|i| i.time);

                self.handle_viewport(Vec2::new(rect.width(), rect.height()), now);

                let pointer = ctx
                    .input(|i| i.pointer.hover_pos())
                    .map(|p| Vec2::new(p.x - rect.min.x, p.y - rect.min.y));
                self.handle_pointer(pointer);

                let mut surface = PainterSurface {
                    painter: &painter,
                    rect,
                    background: self.state.cfg.background,
                };
                self.state.tick(now, &mut surface);

                // Chain the next frame.
                ctx.request_repaint();
            });
    }
}

impl App for Viewer {
    /// eframe callback that builds the panels for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_status_bar(ctx);
        self.ui_central_panel(ctx);
        self.ui_media(ctx);
    }
}

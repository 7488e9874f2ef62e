//! Background thumbnail loading with a one-time placeholder fallback.

use anyhow::Context as _;
use bytes::Bytes;
use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};
use log::{debug, warn};
use std::collections::HashMap;
use std::sync::mpsc::{self, Receiver};
use std::thread;

use crate::theme::*;

pub const PREVIEW_PLACEHOLDER: &str =
    "https://placehold.co/640x360/gray/white/png?text=Video+Thumbnail";
pub const HISTORY_PLACEHOLDER: &str = "https://placehold.co/320x180/gray/white/png?text=Video";

/// Which URL an image slot should display.
///
/// A failed load may swap to the placeholder exactly once; `has_fallen_back`
/// keeps a failing placeholder from triggering another swap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource {
    primary: String,
    fallback: &'static str,
    has_fallen_back: bool,
}

impl ImageSource {
    pub fn new(primary: impl Into<String>, fallback: &'static str) -> Self {
        Self {
            primary: primary.into(),
            fallback,
            has_fallen_back: false,
        }
    }

    pub fn current(&self) -> &str {
        if self.has_fallen_back {
            self.fallback
        } else {
            &self.primary
        }
    }

    #[cfg(test)]
    pub fn has_fallen_back(&self) -> bool {
        self.has_fallen_back
    }

    /// Called on a load error. Returns the URL to try next, if any.
    pub fn fall_back(&mut self) -> Option<&str> {
        if self.has_fallen_back {
            return None;
        }
        self.has_fallen_back = true;
        Some(self.fallback)
    }
}

pub fn fetch_image(url: &str) -> anyhow::Result<ColorImage> {
    let body: Bytes = reqwest::blocking::get(url)
        .and_then(|resp| resp.error_for_status())
        .and_then(|resp| resp.bytes())
        .with_context(|| format!("failed to fetch {}", url))?;

    let img = image::load_from_memory(&body)
        .with_context(|| format!("failed to decode {}", url))?
        .to_rgba8();
    let size = [img.width() as usize, img.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, img.as_flat_samples().as_slice()))
}

enum SlotState {
    Loading(Receiver<anyhow::Result<ColorImage>>),
    Ready(TextureHandle),
    Failed,
}

pub struct ThumbnailSlot {
    source: ImageSource,
    state: SlotState,
}

impl ThumbnailSlot {
    fn spawn(url: &str, ctx: &egui::Context) -> SlotState {
        let (tx, rx) = mpsc::channel();
        let url = url.to_string();
        let ctx = ctx.clone();
        thread::spawn(move || {
            debug!("loading thumbnail {}", url);
            let _ = tx.send(fetch_image(&url));
            ctx.request_repaint();
        });
        SlotState::Loading(rx)
    }

    pub fn new(source: ImageSource, ctx: &egui::Context) -> Self {
        let state = Self::spawn(source.current(), ctx);
        Self { source, state }
    }

    fn poll(&mut self, ctx: &egui::Context) {
        let SlotState::Loading(rx) = &self.state else {
            return;
        };
        let Ok(result) = rx.try_recv() else {
            return;
        };

        self.state = match result {
            Ok(image) => {
                SlotState::Ready(ctx.load_texture(self.source.current(), image, TextureOptions::LINEAR))
            }
            Err(err) => {
                warn!("thumbnail failed: {:#}", err);
                match self.source.fall_back() {
                    Some(next) => Self::spawn(next, ctx),
                    None => SlotState::Failed,
                }
            }
        };
    }

    pub fn show(&mut self, ui: &mut egui::Ui, size: egui::Vec2) -> egui::Response {
        self.poll(ui.ctx());
        match &self.state {
            SlotState::Ready(texture) => ui.add(
                egui::Image::from_texture(egui::load::SizedTexture::new(texture.id(), size))
                    .fit_to_exact_size(size)
                    .rounding(4.0),
            ),
            SlotState::Loading(_) => placeholder(ui, size, true),
            SlotState::Failed => placeholder(ui, size, false),
        }
    }
}

/// Grey frame shown while loading, when loading gave up, or when there is
/// no thumbnail at all.
pub fn placeholder(ui: &mut egui::Ui, size: egui::Vec2, loading: bool) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(rect, 4.0, PLACEHOLDER_BG);
    if loading {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "…",
            egui::FontId::proportional(size.y * 0.3),
            PLACEHOLDER_ICON,
        );
    } else {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "🎞",
            egui::FontId::proportional(size.y * 0.4),
            PLACEHOLDER_ICON,
        );
    }
    response
}

/// Slots keyed by primary URL and placeholder, created on first display.
#[derive(Default)]
pub struct ThumbnailCache {
    slots: HashMap<(String, &'static str), ThumbnailSlot>,
}

impl ThumbnailCache {
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        url: &str,
        fallback: &'static str,
        size: egui::Vec2,
    ) -> egui::Response {
        let ctx = ui.ctx().clone();
        self.slots
            .entry((url.to_string(), fallback))
            .or_insert_with(|| ThumbnailSlot::new(ImageSource::new(url, fallback), &ctx))
            .show(ui, size)
    }
}

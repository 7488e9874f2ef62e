//! Short-lived notifications stacked in the bottom-right corner.

use eframe::egui;
use std::time::{Duration, Instant};

use crate::theme::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Default,
    Destructive,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub kind: ToastKind,
    shown_at: Instant,
}

pub struct Toasts {
    items: Vec<Toast>,
    lifetime: Duration,
}

impl Toasts {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            items: Vec::new(),
            lifetime,
        }
    }

    pub fn push(&mut self, kind: ToastKind, title: String, description: String) {
        self.push_at(kind, title, description, Instant::now());
    }

    fn push_at(&mut self, kind: ToastKind, title: String, description: String, now: Instant) {
        log::debug!("toast: {} - {}", title, description);
        self.items.push(Toast {
            title,
            description,
            kind,
            shown_at: now,
        });
    }

    /// Drops every toast older than the configured lifetime.
    pub fn expire(&mut self, now: Instant) {
        let lifetime = self.lifetime;
        self.items
            .retain(|toast| now.saturating_duration_since(toast.shown_at) < lifetime);
    }

    #[cfg(test)]
    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        self.expire(Instant::now());
        if self.is_empty() {
            return;
        }

        let mut dismissed = None;
        egui::Area::new(egui::Id::new("toasts"))
            .anchor(egui::Align2::RIGHT_BOTTOM, [-16.0, -16.0])
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                ui.set_width(TOAST_WIDTH);
                for (index, toast) in self.items.iter().enumerate().rev() {
                    let (fill, text) = match toast.kind {
                        ToastKind::Default => (TOAST_BG, MAIN_TEXT),
                        ToastKind::Destructive => (TOAST_DESTRUCTIVE_BG, BUTTON_MAIN_TEXT),
                    };

                    let response = egui::Frame::popup(ui.style())
                        .fill(fill)
                        .stroke(egui::Stroke::new(1.0, BORDER_COLOR))
                        .rounding(ROUNDING_CARD)
                        .inner_margin(egui::Margin::same(14.0))
                        .show(ui, |ui| {
                            ui.set_width(TOAST_WIDTH - 28.0);
                            ui.label(egui::RichText::new(&toast.title).strong().color(text));
                            ui.label(egui::RichText::new(&toast.description).color(text));
                        })
                        .response;

                    if response.interact(egui::Sense::click()).clicked() {
                        dismissed = Some(index);
                    }
                    ui.add_space(8.0);
                }
            });

        if let Some(index) = dismissed {
            self.items.remove(index);
        }
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_expire_after_their_lifetime() {
        let mut toasts = Toasts::new(Duration::from_secs(5));
        let start = Instant::now();
        toasts.push_at(ToastKind::Default, "a".into(), "first".into(), start);
        toasts.push_at(
            ToastKind::Destructive,
            "b".into(),
            "second".into(),
            start + Duration::from_secs(3),
        );

        toasts.expire(start + Duration::from_secs(4));
        assert_eq!(toasts.items().len(), 2);

        toasts.expire(start + Duration::from_secs(6));
        assert_eq!(toasts.items().len(), 1);
        assert_eq!(toasts.items()[0].kind, ToastKind::Destructive);

        toasts.expire(start + Duration::from_secs(9));
        assert!(toasts.is_empty());
    }
}

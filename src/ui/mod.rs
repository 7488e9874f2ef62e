use chrono::{DateTime, Utc};
use eframe::egui;

use crate::history::{relative_time, History};
use crate::localizations::Localizations;
use crate::models::{AppState, VideoMetadata};
use crate::theme::*;
use crate::thumbnail::{self, ThumbnailCache, HISTORY_PLACEHOLDER, PREVIEW_PLACEHOLDER};

pub fn render_header(ui: &mut egui::Ui, localizer: &Localizations) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.horizontal(|ui| {
            let (rect, _) = ui.allocate_exact_size(egui::vec2(40.0, 40.0), egui::Sense::hover());
            ui.painter().circle_filled(rect.center(), 20.0, BRAND_PURPLE);
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "▶",
                egui::FontId::proportional(18.0),
                BUTTON_MAIN_TEXT,
            );

            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new(localizer.text("app-title"))
                        .size(24.0)
                        .strong()
                        .color(MAIN_TEXT),
                );
                ui.label(
                    egui::RichText::new(localizer.text("app-subtitle"))
                        .size(13.0)
                        .color(SECONDARY_TEXT),
                );
            });
        });
        ui.add_space(24.0);

        ui.label(
            egui::RichText::new(localizer.text("hero-title"))
                .size(28.0)
                .strong()
                .color(HERO_GRADIENT_TOP),
        );
        ui.label(egui::RichText::new(localizer.text("hero-body")).color(SECONDARY_TEXT));
        ui.add_space(24.0);
    });
}

/// Draws the URL card. Returns true when the user submitted the form.
pub fn render_url_form(ui: &mut egui::Ui, state: &mut AppState, localizer: &Localizations) -> bool {
    let mut submitted = false;

    card_frame().show(ui, |ui| {
        ui.horizontal(|ui| {
            let input_width = ui.available_width() - MIN_SIZE_BUTTON.x - ui.spacing().item_spacing.x;
            let response = ui.add_sized(
                [input_width, MIN_SIZE_BUTTON.y],
                egui::TextEdit::singleline(&mut state.url)
                    .hint_text(localizer.text("url-placeholder"))
                    .font(egui::FontId::proportional(16.0))
                    .margin(egui::vec2(12.0, 12.0)),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submitted = true;
            }

            let label = if state.is_loading {
                localizer.text("analyze-busy")
            } else {
                localizer.text("analyze-button")
            };
            if ui.add_enabled(!state.is_loading, primary_button(label)).clicked() {
                submitted = true;
            }
        });
    });

    submitted && !state.is_loading
}

/// Draws the preview card for the active video. Returns true when the
/// download button was clicked.
pub fn render_preview(
    ui: &mut egui::Ui,
    metadata: &VideoMetadata,
    state: &mut AppState,
    thumbnails: &mut ThumbnailCache,
    localizer: &Localizations,
) -> bool {
    let mut clicked = false;

    card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.add(
            egui::Label::new(
                egui::RichText::new(&metadata.title)
                    .size(18.0)
                    .strong()
                    .color(MAIN_TEXT),
            )
            .truncate(true),
        );
        ui.add_space(12.0);

        ui.horizontal_top(|ui| {
            let thumb = if metadata.thumbnail.is_empty() {
                thumbnail::placeholder(ui, PREVIEW_THUMB_SIZE, false)
            } else {
                thumbnails.show(ui, &metadata.thumbnail, PREVIEW_PLACEHOLDER, PREVIEW_THUMB_SIZE)
            };
            duration_badge(ui, thumb.rect, &metadata.duration);

            ui.add_space(16.0);
            ui.vertical(|ui| {
                field(ui, &localizer.text("creator-label"), egui::RichText::new(&metadata.author).strong());
                field(
                    ui,
                    &localizer.text("video-id-label"),
                    egui::RichText::new(&metadata.id).monospace(),
                );

                ui.label(egui::RichText::new(localizer.text("format-label")).color(SECONDARY_TEXT));
                let selected_text = state
                    .selected_format
                    .as_deref()
                    .and_then(|value| metadata.format(value))
                    .map(|f| f.label.clone())
                    .unwrap_or_else(|| localizer.text("format-placeholder"));

                egui::ComboBox::from_id_source("format-select")
                    .selected_text(selected_text)
                    .width(ui.available_width())
                    .show_ui(ui, |ui| {
                        for format in &metadata.formats {
                            ui.selectable_value(
                                &mut state.selected_format,
                                Some(format.value.clone()),
                                format.label.as_str(),
                            );
                        }
                    });
            });
        });

        ui.add_space(16.0);
        let label = if state.is_downloading {
            localizer.text("download-busy")
        } else {
            format!("⬇ {}", localizer.text("download-button"))
        };
        let button = primary_button(label).min_size(egui::vec2(ui.available_width(), MIN_SIZE_BUTTON.y));
        if ui.add_enabled(!state.is_downloading, button).clicked() {
            clicked = true;
        }
    });

    clicked
}

fn field(ui: &mut egui::Ui, label: &str, value: egui::RichText) {
    ui.label(egui::RichText::new(label).color(SECONDARY_TEXT));
    ui.label(value.color(MAIN_TEXT));
    ui.add_space(8.0);
}

fn duration_badge(ui: &egui::Ui, thumb: egui::Rect, duration: &str) {
    let painter = ui.painter();
    let galley = painter.layout_no_wrap(
        duration.to_string(),
        egui::FontId::proportional(12.0),
        BUTTON_MAIN_TEXT,
    );
    let padding = egui::vec2(6.0, 3.0);
    let max = thumb.right_bottom() - egui::vec2(8.0, 8.0);
    let rect = egui::Rect::from_min_max(max - galley.size() - padding * 2.0, max);
    painter.rect_filled(rect, 4.0, BADGE_BG);
    painter.galley(rect.min + padding, galley);
}

/// Draws the ledger newest first; nothing at all when it is empty.
pub fn render_history(
    ui: &mut egui::Ui,
    history: &History,
    thumbnails: &mut ThumbnailCache,
    localizer: &Localizations,
    now: DateTime<Utc>,
) {
    if history.is_empty() {
        return;
    }

    card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(
            egui::RichText::new(format!("🎬 {}", localizer.text("history-title")))
                .size(20.0)
                .strong()
                .color(MAIN_TEXT),
        );
        ui.add_space(12.0);

        for entry in history.entries() {
            ui.horizontal(|ui| {
                match &entry.thumbnail {
                    Some(url) => {
                        thumbnails.show(ui, url, HISTORY_PLACEHOLDER, HISTORY_THUMB_SIZE);
                    }
                    None => {
                        thumbnail::placeholder(ui, HISTORY_THUMB_SIZE, false);
                    }
                }

                ui.vertical(|ui| {
                    ui.add(
                        egui::Label::new(egui::RichText::new(&entry.title).strong().color(MAIN_TEXT))
                            .truncate(true),
                    )
                    .on_hover_text(entry.title.as_str());
                    ui.label(
                        egui::RichText::new(format!(
                            "{} • {}",
                            entry.format.label,
                            localizer.relative_time(relative_time(entry.download_date, now))
                        ))
                        .size(12.0)
                        .color(SECONDARY_TEXT),
                    );
                });
            });
            ui.add_space(8.0);
        }
    });
}

pub fn render_footer(ui: &mut egui::Ui, localizer: &Localizations) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.label(
            egui::RichText::new(localizer.text("footer"))
                .size(12.0)
                .color(SECONDARY_TEXT),
        );
        ui.add_space(16.0);
    });
}

use chrono::{DateTime, Utc};
use eframe::egui;
use log::{debug, info, warn};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use tokio::runtime::Runtime;

use crate::api::{self, ApiEvent, SimulatedService, VideoService};
use crate::config::Settings;
use crate::controller::{DownloadTicket, FetchOutcome, FetchTicket, PageController, Phase};
use crate::error::ClipError;
use crate::localizations::Localizations;
use crate::models::AppState;
use crate::theme::*;
use crate::thumbnail::ThumbnailCache;
use crate::toast::{ToastKind, Toasts};
use crate::ui;

pub struct ClipGrabApp {
    pub state: AppState,
    page: PageController,
    localizer: Localizations,
    toasts: Toasts,
    thumbnails: ThumbnailCache,
    runtime: Runtime,
    service: Arc<dyn VideoService>,
    event_sender: Sender<ApiEvent>,
    event_receiver: Receiver<ApiEvent>,
}

impl ClipGrabApp {
    pub fn new(settings: &Settings, runtime: Runtime) -> Self {
        let (tx, rx) = mpsc::channel();
        let localizer = Localizations::new_with(settings.language.as_deref());
        info!("starting with {} strings", localizer.current());

        let service = SimulatedService {
            fetch_latency: settings.fetch_latency,
            download_latency: settings.download_latency,
        };

        Self {
            state: AppState::default(),
            page: PageController::new(),
            localizer,
            toasts: Toasts::new(settings.toast_lifetime),
            thumbnails: ThumbnailCache::default(),
            runtime,
            service: Arc::new(service),
            event_sender: tx,
            event_receiver: rx,
        }
    }

    fn toast(&mut self, kind: ToastKind, title_key: &str, body: String) {
        let title = self.localizer.text(title_key);
        self.toasts.push(kind, title, body);
    }

    fn toast_error(&mut self, err: &ClipError) {
        let (title_key, body_key) = err.toast_keys();
        let body = self.localizer.text(body_key);
        self.toast(ToastKind::Destructive, title_key, body);
    }

    pub fn submit_url(&mut self, ctx: &egui::Context) {
        let ticket = match begin_fetch(&mut self.page, &mut self.state) {
            Ok(Some(ticket)) => ticket,
            Ok(None) => return,
            Err(err) => {
                self.toast_error(&err);
                return;
            }
        };

        let url = self.state.url.clone();
        debug!("fetching metadata for {}", url);
        api::start_fetch(
            self.runtime.handle(),
            self.service.clone(),
            ticket,
            url,
            self.event_sender.clone(),
        );
        ctx.request_repaint();
    }

    pub fn start_download(&mut self, ctx: &egui::Context) {
        let ticket = match begin_download(&self.page, &mut self.state) {
            Ok(Some(ticket)) => ticket,
            Ok(None) => return,
            Err(err) => {
                self.toast_error(&err);
                return;
            }
        };

        debug!(
            "downloading {} as {}",
            ticket.metadata.id, ticket.format.value
        );
        api::start_download(
            self.runtime.handle(),
            self.service.clone(),
            ticket,
            self.event_sender.clone(),
        );
        ctx.request_repaint();
    }

    fn process_api_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            match apply_event(&mut self.page, &mut self.state, event, Utc::now()) {
                Notice::Found => {
                    let body = self.localizer.text("toast-found-body");
                    self.toast(ToastKind::Default, "toast-found-title", body);
                }
                Notice::Downloaded(label) => {
                    let body = self
                        .localizer
                        .text_with("toast-downloaded-body", &[("format", label)]);
                    self.toast(ToastKind::Default, "toast-downloaded-title", body);
                }
                Notice::Failed(err) => self.toast_error(&err),
                Notice::Quiet => {}
            }
        }
    }

    pub fn update_ui(&mut self, ctx: &egui::Context) {
        self.process_api_events();

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(PAGE_BG))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.set_max_width(CONTENT_MAX_WIDTH);
                        ui::render_header(ui, &self.localizer);

                        if ui::render_url_form(ui, &mut self.state, &self.localizer) {
                            self.submit_url(ctx);
                        }

                        let download_clicked = match self.page.phase() {
                            Phase::MetadataLoaded(metadata) => {
                                ui.add_space(32.0);
                                ui::render_preview(
                                    ui,
                                    metadata,
                                    &mut self.state,
                                    &mut self.thumbnails,
                                    &self.localizer,
                                )
                            }
                            Phase::NoMetadata => false,
                        };
                        if download_clicked {
                            self.start_download(ctx);
                        }

                        if !self.page.history().is_empty() {
                            ui.add_space(32.0);
                            ui::render_history(
                                ui,
                                self.page.history(),
                                &mut self.thumbnails,
                                &self.localizer,
                                Utc::now(),
                            );
                        }

                        ui::render_footer(ui, &self.localizer);
                    });
                });
            });

        self.toasts.show(ctx);

        if self.state.is_loading || self.state.is_downloading {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        } else if !self.page.history().is_empty() {
            // relative times in the history list
            ctx.request_repaint_after(std::time::Duration::from_secs(30));
        }
    }
}

impl eframe::App for ClipGrabApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_ui(ctx);
    }
}

/// What the window should tell the user after an [`ApiEvent`] was applied.
#[derive(Debug, PartialEq, Eq)]
enum Notice {
    Found,
    /// Carries the label of the downloaded format.
    Downloaded(String),
    Failed(ClipError),
    Quiet,
}

/// Validates the typed URL and marks the form busy. `None` while a fetch
/// is already pending.
fn begin_fetch(page: &mut PageController, state: &mut AppState) -> Result<Option<FetchTicket>, ClipError> {
    if state.is_loading {
        return Ok(None);
    }

    let ticket = page.submit(&state.url)?;
    state.is_loading = true;
    Ok(Some(ticket))
}

/// Snapshots the selected format and marks the download button busy.
/// `None` while a download is already pending.
fn begin_download(page: &PageController, state: &mut AppState) -> Result<Option<DownloadTicket>, ClipError> {
    if state.is_downloading {
        return Ok(None);
    }

    let ticket = page.begin_download(state.selected_format.as_deref())?;
    state.is_downloading = true;
    Ok(Some(ticket))
}

fn apply_event(
    page: &mut PageController,
    state: &mut AppState,
    event: ApiEvent,
    now: DateTime<Utc>,
) -> Notice {
    match event {
        ApiEvent::Fetched { ticket, result } => match page.fetch_finished(ticket, result) {
            Ok(FetchOutcome::Loaded) => {
                state.is_loading = false;
                state.selected_format = page
                    .metadata()
                    .and_then(|m| m.default_format())
                    .map(|f| f.value.clone());
                Notice::Found
            }
            // a newer fetch is still pending and owns the busy flag
            Ok(FetchOutcome::Superseded) => Notice::Quiet,
            Err(err) => {
                state.is_loading = false;
                warn!("fetch failed: {}", err);
                Notice::Failed(err)
            }
        },
        ApiEvent::Downloaded { ticket, result } => {
            state.is_downloading = false;
            match page.download_finished(ticket, result, now) {
                Ok(entry) => Notice::Downloaded(entry.format.label.clone()),
                Err(err) => {
                    warn!("download failed: {}", err);
                    Notice::Failed(err)
                }
            }
        }
    }
}

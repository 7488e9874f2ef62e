use i18n_embed::DesktopLanguageRequester;
use log::debug;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

use crate::history::RelativeTime;

// Simple in-memory translations
#[derive(Default)]
pub struct Translations {
    strings: HashMap<&'static str, &'static str>,
}

impl Translations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &'static str, value: &'static str) {
        self.strings.insert(key, value);
    }

    pub fn lookup(&self, key: &str) -> Option<&'static str> {
        self.strings.get(key).copied()
    }
}

fn english() -> Translations {
    let mut en = Translations::new();
    en.insert("app-title", "ClipGrab");
    en.insert("app-subtitle", "YouTube Video Downloader");
    en.insert("hero-title", "Download YouTube Videos");
    en.insert(
        "hero-body",
        "Enter a YouTube URL below to download videos in your preferred quality",
    );
    en.insert("url-placeholder", "Paste YouTube URL here");
    en.insert("analyze-button", "Analyze");
    en.insert("analyze-busy", "Loading...");
    en.insert("creator-label", "Creator");
    en.insert("video-id-label", "Video ID");
    en.insert("format-label", "Format");
    en.insert("format-placeholder", "Select format");
    en.insert("download-button", "Download Now");
    en.insert("download-busy", "Downloading...");
    en.insert("history-title", "Download History");
    en.insert(
        "footer",
        "ClipGrab - For demonstration purposes only. Not for production use.",
    );
    en.insert("toast-invalid-url-title", "Invalid URL");
    en.insert("toast-invalid-url-body", "Please enter a valid YouTube URL");
    en.insert("toast-error-title", "Error");
    en.insert("toast-fetch-failed-body", "Failed to get video information");
    en.insert("toast-no-format-body", "Please select a format first");
    en.insert("toast-found-title", "Video found");
    en.insert("toast-found-body", "Video information retrieved successfully");
    en.insert("toast-download-failed-title", "Download Failed");
    en.insert("toast-download-failed-body", "There was an error during download");
    en.insert("toast-downloaded-title", "Download Complete");
    en.insert(
        "toast-downloaded-body",
        "Successfully downloaded in {format} format",
    );
    en.insert("time-less-than-minute", "less than a minute ago");
    en.insert("time-minute", "1 minute ago");
    en.insert("time-minutes", "{n} minutes ago");
    en.insert("time-about-hour", "about 1 hour ago");
    en.insert("time-about-hours", "about {n} hours ago");
    en.insert("time-day", "1 day ago");
    en.insert("time-days", "{n} days ago");
    en.insert("time-about-month", "about 1 month ago");
    en.insert("time-about-months", "about {n} months ago");
    en.insert("time-months", "{n} months ago");
    en.insert("time-about-year", "about 1 year ago");
    en.insert("time-about-years", "about {n} years ago");
    en.insert("time-over-year", "over 1 year ago");
    en.insert("time-over-years", "over {n} years ago");
    en.insert("time-almost-years", "almost {n} years ago");
    en
}

fn spanish() -> Translations {
    let mut es = Translations::new();
    es.insert("app-subtitle", "Descargador de videos de YouTube");
    es.insert("hero-title", "Descarga videos de YouTube");
    es.insert(
        "hero-body",
        "Ingrese una URL de YouTube para descargar videos en la calidad que prefiera",
    );
    es.insert("url-placeholder", "Pegue la URL de YouTube aquí");
    es.insert("analyze-button", "Analizar");
    es.insert("analyze-busy", "Cargando...");
    es.insert("creator-label", "Creador");
    es.insert("video-id-label", "ID del video");
    es.insert("format-label", "Formato");
    es.insert("format-placeholder", "Seleccione un formato");
    es.insert("download-button", "Descargar ahora");
    es.insert("download-busy", "Descargando...");
    es.insert("history-title", "Historial de descargas");
    es.insert(
        "footer",
        "ClipGrab - Solo para fines de demostración. No apto para producción.",
    );
    es.insert("toast-invalid-url-title", "URL inválida");
    es.insert("toast-invalid-url-body", "Por favor ingrese una URL de YouTube válida");
    es.insert("toast-error-title", "Error");
    es.insert("toast-fetch-failed-body", "No se pudo obtener la información del video");
    es.insert("toast-no-format-body", "Por favor seleccione un formato primero");
    es.insert("toast-found-title", "Video encontrado");
    es.insert("toast-found-body", "Información del video obtenida correctamente");
    es.insert("toast-download-failed-title", "Descarga fallida");
    es.insert("toast-download-failed-body", "Ocurrió un error durante la descarga");
    es.insert("toast-downloaded-title", "Descarga completada");
    es.insert(
        "toast-downloaded-body",
        "Descargado correctamente en formato {format}",
    );
    es.insert("time-less-than-minute", "hace menos de un minuto");
    es.insert("time-minute", "hace 1 minuto");
    es.insert("time-minutes", "hace {n} minutos");
    es.insert("time-about-hour", "hace alrededor de 1 hora");
    es.insert("time-about-hours", "hace alrededor de {n} horas");
    es.insert("time-day", "hace 1 día");
    es.insert("time-days", "hace {n} días");
    es.insert("time-about-month", "hace alrededor de 1 mes");
    es.insert("time-about-months", "hace alrededor de {n} meses");
    es.insert("time-months", "hace {n} meses");
    es.insert("time-about-year", "hace alrededor de 1 año");
    es.insert("time-about-years", "hace alrededor de {n} años");
    es.insert("time-over-year", "hace más de 1 año");
    es.insert("time-over-years", "hace más de {n} años");
    es.insert("time-almost-years", "hace casi {n} años");
    es
}

pub struct Localizations {
    translations: HashMap<&'static str, Translations>,
    current_lang: String,
}

impl Localizations {
    const FALLBACK: &'static str = "en-US";

    /// Loads the built-in tables and selects `preferred` if given, else the
    /// first desktop locale we have strings for.
    pub fn new_with(preferred: Option<&str>) -> Self {
        let mut translations = HashMap::new();
        translations.insert("en-US", english());
        translations.insert("es-ES", spanish());

        let mut localizer = Self {
            translations,
            current_lang: Self::FALLBACK.to_string(),
        };

        let requested: Vec<LanguageIdentifier> = match preferred {
            Some(lang) => lang.parse::<LanguageIdentifier>().into_iter().collect(),
            None => DesktopLanguageRequester::requested_languages(),
        };
        localizer.select_first(&requested);
        localizer
    }

    pub fn current(&self) -> &str {
        &self.current_lang
    }

    pub fn lookup_single_language(&self, key: &str, args: Option<&[(&str, String)]>) -> Option<String> {
        let template = self
            .translations
            .get(self.current_lang.as_str())
            .and_then(|t| t.lookup(key))
            .or_else(|| {
                // Fallback to English if the current language doesn't have the key
                self.translations
                    .get(Self::FALLBACK)
                    .and_then(|t| t.lookup(key))
            })?;

        let mut text = template.to_string();
        for (name, value) in args.unwrap_or_default() {
            text = text.replace(&format!("{{{}}}", name), value);
        }
        Some(text)
    }

    /// Lookup that never fails; a missing key renders as itself.
    pub fn text(&self, key: &str) -> String {
        self.lookup_single_language(key, None)
            .unwrap_or_else(|| key.to_string())
    }

    pub fn text_with(&self, key: &str, args: &[(&str, String)]) -> String {
        self.lookup_single_language(key, Some(args))
            .unwrap_or_else(|| key.to_string())
    }

    pub fn relative_time(&self, age: RelativeTime) -> String {
        let (key, n) = match age {
            RelativeTime::LessThanAMinute => ("time-less-than-minute", 0),
            RelativeTime::Minutes(1) => ("time-minute", 1),
            RelativeTime::Minutes(n) => ("time-minutes", n),
            RelativeTime::AboutHours(1) => ("time-about-hour", 1),
            RelativeTime::AboutHours(n) => ("time-about-hours", n),
            RelativeTime::Days(1) => ("time-day", 1),
            RelativeTime::Days(n) => ("time-days", n),
            RelativeTime::AboutMonths(1) => ("time-about-month", 1),
            RelativeTime::AboutMonths(n) => ("time-about-months", n),
            RelativeTime::Months(n) => ("time-months", n),
            RelativeTime::AboutYears(1) => ("time-about-year", 1),
            RelativeTime::AboutYears(n) => ("time-about-years", n),
            RelativeTime::OverYears(1) => ("time-over-year", 1),
            RelativeTime::OverYears(n) => ("time-over-years", n),
            RelativeTime::AlmostYears(n) => ("time-almost-years", n),
        };
        self.text_with(key, &[("n", n.to_string())])
    }

    fn select_first(&mut self, requested: &[LanguageIdentifier]) {
        if let Some(lang) = requested.iter().find_map(|id| self.matching(id)) {
            debug!("using {} strings", lang);
            self.current_lang = lang.to_string();
        }
    }

    fn matching(&self, id: &LanguageIdentifier) -> Option<&'static str> {
        // Try exact match first, then the language code only
        let exact = id.to_string();
        self.translations
            .keys()
            .find(|key| **key == exact)
            .or_else(|| {
                self.translations.keys().find(|key| {
                    key.parse::<LanguageIdentifier>()
                        .map(|known| known.language == id.language)
                        .unwrap_or(false)
                })
            })
            .copied()
    }
}

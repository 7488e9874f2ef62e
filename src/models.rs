use chrono::{DateTime, Utc};

/// One downloadable quality/codec option of a video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoFormat {
    pub label: String,
    pub value: String,
    pub format: String,
}

impl VideoFormat {
    pub fn new(label: &str, value: &str, format: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
            format: format.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoMetadata {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    /// Display string, `MM:SS`.
    pub duration: String,
    pub author: String,
    /// Never empty.
    pub formats: Vec<VideoFormat>,
}

impl VideoMetadata {
    pub fn format(&self, value: &str) -> Option<&VideoFormat> {
        self.formats.iter().find(|f| f.value == value)
    }

    pub fn default_format(&self) -> Option<&VideoFormat> {
        self.formats.first()
    }
}

/// A completed simulated download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub id: String,
    pub title: String,
    pub thumbnail: Option<String>,
    pub download_date: DateTime<Utc>,
    pub format: VideoFormat,
}

impl HistoryEntry {
    pub fn new(metadata: &VideoMetadata, format: VideoFormat, download_date: DateTime<Utc>) -> Self {
        Self {
            id: metadata.id.clone(),
            title: metadata.title.clone(),
            thumbnail: Some(metadata.thumbnail.clone()).filter(|t| !t.is_empty()),
            download_date,
            format,
        }
    }
}

/// Widget state owned by the window rather than the page controller.
#[derive(Default)]
pub struct AppState {
    pub url: String,
    pub is_loading: bool,
    pub is_downloading: bool,
    /// `value` of the format picked in the preview card.
    pub selected_format: Option<String>,
}

//! Page state: the active video and the download ledger.

use chrono::{DateTime, Utc};
use log::{debug, info};

use crate::error::ClipError;
use crate::history::History;
use crate::link;
use crate::models::{HistoryEntry, VideoFormat, VideoMetadata};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase<'a> {
    NoMetadata,
    MetadataLoaded(&'a VideoMetadata),
}

/// Identifies one submitted URL. Only the most recent ticket may change
/// the active metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// What a download was started with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTicket {
    pub metadata: VideoMetadata,
    pub format: VideoFormat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Loaded,
    Superseded,
}

#[derive(Debug, Default)]
pub struct PageController {
    metadata: Option<VideoMetadata>,
    history: History,
    generation: u64,
}

impl PageController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase<'_> {
        match &self.metadata {
            Some(metadata) => Phase::MetadataLoaded(metadata),
            None => Phase::NoMetadata,
        }
    }

    pub fn metadata(&self) -> Option<&VideoMetadata> {
        self.metadata.as_ref()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Validates `url` and hands out the ticket its fetch must report back
    /// with. Any earlier outstanding fetch is superseded.
    pub fn submit(&mut self, url: &str) -> Result<FetchTicket, ClipError> {
        if !link::is_recognized(url) {
            debug!("rejected URL {:?}", url);
            return Err(ClipError::InvalidUrl);
        }

        self.generation += 1;
        Ok(FetchTicket(self.generation))
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.generation
    }

    pub fn fetch_finished(
        &mut self,
        ticket: FetchTicket,
        result: Result<VideoMetadata, ClipError>,
    ) -> Result<FetchOutcome, ClipError> {
        if !self.is_current(ticket) {
            debug!(
                "dropping fetch result #{} (current is #{})",
                ticket.0, self.generation
            );
            return Ok(FetchOutcome::Superseded);
        }

        let metadata = result?;
        info!("loaded metadata for video {}", metadata.id);
        self.metadata = Some(metadata);
        Ok(FetchOutcome::Loaded)
    }

    /// Snapshots the active video and the format whose `value` is
    /// `selected`.
    pub fn begin_download(&self, selected: Option<&str>) -> Result<DownloadTicket, ClipError> {
        let metadata = self.metadata.as_ref().ok_or(ClipError::NoFormatSelected)?;
        let format = selected
            .and_then(|value| metadata.format(value))
            .ok_or(ClipError::NoFormatSelected)?;

        Ok(DownloadTicket {
            metadata: metadata.clone(),
            format: format.clone(),
        })
    }

    pub fn download_finished(
        &mut self,
        ticket: DownloadTicket,
        result: Result<(), ClipError>,
        completed_at: DateTime<Utc>,
    ) -> Result<&HistoryEntry, ClipError> {
        result?;

        let entry = HistoryEntry::new(&ticket.metadata, ticket.format, completed_at);
        let (id, value) = (entry.id.clone(), entry.format.value.clone());
        self.history = std::mem::take(&mut self.history).record(entry);
        info!(
            "recorded download of {} as {} ({} in history)",
            id,
            value,
            self.history.len()
        );

        Ok(&self.history.entries()[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock_metadata;

    fn loaded(id: &str) -> PageController {
        let mut page = PageController::new();
        let ticket = page.submit(&format!("https://youtu.be/{id}")).unwrap();
        page.fetch_finished(ticket, Ok(mock_metadata(id))).unwrap();
        page
    }

    #[test]
    fn starts_empty() {
        let page = PageController::new();
        assert_eq!(page.phase(), Phase::NoMetadata);
        assert!(page.metadata().is_none());
        assert!(page.history().is_empty());
    }

    #[test]
    fn invalid_url_changes_nothing() {
        let mut page = PageController::new();
        assert_eq!(page.submit("not a url"), Err(ClipError::InvalidUrl));
        assert_eq!(page.phase(), Phase::NoMetadata);
    }

    #[test]
    fn failed_fetch_keeps_previous_state() {
        let mut page = loaded("abc123");
        let ticket = page.submit("https://youtube.com/watch?list=1").unwrap();

        let outcome = page.fetch_finished(ticket, Err(ClipError::IdExtractionFailed));
        assert_eq!(outcome, Err(ClipError::IdExtractionFailed));
        assert_eq!(page.metadata().unwrap().id, "abc123");
    }

    #[test]
    fn new_video_replaces_metadata_and_keeps_ledger() {
        let mut page = loaded("abc123");
        let ticket = page.begin_download(Some("720p")).unwrap();
        page.download_finished(ticket, Ok(()), Utc::now()).unwrap();
        assert_eq!(page.history().len(), 1);

        let ticket = page.submit("https://youtube.com/watch?v=xyz").unwrap();
        page.fetch_finished(ticket, Ok(mock_metadata("xyz"))).unwrap();

        assert!(matches!(page.phase(), Phase::MetadataLoaded(m) if m.id == "xyz"));
        assert_eq!(page.history().len(), 1);
    }

    #[test]
    fn superseded_fetch_is_dropped() {
        let mut page = PageController::new();
        let first = page.submit("https://youtu.be/first").unwrap();
        let second = page.submit("https://youtu.be/second").unwrap();

        let outcome = page.fetch_finished(second, Ok(mock_metadata("second")));
        assert_eq!(outcome, Ok(FetchOutcome::Loaded));
        let outcome = page.fetch_finished(first, Ok(mock_metadata("first")));
        assert_eq!(outcome, Ok(FetchOutcome::Superseded));

        assert_eq!(page.metadata().unwrap().id, "second");
    }

    #[test]
    fn download_records_the_invoked_format_at_the_head() {
        let mut page = loaded("abc123");
        let now = Utc::now();

        let ticket = page.begin_download(Some("720p")).unwrap();
        let entry = page.download_finished(ticket, Ok(()), now).unwrap().clone();

        assert_eq!(entry.id, "abc123");
        assert_eq!(entry.title, "Sample YouTube Video");
        assert_eq!(entry.format, VideoFormat::new("720p (mp4)", "720p", "mp4"));
        assert_eq!(entry.download_date, now);
        assert_eq!(page.history().entries()[0], entry);
    }

    #[test]
    fn download_uses_snapshot_even_after_new_video() {
        let mut page = loaded("abc123");
        let ticket = page.begin_download(Some("audio")).unwrap();

        let next = page.submit("https://youtu.be/other").unwrap();
        page.fetch_finished(next, Ok(mock_metadata("other"))).unwrap();

        let entry = page.download_finished(ticket, Ok(()), Utc::now()).unwrap();
        assert_eq!(entry.id, "abc123");
        assert_eq!(entry.format.value, "audio");
        assert_eq!(page.history().len(), 1);
    }

    #[test]
    fn each_completed_download_adds_exactly_one_entry() {
        let mut page = loaded("abc123");
        for (n, value) in ["720p", "480p", "360p"].iter().enumerate() {
            let ticket = page.begin_download(Some(*value)).unwrap();
            page.download_finished(ticket, Ok(()), Utc::now()).unwrap();
            assert_eq!(page.history().len(), n + 1);
            assert_eq!(page.history().entries()[0].format.value, *value);
        }
    }

    #[test]
    fn download_needs_a_known_format() {
        let page = PageController::new();
        assert_eq!(
            page.begin_download(Some("720p")),
            Err(ClipError::NoFormatSelected)
        );

        let page = loaded("abc123");
        assert_eq!(page.begin_download(None), Err(ClipError::NoFormatSelected));
        assert_eq!(
            page.begin_download(Some("4k")),
            Err(ClipError::NoFormatSelected)
        );
    }

    #[test]
    fn failed_download_leaves_ledger_alone() {
        let mut page = loaded("abc123");
        let ticket = page.begin_download(Some("720p")).unwrap();
        assert_eq!(
            page.download_finished(ticket, Err(ClipError::DownloadFailed), Utc::now()),
            Err(ClipError::DownloadFailed)
        );
        assert!(page.history().is_empty());
    }
}

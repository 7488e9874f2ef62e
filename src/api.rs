use async_trait::async_trait;
use log::debug;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::controller::{DownloadTicket, FetchTicket};
use crate::error::ClipError;
use crate::link;
use crate::models::{VideoFormat, VideoMetadata};

/// Source of video metadata and downloads.
///
/// The window only talks to this trait, so swapping the simulation for a
/// real client touches nothing else.
#[async_trait]
pub trait VideoService: Send + Sync {
    async fn fetch_metadata(&self, url: &str) -> Result<VideoMetadata, ClipError>;

    async fn download(&self, format: &VideoFormat) -> Result<(), ClipError>;
}

/// Waits a fixed delay, then answers with canned data.
#[derive(Debug, Clone)]
pub struct SimulatedService {
    pub fetch_latency: Duration,
    pub download_latency: Duration,
}

impl Default for SimulatedService {
    fn default() -> Self {
        Self {
            fetch_latency: Duration::from_millis(1000),
            download_latency: Duration::from_millis(2000),
        }
    }
}

#[async_trait]
impl VideoService for SimulatedService {
    async fn fetch_metadata(&self, url: &str) -> Result<VideoMetadata, ClipError> {
        tokio::time::sleep(self.fetch_latency).await;

        let id = link::extract_id(url).ok_or(ClipError::IdExtractionFailed)?;
        Ok(mock_metadata(&id))
    }

    async fn download(&self, format: &VideoFormat) -> Result<(), ClipError> {
        debug!("simulating download as {}", format.value);
        tokio::time::sleep(self.download_latency).await;
        Ok(())
    }
}

pub fn mock_formats() -> Vec<VideoFormat> {
    vec![
        VideoFormat::new("720p (mp4)", "720p", "mp4"),
        VideoFormat::new("480p (mp4)", "480p", "mp4"),
        VideoFormat::new("360p (mp4)", "360p", "mp4"),
        VideoFormat::new("Audio only (mp3)", "audio", "mp3"),
    ]
}

pub fn mock_metadata(id: &str) -> VideoMetadata {
    VideoMetadata {
        id: id.to_string(),
        title: "Sample YouTube Video".to_string(),
        thumbnail: format!("https://img.youtube.com/vi/{}/maxresdefault.jpg", id),
        duration: "10:30".to_string(),
        author: "YouTube Creator".to_string(),
        formats: mock_formats(),
    }
}

/// Completion of a background operation, drained by the window each frame.
#[derive(Debug)]
pub enum ApiEvent {
    Fetched {
        ticket: FetchTicket,
        result: Result<VideoMetadata, ClipError>,
    },
    Downloaded {
        ticket: DownloadTicket,
        result: Result<(), ClipError>,
    },
}

pub fn start_fetch(
    runtime: &Handle,
    service: Arc<dyn VideoService>,
    ticket: FetchTicket,
    url: String,
    tx: Sender<ApiEvent>,
) -> JoinHandle<()> {
    runtime.spawn(async move {
        let result = service.fetch_metadata(&url).await;
        let _ = tx.send(ApiEvent::Fetched { ticket, result });
    })
}

pub fn start_download(
    runtime: &Handle,
    service: Arc<dyn VideoService>,
    ticket: DownloadTicket,
    tx: Sender<ApiEvent>,
) -> JoinHandle<()> {
    runtime.spawn(async move {
        let result = service.download(&ticket.format).await;
        let _ = tx.send(ApiEvent::Downloaded { ticket, result });
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::PageController;
    use std::sync::mpsc;

    fn instant() -> SimulatedService {
        SimulatedService {
            fetch_latency: Duration::ZERO,
            download_latency: Duration::ZERO,
        }
    }

    #[tokio::test]
    async fn short_link_fetch_yields_four_formats() {
        let metadata = instant()
            .fetch_metadata("https://youtu.be/abc123")
            .await
            .unwrap();

        assert_eq!(metadata.id, "abc123");
        assert_eq!(metadata.title, "Sample YouTube Video");
        assert_eq!(
            metadata.thumbnail,
            "https://img.youtube.com/vi/abc123/maxresdefault.jpg"
        );
        assert_eq!(metadata.duration, "10:30");
        assert_eq!(metadata.formats.len(), 4);
        assert_eq!(metadata.formats, mock_formats());
    }

    #[tokio::test]
    async fn watch_link_fetch_uses_v_param() {
        let metadata = instant()
            .fetch_metadata("https://youtube.com/watch?v=xyz")
            .await
            .unwrap();
        assert_eq!(metadata.id, "xyz");
    }

    #[tokio::test]
    async fn fetch_without_id_fails() {
        let result = instant()
            .fetch_metadata("https://youtube.com/playlist?list=PL1")
            .await;
        assert_eq!(result, Err(ClipError::IdExtractionFailed));
    }

    #[tokio::test]
    async fn download_always_succeeds() {
        let format = VideoFormat::new("720p (mp4)", "720p", "mp4");
        assert_eq!(instant().download(&format).await, Ok(()));
    }

    #[tokio::test]
    async fn fetch_waits_for_the_latency() {
        let service = SimulatedService {
            fetch_latency: Duration::from_millis(50),
            download_latency: Duration::ZERO,
        };
        let started = std::time::Instant::now();
        service.fetch_metadata("youtu.be/abc").await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(50));
    }

    #[tokio::test]
    async fn spawned_operations_report_back() {
        let service: Arc<dyn VideoService> = Arc::new(instant());
        let (tx, rx) = mpsc::channel();
        let mut page = PageController::new();

        let ticket = page.submit("https://youtu.be/abc123").unwrap();
        start_fetch(
            &Handle::current(),
            service.clone(),
            ticket,
            "https://youtu.be/abc123".to_string(),
            tx.clone(),
        )
        .await
        .unwrap();

        match rx.recv().unwrap() {
            ApiEvent::Fetched { ticket, result } => {
                page.fetch_finished(ticket, result).unwrap();
            }
            other => panic!("unexpected event {other:?}"),
        }

        let ticket = page.begin_download(Some("720p")).unwrap();
        start_download(&Handle::current(), service, ticket, tx)
            .await
            .unwrap();

        match rx.recv().unwrap() {
            ApiEvent::Downloaded { ticket, result } => {
                page.download_finished(ticket, result, chrono::Utc::now())
                    .unwrap();
            }
            other => panic!("unexpected event {other:?}"),
        }

        assert_eq!(page.history().len(), 1);
        assert_eq!(page.history().entries()[0].format.value, "720p");
    }
}

use thiserror::Error;

/// Failures of a single user-triggered operation.
///
/// None of these are fatal: the operation that produced one is abandoned
/// without touching page state and the user sees a toast.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipError {
    #[error("URL is not a recognized video link")]
    InvalidUrl,
    #[error("could not extract a video ID from the URL")]
    IdExtractionFailed,
    #[error("failed to get video information")]
    FetchFailed,
    #[error("no format selected")]
    NoFormatSelected,
    #[error("download failed")]
    DownloadFailed,
}

impl ClipError {
    /// Localization keys for the toast title and description.
    pub fn toast_keys(&self) -> (&'static str, &'static str) {
        match self {
            ClipError::InvalidUrl => ("toast-invalid-url-title", "toast-invalid-url-body"),
            ClipError::IdExtractionFailed | ClipError::FetchFailed => {
                ("toast-error-title", "toast-fetch-failed-body")
            }
            ClipError::NoFormatSelected => ("toast-error-title", "toast-no-format-body"),
            ClipError::DownloadFailed => {
                ("toast-download-failed-title", "toast-download-failed-body")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_errors_share_one_toast() {
        assert_eq!(
            ClipError::IdExtractionFailed.toast_keys(),
            ClipError::FetchFailed.toast_keys()
        );
        assert_ne!(
            ClipError::InvalidUrl.toast_keys(),
            ClipError::FetchFailed.toast_keys()
        );
    }
}

//! Recognition of video links and extraction of the video ID.

use once_cell::sync::Lazy;
use regex::Regex;

pub const SHORT_LINK_HOST: &str = "youtu.be";

static VIDEO_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:https?://)?(?:www\.)?(youtube\.com|youtu\.be)/.+")
        .expect("video URL pattern is valid")
});

/// Returns true when `url` has the shape of a watch link or a short link.
///
/// Scheme and `www.` are optional, the host match is case-sensitive and
/// at least one character must follow the host's `/`.
pub fn is_recognized(url: &str) -> bool {
    VIDEO_URL.is_match(url)
}

fn recognized_host(url: &str) -> Option<&str> {
    VIDEO_URL
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|host| host.as_str())
}

/// Derives the video ID from `url`.
///
/// Short links yield their final path segment; every other URL yields the
/// `v` parameter of the query string that follows the first `?`.
pub fn extract_id(url: &str) -> Option<String> {
    let id = if recognized_host(url) == Some(SHORT_LINK_HOST) {
        short_link_id(url)
    } else {
        watch_param_id(url)
    };

    id.filter(|id| !id.is_empty())
}

fn short_link_id(url: &str) -> Option<String> {
    let path = url.split(['?', '#']).next()?;
    path.rsplit('/').next().map(str::to_string)
}

fn watch_param_id(url: &str) -> Option<String> {
    let query = url.split('?').nth(1)?;
    let query = query.split('#').next().unwrap_or_default();

    ::url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "v")
        .map(|(_, value)| value.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_supported_shapes() {
        for url in [
            "https://youtu.be/abc123",
            "http://youtu.be/abc123",
            "youtu.be/abc123",
            "https://www.youtube.com/watch?v=xyz",
            "www.youtube.com/watch?v=xyz",
            "youtube.com/shorts/whatever",
        ] {
            assert!(is_recognized(url), "{url} should be recognized");
        }
    }

    #[test]
    fn rejects_everything_else() {
        for url in [
            "",
            "not a url",
            "https://youtube.com/",
            "https://youtube.com",
            "https://vimeo.com/12345",
            "ftp://youtube.com/watch?v=xyz",
            "https://m.youtube.com/watch?v=xyz",
            "https://YouTube.com/watch?v=xyz",
            "https://youtubexcom/watch?v=xyz",
            " https://youtu.be/abc123",
        ] {
            assert!(!is_recognized(url), "{url:?} should be rejected");
        }
    }

    #[test]
    fn short_link_uses_final_segment() {
        assert_eq!(extract_id("https://youtu.be/abc123").as_deref(), Some("abc123"));
        assert_eq!(extract_id("youtu.be/a/b/c").as_deref(), Some("c"));
        assert_eq!(
            extract_id("https://youtu.be/abc123?t=42").as_deref(),
            Some("abc123")
        );
    }

    #[test]
    fn watch_link_uses_v_param() {
        assert_eq!(
            extract_id("https://youtube.com/watch?v=xyz").as_deref(),
            Some("xyz")
        );
        assert_eq!(
            extract_id("https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ&t=1").as_deref(),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(
            extract_id("https://youtube.com/watch?v=xyz#comments").as_deref(),
            Some("xyz")
        );
    }

    #[test]
    fn only_the_first_query_string_counts() {
        assert_eq!(
            extract_id("https://youtube.com/watch?list=1?v=late").as_deref(),
            None
        );
    }

    #[test]
    fn missing_or_empty_id_is_none() {
        assert_eq!(extract_id("https://youtube.com/watch?list=PL1"), None);
        assert_eq!(extract_id("https://youtube.com/watch?v="), None);
        assert_eq!(extract_id("https://youtube.com/channel/abc"), None);
        assert_eq!(extract_id("https://youtu.be/abc/"), None);
    }
}

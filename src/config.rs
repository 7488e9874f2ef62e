use log::warn;
use std::str::FromStr;
use std::time::Duration;

pub const FETCH_DELAY_VAR: &str = "CLIPGRAB_FETCH_DELAY_MS";
pub const DOWNLOAD_DELAY_VAR: &str = "CLIPGRAB_DOWNLOAD_DELAY_MS";
pub const TOAST_SECS_VAR: &str = "CLIPGRAB_TOAST_SECS";
pub const LANG_VAR: &str = "CLIPGRAB_LANG";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub fetch_latency: Duration,
    pub download_latency: Duration,
    pub toast_lifetime: Duration,
    /// Overrides the desktop locale when set.
    pub language: Option<String>,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fetch_latency: Duration::from_millis(1000),
            download_latency: Duration::from_millis(2000),
            toast_lifetime: Duration::from_secs(5),
            language: None,
            window_size: [900.0, 760.0],
            min_window_size: [640.0, 520.0],
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from any key/value source. Unparseable values keep
    /// the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let millis = |key: &str, fallback: Duration| {
            Duration::from_millis(parse_or(key, lookup(key), fallback.as_millis() as u64))
        };

        Self {
            fetch_latency: millis(FETCH_DELAY_VAR, defaults.fetch_latency),
            download_latency: millis(DOWNLOAD_DELAY_VAR, defaults.download_latency),
            toast_lifetime: Duration::from_secs(parse_or(
                TOAST_SECS_VAR,
                lookup(TOAST_SECS_VAR),
                defaults.toast_lifetime.as_secs(),
            )),
            language: lookup(LANG_VAR).filter(|lang| !lang.trim().is_empty()),
            ..defaults
        }
    }
}

fn parse_or<T: FromStr>(key: &str, raw: Option<String>, fallback: T) -> T {
    let Some(raw) = raw else {
        return fallback;
    };

    raw.trim().parse().unwrap_or_else(|_| {
        warn!("ignoring {}={:?}: not a number", key, raw);
        fallback
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(pairs: &[(&str, &str)]) -> Settings {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_overrides() {
        assert_eq!(settings(&[]), Settings::default());
    }

    #[test]
    fn overrides_are_applied() {
        let s = settings(&[
            (FETCH_DELAY_VAR, "10"),
            (DOWNLOAD_DELAY_VAR, " 20 "),
            (TOAST_SECS_VAR, "1"),
            (LANG_VAR, "es-ES"),
        ]);
        assert_eq!(s.fetch_latency, Duration::from_millis(10));
        assert_eq!(s.download_latency, Duration::from_millis(20));
        assert_eq!(s.toast_lifetime, Duration::from_secs(1));
        assert_eq!(s.language.as_deref(), Some("es-ES"));
    }

    #[test]
    fn garbage_falls_back_to_defaults() {
        let s = settings(&[(FETCH_DELAY_VAR, "soon"), (LANG_VAR, "  ")]);
        assert_eq!(s.fetch_latency, Settings::default().fetch_latency);
        assert_eq!(s.language, None);
    }
}

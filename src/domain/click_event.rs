//! Click event model for asynchronous click tracking.

/// An in-memory representation of a click event for async processing.
///
/// Used to pass click information from the redirect handler to the background
/// worker via a channel. This decouples the HTTP response from store writes,
/// allowing fast redirects without blocking.
///
/// All client metadata is optional to handle missing headers gracefully.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub code: String,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
}

impl ClickEvent {
    /// Creates a new click event.
    ///
    /// Header values arrive as `Option<&str>` straight from the request so
    /// the handler does not have to allocate for absent headers.
    pub fn new(
        code: String,
        ip: Option<String>,
        user_agent: Option<&str>,
        referer: Option<&str>,
    ) -> Self {
        Self {
            code,
            ip,
            user_agent: user_agent.map(|s| s.to_string()),
            referer: referer.map(|s| s.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_event_creation_full() {
        let event = ClickEvent::new(
            "a1b2c3d".to_string(),
            Some("192.168.1.1".to_string()),
            Some("Mozilla/5.0"),
            Some("https://google.com"),
        );

        assert_eq!(event.code, "a1b2c3d");
        assert_eq!(event.ip, Some("192.168.1.1".to_string()));
        assert_eq!(event.user_agent, Some("Mozilla/5.0".to_string()));
        assert_eq!(event.referer, Some("https://google.com".to_string()));
    }

    #[test]
    fn test_click_event_creation_minimal() {
        let event = ClickEvent::new("00ff00a".to_string(), None, None, None);

        assert_eq!(event.code, "00ff00a");
        assert!(event.ip.is_none());
        assert!(event.user_agent.is_none());
        assert!(event.referer.is_none());
    }

    #[test]
    fn test_click_event_clone() {
        let event = ClickEvent::new(
            "deadbee".to_string(),
            Some("1.1.1.1".to_string()),
            Some("Safari"),
            None,
        );

        let cloned = event.clone();

        assert_eq!(cloned.code, event.code);
        assert_eq!(cloned.ip, event.ip);
        assert_eq!(cloned.user_agent, event.user_agent);
    }
}

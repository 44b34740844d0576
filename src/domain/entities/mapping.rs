//! Short mapping entity, the unit of storage for the shortener.

use chrono::{DateTime, Utc};

/// A short code mapped to its destination URL.
///
/// `code` is the sole identity of a mapping; two mappings never share one.
/// `owner_id` is carried opaquely for attribution and is never interpreted.
#[derive(Debug, Clone)]
pub struct ShortMapping {
    pub code: String,
    pub target_url: String,
    pub owner_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub active: bool,
}

impl ShortMapping {
    /// Creates a new ShortMapping instance.
    pub fn new(
        code: String,
        target_url: String,
        owner_id: Option<String>,
        created_at: DateTime<Utc>,
        expires_at: Option<DateTime<Utc>>,
        active: bool,
    ) -> Self {
        Self {
            code,
            target_url,
            owner_id,
            created_at,
            expires_at,
            active,
        }
    }

    /// Returns true if the mapping has passed its expiry at the given instant.
    ///
    /// A mapping without an expiry never expires.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|e| now >= e)
    }

    /// Returns true if the mapping may be served at the given instant.
    ///
    /// Resolvable means active and not expired. Both checks use the same
    /// time snapshot so a single resolution cannot straddle the expiry.
    pub fn is_resolvable_at(&self, now: DateTime<Utc>) -> bool {
        self.active && !self.is_expired_at(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn mapping_with(expires_at: Option<DateTime<Utc>>, active: bool) -> ShortMapping {
        ShortMapping::new(
            "a1b2c3d".to_string(),
            "https://example.com".to_string(),
            None,
            Utc::now(),
            expires_at,
            active,
        )
    }

    #[test]
    fn test_mapping_creation() {
        let now = Utc::now();
        let mapping = ShortMapping::new(
            "a1b2c3d".to_string(),
            "https://example.com/page".to_string(),
            Some("user-17".to_string()),
            now,
            None,
            true,
        );

        assert_eq!(mapping.code, "a1b2c3d");
        assert_eq!(mapping.target_url, "https://example.com/page");
        assert_eq!(mapping.owner_id.as_deref(), Some("user-17"));
        assert_eq!(mapping.created_at, now);
        assert!(mapping.expires_at.is_none());
        assert!(mapping.active);
    }

    #[test]
    fn test_mapping_without_expiry_never_expires() {
        let mapping = mapping_with(None, true);
        let far_future = Utc::now() + Duration::days(365 * 100);

        assert!(!mapping.is_expired_at(far_future));
        assert!(mapping.is_resolvable_at(far_future));
    }

    #[test]
    fn test_mapping_expired_at_boundary() {
        let expiry = Utc::now();
        let mapping = mapping_with(Some(expiry), true);

        // Expiry is exclusive: at exactly `expires_at` the mapping is gone.
        assert!(mapping.is_expired_at(expiry));
        assert!(!mapping.is_resolvable_at(expiry));
        assert!(!mapping.is_expired_at(expiry - Duration::seconds(1)));
        assert!(mapping.is_resolvable_at(expiry - Duration::seconds(1)));
    }

    #[test]
    fn test_inactive_mapping_is_not_resolvable() {
        let mapping = mapping_with(None, false);

        assert!(!mapping.is_expired_at(Utc::now()));
        assert!(!mapping.is_resolvable_at(Utc::now()));
    }

    #[test]
    fn test_expiry_in_future_is_resolvable_now() {
        let mapping = mapping_with(Some(Utc::now() + Duration::hours(1)), true);

        assert!(mapping.is_resolvable_at(Utc::now()));
    }
}

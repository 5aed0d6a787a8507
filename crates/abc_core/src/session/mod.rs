use tracing::warn;

use crate::error::AppError;

/// A session key issued at sign-in, of the form `<token>:<expireEpochMillis>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionKey {
    pub token: String,
    pub expires_at_ms: i64,
}

impl SessionKey {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        if raw.is_empty() {
            return Err(AppError::new("SESSION_KEY_EMPTY", "Session key is empty"));
        }

        let mut parts = raw.split(':');
        let token = parts.next().unwrap_or_default();
        let Some(expiry) = parts.next() else {
            return Err(AppError::new(
                "SESSION_KEY_MALFORMED",
                "Session key is missing its expiry",
            ));
        };

        let expires_at_ms = expiry.trim().parse::<i64>().map_err(|e| {
            AppError::new(
                "SESSION_KEY_EXPIRY_INVALID",
                "Session key expiry is not an integer",
            )
            .with_details(format!("expiry={expiry}; err={e}"))
        })?;

        Ok(Self {
            token: token.to_string(),
            expires_at_ms,
        })
    }

    /// The session is still usable at the expiry instant itself.
    pub fn is_valid_at(&self, now_ms: i64) -> bool {
        self.expires_at_ms >= now_ms
    }
}

/// Route guard check: a stored key grants access only while it has not expired.
pub fn is_session_valid(raw: Option<&str>, now_ms: i64) -> bool {
    let Some(raw) = raw.filter(|r| !r.is_empty()) else {
        return false;
    };
    match SessionKey::parse(raw) {
        Ok(key) => key.is_valid_at(now_ms),
        Err(e) => {
            warn!(code = %e.code, "rejecting stored session key");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_token_and_expiry() {
        let key = SessionKey::parse("abc123:1700000000000").unwrap();
        assert_eq!(key.token, "abc123");
        assert_eq!(key.expires_at_ms, 1_700_000_000_000);
    }

    #[test]
    fn parse_reports_structured_codes() {
        assert_eq!(SessionKey::parse("").unwrap_err().code, "SESSION_KEY_EMPTY");
        assert_eq!(
            SessionKey::parse("abc123").unwrap_err().code,
            "SESSION_KEY_MALFORMED"
        );
        assert_eq!(
            SessionKey::parse("abc123:soon").unwrap_err().code,
            "SESSION_KEY_EXPIRY_INVALID"
        );
    }

    #[test]
    fn expiry_must_be_plain_integer_millis() {
        assert_eq!(
            SessionKey::parse("t:1.7e12").unwrap_err().code,
            "SESSION_KEY_EXPIRY_INVALID"
        );
        assert!(!is_session_valid(Some("t:1.7e12"), 0));
    }

    #[test]
    fn expiry_is_inclusive() {
        assert!(is_session_valid(Some("t:1000"), 999));
        assert!(is_session_valid(Some("t:1000"), 1000));
        assert!(!is_session_valid(Some("t:1000"), 1001));
    }

    #[test]
    fn missing_or_garbage_keys_are_invalid() {
        assert!(!is_session_valid(None, 0));
        assert!(!is_session_valid(Some(""), 0));
        assert!(!is_session_valid(Some("token-only"), 0));
        assert!(!is_session_valid(Some("t:"), 0));
    }
}

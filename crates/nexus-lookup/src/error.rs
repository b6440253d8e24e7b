//! Error types for regional place lookup

/// Place resolution failed
///
/// Carries a human-readable cause that is surfaced next to the city field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct LookupError {
    /// Human-readable cause
    pub message: String,
}

impl LookupError {
    /// Create error with message
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Lookup succeeded but produced nothing selectable
    #[inline]
    #[must_use]
    pub fn no_candidates() -> Self {
        Self::new("No regional centers found. Please enter manually.")
    }

    /// Provider failed and no cached answer exists
    #[inline]
    #[must_use]
    pub fn unavailable(country: &str) -> Self {
        Self::new(format!(
            "Could not fetch cities for {country}. The AI service may be unavailable or rate-limited."
        ))
    }
}

/// Cache backend errors
///
/// Never fatal: the cache-fronted resolver logs these and carries on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CacheError {
    /// Entry could not be read
    #[error("cache read failed: {0}")]
    Read(String),

    /// Entry could not be stored
    #[error("cache write failed: {0}")]
    Write(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_names_the_country() {
        let err = LookupError::unavailable("Ruritania");
        assert!(err.to_string().starts_with("Could not fetch cities for Ruritania."));
    }

    #[test]
    fn cache_error_display() {
        let err = CacheError::Write("quota exceeded".to_string());
        assert_eq!(err.to_string(), "cache write failed: quota exceeded");
    }
}

//! Error types for report requests and generation dispatch

/// Errors raised while building or dispatching a report request
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReportError {
    /// A request was assembled without a mandatory field
    #[error("precondition failed: {0}")]
    Precondition(String),

    /// A previous submission is still streaming
    #[error("a report is already being generated")]
    InFlight,

    /// The generation collaborator reported a failure
    #[error("report generation failed: {0}")]
    Generation(String),
}

impl ReportError {
    /// Check if the caller can simply try again later
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::InFlight | Self::Generation(_))
    }
}

/// Unknown catalog value supplied as text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: '{value}'")]
pub struct ParseCatalogError {
    /// Catalog being parsed (e.g. "tier")
    pub kind: &'static str,
    /// Offending input
    pub value: String,
}

impl ParseCatalogError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_error_display() {
        let err = ReportError::Precondition("tier".to_string());
        assert!(err.to_string().contains("precondition failed"));
    }

    #[test]
    fn report_error_is_retryable() {
        assert!(ReportError::InFlight.is_retryable());
        assert!(ReportError::Generation("quota".to_string()).is_retryable());
        assert!(!ReportError::Precondition("tier".to_string()).is_retryable());
    }

    #[test]
    fn parse_error_names_the_catalog() {
        let err = ParseCatalogError::new("tier", "Tier Z");
        assert_eq!(err.to_string(), "unknown tier: 'Tier Z'");
    }
}

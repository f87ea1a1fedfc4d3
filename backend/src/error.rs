//! Error types for loading, cleaning and querying the app table.
//!
//! Data-level problems (missing reviews, unparseable ratings, division by a
//! zero rating) never surface here: the pipeline drops or defaults them.
//! These variants cover the things that actually stop an operation.

use std::fmt;

/// Result type for crate operations.
pub type InsightsResult<T> = Result<T, InsightsError>;

/// Structured context attached to I/O and CSV failures.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The operation being performed (e.g., "read_raw", "write_cleaned")
    pub operation: Option<String>,
    /// File involved, if any
    pub path: Option<String>,
    /// Additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with an operation name.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: Some(operation.into()),
            ..Default::default()
        }
    }

    /// Set the file path.
    pub fn with_path(mut self, path: impl fmt::Display) -> Self {
        self.path = Some(path.to_string());
        self
    }

    /// Set additional details.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(ref op) = self.operation {
            parts.push(format!("operation={}", op));
        }
        if let Some(ref path) = self.path {
            parts.push(format!("path={}", path));
        }
        if let Some(ref details) = self.details {
            parts.push(format!("details={}", details));
        }
        write!(f, "[{}]", parts.join(", "))
    }
}

/// Error type for crate operations.
#[derive(Debug, thiserror::Error)]
pub enum InsightsError {
    /// Underlying filesystem error.
    #[error("I/O error: {source} {context}")]
    Io {
        #[source]
        source: std::io::Error,
        context: ErrorContext,
    },

    /// Malformed CSV (bad quoting, invalid UTF-8, ...).
    #[error("CSV error: {source} {context}")]
    Csv {
        #[source]
        source: csv::Error,
        context: ErrorContext,
    },

    /// A required column is absent from the header row.
    #[error("Missing required column '{column}' {context}")]
    MissingColumn {
        column: String,
        context: ErrorContext,
    },

    /// Configuration file or environment variable could not be used.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Filter parameters outside the accepted ranges.
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    /// A comparison was requested for an app that is not on the leaderboard.
    #[error("App not found on leaderboard: {0}")]
    UnknownApp(String),
}

impl InsightsError {
    /// Wrap an I/O error with context.
    pub fn io(source: std::io::Error, context: ErrorContext) -> Self {
        Self::Io { source, context }
    }

    /// Wrap a CSV error with context.
    pub fn csv(source: csv::Error, context: ErrorContext) -> Self {
        Self::Csv { source, context }
    }

    /// Create a missing-column error.
    pub fn missing_column(column: impl Into<String>, context: ErrorContext) -> Self {
        Self::MissingColumn {
            column: column.into(),
            context,
        }
    }

    /// Whether the error was caused by the caller's input rather than the server.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidFilter(_) | Self::UnknownApp(_))
    }
}

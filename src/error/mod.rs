//! # Error Module
//!
//! Error types for the signing pipeline.
//!
//! ## Design Principles
//! - **Never panic** on input data - return errors instead
//! - **Include context** - which stage, which primitive, what went wrong
//! - **All-or-nothing** - any fault aborts the whole run; no partial
//!   combined output is ever produced

use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum SignerError {
    #[error("Primitive error: {0}")]
    Primitive(#[from] PrimitiveError),

    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Errors raised by the hash primitives
#[derive(Error, Debug)]
pub enum PrimitiveError {
    #[error("Checksum computation failed: {reason}")]
    ChecksumFailed { reason: String },

    #[error("Digest computation failed: {reason}")]
    DigestFailed { reason: String },

    #[error("Digest serialization lock was poisoned by a panicking caller")]
    LockPoisoned,
}

/// Errors raised while running the pipeline
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Stage '{stage}' failed: {source}")]
    Stage {
        stage: &'static str,
        #[source]
        source: PrimitiveError,
    },

    #[error("Stage '{stage}' lost its downstream consumer")]
    Disconnected { stage: &'static str },

    #[error("A worker of stage '{stage}' panicked")]
    WorkerPanicked { stage: &'static str },
}

/// Convenience Result type alias
pub type Result<T> = std::result::Result<T, SignerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_error_includes_stage_name() {
        let error = PipelineError::Stage {
            stage: "single-hash",
            source: PrimitiveError::DigestFailed {
                reason: "digest backend unavailable".to_string(),
            },
        };
        let message = error.to_string();
        assert!(message.contains("single-hash"));
    }

    #[test]
    fn stage_error_preserves_source() {
        let error = PipelineError::Stage {
            stage: "multi-hash",
            source: PrimitiveError::ChecksumFailed {
                reason: "injected failure".to_string(),
            },
        };
        let source = std::error::Error::source(&error).expect("source should be set");
        assert!(source.to_string().contains("injected failure"));
    }

    #[test]
    fn primitive_error_converts_to_top_level() {
        let error: SignerError = PrimitiveError::LockPoisoned.into();
        assert!(matches!(error, SignerError::Primitive(_)));
    }
}

//! # Data Signer
//!
//! A staged concurrent signing pipeline with deterministic output.
//!
//! ## Core Philosophy
//! - **Deterministic** - emission order always equals arrival order,
//!   no matter how sub-computations interleave
//! - **All-or-nothing** - any primitive fault aborts the whole run;
//!   a partial combined signature is never produced
//! - **Explicit coordination** - the digest's serialization lock and
//!   each barrier's task group are first-class values, not side effects
//!
//! ## Architecture
//! The library is split into a core engine (UI-agnostic) and
//! presentation layers:
//! - `core` - primitives, the pipeline executor and the signing stages
//! - `events` - event-driven progress reporting (GUI-ready)
//! - `error` - error taxonomy with per-stage context

pub mod core;
pub mod error;
pub mod events;

// Re-export commonly used types at the crate root
pub use error::{Result, SignerError};

/// Initialize tracing for the library
///
/// This should be called by the application entry point (CLI or GUI).
pub fn init_tracing() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set global default tracing subscriber");
}

//! # Stages Module
//!
//! The concrete stages of the signing pipeline.
//!
//! ## Standard Chain
//! 1. **ValueSource** - emits a finite sequence of input values
//! 2. **SingleHashStage** - `checksum(v) + "~" + checksum(digest(v))`
//! 3. **MultiHashStage** - six prefixed checksums per item, concatenated
//! 4. **CombineStage** - sorts all signatures and joins them with `_`
//! 5. **CollectSink** - captures the combined result for the caller
//!
//! SingleHash and MultiHash fan each item out across dedicated threads
//! and reassemble results in arrival order before emitting; Combine is
//! order-independent by construction.

mod combine;
mod multi_hash;
mod single_hash;
mod source;

pub use combine::CombineStage;
pub use multi_hash::{MultiHashStage, FANOUT};
pub use single_hash::SingleHashStage;
pub use source::{CollectSink, ValueSource};

//! # data-signer CLI
//!
//! Command-line interface for the signing pipeline.
//!
//! ## Usage
//! ```bash
//! data-signer sign 0 1 2 --verbose
//! data-signer sign 0 1 2 --output json
//! ```

mod cli;

use data_signer::Result;

fn main() -> Result<()> {
    data_signer::init_tracing();
    cli::run()
}

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error types surfaced at the crate's boundaries.
//!
//! Per the core's propagation policy, only allocation and edge-table
//! capacity failures are fatal; everything else (duplicate points, empty
//! input, missing output files) is reported through plain return values
//! and never through this enum.

use thiserror::Error;

/// Fatal errors raised by the CLI-facing I/O and parsing layers.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("edge table capacity exceeded: requested {requested}, reserved {max}")]
    CapacityExceeded { requested: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

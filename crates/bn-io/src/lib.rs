//! `bn-io` — the textual face of the busnet engine.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`request`] | `BaseRequest`, `StatRequest`, `RequestDocument`            |
//! | [`parser`]  | `read_document`, `parse_base_request`, `parse_stat_request`|
//! | [`format`]  | `StatResponse` (`Display`), `format_significant`           |
//! | [`runner`]  | `build_network`, `answer`, `process`                       |
//! | [`error`]   | `IoError`, `IoResult<T>`                                   |

pub mod error;
pub mod format;
pub mod parser;
pub mod request;
pub mod runner;

#[cfg(test)]
mod tests;

pub use error::{IoError, IoResult};
pub use format::{PRECISION, StatResponse, format_significant};
pub use parser::{parse_base_request, parse_stat_request, read_document};
pub use request::{BaseRequest, RequestDocument, StatRequest};
pub use runner::{answer, build_network, process};

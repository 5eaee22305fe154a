#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Decoding of `ghostprint://` invocation payloads into print requests.
//!
//! Layout: `codec.rs` (framing, percent decoding, wire shape), `error.rs`
//! (`DecodeError`).

pub mod codec;
pub mod error;

pub use codec::{PrintRequest, RequestMethod, SCHEME_PREFIX, TRAILING_DELIMITER, decode};
pub use error::DecodeError;

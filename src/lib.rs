//! Parse, validate, serialize, and fetch JSON Feed documents.
//!
//! JSON Feed (<https://jsonfeed.org/version/1>) is a syndication format:
//! plain JSON with a fixed schema, a feed object carrying publication
//! metadata and an ordered list of items. This crate turns raw bytes into
//! a typed [`Feed`] (or a structured [`DecodeError`]), turns a [`Feed`]
//! back into canonical JSON, and audits a decoded feed against the
//! format's structural rules without stopping at the first problem.
//!
//! # Example
//!
//! ```
//! use jsonfeed::{codec, validate};
//!
//! let feed = codec::from_str(r#"{
//!     "version": "https://jsonfeed.org/version/1",
//!     "title": "Example",
//!     "items": [{"id": 1, "content_html": "<p>hi</p>"}]
//! }"#).unwrap();
//!
//! assert_eq!(feed.items.as_ref().unwrap()[0].id, "1");
//! assert!(validate::validate(&feed).is_empty());
//!
//! let json = codec::to_string(&feed).unwrap();
//! assert!(json.contains(r#""id":"1""#));
//! ```
//!
//! The decode/encode/validate core is pure and synchronous; [`fetch`] is
//! the only async entry point and performs a single HTTP GET through a
//! caller-owned `reqwest::Client`.

pub mod codec;
pub mod datetime;
pub mod fetch;
pub mod ident;
pub mod model;
pub mod validate;

pub use codec::{from_slice, from_str, to_string, to_vec, DecodeError, EncodeError};
pub use fetch::{fetch, FetchError};
pub use model::{Attachment, Author, Feed, Hub, Item};
pub use validate::{validate, Violation};

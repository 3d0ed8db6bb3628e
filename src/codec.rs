//! Decoding and encoding of JSON Feed documents.
//!
//! Decode parses the input to a [`serde_json::Value`] and maps the object
//! graph onto the model field by field. That keeps failure reporting
//! precise: every error names the container and field it came from, and a
//! date that fails the flexible grammar is reported as a malformed date,
//! not as a missing or mistyped field. Unknown keys are ignored for
//! forward compatibility; a missing required field aborts the whole decode
//! (there is no partial `Feed`).
//!
//! Encode goes through serde with the wire names declared on the model.
//! `serde_json` never escapes forward slashes, so URLs come out with a
//! literal `/` rather than `\/`.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::datetime;
use crate::ident;
use crate::model::{Attachment, Author, Feed, Hub, Item};

type Object = Map<String, Value>;

/// Why a document could not be decoded into a [`Feed`].
///
/// Decode failures are total: none of them leaves a partially populated
/// feed behind.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The input is not well-formed JSON.
    #[error("invalid JSON: {0}")]
    Syntax(#[from] serde_json::Error),
    /// The top-level JSON value is not an object.
    #[error("top-level value must be a JSON object")]
    NotAnObject,
    /// A wire-required field is absent (or null).
    #[error("{container} is missing required field `{field}`")]
    MissingField {
        container: &'static str,
        field: &'static str,
    },
    /// A field is present but carries the wrong JSON shape.
    #[error("{container} field `{field}` should be {expected}")]
    WrongType {
        container: &'static str,
        field: &'static str,
        expected: &'static str,
    },
    /// A date string does not match the accepted timestamp grammar.
    /// Distinct from [`DecodeError::MissingField`]: the field was there,
    /// its value was not a usable date.
    #[error("item field `{field}` holds an unparseable date: {value:?}")]
    MalformedDate { field: &'static str, value: String },
    /// An item `id` was given as something other than a string or number.
    #[error("item `id` must be a JSON string or number, found {found}")]
    InvalidId { found: &'static str },
}

/// Why a feed could not be serialized. With this data model the only
/// remaining cause is a non-finite float in an attachment size/duration,
/// which `serde_json` refuses to emit.
#[derive(Debug, Error)]
#[error("failed to serialize feed: {0}")]
pub struct EncodeError(#[from] serde_json::Error);

/// Decodes a JSON Feed document from raw bytes.
pub fn from_slice(bytes: &[u8]) -> Result<Feed, DecodeError> {
    let value: Value = serde_json::from_slice(bytes)?;
    decode_feed(&value)
}

/// Decodes a JSON Feed document from a string.
pub fn from_str(text: &str) -> Result<Feed, DecodeError> {
    let value: Value = serde_json::from_str(text)?;
    decode_feed(&value)
}

/// Encodes a feed as canonical JSON text.
pub fn to_string(feed: &Feed) -> Result<String, EncodeError> {
    Ok(serde_json::to_string(feed)?)
}

/// Encodes a feed as canonical JSON bytes.
pub fn to_vec(feed: &Feed) -> Result<Vec<u8>, EncodeError> {
    Ok(serde_json::to_vec(feed)?)
}

// ============================================================================
// Field readers
// ============================================================================

/// Reads an optional field, treating an absent key and an explicit null
/// the same way.
fn opt_str(
    obj: &Object,
    container: &'static str,
    field: &'static str,
) -> Result<Option<String>, DecodeError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(DecodeError::WrongType {
            container,
            field,
            expected: "a string",
        }),
    }
}

fn req_str(
    obj: &Object,
    container: &'static str,
    field: &'static str,
) -> Result<String, DecodeError> {
    opt_str(obj, container, field)?.ok_or(DecodeError::MissingField { container, field })
}

fn opt_bool(
    obj: &Object,
    container: &'static str,
    field: &'static str,
) -> Result<Option<bool>, DecodeError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(_) => Err(DecodeError::WrongType {
            container,
            field,
            expected: "a boolean",
        }),
    }
}

fn opt_number(
    obj: &Object,
    container: &'static str,
    field: &'static str,
) -> Result<Option<f64>, DecodeError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => Ok(n.as_f64()),
        Some(_) => Err(DecodeError::WrongType {
            container,
            field,
            expected: "a number",
        }),
    }
}

fn opt_date(obj: &Object, field: &'static str) -> Result<Option<DateTime<Utc>>, DecodeError> {
    match opt_str(obj, "item", field)? {
        None => Ok(None),
        Some(text) => match datetime::parse_flexible(&text) {
            Some(parsed) => Ok(Some(parsed)),
            None => Err(DecodeError::MalformedDate { field, value: text }),
        },
    }
}

fn opt_string_array(
    obj: &Object,
    container: &'static str,
    field: &'static str,
) -> Result<Option<Vec<String>>, DecodeError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(elements)) => elements
            .iter()
            .map(|element| match element {
                Value::String(s) => Ok(s.clone()),
                _ => Err(DecodeError::WrongType {
                    container,
                    field,
                    expected: "an array of strings",
                }),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some),
        Some(_) => Err(DecodeError::WrongType {
            container,
            field,
            expected: "an array of strings",
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ============================================================================
// Entity decoders
// ============================================================================

fn decode_feed(value: &Value) -> Result<Feed, DecodeError> {
    let obj = value.as_object().ok_or(DecodeError::NotAnObject)?;

    let version = req_str(obj, "feed", "version")?;
    let title = req_str(obj, "feed", "title")?;

    let items = match obj.get("items") {
        None | Some(Value::Null) => {
            return Err(DecodeError::MissingField {
                container: "feed",
                field: "items",
            })
        }
        Some(Value::Array(elements)) => elements
            .iter()
            .map(decode_item)
            .collect::<Result<Vec<_>, _>>()?,
        Some(_) => {
            return Err(DecodeError::WrongType {
                container: "feed",
                field: "items",
                expected: "an array",
            })
        }
    };

    let author = match obj.get("author") {
        None | Some(Value::Null) => None,
        Some(value) => Some(decode_author(value, "feed")?),
    };

    let hubs = match obj.get("hubs") {
        None | Some(Value::Null) => None,
        Some(Value::Array(elements)) => Some(
            elements
                .iter()
                .map(decode_hub)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Some(_) => {
            return Err(DecodeError::WrongType {
                container: "feed",
                field: "hubs",
                expected: "an array",
            })
        }
    };

    Ok(Feed {
        version: Some(version),
        title: Some(title),
        items: Some(items),
        home_page_url: opt_str(obj, "feed", "home_page_url")?,
        feed_url: opt_str(obj, "feed", "feed_url")?,
        description: opt_str(obj, "feed", "description")?,
        user_comment: opt_str(obj, "feed", "user_comment")?,
        next_url: opt_str(obj, "feed", "next_url")?,
        icon: opt_str(obj, "feed", "icon")?,
        favicon: opt_str(obj, "feed", "favicon")?,
        author,
        expired: opt_bool(obj, "feed", "expired")?,
        hubs,
    })
}

fn decode_item(value: &Value) -> Result<Item, DecodeError> {
    let obj = value.as_object().ok_or(DecodeError::WrongType {
        container: "feed",
        field: "items",
        expected: "an array of objects",
    })?;

    let id = match obj.get("id") {
        None => {
            return Err(DecodeError::MissingField {
                container: "item",
                field: "id",
            })
        }
        Some(value) => ident::coerce(value).ok_or(DecodeError::InvalidId {
            found: json_type_name(value),
        })?,
    };

    let author = match obj.get("author") {
        None | Some(Value::Null) => None,
        Some(value) => Some(decode_author(value, "item")?),
    };

    let attachments = match obj.get("attachments") {
        None | Some(Value::Null) => None,
        Some(Value::Array(elements)) => Some(
            elements
                .iter()
                .map(decode_attachment)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Some(_) => {
            return Err(DecodeError::WrongType {
                container: "item",
                field: "attachments",
                expected: "an array",
            })
        }
    };

    Ok(Item {
        id,
        url: opt_str(obj, "item", "url")?,
        external_url: opt_str(obj, "item", "external_url")?,
        title: opt_str(obj, "item", "title")?,
        content_html: opt_str(obj, "item", "content_html")?,
        content_text: opt_str(obj, "item", "content_text")?,
        summary: opt_str(obj, "item", "summary")?,
        image: opt_str(obj, "item", "image")?,
        banner_image: opt_str(obj, "item", "banner_image")?,
        date_published: opt_date(obj, "date_published")?,
        date_modified: opt_date(obj, "date_modified")?,
        author,
        tags: opt_string_array(obj, "item", "tags")?,
        attachments,
    })
}

fn decode_attachment(value: &Value) -> Result<Attachment, DecodeError> {
    let obj = value.as_object().ok_or(DecodeError::WrongType {
        container: "item",
        field: "attachments",
        expected: "an array of objects",
    })?;

    Ok(Attachment {
        url: Some(req_str(obj, "attachment", "url")?),
        mime_type: opt_str(obj, "attachment", "mime_type")?,
        title: opt_str(obj, "attachment", "title")?,
        size_in_bytes: opt_number(obj, "attachment", "size_in_bytes")?,
        duration_in_seconds: opt_number(obj, "attachment", "duration_in_seconds")?,
    })
}

fn decode_author(value: &Value, container: &'static str) -> Result<Author, DecodeError> {
    let obj = value.as_object().ok_or(DecodeError::WrongType {
        container,
        field: "author",
        expected: "an object",
    })?;

    Ok(Author {
        name: opt_str(obj, "author", "name")?,
        url: opt_str(obj, "author", "url")?,
        avatar: opt_str(obj, "author", "avatar")?,
    })
}

fn decode_hub(value: &Value) -> Result<Hub, DecodeError> {
    let obj = value.as_object().ok_or(DecodeError::WrongType {
        container: "feed",
        field: "hubs",
        expected: "an array of objects",
    })?;

    Ok(Hub {
        hub_type: Some(req_str(obj, "hub", "type")?),
        url: Some(req_str(obj, "hub", "url")?),
    })
}

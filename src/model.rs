//! Typed representation of a JSON Feed document.
//!
//! These are plain value types: owned children, no back-references, no
//! interior mutability. A `Feed` comes out of [`crate::codec::from_slice`]
//! or is built directly by a caller that wants to encode one.
//!
//! Required-ness lives in two places. The decoder refuses documents that
//! omit `version`, `title`, `items`, an item `id`, an attachment `url`, or
//! a hub `type`/`url`. The structs themselves still store `Option` for
//! those fields (except `Item::id`, which no validation rule inspects), so
//! a hand-built feed can be audited by [`crate::validate::validate`]
//! without the type system getting in the way.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::datetime;

/// A JSON Feed document: publication metadata plus an ordered list of items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feed {
    /// URI identifying the schema revision, e.g. `https://jsonfeed.org/version/1`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Item>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_page_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_comment: Option<String>,
    /// URL of the next page of items for paged feeds. Must differ from
    /// `feed_url`; the validator flags equality.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expired: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hubs: Option<Vec<Hub>>,
}

/// One entry (e.g. a post) within a feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    /// Canonical string identifier. On the wire this may arrive as a JSON
    /// string, integer, or float; see [`crate::ident::coerce`].
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_image: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "datetime::serialize_opt"
    )]
    pub date_published: Option<DateTime<Utc>>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "datetime::serialize_opt"
    )]
    pub date_modified: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
}

/// A media resource associated with an item (e.g. a podcast audio file).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attachment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_in_bytes: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_in_seconds: Option<f64>,
}

/// Feed- or item-level author. The format requires at least one of the
/// three fields when an author object is present at all.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Author {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// An endpoint supporting real-time update notification for the feed.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Hub {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub hub_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Feed {
    /// Builds a feed with the three wire-required fields set and every
    /// optional field empty.
    pub fn new(
        version: impl Into<String>,
        title: impl Into<String>,
        items: Vec<Item>,
    ) -> Self {
        Feed {
            version: Some(version.into()),
            title: Some(title.into()),
            items: Some(items),
            home_page_url: None,
            feed_url: None,
            description: None,
            user_comment: None,
            next_url: None,
            icon: None,
            favicon: None,
            author: None,
            expired: None,
            hubs: None,
        }
    }
}

impl Item {
    /// Builds an item with the given identifier and every optional field empty.
    pub fn new(id: impl Into<String>) -> Self {
        Item {
            id: id.into(),
            url: None,
            external_url: None,
            title: None,
            content_html: None,
            content_text: None,
            summary: None,
            image: None,
            banner_image: None,
            date_published: None,
            date_modified: None,
            author: None,
            tags: None,
            attachments: None,
        }
    }
}

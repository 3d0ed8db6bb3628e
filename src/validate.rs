//! Structural validation of decoded (or hand-built) feeds.
//!
//! Validation is a secondary, non-fatal audit: it never mutates, never
//! fails, and never stops at the first problem. The caller gets the full
//! list of deviations and decides which, if any, are fatal for its own
//! use case. An empty list means the document is structurally conformant.

use crate::model::{Attachment, Author, Feed, Hub, Item};

/// One detected deviation from the format's structural rules.
///
/// Violations carry no severity ranking; their order in the returned list
/// is fixed purely so results are reproducible.
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    /// A required field is absent. Field names use wire spelling
    /// (`version`, `mime_type`, `type`, ...).
    MissingParameter(&'static str),
    /// An author object is present but carries none of name/url/avatar.
    AuthorMissingIdentifyingProperty(Author),
    /// An item has neither `content_html` nor `content_text`.
    ItemMissingContent(Item),
    /// `next_url` and `feed_url` are both present and byte-equal.
    NextUrlEqualsFeedUrl,
}

/// Walks a feed and collects every rule violation, in a fixed order:
/// feed-level required fields, feed author, items (content, author,
/// attachments per item), hubs, and the `next_url`/`feed_url` comparison
/// last.
pub fn validate(feed: &Feed) -> Vec<Violation> {
    let mut violations = Vec::new();

    if feed.version.is_none() {
        violations.push(Violation::MissingParameter("version"));
    }
    if feed.title.is_none() {
        violations.push(Violation::MissingParameter("title"));
    }

    if let Some(author) = &feed.author {
        validate_author(author, &mut violations);
    }

    match &feed.items {
        Some(items) => {
            for item in items {
                validate_item(item, &mut violations);
            }
        }
        None => violations.push(Violation::MissingParameter("items")),
    }

    if let Some(hubs) = &feed.hubs {
        for hub in hubs {
            validate_hub(hub, &mut violations);
        }
    }

    // Literal string comparison, deliberately without URL normalization.
    if let (Some(next_url), Some(feed_url)) = (&feed.next_url, &feed.feed_url) {
        if next_url == feed_url {
            violations.push(Violation::NextUrlEqualsFeedUrl);
        }
    }

    violations
}

fn validate_item(item: &Item, violations: &mut Vec<Violation>) {
    if item.content_html.is_none() && item.content_text.is_none() {
        violations.push(Violation::ItemMissingContent(item.clone()));
    }

    if let Some(author) = &item.author {
        validate_author(author, violations);
    }

    if let Some(attachments) = &item.attachments {
        for attachment in attachments {
            validate_attachment(attachment, violations);
        }
    }
}

fn validate_author(author: &Author, violations: &mut Vec<Violation>) {
    if author.name.is_none() && author.url.is_none() && author.avatar.is_none() {
        violations.push(Violation::AuthorMissingIdentifyingProperty(author.clone()));
    }
}

fn validate_attachment(attachment: &Attachment, violations: &mut Vec<Violation>) {
    if attachment.url.is_none() {
        violations.push(Violation::MissingParameter("url"));
    }
    if attachment.mime_type.is_none() {
        violations.push(Violation::MissingParameter("mime_type"));
    }
}

fn validate_hub(hub: &Hub, violations: &mut Vec<Violation>) {
    if hub.hub_type.is_none() {
        violations.push(Violation::MissingParameter("type"));
    }
    if hub.url.is_none() {
        violations.push(Violation::MissingParameter("url"));
    }
}

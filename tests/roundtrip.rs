//! Property-based tests over generated feeds.
//!
//! The generators only produce violation-free feeds (every author carries a
//! name, every item carries content, attachments carry url and mime type,
//! next/feed URLs come from disjoint paths), and whole-second timestamps,
//! since the canonical encoder deliberately drops sub-second precision.

use chrono::{DateTime, Utc};
use jsonfeed::{codec, datetime, validate::validate, Attachment, Author, Feed, Hub, Item};
use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;

fn timestamp_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    // 1970..2100, whole seconds
    (0i64..4_102_444_800i64).prop_map(|secs| DateTime::<Utc>::from_timestamp(secs, 0).unwrap())
}

fn url_strategy(path: &'static str) -> impl Strategy<Value = String> {
    "[a-z0-9]{1,10}".prop_map(move |slug| format!("https://example.com/{}/{}", path, slug))
}

fn author_strategy() -> impl Strategy<Value = Author> {
    ("[a-zA-Z ]{1,16}", option::of(url_strategy("people"))).prop_map(|(name, url)| Author {
        name: Some(name),
        url,
        avatar: None,
    })
}

fn attachment_strategy() -> impl Strategy<Value = Attachment> {
    (
        url_strategy("media"),
        option::of(0u64..100_000_000),
        option::of(0u64..100_000),
    )
        .prop_map(|(url, size, duration)| Attachment {
            url: Some(url),
            mime_type: Some("audio/mpeg".to_string()),
            title: None,
            size_in_bytes: size.map(|s| s as f64),
            duration_in_seconds: duration.map(|d| d as f64),
        })
}

fn hub_strategy() -> impl Strategy<Value = Hub> {
    url_strategy("hubs").prop_map(|url| Hub {
        hub_type: Some("WebSub".to_string()),
        url: Some(url),
    })
}

fn item_strategy() -> impl Strategy<Value = Item> {
    (
        "[a-z0-9-]{1,20}",
        // Includes slashes (for the escaping property) but no backslashes,
        // whose JSON escaping would itself read as a `\/` sequence.
        "[a-zA-Z0-9 /:.,!?'-]{1,40}",
        option::of("[a-zA-Z ]{1,30}"),
        option::of(timestamp_strategy()),
        option::of(timestamp_strategy()),
        option::of(author_strategy()),
        option::of(vec("[a-z]{1,8}", 0..4)),
        option::of(vec(attachment_strategy(), 0..3)),
    )
        .prop_map(
            |(id, content, title, published, modified, author, tags, attachments)| {
                let mut item = Item::new(id);
                item.content_text = Some(content);
                item.title = title;
                item.date_published = published;
                item.date_modified = modified;
                item.author = author;
                item.tags = tags;
                item.attachments = attachments;
                item
            },
        )
}

fn feed_strategy() -> impl Strategy<Value = Feed> {
    (
        "[a-zA-Z ]{1,24}",
        vec(item_strategy(), 0..5),
        option::of(url_strategy("home")),
        // Disjoint path segments keep next_url and feed_url unequal.
        option::of(url_strategy("feed")),
        option::of(url_strategy("next")),
        option::of(author_strategy()),
        option::of(any::<bool>()),
        option::of(vec(hub_strategy(), 0..3)),
    )
        .prop_map(
            |(title, items, home_page_url, feed_url, next_url, author, expired, hubs)| {
                let mut feed = Feed::new("https://jsonfeed.org/version/1", title, items);
                feed.home_page_url = home_page_url;
                feed.feed_url = feed_url;
                feed.next_url = next_url;
                feed.author = author;
                feed.expired = expired;
                feed.hubs = hubs;
                feed
            },
        )
}

proptest! {
    #[test]
    fn prop_generated_feeds_are_conformant(feed in feed_strategy()) {
        prop_assert!(validate(&feed).is_empty());
    }

    #[test]
    fn prop_encode_decode_roundtrip(feed in feed_strategy()) {
        let bytes = codec::to_vec(&feed).unwrap();
        let decoded = codec::from_slice(&bytes).unwrap();
        prop_assert_eq!(decoded, feed);
    }

    #[test]
    fn prop_validate_is_idempotent(feed in feed_strategy()) {
        prop_assert_eq!(validate(&feed), validate(&feed));
    }

    #[test]
    fn prop_canonical_dates_reparse_to_same_instant(ts in timestamp_strategy()) {
        let text = datetime::format_rfc3339(&ts);
        prop_assert_eq!(datetime::parse_flexible(&text), Some(ts));
    }

    #[test]
    fn prop_encoded_output_never_escapes_slashes(feed in feed_strategy()) {
        let json = codec::to_string(&feed).unwrap();
        prop_assert!(!json.contains(r"\/"));
    }
}

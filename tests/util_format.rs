//! Formatting helper behavior: markdown escaping, emoji mentions and
//! timestamp wording.

use valshop_bot::util::{emoji_to_string, escape_markdown, expiry_phrase, relative_timestamp};

#[test]
fn escape_markdown_escapes_control_characters() {
    assert_eq!(
        escape_markdown("*bold* _it_ `code` ~s~ |sp| \\"),
        "\\*bold\\* \\_it\\_ \\`code\\` \\~s\\~ \\|sp\\| \\\\"
    );
}

#[test]
fn escape_markdown_leaves_plain_text_alone() {
    assert_eq!(escape_markdown("Reaver Vandal 2.0"), "Reaver Vandal 2.0");
}

#[test]
fn emoji_mention_formats() {
    assert_eq!(emoji_to_string("ValPoints", 1234, false), "<:ValPoints:1234>");
    assert_eq!(emoji_to_string("spin", 99, true), "<a:spin:99>");
}

#[test]
fn relative_timestamp_markup() {
    assert_eq!(relative_timestamp(1700000000), "<t:1700000000:R>");
}

#[test]
fn expiry_phrase_flips_on_now() {
    assert_eq!(expiry_phrase(100, 50), "expires");
    assert_eq!(expiry_phrase(100, 100), "expired");
    assert_eq!(expiry_phrase(100, 150), "expired");
}

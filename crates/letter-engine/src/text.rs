//! Plain-text reconstruction from WordprocessingML parts
//!
//! The editing tool splits visible text across many run nodes, often
//! mid-word, whenever formatting or revision tracking changes. Reading-order
//! text is recovered by concatenating the inner content of every
//! text-bearing node in the order it appears and discarding all structural
//! markup. Three node kinds carry literal text: ordinary runs (`w:t`), field
//! instructions (`w:instrText`) and tracked deletions (`w:delText`).

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // One alternation per node kind so each closing tag is matched against
    // its own opening tag. `<w:t` must be followed by `>` or an attribute,
    // which keeps `<w:tab/>` and friends from matching.
    static ref TEXT_NODE: Regex = Regex::new(
        r"(?s)<w:t(?:\s[^>]*)?>(.*?)</w:t>|<w:instrText(?:\s[^>]*)?>(.*?)</w:instrText>|<w:delText(?:\s[^>]*)?>(.*?)</w:delText>"
    )
    .unwrap();
}

/// Reconstruct the linear plain text of one document part
///
/// Best-effort: a malformed part yields whatever well-formed text nodes
/// still match, possibly the empty string. Never fails.
pub fn reconstruct_text(xml: &str) -> String {
    let mut text = String::new();
    for caps in TEXT_NODE.captures_iter(xml) {
        let inner = caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3));
        if let Some(m) = inner {
            text.push_str(&decode_entities(m.as_str()));
        }
    }
    text
}

/// Decode the five standard XML entities
///
/// `&amp;` is decoded last so that `&amp;lt;` yields the literal `&lt;`
/// rather than being decoded twice.
fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

//! Recolor raw SVG markup to a single fill color
//!
//! Three rewrites, all idempotent:
//! 1. the root `<svg>` element gets `fill="<color>"` (replaced or inserted)
//! 2. `fill="currentColor"` anywhere becomes the color
//! 3. literal hex fills (`fill="#abc"`, `fill="#aabbcc"`, ...) become the color
//!
//! Step 1 never depends on steps 2/3 matching anything.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::warn;

/// First `<svg ...>` start tag (attributes may span lines)
static ROOT_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<svg(?:\s[^>]*)?/?>").unwrap());

/// A `fill` attribute inside a single start tag
static ROOT_FILL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(\s)fill\s*=\s*(?:"[^"]*"|'[^']*')"#).unwrap());

/// `currentColor` or hex fills anywhere in the document
static REPLACEABLE_FILL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(\s)fill\s*=\s*(?:"(?:currentColor|#[0-9A-Fa-f]{3,8})"|'(?:currentColor|#[0-9A-Fa-f]{3,8})')"#,
    )
    .unwrap()
});

/// Recolor `svg` so that it renders in `color`
pub fn recolor(svg: &str, color: &str) -> String {
    let body = REPLACEABLE_FILL
        .replace_all(svg, fill_with(color))
        .into_owned();

    let Some(tag) = ROOT_TAG.find(&body) else {
        warn!("SVG markup has no <svg> root element, root fill not applied");
        return body;
    };

    let original_tag = tag.as_str();
    let new_tag = if ROOT_FILL.is_match(original_tag) {
        ROOT_FILL.replace(original_tag, fill_with(color)).into_owned()
    } else {
        insert_fill(original_tag, color)
    };

    let mut out = String::with_capacity(body.len() + color.len() + 8);
    out.push_str(&body[..tag.start()]);
    out.push_str(&new_tag);
    out.push_str(&body[tag.end()..]);
    out
}

/// Replacer keeping the captured leading whitespace
fn fill_with(color: &str) -> impl Fn(&Captures<'_>) -> String + '_ {
    move |caps: &Captures<'_>| format!("{}fill=\"{}\"", &caps[1], color)
}

fn insert_fill(tag: &str, color: &str) -> String {
    let (head, close) = match tag.strip_suffix("/>") {
        Some(head) => (head, "/>"),
        None => (&tag[..tag.len() - 1], ">"),
    };
    format!("{} fill=\"{}\"{}", head.trim_end(), color, close)
}

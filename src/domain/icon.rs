//! Icon descriptors and style variants

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

/// Placeholder a CDN URL template may carry instead of a concrete style
pub const STYLE_PLACEHOLDER: &str = "{style}";

/// Rendering family of an icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconStyle {
    Solid,
    Regular,
    Brands,
    Light,
    Thin,
    Duotone,
}

impl IconStyle {
    pub const ALL: [IconStyle; 6] = [
        IconStyle::Solid,
        IconStyle::Regular,
        IconStyle::Brands,
        IconStyle::Light,
        IconStyle::Thin,
        IconStyle::Duotone,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IconStyle::Solid => "solid",
            IconStyle::Regular => "regular",
            IconStyle::Brands => "brands",
            IconStyle::Light => "light",
            IconStyle::Thin => "thin",
            IconStyle::Duotone => "duotone",
        }
    }
}

impl fmt::Display for IconStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a style name outside the known set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown icon style: {0}")]
pub struct UnknownStyle(pub String);

impl FromStr for IconStyle {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        IconStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == lower)
            .ok_or_else(|| UnknownStyle(s.to_string()))
    }
}

/// Style filter applied to a search: everything, or a single family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StyleFilter {
    #[default]
    All,
    Only(IconStyle),
}

impl StyleFilter {
    /// Value sent as the `style` query parameter
    pub fn as_query_value(&self) -> &'static str {
        match self {
            StyleFilter::All => "all",
            StyleFilter::Only(style) => style.as_str(),
        }
    }

    pub fn matches(&self, style: IconStyle) -> bool {
        match self {
            StyleFilter::All => true,
            StyleFilter::Only(only) => *only == style,
        }
    }
}

impl fmt::Display for StyleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query_value())
    }
}

impl FromStr for StyleFilter {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(StyleFilter::All);
        }
        s.parse().map(StyleFilter::Only)
    }
}

/// Metadata for one icon as returned by the search index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconDescriptor {
    pub key: String,
    #[serde(default)]
    pub label: String,
    pub style: IconStyle,
    pub cdn_url: String,
    /// Other styles published for the same key
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub styles: Vec<IconStyle>,
}

impl IconDescriptor {
    /// Identity of this icon in the grid (key + style)
    pub fn id(&self) -> String {
        format!("{}-{}", self.key, self.style)
    }

    /// Label for display, falling back to the key
    pub fn display_label(&self) -> &str {
        if self.label.trim().is_empty() {
            &self.key
        } else {
            &self.label
        }
    }

    /// Styles the preview may switch between; always includes the own style
    pub fn available_styles(&self) -> Vec<IconStyle> {
        if self.styles.is_empty() {
            return vec![self.style];
        }
        let mut styles = self.styles.clone();
        if !styles.contains(&self.style) {
            styles.insert(0, self.style);
        }
        styles
    }

    /// Resolve the asset URL for a style variant of this icon.
    ///
    /// A `{style}` placeholder wins; otherwise the path segment naming the
    /// descriptor's own style is swapped, and as a last resort the first
    /// occurrence of the style name.
    pub fn url_for_style(&self, style: IconStyle) -> String {
        if self.cdn_url.contains(STYLE_PLACEHOLDER) {
            return self.cdn_url.replace(STYLE_PLACEHOLDER, style.as_str());
        }
        if style == self.style {
            return self.cdn_url.clone();
        }

        let own_segment = format!("/{}/", self.style);
        if self.cdn_url.contains(&own_segment) {
            return self
                .cdn_url
                .replacen(&own_segment, &format!("/{}/", style), 1);
        }

        self.cdn_url.replacen(self.style.as_str(), style.as_str(), 1)
    }

    /// Asset URL for the descriptor's own style
    pub fn asset_url(&self) -> String {
        self.url_for_style(self.style)
    }
}

/// Append a `color` query parameter for server-side pre-coloring
pub fn with_color_param(url: &str, color: &str) -> String {
    match Url::parse(url) {
        Ok(mut parsed) => {
            parsed.query_pairs_mut().append_pair("color", color);
            parsed.into()
        }
        Err(_) => {
            let separator = if url.contains('?') { '&' } else { '?' };
            let encoded: String = url::form_urlencoded::byte_serialize(color.as_bytes()).collect();
            format!("{url}{separator}color={encoded}")
        }
    }
}

/// File name for a downloaded asset: `<key>-<style>-<color without hash>.svg`
///
/// Key and color come from outside, so path separators and `..` in them are
/// replaced to keep the name a single path component.
pub fn download_file_name(key: &str, style: IconStyle, color: &str) -> String {
    format!(
        "{}-{}-{}.svg",
        file_name_part(key),
        style,
        file_name_part(&color.replacen('#', "", 1))
    )
}

fn file_name_part(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '-',
            c if c.is_control() => '-',
            c => c,
        })
        .collect();
    cleaned.replace("..", "-")
}

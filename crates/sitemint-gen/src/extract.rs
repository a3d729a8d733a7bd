//! Title and fragment extraction from completion text.
//!
//! Completion output is untrusted free text, not guaranteed well-formed
//! HTML, so extraction works on a tag allow-list rather than a full HTML
//! parser: only content wrapped in prose-like tags (`p`, `h2`-`h6`, `ul`,
//! `ol`, `li`) survives, which both sanitizes and filters the output.
//!
//! # Examples
//!
//! ```
//! use sitemint_gen::extract::{extract_fragment, extract_title};
//!
//! let html = "<h1>About</h1><p>Hello</p><script>evil()</script><h2>More</h2>";
//! assert_eq!(extract_title(html), "About");
//! assert_eq!(extract_fragment(html), "<p>Hello</p>\n<h2>More</h2>");
//! ```

use regex::Regex;
use std::sync::LazyLock;

/// Tags whose content is kept by [`extract_fragment`]. `h1` is deliberately
/// absent: the title is extracted separately and must not repeat in the body.
pub const ALLOWED_TAGS: [&str; 9] = ["p", "h2", "h3", "h4", "h5", "h6", "ul", "ol", "li"];

static H1_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<h1>(.*?)</h1>").expect("valid h1 regex"));

static BODY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<body>(.*?)</body>").expect("valid body regex"));

static TAG_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    ALLOWED_TAGS
        .iter()
        .map(|tag| {
            Regex::new(&format!("(?is)<{tag}>.*?</{tag}>")).expect("valid allow-list regex")
        })
        .collect()
});

static NUMBERING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+[.)]\s*").expect("valid numbering regex"));

/// Extracts the title from a completion.
///
/// The title is whatever text sits between the first `<h1>` and `</h1>`
/// pair (case-insensitive), trimmed. Falls back to `"Untitled"` when no
/// `<h1>` is present.
///
/// # Examples
///
/// ```
/// use sitemint_gen::extract::extract_title;
///
/// assert_eq!(extract_title("<H1> My Site </H1><p>x</p>"), "My Site");
/// assert_eq!(extract_title("<p>no heading</p>"), "Untitled");
/// ```
#[must_use]
pub fn extract_title(html: &str) -> String {
    H1_RE
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map_or_else(|| "Untitled".to_string(), |m| m.as_str().trim().to_string())
}

/// Extracts the body fragment from a completion.
///
/// Scans the `<body>...</body>` region when present, else the whole text.
/// The scan moves left to right: at each step the earliest match among the
/// allow-listed tag pairs is taken whole and the scan resumes after it, so
/// `<li>` items inside an already-matched `<ul>` are not matched again.
/// Matches are joined with newlines in document order; everything else,
/// including any `<h1>`, is discarded.
///
/// # Examples
///
/// ```
/// use sitemint_gen::extract::extract_fragment;
///
/// let html = "<body><h1>Title</h1><p>One</p><ul><li>A</li></ul></body><p>outside</p>";
/// assert_eq!(extract_fragment(html), "<p>One</p>\n<ul><li>A</li></ul>");
/// ```
#[must_use]
pub fn extract_fragment(html: &str) -> String {
    let region = BODY_RE
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map_or(html, |m| m.as_str());

    let mut parts: Vec<&str> = Vec::new();
    let mut pos = 0;
    while pos < region.len() {
        let mut earliest: Option<(usize, usize)> = None;
        for re in TAG_RES.iter() {
            if let Some(m) = re.find_at(region, pos) {
                if earliest.is_none_or(|(start, _)| m.start() < start) {
                    earliest = Some((m.start(), m.end()));
                }
            }
        }
        let Some((start, end)) = earliest else {
            break;
        };
        parts.push(&region[start..end]);
        pos = end;
    }

    parts.join("\n")
}

/// Cleans a generated post title.
///
/// Strips a leading numbering prefix (digits followed by `.` or `)`),
/// removes wrapping double quotes, and trims whitespace.
///
/// # Examples
///
/// ```
/// use sitemint_gen::extract::clean_title;
///
/// assert_eq!(clean_title("1. \"My Title\""), "My Title");
/// assert_eq!(clean_title("2) Another"), "Another");
/// assert_eq!(clean_title("  Plain  "), "Plain");
/// ```
#[must_use]
pub fn clean_title(raw: &str) -> String {
    let stripped = NUMBERING_RE.replace(raw, "");
    let trimmed = stripped.trim();
    let trimmed = trimmed.strip_prefix('"').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('"').unwrap_or(trimmed);
    trimmed.trim().to_string()
}

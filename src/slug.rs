//! URL slug derivation for tools and use-cases.
//!
//! Every generated page is written to `<slug>.html`, so the slug is both the
//! filename stem and the link target used by cross-references. A record may
//! carry an explicit `slug`; otherwise one is derived from its display name.
//!
//! ## Derivation
//!
//! - `"AI & ML Tools!!"` → `"ai-and-ml-tools"`
//! - `"  GitHub Copilot  "` → `"github-copilot"`
//! - `"Text -- to -- Speech"` → `"text-to-speech"`
//! - `"Café"` → `"caf"` (non-ASCII letters are dropped, not transliterated)
//! - `""`, `"   "`, `"!!!"` → `"item"`
//!
//! Derivation is a pure function of the input, so a record without an explicit
//! slug keeps the same output filename across runs as long as its name does not
//! change.

/// Slug used when nothing survives derivation.
pub const FALLBACK_SLUG: &str = "item";

/// Derive a URL-safe slug from arbitrary display text.
///
/// The result contains only `[a-z0-9-]`, never starts or ends with `-`, and
/// never contains `--`. Returns [`FALLBACK_SLUG`] when the input has no
/// usable characters.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let expanded = lowered.trim().replace('&', " and ");

    let mut slug = String::with_capacity(expanded.len());
    let mut pending_dash = false;
    for c in expanded.chars() {
        if c.is_whitespace() || c == '-' {
            pending_dash = true;
        } else if c.is_ascii_lowercase() || c.is_ascii_digit() {
            // Separators only ever land between two kept characters.
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        }
    }

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// Pick the slug for a record: an explicit, non-empty slug is used verbatim,
/// otherwise one is derived from the display text.
///
/// Explicit slugs are trusted as given. They are neither normalized nor
/// validated.
pub fn resolve_slug(explicit: Option<&str>, display: &str) -> String {
    match explicit {
        Some(slug) if !slug.is_empty() => slug.to_string(),
        _ => slugify(display),
    }
}

//! # hub-pages
//!
//! Detail-page generator for the AI Hub static site. Two curated JSON files,
//! one listing tools and one listing use-cases, become one HTML page per
//! entry, with tools and use-cases linked to each other by name.
//!
//! # Architecture: One Linear Pass
//!
//! ```text
//! 1. Load     assets/data.*.json  →  Catalog     (records + resolved slugs)
//! 2. Index    Catalog             →  CrossIndex  (tool by name, use-cases by tool)
//! 3. Render   Catalog + index     →  maud Markup (one document per record)
//! 4. Write    Markup              →  tools/<slug>.html, use-cases/<slug>.html
//! ```
//!
//! Every run regenerates every page. There is no cache and no state between
//! runs, so unchanged inputs always produce byte-identical output.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | Reads and parses both JSON collections, pairing each record with its slug |
//! | [`slug`] | Pure slug derivation from display names |
//! | [`index`] | Name-based cross-reference tables, dangling references, slug collisions |
//! | [`render`] | Page skeleton, tool page and use-case page, built with Maud |
//! | [`write`] | Output directory creation and page writes |
//! | [`generate`] | Runs the whole pipeline and reports what it wrote |
//! | [`config`] | Optional `hub.toml` loading, merging onto defaults, and validation |
//! | [`types`] | Tool and use-case records and the `Entry` pairing |
//! | [`output`] | CLI output formatting for the build and check reports |
//!
//! # Design Decisions
//!
//! ## Slugs Beside Records, Not Inside Them
//!
//! A record is exactly what was parsed from JSON. The slug it is published
//! under is resolved once at load time and stored next to it in an
//! [`types::Entry`]. An explicit `slug` in the data always wins; otherwise it is
//! derived from the name with [`slug::slugify`], so it stays stable across runs.
//!
//! ## Cross-References by Display Name
//!
//! Use-cases recommend tools by their display name. Names that match no tool
//! are kept and rendered as plain text instead of links, so curators can list
//! a tool before its page exists. `hub-pages check` lists these references.
//!
//! ## Verbatim Record Text
//!
//! Record text is curated by the site owners and may carry inline markup, so
//! it is inserted as-is. Insertion goes through [`render::TextPolicy`];
//! setting `render.escape_fields = true` in `hub.toml` swaps in HTML escaping.
//!
//! ## Slug Collisions
//!
//! Two records that end up with the same slug write to the same file; the one
//! later in the collection wins. This is reported but never treated as an
//! error.

pub mod catalog;
pub mod config;
pub mod generate;
pub mod index;
pub mod output;
pub mod render;
pub mod slug;
pub mod types;
pub mod write;

#[cfg(test)]
pub(crate) mod test_helpers;

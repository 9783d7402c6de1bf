//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Every page is listed by its positional index and display name, with the
//! output path as secondary context after `→`. This reads as a content
//! inventory while still pointing at the files on disk.
//!
//! # Output Format
//!
//! ## Build
//!
//! ```text
//! Tools
//!     001 Acme → tools/acme.html
//!     002 Insight Studio & Notebooks → tools/insight-studio-and-notebooks.html
//!
//! Use-cases
//!     001 Contract Review → use-cases/contract-review.html
//!
//! Generated 2 tool pages, 1 use-case page
//! ```
//!
//! Slug collisions, when present, are listed under `Notes` before the summary.
//!
//! ## Check
//!
//! ```text
//! Tools: 3
//! Use-cases: 3
//!
//! Unresolved tool references
//!     Contract Review → Ghost Tool
//! ```
//!
//! # Architecture
//!
//! Each report has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::generate::{CheckReport, CollisionNote, GeneratedPage, GenerateReport};
use crate::render::PageKind;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// `1 tool page`, `2 tool pages`.
fn count(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("{n} {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

fn page_lines(heading: &str, pages: &[GeneratedPage]) -> Vec<String> {
    let mut lines = vec![heading.to_string()];
    for (i, page) in pages.iter().enumerate() {
        lines.push(format!(
            "    {} {} \u{2192} {}",
            format_index(i + 1),
            page.name,
            page.path.to_string_lossy().replace('\\', "/")
        ));
    }
    lines
}

fn collision_lines(collisions: &[CollisionNote]) -> Vec<String> {
    collisions
        .iter()
        .map(|note| {
            let noun = match note.kind {
                PageKind::Tool => "tools",
                PageKind::UseCase => "use-cases",
            };
            format!(
                "    Slug \"{}\" shared by {} {} ({}); the last one's page was kept",
                note.collision.slug,
                note.collision.names.len(),
                noun,
                note.collision.names.join(", ")
            )
        })
        .collect()
}

// ============================================================================
// Build
// ============================================================================

/// Format the build report: every page written, then any notes and a summary.
pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = page_lines("Tools", &report.tools);
    lines.push(String::new());
    lines.extend(page_lines("Use-cases", &report.use_cases));

    if !report.collisions.is_empty() {
        lines.push(String::new());
        lines.push("Notes".to_string());
        lines.extend(collision_lines(&report.collisions));
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {}, {}",
        count(report.tools.len(), "tool page"),
        count(report.use_cases.len(), "use-case page")
    ));
    lines
}

/// Print the build report to stdout.
pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Check
// ============================================================================

/// Format the check report: collection sizes, unresolved references, collisions.
pub fn format_check_output(report: &CheckReport) -> Vec<String> {
    let mut lines = vec![
        format!("Tools: {}", report.tool_count),
        format!("Use-cases: {}", report.use_case_count),
    ];

    if !report.dangling.is_empty() {
        lines.push(String::new());
        lines.push("Unresolved tool references".to_string());
        for dangling in &report.dangling {
            lines.push(format!(
                "    {} \u{2192} {}",
                dangling.use_case, dangling.tool_name
            ));
        }
    }

    if !report.collisions.is_empty() {
        lines.push(String::new());
        lines.push("Slug collisions".to_string());
        lines.extend(collision_lines(&report.collisions));
    }

    lines
}

/// Print the check report to stdout.
pub fn print_check_output(report: &CheckReport) {
    for line in format_check_output(report) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{DanglingReference, SlugCollision};
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn page(name: &str, path: &str) -> GeneratedPage {
        GeneratedPage {
            name: name.to_string(),
            slug: String::new(),
            path: PathBuf::from(path),
        }
    }

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(1234), "1234");
    }

    #[test]
    fn count_pluralizes() {
        assert_eq!(count(0, "tool page"), "0 tool pages");
        assert_eq!(count(1, "tool page"), "1 tool page");
        assert_eq!(count(2, "use-case page"), "2 use-case pages");
    }

    #[test]
    fn generate_output_lists_pages_and_summary() {
        let report = GenerateReport {
            tools: vec![
                page("Acme", "tools/acme.html"),
                page("Insight Studio & Notebooks", "tools/insight-studio-and-notebooks.html"),
            ],
            use_cases: vec![page("Contract Review", "use-cases/contract-review.html")],
            collisions: vec![],
        };
        assert_eq!(
            format_generate_output(&report),
            vec![
                "Tools",
                "    001 Acme → tools/acme.html",
                "    002 Insight Studio & Notebooks → tools/insight-studio-and-notebooks.html",
                "",
                "Use-cases",
                "    001 Contract Review → use-cases/contract-review.html",
                "",
                "Generated 2 tool pages, 1 use-case page",
            ]
        );
    }

    #[test]
    fn generate_output_notes_collisions() {
        let report = GenerateReport {
            tools: vec![
                page("AI Tools", "tools/ai-tools.html"),
                page("AI tools!", "tools/ai-tools.html"),
            ],
            use_cases: vec![],
            collisions: vec![CollisionNote {
                kind: PageKind::Tool,
                collision: SlugCollision {
                    slug: "ai-tools".to_string(),
                    names: vec!["AI Tools".to_string(), "AI tools!".to_string()],
                },
            }],
        };
        let lines = format_generate_output(&report);
        assert!(lines.contains(&"Notes".to_string()));
        assert!(lines.contains(
            &"    Slug \"ai-tools\" shared by 2 tools (AI Tools, AI tools!); the last one's page was kept"
                .to_string()
        ));
        assert_eq!(
            lines.last().map(String::as_str),
            Some("Generated 2 tool pages, 0 use-case pages")
        );
    }

    #[test]
    fn check_output_clean_catalog() {
        let report = CheckReport {
            tool_count: 3,
            use_case_count: 1,
            dangling: vec![],
            collisions: vec![],
        };
        assert_eq!(
            format_check_output(&report),
            vec!["Tools: 3", "Use-cases: 1"]
        );
    }

    #[test]
    fn check_output_lists_unresolved_references() {
        let report = CheckReport {
            tool_count: 1,
            use_case_count: 1,
            dangling: vec![DanglingReference {
                use_case: "Contract Review".to_string(),
                tool_name: "Ghost Tool".to_string(),
            }],
            collisions: vec![CollisionNote {
                kind: PageKind::UseCase,
                collision: SlugCollision {
                    slug: "faq".to_string(),
                    names: vec!["FAQ".to_string(), "F.A.Q.".to_string()],
                },
            }],
        };
        assert_eq!(
            format_check_output(&report),
            vec![
                "Tools: 1",
                "Use-cases: 1",
                "",
                "Unresolved tool references",
                "    Contract Review → Ghost Tool",
                "",
                "Slug collisions",
                "    Slug \"faq\" shared by 2 use-cases (FAQ, F.A.Q.); the last one's page was kept",
            ]
        );
    }
}

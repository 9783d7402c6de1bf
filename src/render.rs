//! HTML rendering for tool and use-case detail pages.
//!
//! ## Generated Pages
//!
//! - **Tool pages** (`tools/{slug}.html`): summary, tags, website link,
//!   governance snapshot, and the use-cases that recommend the tool
//! - **Use-case pages** (`use-cases/{slug}.html`): summary, domain/stage/tag
//!   badges, workflow steps, recommended tools, and governance notes
//!
//! Both share one document skeleton: head metadata, the site header with
//! primary navigation, and the site footer. All links are relative to an
//! output directory one level below the site root (`../assets/styles.css`,
//! `../tools/{slug}.html`, ...).
//!
//! ## Record Text
//!
//! Markup is built with [maud](https://maud.lambda.xyz/), but record values do
//! not go through maud's escaping directly. Every value from the JSON inputs
//! passes through a [`TextPolicy`]. The default, [`Verbatim`], inserts text
//! unchanged so curated data can carry inline markup. [`Escaped`] applies
//! maud's HTML escaping instead and is selected by `render.escape_fields`.
//!
//! Absent or empty values render as an em-dash wherever a row or annotation
//! would otherwise be blank, and as nothing in headings and summaries.

use crate::config::SiteConfig;
use crate::index::CrossIndex;
use crate::types::{Tool, UseCase, non_empty};
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Placeholder for a missing value.
pub const PLACEHOLDER: &str = "—";

/// Primary navigation, identical on every page.
const PRIMARY_NAV: &[(&str, &str)] = &[
    ("../tools.html", "Tools"),
    ("../use-cases.html", "Use-cases"),
    ("../workshops.html", "Workshops"),
    ("../about.html", "About"),
];

/// How record text is turned into markup.
pub trait TextPolicy {
    fn text(&self, value: &str) -> Markup;
}

/// Insert record text as-is. Values may contain HTML.
#[derive(Debug, Clone, Copy, Default)]
pub struct Verbatim;

impl TextPolicy for Verbatim {
    fn text(&self, value: &str) -> Markup {
        PreEscaped(value.to_string())
    }
}

/// HTML-escape record text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Escaped;

impl TextPolicy for Escaped {
    fn text(&self, value: &str) -> Markup {
        html! { (value) }
    }
}

/// Which collection a page belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Tool,
    UseCase,
}

impl PageKind {
    /// Label used in page titles.
    pub fn label(self) -> &'static str {
        match self {
            PageKind::Tool => "Tool",
            PageKind::UseCase => "Use\u{2011}case",
        }
    }
}

/// Renders detail pages for one site.
pub struct PageComposer<'c> {
    site_name: &'c str,
    default_description: &'c str,
    tools_dir: &'c str,
    use_cases_dir: &'c str,
    policy: Box<dyn TextPolicy>,
}

impl<'c> PageComposer<'c> {
    pub fn new(config: &'c SiteConfig) -> Self {
        let policy: Box<dyn TextPolicy> = if config.render.escape_fields {
            Box::new(Escaped)
        } else {
            Box::new(Verbatim)
        };
        Self {
            site_name: &config.site_name,
            default_description: &config.default_description,
            tools_dir: config.paths.tools_output.trim_end_matches('/'),
            use_cases_dir: config.paths.use_cases_output.trim_end_matches('/'),
            policy,
        }
    }

    /// Replace the text policy chosen from config.
    pub fn with_policy(mut self, policy: impl TextPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    fn text(&self, value: &str) -> Markup {
        self.policy.text(value)
    }

    /// Optional text, or nothing.
    fn text_or_empty(&self, value: &Option<String>) -> Markup {
        self.text(value.as_deref().unwrap_or_default())
    }

    /// Optional text, or the em-dash placeholder.
    fn text_or_dash(&self, value: Option<&str>) -> Markup {
        match value.filter(|v| !v.is_empty()) {
            Some(v) => self.text(v),
            None => html! { (PLACEHOLDER) },
        }
    }

    fn tool_href(&self, tool: &Tool) -> String {
        format!("../{}/{}.html", self.tools_dir, tool.slug)
    }

    fn use_case_href(&self, use_case: &UseCase) -> String {
        format!("../{}/{}.html", self.use_cases_dir, use_case.slug)
    }

    // ========================================================================
    // Page Renderers
    // ========================================================================

    /// Renders a tool page. `related` are the use-cases recommending the tool,
    /// in the order they should be listed.
    pub fn render_tool_page(&self, tool: &Tool, related: &[&UseCase]) -> Markup {
        let t = &tool.record;
        let website = non_empty(&t.website).unwrap_or("#");
        let audience = t.audience.join(", ");

        let governance = [
            ("Category", non_empty(&t.category)),
            ("Audience", Some(audience.as_str())),
            ("License", non_empty(&t.license)),
            ("Vendor", non_empty(&t.vendor)),
            ("Data classification", non_empty(&t.data_classification)),
            ("Hosting", non_empty(&t.hosting)),
            ("PII risk", non_empty(&t.pii_risk)),
            ("Approval status", non_empty(&t.approval_status)),
            ("Governance notes", non_empty(&t.governance_notes)),
        ];

        let main = html! {
            main id="main" class="container section prose" {
                a.muted href="../tools.html" { "← Back to tools" }
                h1 { (self.text(&t.name)) }
                p.muted { (self.text_or_empty(&t.summary)) }
                (self.badges(html! {}, &t.tags))
                p {
                    a.btn.primary href=(self.text(website)) target="_blank" rel="noopener noreferrer" {
                        "Official website ↗"
                    }
                }
                h2 { "Governance snapshot" }
                dl.dl {
                    @for (label, value) in governance {
                        div.dl-row {
                            dt { (label) }
                            dd { (self.text_or_dash(value)) }
                        }
                    }
                }
                h2 { "Related use-cases" }
                @if related.is_empty() {
                    p.muted { "None linked yet." }
                } @else {
                    ul {
                        @for use_case in related {
                            li {
                                a href=(self.use_case_href(use_case)) { (self.text(&use_case.record.title)) }
                                " "
                                span.muted {
                                    "(" (self.text_or_empty(&use_case.record.domain))
                                    " · " (self.text_or_empty(&use_case.record.stage)) ")"
                                }
                            }
                        }
                    }
                }
            }
        };

        self.document(PageKind::Tool, &t.name, non_empty(&t.summary), main)
    }

    /// Renders a use-case page, resolving recommended tools through `index`.
    ///
    /// Names that resolve become links annotated with the tool's approval
    /// status and data classification. Names that don't are listed as plain
    /// text.
    pub fn render_use_case_page(&self, use_case: &UseCase, index: &CrossIndex<'_>) -> Markup {
        let u = &use_case.record;

        let leading_badges = html! {
            span.badge { (self.text_or_empty(&u.domain)) }
            span.badge { (self.text_or_empty(&u.stage)) }
        };

        let main = html! {
            main id="main" class="container section prose" {
                a.muted href="../use-cases.html" { "← Back to use-cases" }
                h1 { (self.text(&u.title)) }
                p.muted { (self.text_or_empty(&u.summary)) }
                (self.badges(leading_badges, &u.tags))
                h2 { "Workflow" }
                ol {
                    @for step in &u.workflow {
                        li { (self.text(step)) }
                    }
                }
                h2 { "Recommended tools" }
                @if u.recommended_tools.is_empty() {
                    p.muted { "No tools linked yet." }
                } @else {
                    ul {
                        @for name in &u.recommended_tools {
                            @match index.tool(name) {
                                Some(tool) => {
                                    li {
                                        a href=(self.tool_href(tool)) { (self.text(&tool.record.name)) }
                                        " "
                                        span.muted {
                                            "(Approval: " (self.text_or_dash(non_empty(&tool.record.approval_status)))
                                            "; Class: " (self.text_or_dash(non_empty(&tool.record.data_classification))) ")"
                                        }
                                    }
                                },
                                None => {
                                    li { (self.text(name)) }
                                },
                            }
                        }
                    }
                }
                h2 { "Governance notes" }
                p.muted { (self.text_or_dash(non_empty(&u.governance_notes))) }
            }
        };

        self.document(PageKind::UseCase, &u.title, non_empty(&u.summary), main)
    }

    // ========================================================================
    // HTML Components
    // ========================================================================

    fn badges(&self, leading: Markup, tags: &[String]) -> Markup {
        html! {
            div.badges style="margin:.6rem 0 1rem" {
                (leading)
                @for tag in tags {
                    span.badge { (self.text(tag)) }
                }
            }
        }
    }

    /// Renders the shared document skeleton around a page's `main` element.
    fn document(
        &self,
        kind: PageKind,
        entity_name: &str,
        summary: Option<&str>,
        main: Markup,
    ) -> Markup {
        let title = format!("{} — {} — {}", entity_name, kind.label(), self.site_name);
        let description = summary.unwrap_or(self.default_description);

        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width,initial-scale=1";
                    title { (self.text(&title)) }
                    meta name="description" content=(self.text(description));
                    link rel="stylesheet" href="../assets/styles.css";
                    script defer src="../assets/app.js" {}
                }
                body {
                    a.skip-link href="#main" { "Skip to content" }
                    (self.site_header())
                    (main)
                    (self.site_footer())
                }
            }
        }
    }

    fn site_header(&self) -> Markup {
        html! {
            header.site-header {
                div.container.header-inner {
                    div.brand {
                        span.logo aria-hidden="true" { (PreEscaped("&diams;")) }
                        a.brand-link href="../index.html" { (self.text(self.site_name)) }
                    }
                    nav.nav aria-label="Primary" {
                        @for (href, label) in PRIMARY_NAV {
                            a href=(href) { (label) }
                        }
                        button.btn.ghost id="themeToggle" type="button" aria-label="Toggle theme" {
                            "Theme"
                        }
                    }
                }
            }
        }
    }

    fn site_footer(&self) -> Markup {
        html! {
            footer.site-footer {
                div.container.footer-inner {
                    p { "© " span id="year" {} " " (self.text(self.site_name)) }
                    p.muted { a href="../about.html#disclaimer" { "Disclaimer" } }
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

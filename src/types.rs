//! Record types shared by every pipeline stage.
//!
//! These mirror the two JSON input collections. Records are read-only once
//! loaded: the slug each one is published under lives beside it in an
//! [`Entry`], never inside the record itself.

use serde::Deserialize;

/// One tool from `data.tools.json`.
///
/// Only `name` is required. Text fields may be missing or `null`, list fields
/// may be missing, and unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ToolRecord {
    /// Display name; also the key use-cases refer to this tool by.
    pub name: String,
    /// Explicit slug, used verbatim when present and non-empty.
    pub slug: Option<String>,
    pub summary: Option<String>,
    pub website: Option<String>,
    pub category: Option<String>,
    pub license: Option<String>,
    pub vendor: Option<String>,
    pub hosting: Option<String>,
    pub data_classification: Option<String>,
    pub pii_risk: Option<String>,
    pub approval_status: Option<String>,
    pub governance_notes: Option<String>,
    /// Roles or teams the tool is meant for, in display order.
    #[serde(default)]
    pub audience: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// One use-case from `data.usecases.json`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UseCaseRecord {
    pub title: String,
    pub slug: Option<String>,
    pub summary: Option<String>,
    pub domain: Option<String>,
    pub stage: Option<String>,
    pub governance_notes: Option<String>,
    /// Ordered workflow steps, rendered as a numbered list.
    #[serde(default)]
    pub workflow: Vec<String>,
    /// Tool names, matched against [`ToolRecord::name`]. Need not resolve.
    #[serde(default, rename = "recommendedTools")]
    pub recommended_tools: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A record paired with the slug it is published under.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<R> {
    pub record: R,
    pub slug: String,
}

/// A tool ready for indexing and rendering.
pub type Tool = Entry<ToolRecord>;

/// A use-case ready for indexing and rendering.
pub type UseCase = Entry<UseCaseRecord>;

/// Anything that has a human-facing name used as its page heading.
pub trait Titled {
    fn display_name(&self) -> &str;
}

impl Titled for ToolRecord {
    fn display_name(&self) -> &str {
        &self.name
    }
}

impl Titled for UseCaseRecord {
    fn display_name(&self) -> &str {
        &self.title
    }
}

impl<R: Titled> Entry<R> {
    pub fn display_name(&self) -> &str {
        self.record.display_name()
    }
}

/// Treat an absent field and an empty string the same way.
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

//! Cross-references between tools and use-cases.
//!
//! Use-cases recommend tools by display name. The [`CrossIndex`] resolves
//! those names once per run:
//!
//! - **tool by name**: the last tool in collection order owns a repeated name.
//! - **use-cases by tool**: built by walking use-cases in collection order and
//!   each one's `recommendedTools` in order. A use-case that lists the same tool
//!   twice shows up twice in that tool's bucket.
//!
//! A recommended name with no matching tool is not an error. Renderers ask
//! [`CrossIndex::tool`] and fall back to plain text on `None`.
//!
//! Both maps are only ever used for lookups. Pages are produced by walking the
//! input vectors, so output order never depends on map order.

use crate::catalog::Catalog;
use crate::types::{Tool, UseCase};
use std::collections::BTreeMap;

/// Lookup tables borrowed from a [`Catalog`].
#[derive(Debug)]
pub struct CrossIndex<'a> {
    tool_by_name: BTreeMap<&'a str, &'a Tool>,
    use_cases_by_tool: BTreeMap<&'a str, Vec<&'a UseCase>>,
}

/// A recommendation that names a tool missing from the tool collection.
#[derive(Debug, Clone, PartialEq)]
pub struct DanglingReference {
    pub use_case: String,
    pub tool_name: String,
}

/// A slug claimed by more than one entry of the same collection.
///
/// `names` lists every claimant in collection order; the last one's page is
/// what ends up on disk.
#[derive(Debug, Clone, PartialEq)]
pub struct SlugCollision {
    pub slug: String,
    pub names: Vec<String>,
}

impl<'a> CrossIndex<'a> {
    pub fn build(tools: &'a [Tool], use_cases: &'a [UseCase]) -> Self {
        let mut tool_by_name = BTreeMap::new();
        for tool in tools {
            tool_by_name.insert(tool.record.name.as_str(), tool);
        }

        let mut use_cases_by_tool: BTreeMap<&'a str, Vec<&'a UseCase>> = BTreeMap::new();
        for use_case in use_cases {
            for tool_name in &use_case.record.recommended_tools {
                use_cases_by_tool
                    .entry(tool_name.as_str())
                    .or_default()
                    .push(use_case);
            }
        }

        Self {
            tool_by_name,
            use_cases_by_tool,
        }
    }

    pub fn from_catalog(catalog: &'a Catalog) -> Self {
        Self::build(&catalog.tools, &catalog.use_cases)
    }

    /// Resolve a recommended tool name.
    pub fn tool(&self, name: &str) -> Option<&'a Tool> {
        self.tool_by_name.get(name).copied()
    }

    /// Use-cases recommending `tool_name`, in collection order, duplicates kept.
    pub fn uses_of(&self, tool_name: &str) -> &[&'a UseCase] {
        self.use_cases_by_tool
            .get(tool_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every unresolved recommendation, in use-case then list order.
    pub fn dangling_references(&self, use_cases: &[UseCase]) -> Vec<DanglingReference> {
        let known = &self.tool_by_name;
        use_cases
            .iter()
            .flat_map(move |u| {
                u.record
                    .recommended_tools
                    .iter()
                    .filter(move |name| !known.contains_key(name.as_str()))
                    .map(move |name| DanglingReference {
                        use_case: u.record.title.clone(),
                        tool_name: name.clone(),
                    })
            })
            .collect()
    }
}

/// Slugs shared by several tools, in order of first appearance.
pub fn tool_slug_collisions(tools: &[Tool]) -> Vec<SlugCollision> {
    collisions(tools.iter().map(|t| (t.slug.as_str(), t.record.name.as_str())))
}

/// Slugs shared by several use-cases, in order of first appearance.
pub fn use_case_slug_collisions(use_cases: &[UseCase]) -> Vec<SlugCollision> {
    collisions(
        use_cases
            .iter()
            .map(|u| (u.slug.as_str(), u.record.title.as_str())),
    )
}

fn collisions<'a>(pairs: impl Iterator<Item = (&'a str, &'a str)>) -> Vec<SlugCollision> {
    let mut groups: Vec<SlugCollision> = Vec::new();
    let mut position: BTreeMap<&'a str, usize> = BTreeMap::new();
    for (slug, name) in pairs {
        match position.get(slug) {
            Some(&idx) => groups[idx].names.push(name.to_string()),
            None => {
                position.insert(slug, groups.len());
                groups.push(SlugCollision {
                    slug: slug.to_string(),
                    names: vec![name.to_string()],
                });
            }
        }
    }
    groups.retain(|g| g.names.len() > 1);
    groups
}

//! Loading the tool and use-case collections.
//!
//! Both inputs are JSON arrays of objects. Parsing is strict about shape
//! (top level must be an array, identity fields must be present) and lenient
//! about content (unknown keys ignored, optional keys tolerated).
//!
//! A collection is either loaded whole or not at all: a read or parse failure
//! is returned before any record reaches the later stages.

use crate::slug::resolve_slug;
use crate::types::{Entry, Tool, ToolRecord, UseCase, UseCaseRecord};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Both collections, in file order, with slugs resolved.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub tools: Vec<Tool>,
    pub use_cases: Vec<UseCase>,
}

impl Catalog {
    /// Load both collections. The tool file is read first; if either fails,
    /// nothing is returned.
    pub fn load(tools_path: &Path, use_cases_path: &Path) -> Result<Self, LoadError> {
        let tools = load_tools(tools_path)?;
        let use_cases = load_use_cases(use_cases_path)?;
        Ok(Self { tools, use_cases })
    }

    /// Build a catalog from already-parsed records.
    pub fn from_records(tools: Vec<ToolRecord>, use_cases: Vec<UseCaseRecord>) -> Self {
        Self {
            tools: tools.into_iter().map(tool_entry).collect(),
            use_cases: use_cases.into_iter().map(use_case_entry).collect(),
        }
    }
}

pub fn load_tools(path: &Path) -> Result<Vec<Tool>, LoadError> {
    let records: Vec<ToolRecord> = read_collection(path)?;
    Ok(records.into_iter().map(tool_entry).collect())
}

pub fn load_use_cases(path: &Path) -> Result<Vec<UseCase>, LoadError> {
    let records: Vec<UseCaseRecord> = read_collection(path)?;
    Ok(records.into_iter().map(use_case_entry).collect())
}

pub fn tool_entry(record: ToolRecord) -> Tool {
    let slug = resolve_slug(record.slug.as_deref(), &record.name);
    Entry { record, slug }
}

pub fn use_case_entry(record: UseCaseRecord) -> UseCase {
    let slug = resolve_slug(record.slug.as_deref(), &record.title);
    Entry { record, slug }
}

fn read_collection<R: DeserializeOwned>(path: &Path) -> Result<Vec<R>, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn loads_tools_in_file_order() {
        let tmp = TempDir::new().unwrap();
        let path = write(
            &tmp,
            "tools.json",
            r#"[{"name": "Zeta"}, {"name": "Alpha"}, {"name": "Mid"}]"#,
        );
        let tools = load_tools(&path).unwrap();
        let names: Vec<&str> = tools.iter().map(|t| t.display_name()).collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn derives_missing_slugs() {
        let tmp = TempDir::new().unwrap();
        let path = write(&tmp, "tools.json", r#"[{"name": "AI & ML Tools!!"}]"#);
        let tools = load_tools(&path).unwrap();
        assert_eq!(tools[0].slug, "ai-and-ml-tools");
        // The record itself is left as parsed.
        assert_eq!(tools[0].record.slug, None);
    }

    #[test]
    fn explicit_slug_is_kept() {
        let tmp = TempDir::new().unwrap();
        let path = write(
            &tmp,
            "usecases.json",
            r#"[{"title": "Claims Triage", "slug": "triage-v2"}]"#,
        );
        let use_cases = load_use_cases(&path).unwrap();
        assert_eq!(use_cases[0].slug, "triage-v2");
    }

    #[test]
    fn optional_fields_may_be_missing_or_null() {
        let tmp = TempDir::new().unwrap();
        let path = write(
            &tmp,
            "tools.json",
            r#"[{"name": "Bare", "summary": null, "vendor": "Acme Corp"}]"#,
        );
        let tool = &load_tools(&path).unwrap()[0];
        assert_eq!(tool.record.summary, None);
        assert_eq!(tool.record.vendor.as_deref(), Some("Acme Corp"));
        assert!(tool.record.tags.is_empty());
        assert!(tool.record.audience.is_empty());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let tmp = TempDir::new().unwrap();
        let path = write(
            &tmp,
            "usecases.json",
            r#"[{"title": "Drafting", "owner": "legal", "priority": 3}]"#,
        );
        let use_cases = load_use_cases(&path).unwrap();
        assert_eq!(use_cases.len(), 1);
    }

    #[test]
    fn recommended_tools_uses_camel_case_key() {
        let tmp = TempDir::new().unwrap();
        let path = write(
            &tmp,
            "usecases.json",
            r#"[{"title": "Drafting", "recommendedTools": ["Acme", "Ghost Tool"]}]"#,
        );
        let use_cases = load_use_cases(&path).unwrap();
        assert_eq!(
            use_cases[0].record.recommended_tools,
            vec!["Acme".to_string(), "Ghost Tool".to_string()]
        );
    }

    #[test]
    fn missing_file_is_read_error() {
        let tmp = TempDir::new().unwrap();
        let result = load_tools(&tmp.path().join("absent.json"));
        assert!(matches!(result, Err(LoadError::Read { .. })));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = write(&tmp, "tools.json", "[{\"name\": \"Acme\",");
        assert!(matches!(load_tools(&path), Err(LoadError::Parse { .. })));
    }

    #[test]
    fn top_level_object_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = write(&tmp, "tools.json", r#"{"name": "Acme"}"#);
        assert!(matches!(load_tools(&path), Err(LoadError::Parse { .. })));
    }

    #[test]
    fn record_without_name_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = write(&tmp, "tools.json", r#"[{"summary": "nameless"}]"#);
        assert!(matches!(load_tools(&path), Err(LoadError::Parse { .. })));
    }

    #[test]
    fn catalog_fails_whole_when_one_collection_is_bad() {
        let tmp = TempDir::new().unwrap();
        let tools = write(&tmp, "tools.json", r#"[{"name": "Acme"}]"#);
        let use_cases = write(&tmp, "usecases.json", "not json");
        let result = Catalog::load(&tools, &use_cases);
        assert!(matches!(result, Err(LoadError::Parse { path, .. }) if path == use_cases));
    }
}

//! Shared test utilities for the hub-pages test suite.
//!
//! Provides record builders, temp-site setup, and lookup helpers that panic
//! with a clear message on a miss.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let site = setup_fixtures();
//! let report = generate(site.path()).unwrap();
//!
//! let page = find_page(&report.tools, "acme");
//! let html = read_page(&site, "tools/acme.html");
//! assert!(html.contains("<h1>Acme</h1>"));
//! ```

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::catalog::{tool_entry, use_case_entry};
use crate::generate::GeneratedPage;
use crate::types::{Tool, ToolRecord, UseCase, UseCaseRecord};

// =========================================================================
// Record builders
// =========================================================================

/// A tool with only a name; slug derived.
pub fn tool(name: &str) -> Tool {
    tool_entry(ToolRecord {
        name: name.to_string(),
        ..Default::default()
    })
}

/// A fully populated tool named "Acme".
pub fn acme() -> Tool {
    tool_entry(ToolRecord {
        name: "Acme".to_string(),
        summary: Some("Drafts and reviews contracts.".to_string()),
        website: Some("https://acme.example".to_string()),
        category: Some("Writing assistant".to_string()),
        license: Some("Commercial".to_string()),
        vendor: Some("Acme Corp".to_string()),
        hosting: Some("Vendor cloud (EU)".to_string()),
        data_classification: Some("Confidential".to_string()),
        pii_risk: Some("Medium".to_string()),
        approval_status: Some("Approved".to_string()),
        governance_notes: Some("Enterprise tenant only.".to_string()),
        audience: vec!["Legal".to_string(), "Procurement".to_string()],
        tags: vec!["legal".to_string(), "drafting".to_string()],
        ..Default::default()
    })
}

/// A use-case with a title and recommended tool names; slug derived.
pub fn use_case(title: &str, recommends: &[&str]) -> UseCase {
    use_case_entry(UseCaseRecord {
        title: title.to_string(),
        recommended_tools: recommends.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    })
}

// =========================================================================
// Site setup
// =========================================================================

/// Copy `fixtures/site/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/site");
    copy_fixture_assets(&fixtures, tmp.path()).unwrap();
    tmp
}

/// A temp site root whose data files hold the given JSON verbatim.
pub fn setup_site(tools_json: &str, use_cases_json: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    let assets = tmp.path().join("assets");
    fs::create_dir_all(&assets).unwrap();
    fs::write(assets.join("data.tools.json"), tools_json).unwrap();
    fs::write(assets.join("data.usecases.json"), use_cases_json).unwrap();
    tmp
}

/// Copy the fixture data files into `root/assets`.
fn copy_fixture_assets(fixture_site: &Path, root: &Path) -> std::io::Result<()> {
    let assets = root.join("assets");
    fs::create_dir_all(&assets)?;
    for file in ["data.tools.json", "data.usecases.json"] {
        fs::copy(fixture_site.join("assets").join(file), assets.join(file))?;
    }
    Ok(())
}

// =========================================================================
// Report lookups
// =========================================================================

/// Find a generated page by slug. Panics if not found.
pub fn find_page<'a>(pages: &'a [GeneratedPage], slug: &str) -> &'a GeneratedPage {
    pages.iter().find(|p| p.slug == slug).unwrap_or_else(|| {
        let slugs: Vec<&str> = pages.iter().map(|p| p.slug.as_str()).collect();
        panic!("page '{slug}' not found. Available: {slugs:?}")
    })
}

/// Output paths of generated pages, `/`-separated, in write order.
pub fn page_paths(pages: &[GeneratedPage]) -> Vec<String> {
    pages
        .iter()
        .map(|p| p.path.to_string_lossy().replace('\\', "/"))
        .collect()
}

/// Read a generated page relative to the site root. Panics if missing.
pub fn read_page(site: &TempDir, relative: &str) -> String {
    let path = site.path().join(relative);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read generated page {}: {e}", path.display()))
}

//! The full generation pass.
//!
//! Loads configuration, then runs the pipeline once:
//!
//! ```text
//! data.tools.json     ─┐                                     ┌─> tools/<slug>.html
//!                      ├─> Catalog ─> CrossIndex ─> composer ─┤
//! data.usecases.json  ─┘                                     └─> use-cases/<slug>.html
//! ```
//!
//! Both collections are parsed before any directory is created, so a bad
//! input leaves the output tree untouched. After that, pages are written in
//! collection order, tools first. A failed write stops the run and leaves the
//! pages written so far in place.
//!
//! Re-running on unchanged input rewrites every page with identical bytes:
//! nothing in the output depends on time, environment, or map iteration order.

use crate::catalog::{Catalog, LoadError};
use crate::config::{self, ConfigError, SiteConfig};
use crate::index::{
    CrossIndex, DanglingReference, SlugCollision, tool_slug_collisions, use_case_slug_collisions,
};
use crate::render::{PageComposer, PageKind};
use crate::write::{self, WriteError};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Load error: {0}")]
    Load(#[from] LoadError),
    #[error("Write error: {0}")]
    Write(#[from] WriteError),
}

/// One page written during a run.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPage {
    /// Tool name or use-case title.
    pub name: String,
    pub slug: String,
    /// Output path relative to the site root.
    pub path: PathBuf,
}

/// A slug collision within one collection.
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionNote {
    pub kind: PageKind,
    pub collision: SlugCollision,
}

/// What a build run produced.
#[derive(Debug, Clone, Default)]
pub struct GenerateReport {
    pub tools: Vec<GeneratedPage>,
    pub use_cases: Vec<GeneratedPage>,
    /// Pages that overwrote another page from the same run.
    pub collisions: Vec<CollisionNote>,
}

/// What a dry check found, without writing anything.
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    pub tool_count: usize,
    pub use_case_count: usize,
    pub dangling: Vec<DanglingReference>,
    pub collisions: Vec<CollisionNote>,
}

/// Run the full pipeline for the site rooted at `root`, reading `hub.toml`
/// from the root if present.
pub fn generate(root: &Path) -> Result<GenerateReport, GenerateError> {
    let config = config::load_config(root)?;
    generate_with(&config, root)
}

/// Run the full pipeline with an already-loaded config.
pub fn generate_with(config: &SiteConfig, root: &Path) -> Result<GenerateReport, GenerateError> {
    let paths = config.paths.resolve(root);
    let catalog = Catalog::load(&paths.tools_data, &paths.use_cases_data)?;
    let index = CrossIndex::from_catalog(&catalog);
    let composer = PageComposer::new(config);

    write::prepare_dir(&paths.tools_output)?;
    write::prepare_dir(&paths.use_cases_output)?;

    let mut report = GenerateReport {
        collisions: collision_notes(&catalog),
        ..Default::default()
    };

    for tool in &catalog.tools {
        let page = composer.render_tool_page(tool, index.uses_of(&tool.record.name));
        let path = write::write_page(&paths.tools_output, &tool.slug, page)?;
        report.tools.push(GeneratedPage {
            name: tool.display_name().to_string(),
            slug: tool.slug.clone(),
            path: relative_to(&path, root),
        });
    }

    for use_case in &catalog.use_cases {
        let page = composer.render_use_case_page(use_case, &index);
        let path = write::write_page(&paths.use_cases_output, &use_case.slug, page)?;
        report.use_cases.push(GeneratedPage {
            name: use_case.display_name().to_string(),
            slug: use_case.slug.clone(),
            path: relative_to(&path, root),
        });
    }

    Ok(report)
}

/// Load, resolve and index both collections without writing any output.
pub fn check(root: &Path) -> Result<CheckReport, GenerateError> {
    let config = config::load_config(root)?;
    let paths = config.paths.resolve(root);
    let catalog = Catalog::load(&paths.tools_data, &paths.use_cases_data)?;
    let index = CrossIndex::from_catalog(&catalog);

    Ok(CheckReport {
        tool_count: catalog.tools.len(),
        use_case_count: catalog.use_cases.len(),
        dangling: index.dangling_references(&catalog.use_cases),
        collisions: collision_notes(&catalog),
    })
}

fn collision_notes(catalog: &Catalog) -> Vec<CollisionNote> {
    let tools = tool_slug_collisions(&catalog.tools)
        .into_iter()
        .map(|collision| CollisionNote {
            kind: PageKind::Tool,
            collision,
        });
    let use_cases = use_case_slug_collisions(&catalog.use_cases)
        .into_iter()
        .map(|collision| CollisionNote {
            kind: PageKind::UseCase,
            collision,
        });
    tools.chain(use_cases).collect()
}

fn relative_to(path: &Path, root: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}

//! Batch driver
//!
//! Resolves the files of a run, renders one document per selected character
//! and rewrites the index from the summaries of every known character. Any
//! failure aborts the whole run; nothing is retried.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use sheet_engine::{CharacterRecord, CharacterSummary, IndexAssembler, PageAssembler};

use crate::config::{BuildConfig, Selection};

/// Name of the generated index document
pub const INDEX_FILENAME: &str = "index.html";

/// What a run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    /// No file selection was given; nothing was read or written
    NothingSelected,
    Built {
        /// Character documents written, in processing order
        pages: Vec<PathBuf>,
        index: PathBuf,
        /// Characters listed on the index
        characters: usize,
    },
}

pub struct BatchDriver {
    config: BuildConfig,
    pages: PageAssembler,
    index: IndexAssembler,
}

impl BatchDriver {
    /// Prepare a driver, loading any asset overrides up front
    pub fn new(config: BuildConfig) -> Result<Self> {
        let pages = PageAssembler::new(config.page_assets()?);
        let index = config.index_assembler()?;
        Ok(Self {
            config,
            pages,
            index,
        })
    }

    pub fn run(&self) -> Result<BatchOutcome> {
        let selected = match &self.config.selection {
            Selection::Nothing => {
                tracing::info!(
                    "No files given and 'all' is not enabled. Pass --files or use --all=true."
                );
                return Ok(BatchOutcome::NothingSelected);
            }
            Selection::All => list_input_files(&self.config.input_dir)?,
            Selection::Files(files) => files.clone(),
        };

        let mut summaries = Vec::new();

        // A partial run still lists every other known character on the index
        if let Selection::Files(_) = self.config.selection {
            let requested: Vec<PathBuf> = selected.iter().map(|p| canonical(p)).collect();
            for path in list_input_files(&self.config.input_dir)? {
                if requested.contains(&canonical(&path)) {
                    continue;
                }
                let summary = CharacterSummary::from_file(&path).with_context(|| {
                    format!("Failed to process character file {}", path.display())
                })?;
                tracing::debug!("Indexed {} from {}", summary.name, path.display());
                summaries.push(summary);
            }
        }

        fs::create_dir_all(&self.config.output_dir).with_context(|| {
            format!(
                "Failed to create output directory {}",
                self.config.output_dir.display()
            )
        })?;

        let mut pages = Vec::with_capacity(selected.len());
        for path in &selected {
            let (summary, written) = self
                .build_character(path)
                .with_context(|| format!("Failed to process character file {}", path.display()))?;
            summaries.push(summary);
            pages.push(written);
        }

        let index = self
            .write_index(&summaries)
            .context("Failed to generate the index page")?;

        Ok(BatchOutcome::Built {
            pages,
            index,
            characters: summaries.len(),
        })
    }

    fn build_character(&self, path: &Path) -> Result<(CharacterSummary, PathBuf)> {
        tracing::info!("Processing {}...", path.display());

        let content = fs::read_to_string(path)?;
        let summary = CharacterSummary::from_json(&content)?;
        let record = CharacterRecord::from_json(&content)?;
        let html = self.pages.render(&record)?;

        let target = self.config.output_dir.join(&summary.filename);
        fs::write(&target, html)
            .with_context(|| format!("Failed to write {}", target.display()))?;
        tracing::info!("Generated {}", target.display());

        Ok((summary, target))
    }

    fn write_index(&self, summaries: &[CharacterSummary]) -> Result<PathBuf> {
        tracing::info!("Generating index page...");

        let html = self.index.render(summaries)?;
        let target = self.config.output_dir.join(INDEX_FILENAME);
        fs::write(&target, html)
            .with_context(|| format!("Failed to write {}", target.display()))?;

        tracing::info!("Index page lists {} characters", summaries.len());
        Ok(target)
    }
}

/// Every `*.json` file directly inside `dir`, sorted by path.
///
/// A missing directory yields no files.
pub fn list_input_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        tracing::warn!("Input directory {} does not exist", dir.display());
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to list input directory {}", dir.display()))?;
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn canonical(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

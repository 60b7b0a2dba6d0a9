//! Build configuration
//!
//! Settings come from three layers: command line arguments, an optional TOML
//! file and built-in defaults. The command line wins over the file, the file
//! over the defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use serde::Deserialize;
use sheet_engine::{IndexAssembler, PageAssets};

/// Directory scanned for character exports when none is configured
pub const DEFAULT_INPUT_DIR: &str = "json";

/// Directory receiving the generated documents when none is configured
pub const DEFAULT_OUTPUT_DIR: &str = ".";

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "build-sheets")]
#[command(
    version,
    about = "Generate HTML character sheets and an index from character JSON exports"
)]
pub struct CliArgs {
    /// Space-separated list of character JSON files to process
    #[arg(long, default_value = "")]
    pub files: String,

    /// "true" to process every JSON file of the input directory
    #[arg(long, default_value = "false")]
    pub all: String,

    /// Directory holding the character JSON files
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Directory receiving the generated HTML files
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Stylesheet replacing the embedded one in character documents
    #[arg(long)]
    pub stylesheet: Option<PathBuf>,

    /// Script replacing the embedded navigation script
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Emit character documents without inline styling
    #[arg(long)]
    pub no_inline_assets: bool,
}

/// Contents of the optional TOML configuration file
///
/// ```toml
/// [paths]
/// input_dir = "json"
/// output_dir = "site"
///
/// [assets]
/// stylesheet = "theme/sheet.css"
/// inline = true
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub assets: AssetsConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathsConfig {
    pub input_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetsConfig {
    pub stylesheet: Option<PathBuf>,
    pub script: Option<PathBuf>,
    pub index_stylesheet: Option<PathBuf>,
    /// Inline the stylesheet into character documents (default: true)
    #[serde(default = "default_inline")]
    pub inline: bool,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            stylesheet: None,
            script: None,
            index_stylesheet: None,
            inline: true,
        }
    }
}

fn default_inline() -> bool {
    true
}

impl FileConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("Failed to parse TOML configuration")
    }
}

/// Which character files a run processes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// No file list and no "all" flag; the run does nothing
    Nothing,
    /// Explicit files; the other input files only feed the index
    Files(Vec<PathBuf>),
    /// Every JSON file of the input directory
    All,
}

impl Selection {
    /// Interpret the raw `--files` / `--all` values
    pub fn from_args(files: &str, all: &str) -> Self {
        if all.trim().eq_ignore_ascii_case("true") {
            return Selection::All;
        }
        let files: Vec<PathBuf> = files.split_whitespace().map(PathBuf::from).collect();
        if files.is_empty() {
            Selection::Nothing
        } else {
            Selection::Files(files)
        }
    }
}

/// Fully resolved settings of one run
#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub selection: Selection,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub stylesheet: Option<PathBuf>,
    pub script: Option<PathBuf>,
    pub index_stylesheet: Option<PathBuf>,
    pub inline_assets: bool,
}

impl BuildConfig {
    /// Settings for a selection with every other value at its default
    pub fn new(selection: Selection) -> Self {
        Self {
            selection,
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            stylesheet: None,
            script: None,
            index_stylesheet: None,
            inline_assets: true,
        }
    }

    /// Merge command line arguments over the optional configuration file
    pub fn resolve(args: &CliArgs) -> anyhow::Result<Self> {
        let file = match &args.config {
            Some(path) => FileConfig::from_file(path)?,
            None => FileConfig::default(),
        };
        Ok(Self::merge(args, file))
    }

    fn merge(args: &CliArgs, file: FileConfig) -> Self {
        let defaults = Self::new(Selection::from_args(&args.files, &args.all));
        Self {
            input_dir: args
                .input_dir
                .clone()
                .or(file.paths.input_dir)
                .unwrap_or(defaults.input_dir),
            output_dir: args
                .output_dir
                .clone()
                .or(file.paths.output_dir)
                .unwrap_or(defaults.output_dir),
            stylesheet: args.stylesheet.clone().or(file.assets.stylesheet),
            script: args.script.clone().or(file.assets.script),
            index_stylesheet: file.assets.index_stylesheet,
            inline_assets: !args.no_inline_assets && file.assets.inline,
            selection: defaults.selection,
        }
    }

    /// Inline assets of character documents
    pub fn page_assets(&self) -> anyhow::Result<PageAssets> {
        let mut assets = if self.inline_assets {
            PageAssets::embedded()
        } else {
            PageAssets::bare()
        };
        // A custom stylesheet only applies when styling is inlined
        if let Some(path) = self.stylesheet.as_ref().filter(|_| self.inline_assets) {
            assets = assets.with_stylesheet_file(path)?;
        }
        if let Some(path) = &self.script {
            assets = assets.with_script_file(path)?;
        }
        Ok(assets)
    }

    pub fn index_assembler(&self) -> anyhow::Result<IndexAssembler> {
        match &self.index_stylesheet {
            Some(path) => Ok(IndexAssembler::from_stylesheet_file(path)?),
            None => Ok(IndexAssembler::default()),
        }
    }
}

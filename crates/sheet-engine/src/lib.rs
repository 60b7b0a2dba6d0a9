//! Character sheet rendering engine
//!
//! This crate turns character records exported from a virtual tabletop into
//! static HTML documents:
//! - Typed character records with a closed item union
//! - Spell normalization and grimoire assembly
//! - Spellbook / inventory / feats section rendering
//! - Page and index assembly with injectable inline assets
//!
//! # Example
//!
//! ```no_run
//! use sheet_engine::{CharacterRecord, PageAssembler, PageAssets};
//!
//! # fn example(json: &str) -> Result<(), sheet_engine::SheetError> {
//! let record = CharacterRecord::from_json(json)?;
//! let html = PageAssembler::new(PageAssets::embedded()).render(&record)?;
//! println!("{} bytes", html.len());
//! # Ok(())
//! # }
//! ```

pub mod assets;
pub mod error;
pub mod grimoire;
pub mod model;
pub mod render;
pub mod sanitize;

pub use error::SheetError;
pub use grimoire::Grimoire;
pub use model::character::{CharacterRecord, ItemRecord};
pub use model::spell::{NormalizedSpell, SpellKind};
pub use model::summary::{output_filename, CharacterSummary};
pub use render::index::IndexAssembler;
pub use render::page::{PageAssembler, PageAssets};

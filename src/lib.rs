//! Portfolio Site Generator
//!
//! Renders the "Projects" section of a personal portfolio site from a
//! compiled-in content store. One set of view models feeds every output
//! format:
//! - `projects/`: content store, view models, formatters (HTML/Markdown/JSON),
//!   and the generator that writes finished documents to disk
//! - `ui`: generic button primitive used for link call-to-actions

pub mod projects;
pub mod ui;

// Re-export commonly used types
pub use projects::content::ContentError;
pub use projects::generator::{OutputFormat, PortfolioGenerator};
pub use projects::view_models::{Glyph, Project, ProjectIcon};

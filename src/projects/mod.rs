//! Projects Section Module
//!
//! Generates the portfolio "Projects" section in HTML, Markdown, and JSON.
//!
//! ## Card anatomy
//! 1. Icon badge - glyph selected by the project's icon variant
//! 2. Title heading
//! 3. Link affordances - GitHub and live-demo, each only when a URL exists
//! 4. Description paragraph
//! 5. Tech stack chips - one per entry, declaration order
//! 6. Key Learnings and What This Demonstrates sublists
//!
//! After all cards, a call-to-action links to the GitHub profile.

pub mod content;
pub mod formatters;
pub mod generator;
pub mod view_models;

pub use generator::PortfolioGenerator;

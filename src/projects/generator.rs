//! Portfolio Generator
//!
//! Main entry point for producing the projects section documents.
//! Validates the content store once, then renders through the
//! format-specific formatters. Rendering itself is deterministic; the only
//! timestamp lives in the build manifest written next to the documents.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Utc;

use crate::projects::content;
use crate::projects::formatters::{HtmlFormatter, JsonFormatter, MarkdownFormatter};
use crate::projects::view_models::Project;

/// Output formats supported by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Html,
    Markdown,
    Json,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] =
        [OutputFormat::Html, OutputFormat::Markdown, OutputFormat::Json];

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Markdown => "md",
            OutputFormat::Json => "json",
        }
    }
}

/// Stateless document generator for the projects section.
pub struct PortfolioGenerator;

impl PortfolioGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Render the section in one format. The store is validated first so a
    /// bad content edit fails here instead of shipping a broken document.
    pub fn generate(&self, projects: &[Project], format: OutputFormat) -> anyhow::Result<String> {
        content::validate(projects)?;

        let doc = match format {
            OutputFormat::Html => HtmlFormatter::format(projects),
            OutputFormat::Markdown => MarkdownFormatter::format(projects),
            OutputFormat::Json => JsonFormatter::format(projects)?,
        };
        Ok(doc)
    }

    /// Write the section in every format, plus a build manifest, into
    /// `out_dir`. Returns the paths written.
    pub fn write_all(&self, projects: &[Project], out_dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
        fs::create_dir_all(out_dir)
            .with_context(|| format!("creating output directory {}", out_dir.display()))?;

        let mut written = Vec::with_capacity(OutputFormat::ALL.len() + 1);
        for format in OutputFormat::ALL {
            let doc = self.generate(projects, format)?;
            let path = out_dir.join(format!("projects.{}", format.extension()));
            fs::write(&path, doc).with_context(|| format!("writing {}", path.display()))?;
            tracing::info!("wrote {}", path.display());
            written.push(path);
        }

        let files: Vec<String> = written
            .iter()
            .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect();
        let manifest = serde_json::json!({
            "generated_at": Utc::now().to_rfc3339(),
            "project_count": projects.len(),
            "files": files,
        });
        let manifest_path = out_dir.join("manifest.json");
        fs::write(&manifest_path, serde_json::to_string_pretty(&manifest)?)
            .with_context(|| format!("writing {}", manifest_path.display()))?;
        written.push(manifest_path);

        Ok(written)
    }
}

impl Default for PortfolioGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projects::view_models::ProjectIcon;

    fn sample_project(title: &str) -> Project {
        Project {
            title: title.to_string(),
            description: "desc".to_string(),
            icon: ProjectIcon::Home,
            ..Project::default()
        }
    }

    #[test]
    fn test_generate_every_format() {
        let generator = PortfolioGenerator::new();
        let projects = [sample_project("One")];

        for format in OutputFormat::ALL {
            let doc = generator.generate(&projects, format).unwrap();
            assert!(doc.contains("One"));
        }
    }

    #[test]
    fn test_generate_rejects_invalid_store() {
        let generator = PortfolioGenerator::new();
        let projects = [sample_project("Same"), sample_project("Same")];

        for format in OutputFormat::ALL {
            assert!(generator.generate(&projects, format).is_err());
        }
    }

    #[test]
    fn test_extensions() {
        assert_eq!(OutputFormat::Html.extension(), "html");
        assert_eq!(OutputFormat::Markdown.extension(), "md");
        assert_eq!(OutputFormat::Json.extension(), "json");
    }
}

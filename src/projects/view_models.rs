//! View Models for the Projects Section
//!
//! Structured data types shared by every output format. A `Project` is one
//! portfolio entry; its `icon` variant is resolved to an inline SVG glyph
//! through an exhaustive match, so an entry can never reference a glyph that
//! does not exist.

use serde::Serialize;

// ============================================================================
// Project record
// ============================================================================

/// One portfolio entry.
#[derive(Debug, Clone, Serialize, Default)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub learnings: Vec<String>,
    pub demonstrates: Vec<String>,
    pub icon: ProjectIcon,
}

/// Which glyph represents a project. Adding a variant without a matching
/// arm in `glyph()` is a compile error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub enum ProjectIcon {
    #[default]
    Home,
    Mic,
}

impl ProjectIcon {
    pub fn glyph(&self) -> Glyph {
        match self {
            ProjectIcon::Home => Glyph::Home,
            ProjectIcon::Mic => Glyph::Mic,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectIcon::Home => "home",
            ProjectIcon::Mic => "mic",
        }
    }
}

// ============================================================================
// Glyphs
// ============================================================================

/// Inline SVG glyphs used across the section: project badges plus the
/// link affordances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Glyph {
    Home,
    Mic,
    Github,
    ExternalLink,
}

impl Glyph {
    pub fn svg_path(&self) -> &'static str {
        match self {
            Glyph::Home => r#"<path d="m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"/><polyline points="9 22 9 12 15 12 15 22"/>"#,
            Glyph::Mic => r#"<path d="M12 2a3 3 0 0 0-3 3v7a3 3 0 0 0 6 0V5a3 3 0 0 0-3-3Z"/><path d="M19 10v2a7 7 0 0 1-14 0v-2"/><line x1="12" x2="12" y1="19" y2="22"/>"#,
            Glyph::Github => r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/><path d="M9 18c-4.51 2-5-2-7-2"/>"#,
            Glyph::ExternalLink => r#"<path d="M15 3h6v6"/><path d="M10 14 21 3"/><path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/>"#,
        }
    }

    /// Render the glyph as a square inline SVG at the requested pixel size.
    pub fn svg(&self, size: u32) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">{}</svg>"#,
            self.svg_path()
        )
    }
}

// ============================================================================
// Full section document (JSON output)
// ============================================================================

/// Complete section payload for the JSON formatter.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectsDocument<'a> {
    pub section_title: &'static str,
    pub projects: &'a [Project],
    pub profile_url: &'static str,
    pub profile_label: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_resolves_to_a_glyph() {
        for icon in [ProjectIcon::Home, ProjectIcon::Mic] {
            assert!(!icon.glyph().svg_path().is_empty());
        }
    }

    #[test]
    fn svg_is_sized_square() {
        let svg = Glyph::Github.svg(20);
        assert!(svg.contains(r#"width="20""#));
        assert!(svg.contains(r#"height="20""#));
        assert!(svg.contains(r#"viewBox="0 0 24 24""#));
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn icon_labels() {
        assert_eq!(ProjectIcon::Home.label(), "home");
        assert_eq!(ProjectIcon::Mic.label(), "mic");
    }
}

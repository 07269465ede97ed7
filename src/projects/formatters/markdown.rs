use crate::projects::content::{GITHUB_PROFILE_LABEL, GITHUB_PROFILE_URL, SECTION_TITLE};
use crate::projects::view_models::Project;

/// Markdown formatter for the projects section
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format the section as a markdown document
    pub fn format(projects: &[Project]) -> String {
        let mut md = String::with_capacity(4096);

        md.push_str(&format!("# {}\n\n", SECTION_TITLE));

        for project in projects {
            Self::format_card(&mut md, project);
            md.push_str("---\n\n");
        }

        // Profile call-to-action
        md.push_str(&format!(
            "[{}]({})\n",
            GITHUB_PROFILE_LABEL, GITHUB_PROFILE_URL
        ));
        md
    }

    fn format_card(md: &mut String, project: &Project) {
        md.push_str(&format!("## {}\n\n", project.title));

        // Link lines, only for URLs that exist
        let mut links = Vec::new();
        if let Some(url) = &project.github_url {
            links.push(format!("[View on GitHub]({})", url));
        }
        if let Some(url) = &project.live_url {
            links.push(format!("[View live demo]({})", url));
        }
        if !links.is_empty() {
            md.push_str(&format!("{}\n\n", links.join(" · ")));
        }

        md.push_str(&format!("{}\n\n", project.description));

        if !project.tech_stack.is_empty() {
            let chips = project
                .tech_stack
                .iter()
                .map(|t| format!("`{}`", t))
                .collect::<Vec<_>>()
                .join(" · ");
            md.push_str(&format!("**Tech Stack**: {}\n\n", chips));
        }

        if !project.learnings.is_empty() {
            md.push_str("### Key Learnings\n\n");
            for learning in &project.learnings {
                md.push_str(&format!("- {}\n", learning));
            }
            md.push('\n');
        }

        if !project.demonstrates.is_empty() {
            md.push_str("### What This Demonstrates\n\n");
            for item in &project.demonstrates {
                md.push_str(&format!("- ✓ {}\n", item));
            }
            md.push('\n');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projects::view_models::ProjectIcon;

    fn sample_project() -> Project {
        Project {
            title: "X".to_string(),
            description: "A sample project.".to_string(),
            tech_stack: vec!["A".to_string(), "B".to_string()],
            github_url: Some("https://a".to_string()),
            live_url: None,
            learnings: vec!["first lesson".to_string()],
            demonstrates: vec!["first skill".to_string()],
            icon: ProjectIcon::Mic,
        }
    }

    #[test]
    fn test_format_markdown() {
        let md = MarkdownFormatter::format(&[sample_project()]);

        assert!(md.starts_with("# Projects\n"));
        assert!(md.contains("## X\n"));
        assert!(md.contains("A sample project."));
        assert!(md.contains("**Tech Stack**: `A` · `B`"));
        assert!(md.contains("- first lesson"));
        assert!(md.contains("- ✓ first skill"));
    }

    #[test]
    fn test_links_follow_url_presence() {
        let md = MarkdownFormatter::format(&[sample_project()]);
        assert!(md.contains("[View on GitHub](https://a)"));
        assert!(!md.contains("View live demo"));

        let mut linkless = sample_project();
        linkless.github_url = None;
        let md = MarkdownFormatter::format(&[linkless]);
        assert!(!md.contains("View on GitHub"));
        assert!(!md.contains("View live demo"));
    }

    #[test]
    fn test_cta_always_last() {
        let md = MarkdownFormatter::format(&[]);
        assert!(md.trim_end().ends_with(&format!(
            "[{}]({})",
            GITHUB_PROFILE_LABEL, GITHUB_PROFILE_URL
        )));
    }

    #[test]
    fn test_render_is_idempotent() {
        let projects = [sample_project()];
        assert_eq!(
            MarkdownFormatter::format(&projects),
            MarkdownFormatter::format(&projects)
        );
    }
}

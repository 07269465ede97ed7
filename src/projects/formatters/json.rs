use crate::projects::content::{GITHUB_PROFILE_LABEL, GITHUB_PROFILE_URL, SECTION_TITLE};
use crate::projects::view_models::{Project, ProjectsDocument};

/// JSON formatter for the projects section
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format the section as pretty-printed JSON
    pub fn format(projects: &[Project]) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&Self::document(projects))
    }

    /// Format the section as compact JSON (no whitespace)
    pub fn format_compact(projects: &[Project]) -> Result<String, serde_json::Error> {
        serde_json::to_string(&Self::document(projects))
    }

    fn document(projects: &[Project]) -> ProjectsDocument<'_> {
        ProjectsDocument {
            section_title: SECTION_TITLE,
            projects,
            profile_url: GITHUB_PROFILE_URL,
            profile_label: GITHUB_PROFILE_LABEL,
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
            icon: ProjectIcon::Home,
        }
    }

    #[test]
    fn test_format_json() {
        let json = JsonFormatter::format(&[sample_project()]).unwrap();

        assert!(json.contains("\"section_title\": \"Projects\""));
        assert!(json.contains("\"title\": \"X\""));
        assert!(json.contains("\"github_url\": \"https://a\""));
        assert!(json.contains("\"live_url\": null"));
        assert!(json.contains("\"icon\": \"Home\""));
        assert!(json.contains("\"profile_url\""));
    }

    #[test]
    fn test_format_compact() {
        let json = JsonFormatter::format_compact(&[sample_project()]).unwrap();

        // Compact format should have no indented lines
        assert!(!json.contains("\n  "));
    }

    #[test]
    fn test_field_values_round_trip() {
        let json = JsonFormatter::format(&[sample_project()]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let projects = value["projects"].as_array().unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0]["tech_stack"][0], "A");
        assert_eq!(projects[0]["tech_stack"][1], "B");
        assert!(projects[0]["live_url"].is_null());
    }
}

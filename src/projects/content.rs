//! Content Store
//!
//! The fixed, ordered list of portfolio entries. Content is curated, not
//! user- or database-driven: changing it means editing this file and
//! redeploying. The list is built once at first access and never mutated.

use once_cell::sync::Lazy;
use thiserror::Error;

use crate::projects::view_models::{Project, ProjectIcon};

/// Profile linked by the footer call-to-action.
pub const GITHUB_PROFILE_URL: &str = "https://github.com/coolchamp26";
pub const GITHUB_PROFILE_LABEL: &str = "See More on GitHub";

pub const SECTION_TITLE: &str = "Projects";

static PROJECTS: Lazy<Vec<Project>> = Lazy::new(|| {
    vec![
        Project {
            title: "Housing Price Prediction Model".to_string(),
            description: "A machine learning project focused on predicting house prices using \
                real-world housing data. The model analyzes factors such as location, income \
                levels, and housing characteristics to estimate property values. The project \
                emphasizes understanding the end-to-end ML workflow, from data preprocessing \
                to model evaluation."
                .to_string(),
            tech_stack: vec![
                "Python".to_string(),
                "NumPy".to_string(),
                "Pandas".to_string(),
                "Scikit-learn".to_string(),
                "Matplotlib".to_string(),
                "Seaborn".to_string(),
            ],
            github_url: Some("https://github.com/coolchamp26".to_string()),
            live_url: None,
            learnings: vec![
                "Learned how to clean and preprocess real-world datasets".to_string(),
                "Understood feature selection and its impact on model performance".to_string(),
                "Implemented regression models and evaluated them using appropriate metrics"
                    .to_string(),
                "Gained hands-on experience with train-test split and model validation"
                    .to_string(),
                "Developed intuition around how data quality affects predictions".to_string(),
            ],
            demonstrates: vec![
                "Strong fundamentals in machine learning".to_string(),
                "Ability to work with real datasets".to_string(),
                "Practical understanding of regression problems".to_string(),
                "Structured problem-solving approach".to_string(),
            ],
            icon: ProjectIcon::Home,
        },
        Project {
            title: "AI Pitch Enabling System".to_string(),
            description: "An AI-powered web application designed to help users practice and \
                improve their startup or product pitches. The system allows users to deliver \
                a pitch, analyzes the input using AI, and provides structured feedback on \
                clarity, confidence, persuasion, and storytelling. The project focuses on \
                user experience, real-time interaction, and AI-driven evaluation."
                .to_string(),
            tech_stack: vec![
                "React".to_string(),
                "Vite".to_string(),
                "Tailwind CSS".to_string(),
                "Web Speech API".to_string(),
                "AI/ML APIs".to_string(),
            ],
            github_url: Some("https://github.com/coolchamp26".to_string()),
            live_url: None,
            learnings: vec![
                "Built a complete frontend application using modern React practices".to_string(),
                "Integrated browser APIs for speech-to-text functionality".to_string(),
                "Designed user flows focused on feedback and iteration".to_string(),
                "Learned how to structure AI prompts and interpret AI-generated evaluations"
                    .to_string(),
                "Improved understanding of frontend architecture and state management"
                    .to_string(),
            ],
            demonstrates: vec![
                "Ability to build interactive, real-world web applications".to_string(),
                "Experience integrating AI into user-facing products".to_string(),
                "Strong focus on UX and practical problem-solving".to_string(),
                "Understanding of modern frontend tools and workflows".to_string(),
            ],
            icon: ProjectIcon::Mic,
        },
    ]
});

/// Read-only view of the project list, in declaration order.
pub fn projects() -> &'static [Project] {
    &PROJECTS
}

/// Content invariant violations. Empty sublists are fine (they render
/// nothing); titles must be present and unique because they identify cards.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("project at position {0} has an empty title")]
    EmptyTitle(usize),
    #[error("duplicate project title: {0}")]
    DuplicateTitle(String),
}

/// Check the content invariants. Run before rendering so a bad edit to the
/// store fails during development instead of shipping a broken section.
pub fn validate(projects: &[Project]) -> Result<(), ContentError> {
    let mut seen = Vec::with_capacity(projects.len());
    for (i, project) in projects.iter().enumerate() {
        if project.title.trim().is_empty() {
            return Err(ContentError::EmptyTitle(i));
        }
        if seen.contains(&project.title.as_str()) {
            return Err(ContentError::DuplicateTitle(project.title.clone()));
        }
        seen.push(project.title.as_str());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_is_valid() {
        assert_eq!(validate(projects()), Ok(()));
    }

    #[test]
    fn store_order_is_stable() {
        let list = projects();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].title, "Housing Price Prediction Model");
        assert_eq!(list[1].title, "AI Pitch Enabling System");
    }

    #[test]
    fn store_urls_match_presence_contract() {
        for project in projects() {
            assert!(project.github_url.is_some());
            assert!(project.live_url.is_none());
        }
    }

    #[test]
    fn empty_title_rejected() {
        let bad = vec![Project::default()];
        assert_eq!(validate(&bad), Err(ContentError::EmptyTitle(0)));
    }

    #[test]
    fn duplicate_title_rejected() {
        let mut a = Project::default();
        a.title = "Same".to_string();
        let b = a.clone();
        assert_eq!(
            validate(&[a, b]),
            Err(ContentError::DuplicateTitle("Same".to_string()))
        );
    }
}

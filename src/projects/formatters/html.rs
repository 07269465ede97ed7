use crate::projects::content::{GITHUB_PROFILE_LABEL, GITHUB_PROFILE_URL, SECTION_TITLE};
use crate::projects::view_models::{Glyph, Project};
use crate::ui::{Button, ButtonSize, ButtonVariant};

/// HTML formatter for the projects section
pub struct HtmlFormatter;

impl HtmlFormatter {
    /// Format the section as a standalone HTML document with embedded CSS
    pub fn format(projects: &[Project]) -> String {
        let mut html = String::with_capacity(8192);

        // HTML header with CSS
        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        html.push_str("<meta charset=\"UTF-8\">\n");
        html.push_str("<title>Projects</title>\n");
        html.push_str("<style>\n");
        html.push_str("body { font-family: system-ui, sans-serif; max-width: 896px; margin: 40px auto; padding: 20px; line-height: 1.6; color: #1c1917; }\n");
        html.push_str(".section-header { display: flex; align-items: center; gap: 16px; margin-bottom: 48px; }\n");
        html.push_str(".section-header h2 { font-size: 1.875em; font-weight: 700; margin: 0; }\n");
        html.push_str(".divider { height: 1px; background: #e7e5e4; flex: 1; max-width: 320px; }\n");
        html.push_str(".project-grid { display: grid; gap: 32px; }\n");
        html.push_str(".project-card { background: #fff; border: 1px solid #e7e5e4; border-radius: 12px; padding: 32px; }\n");
        html.push_str(".card-header { display: flex; align-items: flex-start; gap: 16px; }\n");
        html.push_str(".icon-badge { width: 48px; height: 48px; border-radius: 8px; background: #eef2ff; color: #4f46e5; display: flex; align-items: center; justify-content: center; flex-shrink: 0; }\n");
        html.push_str(".card-header h3 { font-size: 1.25em; font-weight: 600; margin: 0; flex: 1; }\n");
        html.push_str(".card-links { display: flex; gap: 8px; flex-shrink: 0; }\n");
        html.push_str(".icon-link { color: #78716c; padding: 4px; }\n");
        html.push_str(".icon-link:hover { color: #4f46e5; }\n");
        html.push_str(".description { color: #57534e; margin: 24px 0; }\n");
        html.push_str(".tech-stack { display: flex; flex-wrap: wrap; gap: 8px; }\n");
        html.push_str(".tech-tag { padding: 4px 10px; background: #eef2ff; color: #4f46e5; border-radius: 6px; font-size: 0.75em; font-weight: 500; }\n");
        html.push_str(".insight-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 16px; margin-top: 24px; }\n");
        html.push_str(".insight-panel { border-radius: 8px; padding: 16px; }\n");
        html.push_str(".insight-panel h4 { font-size: 0.875em; font-weight: 500; margin: 0 0 12px 0; }\n");
        html.push_str(".insight-panel ul { list-style: none; margin: 0; padding: 0; }\n");
        html.push_str(".insight-panel li { font-size: 0.875em; color: #57534e; margin-bottom: 8px; }\n");
        html.push_str(".learnings { background: #f5f5f4; }\n");
        html.push_str(".demonstrates { background: #eef2ff; }\n");
        html.push_str(".bullet { color: #4f46e5; margin-right: 8px; }\n");
        html.push_str(".cta { text-align: center; margin-top: 40px; }\n");
        html.push_str(".btn { display: inline-flex; align-items: center; gap: 8px; border-radius: 8px; font-weight: 500; text-decoration: none; color: #1c1917; }\n");
        html.push_str(".btn-outline { border: 1px solid #d6d3d1; background: transparent; }\n");
        html.push_str(".btn-outline:hover { background: #f5f5f4; }\n");
        html.push_str(".btn-lg { padding: 10px 24px; font-size: 1em; }\n");
        html.push_str("</style>\n</head>\n<body>\n");

        html.push_str(&Self::format_section(projects));

        html.push_str("</body>\n</html>\n");
        html
    }

    /// Format just the `<section>` fragment for embedding in a host page
    pub fn format_section(projects: &[Project]) -> String {
        let mut html = String::with_capacity(4096);

        html.push_str("<section id=\"projects\">\n");

        // Section header with divider
        html.push_str("<div class=\"section-header\">\n");
        html.push_str(&format!("<h2>{}</h2>\n", SECTION_TITLE));
        html.push_str("<div class=\"divider\"></div>\n");
        html.push_str("</div>\n");

        // One card per project, store order
        html.push_str("<div class=\"project-grid\">\n");
        for project in projects {
            Self::push_card(&mut html, project);
        }
        html.push_str("</div>\n");

        // Profile call-to-action, rendered regardless of store contents
        html.push_str("<div class=\"cta\">\n");
        let inner = format!("{} {}", Glyph::Github.svg(16), GITHUB_PROFILE_LABEL);
        html.push_str(
            &Button::new(ButtonVariant::Outline, ButtonSize::Large)
                .external_anchor(GITHUB_PROFILE_URL, &inner),
        );
        html.push_str("\n</div>\n");

        html.push_str("</section>\n");
        html
    }

    fn push_card(html: &mut String, project: &Project) {
        html.push_str("<article class=\"project-card\">\n");

        // Header: icon badge, title, link affordances
        html.push_str("<div class=\"card-header\">\n");
        html.push_str(&format!(
            "<div class=\"icon-badge\">{}</div>\n",
            project.icon.glyph().svg(24)
        ));
        html.push_str(&format!("<h3>{}</h3>\n", project.title));
        html.push_str("<div class=\"card-links\">\n");
        if let Some(url) = &project.github_url {
            html.push_str(&format!(
                "<a class=\"icon-link\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" aria-label=\"View on GitHub\">{}</a>\n",
                url,
                Glyph::Github.svg(20)
            ));
        }
        if let Some(url) = &project.live_url {
            html.push_str(&format!(
                "<a class=\"icon-link\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" aria-label=\"View live demo\">{}</a>\n",
                url,
                Glyph::ExternalLink.svg(20)
            ));
        }
        html.push_str("</div>\n");
        html.push_str("</div>\n");

        // Description
        html.push_str(&format!(
            "<p class=\"description\">{}</p>\n",
            project.description
        ));

        // Tech stack chips, declaration order
        if !project.tech_stack.is_empty() {
            html.push_str("<div class=\"tech-stack\">\n");
            for tech in &project.tech_stack {
                html.push_str(&format!("<span class=\"tech-tag\">{}</span>\n", tech));
            }
            html.push_str("</div>\n");
        }

        // Learnings and demonstrates, side by side
        html.push_str("<div class=\"insight-grid\">\n");
        Self::push_sublist(html, "learnings", "Key Learnings", "•", &project.learnings);
        Self::push_sublist(
            html,
            "demonstrates",
            "What This Demonstrates",
            "✓",
            &project.demonstrates,
        );
        html.push_str("</div>\n");

        html.push_str("</article>\n");
    }

    fn push_sublist(html: &mut String, class: &str, heading: &str, bullet: &str, items: &[String]) {
        if items.is_empty() {
            return;
        }
        html.push_str(&format!("<div class=\"insight-panel {}\">\n", class));
        html.push_str(&format!("<h4>{}</h4>\n", heading));
        html.push_str("<ul>\n");
        for item in items {
            html.push_str(&format!(
                "<li><span class=\"bullet\">{}</span>{}</li>\n",
                bullet, item
            ));
        }
        html.push_str("</ul>\n");
        html.push_str("</div>\n");
    }
}

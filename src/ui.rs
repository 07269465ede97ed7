//! Generic UI primitives.
//!
//! `Button` wraps an anchor element with button styling while leaving the
//! anchor's link semantics untouched, so a call-to-action stays a navigable
//! link that merely looks like a button.

/// Visual treatment of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Solid,
    Outline,
}

impl ButtonVariant {
    pub fn css_class(&self) -> &'static str {
        match self {
            ButtonVariant::Solid => "btn-solid",
            ButtonVariant::Outline => "btn-outline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    pub fn css_class(&self) -> &'static str {
        match self {
            ButtonSize::Medium => "btn-md",
            ButtonSize::Large => "btn-lg",
        }
    }
}

/// A clickable control rendered as styled markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct Button {
    variant: ButtonVariant,
    size: ButtonSize,
}

impl Button {
    pub fn new(variant: ButtonVariant, size: ButtonSize) -> Self {
        Self { variant, size }
    }

    /// Wrap an anchor in button styling. The child stays a plain link.
    pub fn anchor(&self, href: &str, inner_html: &str) -> String {
        format!(
            r#"<a class="{}" href="{}">{}</a>"#,
            self.classes(),
            href,
            inner_html
        )
    }

    /// Like `anchor`, for links that leave the site: opens a new browsing
    /// context and denies the opened page a back-reference to its opener.
    pub fn external_anchor(&self, href: &str, inner_html: &str) -> String {
        format!(
            r#"<a class="{}" href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
            self.classes(),
            href,
            inner_html
        )
    }

    fn classes(&self) -> String {
        format!("btn {} {}", self.variant.css_class(), self.size.css_class())
    }
}

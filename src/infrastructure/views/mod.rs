//! Terminal templates for the portfolio sections.
//!
//! Each renderer maps one section's content into fixed text. A section that
//! is still loading renders a placeholder; an empty one renders nothing.

mod sections;

pub use sections::*;

use chrono::{DateTime, NaiveDate};

use crate::{
    application::{Page, ViewState},
    domain::Icon,
};

pub const LOADING: &str = "Loading...";

pub fn render_state<T>(state: &ViewState<T>, render: impl FnOnce(&T) -> String) -> String {
    match state {
        ViewState::Loading => format!("{}\n", LOADING),
        ViewState::Empty => String::new(),
        ViewState::Ready(content) => render(content),
    }
}

/// Renders every section in page order, skipping empty ones.
pub fn render_page(page: &Page, carousel: &Carousel) -> String {
    [
        render_state(&page.hero, hero),
        render_state(&page.about, about),
        render_state(&page.skills, skills),
        render_state(&page.projects, projects),
        render_state(&page.experience, experience),
        render_state(&page.services, services),
        render_state(&page.testimonials, |t| testimonials(t, carousel)),
        render_state(&page.blogs, blogs),
        render_state(&page.contact, contact),
        render_state(&page.footer, footer),
    ]
    .into_iter()
    .filter(|block| !block.is_empty())
    .collect::<Vec<_>>()
    .join("\n")
}

pub fn glyph(icon: &Icon) -> &str {
    match icon {
        Icon::Mail => "✉",
        Icon::Download => "⬇",
        Icon::Briefcase => "💼",
        Icon::Users => "👥",
        Icon::Award => "🏆",
        Icon::Coffee => "☕",
        Icon::Code => "</>",
        Icon::Palette => "🎨",
        Icon::Database => "🗄",
        Icon::Zap => "⚡",
        Icon::Globe => "🌐",
        Icon::Smartphone => "📱",
        Icon::Phone => "☎",
        Icon::MapPin => "📍",
        Icon::Github => "GitHub",
        Icon::Linkedin => "LinkedIn",
        Icon::Twitter => "Twitter",
        Icon::Heart => "♥",
        Icon::Unmapped(name) => name,
    }
}

/// Resolves an optional payload icon against the section's fallback.
pub fn icon_or(icon: Option<&Icon>, fallback: Icon) -> Icon {
    match icon {
        Some(icon) => icon.resolve(fallback),
        None => fallback,
    }
}

/// Shows `2024-03-15` (or an RFC 3339 stamp) as `Mar 15, 2024`; anything else verbatim.
pub fn display_date(raw: &str) -> String {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%b %-d, %Y").to_string();
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return stamp.format("%b %-d, %Y").to_string();
    }
    raw.to_string()
}

/// Which testimonial is on screen. Moves wrap around in both directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
}

impl Carousel {
    pub fn at(index: usize) -> Self {
        Self { index }
    }

    pub fn index(&self, len: usize) -> usize {
        if len == 0 {
            0
        } else {
            self.index % len
        }
    }

    pub fn next(&mut self, len: usize) {
        if len > 0 {
            self.index = (self.index(len) + 1) % len;
        }
    }

    pub fn prev(&mut self, len: usize) {
        if len > 0 {
            self.index = (self.index(len) + len - 1) % len;
        }
    }
}

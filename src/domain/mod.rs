mod content;
mod form;
mod icon;

pub use content::*;
pub use form::{ContactForm, SubmitNotice};
pub use icon::Icon;

use std::fmt;
use std::str::FromStr;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_CMS_URL: &str = "http://localhost:3000";

pub const GENERIC_API_FAILURE: &str = "API request failed";
pub const GENERIC_UPLOAD_FAILURE: &str = "Upload failed";

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Transport error on {endpoint}: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: BoxError,
    },

    #[error("{message}")]
    Api {
        endpoint: String,
        status: u16,
        message: String,
        body: Option<serde_json::Value>,
    },

    #[error("Invalid {resource} payload: {message}")]
    Validation { resource: String, message: String },
}

impl ClientError {
    pub fn transport(endpoint: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Transport {
            endpoint: endpoint.into(),
            source: source.into(),
        }
    }

    /// Builds an `Api` error, preferring the backend's `message` field over `fallback`.
    pub fn api(
        endpoint: impl Into<String>,
        status: u16,
        body: Option<serde_json::Value>,
        fallback: &str,
    ) -> Self {
        let message = body
            .as_ref()
            .and_then(|b| b.get("message"))
            .and_then(|m| m.as_str())
            .filter(|m| !m.is_empty())
            .unwrap_or(fallback)
            .to_string();

        Self::Api {
            endpoint: endpoint.into(),
            status,
            message,
            body,
        }
    }

    pub fn validation(resource: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Validation {
            resource: resource.into(),
            message: message.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// One independently fetched area of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Skills,
    Projects,
    Experience,
    Services,
    Testimonials,
    Blogs,
    Contact,
    Footer,
}

impl Section {
    /// Page order.
    pub const ALL: [Section; 10] = [
        Section::Hero,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Experience,
        Section::Services,
        Section::Testimonials,
        Section::Blogs,
        Section::Contact,
        Section::Footer,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Section::Hero => "/hero",
            Section::About => "/about",
            Section::Skills => "/skills",
            Section::Projects => "/projects",
            Section::Experience => "/experience",
            Section::Services => "/services",
            Section::Testimonials => "/testimonials",
            Section::Blogs => "/blogs",
            Section::Contact => "/contact",
            Section::Footer => "/footer",
        }
    }

    pub fn name(self) -> &'static str {
        &self.path()[1..]
    }

    /// Projects and Blogs expose item add/delete.
    pub fn is_list(self) -> bool {
        matches!(self, Section::Projects | Section::Blogs)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().trim_start_matches('/').to_lowercase();
        Section::ALL
            .into_iter()
            .find(|section| section.name() == wanted)
            .ok_or_else(|| format!("Unknown section: {}", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Portfolio,
    RedirectToCms(String),
}

/// `/cms` and everything below it belongs to the admin frontend.
pub fn route(path: &str, cms_url: &str) -> Route {
    if path == "/cms" || path.starts_with("/cms/") {
        Route::RedirectToCms(cms_url.to_string())
    } else {
        Route::Portfolio
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn api_error_prefers_backend_message() {
        let err = ClientError::api("/hero", 500, Some(json!({"message": "X"})), GENERIC_API_FAILURE);
        assert_eq!(err.to_string(), "X");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn api_error_falls_back_without_message() {
        let err = ClientError::api("/hero", 502, None, GENERIC_API_FAILURE);
        assert_eq!(err.to_string(), GENERIC_API_FAILURE);

        let err = ClientError::api("/upload/single", 400, Some(json!({"error": true})), GENERIC_UPLOAD_FAILURE);
        assert_eq!(err.to_string(), GENERIC_UPLOAD_FAILURE);
    }

    #[test]
    fn sections_parse_by_name_or_path() {
        assert_eq!("hero".parse::<Section>(), Ok(Section::Hero));
        assert_eq!("/Blogs".parse::<Section>(), Ok(Section::Blogs));
        assert!("portfolio".parse::<Section>().is_err());
        assert_eq!(Section::Testimonials.to_string(), "testimonials");
    }

    #[test]
    fn only_projects_and_blogs_are_lists() {
        let lists: Vec<_> = Section::ALL.into_iter().filter(|s| s.is_list()).collect();
        assert_eq!(lists, vec![Section::Projects, Section::Blogs]);
    }

    #[test]
    fn cms_paths_redirect() {
        let cms = DEFAULT_CMS_URL;
        assert_eq!(route("/cms", cms), Route::RedirectToCms(cms.to_string()));
        assert_eq!(route("/cms/hero/edit", cms), Route::RedirectToCms(cms.to_string()));
        assert_eq!(route("/cmsx", cms), Route::Portfolio);
        assert_eq!(route("/", cms), Route::Portfolio);
    }
}

use crate::domain::{
    AboutContent, BlogsContent, ClientError, ContactContent, ExperienceContent, FooterContent,
    HeroContent, ProjectsContent, Section, ServicesContent, SkillsContent, TestimonialsContent,
};

use super::ContentClient;

/// What a section can show at any moment.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Empty,
    Ready(T),
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Loading
    }
}

impl<T> ViewState<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, ViewState::Ready(_))
    }

    pub fn as_ready(&self) -> Option<&T> {
        match self {
            ViewState::Ready(content) => Some(content),
            _ => None,
        }
    }

    /// Demotes ready content that fails `keep` to `Empty`.
    pub fn filter(self, keep: impl FnOnce(&T) -> bool) -> Self {
        match self {
            ViewState::Ready(content) if !keep(&content) => ViewState::Empty,
            other => other,
        }
    }
}

/// Turns a finished fetch into a view state. Failures are logged and show nothing.
pub fn settle<T>(section: Section, result: Result<Option<T>, ClientError>) -> ViewState<T> {
    match result {
        Ok(Some(content)) => ViewState::Ready(content),
        Ok(None) => ViewState::Empty,
        Err(e) => {
            tracing::warn!("Error fetching {} data: {}", section, e);
            ViewState::Empty
        }
    }
}

/// Every section's state, in page order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub hero: ViewState<HeroContent>,
    pub about: ViewState<AboutContent>,
    pub skills: ViewState<SkillsContent>,
    pub projects: ViewState<ProjectsContent>,
    pub experience: ViewState<ExperienceContent>,
    pub services: ViewState<ServicesContent>,
    pub testimonials: ViewState<TestimonialsContent>,
    pub blogs: ViewState<BlogsContent>,
    pub contact: ViewState<ContactContent>,
    pub footer: ViewState<FooterContent>,
}

impl Page {
    pub fn ready_count(&self) -> usize {
        [
            self.hero.is_ready(),
            self.about.is_ready(),
            self.skills.is_ready(),
            self.projects.is_ready(),
            self.experience.is_ready(),
            self.services.is_ready(),
            self.testimonials.is_ready(),
            self.blogs.is_ready(),
            self.contact.is_ready(),
            self.footer.is_ready(),
        ]
        .into_iter()
        .filter(|ready| *ready)
        .count()
    }
}

/// Fetches all ten sections concurrently, each on its own.
///
/// In-flight requests are not cancelled: dropping the returned future is the
/// only way to abandon them, and the CLI never does.
pub async fn mount(client: &ContentClient) -> Page {
    let hero = client.hero();
    let about = client.about();
    let skills = client.skills();
    let projects = client.projects();
    let experience = client.experience();
    let services = client.services();
    let testimonials = client.testimonials();
    let blogs = client.blogs();
    let contact = client.contact();
    let footer = client.footer();

    let (hero, about, skills, projects, experience, services, testimonials, blogs, contact, footer) = tokio::join!(
        hero.load(),
        about.load(),
        skills.load(),
        projects.load(),
        experience.load(),
        services.load(),
        testimonials.load(),
        blogs.load(),
        contact.load(),
        footer.load(),
    );

    Page {
        hero: settle(Section::Hero, hero),
        about: settle(Section::About, about),
        skills: settle(Section::Skills, skills),
        projects: settle(Section::Projects, projects),
        experience: settle(Section::Experience, experience),
        services: settle(Section::Services, services),
        testimonials: settle(Section::Testimonials, testimonials)
            .filter(|t| !t.testimonials.is_empty()),
        blogs: settle(Section::Blogs, blogs),
        contact: settle(Section::Contact, contact),
        footer: settle(Section::Footer, footer),
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::RecordingGateway;
    use super::*;
    use crate::ports::Method;
    use serde_json::json;
    use std::sync::Arc;

    #[test]
    fn sections_start_loading() {
        let page = Page::default();
        assert_eq!(page.hero, ViewState::Loading);
        assert_eq!(page.ready_count(), 0);
    }

    #[tokio::test]
    async fn mount_settles_every_section_independently() {
        let gateway = RecordingGateway::default()
            .respond(Method::Get, "/hero", json!({"data": {"name": "Ada"}}))
            .respond(Method::Get, "/about", json!({"data": null}))
            .fail(Method::Get, "/skills", 500, Some(json!({"message": "boom"})))
            .respond(Method::Get, "/projects", json!({"data": {"bio": 1, "projects": "nope"}}))
            .respond(Method::Get, "/testimonials", json!({"data": {"testimonials": []}}))
            .respond(Method::Get, "/footer", json!({"data": {"brand": {"name": "Ada.dev"}}}));
        let gateway = Arc::new(gateway);
        let client = ContentClient::new(gateway.clone());

        let page = mount(&client).await;

        assert_eq!(page.hero.as_ready().unwrap().name.as_deref(), Some("Ada"));
        assert_eq!(page.about, ViewState::Empty);
        assert_eq!(page.skills, ViewState::Empty);
        assert_eq!(page.projects, ViewState::Empty);
        assert_eq!(page.testimonials, ViewState::Empty);
        // No canned response means a null body, so nothing to show.
        assert_eq!(page.services, ViewState::Empty);
        assert!(page.footer.is_ready());
        assert_eq!(page.ready_count(), 2);
        assert_eq!(gateway.calls().len(), 10);
    }

    #[test]
    fn filter_only_touches_ready_states() {
        let loading: ViewState<Vec<u8>> = ViewState::Loading;
        assert_eq!(loading.filter(|v| !v.is_empty()), ViewState::Loading);
        assert_eq!(ViewState::Ready(vec![1]).filter(|v| !v.is_empty()), ViewState::Ready(vec![1]));
        assert_eq!(ViewState::Ready(Vec::<u8>::new()).filter(|v| !v.is_empty()), ViewState::Empty);
    }
}

mod page;
mod upload;

pub use page::{mount, settle, Page, ViewState};
pub use upload::UploadClient;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::{
    domain::{
        decode_section, AboutContent, BlogsContent, ClientError, ContactContent,
        ContactForm, ExperienceContent, FooterContent, HeroContent, ProjectsContent,
        Section, ServicesContent, SkillsContent, SubmitNotice, TestimonialsContent,
    },
    ports::{ContentGateway, RequestOptions},
};

pub const CONTACT_SUBMIT_PATH: &str = "/contact/submit";
pub const HEALTH_PATH: &str = "/health";

/// Entry point to every section resource, the upload endpoints and the
/// health probe. Holds no content between calls.
#[derive(Clone)]
pub struct ContentClient {
    gateway: Arc<dyn ContentGateway>,
}

impl ContentClient {
    pub fn new(gateway: Arc<dyn ContentGateway>) -> Self {
        Self { gateway }
    }

    pub fn base_url(&self) -> &str {
        self.gateway.base_url()
    }

    fn section<T>(&self, section: Section) -> SectionClient<T> {
        SectionClient {
            gateway: Arc::clone(&self.gateway),
            section,
            _content: PhantomData,
        }
    }

    pub fn hero(&self) -> SectionClient<HeroContent> {
        self.section(Section::Hero)
    }

    pub fn about(&self) -> SectionClient<AboutContent> {
        self.section(Section::About)
    }

    pub fn skills(&self) -> SectionClient<SkillsContent> {
        self.section(Section::Skills)
    }

    pub fn projects(&self) -> SectionClient<ProjectsContent> {
        self.section(Section::Projects)
    }

    pub fn experience(&self) -> SectionClient<ExperienceContent> {
        self.section(Section::Experience)
    }

    pub fn services(&self) -> SectionClient<ServicesContent> {
        self.section(Section::Services)
    }

    pub fn testimonials(&self) -> SectionClient<TestimonialsContent> {
        self.section(Section::Testimonials)
    }

    pub fn blogs(&self) -> SectionClient<BlogsContent> {
        self.section(Section::Blogs)
    }

    pub fn contact(&self) -> SectionClient<ContactContent> {
        self.section(Section::Contact)
    }

    pub fn footer(&self) -> SectionClient<FooterContent> {
        self.section(Section::Footer)
    }

    /// Untyped access for callers that only move JSON around.
    pub fn raw(&self, section: Section) -> SectionClient<Value> {
        self.section(section)
    }

    pub fn uploads(&self) -> UploadClient {
        UploadClient::new(Arc::clone(&self.gateway))
    }

    pub async fn health(&self) -> Result<Value, ClientError> {
        self.gateway.request(HEALTH_PATH, RequestOptions::get()).await
    }
}

/// Binds the gateway to one section's fixed path.
pub struct SectionClient<T> {
    gateway: Arc<dyn ContentGateway>,
    section: Section,
    _content: PhantomData<fn() -> T>,
}

impl<T> SectionClient<T> {
    pub fn section(&self) -> Section {
        self.section
    }

    fn to_body<P: Serialize + ?Sized>(&self, payload: &P) -> Result<Value, ClientError> {
        serde_json::to_value(payload).map_err(|e| ClientError::validation(self.section.name(), e))
    }

    /// Raw response body, exactly as the backend produced it.
    pub async fn get(&self) -> Result<Value, ClientError> {
        self.gateway
            .request(self.section.path(), RequestOptions::get())
            .await
    }

    pub async fn update<P: Serialize + ?Sized>(&self, payload: &P) -> Result<Value, ClientError> {
        let body = self.to_body(payload)?;
        self.gateway
            .request(self.section.path(), RequestOptions::put(body))
            .await
    }
}

impl<T: DeserializeOwned> SectionClient<T> {
    /// Fetches and decodes the section's `data`; `None` when there is nothing to show.
    pub async fn load(&self) -> Result<Option<T>, ClientError> {
        let body = self.get().await?;
        decode_section(self.section.name(), &body)
    }
}

/// Sections whose items can be added and removed one at a time.
pub trait ListContent {}

impl ListContent for ProjectsContent {}

impl ListContent for BlogsContent {}

impl<T: ListContent> SectionClient<T> {
    /// Creates one item from any serializable shape (a typed `Project` or
    /// `BlogEntry`, or raw JSON). The backend answers with the stored item.
    pub async fn add<P: Serialize + ?Sized>(&self, item: &P) -> Result<Value, ClientError> {
        let body = self.to_body(item)?;
        self.gateway
            .request(self.section.path(), RequestOptions::post(body))
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<Value, ClientError> {
        let endpoint = format!("{}/{}", self.section.path(), id);
        self.gateway.request(&endpoint, RequestOptions::delete()).await
    }
}

impl SectionClient<ContactContent> {
    /// Write-only: nothing submitted here is readable through `get`.
    pub async fn submit<P: Serialize + ?Sized>(&self, form: &P) -> Result<Value, ClientError> {
        let body = self.to_body(form)?;
        self.gateway
            .request(CONTACT_SUBMIT_PATH, RequestOptions::post(body))
            .await
    }

    /// Required fields the backend's form schema marks as unfilled. The schema
    /// read never blocks a submission: when it fails nothing is reported missing.
    pub async fn missing_fields(&self, form: &ContactForm) -> Vec<String> {
        match self.load().await {
            Ok(content) => content
                .and_then(|c| c.form)
                .map(|schema| {
                    form.missing_required(&schema)
                        .into_iter()
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
            Err(e) => {
                tracing::warn!("Skipping required-field check: {}", e);
                Vec::new()
            }
        }
    }

    /// Submits the form, clearing it only when the backend accepted it.
    pub async fn submit_form(&self, form: &mut ContactForm) -> SubmitNotice {
        match self.submit(&*form).await {
            Ok(_) => {
                tracing::info!("Contact form submitted");
                form.reset();
                SubmitNotice::Sent
            }
            Err(e) => {
                tracing::warn!("Error submitting contact form: {}", e);
                SubmitNotice::Failed
            }
        }
    }
}

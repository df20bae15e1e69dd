use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::{ClientError, Icon};

/// A string-or-number field, as the backend is loose about ids and stat values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(serde_json::Number),
}

pub type ItemId = Scalar;

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => f.write_str(s),
            Scalar::Number(n) => write!(f, "{}", n),
        }
    }
}

impl Scalar {
    /// Numeric value of a number or a numeric string.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Text(s) => s.trim().parse().ok(),
            Scalar::Number(n) => n.as_f64(),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

/// Treats an explicit `null` like a missing key.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Decodes the `data` member of a section response.
///
/// A missing or `null` `data` means the section has nothing to show.
pub fn decode_section<T: DeserializeOwned>(
    resource: &str,
    body: &serde_json::Value,
) -> Result<Option<T>, ClientError> {
    match body.get("data") {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(data) => T::deserialize(data)
            .map(Some)
            .map_err(|e| ClientError::validation(resource, e)),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Link {
    pub name: Option<String>,
    pub href: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Image {
    pub src: Option<String>,
    pub alt: Option<String>,
    pub experience_label: Option<String>,
}

// Hero

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroContent {
    pub greeting: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
    pub bio: Option<String>,
    pub background: Option<Background>,
    #[serde(deserialize_with = "nullable")]
    pub cta_buttons: Vec<CtaButton>,
    pub hero_image: Option<Image>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Background {
    pub gradient: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CtaButton {
    pub label: Option<String>,
    pub link: Option<String>,
    pub icon: Option<Icon>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl CtaButton {
    pub fn is_primary(&self) -> bool {
        self.kind.as_deref() == Some("primary")
    }
}

// About

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutContent {
    pub title: Option<String>,
    pub name: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub bio: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub highlights: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub stats: Vec<StatCard>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatCard {
    pub icon: Option<Icon>,
    pub icon_image: Option<String>,
    pub value: Option<Scalar>,
    pub label: Option<String>,
}

// Skills

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillsContent {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub skill_categories: Vec<SkillCategory>,
    #[serde(deserialize_with = "nullable")]
    pub proficiency_skills: Vec<Proficiency>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillCategory {
    pub title: Option<String>,
    pub icon: Option<Icon>,
    #[serde(deserialize_with = "nullable")]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Proficiency {
    pub name: Option<String>,
    pub level: Option<Scalar>,
}

impl Proficiency {
    /// Level as a percentage in `0..=100`; unreadable levels count as zero.
    pub fn percent(&self) -> f64 {
        self.level
            .as_ref()
            .and_then(Scalar::as_f64)
            .unwrap_or_default()
            .clamp(0.0, 100.0)
    }
}

// Projects

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectsContent {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    #[serde(alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ItemId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub tech: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_link: Option<String>,
}

// Experience

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceContent {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub experiences: Vec<WorkEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkEntry {
    pub year: Option<Scalar>,
    pub role: Option<String>,
    pub company: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub responsibilities: Vec<String>,
}

// Services

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServicesContent {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub services: Vec<ServiceCard>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceCard {
    pub icon: Option<Icon>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
}

// Testimonials

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestimonialsContent {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Testimonial {
    pub name: Option<String>,
    pub role: Option<String>,
    pub image: Option<String>,
    pub text: Option<String>,
}

// Blogs

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogsContent {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub featured_blog: Option<BlogEntry>,
    #[serde(deserialize_with = "nullable")]
    pub blogs: Vec<BlogEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogEntry {
    #[serde(alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ItemId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

// Contact

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactContent {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub contact_info: Vec<ContactInfo>,
    pub form: Option<FormSchema>,
    pub additional_info: Option<AdditionalInfo>,
    #[serde(deserialize_with = "nullable")]
    pub social_links: Vec<SocialLink>,
    pub map: Option<MapInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactInfo {
    pub icon: Option<Icon>,
    pub title: Option<String>,
    pub value: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormSchema {
    #[serde(deserialize_with = "nullable")]
    pub fields: Vec<FormField>,
    pub submit_button: Option<SubmitButton>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormField {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub placeholder: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub required: bool,
}

impl FormField {
    pub fn is_textarea(&self) -> bool {
        self.kind.as_deref() == Some("textarea")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmitButton {
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdditionalInfo {
    pub intro_text: Option<String>,
    pub response_time: Option<String>,
    pub availability: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialLink {
    pub platform: Option<String>,
    pub icon: Option<Icon>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MapInfo {
    pub location: Option<String>,
}

// Footer

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterContent {
    pub brand: Option<Brand>,
    #[serde(deserialize_with = "nullable")]
    pub social_links: Vec<FooterSocial>,
    #[serde(deserialize_with = "nullable")]
    pub quick_links: Vec<Link>,
    pub bottom_bar: Option<BottomBar>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Brand {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// The footer addresses its social links by `href` rather than `link`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterSocial {
    pub platform: Option<String>,
    pub icon: Option<Icon>,
    pub href: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BottomBar {
    pub text: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub heart_icon: bool,
    #[serde(deserialize_with = "nullable")]
    pub links: Vec<Link>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_hero_from_envelope() {
        let body = json!({
            "success": true,
            "data": {
                "greeting": "Hi there",
                "name": "Ada",
                "ctaButtons": [{"label": "Contact", "link": "#contact", "icon": "Mail", "type": "primary"}],
                "heroImage": {"src": "/me.png", "experienceLabel": "10+ years"}
            }
        });

        let hero: HeroContent = decode_section("hero", &body).unwrap().unwrap();
        assert_eq!(hero.name.as_deref(), Some("Ada"));
        assert_eq!(hero.cta_buttons[0].icon, Some(Icon::Mail));
        assert!(hero.cta_buttons[0].is_primary());
        assert_eq!(
            hero.hero_image.unwrap().experience_label.as_deref(),
            Some("10+ years")
        );
    }

    #[test]
    fn missing_or_null_data_is_empty() {
        let none: Option<AboutContent> = decode_section("about", &json!({"success": true})).unwrap();
        assert!(none.is_none());

        let none: Option<AboutContent> = decode_section("about", &json!({"data": null})).unwrap();
        assert!(none.is_none());
    }

    #[test]
    fn wrong_shape_is_a_validation_error() {
        let body = json!({"data": {"bio": 42}});
        let err = decode_section::<AboutContent>("about", &body).unwrap_err();
        match err {
            ClientError::Validation { resource, .. } => assert_eq!(resource, "about"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn null_lists_and_flags_decode_as_empty() {
        let body = json!({"data": {"title": "About", "highlights": null, "bio": null, "stats": null}});
        let about: AboutContent = decode_section("about", &body).unwrap().unwrap();
        assert_eq!(about.title.as_deref(), Some("About"));
        assert!(about.highlights.is_empty());
        assert!(about.stats.is_empty());

        let body = json!({"data": {
            "socialLinks": null,
            "bottomBar": {"text": "Made with", "heartIcon": null, "links": null}
        }});
        let footer: FooterContent = decode_section("footer", &body).unwrap().unwrap();
        let bar = footer.bottom_bar.unwrap();
        assert!(!bar.heart_icon);
        assert!(bar.links.is_empty());

        let body = json!({"data": {"form": {"fields": [{"name": "email", "required": null}]}}});
        let contact: ContactContent = decode_section("contact", &body).unwrap().unwrap();
        assert!(!contact.form.unwrap().fields[0].required);
    }

    #[test]
    fn levels_and_years_accept_any_scalar() {
        let body = json!({"data": {"proficiencySkills": [
            {"name": "Rust", "level": 92.5},
            {"name": "Go", "level": 300},
            {"name": "SQL", "level": "80"}
        ]}});
        let skills: SkillsContent = decode_section("skills", &body).unwrap().unwrap();
        let percents: Vec<f64> = skills.proficiency_skills.iter().map(Proficiency::percent).collect();
        assert_eq!(percents, vec![92.5, 100.0, 80.0]);

        let body = json!({"data": {"experiences": [{"year": 2023}, {"year": "2019 - 2021"}]}});
        let experience: ExperienceContent = decode_section("experience", &body).unwrap().unwrap();
        assert_eq!(experience.experiences[0].year.as_ref().unwrap().to_string(), "2023");
        assert_eq!(
            experience.experiences[1].year.as_ref().unwrap().to_string(),
            "2019 - 2021"
        );
    }

    #[test]
    fn item_ids_accept_strings_and_numbers() {
        let body = json!({"data": {"projects": [{"_id": "abc"}, {"id": 7}]}});
        let projects: ProjectsContent = decode_section("projects", &body).unwrap().unwrap();
        assert_eq!(projects.projects[0].id.as_ref().unwrap().to_string(), "abc");
        assert_eq!(projects.projects[1].id.as_ref().unwrap().to_string(), "7");
    }

    #[test]
    fn footer_round_trips_href_links() {
        let data = json!({"socialLinks": [{"platform": "GitHub", "icon": "Github", "href": "https://github.com/x"}]});
        let footer: FooterContent = decode_section("footer", &json!({"data": data})).unwrap().unwrap();
        assert_eq!(footer.social_links[0].href.as_deref(), Some("https://github.com/x"));
        assert_eq!(footer.social_links[0].icon, Some(Icon::Github));

        let back = serde_json::to_value(&footer).unwrap();
        assert_eq!(back["socialLinks"][0]["href"], "https://github.com/x");
    }
}

use crate::domain::{
    AboutContent, BlogEntry, BlogsContent, ContactContent, ExperienceContent, FooterContent,
    HeroContent, Icon, Link, ProjectsContent, ServicesContent, SkillsContent, TestimonialsContent,
};

use super::{display_date, glyph, icon_or, Carousel};

const QUICK_LINKS_COLUMN: usize = 4;
const BAR_WIDTH: usize = 20;

/// Line buffer shared by the section templates.
#[derive(Default)]
struct Block {
    lines: Vec<String>,
}

impl Block {
    fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    fn push_opt(&mut self, prefix: &str, value: Option<&str>) {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.push(format!("{}{}", prefix, value));
        }
    }

    fn heading(&mut self, title: Option<&str>, subtitle: Option<&str>) {
        let title = title.unwrap_or_default();
        self.push(format!("== {} ==", title));
        self.push_opt("", subtitle);
        self.blank();
    }

    fn blank(&mut self) {
        self.lines.push(String::new());
    }

    fn finish(self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}

fn link_text(label: &str, href: Option<&str>) -> String {
    format!("{} ({})", label, href.filter(|h| !h.is_empty()).unwrap_or("#"))
}

fn links(items: &[Link]) -> Vec<String> {
    items
        .iter()
        .map(|l| link_text(l.name.as_deref().unwrap_or_default(), l.href.as_deref()))
        .collect()
}

pub fn hero(content: &HeroContent) -> String {
    let mut block = Block::default();

    block.push_opt("", content.greeting.as_deref());
    block.push(format!("# {}", content.name.as_deref().unwrap_or_default()));
    block.push_opt("", content.role.as_deref());
    block.blank();
    block.push_opt("", content.bio.as_deref());

    for button in &content.cta_buttons {
        // Only Mail is offered here; everything else shows Download.
        let icon = match icon_or(button.icon.as_ref(), Icon::Download) {
            Icon::Mail => Icon::Mail,
            _ => Icon::Download,
        };
        let marker = if button.is_primary() { "*" } else { "-" };
        block.push(format!(
            "{} {} {}",
            marker,
            glyph(&icon),
            link_text(button.label.as_deref().unwrap_or_default(), button.link.as_deref())
        ));
    }

    if let Some(image) = &content.hero_image {
        let alt = image.alt.as_deref().or(content.name.as_deref()).unwrap_or_default();
        block.push_opt(&format!("[image: {}] ", alt), image.src.as_deref());
        block.push_opt("", image.experience_label.as_deref());
    }

    block.finish()
}

pub fn about(content: &AboutContent) -> String {
    let mut block = Block::default();
    block.heading(content.title.as_deref(), None);

    block.push_opt("Hello! I'm ", content.name.as_deref());
    for paragraph in &content.bio {
        block.push(paragraph.as_str());
    }
    if !content.highlights.is_empty() {
        block.blank();
        for highlight in &content.highlights {
            block.push(format!("• {}", highlight));
        }
    }

    if !content.stats.is_empty() {
        block.blank();
    }
    for stat in &content.stats {
        // An uploaded image wins; an unmapped icon is shown as its own text (emoji).
        let icon = match (&stat.icon_image, &stat.icon) {
            (Some(src), _) if !src.is_empty() => format!("[{}]", src),
            (_, Some(icon)) if !icon.is_mapped() => icon.as_str().to_string(),
            (_, icon) => glyph(&icon_or(icon.as_ref(), Icon::Briefcase)).to_string(),
        };
        let value = stat.value.as_ref().map(|v| v.to_string()).unwrap_or_default();
        block.push(format!(
            "{} {} {}",
            icon,
            value,
            stat.label.as_deref().unwrap_or_default()
        ));
    }

    block.finish()
}

fn bar(percent: f64) -> String {
    let filled = ((percent.clamp(0.0, 100.0) * BAR_WIDTH as f64 / 100.0) as usize).min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

pub fn skills(content: &SkillsContent) -> String {
    let mut block = Block::default();
    block.heading(content.title.as_deref(), content.subtitle.as_deref());

    for category in &content.skill_categories {
        let icon = icon_or(category.icon.as_ref(), Icon::Code);
        block.push(format!(
            "{} {}: {}",
            glyph(&icon),
            category.title.as_deref().unwrap_or_default(),
            category.skills.join(", ")
        ));
    }

    if !content.proficiency_skills.is_empty() {
        block.blank();
    }
    for skill in &content.proficiency_skills {
        block.push(format!(
            "{:<20} {} {}%",
            skill.name.as_deref().unwrap_or_default(),
            bar(skill.percent()),
            skill.percent()
        ));
    }

    block.finish()
}

pub fn projects(content: &ProjectsContent) -> String {
    let mut block = Block::default();
    block.heading(content.title.as_deref(), content.subtitle.as_deref());

    for project in &content.projects {
        block.push(format!("## {}", project.title.as_deref().unwrap_or_default()));
        block.push_opt("", project.description.as_deref());
        if !project.tech.is_empty() {
            block.push(format!("Tech: {}", project.tech.join(" · ")));
        }
        block.push_opt("Demo: ", project.demo_link.as_deref());
        block.push_opt("Code: ", project.code_link.as_deref());
        block.blank();
    }

    block.finish()
}

pub fn experience(content: &ExperienceContent) -> String {
    let mut block = Block::default();
    block.heading(content.title.as_deref(), content.subtitle.as_deref());

    for entry in &content.experiences {
        block.push(format!(
            "{} {} @ {}",
            entry.year.as_ref().map(ToString::to_string).unwrap_or_default(),
            entry.role.as_deref().unwrap_or_default(),
            entry.company.as_deref().unwrap_or_default()
        ));
        for duty in &entry.responsibilities {
            block.push(format!("  - {}", duty));
        }
    }

    block.finish()
}

pub fn services(content: &ServicesContent) -> String {
    let mut block = Block::default();
    block.heading(content.title.as_deref(), content.subtitle.as_deref());

    for service in &content.services {
        let icon = icon_or(service.icon.as_ref(), Icon::Code);
        block.push(format!(
            "{} {}",
            glyph(&icon),
            service.title.as_deref().unwrap_or_default()
        ));
        block.push_opt("  ", service.description.as_deref());
        block.push_opt("  Learn more: ", service.link.as_deref());
    }

    block.finish()
}

/// Shows the carousel's current testimonial with a position indicator.
pub fn testimonials(content: &TestimonialsContent, carousel: &Carousel) -> String {
    let mut block = Block::default();
    block.heading(content.title.as_deref(), content.subtitle.as_deref());

    let count = content.testimonials.len();
    if let Some(current) = content.testimonials.get(carousel.index(count)) {
        block.push(format!("“{}”", current.text.as_deref().unwrap_or_default()));
        block.push(format!(
            "  — {}, {}",
            current.name.as_deref().unwrap_or_default(),
            current.role.as_deref().unwrap_or_default()
        ));
        block.push(format!("< {}/{} >", carousel.index(count) + 1, count));
    }

    block.finish()
}

fn blog_meta(entry: &BlogEntry) -> String {
    let date = entry.date.as_deref().map(display_date).unwrap_or_default();
    let read_time = entry.read_time.as_deref().unwrap_or_default();
    match (date.is_empty(), read_time.is_empty()) {
        (false, false) => format!("{} · {}", date, read_time),
        (false, true) => date,
        _ => read_time.to_string(),
    }
}

pub fn blogs(content: &BlogsContent) -> String {
    let mut block = Block::default();
    block.heading(content.title.as_deref(), content.subtitle.as_deref());

    if let Some(featured) = &content.featured_blog {
        block.push(format!(
            "[Featured Post] {}",
            featured.title.as_deref().unwrap_or_default()
        ));
        block.push(blog_meta(featured));
        block.push_opt("", featured.excerpt.as_deref());
        block.push(link_text("Read More", featured.link.as_deref()));
        block.blank();
    }

    for entry in &content.blogs {
        let category = entry
            .category
            .as_deref()
            .filter(|c| !c.is_empty())
            .map(|c| format!("[{}] ", c))
            .unwrap_or_default();
        block.push(format!(
            "{}{}",
            category,
            entry.title.as_deref().unwrap_or_default()
        ));
        block.push(format!("  {}", blog_meta(entry)));
        block.push_opt("  ", entry.excerpt.as_deref());
        block.push(format!("  {}", link_text("Read Article", entry.link.as_deref())));
    }

    block.finish()
}

pub fn contact(content: &ContactContent) -> String {
    let mut block = Block::default();
    block.heading(content.title.as_deref(), content.subtitle.as_deref());

    for info in &content.contact_info {
        let icon = icon_or(info.icon.as_ref(), Icon::Mail);
        block.push(format!(
            "{} {}: {}",
            glyph(&icon),
            info.title.as_deref().unwrap_or_default(),
            link_text(info.value.as_deref().unwrap_or_default(), info.link.as_deref())
        ));
    }

    if let Some(form) = &content.form {
        block.blank();
        block.push("Send Me a Message");
        for field in &form.fields {
            let kind = if field.is_textarea() {
                "textarea"
            } else {
                field.kind.as_deref().unwrap_or("text")
            };
            block.push(format!(
                "  {}{} <{}> {}",
                field.label.as_deref().unwrap_or(&field.name),
                if field.required { "*" } else { "" },
                kind,
                field.placeholder.as_deref().unwrap_or_default()
            ));
        }
        let submit = form
            .submit_button
            .as_ref()
            .and_then(|b| b.text.as_deref())
            .unwrap_or("Send Message");
        block.push(format!("  [{}]", submit));
    }

    if let Some(info) = &content.additional_info {
        block.blank();
        block.push("Let's Connect");
        block.push_opt("", info.intro_text.as_deref());
        block.push_opt(&format!("{} ", glyph(&Icon::Mail)), info.response_time.as_deref());
        block.push_opt(&format!("{} ", glyph(&Icon::Phone)), info.availability.as_deref());
    }

    if !content.social_links.is_empty() {
        let follow: Vec<String> = content
            .social_links
            .iter()
            .map(|social| {
                let icon = icon_or(social.icon.as_ref(), Icon::Github);
                link_text(glyph(&icon), social.link.as_deref())
            })
            .collect();
        block.push(format!("Follow Me: {}", follow.join("  ")));
    }

    if let Some(map) = &content.map {
        block.push_opt(&format!("{} ", glyph(&Icon::MapPin)), map.location.as_deref());
    }

    block.finish()
}

pub fn footer(content: &FooterContent) -> String {
    let mut block = Block::default();

    if let Some(brand) = &content.brand {
        block.push(brand.name.as_deref().unwrap_or_default());
        block.push_opt("", brand.description.as_deref());
    }

    if !content.social_links.is_empty() {
        let socials: Vec<String> = content
            .social_links
            .iter()
            .map(|social| {
                let icon = icon_or(social.icon.as_ref(), Icon::Mail);
                link_text(glyph(&icon), social.href.as_deref())
            })
            .collect();
        block.push(socials.join("  "));
    }

    let split = content.quick_links.len().min(QUICK_LINKS_COLUMN);
    let (quick, more) = content.quick_links.split_at(split);
    if !quick.is_empty() {
        block.blank();
        block.push(format!("Quick Links: {}", links(quick).join(" | ")));
    }
    if !more.is_empty() {
        block.push(format!("More: {}", links(more).join(" | ")));
    }

    if let Some(bar) = &content.bottom_bar {
        block.blank();
        let heart = if bar.heart_icon {
            format!(" {}", glyph(&Icon::Heart))
        } else {
            String::new()
        };
        block.push(format!("{}{}", bar.text.as_deref().unwrap_or_default(), heart));
        if !bar.links.is_empty() {
            block.push(links(&bar.links).join(" | "));
        }
    }

    block.finish()
}

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::{ContactForm, Section};

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "Render a CMS-backed portfolio and manage its content from the terminal")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch every section and render the whole page
    Page {
        /// Testimonial to show first (wraps around)
        #[arg(long, default_value_t = 0)]
        testimonial: usize,
    },

    /// Render a single section
    Section {
        /// Section name (hero, about, skills, projects, experience, services, testimonials, blogs, contact, footer)
        name: String,

        /// Print the raw JSON response instead of rendering it
        #[arg(long)]
        raw: bool,
    },

    /// Print a section's raw JSON response
    Get {
        /// Section name
        name: String,
    },

    /// Replace a section's content with the JSON in a file
    Update {
        /// Section name
        name: String,

        /// JSON payload file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Add one item to projects or blogs
    Add {
        /// projects or blogs
        name: String,

        /// JSON item file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Delete one item from projects or blogs
    Delete {
        /// projects or blogs
        name: String,

        /// Item identifier
        id: String,
    },

    /// Send the contact form
    Contact {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long, default_value = "")]
        subject: String,

        #[arg(long)]
        message: String,
    },

    /// Manage uploaded files
    Upload {
        #[command(subcommand)]
        action: UploadAction,
    },

    /// Check that the content API is alive
    Health,

    /// Show where a site path is served from
    Route {
        /// Site path, e.g. /cms/hero
        path: String,
    },

    /// Show the effective configuration
    Config,
}

#[derive(Subcommand)]
pub enum UploadAction {
    /// Upload one file
    Single {
        file: PathBuf,

        /// Destination folder
        #[arg(short, long, default_value = "")]
        folder: String,
    },

    /// Upload several files in one request
    Multiple {
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Destination folder
        #[arg(short, long, default_value = "")]
        folder: String,
    },

    /// Delete an uploaded file
    Delete { path: String },

    /// Look up the public URL of an uploaded file
    Url { path: String },
}

pub fn parse_section(name: &str) -> anyhow::Result<Section> {
    name.parse::<Section>().map_err(anyhow::Error::msg)
}

/// Only projects and blogs accept item add/delete.
pub fn parse_list_section(name: &str) -> anyhow::Result<Section> {
    let section = parse_section(name)?;
    if !section.is_list() {
        anyhow::bail!("{} does not support adding or deleting items", section);
    }
    Ok(section)
}

pub fn contact_form(name: String, email: String, subject: String, message: String) -> ContactForm {
    ContactForm {
        name,
        email,
        subject,
        message,
    }
}

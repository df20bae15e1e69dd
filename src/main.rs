use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;
use serde_json::Value;
use std::{path::Path, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use portfolio_rs::{
    application::{mount, settle, ContentClient},
    domain::{route, Route, Section, SubmitNotice},
    infrastructure::{
        adapters::http::HttpGateway,
        cli::{contact_form, parse_list_section, parse_section, Cli, Commands, UploadAction},
        config::{ClientConfig, API_URL_VAR, CMS_URL_VAR, TIMEOUT_VAR},
        views::{self, render_page, render_state, Carousel},
    },
    ports::UploadFile,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "portfolio_rs=debug,info"
    } else {
        "portfolio_rs=info,warn,error"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ClientConfig::from_env();
    tracing::debug!("Using API at {}", config.base_url);

    let gateway = HttpGateway::new(config.clone())?;
    let client = ContentClient::new(Arc::new(gateway));

    if let Err(e) = run(cli.command, &client, &config).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run(command: Commands, client: &ContentClient, config: &ClientConfig) -> Result<()> {
    match command {
        Commands::Page { testimonial } => {
            let page = mount(client).await;
            tracing::info!("{} of {} sections have content", page.ready_count(), Section::ALL.len());
            print!("{}", render_page(&page, &Carousel::at(testimonial)));
        }

        Commands::Section { name, raw } => {
            let section = parse_section(&name)?;
            if raw {
                print_json(&client.raw(section).get().await?)?;
            } else {
                print!("{}", render_section(client, section).await);
            }
        }

        Commands::Get { name } => {
            let section = parse_section(&name)?;
            print_json(&client.raw(section).get().await?)?;
        }

        Commands::Update { name, file } => {
            let section = parse_section(&name)?;
            let payload: Value = read_json(&file).await?;
            print_json(&client.raw(section).update(&payload).await?)?;
        }

        Commands::Add { name, file } => {
            let section = parse_list_section(&name)?;
            let item: Value = read_json(&file).await?;
            let created = match section {
                Section::Projects => client.projects().add(&item).await?,
                _ => client.blogs().add(&item).await?,
            };
            print_json(&created)?;
        }

        Commands::Delete { name, id } => {
            let deleted = match parse_list_section(&name)? {
                Section::Projects => client.projects().delete(&id).await?,
                _ => client.blogs().delete(&id).await?,
            };
            print_json(&deleted)?;
        }

        Commands::Contact {
            name,
            email,
            subject,
            message,
        } => {
            let mut form = contact_form(name, email, subject, message);
            let contact = client.contact();

            let missing = contact.missing_fields(&form).await;
            if !missing.is_empty() {
                anyhow::bail!("Missing required fields: {}", missing.join(", "));
            }

            let notice = contact.submit_form(&mut form).await;
            println!("{}", notice.message());
            if notice == SubmitNotice::Failed {
                std::process::exit(1);
            }
        }

        Commands::Upload { action } => {
            let uploads = client.uploads();
            let response = match action {
                UploadAction::Single { file, folder } => {
                    uploads.single(UploadFile::from_path(&file).await?, &folder).await?
                }
                UploadAction::Multiple { files, folder } => {
                    let mut payload = Vec::with_capacity(files.len());
                    for file in &files {
                        payload.push(UploadFile::from_path(file).await?);
                    }
                    uploads.multiple(payload, &folder).await?
                }
                UploadAction::Delete { path } => uploads.delete(&path).await?,
                UploadAction::Url { path } => uploads.url(&path).await?,
            };
            print_json(&response)?;
        }

        Commands::Health => {
            let status = client.health().await?;
            println!("API at {}: ✓ Healthy", client.base_url());
            print_json(&status)?;
        }

        Commands::Route { path } => match route(&path, &config.cms_url) {
            Route::Portfolio => println!("{} → portfolio", path),
            Route::RedirectToCms(target) => println!("{} → redirect to CMS at {}", path, target),
        },

        Commands::Config => {
            println!("Configuration:");
            println!("  {}: {}", API_URL_VAR, config.base_url);
            println!("  {}: {}", CMS_URL_VAR, config.cms_url);
            println!(
                "  {}: {}",
                TIMEOUT_VAR,
                config
                    .timeout
                    .map(|t| format!("{}s", t.as_secs()))
                    .unwrap_or_else(|| "none".to_string())
            );
        }
    }

    Ok(())
}

async fn render_section(client: &ContentClient, section: Section) -> String {
    match section {
        Section::Hero => render_state(&settle(section, client.hero().load().await), views::hero),
        Section::About => render_state(&settle(section, client.about().load().await), views::about),
        Section::Skills => render_state(&settle(section, client.skills().load().await), views::skills),
        Section::Projects => {
            render_state(&settle(section, client.projects().load().await), views::projects)
        }
        Section::Experience => {
            render_state(&settle(section, client.experience().load().await), views::experience)
        }
        Section::Services => {
            render_state(&settle(section, client.services().load().await), views::services)
        }
        Section::Testimonials => {
            let state = settle(section, client.testimonials().load().await)
                .filter(|t| !t.testimonials.is_empty());
            render_state(&state, |t| views::testimonials(t, &Carousel::default()))
        }
        Section::Blogs => render_state(&settle(section, client.blogs().load().await), views::blogs),
        Section::Contact => {
            render_state(&settle(section, client.contact().load().await), views::contact)
        }
        Section::Footer => render_state(&settle(section, client.footer().load().await), views::footer),
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&text)?)
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

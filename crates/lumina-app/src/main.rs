//! Lumina application binary - composition root.
//!
//! 1. Parse CLI args and load configuration from TOML (+ env overrides)
//! 2. Initialize tracing on stderr
//! 3. Pick the responder composition (external model or local only)
//! 4. Run the requested front end: interactive chat, one-shot ask, or
//!    a content dump

mod cli;
mod terminal;

use clap::Parser;
use tokio::io::BufReader;

use lumina_chat::{build_responder, ChatShell, ContextSnapshot, Responder, ResponderRequest};
use lumina_core::{Content, Locale, LuminaConfig, ProjectItem, ProjectLabels, SiteState};

use cli::{CliArgs, Command};
use terminal::Console;

fn init_tracing(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config is read before tracing exists; problems are reported after init.
    let config_file = args.resolve_config_path();
    let loaded = config_file
        .exists()
        .then(|| LuminaConfig::load(&config_file));
    let file_level = match &loaded {
        Some(Ok(config)) => config.general.log_level.clone(),
        _ => "info".to_string(),
    };
    init_tracing(&args.resolve_log_level(&file_level));

    tracing::info!("Starting Lumina v{}", env!("CARGO_PKG_VERSION"));

    let mut config = match loaded {
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            tracing::warn!(path = %config_file.display(), error = %e, "Invalid config, using defaults");
            LuminaConfig::default()
        }
        None => {
            tracing::debug!(path = %config_file.display(), "No config file, using defaults");
            LuminaConfig::default()
        }
    };
    config.apply_env_overrides();

    let mut site = SiteState::new(args.resolve_language(config.general.default_language));

    match args.command() {
        Command::Content {
            json,
            project: Some(id),
        } => {
            let project = site.open_project(id)?;
            print_project(project, &site.content().projects.labels, json)?;
        }
        Command::Content { json, project: None } => {
            print_content(site.content(), json)?;
        }
        Command::Ask { question } => {
            let responder = build_responder(&config);
            let reply = ask(responder.as_ref(), &question.join(" "), &site.locale()).await;
            println!("{}", reply);
        }
        Command::Chat => {
            let responder = build_responder(&config);
            let shell = ChatShell::new(responder, config.chat.submit_policy);
            let stdin = BufReader::new(tokio::io::stdin());
            terminal::run_chat(shell, &mut site, stdin, Console::stdout()).await?;
        }
    }

    Ok(())
}

/// One-shot question outside any session.
async fn ask(responder: &dyn Responder, question: &str, locale: &Locale) -> String {
    let context = match ContextSnapshot::from_content(locale.content) {
        Ok(context) => context,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to build context snapshot");
            ContextSnapshot::empty()
        }
    };
    let request = ResponderRequest::new(question, locale.language, context);
    match responder.respond(&request).await {
        Ok(reply) => reply,
        Err(e) => {
            tracing::warn!(error = %e, "Responder failed");
            locale.content.chat.connection_error.clone()
        }
    }
}

// ============================================================================
// Content dump
// ============================================================================

fn print_content(content: &Content, json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(content)?);
        return Ok(());
    }

    println!("{} | {}", content.hero.greeting, content.hero.role);
    println!("{}\n", content.hero.description);

    println!("# {}", content.expertise.title);
    for item in &content.expertise.items {
        println!("- {}: {}", item.title, item.tech_list.join(", "));
    }

    println!("\n# {}", content.process.title);
    for item in &content.process.items {
        println!("{}. {}", item.step, item.title);
    }

    println!("\n# {}", content.journey.title);
    for milestone in &content.journey.milestones {
        println!("{} {}", milestone.year, milestone.title);
    }

    println!("\n# {}", content.projects.title);
    for project in &content.projects.items {
        println!("[{}] {} - {}", project.id, project.title, project.short_desc);
        println!("    {}: {}", content.projects.labels.stack, project.stack.join(", "));
    }

    println!("\n{}", content.footer.rights);
    Ok(())
}

fn print_project(
    project: &ProjectItem,
    labels: &ProjectLabels,
    json: bool,
) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(project)?);
        return Ok(());
    }

    println!("# {}", project.title);
    println!("{}\n", project.short_desc);
    println!("## {}\n{}\n", labels.problem, project.problem);
    println!("## {}\n{}\n", labels.architecture, project.architecture);
    println!("## {}", labels.highlights);
    for highlight in &project.highlights {
        println!("- {}", highlight);
    }
    println!("\n## {}\n{}\n", labels.outcome, project.outcome);
    println!("## {}\n{}", labels.stack, project.stack.join(", "));
    Ok(())
}

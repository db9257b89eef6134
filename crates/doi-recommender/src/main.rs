//! DOI Recommender - Entry Point
//!
//! Loads the recommendation page against the hosted service and submits
//! author names typed on stdin or given as arguments.

use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use doi_recommender::formatters::{
    format_authors_text, format_dois_text, format_list_html, format_list_text, format_page_html,
};
use doi_recommender::{Config, Page, PageError, RecommenderClient};

#[derive(Parser, Debug)]
#[command(name = "doi-recommender")]
#[command(about = "Article recommendations for an author, as DOI links")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Output format for rendered recommendations
    #[arg(long, value_enum, default_value = "text", global = true)]
    format: OutputFormat,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", env = "RUST_LOG", global = true)]
    log_level: String,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(Subcommand, Debug, Clone, Default)]
enum Command {
    /// Read author names from stdin, one per line (default)
    #[default]
    Interactive,
    /// Recommend articles for a single author
    Recommend {
        /// Exact author name
        author: String,
    },
    /// List every author the recommender knows
    Authors,
    /// List every article in the recommender's dataset
    Dois,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    /// Numbered lines with links
    #[default]
    Text,
    /// The list container as HTML
    Html,
    /// The whole page as HTML
    Page,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)).init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

fn render(page: &Page, format: OutputFormat) -> anyhow::Result<String> {
    let document = page.document();
    let output = match format {
        OutputFormat::Text => format_list_text(&document.recommendations),
        OutputFormat::Html => format_list_html(document)?,
        OutputFormat::Page => format_page_html(document)?,
    };
    Ok(output)
}

async fn load_page(client: RecommenderClient) -> anyhow::Result<Page> {
    let page = Page::load(Arc::new(client)).await;

    if let Some(err) = page.load_error() {
        anyhow::bail!("Author directory unavailable: {err}");
    }

    Ok(page)
}

/// Submit one name and print whatever the page now shows.
async fn submit_and_print(
    page: &mut Page,
    author: String,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let mut stdout = tokio::io::stdout();

    match page.submit_name(author).await {
        Some(Ok(_)) => {
            stdout.write_all(render(page, format)?.as_bytes()).await?;
        }
        Some(Err(err @ PageError::Validation { .. })) => {
            let mut stderr = tokio::io::stderr();
            stderr.write_all(err.to_user_message().as_bytes()).await?;
            stderr.write_all(b"\n").await?;
        }
        // Already logged by the handler; the list is unchanged.
        Some(Err(PageError::Client(_))) | None => {}
    }

    stdout.flush().await?;
    Ok(())
}

async fn run_interactive(page: &mut Page, format: OutputFormat) -> anyhow::Result<()> {
    let mut reader = BufReader::new(tokio::io::stdin());
    let mut line = String::new();

    tracing::info!("Ready, reading author names from stdin");

    loop {
        line.clear();
        let bytes_read = reader.read_line(&mut line).await?;

        if bytes_read == 0 {
            tracing::info!("Stdin closed, shutting down");
            break;
        }

        let author = line.trim_end_matches(['\r', '\n']).to_string();
        submit_and_print(page, author, format).await?;
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting DOI recommender client");

    let client = RecommenderClient::new(Config::new()).context("Failed to build HTTP client")?;

    match cli.command.unwrap_or_default() {
        Command::Interactive => {
            let mut page = load_page(client).await?;
            run_interactive(&mut page, cli.format).await?;
        }
        Command::Recommend { author } => {
            let mut page = load_page(client).await?;
            submit_and_print(&mut page, author, cli.format).await?;
        }
        Command::Authors => {
            let authors = client.get_authors().await?;
            print!("{}", format_authors_text(&authors));
        }
        Command::Dois => {
            let dois = client.get_dois().await?;
            print!("{}", format_dois_text(&dois));
        }
    }

    Ok(())
}

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use problem_checklist::{
    cpbook::{CpbookScraperBuilder, CPBOOK_URL, DEFAULT_SEPARATOR},
    cses::{CsesScraperBuilder, Pairing, CSES_ORIGIN, CSES_PROBLEMSET_URL},
    fetch,
    output::WriteMode,
};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "problem-checklist", version, about = "Markdown checklists for problem sets")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print a checklist of the CSES problem set to stdout
    Cses {
        #[arg(long, default_value = CSES_PROBLEMSET_URL)]
        url: String,
        /// Prepended to every task link
        #[arg(long, default_value = CSES_ORIGIN)]
        origin: String,
        /// strict: fail when headings and task lists don't line up;
        /// shortest: drop the unpaired ones
        #[arg(long, default_value_t = Pairing::Strict)]
        pairing: Pairing,
    },
    /// Write per-chapter checklists of the CP4 methods-to-solve tables
    Cpbook {
        #[arg(long, default_value_t = 1)]
        first: u32,
        #[arg(long, default_value_t = 9)]
        last: u32,
        #[arg(long, default_value = CPBOOK_URL)]
        base_url: String,
        /// Online judge filter
        #[arg(long, default_value = "kattis")]
        oj: String,
        /// Problem quality filter
        #[arg(long, default_value = "all")]
        quality: String,
        /// Placed between section number and title in category headings
        #[arg(long, default_value = DEFAULT_SEPARATOR)]
        separator: String,
        #[arg(short, long, default_value = "output.txt")]
        output: PathBuf,
        /// append keeps what is already in the file, so re-running duplicates
        /// it; truncate starts the file over
        #[arg(long, default_value_t = WriteMode::Append)]
        mode: WriteMode,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let cli = Cli::parse();
    let client = fetch::client()?;

    match cli.command {
        Command::Cses {
            url,
            origin,
            pairing,
        } => {
            let scraper = CsesScraperBuilder::default()
                .url(url)
                .origin(origin)
                .pairing(pairing)
                .build()?;

            let checklist = scraper.scrape(&client).await?;
            println!("{}", checklist.generate()?);
        }
        Command::Cpbook {
            first,
            last,
            base_url,
            oj,
            quality,
            separator,
            output,
            mode,
        } => {
            if first > last {
                bail!("--first ({}) must not be greater than --last ({})", first, last);
            }

            let scraper = CpbookScraperBuilder::default()
                .chapters(first..=last)
                .base_url(base_url)
                .oj(oj)
                .quality(quality)
                .separator(separator)
                .build()?;

            let mut file = mode.open(&output)?;
            let written = scraper.scrape_into(&client, &mut file).await?;
            info!(path = %output.display(), written, %mode, "checklists written");
        }
    }

    Ok(())
}

//! Simple CLI that reads a patent page from stdin and prints its record as JSON.
//!
//! ```text
//! curl -sL https://patents.google.com/patent/US8834455B2/en \
//!     | extract_patent --id US8834455B2 --url https://patents.google.com/patent/US8834455B2/en --all
//! ```

use std::io::{self, Read};
use std::process::ExitCode;

use clap::Parser;
use rs_patent_scraper::{extract_bytes, url_utils, Options};

#[derive(Parser)]
#[allow(clippy::struct_excessive_bools)]
#[command(name = "extract_patent", about = "Extract a structured record from a patent page on stdin")]
struct Cli {
    /// Identifier originally requested (defaults to the one in --url)
    #[arg(long)]
    id: Option<String>,

    /// URL the page was served from
    #[arg(long, default_value = "")]
    url: String,

    /// Include the abstract
    #[arg(long = "abstract")]
    include_abstract: bool,

    /// Include the description
    #[arg(long = "description")]
    include_description: bool,

    /// Include the claims
    #[arg(long = "claims")]
    include_claims: bool,

    /// Include abstract, description and claims
    #[arg(long)]
    all: bool,

    /// Print compact JSON instead of pretty JSON
    #[arg(long)]
    compact: bool,
}

impl Cli {
    fn options(&self) -> Options {
        if self.all {
            return Options::full_text();
        }
        Options {
            include_abstract: self.include_abstract,
            include_description: self.include_description,
            include_claims: self.include_claims,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let mut html = Vec::new();
    if let Err(err) = io::stdin().read_to_end(&mut html) {
        tracing::error!(error = %err, "failed to read from stdin");
        return ExitCode::FAILURE;
    }

    let identifier = cli
        .id
        .clone()
        .or_else(|| url_utils::identifier_from_url(&cli.url))
        .unwrap_or_default();

    let record = match extract_bytes(&html, &identifier, &cli.url, &cli.options()) {
        Ok(record) => record,
        Err(err) => {
            tracing::error!(error = %err, "extraction failed");
            return ExitCode::FAILURE;
        }
    };

    let rendered = if cli.compact {
        serde_json::to_string(&record).map_err(rs_patent_scraper::Error::from)
    } else {
        record.to_json_pretty()
    };

    match rendered {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to render record");
            ExitCode::FAILURE
        }
    }
}

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vsm_dictionary_neo::{
    dictionary::{Dictionary, QueryOptions, ZSelection},
    DictionaryNeo, DictionaryResult, NeoConfig,
};

#[derive(Parser)]
#[command(name = "neo-dict")]
#[command(about = "Query the Noctua Entity Ontology through the VSM dictionary interface", long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, env = "NEO_CONFIG_PATH")]
    config: Option<PathBuf>,

    /// Override the GOLR search URL
    #[arg(short, long)]
    base_url: Option<String>,

    /// Plain descriptions instead of the optimized curator format
    #[arg(long)]
    no_optimap: bool,

    /// Log request URLs
    #[arg(short, long)]
    log: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the dictionary descriptor
    Info {
        /// Only answer if one of these dictionary IDs is NEO
        #[arg(long = "id")]
        ids: Vec<String>,
    },

    /// Look up entries by CURIE
    Entries {
        /// Entity CURIEs, e.g. UniProtKB:P35222
        #[arg(long = "id")]
        ids: Vec<String>,

        #[command(flatten)]
        query: QueryArgs,
    },

    /// Search entries matching a string
    Matches {
        #[arg(value_name = "TEXT")]
        text: String,

        #[command(flatten)]
        query: QueryArgs,
    },
}

#[derive(Args)]
struct QueryArgs {
    /// Restrict to these dictionary IDs
    #[arg(long = "dict-id")]
    dict_ids: Vec<String>,

    #[arg(short, long)]
    page: Option<i64>,

    #[arg(short = 's', long)]
    per_page: Option<i64>,

    /// Keep only these z-properties (type, species)
    #[arg(short, long)]
    z: Vec<String>,

    /// Drop all z-properties
    #[arg(long, conflicts_with = "z")]
    no_z: bool,
}

impl QueryArgs {
    fn options(&self) -> QueryOptions {
        let mut options = QueryOptions::new();
        if !self.dict_ids.is_empty() {
            options = options.with_dict_ids(self.dict_ids.clone());
        }
        options.page = self.page;
        options.per_page = self.per_page;
        options.z = if self.no_z {
            ZSelection::Nothing
        } else if self.z.is_empty() {
            ZSelection::All
        } else {
            ZSelection::Keys(self.z.clone())
        };
        options
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vsm_dictionary_neo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = NeoConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if cli.no_optimap {
        config.optimap = false;
    }
    if cli.log {
        config.log = true;
    }

    let dict = DictionaryNeo::new(config)?;

    match cli.command {
        Commands::Info { ids } => {
            let mut options = QueryOptions::new();
            if !ids.is_empty() {
                options = options.with_ids(ids);
            }
            print_result(dict.get_dict_infos(&options).await)?;
        }

        Commands::Entries { ids, query } => {
            let mut options = query.options();
            if !ids.is_empty() {
                options = options.with_ids(ids);
            }
            print_result(dict.get_entries(&options).await)?;
        }

        Commands::Matches { text, query } => {
            let options = query.options();
            print_result(dict.get_entry_matches_for_string(&text, &options).await)?;
        }
    }

    Ok(())
}

fn print_result<T: Serialize>(result: DictionaryResult<T>) -> anyhow::Result<()> {
    match result {
        Ok(body) => {
            println!("{}", serde_json::to_string_pretty(&body)?);
            Ok(())
        }
        Err(err) => {
            tracing::error!(error_code = err.error_code(), "Dictionary request failed");
            eprintln!("{}", serde_json::to_string_pretty(&err.to_json())?);
            std::process::exit(1);
        }
    }
}

//! website-filter: browser shell core
//!
//! Command-line front end over the address bar resolver, the filter list
//! and the navigation guard.

mod cli;

use std::process;

use anyhow::{bail, Context, Result};
use clap::Parser;

use cli::{Cli, Commands, FilterAction};
use website_filter::config::{self, ConfigService};
use website_filter::domain::logger;
use website_filter::service::AddOutcome;
use website_filter::{BrowserService, Decision, FileStore};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = ConfigService::load(cli.config.as_deref())?;

    // Initialize logging if debug mode
    if cli.debug || config.debug {
        logger::init(&config)?;
    }

    let open_service = || -> Result<BrowserService<FileStore>> {
        let store = FileStore::open(&config.store_path).with_context(|| {
            format!("Failed to open state file: {}", config.store_path.display())
        })?;
        Ok(BrowserService::new(config.clone(), store))
    };

    match cli.command {
        Commands::Resolve { input } => {
            let service = open_service()?;
            let url = service.resolve(&input.join(" "))?;
            println!("{}", url);
        }
        Commands::Visit { input, json } => {
            let service = open_service()?;
            let (url, decision) = service.visit(&input.join(" "))?;
            let exit_code = decision.exit_code();

            if json {
                let output = decision.into_output(url.as_str());
                println!("{}", serde_json::to_string(&output)?);
            } else {
                match decision {
                    Decision::Allow => println!("{}", url),
                    Decision::Block { message } => println!("{}: {}", message, url),
                }
            }

            if exit_code != 0 {
                process::exit(exit_code);
            }
        }
        Commands::Filters { action } => {
            let service = open_service()?;
            match action {
                FilterAction::List => {
                    let filters = service.filters()?;
                    if !cli.quiet {
                        println!("{}", filters.title());
                    }
                    for (row, phrase) in filters.iter().enumerate() {
                        println!("{}: {}", row, phrase);
                    }
                }
                FilterAction::Add { phrase } => {
                    let phrase = phrase.join(" ");
                    match service.add_filter(&phrase)? {
                        AddOutcome::Added => {
                            if !cli.quiet {
                                eprintln!("Filter added: {}", phrase.trim());
                            }
                        }
                        AddOutcome::TooShort { min_len } => {
                            bail!("Filter must be at least {} characters long", min_len)
                        }
                    }
                }
                FilterAction::Remove { row } => {
                    let removed = service.remove_filter(row)?;
                    if !cli.quiet {
                        eprintln!("Filter removed: {}", removed);
                    }
                }
            }
        }
        Commands::Resume => {
            let service = open_service()?;
            match service.resume_offer()? {
                Some(url) => println!("{}", url),
                None => {
                    if !cli.quiet {
                        eprintln!("No page to resume.");
                    }
                }
            }
        }
        Commands::Init { path } => {
            let config_path = if let Some(p) = path {
                ConfigService::generate_at(&p)?;
                p
            } else {
                ConfigService::generate_default()?;
                ConfigService::default_path()
            };
            if !cli.quiet {
                eprintln!("Configuration file created at: {}", config_path.display());
            }
        }
        Commands::Check => {
            config::validate(&config)?;
            if !cli.quiet {
                eprintln!("Configuration is valid.");
            }
        }
        Commands::Version => {
            println!("website-filter {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

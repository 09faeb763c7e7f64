//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat, QueryArgs};
use crate::engine::{LoadOutcome, PaginationEngine};
use crate::error::{Error, Result};
use crate::loader::load_query_config;
use crate::query::{QueryConfig, QueryOverrides};
use crate::scroll::{ScrollDriver, ScrollPosition};
use crate::seed::{add_many, seed_synthetic, RandomUserClient, RandomUserConfig};
use crate::store::{field_value, MemoryStore};
use crate::types::{JsonValue, Record};
use serde_json::json;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

const DEFAULT_PATH: &str = "users";
const DEFAULT_FIELD: &str = "name.first";
const DEFAULT_LIMIT: usize = 30;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Browse {
                query,
                count,
                remote,
                base_url,
                pages,
            } => {
                self.browse(query, *count, remote.then_some(base_url.as_str()), *pages)
                    .await
            }
            Commands::CheckConfig { file } => self.check_config(file),
        }
    }

    /// Seed a collection and page through it
    async fn browse(
        &self,
        args: &QueryArgs,
        count: usize,
        remote: Option<&str>,
        pages: usize,
    ) -> Result<()> {
        let config = resolve_query(args)?;
        let store = Arc::new(MemoryStore::new());

        let seeded = match remote {
            Some(base_url) => {
                let client =
                    RandomUserClient::with_config(RandomUserConfig::default().base_url(base_url))?;
                add_many(&client, store.as_ref(), &config.path, count).await?
            }
            None => seed_synthetic(store.as_ref(), &config.path, count).await?,
        };
        info!("Seeded {} documents into '{}'", seeded.len(), config.path);

        let engine: Arc<PaginationEngine<JsonValue, MemoryStore>> =
            Arc::new(PaginationEngine::new(store, config.clone()).await?);
        let first = engine.len();
        self.print_page(&config, 1, &engine.data(), first, engine.is_done())?;

        let driver = ScrollDriver::new(engine.clone());
        let mut page = 1;
        for _ in 0..pages {
            if engine.is_done() {
                break;
            }
            if let Some(LoadOutcome::Loaded { fetched, done, .. }) =
                driver.handle(ScrollPosition::Bottom).await?
            {
                page += 1;
                self.print_page(&config, page, &engine.data(), fetched, done)?;
            }
        }

        if self.cli.format == OutputFormat::Pretty {
            println!(
                "{} records in {page} pages ({})",
                engine.len(),
                engine.phase()
            );
        }
        Ok(())
    }

    /// Print the records merged by the latest page
    fn print_page(
        &self,
        config: &QueryConfig,
        page: usize,
        data: &[Record<JsonValue>],
        fetched: usize,
        done: bool,
    ) -> Result<()> {
        let fresh = if config.prepend {
            &data[..fetched]
        } else {
            &data[data.len() - fetched..]
        };

        match self.cli.format {
            OutputFormat::Json => {
                let line = json!({
                    "page": page,
                    "fetched": fetched,
                    "total": data.len(),
                    "done": done,
                    "records": fresh,
                });
                println!("{}", serde_json::to_string(&line)?);
            }
            OutputFormat::Pretty => {
                println!("--- page {page}: {fetched} records ---");
                for record in fresh {
                    let key = field_value(&record.data, &config.field)
                        .map_or_else(|| "-".to_string(), ToString::to_string);
                    println!("{:>24}  {key}", record.id);
                }
                if done {
                    println!("--- end of '{}' ---", config.path);
                }
            }
        }
        Ok(())
    }

    /// Validate a query file
    fn check_config(&self, file: &Path) -> Result<()> {
        let config = load_query_config(file)?;
        match self.cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string(&config)?),
            OutputFormat::Pretty => print!("{}", serde_yaml::to_string(&config)?),
        }
        Ok(())
    }
}

/// Build the query from an optional file and command-line overrides
pub(crate) fn resolve_query(args: &QueryArgs) -> Result<QueryConfig> {
    let base = match &args.query {
        Some(path) => load_query_config(path)?,
        None => QueryConfig::new(DEFAULT_PATH, DEFAULT_FIELD, DEFAULT_LIMIT),
    };

    let overrides = QueryOverrides {
        path: args.path.clone(),
        field: args.field.clone(),
        limit: args.limit,
        reverse: args.reverse.then_some(true),
        prepend: args.prepend.then_some(true),
    };
    base.merged(&overrides).map_err(|e| match e {
        Error::InvalidConfigValue { field, message } => {
            Error::config(format!("--{field}: {message}"))
        }
        other => other,
    })
}

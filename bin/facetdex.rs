use anyhow::{bail, Context, Result};
use clap::Parser;
use facetdex::{
    BackendRegistry, CatalogConfig, FacetdexError, HealthStatus, SearchCatalog, SearchConfig,
    SearchQuery,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "facetdex")]
#[command(about = "In-memory faceted search over a catalog snapshot", long_about = None)]
struct Args {
    /// YAML configuration file with an `in_memory_search` section; overrides
    /// `--path` and `--all-packages`
    #[arg(long, env = "FACETDEX_CONFIG")]
    config: Option<PathBuf>,

    /// Directory holding the snapshot file
    #[arg(long, env = "FACETDEX_PATH")]
    path: Option<PathBuf>,

    /// Snapshot file name inside `--path`
    #[arg(long, env = "FACETDEX_ALL_PACKAGES")]
    all_packages: Option<String>,

    /// Free-text query matched against title and notes
    #[arg(long)]
    q: Option<String>,

    /// Facet filter as name=value (groups, res_format, organization)
    #[arg(long = "facet", value_parser = parse_facet)]
    facets: Vec<(String, String)>,

    /// Only return these facets
    #[arg(long = "facet-field", value_delimiter = ',')]
    facet_fields: Vec<String>,

    /// Offset of the first returned record
    #[arg(long)]
    start: Option<usize>,

    /// Maximum number of returned records
    #[arg(long)]
    rows: Option<usize>,

    /// Check that the snapshot file is present and exit
    #[arg(long)]
    health: bool,

    /// Print metrics after the query
    #[arg(long)]
    metrics: bool,
}

fn parse_facet(raw: &str) -> std::result::Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.trim().to_string(), value.to_string()))
        .ok_or_else(|| format!("expected name=value, got {raw:?}"))
}

impl Args {
    /// Resolve the search configuration; there is no implicit snapshot location
    fn search_config(&self) -> Result<SearchConfig> {
        match (&self.config, &self.path, &self.all_packages) {
            (Some(file), _, _) => Ok(CatalogConfig::from_file(file)
                .with_context(|| format!("loading {}", file.display()))?
                .search),
            (None, Some(path), Some(all_packages)) => {
                let config = SearchConfig::new(path, all_packages);
                config.validate()?;
                Ok(config)
            }
            (None, _, _) => Err(FacetdexError::ConfigInvalid(
                "pass --config, or both --path and --all-packages".to_string(),
            )
            .into()),
        }
    }

    fn query(&self, catalog: &SearchCatalog) -> Result<SearchQuery> {
        let mut query = SearchQuery::new();
        if let Some(q) = &self.q {
            query = query.with_text(q);
        }
        query.filters = catalog.parse_filters(self.facets.iter().cloned())?;
        if !self.facet_fields.is_empty() {
            query = query.with_facet_fields(self.facet_fields.iter().cloned());
        }
        query.start = self.start;
        query.rows = self.rows;
        Ok(query)
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    info!("Starting facetdex v{}", facetdex::VERSION);

    let config = args.search_config()?;
    info!("Snapshot: {}", config.snapshot_path().display());

    let catalog = Arc::new(SearchCatalog::new(config)?);

    if args.health {
        return match catalog.health_check() {
            HealthStatus::Healthy => {
                println!("healthy");
                Ok(())
            }
            HealthStatus::Unhealthy { reason } => {
                error!("Snapshot unavailable: {}", reason);
                bail!("unhealthy: {reason}")
            }
        };
    }

    let registry = BackendRegistry::new();
    registry.register(catalog.clone());
    registry
        .initialize_all()
        .context("search catalog failed to start")?;

    let query = args.query(&catalog)?;
    let response = registry.search(&query)?;
    println!("{}", serde_json::to_string_pretty(&response)?);

    if args.metrics {
        eprintln!("{}", catalog.metrics().gather_text()?);
    }

    Ok(())
}

//! CLI administration tool for commerce-redirect.
//!
//! Runs resolutions and collaborator checks without going through HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Show the effective configuration
//! cargo run --bin redirect-admin -- config
//!
//! # Resolve a suffix as if requested from a content page
//! cargo run --bin redirect-admin -- resolve --page /content/venia/us/en /product/ABC123
//!
//! # Look up a URL key in the catalog
//! cargo run --bin redirect-admin -- catalog lookup ABC123
//!
//! # Validate the content tree and list product root pages
//! cargo run --bin redirect-admin -- content check
//!
//! # Drop a cached URL key so the next redirect asks the catalog again
//! cargo run --bin redirect-admin -- cache invalidate ABC123
//! ```
//!
//! Failed resolutions, lookups and checks exit with a non-zero status.
//!
//! # Environment Variables
//!
//! Same as the server, see `commerce_redirect::config`.

use commerce_redirect::config::{self, Config};
use commerce_redirect::AppError;
use commerce_redirect::domain::entities::{
    ContentLocation, ProductQuery, RedirectRequest, ResolvedTarget,
};
use commerce_redirect::domain::providers::{CatalogClient, CatalogError};
use commerce_redirect::infrastructure::cache::CacheService;
use commerce_redirect::infrastructure::catalog::GraphqlCatalogClient;
use commerce_redirect::infrastructure::content::ContentTree;
use commerce_redirect::server::{build_state, cached_catalog, connect_cache};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::*;

/// CLI tool for commerce-redirect.
#[derive(Parser)]
#[command(name = "redirect-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Validate and print the configuration
    Config,

    /// Resolve a redirect suffix
    Resolve {
        /// Content path the request originates from
        #[arg(short, long)]
        page: String,

        /// Redirect suffix, e.g. /product/ABC123
        suffix: String,
    },

    /// Catalog operations
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },

    /// Content tree operations
    Content {
        #[command(subcommand)]
        action: ContentAction,
    },

    /// URL-key cache operations
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
}

/// Catalog subcommands.
#[derive(Subcommand)]
enum CatalogAction {
    /// Fetch the URL key of a SKU
    Lookup { sku: String },

    /// Check catalog connectivity
    Check,
}

/// Cache subcommands.
#[derive(Subcommand)]
enum CacheAction {
    /// Remove the cached URL key of a SKU
    Invalidate { sku: String },
}

/// Content tree subcommands.
#[derive(Subcommand)]
enum ContentAction {
    /// Load the content tree and show each page's product root page
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;

    match cli.command {
        Commands::Config => show_config(&config),
        Commands::Resolve { page, suffix } => resolve(&config, page, suffix).await?,
        Commands::Catalog { action } => handle_catalog_action(action, &config).await?,
        Commands::Content { action } => match action {
            ContentAction::Check => check_content(&config)?,
        },
        Commands::Cache { action } => match action {
            CacheAction::Invalidate { sku } => invalidate_cache(&config, sku).await?,
        },
    }

    Ok(())
}

fn show_config(config: &Config) {
    println!("{}", "Configuration".bright_blue().bold());
    println!();
    println!("  Listen:              {}", config.listen_addr.cyan());
    println!(
        "  Identifier type:     {}",
        config.identifier_config.identifier_type.to_string().cyan()
    );
    println!(
        "  Identifier location: {}",
        config.identifier_config.location.to_string().cyan()
    );
    println!(
        "  Route:               {}",
        format!("*.{}.{}", config.redirect_selector, config.redirect_extension).cyan()
    );
    println!(
        "  Content tree:        {}",
        config.content_tree_path.display().to_string().cyan()
    );
    println!(
        "  Public base URL:     {}",
        config.public_base_url.as_deref().unwrap_or("(relative URLs)").cyan()
    );
    println!(
        "  Store code:          {}",
        config.catalog_store_code.as_deref().unwrap_or("default").cyan()
    );
    println!(
        "  Cache:               {}",
        if config.is_cache_enabled() {
            "redis".green()
        } else {
            "disabled".yellow()
        }
    );
    println!();
    println!("{}", "✅ Configuration is valid".green().bold());
}

/// Runs one resolution through the same resolver the server uses.
async fn resolve(config: &Config, page: String, suffix: String) -> Result<()> {
    let state = build_state(config).await?;

    let request = RedirectRequest::new(Some(suffix.as_str()), ContentLocation::new(page));

    let outcome = state.resolver.resolve(&request, &state.identifier_config).await;
    report_resolution(&suffix, outcome)
}

/// Prints a resolution outcome; failures become errors so the exit status is non-zero.
fn report_resolution(suffix: &str, outcome: Result<ResolvedTarget, AppError>) -> Result<()> {
    match outcome {
        Ok(target) => {
            println!("{} {}", "301".green().bold(), target.url.bright_white());
            Ok(())
        }
        Err(e) => {
            println!(
                "{} {}",
                e.status().as_u16().to_string().red().bold(),
                e.to_string().red()
            );
            bail!("Resolution of {} failed with status {}", suffix, e.status());
        }
    }
}

/// Prints a catalog lookup outcome; failures become errors.
fn report_lookup(sku: &str, outcome: Result<String, CatalogError>) -> Result<()> {
    match outcome {
        Ok(url_key) => {
            println!("  {} → {}", sku.cyan(), url_key.bright_yellow());
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "❌".red(), e.to_string().red());
            bail!("Catalog lookup for {} failed: {}", sku, e);
        }
    }
}

async fn handle_catalog_action(action: CatalogAction, config: &Config) -> Result<()> {
    let client = GraphqlCatalogClient::new(config.catalog_config())
        .context("Failed to create catalog client")?;

    match action {
        CatalogAction::Lookup { sku } => {
            let outcome = client
                .fetch_product_url_key_by_sku(&sku, ProductQuery::URL_KEY)
                .await;
            report_lookup(&sku, outcome)?;
        }
        CatalogAction::Check => {
            if client.health_check().await {
                println!("{}", "✅ Catalog reachable".green().bold());
            } else {
                println!("{}", "❌ Catalog unreachable".red().bold());
                bail!("Catalog health check failed");
            }
        }
    }

    Ok(())
}

async fn invalidate_cache(config: &Config, sku: String) -> Result<()> {
    if !config.is_cache_enabled() {
        bail!("Caching is disabled; set REDIS_URL or REDIS_HOST");
    }

    let cache = connect_cache(config).await;
    if cache.backend() != "redis" {
        bail!("Redis is not reachable");
    }

    let catalog = cached_catalog(config, cache)?;

    catalog
        .invalidate(&sku, ProductQuery::URL_KEY)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to invalidate {}: {}", sku, e))?;

    println!("{} {}", "✅ Invalidated".green().bold(), sku.cyan());

    Ok(())
}

fn check_content(config: &Config) -> Result<()> {
    let tree = ContentTree::load(&config.content_tree_path)?;

    println!(
        "{} ({} pages)",
        "Content tree".bright_blue().bold(),
        tree.len()
    );
    println!();

    for page in tree.pages() {
        let product_page = tree
            .product_page_for(page)
            .or_else(|| tree.default_product_page());

        match product_page {
            Some(product_page) => println!("  {} → {}", page.path.cyan(), product_page),
            None => println!("  {} → {}", page.path.cyan(), "no product page".yellow()),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use commerce_redirect::error::no_details;

    #[test]
    fn test_failed_resolution_is_an_error() {
        let outcome = Err(AppError::bad_request("Missing redirect suffix.", no_details()));

        assert!(report_resolution("/", outcome).is_err());
    }

    #[test]
    fn test_successful_resolution_is_ok() {
        let outcome = Ok(ResolvedTarget {
            url: "/content/venia/p.ABC123.html".to_string(),
        });

        assert!(report_resolution("/product/ABC123", outcome).is_ok());
    }

    #[test]
    fn test_failed_lookup_is_an_error() {
        let outcome = Err(CatalogError::ProductNotFound {
            sku: "MISSING".to_string(),
        });

        let err = report_lookup("MISSING", outcome).unwrap_err();

        assert!(err.to_string().contains("MISSING"));
        assert!(report_lookup("ABC123", Ok("blue-shirt".to_string())).is_ok());
    }
}

//! linkdex admin CLI.
//!
//! Browses and maintains the link directory against the configured catalog
//! store, falling back to the seeded in-memory dataset in static data mode.
//! Logging goes to stderr so command output stays pipeable.

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use linkdex_client::store::{CatalogStore, MemoryStore, RestStore};
use linkdex_client::bulk_import;
use linkdex_core::import::{derive_tags, parse_bulk, resolve_category};
use linkdex_core::model::{NewWebsite, WebsiteUpdate};
use linkdex_core::{AppConfig, auth};

#[derive(Parser)]
#[command(name = "linkdex", about = "Browse and maintain the linkdex web-link directory")]
struct Cli {
    /// Admin password for mutating commands (or LINKDEX_ADMIN_PASSWORD).
    #[arg(long, global = true)]
    password: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog entries
    List {
        /// Filter by category slug
        #[arg(short, long)]
        category: Option<String>,
        /// Only featured entries
        #[arg(long)]
        featured: bool,
        /// Only popular entries
        #[arg(long)]
        popular: bool,
    },
    /// List category definitions
    Categories,
    /// Add one catalog entry
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        url: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Category slug; auto-detected when omitted
        #[arg(long)]
        category: Option<String>,
    },
    /// Delete a catalog entry by id
    Delete { id: String },
    /// Record a click on a catalog entry
    Click { id: String },
    /// Bulk-import entries from a file ("-" for stdin)
    Import {
        input: PathBuf,
        /// Parse and print candidates without writing to the store
        #[arg(long)]
        dry_run: bool,
    },
    /// Mark or unmark an entry as featured
    Feature {
        id: String,
        /// Clear the featured flag instead of setting it
        #[arg(long)]
        unset: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load()?;
    let store = open_store(&config)?;

    match cli.command {
        Commands::List { category, featured, popular } => list(store.as_ref(), category, featured, popular).await,
        Commands::Categories => categories(store.as_ref()).await,
        Commands::Add { title, url, description, category } => {
            require_admin(&config, cli.password.as_deref())?;
            add(store.as_ref(), title, url, description, category).await
        }
        Commands::Delete { id } => {
            require_admin(&config, cli.password.as_deref())?;
            store.delete_website(&id).await?;
            println!("Deleted {id}");
            Ok(())
        }
        Commands::Click { id } => {
            store.record_click(&id).await?;
            Ok(())
        }
        Commands::Import { input, dry_run } => {
            if !dry_run {
                require_admin(&config, cli.password.as_deref())?;
            }
            import(store.as_ref(), &input, dry_run).await
        }
        Commands::Feature { id, unset } => {
            require_admin(&config, cli.password.as_deref())?;
            let update = WebsiteUpdate { featured: Some(!unset), ..Default::default() };
            store.update_website(&id, update).await?;
            println!("{} featured={}", id, !unset);
            Ok(())
        }
    }
}

/// Pick the remote store when configured, otherwise the seeded fallback.
fn open_store(config: &AppConfig) -> Result<Arc<dyn CatalogStore>> {
    if config.store_configured() {
        let store = RestStore::from_app_config(config)?;
        Ok(Arc::new(store))
    } else {
        tracing::warn!("remote store not configured; using static data (changes are not persisted)");
        Ok(Arc::new(MemoryStore::seeded()))
    }
}

/// Gate mutating commands behind the configured admin password.
fn require_admin(config: &AppConfig, password: Option<&str>) -> Result<()> {
    let Some(expected) = config.admin_password_hash.as_deref() else {
        bail!("admin password not configured; set LINKDEX_ADMIN_PASSWORD_HASH to enable mutations");
    };
    let supplied = match password {
        Some(p) => p.to_string(),
        None => std::env::var("LINKDEX_ADMIN_PASSWORD")
            .context("admin password required: pass --password or set LINKDEX_ADMIN_PASSWORD")?,
    };
    if !auth::verify_password(&supplied, expected) {
        bail!("invalid admin password");
    }
    Ok(())
}

async fn list(store: &dyn CatalogStore, category: Option<String>, featured: bool, popular: bool) -> Result<()> {
    let websites = store.list_websites().await?;
    for site in websites {
        if let Some(slug) = &category
            && site.category != *slug
        {
            continue;
        }
        if featured && !site.featured {
            continue;
        }
        if popular && !site.popular {
            continue;
        }
        println!(
            "{}\t{}\t{}\t{}\t{} clicks\t[{}]",
            site.id,
            site.title,
            site.url,
            site.category,
            site.clicks,
            site.tags.join(", ")
        );
    }
    Ok(())
}

async fn categories(store: &dyn CatalogStore) -> Result<()> {
    for category in store.list_categories().await? {
        println!("{}\t{}\t{} entries\t{}", category.slug, category.name, category.count, category.description);
    }
    Ok(())
}

async fn add(
    store: &dyn CatalogStore, title: String, url: String, description: String, category: Option<String>,
) -> Result<()> {
    let category = category.unwrap_or_else(|| resolve_category(&url, &title, &description).to_string());
    let tags = derive_tags(&title, &url);
    let today = chrono::Local::now().date_naive();

    let created = store
        .add_website(NewWebsite {
            title,
            description,
            url,
            icon: None,
            category,
            tags,
            featured: false,
            popular: false,
            clicks: 0,
            rating: linkdex_core::import::DEFAULT_RATING,
            date_added: today,
            last_updated: today,
        })
        .await?;

    println!("Added {} ({}) as {}", created.title, created.id, created.category);
    Ok(())
}

async fn import(store: &dyn CatalogStore, input: &PathBuf, dry_run: bool) -> Result<()> {
    let text = if input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).context("reading stdin")?;
        buf
    } else {
        std::fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))?
    };

    if dry_run {
        let candidates = parse_bulk(&text);
        println!("{} candidate(s):", candidates.len());
        for site in candidates {
            println!("  {}\t{}\t{}\t[{}]", site.title, site.url, site.category, site.tags.join(", "));
        }
        return Ok(());
    }

    let report = bulk_import(store, &text).await;
    println!("Imported: {} succeeded, {} failed", report.success_count, report.failed_count);

    let (shown, remainder) = report.display_errors();
    for error in shown {
        println!("  - {error}");
    }
    if remainder > 0 {
        println!("  ... and {remainder} more error(s)");
    }

    Ok(())
}

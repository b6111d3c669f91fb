//! CLI entry point for hardyards

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "hardyards")]
#[command(version)]
#[command(about = "Article rendering and social previews for the HardYards news site", long_about = None)]
struct Cli {
    /// Set the site directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new site directory
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Start the article server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },

    /// Print an article's HTML
    Article {
        /// Article slug (or title for legacy links)
        target: String,

        /// Print the social preview document instead of the detail fragment
        #[arg(long)]
        share: bool,
    },

    /// List articles
    List {
        /// Section to list (sports, urban, rural, life)
        #[arg(short, long)]
        section: Option<String>,

        /// Subcategory within the section
        #[arg(long)]
        sub: Option<String>,

        /// Maximum number of articles
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Render a rich-text body from a JSON file
    Render {
        /// JSON file holding a body, an article or an API response
        file: PathBuf,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "hardyards_rs=debug,hardyards=debug,tower_http=debug,info"
    } else {
        "hardyards_rs=info,hardyards=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            hardyards_rs::commands::init::init_site(&target_dir)?;
            println!("Initialized site in {:?}", target_dir);
        }

        Commands::Server { port, ip } => {
            let site = hardyards_rs::Site::new(&base_dir)?;
            tracing::info!("Starting server at http://{}:{}", ip, port);
            hardyards_rs::server::start(&site, &ip, port).await?;
        }

        Commands::Article { target, share } => {
            let site = hardyards_rs::Site::new(&base_dir)?;
            hardyards_rs::commands::article::run(&site, &target, share).await?;
        }

        Commands::List {
            section,
            sub,
            limit,
        } => {
            let site = hardyards_rs::Site::new(&base_dir)?;
            hardyards_rs::commands::list::run(&site, section.as_deref(), sub.as_deref(), limit)
                .await?;
        }

        Commands::Render { file } => {
            let site = hardyards_rs::Site::new(&base_dir)?;
            let file = if file.is_absolute() {
                file
            } else {
                base_dir.join(file)
            };
            let html = hardyards_rs::commands::render::run(&file, &site.config.render)?;
            println!("{}", html);
        }

        Commands::Version => {
            println!("hardyards version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

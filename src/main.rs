//! CLI entry point for lproj-content

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "lproj-content")]
#[command(version)]
#[command(about = "Renders localized app content into per-language HTML pages", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
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
    /// Initialize a new content project
    Init {
        /// Directory to initialize (defaults to the base directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Render all pages for all languages
    #[command(alias = "generate", alias = "g")]
    Build,

    /// Remove the rendered pages
    Clean,

    /// List project information
    List {
        /// What to list (languages, files, missing)
        #[arg(default_value = "languages")]
        r#type: String,
    },

    /// Extract localizable strings from the app sources
    Extract {
        /// Write the strings table here instead of standard output
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "lproj_content=debug,info"
    } else {
        "lproj_content=info"
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
        None => std::env::current_dir().context("Cannot determine current directory")?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing project in {:?}", target_dir);
            lproj_content::commands::init::init_project(&target_dir)?;
            println!("Initialized content project in {:?}", target_dir);
        }

        Commands::Build => {
            let project = lproj_content::Project::new(&base_dir)?;
            project.build()?;
            println!("Built successfully!");
        }

        Commands::Clean => {
            let project = lproj_content::Project::new(&base_dir)?;
            let removed = project.clean()?;
            println!("Cleaned {} pages", removed);
        }

        Commands::List { r#type } => {
            let project = lproj_content::Project::new(&base_dir)?;
            lproj_content::commands::list::run(&project, &r#type)?;
        }

        Commands::Extract { output } => {
            let project = lproj_content::Project::new(&base_dir)?;
            project.extract(output.as_deref())?;
        }

        Commands::Version => {
            println!("lproj-content version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

//! cine-browse - List movie categories and the genre index
//!
//! Unix-style tool over the remote movie catalog. Tables go to stdout,
//! logs to stderr.

use clap::{Parser, Subcommand};
use libcinescope::catalog::{CatalogClient, CatalogSource};
use libcinescope::types::{BackdropSize, GenreTile, Movie, MovieCategory, Page, PosterSize};
use libcinescope::{CinescopeError, Config, Result};

#[derive(Parser, Debug)]
#[command(name = "cine-browse")]
#[command(version)]
#[command(about = "Browse the movie catalog from the command line")]
#[command(long_about = "\
cine-browse - Browse the movie catalog from the command line

COMMANDS:
    list      List a browsing category (upcoming, popular, top-rated, now-playing)
    genres    List the genre index with backdrop enrichment

USAGE EXAMPLES:
    # First page of upcoming movies
    cine-browse list upcoming

    # Third page of popular movies, as JSON
    cine-browse list popular --page 3 --format json

    # Genre index
    cine-browse genres

CONFIGURATION:
    Configuration file: ~/.config/cinescope/config.toml

    Override with environment variables:
        CINESCOPE_CONFIG     - Path to config file
        CINESCOPE_API_KEY    - Catalog API key

EXIT CODES:
    0 - Success
    1 - Operation failed
    2 - API key rejected
    3 - Invalid input
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List a browsing category
    List {
        /// Category: upcoming, popular, top-rated, now-playing
        category: String,

        /// Page number
        #[arg(short, long, default_value = "1")]
        page: u32,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// List the genre index
    Genres {
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    libcinescope::logging::init_cli(cli.verbose);

    // Run the main logic and handle errors
    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    config.require_api_key()?;

    let client = CatalogClient::new(config.catalog.clone())
        .map_err(CinescopeError::Catalog)?;

    match cli.command {
        Commands::List {
            category,
            page,
            format,
        } => {
            cmd_list(&client, &category, page, &format).await?;
        }
        Commands::Genres { format } => {
            cmd_genres(&client, &format).await?;
        }
    }

    Ok(())
}

fn validate_format(format: &str) -> Result<()> {
    if format != "text" && format != "json" {
        return Err(CinescopeError::InvalidInput(format!(
            "Invalid format '{}'. Must be 'text' or 'json'",
            format
        )));
    }
    Ok(())
}

/// List one page of a browsing category
async fn cmd_list(client: &CatalogClient, category: &str, page: u32, format: &str) -> Result<()> {
    validate_format(format)?;

    if page == 0 {
        return Err(CinescopeError::InvalidInput(
            "Page numbers start at 1".to_string(),
        ));
    }

    let category: MovieCategory = category
        .parse()
        .map_err(CinescopeError::InvalidInput)?;

    let results = client
        .list(category, page)
        .await
        .map_err(CinescopeError::Catalog)?;

    if format == "json" {
        output_movies_json(client, &results);
    } else {
        output_movies_text(&results);
    }

    Ok(())
}

/// List the genre index
async fn cmd_genres(client: &CatalogClient, format: &str) -> Result<()> {
    validate_format(format)?;

    let tiles = client
        .genres_with_backdrops()
        .await
        .map_err(CinescopeError::Catalog)?;

    if format == "json" {
        output_genres_json(client, &tiles);
    } else {
        for tile in &tiles {
            println!("{} | {}", tile.id, tile.name);
        }
    }

    Ok(())
}

/// Output movies as JSON with resolved image URLs
fn output_movies_json(client: &CatalogClient, page: &Page<Movie>) {
    let movies: Vec<serde_json::Value> = page
        .results
        .iter()
        .map(|m| {
            serde_json::json!({
                "id": m.id,
                "title": m.title,
                "release_date": m.release_date,
                "vote_average": m.vote_average,
                "overview": m.overview,
                "poster_url": client
                    .config()
                    .poster_url(m.poster_path.as_deref(), PosterSize::W500),
            })
        })
        .collect();

    let json = serde_json::json!({
        "page": page.page,
        "total_pages": page.total_pages,
        "total_results": page.total_results,
        "results": movies,
    });

    println!("{}", serde_json::to_string_pretty(&json).unwrap_or_default());
}

/// Output movies as a human-readable table
fn output_movies_text(page: &Page<Movie>) {
    for movie in &page.results {
        let year = movie
            .release_date
            .as_deref()
            .and_then(|d| d.split('-').next())
            .unwrap_or("????");
        println!(
            "{} | {} ({}) | {:.1}",
            movie.id, movie.title, year, movie.vote_average
        );
    }
    eprintln!(
        "page {}/{} ({} results)",
        page.page, page.total_pages, page.total_results
    );
}

/// Output genre tiles as JSON with resolved backdrop URLs
fn output_genres_json(client: &CatalogClient, tiles: &[GenreTile]) {
    let json: Vec<serde_json::Value> = tiles
        .iter()
        .map(|t| {
            serde_json::json!({
                "id": t.id,
                "name": t.name,
                "backdrop_url": client
                    .config()
                    .backdrop_url(t.backdrop_path.as_deref(), BackdropSize::W780),
            })
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&json).unwrap_or_default());
}

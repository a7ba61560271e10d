//! cine-search - Search movies by title or discover by genre

use clap::Parser;
use libcinescope::catalog::{CatalogClient, CatalogSource};
use libcinescope::types::{Movie, Page, PosterSize};
use libcinescope::{CinescopeError, Config, Result};

#[derive(Parser, Debug)]
#[command(name = "cine-search")]
#[command(version)]
#[command(about = "Search the movie catalog by title or genre")]
#[command(long_about = "\
cine-search - Search the movie catalog by title or genre

USAGE EXAMPLES:
    # Title search
    cine-search \"blade runner\"

    # Second page of results, as JSON
    cine-search \"alien\" --page 2 --format json

    # Discover by genre id instead of title
    cine-search --genre 878

EXIT CODES:
    0 - Success
    1 - Operation failed
    2 - API key rejected
    3 - Invalid input
")]
struct Cli {
    /// Title to search for (omit when using --genre)
    query: Option<String>,

    /// Discover by genre id instead of searching by title
    #[arg(short, long)]
    genre: Option<u64>,

    /// Page number
    #[arg(short, long, default_value = "1")]
    page: u32,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
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
    if cli.format != "text" && cli.format != "json" {
        return Err(CinescopeError::InvalidInput(format!(
            "Invalid format '{}'. Must be 'text' or 'json'",
            cli.format
        )));
    }
    if cli.page == 0 {
        return Err(CinescopeError::InvalidInput(
            "Page numbers start at 1".to_string(),
        ));
    }

    let config = Config::load()?;
    config.require_api_key()?;

    let client = CatalogClient::new(config.catalog.clone())
        .map_err(CinescopeError::Catalog)?;

    let results = match (&cli.query, cli.genre) {
        (Some(query), None) => {
            let query = query.trim();
            if query.is_empty() {
                return Err(CinescopeError::InvalidInput(
                    "Search query cannot be empty".to_string(),
                ));
            }
            client
                .search(query, cli.page)
                .await
                .map_err(CinescopeError::Catalog)?
        }
        (None, Some(genre_id)) => client
            .discover_by_genre(genre_id, cli.page)
            .await
            .map_err(CinescopeError::Catalog)?,
        (Some(_), Some(_)) => {
            return Err(CinescopeError::InvalidInput(
                "Provide either a query or --genre, not both".to_string(),
            ))
        }
        (None, None) => {
            return Err(CinescopeError::InvalidInput(
                "Provide a query or --genre".to_string(),
            ))
        }
    };

    if cli.format == "json" {
        output_json(&client, &results);
    } else {
        output_text(&results);
    }

    Ok(())
}

/// Output results as JSON with resolved poster URLs
fn output_json(client: &CatalogClient, page: &Page<Movie>) {
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

/// Output results as a human-readable table
fn output_text(page: &Page<Movie>) {
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

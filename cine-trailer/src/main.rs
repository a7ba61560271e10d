//! cine-trailer - Resolve the best trailer URL for a movie

use clap::Parser;
use libcinescope::catalog::{CatalogClient, CatalogSource};
use libcinescope::trailer::{select_trailer, watch_url};
use libcinescope::{CinescopeError, Config, Result};

#[derive(Parser, Debug)]
#[command(name = "cine-trailer")]
#[command(version)]
#[command(about = "Resolve the best trailer URL for a movie")]
#[command(long_about = "\
cine-trailer - Resolve the best trailer URL for a movie

Prints the YouTube watch URL of the movie's best trailer to stdout.
A movie without a playable trailer prints nothing and exits 0; only
catalog failures are errors.

USAGE EXAMPLES:
    # Trailer URL for a movie id
    cine-trailer 634649

    # Full video metadata as JSON
    cine-trailer 634649 --format json

EXIT CODES:
    0 - Success (with or without a trailer)
    1 - Operation failed
    2 - API key rejected
    3 - Invalid input
")]
struct Cli {
    /// Movie id
    movie_id: u64,

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

    let config = Config::load()?;
    config.require_api_key()?;

    let client = CatalogClient::new(config.catalog.clone())
        .map_err(CinescopeError::Catalog)?;

    let videos = client
        .videos(cli.movie_id)
        .await
        .map_err(CinescopeError::Catalog)?;

    let trailer = select_trailer(&videos);

    if cli.format == "json" {
        let json = match trailer {
            Some(video) => serde_json::json!({
                "name": video.name,
                "key": video.key,
                "site": video.site,
                "type": video.kind,
                "official": video.official,
                "url": watch_url(&video.key),
            }),
            None => serde_json::Value::Null,
        };
        println!("{}", serde_json::to_string_pretty(&json).unwrap_or_default());
    } else {
        match trailer {
            Some(video) => println!("{}", watch_url(&video.key)),
            None => eprintln!("No trailer available for movie {}", cli.movie_id),
        }
    }

    Ok(())
}

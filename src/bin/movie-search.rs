//! Terminal client for the movie plots API.
//!
//! Searches a movie on a running server and prints its title with the
//! translated plot.
//!
//! # Usage
//!
//! ```bash
//! # Search directly
//! cargo run --bin movie-search -- Inception
//!
//! # Prompt for names until an empty line
//! cargo run --bin movie-search
//!
//! # Against another server
//! cargo run --bin movie-search -- --server http://movies.internal:8080 "The Matrix"
//! ```
//!
//! # Environment Variables
//!
//! - `MOVIE_API_URL` (optional): server base URL, default `http://localhost:3000`

use anyhow::Result;
use clap::Parser;
use colored::*;
use dialoguer::Input;
use movie_plots::client::{ApiClient, ClientError};

/// Search a movie and read its plot translated.
#[derive(Parser)]
#[command(name = "movie-search")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Movie name; prompts interactively when omitted
    name: Option<String>,

    /// Base URL of the movie plots server
    #[arg(short, long, env = "MOVIE_API_URL", default_value = "http://localhost:3000")]
    server: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = ApiClient::new(&cli.server)?;

    match cli.name {
        Some(name) => {
            if !search(&client, &name).await {
                std::process::exit(1);
            }
        }
        None => interactive(&client).await?,
    }

    Ok(())
}

/// Prompts for names until an empty line is entered.
async fn interactive(client: &ApiClient) -> Result<()> {
    println!("{}", "Movie plot search".bright_blue().bold());
    println!("{}", "Enter an empty name to quit.".dimmed());
    println!();

    loop {
        let name: String = Input::new()
            .with_prompt("Movie name")
            .allow_empty(true)
            .interact_text()?;

        if name.trim().is_empty() {
            break;
        }

        search(client, &name).await;
        println!();
    }

    Ok(())
}

/// Runs one search and prints the outcome. Returns `false` on failure.
async fn search(client: &ApiClient, name: &str) -> bool {
    println!("{} {}", "Searching".dimmed(), name.cyan());

    match client.search(name).await {
        Ok(movie) => {
            println!();
            println!("{}", movie.title.bright_white().bold());
            println!("{}", movie.plot);
            true
        }
        Err(ClientError::Api { status, message }) => {
            eprintln!("{} {}", format!("[{}]", status.as_u16()).red(), message.red());
            false
        }
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            false
        }
    }
}

//! Command-line interface for the Bookshelf catalog.
//!
//! This CLI tool wraps every HTTP route of the server:
//! - books: list, get, category, add, update, delete, remove-author
//! - authors: list, get, by-book, add, update, delete
//! - publications: list, get, by-book, add, update, delete
//!
//! Configuration via environment:
//! - BOOKSHELF_URL: Base URL of the bookshelf server (default: http://localhost:3000)

mod commands;

use clap::{Parser, Subcommand};

use commands::{
    authors::AuthorsCommand, books::BooksCommand, publications::PublicationsCommand,
};

/// Bookshelf catalog CLI
///
/// Prints JSON by default; pass --human for formatted output.
#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output human-readable formatted text instead of JSON
    #[arg(long, global = true)]
    human: bool,

    /// Bookshelf server URL
    #[arg(
        long,
        env = "BOOKSHELF_URL",
        default_value = "http://localhost:3000",
        global = true
    )]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Work with books
    #[command(subcommand)]
    Books(BooksCommand),

    /// Work with authors
    #[command(subcommand)]
    Authors(AuthorsCommand),

    /// Work with publications
    #[command(subcommand)]
    Publications(PublicationsCommand),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let client = match commands::build_client() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Books(cmd) => commands::books::execute(&client, &cli.url, cli.human, cmd).await,
        Commands::Authors(cmd) => {
            commands::authors::execute(&client, &cli.url, cli.human, cmd).await
        }
        Commands::Publications(cmd) => {
            commands::publications::execute(&client, &cli.url, cli.human, cmd).await
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

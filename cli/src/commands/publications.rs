//! PUBLICATIONS commands - list, fetch, create, update and delete publications.

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use serde::{Deserialize, Serialize};

use bookshelf_core::{DeleteResult, Document, Publication, PublicationId, PublicationPatch};

use super::{HumanReadable, confirm, endpoint, make_request, output};

/// Publication subcommands.
#[derive(Subcommand)]
pub enum PublicationsCommand {
    /// List every publication
    List,

    /// Fetch a publication by id
    Get { id: i64 },

    /// Fetch the publication that lists a book
    ByBook { isbn: String },

    /// Add a publication
    Add {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        /// ISBN of a published book (repeatable)
        #[arg(long = "book")]
        books: Vec<String>,
    },

    /// Replace fields on a publication
    Update {
        id: i64,

        #[arg(long)]
        new_id: Option<i64>,

        #[arg(long)]
        name: Option<String>,

        /// Replacement book list (repeatable)
        #[arg(long = "book")]
        books: Vec<String>,
    },

    /// Delete a publication
    Delete {
        id: i64,

        /// Skip confirmation prompt (for non-interactive use)
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Debug, Deserialize, Serialize)]
pub struct PublicationAddedResponse {
    #[serde(rename = "publicationAdded")]
    pub publication_added: Document<Publication>,
    pub message: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct PublicationUpdatedResponse {
    #[serde(rename = "publicationUpdated")]
    pub publication_updated: Option<Document<Publication>>,
    pub message: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct PublicationDeletedResponse {
    #[serde(rename = "publicationDeleted")]
    pub publication_deleted: DeleteResult,
    pub message: String,
}

impl HumanReadable for Document<Publication> {
    fn print_human(&self) {
        let publication = &self.record;
        println!(
            "{} {}",
            format!("#{}", publication.id).yellow().bold(),
            publication.name.as_deref().unwrap_or("(unnamed)").bold()
        );
        println!("  {} {}", "Books:".cyan(), publication.books.join(", "));
    }
}

impl HumanReadable for PublicationAddedResponse {
    fn print_human(&self) {
        println!("{}", self.message.green().bold());
        println!();
        self.publication_added.print_human();
    }
}

impl HumanReadable for PublicationUpdatedResponse {
    fn print_human(&self) {
        match &self.publication_updated {
            Some(publication) => {
                println!("{}", self.message.green().bold());
                println!();
                publication.print_human();
            }
            None => println!("{}", "No publication matched; nothing updated.".yellow()),
        }
    }
}

impl HumanReadable for PublicationDeletedResponse {
    fn print_human(&self) {
        self.publication_deleted.print_human();
    }
}

/// Execute a publication subcommand.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    command: PublicationsCommand,
) -> Result<()> {
    match command {
        PublicationsCommand::List => {
            let url = endpoint(base_url, &["publications"])?;
            let publications: Vec<Document<Publication>> = make_request(client.get(url)).await?;
            output(&publications, human)
        }
        PublicationsCommand::Get { id } => {
            let url = endpoint(base_url, &["publication-id", &id.to_string()])?;
            let publication: Document<Publication> = make_request(client.get(url)).await?;
            output(&publication, human)
        }
        PublicationsCommand::ByBook { isbn } => {
            let url = endpoint(base_url, &["publication-isbn", &isbn])?;
            let publication: Document<Publication> = make_request(client.get(url)).await?;
            output(&publication, human)
        }
        PublicationsCommand::Add { id, name, books } => {
            let publication = Publication {
                id: PublicationId(id),
                name,
                books,
            };
            let url = endpoint(base_url, &["publication"])?;
            let response: PublicationAddedResponse =
                make_request(client.post(url).json(&publication)).await?;
            output(&response, human)
        }
        PublicationsCommand::Update {
            id,
            new_id,
            name,
            books,
        } => {
            let patch = PublicationPatch {
                id: new_id.map(PublicationId),
                name,
                books: (!books.is_empty()).then_some(books),
            };
            let url = endpoint(base_url, &["publication-update", &id.to_string()])?;
            let response: PublicationUpdatedResponse =
                make_request(client.put(url).json(&patch)).await?;
            output(&response, human)
        }
        PublicationsCommand::Delete { id, yes } => {
            if human && !yes && !confirm(&format!("Delete publication {}?", id))? {
                eprintln!("Aborted.");
                return Ok(());
            }
            let url = endpoint(base_url, &["publication-delete", &id.to_string()])?;
            let response: PublicationDeletedResponse = make_request(client.delete(url)).await?;
            output(&response, human)
        }
    }
}

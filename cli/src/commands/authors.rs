//! AUTHORS commands - list, fetch, create, update and delete authors.

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use serde::{Deserialize, Serialize};

use bookshelf_core::{Author, AuthorId, AuthorPatch, DeleteResult, Document};

use super::{HumanReadable, confirm, endpoint, make_request, output, print_field};

/// Author subcommands.
#[derive(Subcommand)]
pub enum AuthorsCommand {
    /// List every author
    List,

    /// Fetch an author by id
    Get { id: i64 },

    /// List authors credited with a book
    ByBook { isbn: String },

    /// Add an author
    Add {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        /// ISBN of one of the author's books (repeatable)
        #[arg(long = "book")]
        books: Vec<String>,
    },

    /// Replace fields on an author
    Update {
        id: i64,

        /// Change the author id itself
        #[arg(long)]
        new_id: Option<i64>,

        #[arg(long)]
        name: Option<String>,

        /// Replacement book list (repeatable)
        #[arg(long = "book")]
        books: Vec<String>,
    },

    /// Delete an author
    Delete {
        id: i64,

        /// Skip confirmation prompt (for non-interactive use)
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Debug, Deserialize, Serialize)]
pub struct AuthorAddedResponse {
    #[serde(rename = "authorAdded")]
    pub author_added: Document<Author>,
    pub message: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct AuthorUpdatedResponse {
    #[serde(rename = "authorUpdated")]
    pub author_updated: Option<Document<Author>>,
    pub message: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct AuthorDeletedResponse {
    #[serde(rename = "authorDeleted")]
    pub author_deleted: DeleteResult,
    pub message: String,
}

impl HumanReadable for Document<Author> {
    fn print_human(&self) {
        let author = &self.record;
        println!(
            "{} {}",
            format!("#{}", author.id).yellow().bold(),
            author.name.as_deref().unwrap_or("(unnamed)").bold()
        );
        println!("  {} {}", "Books:".cyan(), author.books.join(", "));
        print_field("Stored as", Some(self.doc_id));
    }
}

impl HumanReadable for AuthorAddedResponse {
    fn print_human(&self) {
        println!("{}", self.message.green().bold());
        println!();
        self.author_added.print_human();
    }
}

impl HumanReadable for AuthorUpdatedResponse {
    fn print_human(&self) {
        match &self.author_updated {
            Some(author) => {
                println!("{}", self.message.green().bold());
                println!();
                author.print_human();
            }
            None => println!("{}", "No author matched; nothing updated.".yellow()),
        }
    }
}

impl HumanReadable for AuthorDeletedResponse {
    fn print_human(&self) {
        self.author_deleted.print_human();
    }
}

/// Execute an author subcommand.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    command: AuthorsCommand,
) -> Result<()> {
    match command {
        AuthorsCommand::List => {
            let url = endpoint(base_url, &["authors"])?;
            let authors: Vec<Document<Author>> = make_request(client.get(url)).await?;
            output(&authors, human)
        }
        AuthorsCommand::Get { id } => {
            let url = endpoint(base_url, &["author-id", &id.to_string()])?;
            let author: Document<Author> = make_request(client.get(url)).await?;
            output(&author, human)
        }
        AuthorsCommand::ByBook { isbn } => {
            let url = endpoint(base_url, &["author-isbn", &isbn])?;
            let authors: Vec<Document<Author>> = make_request(client.get(url)).await?;
            output(&authors, human)
        }
        AuthorsCommand::Add { id, name, books } => {
            let author = Author {
                id: AuthorId(id),
                name,
                books,
            };
            let url = endpoint(base_url, &["author"])?;
            let response: AuthorAddedResponse = make_request(client.post(url).json(&author)).await?;
            output(&response, human)
        }
        AuthorsCommand::Update {
            id,
            new_id,
            name,
            books,
        } => {
            let patch = AuthorPatch {
                id: new_id.map(AuthorId),
                name,
                books: (!books.is_empty()).then_some(books),
            };
            let url = endpoint(base_url, &["author-update", &id.to_string()])?;
            let response: AuthorUpdatedResponse = make_request(client.put(url).json(&patch)).await?;
            output(&response, human)
        }
        AuthorsCommand::Delete { id, yes } => {
            if human && !yes && !confirm(&format!("Delete author {}?", id))? {
                eprintln!("Aborted.");
                return Ok(());
            }
            let url = endpoint(base_url, &["author-delete", &id.to_string()])?;
            let response: AuthorDeletedResponse = make_request(client.delete(url)).await?;
            output(&response, human)
        }
    }
}

//! BOOKS commands - list, fetch, create, update and delete books.

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use serde::{Deserialize, Serialize};

use bookshelf_core::{AuthorId, Book, BookPatch, DeleteResult, Document, PublicationId};

use super::{HumanReadable, confirm, endpoint, make_request, output, print_field};

/// Book subcommands.
#[derive(Subcommand)]
pub enum BooksCommand {
    /// List every book
    List,

    /// Fetch a book by ISBN
    Get { isbn: String },

    /// List books in a category
    Category { category: String },

    /// Add a book
    Add(BookFields),

    /// Replace fields on a book
    Update {
        /// ISBN of the book to update
        isbn: String,

        /// Change the ISBN itself
        #[arg(long)]
        new_isbn: Option<String>,

        #[command(flatten)]
        fields: OptionalBookFields,
    },

    /// Delete a book
    Delete {
        isbn: String,

        /// Skip confirmation prompt (for non-interactive use)
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Remove an author from a book's author list
    RemoveAuthor { isbn: String, author_id: i64 },
}

/// Fields for a new book.
#[derive(Args)]
pub struct BookFields {
    /// ISBN of the new book
    pub isbn: String,

    #[command(flatten)]
    pub fields: OptionalBookFields,
}

/// Book fields shared by add and update.
#[derive(Args)]
pub struct OptionalBookFields {
    #[arg(long)]
    pub title: Option<String>,

    /// Author id (repeatable, in credit order)
    #[arg(long = "author")]
    pub authors: Vec<i64>,

    #[arg(long)]
    pub language: Option<String>,

    #[arg(long)]
    pub pub_date: Option<String>,

    #[arg(long)]
    pub pages: Option<i64>,

    /// Category (repeatable)
    #[arg(long = "category")]
    pub categories: Vec<String>,

    /// Publication id
    #[arg(long)]
    pub publication: Option<i64>,
}

impl BookFields {
    fn into_book(self) -> Book {
        let f = self.fields;
        Book {
            isbn: self.isbn,
            title: f.title,
            authors: f.authors.into_iter().map(AuthorId).collect(),
            language: f.language,
            pub_date: f.pub_date,
            num_of_page: f.pages,
            category: f.categories,
            publication: f.publication.map(PublicationId),
        }
    }
}

impl OptionalBookFields {
    fn into_patch(self, new_isbn: Option<String>) -> BookPatch {
        BookPatch {
            isbn: new_isbn,
            title: self.title,
            authors: (!self.authors.is_empty())
                .then(|| self.authors.into_iter().map(AuthorId).collect()),
            language: self.language,
            pub_date: self.pub_date,
            num_of_page: self.pages,
            category: (!self.categories.is_empty()).then_some(self.categories),
            publication: self.publication.map(PublicationId),
        }
    }
}

/// Response from POST /book.
#[derive(Debug, Deserialize, Serialize)]
pub struct BookAddedResponse {
    #[serde(rename = "bookAdded")]
    pub book_added: Document<Book>,
    pub message: String,
}

/// Response from PUT /book-update and the author-removal routes.
#[derive(Debug, Deserialize, Serialize)]
pub struct BookUpdatedResponse {
    #[serde(rename = "bookUpdated")]
    pub book_updated: Option<Document<Book>>,
    pub message: String,
}

/// Response from DELETE /book-delete.
#[derive(Debug, Deserialize, Serialize)]
pub struct BookDeletedResponse {
    #[serde(rename = "bookDeleted")]
    pub book_deleted: DeleteResult,
    pub message: String,
}

impl HumanReadable for Document<Book> {
    fn print_human(&self) {
        let book = &self.record;
        println!(
            "{} {}",
            book.isbn.yellow().bold(),
            book.title.as_deref().unwrap_or("(untitled)").bold()
        );
        let authors: Vec<String> = book.authors.iter().map(|a| a.to_string()).collect();
        println!("  {} {}", "Authors:".cyan(), authors.join(", "));
        print_field("Language", book.language.as_ref());
        print_field("Published", book.pub_date.as_ref());
        print_field("Pages", book.num_of_page);
        println!("  {} {}", "Categories:".cyan(), book.category.join(", "));
        print_field("Publication", book.publication);
    }
}

impl HumanReadable for BookAddedResponse {
    fn print_human(&self) {
        println!("{}", self.message.green().bold());
        println!();
        self.book_added.print_human();
    }
}

impl HumanReadable for BookUpdatedResponse {
    fn print_human(&self) {
        match &self.book_updated {
            Some(book) => {
                println!("{}", self.message.green().bold());
                println!();
                book.print_human();
            }
            None => println!("{}", "No book matched; nothing updated.".yellow()),
        }
    }
}

impl HumanReadable for BookDeletedResponse {
    fn print_human(&self) {
        self.book_deleted.print_human();
    }
}

/// Execute a book subcommand.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    command: BooksCommand,
) -> Result<()> {
    match command {
        BooksCommand::List => {
            let url = endpoint(base_url, &["books"])?;
            let books: Vec<Document<Book>> = make_request(client.get(url)).await?;
            output(&books, human)
        }
        BooksCommand::Get { isbn } => {
            let url = endpoint(base_url, &["book-isbn", &isbn])?;
            let book: Document<Book> = make_request(client.get(url)).await?;
            output(&book, human)
        }
        BooksCommand::Category { category } => {
            let url = endpoint(base_url, &["book-category", &category])?;
            let books: Vec<Document<Book>> = make_request(client.get(url)).await?;
            output(&books, human)
        }
        BooksCommand::Add(fields) => {
            let url = endpoint(base_url, &["book"])?;
            let response: BookAddedResponse =
                make_request(client.post(url).json(&fields.into_book())).await?;
            output(&response, human)
        }
        BooksCommand::Update {
            isbn,
            new_isbn,
            fields,
        } => {
            let url = endpoint(base_url, &["book-update", &isbn])?;
            let response: BookUpdatedResponse =
                make_request(client.put(url).json(&fields.into_patch(new_isbn))).await?;
            output(&response, human)
        }
        BooksCommand::Delete { isbn, yes } => {
            if human && !yes && !confirm(&format!("Delete book {}?", isbn))? {
                eprintln!("Aborted.");
                return Ok(());
            }
            let url = endpoint(base_url, &["book-delete", &isbn])?;
            let response: BookDeletedResponse = make_request(client.delete(url)).await?;
            output(&response, human)
        }
        BooksCommand::RemoveAuthor { isbn, author_id } => {
            let id = author_id.to_string();
            let url = endpoint(base_url, &["book-author-delete", &isbn, &id])?;
            let response: BookUpdatedResponse = make_request(client.delete(url)).await?;
            output(&response, human)
        }
    }
}

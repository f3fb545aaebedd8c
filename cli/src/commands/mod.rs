//! Command implementations for the bookshelf CLI.
//!
//! Each resource module provides:
//! - An Args/subcommand enum for clap argument parsing
//! - execute() performing the HTTP call
//! - Human-readable and JSON output formatting

pub mod authors;
pub mod books;
pub mod publications;

use anyhow::Result;
use colored::Colorize;
use reqwest::Url;
use serde::Serialize;
use serde::de::DeserializeOwned;

use bookshelf_core::DeleteResult;

/// Common error type for HTTP requests.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Invalid server URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Build the HTTP client.
pub fn build_client() -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .user_agent(concat!("bookshelf-cli/", env!("CARGO_PKG_VERSION")))
        .build()?)
}

/// Join `segments` onto the base URL, percent-encoding each one.
///
/// Categories such as `web dev` and ISBNs with slashes stay a single path
/// segment.
pub fn endpoint(base_url: &str, segments: &[&str]) -> Result<Url, CliError> {
    let invalid = |reason: String| CliError::InvalidUrl {
        url: base_url.to_string(),
        reason,
    };

    let mut url = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
    {
        let mut path = url
            .path_segments_mut()
            .map_err(|_| invalid("URL cannot be a base".to_string()))?;
        path.pop_if_empty();
        for segment in segments {
            path.push(segment);
        }
    }
    Ok(url)
}

/// Print output in JSON or human-readable format.
pub fn output<T: Serialize + HumanReadable>(value: &T, human: bool) -> Result<()> {
    if human {
        value.print_human();
    } else {
        println!("{}", serde_json::to_string_pretty(value)?);
    }
    Ok(())
}

/// Trait for types that can be printed in human-readable format.
pub trait HumanReadable {
    fn print_human(&self);
}

impl<T: HumanReadable> HumanReadable for Vec<T> {
    fn print_human(&self) {
        if self.is_empty() {
            println!("  {}", "(none)".dimmed());
            return;
        }
        for item in self {
            item.print_human();
            println!();
        }
    }
}

impl HumanReadable for DeleteResult {
    fn print_human(&self) {
        if self.deleted_count == 0 {
            println!("{}", "Nothing matched; no record deleted.".yellow());
        } else {
            println!("{}", "Deleted successfully!".green().bold());
        }
    }
}

/// Make an HTTP request and handle common error cases.
///
/// Non-success statuses become [`CliError::Server`], with the message taken
/// from the `{"error": ...}` body when there is one.
pub async fn make_request<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, CliError> {
    let response = request.send().await?;
    let status = response.status();

    if status.is_success() {
        let body = response.json::<T>().await?;
        Ok(body)
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(CliError::Server {
            status: status.as_u16(),
            message: error_message(&body),
        })
    }
}

/// Pull the message out of an `{"error": ...}` body, falling back to the raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| json.get("error").and_then(|v| v.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

/// Ask for confirmation on stderr. Returns true when the user typed `y`.
pub fn confirm(prompt: &str) -> Result<bool> {
    use std::io::Write;

    eprint!("{} {} [y/N] ", "Warning:".yellow().bold(), prompt);
    std::io::stderr().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}

/// Print an optional field, dimmed when absent.
pub fn print_field(label: &str, value: Option<impl std::fmt::Display>) {
    match value {
        Some(v) => println!("  {} {}", format!("{label}:").cyan(), v),
        None => println!("  {} {}", format!("{label}:").cyan(), "-".dimmed()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_encodes_segments() {
        let url = endpoint("http://localhost:3000", &["book-category", "web dev"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/book-category/web%20dev");
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let url = endpoint("http://host/api/", &["books"]).unwrap();
        assert_eq!(url.as_str(), "http://host/api/books");
    }

    #[test]
    fn test_endpoint_rejects_garbage() {
        assert!(endpoint("not a url", &["books"]).is_err());
    }

    #[test]
    fn test_error_message_from_json_body() {
        assert_eq!(
            error_message(r#"{"error":"No Book found for the ISBN of 1"}"#),
            "No Book found for the ISBN of 1"
        );
        assert_eq!(error_message("plain failure"), "plain failure");
    }
}

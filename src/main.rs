// Entrypoint for the CLI application.
// - Keeps `main` small: build the shared HTTP client and the
//   collaborators, then hand them to the flow in `ui`.
// - Returns `anyhow::Result` so failures print to stderr and exit nonzero.

use anyhow::Context;
use reqwest::blocking::Client;
use urltitle::{api::ShortenerClient, profile::ProfileStore, title::TitleFetcher, ui};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: urltitle <url>");
        return Ok(());
    }
    let url = &args[1];

    // One blocking client shared by both operations.
    let http = Client::builder()
        .build()
        .context("Failed to build HTTP client")?;
    let titles = TitleFetcher::new(http.clone());
    let api = ShortenerClient::from_env(http);
    let creds = ProfileStore::from_home();

    ui::run(&titles, &api, &creds, url)
}

// Terminal flow: sequences the title fetch and the shortening call, with
// an indicatif spinner on stderr while each request is in flight.

use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use crate::api::ShortenerClient;
use crate::profile::CredentialProvider;
use crate::title::TitleFetcher;

/// Run the whole flow for one URL: fetch the page title, shorten the URL,
/// then print `<title> <shortID>` to stdout with no trailing newline.
///
/// A title-fetch failure aborts before the shortening call is attempted.
/// Failures propagate to the caller; stdout stays empty unless both
/// operations succeed.
pub fn run(
    titles: &TitleFetcher,
    api: &ShortenerClient,
    creds: &dyn CredentialProvider,
    url: &str,
) -> Result<()> {
    let title = with_spinner("Fetching page title...", || titles.fetch(url))?;
    let short_id = with_spinner("Shortening URL...", || api.shorten(creds, url))?;

    print!("{} {}", title, short_id);
    std::io::stdout().flush()?;
    Ok(())
}

/// Show a spinner with `msg` while `f` runs, clearing it before returning
/// so the result line (or error) comes out on a clean terminal.
fn with_spinner<T>(msg: &str, f: impl FnOnce() -> Result<T>) -> Result<T> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    spinner.set_message(msg.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    let result = f();
    spinner.finish_and_clear();
    result
}

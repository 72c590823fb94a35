use tracing::{info, warn};

use crate::config::Configuration;
use crate::error::Result;
use crate::maven::{reader, writer};
use crate::source::TokenSource;

/// Run the full refresh: read the token currently stored for the configured
/// server, fetch a fresh one, substitute it in place.
///
/// Strictly linear; the settings file is only written after both the lookup
/// and the fetch succeeded. Returns the number of occurrences replaced.
pub async fn refresh_token<S: TokenSource>(cfg: &Configuration, source: &S) -> Result<usize> {
    info!(
        domain = %cfg.domain,
        domain_owner = %cfg.domain_owner,
        server = %cfg.server,
        settings = %cfg.settings.display(),
        "refreshing CodeArtifact token"
    );

    let existing = reader::read_server_token(&cfg.settings, &cfg.server)?;
    let fresh = source.fetch_token(&cfg.domain, &cfg.domain_owner).await?;

    let replaced = writer::replace_token(&cfg.settings, &existing, &fresh)?;
    if replaced > 0 {
        info!(replaced, "✅ Updated token!");
    } else {
        warn!("settings file left unchanged");
    }
    Ok(replaced)
}

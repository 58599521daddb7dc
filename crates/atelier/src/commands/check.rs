//! Catalog cross-reference check command.

use anyhow::Result;
use atelier_content::{check_links, landing, Catalog};

/// Run the check command.
pub fn run() -> Result<()> {
    let catalog = Catalog::published();
    let cards = landing::case_study_cards();

    tracing::info!(
        "Checking {} catalog entries and {} landing cards",
        catalog.len(),
        cards.len()
    );

    match check_links(&catalog, &cards) {
        Ok(()) => {
            tracing::info!("All slug references resolve");
            Ok(())
        }
        Err(errors) => {
            for error in &errors {
                tracing::error!("{}", error);
            }
            anyhow::bail!("{} broken link(s) found", errors.len());
        }
    }
}

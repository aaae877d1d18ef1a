use std::{future::Future, path::PathBuf};

use itertools::Itertools;
use url::Url;

use crate::{
    configuration::Settings,
    domain::ExhibitorRecord,
    services::{
        extract, write_records, BrowserSession, ContentLoader, ExportError, ListingDocument,
        LoadError, RenderedPage,
    },
};

#[derive(Debug, PartialEq)]
pub enum RunOutcome {
    Exported { count: usize, path: PathBuf },
    /// The listing had no exhibitors, nothing was written.
    Empty,
}

#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("invalid listing url `{url}`")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("extracted {extracted} exhibitors but could not save them")]
    Export {
        extracted: usize,
        #[source]
        source: ExportError,
    },
}

/// Runs one scrape: load the listing, extract every exhibitor, export the
/// rows. `session` is closed once loading is over, whether it succeeded or
/// not. Resolving `shutdown` while the page is loading aborts the run;
/// `shutdown` is dropped as soon as loading is over.
pub async fn run<S, F>(
    session: S,
    settings: &Settings,
    shutdown: F,
) -> Result<RunOutcome, ScrapeError>
where
    S: BrowserSession,
    F: Future<Output = ()>,
{
    let listing_url = settings.application.listing_url.as_str();

    let loaded = match Url::parse(listing_url) {
        Ok(base_url) => {
            let loader = ContentLoader::new(&settings.loader);
            let page = tokio::select! {
                page = loader.load(&session, listing_url) => page,
                _ = shutdown => Err(LoadError::Aborted),
            };
            page.map(|page| (base_url, page)).map_err(ScrapeError::from)
        }
        Err(source) => Err(ScrapeError::InvalidUrl {
            url: listing_url.to_string(),
            source,
        }),
    };
    release(session).await;
    let (base_url, page) = loaded?;

    log::info!("Parsing exhibitor data...");
    let records = extract_all(&page, &base_url);
    drop(page);

    if records.is_empty() {
        log::warn!("No exhibitor data was extracted");
        return Ok(RunOutcome::Empty);
    }

    let path = PathBuf::from(&settings.application.output_path);
    let count = write_records(&records, &path).map_err(|source| ScrapeError::Export {
        extracted: records.len(),
        source,
    })?;
    log_category_summary(&records);

    Ok(RunOutcome::Exported { count, path })
}

async fn release<S: BrowserSession>(session: S) {
    match session.quit().await {
        Ok(()) => log::info!("Browser session closed"),
        Err(e) => log::error!("Failed to close browser session: {}", e),
    }
}

fn extract_all(page: &RenderedPage, base_url: &Url) -> Vec<ExhibitorRecord> {
    let document = ListingDocument::parse(page);
    let fragments = document.fragments();
    log::info!("Found {} exhibitors", fragments.len());

    fragments
        .into_iter()
        .map(|fragment| extract(fragment, base_url))
        .collect()
}

fn log_category_summary(records: &[ExhibitorRecord]) {
    for (category, count) in records.iter().map(|r| r.category).counts().into_iter().sorted() {
        log::info!("{}: {}", category, count);
    }
}

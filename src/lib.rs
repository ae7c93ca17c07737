use tracing::info;

pub mod config;
pub mod datomatic;

mod error;
mod fetch;
mod report;

pub use config::Fallbacks;
pub use datomatic::{Checksums, DatomaticExtractor, DatomaticRecord};
pub use error::ReportError;
pub use fetch::{HttpFetcher, BROWSER_USER_AGENT, DEFAULT_TIMEOUT};
pub use report::Report;

/// Retrieves a document by URL. Any transport failure or non-success status
/// is an error.
#[async_trait::async_trait]
pub trait Fetcher {
    async fn fetch(&self, url: &str) -> Result<String, ReportError>;
}

/// Fetches one record page and turns it into a report.
pub async fn build_report<F>(
    fetcher: &F,
    extractor: &DatomaticExtractor,
    fallbacks: &Fallbacks,
    url: &str,
) -> Result<Report, ReportError>
where
    F: Fetcher + Sync,
{
    let html = fetcher.fetch(url).await?;
    info!("Fetched {} bytes from {}", html.len(), url);

    let record = extractor.extract(&html)?;
    info!(
        "Extracted {:?} (pkg: {}, rap: {})",
        record.title,
        !record.pkg.is_empty(),
        !record.rap.is_empty()
    );

    Ok(Report::new(record, url, fallbacks))
}

use std::path::Path;

use chrono::Local;
use reqwest::Client;
use tokio::time::sleep;

use crate::naming::build_filename;
use crate::parse::extract_records;
use crate::request::{download_to_file, request_page};
use crate::{info_time, warn_time, Config, Error, Record, Result};

/// Final tallies of the download stage.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DownloadSummary {
    pub succeeded: usize,
    pub failed: usize,
}

/// Fetches the whole catalog, then downloads every image it references.
/// Only fatal errors are returned; individual page and download failures end up in the logs
/// and in the returned summary.
pub async fn process_site(config: &Config) -> Result<DownloadSummary> {
    let start_time = Local::now();
    let client = Client::new();

    info_time!("Started fetching the catalog from {}", config.endpoint);
    let records = fetch_catalog(&client, config).await?;
    info_time!(start_time, "Collected {} records.", records.len());

    let download_start = Local::now();
    let summary = download_records(&client, config, &records).await?;
    info_time!(download_start, "Finished downloading.");

    Ok(summary)
}

/// Pages through the catalog and collects the records of every page, in page order.
///
/// Page 1 decides how many pages there are, so any failure on it is fatal.
/// A failing later page is logged and skipped.
pub async fn fetch_catalog(client: &Client, config: &Config) -> Result<Vec<Record>> {
    info_time!("Requesting page 1 to find the page count");
    let first_page = request_page(client, config, 1).await?;
    let Some(total_pages) = first_page.page_count() else {
        warn_time!("Paging info of page 1: {:?}", first_page.paging);
        return Err(Error::MissingPageCount);
    };
    info_time!("Total pages: {}", total_pages);

    let mut records = extract_records(&first_page, config);
    info_time!("Page 1/{}: {} records", total_pages, records.len());

    for page_num in 2..=total_pages {
        sleep(config.page_delay).await;

        let page = match request_page(client, config, page_num).await {
            Ok(page) => page,
            Err(e) => {
                warn_time!("Skipping page {}/{}: {}", page_num, total_pages, e);
                continue;
            }
        };
        let page_records = extract_records(&page, config);
        info_time!("Page {}/{}: {} records", page_num, total_pages, page_records.len());
        records.extend(page_records);
    }

    info_time!("DONE: {} records from {} pages", records.len(), total_pages);
    Ok(records)
}

/// Downloads every record into `config.output_dir`, one after another.
///
/// Failing to create the output directory is fatal, a failing download is only counted.
/// An empty record list doesn't touch the filesystem at all.
pub async fn download_records(
    client: &Client,
    config: &Config,
    records: &[Record],
) -> Result<DownloadSummary> {
    let mut summary = DownloadSummary::default();
    if records.is_empty() {
        info_time!("No records to download, skipping the download stage.");
        return Ok(summary);
    }

    let output_dir = config.output_dir.as_path();
    ensure_output_dir(output_dir).await?;
    info_time!("Downloading {} images into {}", records.len(), output_dir.display());

    let total = records.len();
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            sleep(config.download_delay).await;
        }

        let path = output_dir.join(build_filename(&record.index, &record.name, &record.image_url));
        info_time!("({}/{}) {} -> {}", i + 1, total, record.image_url, path.display());

        match download_to_file(client, config, &record.image_url, &path).await {
            Ok(()) => summary.succeeded += 1,
            Err(e) => {
                warn_time!("Download of {} failed: {}", record.image_url, e);
                summary.failed += 1;
            }
        }
    }

    info_time!("Succeeded: {}", summary.succeeded);
    info_time!("Failed: {}", summary.failed);
    if summary.failed > 0 {
        warn_time!("{} downloads failed, check the messages above.", summary.failed);
    }
    Ok(summary)
}

async fn ensure_output_dir(path: &Path) -> Result<()> {
    if tokio::fs::metadata(path).await.is_ok_and(|m| m.is_dir()) {
        return Ok(());
    }
    tokio::fs::create_dir_all(path)
        .await
        .map_err(|source| Error::CreateOutputDir {
            path: path.to_path_buf(),
            source,
        })?;
    info_time!("Created output directory {}", path.display());
    Ok(())
}

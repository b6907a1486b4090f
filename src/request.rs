use std::path::Path;

use reqwest::{Client, Response};
use tokio::{fs::File, io::AsyncWriteExt};

use crate::parse::{parse_page, CatalogPage};
use crate::{Config, Result};

/// Requests a catalog page and decodes it.
/// Error statuses are turned into errors before the body is read.
pub(crate) async fn request_page(
    client: &Client,
    config: &Config,
    page_num: u32,
) -> Result<CatalogPage> {
    let res = client
        .get(&config.endpoint)
        .query(&[("limit", config.page_size), ("page", page_num)])
        .timeout(config.page_timeout)
        .send()
        .await?
        .error_for_status()?;
    let body = res.text().await?;
    parse_page(&body, page_num)
}

/// Streams the body of `url` into a freshly created (or truncated) file at `path`.
///
/// The file is only touched once the response headers arrived with a success status,
/// so a failed request leaves an existing file alone. If the body breaks off midway,
/// the truncated file is removed.
pub(crate) async fn download_to_file(
    client: &Client,
    config: &Config,
    url: &str,
    path: &Path,
) -> Result<()> {
    let res = client
        .get(url)
        .timeout(config.download_timeout)
        .send()
        .await?
        .error_for_status()?;

    let mut file = File::create(path).await?;
    if let Err(e) = write_body(res, &mut file).await {
        drop(file);
        let _ = tokio::fs::remove_file(path).await;
        return Err(e);
    }
    Ok(())
}

async fn write_body(mut res: Response, file: &mut File) -> Result<()> {
    while let Some(chunk) = res.chunk().await? {
        file.write_all(&chunk).await?;
    }
    file.flush().await?;
    Ok(())
}

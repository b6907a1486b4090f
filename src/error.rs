use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Couldn't decode the JSON body of page {page}: {source}. Body starts with: {snippet}")]
    Decode {
        page: u32,
        #[source]
        source: serde_json::Error,
        snippet: String,
    },
    #[error("The catalog response doesn't report a page count.")]
    MissingPageCount,

    #[error("Couldn't create the output directory {}: {source}", .path.display())]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Io Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Reqwest Error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

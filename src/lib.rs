//! Mirrors a paginated remote image catalog into a local directory.
//!
//! The run has two sequential stages: [`process::fetch_catalog`] pages through the
//! catalog API and collects [`Record`]s, then [`process::download_records`] streams
//! every referenced image to disk. [`process::process_site`] chains both.

pub mod config;
mod error;
mod macros;
pub mod naming;
pub mod parse;
pub mod process;
mod request;

pub use config::Config;
pub use error::{Error, Result};
pub use parse::Record;

const ENDPOINT: &str = "https://zukan.pokemon.co.jp/zukan-api/api/search/";
const PAGE_SIZE: u32 = 64;
/// `image_s` is the small picture, `image_m` the medium one.
const IMAGE_KEY: &str = "image_s";
const INDEX_KEY: &str = "no";
const NAME_KEY: &str = "name";
const OUTPUT_DIR: &str = "pokemon_images";
const PAGE_DELAY_MS: u64 = 500;
const DOWNLOAD_DELAY_MS: u64 = 100;
const PAGE_TIMEOUT_SECS: u64 = 10;
const DOWNLOAD_TIMEOUT_SECS: u64 = 20;
/// How much of an undecodable body ends up in the diagnostic.
const BODY_SNIPPET_LEN: usize = 200;

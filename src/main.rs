use chrono::Local;
use gallery_mirror::{info_time, process::process_site, warn_time, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let start_time = Local::now();

    if let Err(e) = process_site(&Config::default()).await {
        warn_time!("FATAL: {}", e);
        std::process::exit(1);
    }
    info_time!(start_time, "Full program time:");
}

//! Bulk-upload the local template directory to the static-pages bucket.
//! Idempotent: re-running overwrites each page in place.

use clap::Parser;
use std::path::{Path, PathBuf};

use news_wire::application::ports::ObjectStore;
use news_wire::infrastructure::storage::S3ObjectStore;
use news_wire::Config;

#[derive(Parser)]
#[command(name = "upload-pages", about = "Upload static pages to the page bucket")]
struct Cli {
    /// Directory holding the pre-rendered pages
    #[arg(long, default_value = "templates")]
    dir: PathBuf,

    /// Override the target bucket
    #[arg(long)]
    bucket: Option<String>,
}

fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env();
    let bucket = cli
        .bucket
        .unwrap_or_else(|| config.static_pages_bucket.clone());

    let shared = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .load()
        .await;
    let store = S3ObjectStore::new(&shared, &config, bucket.clone());

    let mut uploaded = 0usize;
    for entry in std::fs::read_dir(&cli.dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let key = entry.file_name().to_string_lossy().to_string();
        let bytes = std::fs::read(&path)?;
        let content_type = content_type_for(&path);

        store
            .put(&key, bytes, content_type)
            .await
            .map_err(|e| anyhow::anyhow!("upload of {} failed: {}", key, e))?;

        println!("uploaded {} ({})", key, content_type);
        uploaded += 1;
    }

    println!("{} page(s) uploaded to bucket {}", uploaded, bucket);
    Ok(())
}

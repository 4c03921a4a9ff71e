use std::path::Path;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::config::ImportConfig;
use crate::extract::image;
use crate::render::{self, OutputDocument};
use crate::sequence::ScheduledPost;

pub struct MaterializeStats {
    pub written: usize,
    pub images: usize,
    pub failed: usize,
}

/// Write every scheduled post out, strictly in order: one post is fully
/// materialized (dirs, image fetch, document) before the next begins. A
/// failing post is logged and skipped; it never stops the batch.
pub async fn materialize_all(
    config: &ImportConfig,
    posts: &[ScheduledPost],
) -> Result<MaterializeStats> {
    let client = reqwest::Client::new();

    let pb = ProgressBar::new(posts.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec}, eta {eta})")?
            .progress_chars("=> "),
    );

    let mut stats = MaterializeStats {
        written: 0,
        images: 0,
        failed: 0,
    };

    for post in posts {
        let doc = render::render(post, config);
        match materialize_one(&client, config, &doc).await {
            Ok(fetched) => {
                stats.written += 1;
                if fetched {
                    stats.images += 1;
                }
            }
            Err(e) => {
                warn!("Failed to materialize {}: {}", doc.filename, e);
                stats.failed += 1;
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    info!(
        "Materialized {} documents ({} images, {} failures)",
        stats.written, stats.images, stats.failed
    );
    Ok(stats)
}

/// Returns whether an image was actually fetched. The document is written
/// either way, with the precomputed hero path; a missing image can be
/// backfilled by hand later.
async fn materialize_one(
    client: &reqwest::Client,
    config: &ImportConfig,
    doc: &OutputDocument,
) -> Result<bool> {
    let content_dir = config.content_root.join(doc.year.to_string());
    let asset_dir = config.asset_root.join(doc.year.to_string());
    tokio::fs::create_dir_all(&content_dir)
        .await
        .with_context(|| format!("creating {}", content_dir.display()))?;
    tokio::fs::create_dir_all(&asset_dir)
        .await
        .with_context(|| format!("creating {}", asset_dir.display()))?;

    let mut fetched = false;
    if let Some(url) = doc.image_url.as_deref() {
        if image::is_fetchable(url, &config.policy) {
            let dest = asset_dir.join(&doc.image_name);
            match fetch_image(client, url, &dest).await {
                Ok(()) => {
                    fetched = true;
                    info!("Downloaded image: {}", doc.image_name);
                }
                Err(e) => {
                    warn!(
                        "Failed to download image for {} ({}): {}",
                        doc.filename, doc.source_title, e
                    );
                }
            }
        }
    }

    let dest = content_dir.join(&doc.filename);
    tokio::fs::write(&dest, &doc.markdown)
        .await
        .with_context(|| format!("writing {}", dest.display()))?;
    info!("Created post: {}", dest.display());
    Ok(fetched)
}

async fn fetch_image(client: &reqwest::Client, url: &str, dest: &Path) -> Result<()> {
    let response = client.get(url).send().await?.error_for_status()?;
    let bytes = response.bytes().await?;
    tokio::fs::write(dest, &bytes).await?;
    Ok(())
}

// ── Tests ──

use std::path::Path;
use std::time::Instant;
use log::{debug, info, warn};
use crate::error::PlaylistError;
use crate::model::{ChannelRecord, Config, PlaylistStats};
use crate::processing::classifier::ChannelClassifier;
use crate::processing::renderer::M3uRenderer;
use crate::repository::m3u_repository::m3u_write_playlist;
use crate::utils::network::channels::{create_client, get_channels};
use crate::utils::sanitize_sensitive_info;

/// Classifies and renders an already fetched channel list.
pub fn process_channels(config: &Config, channels: Vec<ChannelRecord>) -> (String, PlaylistStats) {
    let malformed_count = channels.iter().filter(|c| c.is_malformed()).count();
    if malformed_count > 0 {
        warn!("{malformed_count} channels without name or link, using defaults");
    }

    let classifier = ChannelClassifier::from_config(&config.classifier);
    let categorized = classifier.group(channels);
    if categorized.is_empty() {
        warn!("Channel list is empty, the playlist only contains the header");
    } else {
        info!("Categorized channels into {} categories", categorized.categories_present());
    }
    for (category, channels) in categorized.non_empty() {
        if config.render.include_promotional_entry {
            info!("   {category}: {} channels (+1 {})", channels.len(), config.render.promotional_entry.name);
        } else {
            info!("   {category}: {} channels", channels.len());
        }
    }

    let mut stats = PlaylistStats::new(&categorized, config.render.include_promotional_entry);
    stats.malformed_count = malformed_count;

    let content = M3uRenderer::new(&config.render).render(&categorized);
    (content, stats)
}

/// Runs fetch, classify, render and write once.
/// Nothing is written when the channel list can't be fetched.
pub async fn exec_processing(config: &Config) -> Result<PlaylistStats, PlaylistError> {
    let start_time = Instant::now();
    info!("Fetching channel list from {}", sanitize_sensitive_info(&config.source.url));
    let client = create_client(&config.source, &config.render.user_agent)?;
    let channels = get_channels(&client, &config.source).await?;
    info!("Found {} channels", channels.len());

    let (content, mut stats) = process_channels(config, channels);

    let m3u_path = Path::new(&config.output.filename);
    debug!("Writing playlist {}", m3u_path.display());
    m3u_write_playlist(m3u_path, &content)?;

    stats.millis_took = u64::try_from(start_time.elapsed().as_millis()).unwrap_or(u64::MAX);
    info!("Playlist created: {}", m3u_path.display());
    if stats.promotional_count > 0 {
        info!("Total entries: {} ({} + {} {})", stats.entry_count(), stats.channel_count,
              stats.promotional_count, config.render.promotional_entry.name);
    } else {
        info!("Total entries: {}", stats.entry_count());
    }
    Ok(stats)
}

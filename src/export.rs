use anyhow::{Context, Result};
use csv::WriterBuilder;
use log::{debug, error, info};
use std::fs;
use std::path::Path;

use crate::common::types::UtmParameterSet;

/// Fixed export column order. Batch input (`--src-files`) reads the same
/// columns back, so an exported file is valid batch input.
pub const EXPORT_HEADERS: &[&str] = &[
    "base_url",
    "utm_channel",
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_content",
    "utm_term",
    "trackingid",
    "newsletter_slug",
    "category",
    "team",
    "tags",
    "country",
    "language",
    "created_at",
];

/// Default export filename, stamped with today's date.
pub fn default_export_filename() -> String {
    format!(
        "utm_history_{}.csv",
        chrono::Utc::now().format("%Y-%m-%d")
    )
}

pub fn ensure_dir_exists(path: &str) -> Result<()> {
    let path = Path::new(path);
    if !path.is_dir() {
        debug!("Directory {:?} does not exist, creating...", path);
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Resolve the directory exports land in: an env-var indirection, the
/// configured path, or an interactive prompt as a last resort.
pub fn resolve_export_dir(config_directory: &str) -> Result<String> {
    if config_directory == "DEFAULT_UTM_EXPORT_LOCATION" {
        let directory = std::env::var("DEFAULT_UTM_EXPORT_LOCATION")
            .context("DEFAULT_UTM_EXPORT_LOCATION environment variable not set")?;

        if directory.is_empty() {
            return Err(anyhow::anyhow!(
                "DEFAULT_UTM_EXPORT_LOCATION environment variable is empty"
            ));
        }

        info!(
            "Using export directory from environment variable: {}",
            directory
        );
        Ok(directory)
    } else if !config_directory.is_empty() {
        info!("Using export directory set in configuration: {}", config_directory);
        Ok(config_directory.to_string())
    } else {
        println!(
            "Enter the full path to export to. Hit Enter for current dir ({})",
            std::env::current_dir()?.display()
        );

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;
        let directory = input.trim();

        let mut final_dir = if directory.is_empty() {
            std::env::current_dir()?.to_string_lossy().to_string()
        } else {
            directory.to_string()
        };

        while !Path::new(&final_dir).is_dir() {
            error!("Invalid path: '{}'. Try again.", final_dir);
            input.clear();
            std::io::stdin().read_line(&mut input)?;
            final_dir = input.trim().to_string();
        }

        info!("User selected export directory: {}", final_dir);
        Ok(final_dir)
    }
}

fn record_row(set: &UtmParameterSet, tag_delimiter: &str) -> Vec<String> {
    vec![
        set.base_url.clone(),
        set.params.channel.clone(),
        set.params.source.clone(),
        set.params.medium.clone(),
        set.params.campaign.clone(),
        set.params.content.clone().unwrap_or_default(),
        set.params.term.clone().unwrap_or_default(),
        set.params.tracking_id.clone().unwrap_or_default(),
        set.params.newsletter_slug.clone().unwrap_or_default(),
        set.metadata.category.clone(),
        set.metadata.team.clone(),
        set.metadata.tags.join(tag_delimiter),
        set.metadata.country.clone().unwrap_or_default(),
        set.metadata.language.clone().unwrap_or_default(),
        set.metadata.created_at.clone(),
    ]
}

/// Write parameter sets as delimited text, one row per set, fields verbatim.
pub fn export_csv(
    sets: &[UtmParameterSet],
    path: &Path,
    delimiter: u8,
    tag_delimiter: &str,
) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .from_path(path)
        .with_context(|| format!("Failed to open export file: {}", path.display()))?;

    writer.write_record(EXPORT_HEADERS)?;
    for set in sets {
        writer.write_record(record_row(set, tag_delimiter))?;
    }
    writer.flush()?;

    info!("Exported {} record(s) to {}", sets.len(), path.display());
    Ok(())
}

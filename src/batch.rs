use anyhow::{Context, Result};
use csv::StringRecord;
use log::{error, warn};
use std::fs::File;
use std::path::Path;

use crate::common::time_utils::current_timestamp;
use crate::common::types::{UtmMetadata, UtmParams, UtmParameterSet};
use crate::export::EXPORT_HEADERS;

fn field(headers: &[String], record: &StringRecord, name: &str) -> String {
    headers
        .iter()
        .position(|h| h == name)
        .and_then(|ix| record.get(ix))
        .unwrap_or("")
        .trim()
        .to_string()
}

fn opt_field(headers: &[String], record: &StringRecord, name: &str) -> Option<String> {
    let value = field(headers, record, name);
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Read parameter sets from a CSV file using the export column layout.
/// Columns that are not part of the layout become extra query parameters.
/// A missing file yields an empty list so one bad path does not abort a
/// multi-file batch.
pub fn sets_from_file(file_path: &str, tag_delimiter: &str) -> Result<Vec<UtmParameterSet>> {
    let path = Path::new(file_path);
    if !path.exists() {
        error!("File '{}' not found. Skipping...", file_path);
        return Ok(Vec::new());
    }

    let file = File::open(path).with_context(|| format!("Failed to open {}", file_path))?;
    let mut reader = csv::Reader::from_reader(file);

    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("Failed to read headers from {}", file_path))?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();

    let mut sets = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("Bad row {} in {}", row + 2, file_path))?;

        let base_url = field(&headers, &record, "base_url");
        if base_url.is_empty() {
            warn!("Row {} of {} has no base_url. Skipping...", row + 2, file_path);
            continue;
        }

        let mut params = UtmParams {
            channel: field(&headers, &record, "utm_channel"),
            source: field(&headers, &record, "utm_source"),
            medium: field(&headers, &record, "utm_medium"),
            campaign: field(&headers, &record, "utm_campaign"),
            content: opt_field(&headers, &record, "utm_content"),
            term: opt_field(&headers, &record, "utm_term"),
            tracking_id: opt_field(&headers, &record, "trackingid"),
            newsletter_slug: opt_field(&headers, &record, "newsletter_slug"),
            ..Default::default()
        };

        for (ix, header) in headers.iter().enumerate() {
            if EXPORT_HEADERS.contains(&header.as_str()) || header == "notes" {
                continue;
            }
            if let Some(value) = record.get(ix) {
                let value = value.trim();
                if !value.is_empty() {
                    params.push_extra(header.clone(), value);
                }
            }
        }

        let tags = field(&headers, &record, "tags")
            .split(tag_delimiter)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();

        let created_at = match opt_field(&headers, &record, "created_at") {
            Some(value) => value,
            None => current_timestamp(),
        };

        sets.push(UtmParameterSet {
            base_url,
            params,
            metadata: UtmMetadata {
                category: field(&headers, &record, "category"),
                team: field(&headers, &record, "team"),
                tags,
                country: opt_field(&headers, &record, "country"),
                language: opt_field(&headers, &record, "language"),
                notes: opt_field(&headers, &record, "notes"),
                created_at,
            },
        });
    }

    Ok(sets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_sets_from_file_basic() {
        let file = write_csv(
            "base_url,utm_channel,utm_source,utm_medium,utm_campaign,tags\n\
             https://example.com,search,google,cpc,verano_2025,summer;sale\n\
             https://example.org,social,facebook,social,invierno_2025,\n",
        );

        let sets = sets_from_file(file.path().to_str().unwrap(), ";").unwrap();
        assert_eq!(sets.len(), 2);
        assert_eq!(sets[0].params.source, "google");
        assert_eq!(sets[0].metadata.tags, vec!["summer", "sale"]);
        assert!(sets[1].metadata.tags.is_empty());
        assert!(!sets[0].metadata.created_at.is_empty());
    }

    #[test]
    fn test_sets_from_file_unknown_columns_become_extras() {
        let file = write_csv(
            "base_url,utm_source,utm_medium,utm_campaign,promo_code\n\
             https://example.com,google,cpc,verano_2025,SUMMER25\n",
        );

        let sets = sets_from_file(file.path().to_str().unwrap(), ";").unwrap();
        assert_eq!(
            sets[0].params.extra,
            vec![("promo_code".to_string(), "SUMMER25".to_string())]
        );
    }

    #[test]
    fn test_sets_from_file_skips_rows_without_base_url() {
        let file = write_csv(
            "base_url,utm_source\n\
             ,google\n\
             https://example.com,bing\n",
        );

        let sets = sets_from_file(file.path().to_str().unwrap(), ";").unwrap();
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].params.source, "bing");
    }

    #[test]
    fn test_sets_from_file_missing_file() {
        let sets = sets_from_file("/nonexistent/batch.csv", ";").unwrap();
        assert!(sets.is_empty());
    }

    #[test]
    fn test_sets_from_file_preserves_given_created_at() {
        let file = write_csv(
            "base_url,utm_source,created_at\n\
             https://example.com,google,2025-07-01 10:00:00\n",
        );

        let sets = sets_from_file(file.path().to_str().unwrap(), ";").unwrap();
        assert_eq!(sets[0].metadata.created_at, "2025-07-01 10:00:00");
    }
}

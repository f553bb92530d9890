use anyhow::Result;
use log::{error, info};
use std::io::{self, Write};

use crate::batch;
use crate::cli_args::CommandLineArgs;
use crate::common::time_utils::current_timestamp;
use crate::common::types::{UtmMetadata, UtmParams, UtmParameterSet};
use crate::settings::Settings;
use crate::utm_utils::options;
use crate::utm_utils::normalize;

/// Collects the parameter sets to build this run: from CLI flags, from
/// batch CSV files, or interactively when neither was given.
pub struct ParamSetInput {
    pub sets: Vec<UtmParameterSet>,
}

impl ParamSetInput {
    pub fn new(settings: &Settings, cli_args: &CommandLineArgs) -> Result<Self> {
        let mut input = ParamSetInput { sets: Vec::new() };
        input.collect_sets(settings, cli_args)?;

        if input.sets.is_empty() {
            input.sets.push(prompt_for_set(settings)?);
        }

        Ok(input)
    }

    fn collect_sets(&mut self, settings: &Settings, cli_args: &CommandLineArgs) -> Result<()> {
        if cli_args.base_url.is_some() {
            self.sets.push(set_from_args(cli_args));
        }

        for file_path in &cli_args.src_files {
            self.sets
                .extend(batch::sets_from_file(file_path, &settings.tag_delimiter)?);
        }

        if !self.sets.is_empty() {
            info!("Collected {} parameter set(s)", self.sets.len());
        }
        Ok(())
    }
}

/// Build one parameter set from CLI flags. The campaign name is normalized
/// into the slug alphabet; other values are passed through as supplied.
fn set_from_args(args: &CommandLineArgs) -> UtmParameterSet {
    let mut params = UtmParams {
        channel: args.channel.clone().unwrap_or_default(),
        source: args.source.clone().unwrap_or_default(),
        medium: args.medium.clone().unwrap_or_default(),
        campaign: args.campaign.as_deref().map(normalize).unwrap_or_default(),
        content: args.content.clone(),
        term: args.term.clone(),
        tracking_id: args.tracking_id.clone(),
        newsletter_slug: args.newsletter_slug.clone(),
        ..Default::default()
    };
    for (key, value) in args.extra_params() {
        params.push_extra(key, value);
    }

    UtmParameterSet {
        base_url: args.base_url.clone().unwrap_or_default(),
        params,
        metadata: UtmMetadata {
            category: args.category.clone().unwrap_or_default(),
            team: args.team.clone().unwrap_or_default(),
            tags: args.tags.clone(),
            country: args.country.clone(),
            language: args.language.clone(),
            notes: args.notes.clone(),
            created_at: current_timestamp(),
        },
    }
}

fn prompt_required(label: &str) -> Result<String> {
    println!("{}:", label);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let mut value = input.trim().to_string();

    while value.is_empty() {
        error!("No input provided. Try again.");
        input.clear();
        io::stdin().read_line(&mut input)?;
        value = input.trim().to_string();
    }

    Ok(value)
}

fn prompt_optional(label: &str) -> Result<Option<String>> {
    println!("{} (Enter to skip):", label);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let value = input.trim().to_string();
    Ok(if value.is_empty() { None } else { Some(value) })
}

fn catalog_hint(catalog: &[options::CatalogOption]) -> String {
    catalog
        .iter()
        .map(|o| o.value)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Walk the user through the mandatory fields, suggesting catalog values,
/// then the advanced fields when enabled in settings.
fn prompt_for_set(settings: &Settings) -> Result<UtmParameterSet> {
    let base_url = prompt_required("Destination URL (e.g. https://example.com/landing)")?;

    println!("Known channels: {}", catalog_hint(options::CHANNELS));
    let channel = prompt_required("Channel")?;

    println!("Known sources: {}", catalog_hint(options::SOURCES));
    let source = prompt_required("Source")?;

    println!(
        "Suggested mediums for '{}': {}",
        source,
        catalog_hint(options::medium_options_for(&source))
    );
    let medium = prompt_required("Medium")?;

    let campaign = normalize(&prompt_required("Campaign name")?);
    println!("Campaign will be tracked as '{}'", campaign);

    let mut params = UtmParams {
        channel,
        source,
        medium,
        campaign,
        ..Default::default()
    };
    let mut metadata = UtmMetadata {
        created_at: current_timestamp(),
        ..Default::default()
    };

    if settings.advanced_mode {
        params.content = prompt_optional("Content variant")?;
        params.term = prompt_optional("Search term")?;
        params.tracking_id = prompt_optional("Tracking id")?;
        params.newsletter_slug = prompt_optional("Newsletter slug")?;
        metadata.country = prompt_optional("Country code")?;
        metadata.language = prompt_optional("Language code")?;
        metadata.notes = prompt_optional("Notes")?;
    }

    if let Some(category) = prompt_optional("Category")? {
        metadata.category = category;
    }
    if let Some(team) = prompt_optional("Team")? {
        metadata.team = team;
    }
    if let Some(tags) = prompt_optional("Tags (comma-separated)")? {
        metadata.tags = tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
    }

    Ok(UtmParameterSet {
        base_url,
        params,
        metadata,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args_from(argv: &[&str]) -> CommandLineArgs {
        CommandLineArgs::parse_from(argv)
    }

    #[test]
    fn test_set_from_args_normalizes_campaign_only() {
        let args = args_from(&[
            "utm-builder",
            "--base-url",
            "https://example.com",
            "--channel",
            "search",
            "--source",
            "Google",
            "--medium",
            "cpc",
            "--campaign",
            "Campaña Verano",
        ]);

        let set = set_from_args(&args);
        assert_eq!(set.params.campaign, "campana_verano");
        assert_eq!(set.params.source, "Google", "source passes through verbatim");
        assert!(!set.metadata.created_at.is_empty());
    }

    #[test]
    fn test_set_from_args_carries_extras_and_metadata() {
        let args = args_from(&[
            "utm-builder",
            "--base-url",
            "https://example.com",
            "--campaign",
            "verano_2025",
            "--param",
            "promo_code=SUMMER25",
            "--team",
            "growth",
            "--tags",
            "summer,sale",
        ]);

        let set = set_from_args(&args);
        assert_eq!(
            set.params.extra,
            vec![("promo_code".to_string(), "SUMMER25".to_string())]
        );
        assert_eq!(set.metadata.team, "growth");
        assert_eq!(set.metadata.tags, vec!["summer", "sale"]);
    }

    #[test]
    fn test_collect_sets_flags_then_files() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            b"base_url,utm_source,utm_medium,utm_campaign\n\
              https://example.org,facebook,social,invierno_2025\n",
        )
        .unwrap();

        let args = args_from(&[
            "utm-builder",
            "--base-url",
            "https://example.com",
            "--campaign",
            "verano_2025",
            "--src-files",
            file.path().to_str().unwrap(),
        ]);

        let input = ParamSetInput::new(&Settings::default(), &args).unwrap();
        assert_eq!(input.sets.len(), 2);
        assert_eq!(input.sets[0].base_url, "https://example.com");
        assert_eq!(input.sets[1].base_url, "https://example.org");
    }
}

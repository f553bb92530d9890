use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use std::path::PathBuf;
use std::time::Instant;

use utm_builder::auth::{self, AuthSession};
use utm_builder::cli_args::CommandLineArgs;
use utm_builder::common::types::UtmParameterSet;
use utm_builder::export;
use utm_builder::history::group_by_recency;
use utm_builder::input::ParamSetInput;
use utm_builder::remote::{RemoteError, RemoteHistory, UtmRecord};
use utm_builder::settings::Settings;
use utm_builder::store::{self, FileStore, KeyValueStore, MemoryStore};
use utm_builder::utm_utils::{build_utm_url, validate, Validation};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let start_time = Instant::now();
    info!("UTM Builder v{} starting up...", env!("CARGO_PKG_VERSION"));

    debug!("Parsing command line arguments...");
    let cli_args = CommandLineArgs::parse_args();

    debug!("Loading application settings...");
    let settings = load_settings(&cli_args.settings)?;
    info!("Settings loaded successfully");

    let mut kv = open_store();
    show_onboarding_on_first_run(kv.as_mut());

    let session = sign_in_if_configured(&settings);
    let remote = RemoteHistory::new(&settings.auth.api_base_url, &settings.auth.api_key, session);

    if cli_args.history {
        show_history(&remote, kv.as_ref());
        return Ok(());
    }

    if let Some(export_arg) = &cli_args.export {
        export_history(&remote, kv.as_ref(), &settings, export_arg.as_deref())?;
        return Ok(());
    }

    info!("Collecting parameter sets to build...");
    let all_sets = ParamSetInput::new(&settings, &cli_args)?.sets;
    info!("Found {} parameter set(s) to process", all_sets.len());

    let (successful_count, failed_count) = process_all_sets(
        all_sets,
        &settings,
        kv.as_mut(),
        &remote,
        cli_args.no_save,
    );

    let elapsed = start_time.elapsed();
    info!(
        "Processing completed in {:.2} seconds",
        elapsed.as_secs_f64()
    );

    if successful_count == 0 && failed_count > 0 {
        return Err(anyhow::anyhow!("No valid parameter sets"));
    }
    Ok(())
}

fn load_settings(settings_file: &str) -> Result<Settings> {
    let settings = Settings::load_or_default(settings_file)?;

    if settings.update_check_on_startup {
        if let Err(e) = settings.check_for_updates() {
            warn!("Failed to check for updates: {}", e);
        }
    }

    Ok(settings)
}

fn open_store() -> Box<dyn KeyValueStore> {
    match FileStore::open_default() {
        Ok(file_store) => {
            debug!("Local state at {}", file_store.path().display());
            Box::new(file_store)
        }
        Err(e) => {
            warn!("Could not open local state, continuing without it: {}", e);
            Box::new(MemoryStore::default())
        }
    }
}

fn show_onboarding_on_first_run(kv: &mut dyn KeyValueStore) {
    if store::onboarding_seen(kv) {
        return;
    }

    println!("Welcome to UTM Builder.");
    println!("Build tracked campaign URLs that follow one naming convention:");
    println!("  1. Pick a channel, source, and medium (see --help for flags).");
    println!("  2. Name the campaign; names are normalized into snake_case.");
    println!("  3. The assembled URL is printed and kept in your history.");
    println!("Run with --history to browse past links, --export to get a CSV.");
    println!();

    if let Err(e) = store::mark_onboarding_seen(kv) {
        warn!("Could not record onboarding state: {}", e);
    }
}

fn sign_in_if_configured(settings: &Settings) -> Option<AuthSession> {
    if settings.offline || !settings.auth.login_on_startup {
        debug!("Skipping authentication (offline or login_on_startup unset)");
        return None;
    }

    info!("Attempting backend authentication...");
    match auth::sign_in(
        &settings.auth.api_base_url,
        &settings.auth.api_key,
        &settings.auth.email,
        &settings.auth.password,
    ) {
        Ok(session) => {
            info!("Backend authentication successful");
            Some(session)
        }
        Err(e) => {
            warn!("Could not sign in. Proceeding with local history only: {}", e);
            None
        }
    }
}

/// History to display or export: the remote store when signed in, the local
/// cache otherwise.
fn gather_history(remote: &RemoteHistory, kv: &dyn KeyValueStore) -> Vec<UtmParameterSet> {
    match remote.list_records() {
        Ok(records) => records.into_iter().map(UtmRecord::into_set).collect(),
        Err(RemoteError::NotAuthenticated) => {
            debug!("Not signed in; using local history");
            store::local_history(kv)
        }
        Err(e) => {
            warn!("Could not fetch remote history, using local: {}", e);
            store::local_history(kv)
        }
    }
}

fn show_history(remote: &RemoteHistory, kv: &dyn KeyValueStore) {
    let sets = gather_history(remote, kv);
    if sets.is_empty() {
        println!("No UTM links in the history yet.");
        return;
    }

    let grouped = group_by_recency(sets, chrono::Utc::now().naive_utc());
    for (label, entries) in grouped.sections() {
        println!("{}:", label);
        for set in entries {
            match build_utm_url(&set.base_url, &set.params) {
                Ok(url) => println!("  {}  {}", set.metadata.created_at, url),
                Err(_) => println!("  {}  {}", set.metadata.created_at, set.base_url),
            }
        }
        println!();
    }
}

fn export_history(
    remote: &RemoteHistory,
    kv: &dyn KeyValueStore,
    settings: &Settings,
    path_arg: Option<&str>,
) -> Result<()> {
    let sets = gather_history(remote, kv);
    if sets.is_empty() {
        warn!("Nothing to export: the history is empty");
        return Ok(());
    }

    let path = match path_arg {
        Some(path) => PathBuf::from(path),
        None => {
            let dir = export::resolve_export_dir(&settings.default_export_location)?;
            PathBuf::from(dir).join(export::default_export_filename())
        }
    };
    let path = if path.is_dir() {
        path.join(export::default_export_filename())
    } else {
        path
    };

    export::export_csv(
        &sets,
        &path,
        settings.export_delimiter_byte(),
        &settings.tag_delimiter,
    )
}

fn create_progress_bar(total: usize) -> ProgressBar {
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({eta}) {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb
}

fn process_all_sets(
    all_sets: Vec<UtmParameterSet>,
    settings: &Settings,
    kv: &mut dyn KeyValueStore,
    remote: &RemoteHistory,
    no_save: bool,
) -> (usize, usize) {
    let total = all_sets.len();
    let batch_mode = total > 1;
    let pb = if batch_mode {
        Some(create_progress_bar(total))
    } else {
        None
    };

    let mut successful_count = 0;
    let mut failed_count = 0;

    for (i, set) in all_sets.into_iter().enumerate() {
        if let Some(pb) = &pb {
            pb.set_message(format!("Building link {}/{}", i + 1, total));
        }

        match process_single_set(set, settings, kv, remote, no_save) {
            Ok(url) => {
                successful_count += 1;
                match &pb {
                    Some(pb) => pb.println(url),
                    None => println!("{}", url),
                }
            }
            Err(e) => {
                failed_count += 1;
                warn!("Skipping set {}/{}: {}", i + 1, total, e);
            }
        }

        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }

    if let Some(pb) = &pb {
        pb.finish_with_message(format!(
            "Completed! {} successful, {} failed",
            successful_count, failed_count
        ));
    }

    (successful_count, failed_count)
}

fn process_single_set(
    set: UtmParameterSet,
    settings: &Settings,
    kv: &mut dyn KeyValueStore,
    remote: &RemoteHistory,
    no_save: bool,
) -> Result<String> {
    if let Validation::Invalid { reason } = validate(&set) {
        return Err(anyhow::anyhow!("{}", reason));
    }

    let url = build_utm_url(&set.base_url, &set.params)?;

    if !no_save {
        if let Err(e) = store::push_local_history(kv, &set) {
            warn!("Could not update local history: {}", e);
        }

        if !settings.offline {
            match remote.save_record(&UtmRecord::from_set(&set, &url)) {
                Ok(stored) => debug!(
                    "Synced record {} to the backend",
                    stored.id.as_deref().unwrap_or("?")
                ),
                Err(RemoteError::NotAuthenticated) => {
                    debug!("Not signed in; record kept locally only")
                }
                Err(e) => warn!("Could not sync record to the backend: {}", e),
            }
        }
    }

    Ok(url)
}

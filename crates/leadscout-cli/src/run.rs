//! `run` and `settings` command handlers.
//!
//! Discovery failures that make the whole run meaningless (no API key, a
//! failed Nearby Search) are returned as errors. Per-place detail failures
//! are handled inside [`leadscout_places::discover_nearby`].

use leadscout_core::{filter_leads, AppConfig, CanonicalLead};
use leadscout_places::{discover_nearby, normalize_place, NearbySearchRequest, PlacesClient};

use crate::report::{OutputFormat, RunReport};

/// Discover places around the office, normalize them, filter them, and
/// print a report.
///
/// `dry_run` on the command line and `operational.dry_run` in settings are
/// combined: either one stops the run before any API call.
///
/// # Errors
///
/// Returns an error if the API key is missing, the client cannot be built,
/// the Nearby Search fails, or the JSON report cannot be serialized.
pub(crate) async fn run_discovery(
    config: &AppConfig,
    dry_run: bool,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let settings = &config.settings;
    let request = NearbySearchRequest {
        location: config.office_location,
        radius_meters: settings.search.radius_meters(),
        place_type: settings.search.place_type.clone(),
        language: settings.search.language.clone(),
    };

    tracing::info!("starting discovery phase");

    if dry_run || settings.operational.dry_run {
        tracing::info!("dry run enabled; skipping Places API calls");
        println!(
            "dry-run: would search for '{}' within {}m of {} (details: {})",
            request.place_type,
            request.radius_meters,
            request.location,
            settings.search.include_details
        );
        return Ok(());
    }

    let api_key = config
        .google_places_api_key
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("GOOGLE_PLACES_API_KEY is required to run discovery"))?;

    let client = build_client(config, api_key)?;
    let raw = discover_nearby(&client, &request, settings.search.include_details).await?;

    let leads: Vec<CanonicalLead> = raw.iter().map(normalize_place).collect();
    let discovered = leads.len();
    tracing::info!(discovered, "discovered leads");

    let result = filter_leads(leads, &config.office_location, &settings.filter_config());
    tracing::info!(
        ready = result.qualified.len(),
        excluded = result.excluded.len(),
        "leads ready for enrichment"
    );

    let report = RunReport::new(
        config.office_location,
        settings.search.radius_km,
        discovered,
        result,
    );
    print!("{}", report.render(format)?);
    Ok(())
}

fn build_client(config: &AppConfig, api_key: &str) -> anyhow::Result<PlacesClient> {
    let client = match config.places_base_url.as_deref() {
        Some(base_url) => PlacesClient::with_base_url(
            api_key,
            config.request_timeout_secs,
            &config.user_agent,
            base_url,
        ),
        None => PlacesClient::new(api_key, config.request_timeout_secs, &config.user_agent),
    };
    client.map_err(|e| anyhow::anyhow!("failed to build Places client: {e}"))
}

/// Print the effective settings as YAML.
///
/// # Errors
///
/// Returns an error if the settings cannot be serialized.
pub(crate) fn print_settings(config: &AppConfig) -> anyhow::Result<()> {
    println!("# source: {}", config.settings_path.display());
    print!("{}", serde_yaml::to_string(&config.settings)?);
    Ok(())
}

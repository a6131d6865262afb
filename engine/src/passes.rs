//! The five synchronization passes.
//!
//! Passes run sequentially and each one resolves its own region, so a
//! section the host has not rendered only costs that section. Inside a
//! pass, bulk defaults are applied before the record's own values, which
//! means the record always wins for the fields it names.

use profile_sync_core::{PlayerRecord, Tier, keys, leading_integer};
use tracing::{info, warn};

use crate::config::SyncConfig;
use crate::controls::Synchronizer;
use crate::error::Result;
use crate::report::{FieldStatus, PassKind, SyncReport};
use crate::tree::ManagedHost;

/// Applies `record` onto `host` and reports what happened to every field.
///
/// Missing sections, labels and options end up in the report. Only an
/// error raised by the host aborts the run.
///
/// # Examples
///
/// ```
/// use profile_sync_engine::config::SyncConfig;
/// use profile_sync_engine::document::{FormDocument, NodeSpec};
/// use profile_sync_engine::report::{FieldStatus, PassKind};
/// use profile_sync_engine::synchronize;
/// use profile_sync_parser::parse_record;
///
/// let mut form = FormDocument::from_spec(&NodeSpec::element(
///     "main",
///     vec![
///         NodeSpec::element("h2", vec![NodeSpec::text("Player Info")]),
///         NodeSpec::element(
///             "div",
///             vec![NodeSpec::element(
///                 "label",
///                 vec![NodeSpec::text("Age"), NodeSpec::text_input("")],
///             )],
///         ),
///     ],
/// ));
/// let record = parse_record("Age: 36");
/// let config = SyncConfig::default().immediate();
///
/// let runtime = tokio::runtime::Builder::new_current_thread()
///     .enable_time()
///     .build()
///     .unwrap();
/// let report = runtime
///     .block_on(synchronize(&mut form, &record, &config))
///     .unwrap();
///
/// assert_eq!(report.outcome(PassKind::Info, "Age"), Some(&FieldStatus::Applied));
/// assert_eq!(report.missing_sections().len(), 4);
/// ```
pub async fn synchronize<H: ManagedHost>(
    host: &mut H,
    record: &PlayerRecord,
    config: &SyncConfig,
) -> Result<SyncReport> {
    let mut sync = Synchronizer::new(host, config.timing.clone());
    let mut report = SyncReport::new();

    info_pass(&mut sync, record, config, &mut report).await?;
    position_pass(&mut sync, record, config, &mut report).await?;
    ability_pass(&mut sync, record, config, &mut report).await?;
    flag_pass(
        &mut sync,
        PassKind::Skills,
        &config.sections.skills,
        record.enabled_skills(),
        &mut report,
    )
    .await?;
    flag_pass(
        &mut sync,
        PassKind::ComStyles,
        &config.sections.com_styles,
        record.enabled_com_styles(),
        &mut report,
    )
    .await?;

    info!(
        applied = report.applied_count(),
        failed = report.failures().count(),
        "Synchronization finished"
    );
    Ok(report)
}

fn region_of<H: ManagedHost>(
    sync: &Synchronizer<'_, H>,
    pass: PassKind,
    title: &str,
    report: &mut SyncReport,
) -> Option<H::Node> {
    let region = sync.find_section(title);
    if region.is_none() {
        warn!(%pass, title, "Section not found, skipping pass");
        report.finish_pass(pass, false, 0);
    }
    region
}

fn finish(report: &mut SyncReport, pass: PassKind, bulk_changed: usize) {
    let applied = report
        .fields
        .iter()
        .filter(|outcome| outcome.pass == pass && outcome.status.is_applied())
        .count();
    info!(%pass, applied, bulk_changed, "Pass finished");
    report.finish_pass(pass, true, bulk_changed);
}

fn write_status(has_value: bool, written: bool) -> FieldStatus {
    match (has_value, written) {
        (false, _) => FieldStatus::NoValue,
        (true, true) => FieldStatus::Applied,
        (true, false) => FieldStatus::NotFound,
    }
}

async fn set_text<H: ManagedHost>(
    sync: &mut Synchronizer<'_, H>,
    region: H::Node,
    pass: PassKind,
    label: &str,
    value: Option<&str>,
    report: &mut SyncReport,
) -> Result<()> {
    let written = sync.set_text_value(region, label, value).await?;
    report.record(pass, label, write_status(value.is_some(), written));
    Ok(())
}

async fn set_radio<H: ManagedHost>(
    sync: &mut Synchronizer<'_, H>,
    region: H::Node,
    pass: PassKind,
    label: &str,
    value: Option<&str>,
    report: &mut SyncReport,
) -> Result<()> {
    let written = match value {
        Some(value) => sync.set_radio_option(region, label, value).await?,
        None => false,
    };
    report.record(pass, label, write_status(value.is_some(), written));
    Ok(())
}

async fn select_option<H: ManagedHost>(
    sync: &mut Synchronizer<'_, H>,
    region: H::Node,
    label: &str,
    value: Option<&str>,
    fallback: &str,
    match_full_subtree: bool,
) -> Result<FieldStatus> {
    let Some(value) = value.filter(|value| !value.is_empty()) else {
        return Ok(FieldStatus::NoValue);
    };
    let chosen = sync
        .select_combobox_option(region, label, value, Some(fallback), match_full_subtree)
        .await?;
    Ok(match chosen {
        Some(option) if option == value => FieldStatus::Applied,
        Some(option) => {
            warn!(label, requested = value, selected = %option, "Selected fallback option");
            FieldStatus::AppliedFallback { option }
        }
        None => FieldStatus::NotFound,
    })
}

async fn info_pass<H: ManagedHost>(
    sync: &mut Synchronizer<'_, H>,
    record: &PlayerRecord,
    config: &SyncConfig,
    report: &mut SyncReport,
) -> Result<()> {
    let pass = PassKind::Info;
    let Some(region) = region_of(sync, pass, &config.sections.info, report) else {
        return Ok(());
    };
    let labels = &config.info;
    let shirt_name = record.basic_value(keys::SHIRT_NAME);

    for (label, value) in [
        (&labels.name, record.basic_value(keys::NAME)),
        (&labels.club_shirt_name, shirt_name),
        (&labels.national_shirt_name, shirt_name),
        (&labels.age, record.basic_value(keys::AGE)),
    ] {
        set_text(sync, region, pass, label, value, report).await?;
    }

    set_radio(
        sync,
        region,
        pass,
        &labels.foot,
        record.basic_value(keys::FOOT),
        report,
    )
    .await?;
    set_text(
        sync,
        region,
        pass,
        &labels.reputation,
        record.basic_value(keys::REPUTATION),
        report,
    )
    .await?;

    let nationality = select_option(
        sync,
        region,
        &labels.nationality,
        record.basic_value(keys::NATIONALITY),
        &config.fallbacks.nationality,
        false,
    )
    .await?;
    report.record(pass, &labels.nationality, nationality);

    let height = record
        .appearance_value(keys::HEIGHT)
        .and_then(leading_integer)
        .map(|value| value.to_string());
    let weight = record
        .appearance_value(keys::WEIGHT)
        .and_then(leading_integer)
        .map(|value| value.to_string());
    set_text(sync, region, pass, &labels.height, height.as_deref(), report).await?;
    set_text(sync, region, pass, &labels.weight, weight.as_deref(), report).await?;

    let playing_style = select_option(
        sync,
        region,
        &labels.playing_style,
        record.playing_style.as_deref(),
        &config.fallbacks.playing_style,
        true,
    )
    .await?;
    report.record(pass, &labels.playing_style, playing_style);

    finish(report, pass, 0);
    Ok(())
}

async fn position_pass<H: ManagedHost>(
    sync: &mut Synchronizer<'_, H>,
    record: &PlayerRecord,
    config: &SyncConfig,
    report: &mut SyncReport,
) -> Result<()> {
    let pass = PassKind::Position;
    let Some(region) = region_of(sync, pass, &config.sections.position, report) else {
        return Ok(());
    };
    let registered = record
        .basic_value(keys::POSITION)
        .filter(|code| !code.is_empty());

    set_text(
        sync,
        region,
        pass,
        &config.position.registered_label,
        registered,
        report,
    )
    .await?;

    let bulk_changed = sync
        .set_all_radios_in_region(region, config.position.default_tier.symbol())
        .await?;

    if let Some(code) = registered {
        set_radio(sync, region, pass, code, Some(Tier::A.symbol()), report).await?;
    }
    for (code, tier) in &record.positions {
        set_radio(sync, region, pass, code, Some(tier.symbol()), report).await?;
    }

    finish(report, pass, bulk_changed);
    Ok(())
}

async fn ability_pass<H: ManagedHost>(
    sync: &mut Synchronizer<'_, H>,
    record: &PlayerRecord,
    config: &SyncConfig,
    report: &mut SyncReport,
) -> Result<()> {
    let pass = PassKind::Ability;
    let Some(region) = region_of(sync, pass, &config.sections.ability, report) else {
        return Ok(());
    };

    for (label, value) in &record.stats {
        let value = value.to_string();
        set_text(sync, region, pass, label, Some(value.as_str()), report).await?;
    }

    finish(report, pass, 0);
    Ok(())
}

/// Clears every checkbox of the section, then checks the named entries.
async fn flag_pass<'r, H: ManagedHost>(
    sync: &mut Synchronizer<'_, H>,
    pass: PassKind,
    title: &str,
    entries: impl Iterator<Item = &'r str>,
    report: &mut SyncReport,
) -> Result<()> {
    let Some(region) = region_of(sync, pass, title, report) else {
        return Ok(());
    };

    let bulk_changed = sync.set_all_checkboxes_in_region(region, false).await?;
    for entry in entries {
        let written = sync.set_checkbox(region, entry, true).await?;
        report.record(pass, entry, write_status(true, written));
    }

    finish(report, pass, bulk_changed);
    Ok(())
}

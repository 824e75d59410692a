use crate::commands::{format_count, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{raw_version, Dataset};
use crate::source::GlyphSource;
use crate::store::DatasetStore;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Remote matches the local version; nothing written.
    UpToDate,
    /// No usable local version existed.
    Installed,
    /// Replaced an older (or different) version.
    Upgraded { from: String },
    /// Same version written again because of `--force`.
    Reinstalled,
}

#[derive(Debug, Clone)]
pub struct UpdateReport {
    pub previous_version: Option<String>,
    pub version: Option<String>,
    pub date: Option<String>,
    pub glyph_count: usize,
    pub outcome: UpdateOutcome,
    pub backup: Option<PathBuf>,
    pub location: PathBuf,
}

/// Fetch the remote dataset and install it unless the local copy already has
/// the same version. `stamp` names the backup (`YYYYMMDD_HHMMSS`).
///
/// Every message is handed to `on_message` as soon as it is produced, so a
/// caller can show progress even when the download later fails. The same
/// messages are collected in the returned `CmdResult`.
pub fn run<S, R, F>(
    store: &mut S,
    source: &R,
    force: bool,
    stamp: &str,
    on_message: F,
) -> Result<CmdResult>
where
    S: DatasetStore,
    R: GlyphSource,
    F: FnMut(&CmdMessage),
{
    let mut out = Progress {
        result: CmdResult::default(),
        on_message,
    };

    let previous_version = match store.read() {
        Ok(document) => document.as_ref().and_then(raw_version).map(str::to_string),
        Err(e) => {
            warn!(error = %e, "local dataset unreadable");
            out.push(CmdMessage::warning(format!(
                "Could not read local dataset ({}); treating it as absent",
                e
            )));
            None
        }
    };
    match &previous_version {
        Some(version) => out.push(CmdMessage::info(format!("Current version: {}", version))),
        None => out.push(CmdMessage::info("No local file found")),
    }

    out.push(CmdMessage::info(format!(
        "Downloading glyphnames.json from {}",
        source.describe()
    )));
    let document = source.fetch()?;
    let remote = Dataset::from_value(document.clone())?;

    let version = remote.version().map(str::to_string);
    let date = remote.date().map(str::to_string);
    out.push(CmdMessage::info(format!(
        "Remote version: {}",
        version.as_deref().unwrap_or("unknown")
    )));
    out.push(CmdMessage::info(format!(
        "Release date: {}",
        date.as_deref().unwrap_or("unknown")
    )));
    out.push(CmdMessage::info(format!(
        "Total glyphs: {}",
        format_count(remote.len())
    )));

    let mut report = UpdateReport {
        previous_version: previous_version.clone(),
        version: version.clone(),
        date,
        glyph_count: remote.len(),
        outcome: UpdateOutcome::UpToDate,
        backup: None,
        location: store.location(),
    };

    let same_version = previous_version.is_some() && previous_version == version;
    if same_version && !force {
        out.push(CmdMessage::success(
            "Already up to date! Use --force to reinstall.",
        ));
        return Ok(out.result.with_update(report));
    }

    let shown_version = version.as_deref().unwrap_or("unknown");
    report.outcome = match &previous_version {
        Some(from) if !same_version => {
            out.push(CmdMessage::info(format!(
                "Upgrade available: {} -> {}",
                from, shown_version
            )));
            UpdateOutcome::Upgraded { from: from.clone() }
        }
        Some(_) => UpdateOutcome::Reinstalled,
        None => UpdateOutcome::Installed,
    };

    if store.exists() {
        report.backup = store.backup(stamp)?;
        if let Some(backup) = &report.backup {
            let name = backup
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| backup.display().to_string());
            out.push(CmdMessage::info(format!("Backup created: {}", name)));
        }
    }

    store.write(&document)?;
    info!(location = %report.location.display(), version = shown_version, "dataset installed");
    out.push(CmdMessage::success(format!(
        "Updated: {}",
        report.location.display()
    )));

    let summary = match &report.outcome {
        UpdateOutcome::Upgraded { from } => {
            format!("Successfully upgraded from {} to {}!", from, shown_version)
        }
        UpdateOutcome::Reinstalled => format!("Successfully reinstalled version {}!", shown_version),
        _ => format!("Successfully installed version {}!", shown_version),
    };
    out.push(CmdMessage::success(summary));

    Ok(out.result.with_update(report))
}

/// Collects messages while forwarding each one to the caller's callback.
struct Progress<F> {
    result: CmdResult,
    on_message: F,
}

impl<F: FnMut(&CmdMessage)> Progress<F> {
    fn push(&mut self, message: CmdMessage) {
        (self.on_message)(&message);
        self.result.add_message(message);
    }
}

//! File system watcher for live rebuild.
//!
//! Monitors the content directory, assets, the site data file and the
//! config file; any change triggers a full rebuild. Events are debounced
//! so editor save bursts collapse into one rebuild.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                    Event Loop                        │
//! │                                                      │
//! │  ┌──────────┐    ┌──────────┐    ┌────────────────┐  │
//! │  │ notify   │───▶│ Debouncer│───▶│ full rebuild   │  │
//! │  │ events   │    │ (300ms)  │    │ (build_site)   │  │
//! │  └──────────┘    └──────────┘    └────────────────┘  │
//! └──────────────────────────────────────────────────────┘
//! ```

use crate::{config::SiteConfig, log};
use anyhow::{Context, Result};
use notify::{Event, EventKind, RecursiveMode, Watcher};
use std::{
    collections::HashSet,
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

// =============================================================================
// Constants
// =============================================================================

const DEBOUNCE_MS: u64 = 300;
const REBUILD_COOLDOWN_MS: u64 = 800;

// =============================================================================
// Path Utilities
// =============================================================================

/// Check if path is a temp/backup file (editor artifacts).
fn is_temp_file(path: &Path) -> bool {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    matches!(ext, "bck" | "bak" | "backup" | "swp" | "swo" | "tmp")
        || name.ends_with('~')
        || name.starts_with('.')
}

/// Format path as relative to root for log display.
fn rel_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}

/// Check whether a changed path is the config file.
///
/// Watcher events carry absolute paths while the configured path may be
/// relative, so both sides are canonicalized when possible.
fn is_config_file(path: &Path, config_path: &Path) -> bool {
    match (path.canonicalize(), config_path.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => path == config_path,
    }
}

// =============================================================================
// Debounce State
// =============================================================================

/// Batches rapid file events with debouncing and rebuild cooldown.
struct Debouncer {
    pending: HashSet<PathBuf>,
    last_event: Option<Instant>,
    last_rebuild: Option<Instant>,
}

impl Debouncer {
    fn new() -> Self {
        Self {
            pending: HashSet::new(),
            last_event: None,
            last_rebuild: None,
        }
    }

    fn in_cooldown(&self) -> bool {
        self.last_rebuild
            .is_some_and(|t| t.elapsed() < Duration::from_millis(REBUILD_COOLDOWN_MS))
    }

    fn add(&mut self, event: Event) {
        for path in event.paths {
            if !is_temp_file(&path) {
                self.pending.insert(path);
            }
        }
        self.last_event = Some(Instant::now());
    }

    fn ready(&self) -> bool {
        !self.pending.is_empty()
            && self
                .last_event
                .is_some_and(|t| t.elapsed() >= Duration::from_millis(DEBOUNCE_MS))
    }

    fn take(&mut self) -> Vec<PathBuf> {
        self.last_event = None;
        self.pending.drain().collect()
    }

    fn mark_rebuild(&mut self) {
        self.last_rebuild = Some(Instant::now());
    }

    fn timeout(&self) -> Duration {
        if self.pending.is_empty() {
            Duration::from_secs(60)
        } else {
            Duration::from_millis(DEBOUNCE_MS)
        }
    }
}

// =============================================================================
// Event Handler
// =============================================================================

/// Rebuild the whole site in response to changes.
///
/// Returns true on success (for cooldown tracking). Failures are logged,
/// never propagated; the server keeps serving the last good build.
fn handle_changes(paths: &[PathBuf], config: &'static SiteConfig) -> bool {
    if paths.is_empty() {
        return false;
    }

    let root = config.get_root();
    let triggers: Vec<_> = paths.iter().map(|p| rel_path(p, root)).collect();
    log!("watch"; "{} changed, rebuilding...", triggers.join(", "));

    // Config is loaded once at startup; a rebuild here still runs with
    // the old values.
    if paths.iter().any(|p| is_config_file(p, &config.config_path)) {
        log!("watch"; "config changed; restart `folio serve` to apply it");
    }

    match crate::build::build_site(config) {
        Ok(_) => {
            eprintln!(); // Blank line to separate rebuild sessions
            true
        }
        Err(e) => {
            log!("watch"; "rebuild failed: {e:#}");
            eprintln!();
            false
        }
    }
}

// =============================================================================
// Watcher Setup
// =============================================================================

fn setup_watchers(watcher: &mut impl Watcher, config: &SiteConfig) -> Result<()> {
    let targets: [(&Path, RecursiveMode); 4] = [
        (&config.build.content, RecursiveMode::Recursive),
        (&config.build.assets, RecursiveMode::Recursive),
        (&config.build.site_data, RecursiveMode::NonRecursive),
        (&config.config_path, RecursiveMode::NonRecursive),
    ];

    let root = config.get_root();
    let mut watched = Vec::new();
    for (path, mode) in targets {
        if path.exists() {
            watcher
                .watch(path, mode)
                .with_context(|| format!("Failed to watch {}", path.display()))?;
            watched.push(rel_path(path, root));
        }
    }

    log!("watch"; "watching: {}", watched.join(", "));
    eprintln!(); // Blank line to separate init logs from change events
    Ok(())
}

const fn is_relevant(event: &Event) -> bool {
    matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_))
}

// =============================================================================
// Public API
// =============================================================================

/// Start blocking file watcher with debouncing and live rebuild.
pub fn watch_for_changes_blocking(config: &'static SiteConfig) -> Result<()> {
    if !config.serve.watch {
        return Ok(());
    }

    let (tx, rx) = std::sync::mpsc::channel();
    let mut watcher = notify::recommended_watcher(tx).context("Failed to create file watcher")?;
    setup_watchers(&mut watcher, config)?;

    let mut debouncer = Debouncer::new();

    loop {
        match rx.recv_timeout(debouncer.timeout()) {
            Ok(Ok(event)) if is_relevant(&event) && !debouncer.in_cooldown() => {
                debouncer.add(event);
            }
            Ok(Err(e)) => log!("watch"; "error: {e}"),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) if debouncer.ready() => {
                if handle_changes(&debouncer.take(), config) {
                    debouncer.mark_rebuild();
                }
            }
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
            // Other cases: irrelevant events, timeout without ready, etc.
            _ => {}
        }
    }

    Ok(())
}

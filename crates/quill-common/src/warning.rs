//! Builder warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the selector builder to report parts that were reordered or
//! ignored during rendering.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already recorded (to deduplicate)
static WARNED: Mutex<BTreeSet<String>> = Mutex::new(BTreeSet::new());

/// Whether recorded warnings are also printed to stderr.
static ENABLED: AtomicBool = AtomicBool::new(true);

/// Warn about suspicious builder input (prints once per unique message)
///
/// The warning is always recorded, so [`warnings_emitted`] sees it even
/// when printing has been turned off with [`set_enabled`].
///
/// # Example
/// ```
/// quill_common::warn_once("Selector", "class added before id; reordered on render");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let first_time = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(key);

    if first_time && ENABLED.load(Ordering::Relaxed) {
        eprintln!("{}", format!("[Quill {component}] ⚠ {message}").yellow());
    }
}

/// Turn stderr output of warnings on or off for the whole process.
pub fn set_enabled(enabled: bool) {
    ENABLED.store(enabled, Ordering::Relaxed);
}

/// Snapshot of every warning recorded so far, as `[component] message`.
#[must_use]
pub fn warnings_emitted() -> Vec<String> {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .iter()
        .cloned()
        .collect()
}

/// Clear all recorded warnings
pub fn clear_warnings() {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clear();
}

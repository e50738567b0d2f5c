//! Warnings with colored terminal output.
//!
//! Provides deduplication so a large bookmark file with the same defect on
//! every line reports it once. Used by the tokenizer and the bookmark parser
//! to report input they recovered from.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Whether warnings are printed at all. Deduplication state is still tracked
/// while printing is disabled.
static ENABLED: AtomicBool = AtomicBool::new(true);

fn key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about recovered input (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("Bookmark Parser", "unmatched folder close ignored");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let should_print = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key(component, message));

    if should_print && ENABLED.load(Ordering::Relaxed) {
        eprintln!("{}", format!("[Bookmarks {component}] ⚠ {message}").yellow());
    }
}

/// Returns true if the given warning has been reported since the last
/// [`clear_warnings`].
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .is_some_and(|set| set.contains(&key(component, message)))
}

/// Enable or disable printing of warnings (the CLI's `--quiet`).
pub fn set_warnings_enabled(enabled: bool) {
    ENABLED.store(enabled, Ordering::Relaxed);
}

/// Clear all recorded warnings (call before processing a new file)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

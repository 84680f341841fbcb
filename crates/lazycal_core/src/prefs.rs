//! One-time help prompt preference.
//!
//! # Responsibility
//! - Read and write the "don't show the help dialog again" sentinel.
//!
//! # Invariants
//! - Only the exact stored string `"true"` suppresses the prompt; an
//!   absent key or any other value means "show prompt".

use crate::storage::Storage;

/// Durable-storage key for the help prompt sentinel.
pub const HELP_PROMPT_KEY: &str = "calendarHelpDontAskAgain";

/// Whether the user opted out of the informational help prompt.
pub fn help_prompt_dismissed<S: Storage>(storage: &S) -> bool {
    storage.load::<String>(HELP_PROMPT_KEY, String::new()) == "true"
}

/// Records the opt-out. Dismissing writes the sentinel; re-enabling the
/// prompt removes the key entirely rather than storing `"false"`.
pub fn set_help_prompt_dismissed<S: Storage>(storage: &S, dismissed: bool) {
    if dismissed {
        storage.save(HELP_PROMPT_KEY, &"true");
    } else {
        storage.remove(HELP_PROMPT_KEY);
    }
}

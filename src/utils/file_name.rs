//! Upload file name sanitization.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Length of the random prefix prepended to stored file names.
const PREFIX_LENGTH: usize = 8;

/// Produces a storage-safe, collision-resistant name for an uploaded file.
///
/// The client-provided name is reduced to `[A-Za-z0-9._-]` (anything else
/// becomes `_`, path separators included) and prefixed with a random
/// alphanumeric tag so repeated uploads of the same file never clash.
pub fn storage_name(original: &str) -> String {
    let sanitized: String = original
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    let base = if sanitized.trim_matches('_').is_empty() {
        "file"
    } else {
        &sanitized
    };

    let prefix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(PREFIX_LENGTH)
        .map(char::from)
        .collect();

    format!("{prefix}-{base}")
}

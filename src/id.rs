use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use data_error::Result;

static LAST_ID: AtomicU64 = AtomicU64::new(0);

/// Generate an identifier for a new profile.
///
/// Identifiers are the current Unix time in milliseconds, bumped by one
/// whenever the clock has not advanced since the previous call, so ids
/// produced by one process are strictly increasing.
pub fn next_profile_id() -> Result<String> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)?
        .as_millis() as u64;

    let mut last = LAST_ID.load(Ordering::SeqCst);
    loop {
        let candidate = now.max(last + 1);
        match LAST_ID.compare_exchange(
            last,
            candidate,
            Ordering::SeqCst,
            Ordering::SeqCst,
        ) {
            Ok(_) => return Ok(candidate.to_string()),
            Err(current) => last = current,
        }
    }
}

//! Identifier generation

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use rand::rngs::OsRng;
use rand::TryRngCore;

/// Prefix for server-issued event ids
pub const EVENT_ID_PREFIX: &str = "evt-";

static LAST_FALLBACK: AtomicU64 = AtomicU64::new(0);

/// Random 16-char lowercase hex token from the OS RNG.
///
/// Falls back to a strictly increasing time-based token if the OS RNG
/// is unavailable.
pub fn generate_token() -> String {
    let mut bytes = [0u8; 8];
    match OsRng.try_fill_bytes(&mut bytes) {
        Ok(()) => bytes.iter().map(|b| format!("{:02x}", b)).collect(),
        Err(e) => {
            tracing::warn!(error = %e, "OS randomness unavailable, using time-based id");
            time_token()
        }
    }
}

/// Fresh event id: `evt-` followed by a token
pub fn new_event_id() -> String {
    format!("{}{}", EVENT_ID_PREFIX, generate_token())
}

fn time_token() -> String {
    let nanos = Utc::now().timestamp_nanos_opt().unwrap_or(0).max(0) as u64;
    let prev = LAST_FALLBACK
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            Some(nanos.max(last + 1))
        })
        .unwrap_or(nanos);
    format!("{:016x}", nanos.max(prev + 1))
}

//! Notification identifiers: `notif-<epoch millis>-<7 base36 chars>`.

use chrono::{DateTime, Utc};

use crate::error::NotifyError;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 7;

pub(crate) fn notification_id(now: DateTime<Utc>) -> Result<String, NotifyError> {
    let mut bytes = [0_u8; SUFFIX_LEN];
    getrandom::fill(&mut bytes).map_err(|e| NotifyError::Entropy(e.to_string()))?;
    let suffix: String = bytes
        .iter()
        .map(|b| char::from(ALPHABET[usize::from(*b) % ALPHABET.len()]))
        .collect();
    Ok(format!("notif-{}-{suffix}", now.timestamp_millis()))
}

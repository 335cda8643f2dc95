// src/contact/submission.rs
use base64::Engine;
use chrono::{DateTime, Utc};
use rand::rngs::OsRng;
use rand::RngCore;
use std::time::Duration;

use crate::contact::form::ContactRequest;

pub const REFERENCE_BYTES: usize = 6;

/// Acknowledgement shown to the visitor after a submission.
#[derive(Debug, Clone)]
pub struct Receipt {
    /// Short code the visitor can quote when following up.
    pub reference: String,
    pub received_at: DateTime<Utc>,
}

/// Accept a validated request.
///
/// Nothing leaves the process: the request is logged and, when `delay` is
/// non-zero, the worker sleeps to mimic a network round-trip.
pub fn submit(request: &ContactRequest, delay: Duration) -> Receipt {
    if !delay.is_zero() {
        std::thread::sleep(delay);
    }

    let reference = generate_reference(&mut OsRng);

    tracing::info!(
        reference = %reference,
        subject = request.subject.slug(),
        property = request.property.as_deref().unwrap_or("-"),
        message_chars = request.message.chars().count(),
        "contact request received"
    );

    Receipt {
        reference,
        received_at: Utc::now(),
    }
}

/// Random, URL-safe reference code, e.g. `REF-3q2-7Zk_QdVn`.
pub fn generate_reference<R: RngCore>(rng: &mut R) -> String {
    let mut buf = [0u8; REFERENCE_BYTES];
    rng.fill_bytes(&mut buf);
    format!(
        "REF-{}",
        base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buf)
    )
}

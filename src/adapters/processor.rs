use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::booking::BookingDraft;
use crate::error::Result;
use crate::ports::processor::BookingProcessor;

/// Stand-in for a payment backend. Waits the configured delay, then
/// issues a reference. It cannot decline a booking.
pub struct SimulatedProcessor {
    delay: Duration,
}

impl SimulatedProcessor {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

/// "ZMB-" plus the last six digits of the epoch milliseconds. Display
/// only; not unique across sessions.
pub fn booking_reference(at: DateTime<Utc>) -> String {
    let millis = at.timestamp_millis().to_string();
    let tail = &millis[millis.len().saturating_sub(6)..];
    format!("ZMB-{tail}")
}

#[async_trait]
impl BookingProcessor for SimulatedProcessor {
    async fn submit(&self, draft: &BookingDraft) -> Result<String> {
        tracing::debug!(
            item = %draft.item.name,
            delay_ms = self.delay.as_millis() as u64,
            "processing booking"
        );
        tokio::time::sleep(self.delay).await;
        Ok(booking_reference(Utc::now()))
    }
}

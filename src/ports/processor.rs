use async_trait::async_trait;

use crate::domain::booking::BookingDraft;
use crate::error::Result;

/// Accepts a fully prepared draft and returns a booking reference.
#[async_trait]
pub trait BookingProcessor: Send + Sync {
    async fn submit(&self, draft: &BookingDraft) -> Result<String>;
}

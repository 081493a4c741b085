use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::adapters::catalog::static_catalog::StaticCatalog;
use crate::adapters::store::memory_store::MemoryDraftStore;
use crate::config::types::SuggestConfig;
use crate::domain::booking::BookingDraft;
use crate::domain::currency::Currency;
use crate::error::Result;
use crate::mcp::server::VoyageMcpServer;
use crate::ports::processor::BookingProcessor;

type SubmitFn = Box<dyn Fn(&BookingDraft) -> Result<String> + Send + Sync>;

/// Booking processor with a swappable submit handler. The default
/// accepts every draft with a fixed reference.
pub struct MockProcessor {
    submit_fn: Mutex<SubmitFn>,
}

impl Default for MockProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl MockProcessor {
    pub fn new() -> Self {
        Self {
            submit_fn: Mutex::new(Box::new(|_| Ok("ZMB-000000".to_string()))),
        }
    }

    #[must_use]
    pub fn with_submit(
        self,
        f: impl Fn(&BookingDraft) -> Result<String> + Send + Sync + 'static,
    ) -> Self {
        *self.submit_fn.lock().unwrap() = Box::new(f);
        self
    }
}

#[async_trait]
impl BookingProcessor for MockProcessor {
    async fn submit(&self, draft: &BookingDraft) -> Result<String> {
        let f = self.submit_fn.lock().unwrap();
        f(draft)
    }
}

// --- Server factories ---

pub fn test_suggest_config() -> SuggestConfig {
    SuggestConfig {
        max_results: 8,
        default_results: 6,
        latency_ms: 0,
    }
}

/// Server over the stock catalog with instant suggestions and an
/// always-accepting processor. Prices render in USD so quote maths
/// stay readable in assertions.
pub fn make_server() -> VoyageMcpServer {
    make_server_with(MockProcessor::new())
}

pub fn make_server_with(processor: MockProcessor) -> VoyageMcpServer {
    VoyageMcpServer::new(
        Arc::new(StaticCatalog::seeded()),
        Arc::new(MemoryDraftStore::new(16, Duration::from_secs(600))),
        Arc::new(processor),
        test_suggest_config(),
        Currency::Usd,
    )
}

//! End-to-end tests for the 4-step booking wizard, driven through the
//! full MCP protocol (duplex transport): draft lifecycle, step order,
//! validation, pricing, payment simulation, and cancellation.

#![allow(clippy::too_many_lines)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use mcp_zamvoyage::adapters::catalog::static_catalog::StaticCatalog;
use mcp_zamvoyage::adapters::processor::SimulatedProcessor;
use mcp_zamvoyage::adapters::store::memory_store::MemoryDraftStore;
use mcp_zamvoyage::config::types::SuggestConfig;
use mcp_zamvoyage::domain::booking::BookingDraft;
use mcp_zamvoyage::domain::currency::Currency;
use mcp_zamvoyage::error::{Result, VoyageError};
use mcp_zamvoyage::mcp::server::VoyageMcpServer;
use mcp_zamvoyage::ports::processor::BookingProcessor;

use rmcp::model::{CallToolRequestParams, CallToolResult, ClientInfo, ReadResourceRequestParams};
use rmcp::{ClientHandler, ServiceExt};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Processor that declines every draft, for the failed-payment path.
struct DecliningProcessor;

#[async_trait]
impl BookingProcessor for DecliningProcessor {
    async fn submit(&self, _draft: &BookingDraft) -> Result<String> {
        Err(VoyageError::BookingState {
            reason: "processor offline".into(),
        })
    }
}

#[derive(Debug, Clone, Default)]
struct DummyClient;

impl ClientHandler for DummyClient {
    fn get_info(&self) -> ClientInfo {
        ClientInfo::default()
    }
}

type Client = rmcp::service::RunningService<rmcp::RoleClient, DummyClient>;

fn extract_text(result: &CallToolResult) -> String {
    result
        .content
        .first()
        .and_then(|c| c.raw.as_text())
        .map(|t| t.text.clone())
        .unwrap_or_default()
}

fn is_success(result: &CallToolResult) -> bool {
    result.is_error.is_none() || result.is_error == Some(false)
}

#[allow(clippy::needless_pass_by_value)]
fn tool_params(name: &str, args: serde_json::Value) -> CallToolRequestParams {
    CallToolRequestParams {
        meta: None,
        name: std::borrow::Cow::Owned(name.to_string()),
        arguments: Some(args.as_object().unwrap().clone()),
        task: None,
    }
}

async fn setup_with(
    processor: Arc<dyn BookingProcessor>,
) -> (Client, tokio::task::JoinHandle<anyhow::Result<()>>) {
    let (server_transport, client_transport) = tokio::io::duplex(65536);

    let server = VoyageMcpServer::new(
        Arc::new(StaticCatalog::seeded()),
        Arc::new(MemoryDraftStore::new(32, Duration::from_secs(300))),
        processor,
        SuggestConfig {
            max_results: 8,
            default_results: 6,
            latency_ms: 0,
        },
        Currency::Usd,
    );
    let server_handle = tokio::spawn(async move {
        server.serve(server_transport).await?.waiting().await?;
        anyhow::Ok(())
    });

    let client = DummyClient
        .serve(client_transport)
        .await
        .expect("client should connect");

    (client, server_handle)
}

async fn setup() -> (Client, tokio::task::JoinHandle<anyhow::Result<()>>) {
    setup_with(Arc::new(SimulatedProcessor::new(Duration::ZERO))).await
}

async fn teardown(client: Client, server_handle: tokio::task::JoinHandle<anyhow::Result<()>>) {
    let _ = client.cancel().await;
    let _ = server_handle.await;
}

fn draft_id_in(text: &str) -> String {
    text.split_whitespace()
        .find(|word| word.starts_with("bk-"))
        .expect("response should carry a draft id")
        .to_string()
}

async fn call(client: &Client, name: &str, args: serde_json::Value) -> CallToolResult {
    client
        .call_tool(tool_params(name, args))
        .await
        .expect("call_tool should succeed")
}

/// Starts a draft for the 620 USD/night seed stay and returns its id.
async fn start_stay_booking(client: &Client) -> String {
    let result = call(
        client,
        "zamvoyage_start_booking",
        serde_json::json!({ "item_type": "stay", "item": "Tongabezi Lodge" }),
    )
    .await;
    let text = extract_text(&result);
    assert!(is_success(&result), "Expected success, got: {text}");
    draft_id_in(&text)
}

/// Walks a fresh draft through steps 1-3, leaving it at the payment step.
async fn walk_to_payment(client: &Client) -> String {
    let id = start_stay_booking(client).await;

    let result = call(
        client,
        "zamvoyage_booking_trip_details",
        serde_json::json!({
            "draft_id": id,
            "checkin": "2026-09-10",
            "checkout": "2026-09-13",
        }),
    )
    .await;
    assert!(is_success(&result), "trip details: {}", extract_text(&result));

    let result = call(
        client,
        "zamvoyage_booking_contact",
        serde_json::json!({
            "draft_id": id,
            "first_name": "Thandiwe",
            "last_name": "Mwansa",
            "email": "thandiwe@example.com",
            "phone": "+260 97 555 0101",
            "country": "Zambia",
        }),
    )
    .await;
    assert!(is_success(&result), "contact: {}", extract_text(&result));

    let result = call(
        client,
        "zamvoyage_booking_requests",
        serde_json::json!({ "draft_id": id }),
    )
    .await;
    assert!(is_success(&result), "requests: {}", extract_text(&result));

    id
}

// ---------------------------------------------------------------------------
// Happy path
// ---------------------------------------------------------------------------

#[tokio::test]
async fn booking_wizard_walks_all_four_steps() {
    let (client, server_handle) = setup().await;

    let result = call(
        &client,
        "zamvoyage_start_booking",
        serde_json::json!({ "item_type": "stay", "item": "Tongabezi Lodge" }),
    )
    .await;
    let text = extract_text(&result);
    assert!(is_success(&result), "Expected success, got: {text}");
    assert!(text.contains("for Tongabezi Lodge (Stay)."));
    assert!(text.contains("Base price: $620 | Rating: 4.9"));
    assert!(text.contains("Step 1 of 4: Trip Details"));
    let id = draft_id_in(&text);

    // 620/night x 2 adults x 3 nights, plus 15%.
    let result = call(
        &client,
        "zamvoyage_booking_trip_details",
        serde_json::json!({
            "draft_id": id,
            "checkin": "2026-09-10",
            "checkout": "2026-09-13",
        }),
    )
    .await;
    let text = extract_text(&result);
    assert!(is_success(&result), "Expected success, got: {text}");
    assert!(text.contains(&format!("Trip details saved for {id}.")));
    assert!(text.contains("2 guest(s) x 3 night(s)"));
    assert!(text.contains("Subtotal: $3,720"));
    assert!(text.contains("Taxes & fees (15%): $558"));
    assert!(text.contains("Total: $4,278"));
    assert!(text.contains("Step 2 of 4: Personal Information"));

    let result = call(
        &client,
        "zamvoyage_booking_contact",
        serde_json::json!({
            "draft_id": id,
            "first_name": "Thandiwe",
            "last_name": "Mwansa",
            "email": "thandiwe@example.com",
            "phone": "+260 97 555 0101",
            "country": "Zambia",
        }),
    )
    .await;
    let text = extract_text(&result);
    assert!(is_success(&result), "Expected success, got: {text}");
    assert!(text.contains(&format!("Contact details saved for {id}.")));
    assert!(text.contains("Step 3 of 4: Special Requirements"));

    let result = call(
        &client,
        "zamvoyage_booking_requests",
        serde_json::json!({
            "draft_id": id,
            "special_requests": "River-facing cottage",
        }),
    )
    .await;
    let text = extract_text(&result);
    assert!(is_success(&result), "Expected success, got: {text}");
    assert!(text.contains(&format!("Requirements saved for {id}.")));
    assert!(text.contains("Step 4 of 4: Payment & Confirmation"));
    assert!(text.contains("Credit Card, Bank Transfer, PayPal"));

    let result = call(
        &client,
        "zamvoyage_booking_summary",
        serde_json::json!({ "draft_id": id }),
    )
    .await;
    let text = extract_text(&result);
    assert!(text.contains("# Booking: Tongabezi Lodge (Stay)"));
    assert!(text.contains("Step 4 of 4: Payment & Confirmation"));
    assert!(text.contains("Special requests: River-facing cottage"));
    assert!(text.contains("Contact: Thandiwe Mwansa <thandiwe@example.com>"));

    // Payment methods match case-insensitively and are canonicalised.
    let result = call(
        &client,
        "zamvoyage_confirm_booking",
        serde_json::json!({ "draft_id": id, "payment_method": "credit card" }),
    )
    .await;
    let text = extract_text(&result);
    assert!(is_success(&result), "Expected success, got: {text}");
    assert!(text.contains("Booking confirmed!"));
    assert!(text.contains("Reference: ZMB-"));
    assert!(text.contains("Item: Tongabezi Lodge (Stay)"));
    assert!(text.contains("Payment method: Credit Card"));
    assert!(text.contains("Total: $4,278"));

    // The draft is gone once confirmed.
    let result = call(
        &client,
        "zamvoyage_booking_summary",
        serde_json::json!({ "draft_id": id }),
    )
    .await;
    assert!(!is_success(&result));
    assert!(extract_text(&result).contains(&format!("No active booking draft '{id}'")));

    teardown(client, server_handle).await;
}

// ---------------------------------------------------------------------------
// Item resolution & pricing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn start_booking_falls_back_to_the_generic_experience() {
    let (client, server_handle) = setup().await;

    let result = call(
        &client,
        "zamvoyage_start_booking",
        serde_json::json!({ "item": "Moon Base" }),
    )
    .await;
    let text = extract_text(&result);
    assert!(is_success(&result), "Expected success, got: {text}");
    assert!(text.contains("for Moon Base (Experience)."));
    assert!(text.contains("Base price: $350"));

    let result = call(&client, "zamvoyage_start_booking", serde_json::json!({})).await;
    let text = extract_text(&result);
    assert!(is_success(&result), "Expected success, got: {text}");
    assert!(text.contains("for Zambia Experience (Experience)."));

    teardown(client, server_handle).await;
}

#[tokio::test]
async fn guest_counts_shape_the_quote() {
    let (client, server_handle) = setup().await;
    let id = start_stay_booking(&client).await;

    // Infants never enter the subtotal: 620 x 3 billable x 3 nights.
    let result = call(
        &client,
        "zamvoyage_booking_trip_details",
        serde_json::json!({
            "draft_id": id,
            "checkin": "2026-09-10",
            "checkout": "2026-09-13",
            "adults": 2,
            "children": 1,
            "infants": 2,
        }),
    )
    .await;
    let text = extract_text(&result);
    assert!(is_success(&result), "Expected success, got: {text}");
    assert!(text.contains("3 guest(s) x 3 night(s)"));
    assert!(text.contains("Subtotal: $5,580"));
    assert!(text.contains("Total: $6,417"));

    teardown(client, server_handle).await;
}

#[tokio::test]
async fn booking_quote_renders_in_selected_currency() {
    let (client, server_handle) = setup().await;
    let id = start_stay_booking(&client).await;

    let result = call(
        &client,
        "zamvoyage_set_currency",
        serde_json::json!({ "code": "ZMW" }),
    )
    .await;
    assert!(is_success(&result));

    let result = call(
        &client,
        "zamvoyage_booking_trip_details",
        serde_json::json!({
            "draft_id": id,
            "checkin": "2026-09-10",
            "checkout": "2026-09-13",
        }),
    )
    .await;
    let text = extract_text(&result);
    assert!(is_success(&result), "Expected success, got: {text}");
    assert!(text.contains("Subtotal: K102,300"));
    assert!(text.contains("Total: K117,645"));

    teardown(client, server_handle).await;
}

// ---------------------------------------------------------------------------
// Validation & step order
// ---------------------------------------------------------------------------

#[tokio::test]
async fn malformed_dates_are_rejected() {
    let (client, server_handle) = setup().await;
    let id = start_stay_booking(&client).await;

    let result = call(
        &client,
        "zamvoyage_booking_trip_details",
        serde_json::json!({
            "draft_id": id,
            "checkin": "next tuesday",
            "checkout": "2026-09-13",
        }),
    )
    .await;
    assert!(!is_success(&result));
    assert!(extract_text(&result)
        .contains("Invalid checkin date 'next tuesday'. Use the YYYY-MM-DD format."));

    let result = call(
        &client,
        "zamvoyage_booking_trip_details",
        serde_json::json!({
            "draft_id": id,
            "checkin": "2026-09-10",
            "checkout": "13/09/2026",
        }),
    )
    .await;
    assert!(!is_success(&result));
    assert!(extract_text(&result).contains("Invalid checkout date '13/09/2026'"));

    // The draft is untouched and still accepts valid dates.
    let result = call(
        &client,
        "zamvoyage_booking_trip_details",
        serde_json::json!({
            "draft_id": id,
            "checkin": "2026-09-10",
            "checkout": "2026-09-13",
        }),
    )
    .await;
    assert!(is_success(&result), "retry: {}", extract_text(&result));

    teardown(client, server_handle).await;
}

#[tokio::test]
async fn inverted_dates_keep_the_draft_at_step_one() {
    let (client, server_handle) = setup().await;
    let id = start_stay_booking(&client).await;

    let result = call(
        &client,
        "zamvoyage_booking_trip_details",
        serde_json::json!({
            "draft_id": id,
            "checkin": "2026-09-13",
            "checkout": "2026-09-10",
        }),
    )
    .await;
    assert!(!is_success(&result));
    let text = extract_text(&result);
    assert!(text.contains("Could not save trip details:"));
    assert!(text.contains("check-out 2026-09-10 is before check-in 2026-09-13"));

    let result = call(
        &client,
        "zamvoyage_booking_trip_details",
        serde_json::json!({
            "draft_id": id,
            "checkin": "2026-09-10",
            "checkout": "2026-09-13",
        }),
    )
    .await;
    assert!(is_success(&result), "retry: {}", extract_text(&result));

    teardown(client, server_handle).await;
}

#[tokio::test]
async fn steps_must_run_in_order() {
    let (client, server_handle) = setup().await;
    let id = start_stay_booking(&client).await;

    let result = call(
        &client,
        "zamvoyage_booking_contact",
        serde_json::json!({
            "draft_id": id,
            "first_name": "Thandiwe",
            "last_name": "Mwansa",
            "email": "thandiwe@example.com",
            "phone": "+260 97 555 0101",
            "country": "Zambia",
        }),
    )
    .await;
    assert!(!is_success(&result));
    let text = extract_text(&result);
    assert!(text.contains("Could not save contact details:"));
    assert!(text.contains("Booking step not allowed"));
    assert!(text.contains("draft is at step 1 (Trip Details)"));

    let result = call(
        &client,
        "zamvoyage_confirm_booking",
        serde_json::json!({ "draft_id": id, "payment_method": "PayPal" }),
    )
    .await;
    assert!(!is_success(&result));
    assert!(extract_text(&result).contains("Could not confirm booking:"));

    teardown(client, server_handle).await;
}

#[tokio::test]
async fn blank_contact_field_is_rejected() {
    let (client, server_handle) = setup().await;
    let id = start_stay_booking(&client).await;

    let result = call(
        &client,
        "zamvoyage_booking_trip_details",
        serde_json::json!({
            "draft_id": id,
            "checkin": "2026-09-10",
            "checkout": "2026-09-13",
        }),
    )
    .await;
    assert!(is_success(&result));

    let result = call(
        &client,
        "zamvoyage_booking_contact",
        serde_json::json!({
            "draft_id": id,
            "first_name": "Thandiwe",
            "last_name": "Mwansa",
            "email": "   ",
            "phone": "+260 97 555 0101",
            "country": "Zambia",
        }),
    )
    .await;
    assert!(!is_success(&result));
    let text = extract_text(&result);
    assert!(text.contains("Could not save contact details:"));
    assert!(text.contains("contact field 'email' must not be empty"));

    teardown(client, server_handle).await;
}

#[tokio::test]
async fn booking_back_walks_one_step_at_a_time() {
    let (client, server_handle) = setup().await;
    let id = start_stay_booking(&client).await;

    let result = call(
        &client,
        "zamvoyage_booking_trip_details",
        serde_json::json!({
            "draft_id": id,
            "checkin": "2026-09-10",
            "checkout": "2026-09-13",
        }),
    )
    .await;
    assert!(is_success(&result));

    let result = call(
        &client,
        "zamvoyage_booking_back",
        serde_json::json!({ "draft_id": id }),
    )
    .await;
    let text = extract_text(&result);
    assert!(is_success(&result), "Expected success, got: {text}");
    assert!(text.contains(&format!("Moved {id} back to step 1 of 4: Trip Details.")));

    // Entered dates survive the walk back.
    let result = call(
        &client,
        "zamvoyage_booking_summary",
        serde_json::json!({ "draft_id": id }),
    )
    .await;
    assert!(extract_text(&result).contains("Dates: 2026-09-10 to 2026-09-13"));

    let result = call(
        &client,
        "zamvoyage_booking_back",
        serde_json::json!({ "draft_id": id }),
    )
    .await;
    assert!(!is_success(&result));
    let text = extract_text(&result);
    assert!(text.contains("Could not move back:"));
    assert!(text.contains("already at the first step"));

    teardown(client, server_handle).await;
}

// ---------------------------------------------------------------------------
// Payment
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_payment_method_is_rejected() {
    let (client, server_handle) = setup().await;
    let id = walk_to_payment(&client).await;

    let result = call(
        &client,
        "zamvoyage_confirm_booking",
        serde_json::json!({ "draft_id": id, "payment_method": "Mobile Money" }),
    )
    .await;
    assert!(!is_success(&result));
    let text = extract_text(&result);
    assert!(text.contains("unknown payment method 'Mobile Money'"));
    assert!(text.contains("Credit Card, Bank Transfer, PayPal"));

    // The draft is still live and confirms with a valid method.
    let result = call(
        &client,
        "zamvoyage_confirm_booking",
        serde_json::json!({ "draft_id": id, "payment_method": "Bank Transfer" }),
    )
    .await;
    let text = extract_text(&result);
    assert!(is_success(&result), "Expected success, got: {text}");
    assert!(text.contains("Payment method: Bank Transfer"));

    teardown(client, server_handle).await;
}

#[tokio::test]
async fn declined_payment_keeps_the_draft_at_the_payment_step() {
    let (client, server_handle) = setup_with(Arc::new(DecliningProcessor)).await;
    let id = walk_to_payment(&client).await;

    let result = call(
        &client,
        "zamvoyage_confirm_booking",
        serde_json::json!({ "draft_id": id, "payment_method": "PayPal" }),
    )
    .await;
    assert!(!is_success(&result));
    let text = extract_text(&result);
    assert!(text.contains("Payment processing failed:"));
    assert!(text.contains("try again"));

    // The draft survives with the chosen method for a retry.
    let result = call(
        &client,
        "zamvoyage_booking_summary",
        serde_json::json!({ "draft_id": id }),
    )
    .await;
    let text = extract_text(&result);
    assert!(is_success(&result), "Expected success, got: {text}");
    assert!(text.contains("Step 4 of 4: Payment & Confirmation"));
    assert!(text.contains("Payment method: PayPal"));

    teardown(client, server_handle).await;
}

// ---------------------------------------------------------------------------
// Cancellation & unknown drafts
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cancel_booking_discards_the_draft() {
    let (client, server_handle) = setup().await;
    let id = start_stay_booking(&client).await;

    let result = call(
        &client,
        "zamvoyage_cancel_booking",
        serde_json::json!({ "draft_id": id }),
    )
    .await;
    let text = extract_text(&result);
    assert!(is_success(&result), "Expected success, got: {text}");
    assert!(text.contains(&format!(
        "Cancelled booking {id} for Tongabezi Lodge. Nothing was charged."
    )));

    let result = call(
        &client,
        "zamvoyage_cancel_booking",
        serde_json::json!({ "draft_id": id }),
    )
    .await;
    assert!(!is_success(&result));
    assert!(extract_text(&result).contains(&format!("No active booking draft '{id}'")));

    teardown(client, server_handle).await;
}

#[tokio::test]
async fn unknown_draft_id_is_reported() {
    let (client, server_handle) = setup().await;

    let result = call(
        &client,
        "zamvoyage_booking_summary",
        serde_json::json!({ "draft_id": "bk-999" }),
    )
    .await;
    assert!(!is_success(&result));
    let text = extract_text(&result);
    assert!(text.contains("No active booking draft 'bk-999'"));
    assert!(text.contains("zamvoyage_start_booking"));

    teardown(client, server_handle).await;
}

// ---------------------------------------------------------------------------
// Booking resources
// ---------------------------------------------------------------------------

#[tokio::test]
async fn booking_resource_tracks_the_draft() {
    let (client, server_handle) = setup().await;
    let id = start_stay_booking(&client).await;

    let result = call(
        &client,
        "zamvoyage_booking_trip_details",
        serde_json::json!({
            "draft_id": id,
            "checkin": "2026-09-10",
            "checkout": "2026-09-13",
        }),
    )
    .await;
    assert!(is_success(&result));

    let result = client
        .peer()
        .read_resource(ReadResourceRequestParams {
            uri: format!("zamvoyage://booking/{id}"),
            meta: None,
        })
        .await
        .expect("read_resource should succeed");
    assert!(
        !result.contents.is_empty(),
        "Resource contents should not be empty"
    );

    teardown(client, server_handle).await;
}

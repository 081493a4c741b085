use std::collections::HashMap;
use std::fmt::Write as _;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use chrono::NaiveDate;
use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        CallToolResult, Content, Implementation, ListResourceTemplatesResult, ListResourcesResult,
        PaginatedRequestParams, ProtocolVersion, RawResource, RawResourceTemplate,
        ReadResourceRequestParams, ReadResourceResult, Resource, ResourceContents,
        ResourceTemplate, ServerCapabilities, ServerInfo,
    },
    schemars,
    service::RequestContext,
    tool, tool_handler, tool_router,
};
use tokio::sync::RwLock;

use crate::config::types::SuggestConfig;
use crate::domain::booking::{
    BookingDraft, ContactInfo, GuestCounts, ItemKind, PAYMENT_METHODS, resolve_booking_item,
};
use crate::domain::catalog::{Destination, Stay};
use crate::domain::currency::Currency;
use crate::domain::dining::DiningCategory;
use crate::domain::filter::{
    DestinationFilter, SortKey, StayFilter, filter_destinations, filter_stays,
};
use crate::domain::search::{
    SearchCategory, SearchHit, parse_search_sort, search_catalog, suggest_destinations,
    suggest_places,
};
use crate::domain::transport::TransportMode;
use crate::ports::catalog::CatalogSource;
use crate::ports::draft_store::DraftStore;
use crate::ports::processor::BookingProcessor;

// ---------- Resource Store ----------

/// Thread-safe store of rendered tool output exposed as MCP resources.
/// Keys are URIs like `zamvoyage://destination/Victoria Falls`.
#[derive(Clone, Default)]
pub struct ResourceStore {
    entries: Arc<RwLock<HashMap<String, ResourceEntry>>>,
}

#[derive(Clone)]
struct ResourceEntry {
    name: String,
    text: String,
}

impl ResourceStore {
    async fn insert(&self, uri: impl Into<String>, name: impl Into<String>, text: String) {
        self.entries.write().await.insert(
            uri.into(),
            ResourceEntry {
                name: name.into(),
                text,
            },
        );
    }

    async fn get(&self, uri: &str) -> Option<ResourceEntry> {
        self.entries.read().await.get(uri).cloned()
    }

    async fn list(&self) -> Vec<(String, String)> {
        self.entries
            .read()
            .await
            .iter()
            .map(|(uri, entry)| (uri.clone(), entry.name.clone()))
            .collect()
    }
}

impl std::fmt::Debug for ResourceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceStore").finish()
    }
}

// ---------- Tool parameter types ----------

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct DestinationsToolParams {
    /// Region labels to keep (e.g. ["Livingstone", "Western Province"])
    pub regions: Option<Vec<String>>,
    /// Activity labels to keep (e.g. ["Wildlife Safari", "Canoe Safari"])
    pub activities: Option<Vec<String>>,
    /// Price brackets to keep (e.g. ["Luxury ($300-500/day)"])
    pub price_ranges: Option<Vec<String>>,
    /// Season brackets to keep (e.g. ["Dry Season (May-Oct)"])
    pub seasons: Option<Vec<String>>,
    /// Sort order: default, name-asc, name-desc, rating-asc or rating-desc
    pub sort: Option<String>,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct DestinationDetailsToolParams {
    /// Destination name from zamvoyage_destinations (e.g. "Victoria Falls")
    pub name: String,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct StaysToolParams {
    /// Nightly price brackets to keep (e.g. ["Luxury ($600-900/night)"])
    pub price_ranges: Option<Vec<String>>,
    /// Rating brackets to keep (e.g. ["4.5+ Stars"])
    pub ratings: Option<Vec<String>>,
    /// Sustainability labels to keep (e.g. ["Eco certified"])
    pub sustainability: Option<Vec<String>>,
    /// Amenities to keep (e.g. ["River Activities", "Spa & Wellness"])
    pub amenities: Option<Vec<String>>,
    /// Sort order: default, name-asc, name-desc, rating-asc, rating-desc, price-asc or price-desc
    pub sort: Option<String>,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct PackageDetailsToolParams {
    /// Package id from zamvoyage_packages (e.g. "zambia-classic")
    pub id: String,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ExploreToolParams {
    /// Attraction category to narrow to (e.g. "Wildlife Safari"); omit for all
    pub category: Option<String>,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct DiningToolParams {
    /// Eatery category: restaurants, traditional or fast_food; omit for all
    pub category: Option<String>,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct TransportToolParams {
    /// Transport mode: taxi, flight or train
    pub mode: String,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct SearchToolParams {
    /// Free-text query matched against names, regions, summaries and highlights
    pub query: String,
    /// Result type: all (default), destinations or stays
    pub category: Option<String>,
    /// Sort order: relevance (default), name-asc, name-desc, rating-asc or rating-desc
    pub sort: Option<String>,
    /// Region filter applied to destination results
    pub regions: Option<Vec<String>>,
    /// Activity filter applied to destination results
    pub activities: Option<Vec<String>>,
    /// Nightly price brackets applied to stay results
    pub price_ranges: Option<Vec<String>>,
    /// Rating brackets applied to stay results
    pub ratings: Option<Vec<String>>,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct SuggestDestinationsToolParams {
    /// Partial destination or region name; omit for the default shortlist
    pub query: Option<String>,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct SuggestLocationsToolParams {
    /// Partial Lusaka place or area name; omit for the default shortlist
    pub query: Option<String>,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct SetCurrencyToolParams {
    /// Currency code: ZMW, USD, EUR, GBP or ZAR
    pub code: String,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct StartBookingToolParams {
    /// Item type: destination, stay or package (anything else books a generic experience)
    pub item_type: Option<String>,
    /// Item name (or package id's display name) to book, e.g. "Tongabezi Lodge"
    pub item: Option<String>,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct TripDetailsToolParams {
    /// Draft id from zamvoyage_start_booking
    pub draft_id: String,
    /// Check-in date (YYYY-MM-DD)
    pub checkin: String,
    /// Check-out date (YYYY-MM-DD)
    pub checkout: String,
    /// Number of adults (default: 2, minimum 1)
    pub adults: Option<u32>,
    /// Number of children
    pub children: Option<u32>,
    /// Number of infants (not billed)
    pub infants: Option<u32>,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct BookingContactToolParams {
    /// Draft id from zamvoyage_start_booking
    pub draft_id: String,
    /// Lead traveler first name
    pub first_name: String,
    /// Lead traveler last name
    pub last_name: String,
    /// Contact email address
    pub email: String,
    /// Contact phone number
    pub phone: String,
    /// Country of residence
    pub country: String,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct BookingRequestsToolParams {
    /// Draft id from zamvoyage_start_booking
    pub draft_id: String,
    /// Free-text special requests
    pub special_requests: Option<String>,
    /// Dietary requirements
    pub dietary_requirements: Option<String>,
    /// Accessibility needs
    pub accessibility_needs: Option<String>,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct BookingBackToolParams {
    /// Draft id from zamvoyage_start_booking
    pub draft_id: String,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct BookingSummaryToolParams {
    /// Draft id from zamvoyage_start_booking
    pub draft_id: String,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ConfirmBookingToolParams {
    /// Draft id from zamvoyage_start_booking
    pub draft_id: String,
    /// Payment method: Credit Card, Bank Transfer or PayPal
    pub payment_method: String,
    /// Subscribe to the newsletter
    pub newsletter: Option<bool>,
    /// Receive SMS updates about the trip
    pub sms_updates: Option<bool>,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CancelBookingToolParams {
    /// Draft id from zamvoyage_start_booking
    pub draft_id: String,
}

// ---------- MCP Server ----------

/// Process-wide display currency, the server-side analog of the site-wide
/// currency picker. Single writer (the set_currency tool), many readers.
#[derive(Clone)]
struct CurrencyState {
    current: Arc<RwLock<Currency>>,
}

impl CurrencyState {
    fn new(initial: Currency) -> Self {
        Self {
            current: Arc::new(RwLock::new(initial)),
        }
    }

    async fn get(&self) -> Currency {
        *self.current.read().await
    }

    async fn set(&self, currency: Currency) -> Currency {
        let mut guard = self.current.write().await;
        std::mem::replace(&mut *guard, currency)
    }
}

impl std::fmt::Debug for CurrencyState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurrencyState").finish()
    }
}

#[derive(Clone)]
pub struct VoyageMcpServer {
    catalog: Arc<dyn CatalogSource>,
    drafts: Arc<dyn DraftStore>,
    processor: Arc<dyn BookingProcessor>,
    suggest: SuggestConfig,
    currency: CurrencyState,
    draft_seq: Arc<AtomicU64>,
    tool_router: ToolRouter<Self>,
    resources: ResourceStore,
}

#[tool_router]
impl VoyageMcpServer {
    pub fn new(
        catalog: Arc<dyn CatalogSource>,
        drafts: Arc<dyn DraftStore>,
        processor: Arc<dyn BookingProcessor>,
        suggest: SuggestConfig,
        currency: Currency,
    ) -> Self {
        Self {
            catalog,
            drafts,
            processor,
            suggest,
            currency: CurrencyState::new(currency),
            draft_seq: Arc::new(AtomicU64::new(1)),
            tool_router: Self::tool_router(),
            resources: ResourceStore::default(),
        }
    }

    fn draft_not_found(id: &str) -> CallToolResult {
        CallToolResult::error(vec![Content::text(format!(
            "No active booking draft '{id}'. It may have expired or been cancelled — start again with zamvoyage_start_booking."
        ))])
    }

    /// Destination card: the base rendering plus the derived facet labels
    /// the filters match against.
    fn destination_card(dest: &Destination) -> String {
        let mut text = dest.to_string();
        let _ = writeln!(text, "Activities: {}", dest.activity_tags().join(", "));
        let _ = writeln!(
            text,
            "Price bracket: {} | Season: {}",
            dest.price_band(),
            dest.season_band()
        );
        text
    }

    fn stay_card(stay: &Stay, currency: Currency) -> String {
        let mut text = stay.describe(currency);
        let _ = write!(text, "\nAmenities: {}", stay.amenities().join(", "));
        text
    }

    async fn store_draft(&self, id: &str, draft: &BookingDraft) {
        let currency = self.currency.get().await;
        self.drafts.insert(id, draft.clone());
        self.resources
            .insert(
                format!("zamvoyage://booking/{id}"),
                format!("Booking {id}"),
                draft.summary(currency),
            )
            .await;
    }

    /// Homepage composition: every headline section of the site in one
    /// rendered text block.
    #[tool(
        name = "zamvoyage_overview",
        description = "Get the ZamVoyage travel overview: featured destinations, signature experiences, premium stays, travel packages, the cultural calendar, traveler stories, and travel insights. Use this as the starting point to discover what the platform offers.",
        annotations(read_only_hint = true, open_world_hint = false)
    )]
    async fn zamvoyage_overview(&self) -> Result<CallToolResult, McpError> {
        let currency = self.currency.get().await;
        let catalog = self.catalog.catalog();

        let mut text = String::new();
        let _ = writeln!(text, "# ZamVoyage — Discover Zambia\n");
        let _ = writeln!(text, "## Featured Destinations");
        for dest in &catalog.destinations {
            let _ = writeln!(
                text,
                "- {} ({}) — Rating: {:.1} | Best season: {}",
                dest.name, dest.region, dest.rating, dest.travel_season
            );
        }
        let _ = writeln!(text, "\n## Signature Experiences");
        for exp in &catalog.experiences {
            let _ = writeln!(text, "{}\n", exp.describe(currency));
        }
        let _ = writeln!(text, "## Premium Stays");
        for stay in &catalog.stays {
            let _ = writeln!(text, "{}\n", stay.describe(currency));
        }
        let _ = writeln!(text, "## Travel Packages");
        for package in &catalog.packages {
            let _ = writeln!(text, "- {}", package.overview_line(currency));
        }
        let _ = writeln!(text, "\n## Cultural Calendar");
        for event in &catalog.cultural_events {
            let _ = writeln!(text, "- {event}");
        }
        let _ = writeln!(text, "\n## Traveler Stories");
        for testimonial in &catalog.testimonials {
            let _ = writeln!(text, "- {testimonial}");
        }
        let _ = writeln!(text, "\n## Travel Insights");
        for insight in &catalog.insights {
            let _ = writeln!(text, "- {insight}");
        }

        self.resources
            .insert("zamvoyage://overview", "ZamVoyage Overview", text.clone())
            .await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// List destinations with the facet filters and sorting of the
    /// destinations page.
    #[tool(
        name = "zamvoyage_destinations",
        description = "List featured destinations, optionally filtered by region, activity, price bracket, or season, and sorted. Filter dimensions combine with AND; values within one dimension with OR. Returns each destination with its derived activity tags and brackets.",
        annotations(read_only_hint = true, open_world_hint = false)
    )]
    async fn zamvoyage_destinations(
        &self,
        Parameters(params): Parameters<DestinationsToolParams>,
    ) -> Result<CallToolResult, McpError> {
        let sort = match SortKey::parse(params.sort.as_deref().unwrap_or_default()) {
            Ok(sort) => sort,
            Err(e) => return Ok(CallToolResult::error(vec![Content::text(e.to_string())])),
        };
        if sort.needs_price() {
            return Ok(CallToolResult::error(vec![Content::text(
                "Price sorting is not available for destinations — use it with zamvoyage_stays.",
            )]));
        }
        let filter = DestinationFilter {
            regions: params.regions.unwrap_or_default(),
            activities: params.activities.unwrap_or_default(),
            price_bands: params.price_ranges.unwrap_or_default(),
            seasons: params.seasons.unwrap_or_default(),
        };

        let catalog = self.catalog.catalog();
        let found = filter_destinations(&catalog.destinations, &filter, sort);

        let mut text = String::new();
        if found.is_empty() {
            text.push_str("No destinations match the selected filters. Clear a dimension and try again.\n");
        } else {
            let _ = writeln!(text, "Found {} destinations:\n", found.len());
            for dest in found {
                let _ = writeln!(text, "{}", Self::destination_card(dest));
            }
        }

        self.resources
            .insert("zamvoyage://destinations", "Destinations", text.clone())
            .await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// One destination in full.
    #[tool(
        name = "zamvoyage_destination_details",
        description = "Get one destination in full: summary, best season, highlights, derived activities, and price/season brackets. Requires a destination name from zamvoyage_destinations.",
        annotations(read_only_hint = true, open_world_hint = false)
    )]
    async fn zamvoyage_destination_details(
        &self,
        Parameters(params): Parameters<DestinationDetailsToolParams>,
    ) -> Result<CallToolResult, McpError> {
        let catalog = self.catalog.catalog();
        let wanted = params.name.trim();
        match catalog
            .destinations
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(wanted))
        {
            Some(dest) => {
                let text = Self::destination_card(dest);
                self.resources
                    .insert(
                        format!("zamvoyage://destination/{}", dest.name),
                        format!("Destination: {}", dest.name),
                        text.clone(),
                    )
                    .await;
                Ok(CallToolResult::success(vec![Content::text(text)]))
            }
            None => {
                let names: Vec<&str> = catalog
                    .destinations
                    .iter()
                    .map(|d| d.name.as_str())
                    .collect();
                Ok(CallToolResult::error(vec![Content::text(format!(
                    "No destination named '{}'. Valid names: {}.",
                    params.name,
                    names.join(", "),
                ))]))
            }
        }
    }

    /// List stays with the facet filters and sorting of the hotels page.
    #[tool(
        name = "zamvoyage_stays",
        description = "List lodges and camps, optionally filtered by nightly price bracket, rating bracket, sustainability level, or amenity, and sorted (price sorting supported). Returns each stay with its nightly price in the selected currency.",
        annotations(read_only_hint = true, open_world_hint = false)
    )]
    async fn zamvoyage_stays(
        &self,
        Parameters(params): Parameters<StaysToolParams>,
    ) -> Result<CallToolResult, McpError> {
        let sort = match SortKey::parse(params.sort.as_deref().unwrap_or_default()) {
            Ok(sort) => sort,
            Err(e) => return Ok(CallToolResult::error(vec![Content::text(e.to_string())])),
        };
        let filter = StayFilter {
            price_bands: params.price_ranges.unwrap_or_default(),
            ratings: params.ratings.unwrap_or_default(),
            sustainability_levels: params.sustainability.unwrap_or_default(),
            amenities: params.amenities.unwrap_or_default(),
        };

        let currency = self.currency.get().await;
        let catalog = self.catalog.catalog();
        let found = filter_stays(&catalog.stays, &filter, sort);

        let mut text = String::new();
        if found.is_empty() {
            text.push_str("No stays match the selected filters. Clear a dimension and try again.\n");
        } else {
            let _ = writeln!(text, "Found {} stays:\n", found.len());
            for stay in found {
                let _ = writeln!(text, "{}\n", Self::stay_card(stay, currency));
            }
        }

        self.resources
            .insert("zamvoyage://stays", "Stays", text.clone())
            .await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// All travel packages, one line each.
    #[tool(
        name = "zamvoyage_packages",
        description = "List all multi-day travel packages with price, discount, rating, duration, and difficulty. Each line carries the package id in brackets for zamvoyage_package_details.",
        annotations(read_only_hint = true, open_world_hint = false)
    )]
    async fn zamvoyage_packages(&self) -> Result<CallToolResult, McpError> {
        let currency = self.currency.get().await;
        let catalog = self.catalog.catalog();

        let mut text = String::new();
        let _ = writeln!(text, "Found {} travel packages:\n", catalog.packages.len());
        for package in &catalog.packages {
            let _ = writeln!(text, "- {}", package.overview_line(currency));
        }
        let _ = writeln!(
            text,
            "\nUse zamvoyage_package_details with the id in brackets for includes, highlights and the day-by-day itinerary."
        );

        self.resources
            .insert("zamvoyage://packages", "Travel Packages", text.clone())
            .await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// One package in full, itinerary included.
    #[tool(
        name = "zamvoyage_package_details",
        description = "Get one travel package in full: price breakdown, rating, group size, best time to travel, what's included, highlights, and the day-by-day itinerary. Requires a package id from zamvoyage_packages.",
        annotations(read_only_hint = true, open_world_hint = false)
    )]
    async fn zamvoyage_package_details(
        &self,
        Parameters(params): Parameters<PackageDetailsToolParams>,
    ) -> Result<CallToolResult, McpError> {
        let currency = self.currency.get().await;
        let catalog = self.catalog.catalog();
        let wanted = params.id.trim();
        match catalog
            .packages
            .iter()
            .find(|p| p.id.eq_ignore_ascii_case(wanted))
        {
            Some(package) => {
                let text = package.details(currency);
                self.resources
                    .insert(
                        format!("zamvoyage://package/{}", package.id),
                        format!("Package: {}", package.name),
                        text.clone(),
                    )
                    .await;
                Ok(CallToolResult::success(vec![Content::text(text)]))
            }
            None => {
                let ids: Vec<&str> = catalog.packages.iter().map(|p| p.id.as_str()).collect();
                Ok(CallToolResult::error(vec![Content::text(format!(
                    "No package with id '{}'. Valid ids: {}.",
                    params.id,
                    ids.join(", "),
                ))]))
            }
        }
    }

    /// Attractions grouped by category, plus the quick-experience list.
    #[tool(
        name = "zamvoyage_explore",
        description = "Explore Zambia's attractions with per-category counts, optionally narrowed to one category, plus shorter add-on experiences. Categories are derived from the catalog (e.g. Natural Wonder, Wildlife Safari).",
        annotations(read_only_hint = true, open_world_hint = false)
    )]
    async fn zamvoyage_explore(
        &self,
        Parameters(params): Parameters<ExploreToolParams>,
    ) -> Result<CallToolResult, McpError> {
        let currency = self.currency.get().await;
        let catalog = self.catalog.catalog();

        // Category counts in catalog order.
        let mut counts: Vec<(&str, usize)> = Vec::new();
        for attraction in &catalog.attractions {
            match counts
                .iter_mut()
                .find(|(category, _)| *category == attraction.category.as_str())
            {
                Some((_, n)) => *n += 1,
                None => counts.push((attraction.category.as_str(), 1)),
            }
        }

        let requested = params
            .category
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty() && !value.eq_ignore_ascii_case("all"));
        let selected = match requested {
            Some(value) => match counts
                .iter()
                .find(|(category, _)| category.eq_ignore_ascii_case(value))
            {
                Some((category, _)) => Some(*category),
                None => {
                    let known: Vec<&str> = counts.iter().map(|(category, _)| *category).collect();
                    return Ok(CallToolResult::error(vec![Content::text(format!(
                        "Unknown attraction category '{value}'. Categories: {}.",
                        known.join(", "),
                    ))]));
                }
            },
            None => None,
        };

        let mut text = String::new();
        let _ = writeln!(text, "# Explore Zambia\n");
        let _ = write!(text, "Categories: All ({})", catalog.attractions.len());
        for (category, n) in &counts {
            let _ = write!(text, ", {category} ({n})");
        }
        let _ = writeln!(text, "\n\n## Attractions");
        for attraction in catalog
            .attractions
            .iter()
            .filter(|a| selected.is_none_or(|category| a.category == category))
        {
            let _ = writeln!(text, "{}\n", attraction.describe(currency));
        }
        let _ = writeln!(text, "## Quick Experiences");
        for experience in &catalog.short_experiences {
            let _ = writeln!(text, "{}\n", experience.describe(currency));
        }

        self.resources
            .insert("zamvoyage://explore", "Explore Zambia", text.clone())
            .await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Eateries by category, featured dishes, and the full menus.
    #[tool(
        name = "zamvoyage_dining",
        description = "List eateries by category (restaurants, traditional, fast_food — default all), the featured dishes, and full restaurant menus. Dining prices are quoted in kwacha as printed.",
        annotations(read_only_hint = true, open_world_hint = false)
    )]
    async fn zamvoyage_dining(
        &self,
        Parameters(params): Parameters<DiningToolParams>,
    ) -> Result<CallToolResult, McpError> {
        let requested = params
            .category
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty() && !value.eq_ignore_ascii_case("all"));
        let selected = match requested {
            Some(value) => match DiningCategory::parse(value) {
                Ok(category) => Some(category),
                Err(e) => return Ok(CallToolResult::error(vec![Content::text(e.to_string())])),
            },
            None => None,
        };

        let catalog = self.catalog.catalog();
        let mut text = String::new();
        let _ = writeln!(text, "# Dining in Zambia\n");
        for category in DiningCategory::ALL
            .into_iter()
            .filter(|c| selected.is_none_or(|s| s == *c))
        {
            let _ = writeln!(text, "## {}", category.label());
            for eatery in catalog.eateries.iter().filter(|e| e.category == category) {
                let _ = writeln!(text, "{eatery}\n");
            }
        }
        let _ = writeln!(text, "## Featured Dishes");
        for dish in &catalog.featured_dishes {
            let _ = writeln!(text, "- {dish}");
        }
        for menu in &catalog.restaurant_menus {
            let _ = writeln!(text, "\n{menu}");
        }

        self.resources
            .insert("zamvoyage://dining", "Dining", text.clone())
            .await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// The option table for one transport mode.
    #[tool(
        name = "zamvoyage_transport",
        description = "List transport options for one mode: taxi (YANGO ride classes with kwacha fares), flight (domestic and regional flights), or train (ZRL and TAZARA services with routes).",
        annotations(read_only_hint = true, open_world_hint = false)
    )]
    async fn zamvoyage_transport(
        &self,
        Parameters(params): Parameters<TransportToolParams>,
    ) -> Result<CallToolResult, McpError> {
        let mode = match TransportMode::parse(&params.mode) {
            Ok(mode) => mode,
            Err(e) => return Ok(CallToolResult::error(vec![Content::text(e.to_string())])),
        };

        let catalog = self.catalog.catalog();
        let mut text = String::new();
        match mode {
            TransportMode::Taxi => {
                let _ = writeln!(text, "Found {} ride options:\n", catalog.rides.len());
                for ride in &catalog.rides {
                    let _ = writeln!(text, "{ride}\n");
                }
            }
            TransportMode::Flight => {
                let _ = writeln!(text, "Found {} flights:\n", catalog.flights.len());
                for flight in &catalog.flights {
                    let _ = writeln!(text, "{flight}\n");
                }
            }
            TransportMode::Train => {
                let _ = writeln!(text, "Found {} trains:\n", catalog.trains.len());
                for train in &catalog.trains {
                    let _ = writeln!(text, "{train}\n");
                }
            }
        }

        let key = match mode {
            TransportMode::Taxi => "taxi",
            TransportMode::Flight => "flight",
            TransportMode::Train => "train",
        };
        self.resources
            .insert(
                format!("zamvoyage://transport/{key}"),
                format!("Transport: {}", mode.label()),
                text.clone(),
            )
            .await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Site-wide search across destinations and stays.
    #[tool(
        name = "zamvoyage_search",
        description = "Search destinations and stays by free text. Category narrows to one type; per-type filters (regions/activities for destinations, price/rating brackets for stays) narrow further. Default order is relevance: destinations before stays, best rated first.",
        annotations(read_only_hint = true, open_world_hint = false)
    )]
    async fn zamvoyage_search(
        &self,
        Parameters(params): Parameters<SearchToolParams>,
    ) -> Result<CallToolResult, McpError> {
        let category = match SearchCategory::parse(params.category.as_deref().unwrap_or_default()) {
            Ok(category) => category,
            Err(e) => return Ok(CallToolResult::error(vec![Content::text(e.to_string())])),
        };
        let sort = match parse_search_sort(params.sort.as_deref().unwrap_or_default()) {
            Ok(sort) => sort,
            Err(e) => return Ok(CallToolResult::error(vec![Content::text(e.to_string())])),
        };
        let dest_filter = DestinationFilter {
            regions: params.regions.unwrap_or_default(),
            activities: params.activities.unwrap_or_default(),
            ..DestinationFilter::default()
        };
        let stay_filter = StayFilter {
            price_bands: params.price_ranges.unwrap_or_default(),
            ratings: params.ratings.unwrap_or_default(),
            ..StayFilter::default()
        };

        let currency = self.currency.get().await;
        let catalog = self.catalog.catalog();
        let hits = search_catalog(
            catalog,
            &params.query,
            category,
            &dest_filter,
            &stay_filter,
            sort,
        );

        let mut text = String::new();
        if hits.is_empty() {
            let _ = writeln!(
                text,
                "No results for '{}'. Try a broader term like \"safari\" or \"river\".",
                params.query.trim(),
            );
        } else {
            let _ = writeln!(
                text,
                "Found {} results for '{}':\n",
                hits.len(),
                params.query.trim(),
            );
            for (i, hit) in hits.iter().enumerate() {
                match hit {
                    SearchHit::Destination(dest) => {
                        let _ = writeln!(
                            text,
                            "{}. **{}** — Destination | {} | Rating: {:.1}\n   {}",
                            i + 1,
                            dest.name,
                            dest.region,
                            dest.rating,
                            dest.summary,
                        );
                    }
                    SearchHit::Stay(stay) => {
                        let _ = writeln!(
                            text,
                            "{}. **{}** — Stay | {} | {}/night | Rating: {:.1}\n   {}",
                            i + 1,
                            stay.name,
                            stay.location,
                            currency.format_usd(stay.price_per_night_usd),
                            stay.rating,
                            stay.summary,
                        );
                    }
                }
            }
        }

        self.resources
            .insert(
                format!("zamvoyage://search/{}", params.query.trim()),
                format!("Search: {}", params.query.trim()),
                text.clone(),
            )
            .await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Destination autocomplete.
    #[tool(
        name = "zamvoyage_suggest_destinations",
        description = "Autocomplete destination names: matches the query against popular destination names and regions (parks, cities, attractions). An empty query returns the default shortlist.",
        annotations(read_only_hint = true, open_world_hint = false)
    )]
    async fn zamvoyage_suggest_destinations(
        &self,
        Parameters(params): Parameters<SuggestDestinationsToolParams>,
    ) -> Result<CallToolResult, McpError> {
        if self.suggest.latency_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.suggest.latency_ms)).await;
        }
        let query = params.query.unwrap_or_default();
        let catalog = self.catalog.catalog();
        let found = suggest_destinations(
            &catalog.popular_destinations,
            &query,
            self.suggest.max_results,
            self.suggest.default_results,
        );

        if found.is_empty() {
            return Ok(CallToolResult::success(vec![Content::text(format!(
                "No destination suggestions for '{}'.",
                query.trim(),
            ))]));
        }
        let mut text = String::from("Suggestions:\n");
        for place in found {
            let _ = writeln!(text, "- {place}");
        }
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Pickup-location autocomplete over the Lusaka corpus.
    #[tool(
        name = "zamvoyage_suggest_locations",
        description = "Autocomplete pickup locations in Lusaka: matches the query against place names and areas (landmarks, malls, hospitals, hotels, the airport). An empty query returns the default shortlist.",
        annotations(read_only_hint = true, open_world_hint = false)
    )]
    async fn zamvoyage_suggest_locations(
        &self,
        Parameters(params): Parameters<SuggestLocationsToolParams>,
    ) -> Result<CallToolResult, McpError> {
        if self.suggest.latency_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.suggest.latency_ms)).await;
        }
        let query = params.query.unwrap_or_default();
        let catalog = self.catalog.catalog();
        let found = suggest_places(
            &catalog.city_places,
            &query,
            self.suggest.max_results,
            self.suggest.default_results,
        );

        if found.is_empty() {
            return Ok(CallToolResult::success(vec![Content::text(format!(
                "No location suggestions for '{}'.",
                query.trim(),
            ))]));
        }
        let mut text = String::from("Suggestions:\n");
        for place in found {
            let _ = writeln!(text, "- {place}");
        }
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// The currency table and the current selection.
    #[tool(
        name = "zamvoyage_currencies",
        description = "List the supported display currencies (ZMW, USD, EUR, GBP, ZAR) with symbols and the current selection. All catalog prices are stored in USD and converted on display.",
        annotations(read_only_hint = true, open_world_hint = false)
    )]
    async fn zamvoyage_currencies(&self) -> Result<CallToolResult, McpError> {
        let current = self.currency.get().await;
        let mut text = String::from("Available currencies:\n");
        for currency in Currency::ALL {
            let marker = if currency == current { " (selected)" } else { "" };
            let _ = writeln!(text, "- {currency}{marker}");
        }
        let _ = writeln!(
            text,
            "\nPrices convert from USD at fixed rates. Switch with zamvoyage_set_currency."
        );
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Switch the process-wide display currency.
    #[tool(
        name = "zamvoyage_set_currency",
        description = "Switch the display currency for all subsequently rendered prices. Accepts ZMW, USD, EUR, GBP, or ZAR.",
        annotations(read_only_hint = false, open_world_hint = false)
    )]
    async fn zamvoyage_set_currency(
        &self,
        Parameters(params): Parameters<SetCurrencyToolParams>,
    ) -> Result<CallToolResult, McpError> {
        match Currency::from_code(&params.code) {
            Ok(currency) => {
                let previous = self.currency.set(currency).await;
                tracing::info!(
                    from = previous.code(),
                    to = currency.code(),
                    "display currency switched"
                );
                Ok(CallToolResult::success(vec![Content::text(format!(
                    "Display currency set to {currency}."
                ))]))
            }
            Err(_) => {
                let codes: Vec<&str> = Currency::ALL.iter().map(|c| c.code()).collect();
                Ok(CallToolResult::error(vec![Content::text(format!(
                    "Unknown currency '{}'. Valid codes: {}.",
                    params.code,
                    codes.join(", "),
                ))]))
            }
        }
    }

    // ---- Booking tools ----

    /// Step 0: create a draft for an item.
    #[tool(
        name = "zamvoyage_start_booking",
        description = "Start a booking draft for a destination, stay, or package (an unknown item books the generic Zambia Experience). Returns a draft id to use with the zamvoyage_booking_* tools. The wizard has 4 steps: trip details, personal information, special requirements, payment & confirmation.",
        annotations(read_only_hint = false, open_world_hint = false)
    )]
    async fn zamvoyage_start_booking(
        &self,
        Parameters(params): Parameters<StartBookingToolParams>,
    ) -> Result<CallToolResult, McpError> {
        let kind = ItemKind::parse(params.item_type.as_deref());
        let item = resolve_booking_item(self.catalog.catalog(), kind, params.item.as_deref());
        let id = format!("bk-{}", self.draft_seq.fetch_add(1, Ordering::Relaxed));
        let draft = BookingDraft::new(item);

        let currency = self.currency.get().await;
        let mut text = String::new();
        let _ = writeln!(
            text,
            "Started booking {id} for {} ({}).",
            draft.item.name,
            draft.item.kind.label(),
        );
        let _ = writeln!(
            text,
            "Base price: {} | Rating: {:.1}",
            currency.format_usd(draft.item.base_price_usd),
            draft.item.rating,
        );
        let _ = writeln!(
            text,
            "\nStep 1 of 4: Trip Details. Provide checkin and checkout (YYYY-MM-DD) plus adults/children/infants via zamvoyage_booking_trip_details."
        );

        tracing::info!(draft_id = %id, item = %draft.item.name, "booking draft created");
        self.store_draft(&id, &draft).await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Step 1: dates and guest counts.
    #[tool(
        name = "zamvoyage_booking_trip_details",
        description = "Set the trip details of a booking draft: check-in and check-out dates (YYYY-MM-DD) and guest counts (adults default 2, minimum 1; infants are not billed). Advances the draft to step 2 and returns the price quote.",
        annotations(read_only_hint = false, open_world_hint = false)
    )]
    async fn zamvoyage_booking_trip_details(
        &self,
        Parameters(params): Parameters<TripDetailsToolParams>,
    ) -> Result<CallToolResult, McpError> {
        let Some(mut draft) = self.drafts.get(&params.draft_id) else {
            return Ok(Self::draft_not_found(&params.draft_id));
        };
        let Ok(check_in) = NaiveDate::parse_from_str(params.checkin.trim(), "%Y-%m-%d") else {
            return Ok(CallToolResult::error(vec![Content::text(format!(
                "Invalid checkin date '{}'. Use the YYYY-MM-DD format.",
                params.checkin,
            ))]));
        };
        let Ok(check_out) = NaiveDate::parse_from_str(params.checkout.trim(), "%Y-%m-%d") else {
            return Ok(CallToolResult::error(vec![Content::text(format!(
                "Invalid checkout date '{}'. Use the YYYY-MM-DD format.",
                params.checkout,
            ))]));
        };

        let mut guests = GuestCounts::default();
        if let Some(adults) = params.adults {
            guests.adults = adults;
        }
        if let Some(children) = params.children {
            guests.children = children;
        }
        if let Some(infants) = params.infants {
            guests.infants = infants;
        }

        match draft.submit_trip_details(check_in, check_out, guests) {
            Ok(()) => {
                let currency = self.currency.get().await;
                let mut text = format!("Trip details saved for {}.\n", params.draft_id);
                if let Some(quote) = draft.quote() {
                    let _ = writeln!(text, "\n{}", quote.render(currency));
                }
                let _ = writeln!(
                    text,
                    "\nStep 2 of 4: Personal Information. Provide first_name, last_name, email, phone and country via zamvoyage_booking_contact."
                );
                self.store_draft(&params.draft_id, &draft).await;
                Ok(CallToolResult::success(vec![Content::text(text)]))
            }
            Err(e) => Ok(CallToolResult::error(vec![Content::text(format!(
                "Could not save trip details: {e}"
            ))])),
        }
    }

    /// Step 2: traveler contact details.
    #[tool(
        name = "zamvoyage_booking_contact",
        description = "Set the lead traveler's contact details on a booking draft: first name, last name, email, phone, and country — all required. Advances the draft to step 3.",
        annotations(read_only_hint = false, open_world_hint = false)
    )]
    async fn zamvoyage_booking_contact(
        &self,
        Parameters(params): Parameters<BookingContactToolParams>,
    ) -> Result<CallToolResult, McpError> {
        let Some(mut draft) = self.drafts.get(&params.draft_id) else {
            return Ok(Self::draft_not_found(&params.draft_id));
        };
        let contact = ContactInfo {
            first_name: params.first_name,
            last_name: params.last_name,
            email: params.email,
            phone: params.phone,
            country: params.country,
        };
        match draft.submit_contact(contact) {
            Ok(()) => {
                let text = format!(
                    "Contact details saved for {}.\n\nStep 3 of 4: Special Requirements. Optionally provide special_requests, dietary_requirements and accessibility_needs via zamvoyage_booking_requests.",
                    params.draft_id,
                );
                self.store_draft(&params.draft_id, &draft).await;
                Ok(CallToolResult::success(vec![Content::text(text)]))
            }
            Err(e) => Ok(CallToolResult::error(vec![Content::text(format!(
                "Could not save contact details: {e}"
            ))])),
        }
    }

    /// Step 3: optional free-text requirements.
    #[tool(
        name = "zamvoyage_booking_requests",
        description = "Record special requests, dietary requirements, and accessibility needs on a booking draft — all optional. Advances the draft to step 4 (payment & confirmation).",
        annotations(read_only_hint = false, open_world_hint = false)
    )]
    async fn zamvoyage_booking_requests(
        &self,
        Parameters(params): Parameters<BookingRequestsToolParams>,
    ) -> Result<CallToolResult, McpError> {
        let Some(mut draft) = self.drafts.get(&params.draft_id) else {
            return Ok(Self::draft_not_found(&params.draft_id));
        };
        match draft.submit_requests(
            params.special_requests,
            params.dietary_requirements,
            params.accessibility_needs,
        ) {
            Ok(()) => {
                let currency = self.currency.get().await;
                let mut text = format!("Requirements saved for {}.\n", params.draft_id);
                if let Some(quote) = draft.quote() {
                    let _ = writeln!(text, "\n{}", quote.render(currency));
                }
                let _ = writeln!(
                    text,
                    "\nStep 4 of 4: Payment & Confirmation. Choose a payment_method ({}) and confirm via zamvoyage_confirm_booking.",
                    PAYMENT_METHODS.join(", "),
                );
                self.store_draft(&params.draft_id, &draft).await;
                Ok(CallToolResult::success(vec![Content::text(text)]))
            }
            Err(e) => Ok(CallToolResult::error(vec![Content::text(format!(
                "Could not save requirements: {e}"
            ))])),
        }
    }

    /// One wizard step backwards.
    #[tool(
        name = "zamvoyage_booking_back",
        description = "Move a booking draft one step backwards. Rejected on step 1 and after confirmation. Entered values are kept, so going forward again does not retype anything.",
        annotations(read_only_hint = false, open_world_hint = false)
    )]
    async fn zamvoyage_booking_back(
        &self,
        Parameters(params): Parameters<BookingBackToolParams>,
    ) -> Result<CallToolResult, McpError> {
        let Some(mut draft) = self.drafts.get(&params.draft_id) else {
            return Ok(Self::draft_not_found(&params.draft_id));
        };
        match draft.go_back() {
            Ok(()) => {
                let text = format!(
                    "Moved {} back to step {} of 4: {}.",
                    params.draft_id,
                    draft.step.number(),
                    draft.step.title(),
                );
                self.store_draft(&params.draft_id, &draft).await;
                Ok(CallToolResult::success(vec![Content::text(text)]))
            }
            Err(e) => Ok(CallToolResult::error(vec![Content::text(format!(
                "Could not move back: {e}"
            ))])),
        }
    }

    /// The draft's review card.
    #[tool(
        name = "zamvoyage_booking_summary",
        description = "Show a booking draft's current step, all captured fields, and the price quote (base price x billable guests x nights plus 15% taxes and fees).",
        annotations(read_only_hint = true, open_world_hint = false)
    )]
    async fn zamvoyage_booking_summary(
        &self,
        Parameters(params): Parameters<BookingSummaryToolParams>,
    ) -> Result<CallToolResult, McpError> {
        let Some(draft) = self.drafts.get(&params.draft_id) else {
            return Ok(Self::draft_not_found(&params.draft_id));
        };
        let currency = self.currency.get().await;
        let text = draft.summary(currency);
        self.resources
            .insert(
                format!("zamvoyage://booking/{}", params.draft_id),
                format!("Booking {}", params.draft_id),
                text.clone(),
            )
            .await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Step 4: payment method, opt-ins, simulated processing.
    #[tool(
        name = "zamvoyage_confirm_booking",
        description = "Confirm a booking draft at step 4: choose a payment method (Credit Card, Bank Transfer, or PayPal) and optional newsletter/SMS opt-ins. Runs the simulated payment processing and returns the confirmation reference and total. The draft is then removed.",
        annotations(read_only_hint = false, open_world_hint = false)
    )]
    async fn zamvoyage_confirm_booking(
        &self,
        Parameters(params): Parameters<ConfirmBookingToolParams>,
    ) -> Result<CallToolResult, McpError> {
        let Some(mut draft) = self.drafts.get(&params.draft_id) else {
            return Ok(Self::draft_not_found(&params.draft_id));
        };
        let quote = match draft.prepare_confirmation(
            &params.payment_method,
            params.newsletter.unwrap_or(false),
            params.sms_updates.unwrap_or(false),
        ) {
            Ok(quote) => quote,
            Err(e) => {
                return Ok(CallToolResult::error(vec![Content::text(format!(
                    "Could not confirm booking: {e}"
                ))]));
            }
        };
        // Keep the chosen method if processing is retried after a failure.
        self.store_draft(&params.draft_id, &draft).await;

        match self.processor.submit(&draft).await {
            Ok(reference) => match draft.finalize(reference) {
                Ok(confirmation) => {
                    self.drafts.remove(&params.draft_id);
                    tracing::info!(
                        draft_id = %params.draft_id,
                        reference = %confirmation.reference,
                        "booking confirmed"
                    );
                    let currency = self.currency.get().await;
                    let mut text = String::new();
                    let _ = writeln!(text, "Booking confirmed!");
                    let _ = writeln!(
                        text,
                        "Reference: {} — keep it for your records.",
                        confirmation.reference
                    );
                    let _ = writeln!(
                        text,
                        "Item: {} ({})",
                        draft.item.name,
                        draft.item.kind.label()
                    );
                    if let Some(method) = &draft.payment_method {
                        let _ = writeln!(text, "Payment method: {method}");
                    }
                    let _ = writeln!(text, "\n{}", quote.render(currency));
                    self.resources
                        .insert(
                            format!("zamvoyage://booking/{}", params.draft_id),
                            format!("Booking {}", params.draft_id),
                            draft.summary(currency),
                        )
                        .await;
                    Ok(CallToolResult::success(vec![Content::text(text)]))
                }
                Err(e) => Ok(CallToolResult::error(vec![Content::text(format!(
                    "Could not confirm booking: {e}"
                ))])),
            },
            Err(e) => Ok(CallToolResult::error(vec![Content::text(format!(
                "Payment processing failed: {e}. The draft is still at the payment step — try again."
            ))])),
        }
    }

    /// Discard a draft.
    #[tool(
        name = "zamvoyage_cancel_booking",
        description = "Discard a booking draft immediately. Nothing is charged; the draft id becomes invalid.",
        annotations(read_only_hint = false, destructive_hint = true, open_world_hint = false)
    )]
    async fn zamvoyage_cancel_booking(
        &self,
        Parameters(params): Parameters<CancelBookingToolParams>,
    ) -> Result<CallToolResult, McpError> {
        match self.drafts.remove(&params.draft_id) {
            Some(draft) => {
                tracing::info!(draft_id = %params.draft_id, item = %draft.item.name, "booking draft cancelled");
                self.resources
                    .insert(
                        format!("zamvoyage://booking/{}", params.draft_id),
                        format!("Booking {}", params.draft_id),
                        format!("Booking draft {} was cancelled.", params.draft_id),
                    )
                    .await;
                Ok(CallToolResult::success(vec![Content::text(format!(
                    "Cancelled booking {} for {}. Nothing was charged.",
                    params.draft_id, draft.item.name,
                ))]))
            }
            None => Ok(Self::draft_not_found(&params.draft_id)),
        }
    }
}

#[tool_handler]
impl ServerHandler for VoyageMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "ZamVoyage MCP server for planning and booking travel across Zambia.\n\
                 \n\
                 ## Catalog Tools\n\
                 - zamvoyage_overview: homepage composition (destinations, experiences, stays, packages, culture, testimonials, insights)\n\
                 - zamvoyage_destinations: destination list with region/activity/price/season filters and sorting\n\
                 - zamvoyage_destination_details: one destination in full\n\
                 - zamvoyage_stays: lodge and camp list with price/rating/sustainability/amenity filters, price sorting\n\
                 - zamvoyage_packages + zamvoyage_package_details: multi-day packages with day-by-day itineraries\n\
                 - zamvoyage_explore: attractions by category plus quick experiences\n\
                 - zamvoyage_dining: eateries by category, featured dishes, full menus\n\
                 - zamvoyage_transport: taxi, flight and train options\n\
                 \n\
                 ## Search & Suggestions\n\
                 - zamvoyage_search: free-text search over destinations and stays with per-type filters\n\
                 - zamvoyage_suggest_destinations / zamvoyage_suggest_locations: autocomplete\n\
                 \n\
                 ## Currency\n\
                 - zamvoyage_currencies: supported currencies and the current selection\n\
                 - zamvoyage_set_currency: switch the display currency for all prices (default ZMW)\n\
                 \n\
                 ## Booking\n\
                 A 4-step wizard on a draft: zamvoyage_start_booking creates it, then\n\
                 zamvoyage_booking_trip_details -> zamvoyage_booking_contact ->\n\
                 zamvoyage_booking_requests -> zamvoyage_confirm_booking. Steps are strictly\n\
                 in order; zamvoyage_booking_back moves one step earlier, zamvoyage_booking_summary\n\
                 shows the draft with its price quote, zamvoyage_cancel_booking discards it.\n\
                 Quote: base price x billable guests (adults + children) x nights, plus 15% taxes.\n\
                 \n\
                 ## Resources\n\
                 Rendered tool output is cached as MCP resources under zamvoyage:// URIs —\n\
                 read them to reference earlier results without re-running tools."
                    .into(),
            ),
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        let entries = self.resources.list().await;
        let resources: Vec<Resource> = entries
            .into_iter()
            .map(|(uri, name)| Resource {
                annotations: None,
                raw: RawResource {
                    uri,
                    name,
                    title: None,
                    description: None,
                    mime_type: Some("text/plain".into()),
                    size: None,
                    icons: None,
                    meta: None,
                },
            })
            .collect();
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, McpError> {
        let templates = vec![
            ResourceTemplate {
                annotations: None,
                raw: RawResourceTemplate {
                    uri_template: "zamvoyage://destination/{name}".into(),
                    name: "Destination".into(),
                    title: Some("Destination details".into()),
                    description: Some(
                        "Full destination card (fetched via zamvoyage_destination_details)".into(),
                    ),
                    mime_type: Some("text/plain".into()),
                    icons: None,
                },
            },
            ResourceTemplate {
                annotations: None,
                raw: RawResourceTemplate {
                    uri_template: "zamvoyage://package/{id}".into(),
                    name: "Travel Package".into(),
                    title: Some("Package details".into()),
                    description: Some(
                        "Package with includes and itinerary (fetched via zamvoyage_package_details)"
                            .into(),
                    ),
                    mime_type: Some("text/plain".into()),
                    icons: None,
                },
            },
            ResourceTemplate {
                annotations: None,
                raw: RawResourceTemplate {
                    uri_template: "zamvoyage://search/{query}".into(),
                    name: "Search Results".into(),
                    title: Some("Search results".into()),
                    description: Some(
                        "Destinations and stays matching a query (fetched via zamvoyage_search)"
                            .into(),
                    ),
                    mime_type: Some("text/plain".into()),
                    icons: None,
                },
            },
            ResourceTemplate {
                annotations: None,
                raw: RawResourceTemplate {
                    uri_template: "zamvoyage://transport/{mode}".into(),
                    name: "Transport Options".into(),
                    title: Some("Transport options".into()),
                    description: Some(
                        "Taxi, flight or train option table (fetched via zamvoyage_transport)"
                            .into(),
                    ),
                    mime_type: Some("text/plain".into()),
                    icons: None,
                },
            },
            ResourceTemplate {
                annotations: None,
                raw: RawResourceTemplate {
                    uri_template: "zamvoyage://booking/{draft_id}".into(),
                    name: "Booking Draft".into(),
                    title: Some("Booking draft summary".into()),
                    description: Some(
                        "Current state of a booking draft (updated by the zamvoyage_booking_* tools)"
                            .into(),
                    ),
                    mime_type: Some("text/plain".into()),
                    icons: None,
                },
            },
        ];
        Ok(ListResourceTemplatesResult {
            resource_templates: templates,
            next_cursor: None,
            meta: None,
        })
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        match self.resources.get(&request.uri).await {
            Some(entry) => Ok(ReadResourceResult {
                contents: vec![ResourceContents::text(entry.text, request.uri)],
            }),
            None => Err(McpError::resource_not_found(
                format!("resource not found: {}", request.uri),
                None,
            )),
        }
    }
}

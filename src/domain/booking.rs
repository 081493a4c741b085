use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::catalog::Catalog;
use crate::domain::currency::Currency;
use crate::error::{Result, VoyageError};

/// Flat 15% applied to every quote.
pub const TAX_RATE: f64 = 0.15;

/// Accepted values for the payment step, matching the site's radio group.
pub const PAYMENT_METHODS: [&str; 3] = ["Credit Card", "Bank Transfer", "PayPal"];

const FALLBACK_ITEM_NAME: &str = "Zambia Experience";
const FALLBACK_ITEM_RATING: f64 = 4.8;

/// The four form steps plus the terminal confirmed state. Transitions
/// are strictly linear; the only way back is one step at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStep {
    TripDetails,
    PersonalInfo,
    SpecialRequests,
    PaymentConfirmation,
    Submitted,
}

impl BookingStep {
    pub fn number(self) -> u8 {
        match self {
            BookingStep::TripDetails => 1,
            BookingStep::PersonalInfo => 2,
            BookingStep::SpecialRequests => 3,
            BookingStep::PaymentConfirmation => 4,
            BookingStep::Submitted => 5,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            BookingStep::TripDetails => "Trip Details",
            BookingStep::PersonalInfo => "Personal Information",
            BookingStep::SpecialRequests => "Special Requirements",
            BookingStep::PaymentConfirmation => "Payment & Confirmation",
            BookingStep::Submitted => "Confirmed",
        }
    }
}

impl std::fmt::Display for BookingStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// What kind of catalog entry a booking is for. Unrecognised values fall
/// back to a generic experience rather than failing the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Destination,
    Stay,
    Package,
    General,
}

impl ItemKind {
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim).map(str::to_ascii_lowercase).as_deref() {
            Some("destination") => ItemKind::Destination,
            Some("hotel") | Some("stay") => ItemKind::Stay,
            Some("package") => ItemKind::Package,
            _ => ItemKind::General,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ItemKind::Destination => "Destination",
            ItemKind::Stay => "Stay",
            ItemKind::Package => "Package",
            ItemKind::General => "Experience",
        }
    }

    /// Per-person per-night price used when the catalog entry carries no
    /// price of its own.
    pub fn default_price_usd(self) -> f64 {
        match self {
            ItemKind::Destination => 350.0,
            ItemKind::Stay => 450.0,
            ItemKind::Package => 1200.0,
            ItemKind::General => 350.0,
        }
    }
}

/// The thing being booked, with its base price already resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingItem {
    pub kind: ItemKind,
    pub name: String,
    pub rating: f64,
    pub base_price_usd: f64,
}

/// Looks the item up by exact name. Stays price per night and packages
/// per person; destinations and anything unmatched use the kind's
/// default price. A miss books the generic experience instead of
/// erroring, same as the site's booking page.
pub fn resolve_booking_item(catalog: &Catalog, kind: ItemKind, name: Option<&str>) -> BookingItem {
    let name = name.map(str::trim).filter(|n| !n.is_empty());
    match kind {
        ItemKind::Destination => {
            if let Some(dest) = catalog.destinations.iter().find(|d| Some(d.name.as_str()) == name) {
                return BookingItem {
                    kind,
                    name: dest.name.clone(),
                    rating: dest.rating,
                    base_price_usd: kind.default_price_usd(),
                };
            }
        }
        ItemKind::Stay => {
            if let Some(stay) = catalog.stays.iter().find(|s| Some(s.name.as_str()) == name) {
                return BookingItem {
                    kind,
                    name: stay.name.clone(),
                    rating: stay.rating,
                    base_price_usd: stay.price_per_night_usd,
                };
            }
        }
        ItemKind::Package => {
            if let Some(pkg) = catalog.packages.iter().find(|p| Some(p.name.as_str()) == name) {
                return BookingItem {
                    kind,
                    name: pkg.name.clone(),
                    rating: pkg.rating,
                    base_price_usd: pkg.price_usd,
                };
            }
        }
        ItemKind::General => {}
    }
    BookingItem {
        kind,
        name: name.unwrap_or(FALLBACK_ITEM_NAME).to_string(),
        rating: FALLBACK_ITEM_RATING,
        base_price_usd: kind.default_price_usd(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestCounts {
    pub adults: u32,
    pub children: u32,
    pub infants: u32,
}

impl Default for GuestCounts {
    fn default() -> Self {
        GuestCounts { adults: 2, children: 0, infants: 0 }
    }
}

impl GuestCounts {
    /// Infants stay free; only adults and children are billed.
    pub fn billable(self) -> u32 {
        self.adults + self.children
    }

    fn validate(self) -> Result<()> {
        if self.adults == 0 {
            return Err(VoyageError::InvalidParams {
                reason: "at least one adult guest is required".into(),
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for GuestCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} adult(s), {} child(ren), {} infant(s)",
            self.adults, self.children, self.infants
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub country: String,
}

impl ContactInfo {
    fn validate(&self) -> Result<()> {
        let fields = [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("country", &self.country),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(VoyageError::InvalidParams {
                    reason: format!("contact field '{name}' must not be empty"),
                });
            }
        }
        Ok(())
    }
}

/// Number of billable nights. Same-day trips clamp to one night so a
/// valid range never prices at zero.
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> u32 {
    (check_out - check_in).num_days().max(1) as u32
}

/// Derived price breakdown. Recomputed from the draft on demand, never
/// stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub nights: u32,
    pub billable_guests: u32,
    pub subtotal_usd: f64,
    pub tax_usd: f64,
    pub total_usd: f64,
}

impl PriceQuote {
    pub fn compute(
        base_price_usd: f64,
        guests: GuestCounts,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Self {
        let nights = nights_between(check_in, check_out);
        let billable_guests = guests.billable();
        let subtotal_usd = base_price_usd * f64::from(billable_guests) * f64::from(nights);
        let tax_usd = subtotal_usd * TAX_RATE;
        PriceQuote {
            nights,
            billable_guests,
            subtotal_usd,
            tax_usd,
            total_usd: subtotal_usd + tax_usd,
        }
    }

    pub fn render(&self, currency: Currency) -> String {
        format!(
            "{} guest(s) x {} night(s)\nSubtotal: {}\nTaxes & fees (15%): {}\nTotal: {}",
            self.billable_guests,
            self.nights,
            currency.format_usd(self.subtotal_usd),
            currency.format_usd(self.tax_usd),
            currency.format_usd(self.total_usd),
        )
    }
}

/// Issued once the simulated processor accepts the draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Confirmation {
    pub reference: String,
    pub total_usd: f64,
}

/// A booking in progress. Field updates only happen through the step
/// methods, which enforce the linear step order and per-step
/// validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingDraft {
    pub item: BookingItem,
    pub step: BookingStep,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub guests: GuestCounts,
    pub contact: Option<ContactInfo>,
    pub special_requests: String,
    pub dietary_requirements: String,
    pub accessibility: String,
    pub payment_method: Option<String>,
    pub newsletter: bool,
    pub updates: bool,
    pub confirmation: Option<Confirmation>,
}

impl BookingDraft {
    pub fn new(item: BookingItem) -> Self {
        BookingDraft {
            item,
            step: BookingStep::TripDetails,
            check_in: None,
            check_out: None,
            guests: GuestCounts::default(),
            contact: None,
            special_requests: String::new(),
            dietary_requirements: String::new(),
            accessibility: String::new(),
            payment_method: None,
            newsletter: false,
            updates: false,
            confirmation: None,
        }
    }

    fn expect_step(&self, step: BookingStep) -> Result<()> {
        if self.step != step {
            return Err(VoyageError::BookingState {
                reason: format!(
                    "expected step {} ({}), draft is at step {} ({})",
                    step.number(),
                    step.title(),
                    self.step.number(),
                    self.step.title(),
                ),
            });
        }
        Ok(())
    }

    /// Step 1. Requires both dates in order and at least one adult.
    pub fn submit_trip_details(
        &mut self,
        check_in: NaiveDate,
        check_out: NaiveDate,
        guests: GuestCounts,
    ) -> Result<()> {
        self.expect_step(BookingStep::TripDetails)?;
        guests.validate()?;
        if check_out < check_in {
            return Err(VoyageError::InvalidParams {
                reason: format!("check-out {check_out} is before check-in {check_in}"),
            });
        }
        self.check_in = Some(check_in);
        self.check_out = Some(check_out);
        self.guests = guests;
        self.step = BookingStep::PersonalInfo;
        Ok(())
    }

    /// Step 2. All five contact fields are required.
    pub fn submit_contact(&mut self, contact: ContactInfo) -> Result<()> {
        self.expect_step(BookingStep::PersonalInfo)?;
        contact.validate()?;
        self.contact = Some(contact);
        self.step = BookingStep::SpecialRequests;
        Ok(())
    }

    /// Step 3. Everything here is optional free text.
    pub fn submit_requests(
        &mut self,
        special_requests: Option<String>,
        dietary_requirements: Option<String>,
        accessibility: Option<String>,
    ) -> Result<()> {
        self.expect_step(BookingStep::SpecialRequests)?;
        if let Some(text) = special_requests {
            self.special_requests = text;
        }
        if let Some(text) = dietary_requirements {
            self.dietary_requirements = text;
        }
        if let Some(text) = accessibility {
            self.accessibility = text;
        }
        self.step = BookingStep::PaymentConfirmation;
        Ok(())
    }

    /// One step backwards. Entered data is kept so going forward again
    /// does not retype anything.
    pub fn go_back(&mut self) -> Result<()> {
        self.step = match self.step {
            BookingStep::TripDetails => {
                return Err(VoyageError::BookingState {
                    reason: "already at the first step".into(),
                });
            }
            BookingStep::PersonalInfo => BookingStep::TripDetails,
            BookingStep::SpecialRequests => BookingStep::PersonalInfo,
            BookingStep::PaymentConfirmation => BookingStep::SpecialRequests,
            BookingStep::Submitted => {
                return Err(VoyageError::BookingState {
                    reason: "booking is already confirmed".into(),
                });
            }
        };
        Ok(())
    }

    /// Step 4. Validates the payment method, records the opt-ins, and
    /// returns the quote the processor should charge. The draft stays at
    /// the payment step until [`finalize`](Self::finalize).
    pub fn prepare_confirmation(
        &mut self,
        payment_method: &str,
        newsletter: bool,
        updates: bool,
    ) -> Result<PriceQuote> {
        self.expect_step(BookingStep::PaymentConfirmation)?;
        let canonical = PAYMENT_METHODS
            .iter()
            .find(|m| m.eq_ignore_ascii_case(payment_method.trim()))
            .ok_or_else(|| VoyageError::InvalidParams {
                reason: format!(
                    "unknown payment method '{}' (choose one of: {})",
                    payment_method,
                    PAYMENT_METHODS.join(", "),
                ),
            })?;
        self.payment_method = Some((*canonical).to_string());
        self.newsletter = newsletter;
        self.updates = updates;
        self.quote().ok_or_else(|| VoyageError::BookingState {
            reason: "trip dates are missing".into(),
        })
    }

    /// Terminal transition, called with the processor's reference.
    pub fn finalize(&mut self, reference: String) -> Result<Confirmation> {
        self.expect_step(BookingStep::PaymentConfirmation)?;
        if self.payment_method.is_none() {
            return Err(VoyageError::BookingState {
                reason: "no payment method selected".into(),
            });
        }
        let quote = self.quote().ok_or_else(|| VoyageError::BookingState {
            reason: "trip dates are missing".into(),
        })?;
        let confirmation = Confirmation { reference, total_usd: quote.total_usd };
        self.confirmation = Some(confirmation.clone());
        self.step = BookingStep::Submitted;
        Ok(confirmation)
    }

    /// Price breakdown for the current draft, once dates are known.
    pub fn quote(&self) -> Option<PriceQuote> {
        let (check_in, check_out) = (self.check_in?, self.check_out?);
        Some(PriceQuote::compute(
            self.item.base_price_usd,
            self.guests,
            check_in,
            check_out,
        ))
    }

    /// Review-card text shown by the summary tool.
    pub fn summary(&self, currency: Currency) -> String {
        use std::fmt::Write as _;

        let mut out = String::new();
        let _ = writeln!(
            out,
            "# Booking: {} ({})",
            self.item.name,
            self.item.kind.label()
        );
        let _ = writeln!(
            out,
            "Step {} of 4: {}",
            self.step.number().min(4),
            self.step.title()
        );
        let _ = writeln!(
            out,
            "Base price: {} | Rating: {:.1}",
            currency.format_usd(self.item.base_price_usd),
            self.item.rating,
        );
        if let (Some(check_in), Some(check_out)) = (self.check_in, self.check_out) {
            let _ = writeln!(out, "Dates: {check_in} to {check_out}");
            let _ = writeln!(out, "Guests: {}", self.guests);
        }
        if let Some(contact) = &self.contact {
            let _ = writeln!(
                out,
                "Contact: {} {} <{}> | {} | {}",
                contact.first_name, contact.last_name, contact.email, contact.phone, contact.country,
            );
        }
        if !self.special_requests.is_empty() {
            let _ = writeln!(out, "Special requests: {}", self.special_requests);
        }
        if !self.dietary_requirements.is_empty() {
            let _ = writeln!(out, "Dietary: {}", self.dietary_requirements);
        }
        if !self.accessibility.is_empty() {
            let _ = writeln!(out, "Accessibility: {}", self.accessibility);
        }
        if let Some(method) = &self.payment_method {
            let _ = writeln!(out, "Payment method: {method}");
        }
        if let Some(quote) = self.quote() {
            let _ = writeln!(out, "\n{}", quote.render(currency));
        }
        if let Some(confirmation) = &self.confirmation {
            let _ = writeln!(out, "\nBooking reference: {}", confirmation.reference);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Stay;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_item() -> BookingItem {
        BookingItem {
            kind: ItemKind::Stay,
            name: "Tongabezi Lodge".into(),
            rating: 4.9,
            base_price_usd: 500.0,
        }
    }

    fn contact() -> ContactInfo {
        ContactInfo {
            first_name: "Amos".into(),
            last_name: "Banda".into(),
            email: "amos@example.com".into(),
            phone: "+260 97 000 0000".into(),
            country: "Zambia".into(),
        }
    }

    #[test]
    fn quote_matches_worked_example() {
        let quote = PriceQuote::compute(
            500.0,
            GuestCounts { adults: 2, children: 0, infants: 0 },
            date(2024, 1, 1),
            date(2024, 1, 4),
        );
        assert_eq!(quote.nights, 3);
        assert_eq!(quote.billable_guests, 2);
        assert_eq!(quote.subtotal_usd, 3000.0);
        assert_eq!(quote.tax_usd, 450.0);
        assert_eq!(quote.total_usd, 3450.0);
    }

    #[test]
    fn same_day_trip_bills_one_night() {
        assert_eq!(nights_between(date(2024, 5, 10), date(2024, 5, 10)), 1);
        assert_eq!(nights_between(date(2024, 5, 10), date(2024, 5, 11)), 1);
        assert_eq!(nights_between(date(2024, 5, 10), date(2024, 5, 17)), 7);
    }

    #[test]
    fn infants_are_not_billed() {
        let quote = PriceQuote::compute(
            100.0,
            GuestCounts { adults: 2, children: 1, infants: 2 },
            date(2024, 1, 1),
            date(2024, 1, 2),
        );
        assert_eq!(quote.billable_guests, 3);
        assert_eq!(quote.subtotal_usd, 300.0);
    }

    #[test]
    fn full_flow_reaches_confirmation() {
        let mut draft = BookingDraft::new(sample_item());
        assert_eq!(draft.step, BookingStep::TripDetails);

        draft
            .submit_trip_details(date(2024, 1, 1), date(2024, 1, 4), GuestCounts::default())
            .unwrap();
        assert_eq!(draft.step, BookingStep::PersonalInfo);

        draft.submit_contact(contact()).unwrap();
        assert_eq!(draft.step, BookingStep::SpecialRequests);

        draft
            .submit_requests(Some("Vegetarian dinner".into()), None, None)
            .unwrap();
        assert_eq!(draft.step, BookingStep::PaymentConfirmation);

        let quote = draft
            .prepare_confirmation("Credit Card", true, false)
            .unwrap();
        assert_eq!(quote.total_usd, 3450.0);

        let confirmation = draft.finalize("ZMB-123456".into()).unwrap();
        assert_eq!(draft.step, BookingStep::Submitted);
        assert_eq!(confirmation.reference, "ZMB-123456");
        assert_eq!(confirmation.total_usd, 3450.0);
    }

    #[test]
    fn steps_cannot_be_skipped() {
        let mut draft = BookingDraft::new(sample_item());
        let err = draft.submit_contact(contact()).unwrap_err();
        assert!(err.to_string().contains("Booking step not allowed"));

        let err = draft
            .prepare_confirmation("Credit Card", false, false)
            .unwrap_err();
        assert!(err.to_string().contains("Trip Details"));
    }

    #[test]
    fn inverted_dates_are_rejected() {
        let mut draft = BookingDraft::new(sample_item());
        let err = draft
            .submit_trip_details(date(2024, 1, 4), date(2024, 1, 1), GuestCounts::default())
            .unwrap_err();
        assert!(err.to_string().contains("before check-in"));
        assert_eq!(draft.step, BookingStep::TripDetails);
    }

    #[test]
    fn at_least_one_adult_required() {
        let mut draft = BookingDraft::new(sample_item());
        let err = draft
            .submit_trip_details(
                date(2024, 1, 1),
                date(2024, 1, 2),
                GuestCounts { adults: 0, children: 2, infants: 0 },
            )
            .unwrap_err();
        assert!(err.to_string().contains("at least one adult"));
    }

    #[test]
    fn blank_contact_field_rejected() {
        let mut draft = BookingDraft::new(sample_item());
        draft
            .submit_trip_details(date(2024, 1, 1), date(2024, 1, 2), GuestCounts::default())
            .unwrap();
        let mut bad = contact();
        bad.email = "  ".into();
        let err = draft.submit_contact(bad).unwrap_err();
        assert!(err.to_string().contains("email"));
        assert_eq!(draft.step, BookingStep::PersonalInfo);
    }

    #[test]
    fn unknown_payment_method_rejected() {
        let mut draft = BookingDraft::new(sample_item());
        draft
            .submit_trip_details(date(2024, 1, 1), date(2024, 1, 2), GuestCounts::default())
            .unwrap();
        draft.submit_contact(contact()).unwrap();
        draft.submit_requests(None, None, None).unwrap();
        let err = draft
            .prepare_confirmation("Mobile Money", false, false)
            .unwrap_err();
        assert!(err.to_string().contains("Credit Card, Bank Transfer, PayPal"));
        // Case differences are tolerated and canonicalised.
        draft.prepare_confirmation("paypal", false, false).unwrap();
        assert_eq!(draft.payment_method.as_deref(), Some("PayPal"));
    }

    #[test]
    fn finalize_requires_payment_selection() {
        let mut draft = BookingDraft::new(sample_item());
        draft
            .submit_trip_details(date(2024, 1, 1), date(2024, 1, 2), GuestCounts::default())
            .unwrap();
        draft.submit_contact(contact()).unwrap();
        draft.submit_requests(None, None, None).unwrap();
        let err = draft.finalize("ZMB-000001".into()).unwrap_err();
        assert!(err.to_string().contains("no payment method"));
    }

    #[test]
    fn back_walks_one_step_and_keeps_data() {
        let mut draft = BookingDraft::new(sample_item());
        draft
            .submit_trip_details(date(2024, 1, 1), date(2024, 1, 4), GuestCounts::default())
            .unwrap();
        draft.submit_contact(contact()).unwrap();
        draft.go_back().unwrap();
        assert_eq!(draft.step, BookingStep::PersonalInfo);
        assert!(draft.contact.is_some());
        draft.go_back().unwrap();
        assert_eq!(draft.step, BookingStep::TripDetails);
        assert!(draft.go_back().is_err());
        // Dates survive the walk back and the draft can move forward again.
        assert_eq!(draft.check_in, Some(date(2024, 1, 1)));
        draft
            .submit_trip_details(date(2024, 2, 1), date(2024, 2, 3), GuestCounts::default())
            .unwrap();
        assert_eq!(draft.step, BookingStep::PersonalInfo);
    }

    #[test]
    fn submitted_draft_rejects_further_transitions() {
        let mut draft = BookingDraft::new(sample_item());
        draft
            .submit_trip_details(date(2024, 1, 1), date(2024, 1, 2), GuestCounts::default())
            .unwrap();
        draft.submit_contact(contact()).unwrap();
        draft.submit_requests(None, None, None).unwrap();
        draft.prepare_confirmation("PayPal", false, false).unwrap();
        draft.finalize("ZMB-654321".into()).unwrap();
        assert!(draft.go_back().is_err());
        assert!(draft
            .submit_trip_details(date(2024, 3, 1), date(2024, 3, 2), GuestCounts::default())
            .is_err());
    }

    #[test]
    fn resolve_prices_stay_per_night() {
        let catalog = Catalog {
            stays: vec![Stay {
                name: "Royal Zambezi Lodge".into(),
                location: "Lower Zambezi".into(),
                summary: "Safari lodge.".into(),
                rating: 4.7,
                price_per_night_usd: 540.0,
                sustainability_level: "Eco certified".into(),
            }],
            ..Catalog::default()
        };
        let item = resolve_booking_item(&catalog, ItemKind::Stay, Some("Royal Zambezi Lodge"));
        assert_eq!(item.base_price_usd, 540.0);
        assert_eq!(item.rating, 4.7);
        assert_eq!(item.kind, ItemKind::Stay);
    }

    #[test]
    fn resolve_falls_back_to_generic_experience() {
        let catalog = Catalog::default();
        let item = resolve_booking_item(&catalog, ItemKind::Destination, Some("Atlantis"));
        assert_eq!(item.name, "Atlantis");
        assert_eq!(item.rating, 4.8);
        assert_eq!(item.base_price_usd, 350.0);

        let item = resolve_booking_item(&catalog, ItemKind::General, None);
        assert_eq!(item.name, "Zambia Experience");
        assert_eq!(item.base_price_usd, 350.0);

        let item = resolve_booking_item(&catalog, ItemKind::Package, Some("Ghost Package"));
        assert_eq!(item.base_price_usd, 1200.0);
    }

    #[test]
    fn item_kind_parse_accepts_aliases() {
        assert_eq!(ItemKind::parse(Some("hotel")), ItemKind::Stay);
        assert_eq!(ItemKind::parse(Some("Destination")), ItemKind::Destination);
        assert_eq!(ItemKind::parse(Some("spaceship")), ItemKind::General);
        assert_eq!(ItemKind::parse(None), ItemKind::General);
    }

    #[test]
    fn quote_render_converts_currency() {
        let quote = PriceQuote::compute(
            500.0,
            GuestCounts::default(),
            date(2024, 1, 1),
            date(2024, 1, 4),
        );
        let text = quote.render(Currency::Zmw);
        assert!(text.contains("Subtotal: K82,500"));
        assert!(text.contains("Taxes & fees (15%): K12,375"));
        assert!(text.contains("Total: K94,875"));
    }

    #[test]
    fn summary_reflects_progress() {
        let mut draft = BookingDraft::new(sample_item());
        let text = draft.summary(Currency::Usd);
        assert!(text.contains("# Booking: Tongabezi Lodge (Stay)"));
        assert!(text.contains("Step 1 of 4: Trip Details"));
        assert!(!text.contains("Dates:"));

        draft
            .submit_trip_details(date(2024, 1, 1), date(2024, 1, 4), GuestCounts::default())
            .unwrap();
        let text = draft.summary(Currency::Usd);
        assert!(text.contains("Dates: 2024-01-01 to 2024-01-04"));
        assert!(text.contains("Total: $3,450"));
    }
}

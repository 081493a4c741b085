use serde::{Deserialize, Serialize};

use crate::domain::currency::Currency;
use crate::domain::dining::{Eatery, FeaturedDish, RestaurantMenu};
use crate::domain::transport::{FlightOption, RideOption, TrainOption};

/// A featured destination card with its season window and trip highlights.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Destination {
    pub name: String,
    pub region: String,
    pub summary: String,
    pub travel_season: String,
    pub rating: f64,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stay {
    pub name: String,
    pub location: String,
    pub summary: String,
    pub rating: f64,
    pub price_per_night_usd: f64,
    pub sustainability_level: String,
}

/// Short promotional experience shown on the home page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub name: String,
    pub summary: String,
    pub duration: String,
    pub style: String,
    pub rating: f64,
    pub price_usd: f64,
    pub original_price_usd: f64,
    pub discount: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelPackage {
    pub id: String,
    pub name: String,
    pub summary: String,
    pub duration: String,
    pub group_size: String,
    pub difficulty: String,
    pub price_usd: f64,
    pub original_price_usd: f64,
    pub discount: String,
    pub rating: f64,
    pub review_count: u32,
    pub includes: Vec<String>,
    pub highlights: Vec<String>,
    pub itinerary: Vec<ItineraryDay>,
    pub best_time: String,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItineraryDay {
    pub day: u32,
    pub title: String,
    pub description: String,
}

/// An attraction on the explore page, grouped by category tabs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attraction {
    pub name: String,
    pub location: String,
    pub category: String,
    pub rating: f64,
    pub review_count: u32,
    pub duration: String,
    pub price_from_usd: f64,
    pub summary: String,
    pub highlights: Vec<String>,
}

/// Half-day to full-day add-on experience listed beside attractions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortExperience {
    pub name: String,
    pub category: String,
    pub duration: String,
    pub price_from_usd: f64,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CulturalEvent {
    pub title: String,
    pub description: String,
    pub period: String,
    pub location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub quote: String,
    pub rating: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelInsight {
    pub title: String,
    pub summary: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceKind {
    City,
    Park,
    Attraction,
    Region,
}

/// Entry in the destination suggestion corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopularDestination {
    pub name: String,
    pub region: String,
    pub kind: PlaceKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CityPlaceKind {
    Landmark,
    Mall,
    Hospital,
    University,
    Hotel,
    Airport,
    Residential,
}

/// Entry in the Lusaka pickup-location suggestion corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityPlace {
    pub name: String,
    pub area: String,
    pub kind: CityPlaceKind,
}

/// The full platform content set. Seeded in-process; replaceable wholesale
/// from a YAML file for demos.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub destinations: Vec<Destination>,
    #[serde(default)]
    pub stays: Vec<Stay>,
    #[serde(default)]
    pub experiences: Vec<Experience>,
    #[serde(default)]
    pub packages: Vec<TravelPackage>,
    #[serde(default)]
    pub attractions: Vec<Attraction>,
    #[serde(default)]
    pub short_experiences: Vec<ShortExperience>,
    #[serde(default)]
    pub cultural_events: Vec<CulturalEvent>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub insights: Vec<TravelInsight>,
    #[serde(default)]
    pub eateries: Vec<Eatery>,
    #[serde(default)]
    pub featured_dishes: Vec<FeaturedDish>,
    #[serde(default)]
    pub restaurant_menus: Vec<RestaurantMenu>,
    #[serde(default)]
    pub rides: Vec<RideOption>,
    #[serde(default)]
    pub flights: Vec<FlightOption>,
    #[serde(default)]
    pub trains: Vec<TrainOption>,
    #[serde(default)]
    pub popular_destinations: Vec<PopularDestination>,
    #[serde(default)]
    pub city_places: Vec<CityPlace>,
}

impl PlaceKind {
    pub fn label(self) -> &'static str {
        match self {
            PlaceKind::City => "City",
            PlaceKind::Park => "National Park",
            PlaceKind::Attraction => "Attraction",
            PlaceKind::Region => "Region",
        }
    }
}

impl CityPlaceKind {
    pub fn label(self) -> &'static str {
        match self {
            CityPlaceKind::Landmark => "Landmark",
            CityPlaceKind::Mall => "Shopping Mall",
            CityPlaceKind::Hospital => "Hospital",
            CityPlaceKind::University => "University",
            CityPlaceKind::Hotel => "Hotel",
            CityPlaceKind::Airport => "Airport",
            CityPlaceKind::Residential => "Residential Area",
        }
    }
}

impl Stay {
    pub fn describe(&self, currency: Currency) -> String {
        format!(
            "{} — {}\n{}/night | Rating: {:.1} | {}\n{}",
            self.name,
            self.location,
            currency.format_usd(self.price_per_night_usd),
            self.rating,
            self.sustainability_level,
            self.summary,
        )
    }
}

impl Experience {
    pub fn describe(&self, currency: Currency) -> String {
        format!(
            "{} ({})\n{} (was {}, {}) | Rating: {:.1} | {}\n{}",
            self.name,
            self.style,
            currency.format_usd(self.price_usd),
            currency.format_usd(self.original_price_usd),
            self.discount,
            self.rating,
            self.duration,
            self.summary,
        )
    }
}

impl TravelPackage {
    pub fn overview_line(&self, currency: Currency) -> String {
        format!(
            "{} [{}] — {} (was {}, {}) | {:.1}* ({} reviews) | {} | {}",
            self.name,
            self.id,
            currency.format_usd(self.price_usd),
            currency.format_usd(self.original_price_usd),
            self.discount,
            self.rating,
            self.review_count,
            self.duration,
            self.difficulty,
        )
    }

    pub fn details(&self, currency: Currency) -> String {
        use std::fmt::Write as _;

        let mut out = String::new();
        let _ = writeln!(out, "# {}", self.name);
        let _ = writeln!(out, "Category: {} | Difficulty: {}", self.category, self.difficulty);
        let _ = writeln!(
            out,
            "Price: {} per person (was {}, {})",
            currency.format_usd(self.price_usd),
            currency.format_usd(self.original_price_usd),
            self.discount,
        );
        let _ = writeln!(out, "Rating: {:.1} ({} reviews)", self.rating, self.review_count);
        let _ = writeln!(out, "Duration: {} | Group size: {}", self.duration, self.group_size);
        let _ = writeln!(out, "Best time: {}", self.best_time);
        let _ = writeln!(out, "\n{}", self.summary);
        if !self.includes.is_empty() {
            let _ = writeln!(out, "\n## Includes\n{}", self.includes.join(", "));
        }
        if !self.highlights.is_empty() {
            let _ = writeln!(out, "\n## Highlights\n{}", self.highlights.join(", "));
        }
        if !self.itinerary.is_empty() {
            let _ = writeln!(out, "\n## Itinerary");
            for day in &self.itinerary {
                let _ = writeln!(out, "Day {}: {} — {}", day.day, day.title, day.description);
            }
        }
        out
    }
}

impl Attraction {
    pub fn describe(&self, currency: Currency) -> String {
        format!(
            "{} — {} [{}]\nFrom {} | Rating: {:.1} ({} reviews) | {}\n{}\nHighlights: {}",
            self.name,
            self.location,
            self.category,
            currency.format_usd(self.price_from_usd),
            self.rating,
            self.review_count,
            self.duration,
            self.summary,
            self.highlights.join(", "),
        )
    }
}

impl ShortExperience {
    pub fn describe(&self, currency: Currency) -> String {
        format!(
            "{} [{}] — from {} | {}\n{}",
            self.name,
            self.category,
            currency.format_usd(self.price_from_usd),
            self.duration,
            self.summary,
        )
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "# {}", self.name)?;
        writeln!(f, "Region: {} | Rating: {:.1}", self.region, self.rating)?;
        writeln!(f, "Best season: {}", self.travel_season)?;
        writeln!(f, "\n{}", self.summary)?;
        if !self.highlights.is_empty() {
            writeln!(f, "\nHighlights: {}", self.highlights.join(", "))?;
        }
        Ok(())
    }
}

impl std::fmt::Display for CulturalEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}, {}) — {}",
            self.title, self.period, self.location, self.description
        )
    }
}

impl std::fmt::Display for Testimonial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "\"{}\" — {}, {} ({:.1}*)",
            self.quote, self.name, self.role, self.rating
        )
    }
}

impl std::fmt::Display for TravelInsight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.summary)
    }
}

impl std::fmt::Display for PopularDestination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} — {} ({})", self.name, self.region, self.kind.label())
    }
}

impl std::fmt::Display for CityPlace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} — {} ({})", self.name, self.area, self.kind.label())
    }
}

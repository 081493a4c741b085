use serde::{Deserialize, Serialize};

use crate::domain::catalog::{Destination, Stay};
use crate::error::{Result, VoyageError};

/// Facet labels derived from catalog fields. The label text matches the
/// filter chips on the source site so selections round-trip verbatim.
impl Destination {
    /// One tag per highlight. The keyword scan is case-sensitive, so a
    /// capitalised keyword ("Birding paradise") falls through to the
    /// adventure bucket just like on the site.
    pub fn activity_tags(&self) -> Vec<&'static str> {
        self.highlights
            .iter()
            .map(|h| {
                if h.contains("safari") || h.contains("game drive") {
                    "Wildlife Safari"
                } else if h.contains("canoe") || h.contains("cruise") {
                    "Canoe Safari"
                } else if h.contains("walking") {
                    "Walking Safari"
                } else if h.contains("helicopter") || h.contains("flight") {
                    "Helicopter Tours"
                } else if h.contains("village") || h.contains("ceremonies") {
                    "Cultural Tours"
                } else if h.contains("birding") {
                    "Birdwatching"
                } else {
                    "Adventure Sports"
                }
            })
            .collect()
    }

    pub fn price_band(&self) -> &'static str {
        if self.rating >= 4.8 {
            "Luxury ($300-500/day)"
        } else {
            "Mid-range ($150-300/day)"
        }
    }

    pub fn season_band(&self) -> &'static str {
        if self.travel_season.contains("June") || self.travel_season.contains("July") {
            "Dry Season (May-Oct)"
        } else {
            "Green Season (Nov-Apr)"
        }
    }
}

impl Stay {
    pub fn price_band(&self) -> &'static str {
        if self.price_per_night_usd >= 900.0 {
            "Ultra-luxury ($900+/night)"
        } else if self.price_per_night_usd >= 600.0 {
            "Luxury ($600-900/night)"
        } else if self.price_per_night_usd >= 300.0 {
            "Mid-range ($300-600/night)"
        } else {
            "Budget ($100-300/night)"
        }
    }

    pub fn rating_band(&self) -> &'static str {
        if self.rating >= 4.5 {
            "4.5+ Stars"
        } else if self.rating >= 4.0 {
            "4.0+ Stars"
        } else if self.rating >= 3.5 {
            "3.5+ Stars"
        } else {
            "3.0+ Stars"
        }
    }

    pub fn amenities(&self) -> Vec<&'static str> {
        vec![
            "Game Drives",
            "Fine Dining",
            "Spa & Wellness",
            if self.location.contains("River") {
                "River Activities"
            } else {
                "Cultural Experiences"
            },
            "Airport Transfer",
            "WiFi",
        ]
    }
}

/// Selected facet values for the destinations list. Dimensions combine
/// with AND; values inside one dimension combine with OR. Empty means
/// the dimension is inactive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DestinationFilter {
    pub regions: Vec<String>,
    pub activities: Vec<String>,
    pub price_bands: Vec<String>,
    pub seasons: Vec<String>,
}

impl DestinationFilter {
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
            && self.activities.is_empty()
            && self.price_bands.is_empty()
            && self.seasons.is_empty()
    }

    pub fn matches(&self, dest: &Destination) -> bool {
        if !self.regions.is_empty() && !self.regions.iter().any(|r| *r == dest.region) {
            return false;
        }
        if !self.activities.is_empty() {
            let tags = dest.activity_tags();
            if !tags.iter().any(|t| self.activities.iter().any(|a| a == t)) {
                return false;
            }
        }
        if !self.price_bands.is_empty() && !self.price_bands.iter().any(|p| p == dest.price_band())
        {
            return false;
        }
        if !self.seasons.is_empty() && !self.seasons.iter().any(|s| s == dest.season_band()) {
            return false;
        }
        true
    }
}

/// Selected facet values for the stays list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StayFilter {
    pub price_bands: Vec<String>,
    pub ratings: Vec<String>,
    pub sustainability_levels: Vec<String>,
    pub amenities: Vec<String>,
}

impl StayFilter {
    pub fn is_empty(&self) -> bool {
        self.price_bands.is_empty()
            && self.ratings.is_empty()
            && self.sustainability_levels.is_empty()
            && self.amenities.is_empty()
    }

    pub fn matches(&self, stay: &Stay) -> bool {
        if !self.price_bands.is_empty() && !self.price_bands.iter().any(|p| p == stay.price_band())
        {
            return false;
        }
        if !self.ratings.is_empty() && !self.ratings.iter().any(|r| r == stay.rating_band()) {
            return false;
        }
        if !self.sustainability_levels.is_empty()
            && !self
                .sustainability_levels
                .iter()
                .any(|l| *l == stay.sustainability_level)
        {
            return false;
        }
        if !self.amenities.is_empty() {
            let amenities = stay.amenities();
            if !self.amenities.iter().any(|a| amenities.contains(&a.as_str())) {
                return false;
            }
        }
        true
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Default,
    NameAsc,
    NameDesc,
    RatingDesc,
    RatingAsc,
    PriceDesc,
    PriceAsc,
}

impl SortKey {
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim() {
            "" | "default" => Ok(SortKey::Default),
            "name-asc" => Ok(SortKey::NameAsc),
            "name-desc" => Ok(SortKey::NameDesc),
            "rating-desc" => Ok(SortKey::RatingDesc),
            "rating-asc" => Ok(SortKey::RatingAsc),
            "price-desc" => Ok(SortKey::PriceDesc),
            "price-asc" => Ok(SortKey::PriceAsc),
            other => Err(VoyageError::InvalidParams {
                reason: format!(
                    "unknown sort '{other}' (expected default, name-asc, name-desc, rating-asc, rating-desc, price-asc or price-desc)"
                ),
            }),
        }
    }

    /// Price ordering only applies to catalogs that carry a numeric price.
    pub fn needs_price(self) -> bool {
        matches!(self, SortKey::PriceAsc | SortKey::PriceDesc)
    }
}

/// Applies the filter, then orders the survivors. Sorting is stable, so
/// ties and `Default` keep the catalog's original order.
pub fn filter_destinations<'a>(
    items: &'a [Destination],
    filter: &DestinationFilter,
    sort: SortKey,
) -> Vec<&'a Destination> {
    let mut out: Vec<&Destination> = items.iter().filter(|d| filter.matches(d)).collect();
    match sort {
        SortKey::NameAsc => out.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::NameDesc => out.sort_by(|a, b| b.name.cmp(&a.name)),
        SortKey::RatingDesc => out.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::RatingAsc => out.sort_by(|a, b| a.rating.total_cmp(&b.rating)),
        SortKey::Default | SortKey::PriceAsc | SortKey::PriceDesc => {}
    }
    out
}

pub fn filter_stays<'a>(items: &'a [Stay], filter: &StayFilter, sort: SortKey) -> Vec<&'a Stay> {
    let mut out: Vec<&Stay> = items.iter().filter(|s| filter.matches(s)).collect();
    match sort {
        SortKey::NameAsc => out.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::NameDesc => out.sort_by(|a, b| b.name.cmp(&a.name)),
        SortKey::RatingDesc => out.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::RatingAsc => out.sort_by(|a, b| a.rating.total_cmp(&b.rating)),
        SortKey::PriceDesc => {
            out.sort_by(|a, b| b.price_per_night_usd.total_cmp(&a.price_per_night_usd));
        }
        SortKey::PriceAsc => {
            out.sort_by(|a, b| a.price_per_night_usd.total_cmp(&b.price_per_night_usd));
        }
        SortKey::Default => {}
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_destinations() -> Vec<Destination> {
        vec![
            Destination {
                name: "Victoria Falls".into(),
                region: "Livingstone".into(),
                summary: "The Smoke that Thunders.".into(),
                travel_season: "June – August".into(),
                rating: 4.9,
                highlights: vec![
                    "Sunset Zambezi cruise".into(),
                    "Helicopter flight".into(),
                    "Moonbow viewing".into(),
                ],
            },
            Destination {
                name: "Lower Zambezi National Park".into(),
                region: "Chiawa".into(),
                summary: "Canoe safaris and riverside camps.".into(),
                travel_season: "April – October".into(),
                rating: 4.8,
                highlights: vec![
                    "Canoe safari".into(),
                    "Sunrise game drive".into(),
                    "Riverbank sundowners".into(),
                ],
            },
            Destination {
                name: "Liuwa Plain".into(),
                region: "Western Province".into(),
                summary: "Wildebeest migration over endless plains.".into(),
                travel_season: "October – December".into(),
                rating: 4.7,
                highlights: vec![
                    "Wildebeest migration".into(),
                    "Birding paradise".into(),
                    "Traditional ceremonies".into(),
                ],
            },
        ]
    }

    fn sample_stays() -> Vec<Stay> {
        vec![
            Stay {
                name: "Tongabezi Lodge".into(),
                location: "Livingstone • Zambezi Riverfront".into(),
                summary: "Private river cottages.".into(),
                rating: 4.9,
                price_per_night_usd: 620.0,
                sustainability_level: "Community led".into(),
            },
            Stay {
                name: "Chinzombo Camp".into(),
                location: "South Luangwa • Luangwa River".into(),
                summary: "Ultra-modern safari villas.".into(),
                rating: 4.8,
                price_per_night_usd: 890.0,
                sustainability_level: "Conservation partner".into(),
            },
            Stay {
                name: "Royal Zambezi Lodge".into(),
                location: "Lower Zambezi • Game Management Area".into(),
                summary: "Authentic safari lodge.".into(),
                rating: 4.7,
                price_per_night_usd: 540.0,
                sustainability_level: "Eco certified".into(),
            },
        ]
    }

    #[test]
    fn activity_tags_follow_keyword_cascade() {
        let dests = sample_destinations();
        assert_eq!(
            dests[0].activity_tags(),
            vec!["Canoe Safari", "Helicopter Tours", "Adventure Sports"]
        );
        // "Canoe safari" hits the safari branch before the canoe branch.
        assert_eq!(
            dests[1].activity_tags(),
            vec!["Wildlife Safari", "Wildlife Safari", "Adventure Sports"]
        );
        // Capitalised "Birding" misses the lowercase keyword.
        assert_eq!(
            dests[2].activity_tags(),
            vec!["Adventure Sports", "Adventure Sports", "Cultural Tours"]
        );
    }

    #[test]
    fn destination_bands() {
        let dests = sample_destinations();
        assert_eq!(dests[0].price_band(), "Luxury ($300-500/day)");
        assert_eq!(dests[2].price_band(), "Mid-range ($150-300/day)");
        assert_eq!(dests[0].season_band(), "Dry Season (May-Oct)");
        assert_eq!(dests[1].season_band(), "Green Season (Nov-Apr)");
    }

    #[test]
    fn stay_bands_and_amenities() {
        let stays = sample_stays();
        assert_eq!(stays[0].price_band(), "Luxury ($600-900/night)");
        assert_eq!(stays[1].price_band(), "Luxury ($600-900/night)");
        assert_eq!(stays[2].price_band(), "Mid-range ($300-600/night)");
        assert_eq!(stays[0].rating_band(), "4.5+ Stars");
        assert!(stays[0].amenities().contains(&"River Activities"));
        assert!(stays[2].amenities().contains(&"Cultural Experiences"));
    }

    #[test]
    fn region_filter_selects_single_destination() {
        let dests = sample_destinations();
        let filter = DestinationFilter {
            regions: vec!["Livingstone".into()],
            ..DestinationFilter::default()
        };
        let result = filter_destinations(&dests, &filter, SortKey::Default);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Victoria Falls");
    }

    #[test]
    fn empty_filter_keeps_catalog_order() {
        let dests = sample_destinations();
        let result = filter_destinations(&dests, &DestinationFilter::default(), SortKey::Default);
        let names: Vec<_> = result.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Victoria Falls", "Lower Zambezi National Park", "Liuwa Plain"]
        );
    }

    #[test]
    fn filtering_is_idempotent() {
        let dests = sample_destinations();
        let filter = DestinationFilter {
            activities: vec!["Cultural Tours".into()],
            seasons: vec!["Green Season (Nov-Apr)".into()],
            ..DestinationFilter::default()
        };
        let once: Vec<String> = filter_destinations(&dests, &filter, SortKey::Default)
            .into_iter()
            .map(|d| d.name.clone())
            .collect();
        let survivors: Vec<Destination> = dests
            .iter()
            .filter(|d| filter.matches(d))
            .cloned()
            .collect();
        let twice: Vec<String> = filter_destinations(&survivors, &filter, SortKey::Default)
            .into_iter()
            .map(|d| d.name.clone())
            .collect();
        assert_eq!(once, twice);
        assert_eq!(once, vec!["Liuwa Plain".to_string()]);
    }

    #[test]
    fn dimensions_combine_with_and() {
        let dests = sample_destinations();
        let filter = DestinationFilter {
            regions: vec!["Livingstone".into(), "Chiawa".into()],
            activities: vec!["Wildlife Safari".into()],
            ..DestinationFilter::default()
        };
        let result = filter_destinations(&dests, &filter, SortKey::Default);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Lower Zambezi National Park");
    }

    #[test]
    fn stay_sorts() {
        let stays = sample_stays();
        let by_price = filter_stays(&stays, &StayFilter::default(), SortKey::PriceAsc);
        let names: Vec<_> = by_price.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Royal Zambezi Lodge", "Tongabezi Lodge", "Chinzombo Camp"]);

        let by_name = filter_stays(&stays, &StayFilter::default(), SortKey::NameDesc);
        assert_eq!(by_name[0].name, "Tongabezi Lodge");

        let by_rating = filter_stays(&stays, &StayFilter::default(), SortKey::RatingDesc);
        assert_eq!(by_rating[0].name, "Tongabezi Lodge");
        assert_eq!(by_rating[2].name, "Royal Zambezi Lodge");
    }

    #[test]
    fn stay_amenity_filter_uses_or() {
        let stays = sample_stays();
        let filter = StayFilter {
            amenities: vec!["River Activities".into(), "Cultural Experiences".into()],
            ..StayFilter::default()
        };
        assert_eq!(filter_stays(&stays, &filter, SortKey::Default).len(), 3);

        let river_only = StayFilter {
            amenities: vec!["River Activities".into()],
            ..StayFilter::default()
        };
        assert_eq!(filter_stays(&stays, &river_only, SortKey::Default).len(), 2);
    }

    #[test]
    fn sort_key_parse() {
        assert_eq!(SortKey::parse("default").unwrap(), SortKey::Default);
        assert_eq!(SortKey::parse("").unwrap(), SortKey::Default);
        assert_eq!(SortKey::parse("price-asc").unwrap(), SortKey::PriceAsc);
        assert!(SortKey::parse("price-asc").unwrap().needs_price());
        assert!(!SortKey::parse("name-asc").unwrap().needs_price());
        assert!(SortKey::parse("cheapest").is_err());
    }
}

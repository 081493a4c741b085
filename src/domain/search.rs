use serde::{Deserialize, Serialize};

use crate::domain::catalog::{Catalog, CityPlace, Destination, PopularDestination, Stay};
use crate::domain::filter::{DestinationFilter, SortKey, StayFilter};
use crate::error::{Result, VoyageError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchCategory {
    #[default]
    All,
    Destinations,
    Stays,
}

impl SearchCategory {
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "all" => Ok(SearchCategory::All),
            "destinations" | "destination" => Ok(SearchCategory::Destinations),
            "stays" | "stay" | "hotels" | "hotel" => Ok(SearchCategory::Stays),
            other => Err(VoyageError::InvalidParams {
                reason: format!("unknown search category '{other}' (expected all, destinations or stays)"),
            }),
        }
    }
}

/// A search result borrowed from the catalog.
#[derive(Debug, Clone, Copy)]
pub enum SearchHit<'a> {
    Destination(&'a Destination),
    Stay(&'a Stay),
}

impl SearchHit<'_> {
    pub fn name(&self) -> &str {
        match self {
            SearchHit::Destination(d) => &d.name,
            SearchHit::Stay(s) => &s.name,
        }
    }

    pub fn rating(&self) -> f64 {
        match self {
            SearchHit::Destination(d) => d.rating,
            SearchHit::Stay(s) => s.rating,
        }
    }

    fn type_rank(&self) -> u8 {
        match self {
            SearchHit::Destination(_) => 0,
            SearchHit::Stay(_) => 1,
        }
    }
}

/// Lowercased haystack a free-text query is matched against. Built per
/// lookup; the catalog is small enough that precomputing buys nothing.
fn destination_terms(dest: &Destination) -> String {
    let mut parts: Vec<&str> = vec![&dest.name, &dest.region, &dest.summary];
    parts.extend(dest.highlights.iter().map(String::as_str));
    parts.join(" ").to_lowercase()
}

fn stay_terms(stay: &Stay) -> String {
    [
        stay.name.as_str(),
        stay.location.as_str(),
        stay.summary.as_str(),
        stay.sustainability_level.as_str(),
    ]
    .join(" ")
    .to_lowercase()
}

/// Free-text search over destinations and stays with the per-type facet
/// filters applied on top. `SortKey::Default` is relevance order, which
/// puts destinations before stays and ranks by rating within each type.
pub fn search_catalog<'a>(
    catalog: &'a Catalog,
    query: &str,
    category: SearchCategory,
    dest_filter: &DestinationFilter,
    stay_filter: &StayFilter,
    sort: SortKey,
) -> Vec<SearchHit<'a>> {
    let query = query.trim().to_lowercase();

    let mut hits: Vec<SearchHit<'a>> = Vec::new();
    if category != SearchCategory::Stays {
        hits.extend(
            catalog
                .destinations
                .iter()
                .filter(|d| query.is_empty() || destination_terms(d).contains(&query))
                .filter(|d| dest_filter.matches(d))
                .map(SearchHit::Destination),
        );
    }
    if category != SearchCategory::Destinations {
        hits.extend(
            catalog
                .stays
                .iter()
                .filter(|s| query.is_empty() || stay_terms(s).contains(&query))
                .filter(|s| stay_filter.matches(s))
                .map(SearchHit::Stay),
        );
    }

    match sort {
        SortKey::NameAsc => hits.sort_by(|a, b| a.name().cmp(b.name())),
        SortKey::NameDesc => hits.sort_by(|a, b| b.name().cmp(a.name())),
        SortKey::RatingDesc => hits.sort_by(|a, b| b.rating().total_cmp(&a.rating())),
        SortKey::RatingAsc => hits.sort_by(|a, b| a.rating().total_cmp(&b.rating())),
        SortKey::Default | SortKey::PriceAsc | SortKey::PriceDesc => {
            hits.sort_by(|a, b| {
                a.type_rank()
                    .cmp(&b.type_rank())
                    .then(b.rating().total_cmp(&a.rating()))
            });
        }
    }
    hits
}

/// Mixed results carry no single price column, so price sorting is
/// rejected up front.
pub fn parse_search_sort(value: &str) -> Result<SortKey> {
    let key = match value.trim() {
        "" | "relevance" => SortKey::Default,
        other => SortKey::parse(other)?,
    };
    if key.needs_price() {
        return Err(VoyageError::InvalidParams {
            reason: "price sorting is not available for mixed search results".into(),
        });
    }
    Ok(key)
}

/// Destination autocomplete: substring match on name or region. An
/// empty query previews the top of the corpus instead of everything.
pub fn suggest_destinations<'a>(
    corpus: &'a [PopularDestination],
    query: &str,
    max_results: usize,
    default_results: usize,
) -> Vec<&'a PopularDestination> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return corpus.iter().take(default_results).collect();
    }
    corpus
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&query) || p.region.to_lowercase().contains(&query)
        })
        .take(max_results)
        .collect()
}

/// Pickup-location autocomplete over the Lusaka places corpus.
pub fn suggest_places<'a>(
    corpus: &'a [CityPlace],
    query: &str,
    max_results: usize,
    default_results: usize,
) -> Vec<&'a CityPlace> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return corpus.iter().take(default_results).collect();
    }
    corpus
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&query) || p.area.to_lowercase().contains(&query)
        })
        .take(max_results)
        .collect()
}

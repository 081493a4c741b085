use serde::{Deserialize, Serialize};

use crate::error::{Result, VoyageError};

/// Dining listings keep their kwacha price tags as printed strings. The
/// source pages quote them verbatim rather than converting per currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiningCategory {
    Restaurants,
    Traditional,
    FastFood,
}

impl DiningCategory {
    pub const ALL: [DiningCategory; 3] = [
        DiningCategory::Restaurants,
        DiningCategory::Traditional,
        DiningCategory::FastFood,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DiningCategory::Restaurants => "Restaurants",
            DiningCategory::Traditional => "Traditional Food",
            DiningCategory::FastFood => "Fast Food",
        }
    }

    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "restaurants" | "restaurant" => Ok(DiningCategory::Restaurants),
            "traditional" | "traditional_food" => Ok(DiningCategory::Traditional),
            "fast_food" | "fast-food" | "fastfood" => Ok(DiningCategory::FastFood),
            other => Err(VoyageError::InvalidParams {
                reason: format!(
                    "unknown dining category '{other}' (expected restaurants, traditional or fast_food)"
                ),
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Eatery {
    pub name: String,
    pub cuisine: String,
    pub rating: f64,
    pub delivery_time: String,
    pub location: String,
    pub summary: String,
    pub tags: Vec<String>,
    pub category: DiningCategory,
}

/// A dish promoted on the dining landing page, price quoted as printed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeaturedDish {
    pub name: String,
    pub price: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub price: String,
    pub portion: String,
}

/// Full menu card for a restaurant, including its ordering terms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantMenu {
    pub restaurant: String,
    pub cuisine: String,
    pub rating: f64,
    pub review_count: u32,
    pub delivery_time: String,
    pub discount: String,
    pub min_order: String,
    pub delivery_fee: String,
    pub items: Vec<MenuItem>,
}

impl std::fmt::Display for Eatery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) — {:.1}* | {} | {}\n{}\nTags: {}",
            self.name,
            self.cuisine,
            self.rating,
            self.delivery_time,
            self.location,
            self.summary,
            self.tags.join(", "),
        )
    }
}

impl std::fmt::Display for FeaturedDish {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} — {}", self.name, self.price)
    }
}

impl std::fmt::Display for MenuItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} — {} ({})", self.name, self.price, self.portion)
    }
}

impl std::fmt::Display for RestaurantMenu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "# {} ({}) — {:.1}* ({} reviews)",
            self.restaurant, self.cuisine, self.rating, self.review_count
        )?;
        writeln!(
            f,
            "Delivery: {} | Discount: {} | Min order: {} | Delivery fee: {}",
            self.delivery_time, self.discount, self.min_order, self.delivery_fee
        )?;
        writeln!(f, "\n## Menu")?;
        for item in &self.items {
            writeln!(f, "- {item}")?;
        }
        Ok(())
    }
}

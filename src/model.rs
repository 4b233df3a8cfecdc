use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// Data structures shared with the presentation layer. Serialized field names
// follow the camelCase contract the UI consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub postcode: String,
    pub latitude: f64,
    pub longitude: f64,
    pub hygiene_rating: i32,
    pub last_inspection: String,
    pub cuisine: String,
    pub price_range: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    // Keyed by capitalized weekday name; days without source data are omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<Review>>,
}

impl Restaurant {
    pub fn hygiene_band(&self) -> HygieneBand {
        HygieneBand::from_rating(self.hygiene_rating)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub user_name: String,
    pub rating: f64,
    pub comment: String,
    pub date: String,
}

// The structured (non-text) filter predicate set. `None` means no constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub min_rating: i32,
    pub cuisine: Option<String>,
    pub price_range: Option<String>,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            min_rating: 0,
            cuisine: None,
            price_range: None,
        }
    }
}

impl FilterOptions {
    // Restore minRating=0, cuisine=unset, priceRange=unset
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// Display band behind the color-coded hygiene badge. Ratings outside the
// 1-5 inspection scale (including the 0 missing-field default) get a
// distinct Unrated band instead of sharing the rating-1 fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HygieneBand {
    Excellent,
    Good,
    Average,
    Poor,
    Bad,
    Unrated,
}

impl HygieneBand {
    pub fn from_rating(rating: i32) -> Self {
        match rating {
            5 => HygieneBand::Excellent,
            4 => HygieneBand::Good,
            3 => HygieneBand::Average,
            2 => HygieneBand::Poor,
            1 => HygieneBand::Bad,
            _ => HygieneBand::Unrated,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            HygieneBand::Excellent => "hygiene-excellent",
            HygieneBand::Good => "hygiene-good",
            HygieneBand::Average => "hygiene-average",
            HygieneBand::Poor => "hygiene-poor",
            HygieneBand::Bad => "hygiene-bad",
            HygieneBand::Unrated => "hygiene-unrated",
        }
    }

    // Background variant used by the map markers and list badges
    pub fn badge_class(&self) -> &'static str {
        match self {
            HygieneBand::Excellent => "bg-hygiene-excellent",
            HygieneBand::Good => "bg-hygiene-good",
            HygieneBand::Average => "bg-hygiene-average",
            HygieneBand::Poor => "bg-hygiene-poor",
            HygieneBand::Bad => "bg-hygiene-bad",
            HygieneBand::Unrated => "bg-hygiene-unrated",
        }
    }
}

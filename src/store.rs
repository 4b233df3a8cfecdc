// Single-writer store for the canonical dataset plus the active search,
// filter and selection state reported by the presentation layer.
use tracing::debug;

use crate::data::builtin_restaurants;
use crate::fetch::load_document;
use crate::filter::{apply_filters, distinct_cuisines, distinct_price_ranges};
use crate::model::{FilterOptions, Restaurant};

/// Owns the canonical restaurant dataset. Ingestion replaces it wholesale;
/// every other consumer only reads.
#[derive(Debug, Default)]
pub struct RestaurantStore {
    restaurants: Vec<Restaurant>,
    query: String,
    filters: FilterOptions,
    selected: Option<String>,
}

impl RestaurantStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store seeded with the built-in sample dataset.
    pub fn with_builtin() -> Self {
        Self {
            restaurants: builtin_restaurants(),
            ..Self::default()
        }
    }

    /// Replace the canonical dataset wholesale. A selection whose id no
    /// longer exists is dropped.
    pub fn replace(&mut self, restaurants: Vec<Restaurant>) {
        debug!(count = restaurants.len(), "replacing canonical dataset");
        self.restaurants = restaurants;
        if let Some(id) = &self.selected {
            if !self.restaurants.iter().any(|r| &r.id == id) {
                self.selected = None;
            }
        }
    }

    /// Fetch an XML document and, if it yielded any records, make them the
    /// canonical dataset. Returns whether the dataset was replaced, so the
    /// caller can fall back and surface a warning when it was not.
    pub async fn load_xml(&mut self, url: &str) -> bool {
        let restaurants = load_document(url).await;
        if restaurants.is_empty() {
            return false;
        }
        self.replace(restaurants);
        true
    }

    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    /// The subset visible under the current query and filters.
    pub fn visible(&self) -> Vec<Restaurant> {
        apply_filters(&self.restaurants, &self.query, &self.filters)
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_filters(&mut self, filters: FilterOptions) {
        self.filters = filters;
    }

    pub fn filters(&self) -> &FilterOptions {
        &self.filters
    }

    pub fn set_min_rating(&mut self, min_rating: i32) {
        self.filters.min_rating = min_rating;
    }

    pub fn set_cuisine(&mut self, cuisine: Option<String>) {
        self.filters.cuisine = cuisine;
    }

    pub fn set_price_range(&mut self, price_range: Option<String>) {
        self.filters.price_range = price_range;
    }

    pub fn reset_filters(&mut self) {
        self.filters.reset();
    }

    // Selection events are opaque to this core; the id is just routed to
    // whichever detail view asks for it.
    pub fn select(&mut self, id: impl Into<String>) {
        self.selected = Some(id.into());
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Restaurant> {
        let id = self.selected.as_ref()?;
        self.restaurants.iter().find(|r| &r.id == id)
    }

    /// Distinct cuisines in the dataset, for the cuisine choice control.
    pub fn cuisines(&self) -> Vec<String> {
        distinct_cuisines(&self.restaurants)
    }

    /// Distinct price-range tokens, for the price choice control.
    pub fn price_ranges(&self) -> Vec<String> {
        distinct_price_ranges(&self.restaurants)
    }
}

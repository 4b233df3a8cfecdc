// Filter engine: pure, deterministic subset selection over the canonical
// dataset. Recomputed in full on every query or filter change; dataset sizes
// are tens to low hundreds of records.
use std::collections::BTreeSet;

use crate::model::{FilterOptions, Restaurant};

/// Compute the restaurants matching the query and filter options, preserving
/// the original relative order.
///
/// A restaurant matches when all of the following hold: the query is empty or
/// is a case-insensitive substring of its name, address, city or description;
/// its hygiene rating is at least `min_rating`; the cuisine constraint, if
/// set, matches exactly; the price-range constraint, if set, matches exactly.
pub fn apply_filters(
    all: &[Restaurant],
    query: &str,
    options: &FilterOptions,
) -> Vec<Restaurant> {
    let query = query.to_lowercase();
    let mut filtered = Vec::new();

    for restaurant in all {
        if !query.is_empty() && !matches_query(restaurant, &query) {
            continue;
        }

        if restaurant.hygiene_rating < options.min_rating {
            continue;
        }

        if !options
            .cuisine
            .as_ref()
            .map_or(true, |cuisine| &restaurant.cuisine == cuisine)
        {
            continue;
        }

        if !options
            .price_range
            .as_ref()
            .map_or(true, |price| &restaurant.price_range == price)
        {
            continue;
        }

        filtered.push(restaurant.clone());
    }

    filtered
}

// Case-insensitive substring match; `query` is already lowercased. An empty
// description can never match, which is the same outcome as skipping it.
fn matches_query(restaurant: &Restaurant, query: &str) -> bool {
    restaurant.name.to_lowercase().contains(query)
        || restaurant.address.to_lowercase().contains(query)
        || restaurant.city.to_lowercase().contains(query)
        || restaurant.description.to_lowercase().contains(query)
}

/// Distinct cuisines present in the dataset, alphabetically sorted.
pub fn distinct_cuisines(all: &[Restaurant]) -> Vec<String> {
    distinct(all, |r| &r.cuisine)
}

/// Distinct price-range tokens present in the dataset, alphabetically sorted.
pub fn distinct_price_ranges(all: &[Restaurant]) -> Vec<String> {
    distinct(all, |r| &r.price_range)
}

fn distinct<F>(all: &[Restaurant], field: F) -> Vec<String>
where
    F: Fn(&Restaurant) -> &String,
{
    all.iter()
        .map(field)
        .filter(|value| !value.is_empty())
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::builtin_restaurants;
    use test_case::test_case;

    fn ids(restaurants: &[Restaurant]) -> Vec<&str> {
        restaurants.iter().map(|r| r.id.as_str()).collect()
    }

    fn options(min_rating: i32, cuisine: Option<&str>, price: Option<&str>) -> FilterOptions {
        FilterOptions {
            min_rating,
            cuisine: cuisine.map(str::to_string),
            price_range: price.map(str::to_string),
        }
    }

    #[test]
    fn test_min_rating_four_matches_expected_ids() {
        let all = builtin_restaurants();
        let result = apply_filters(&all, "", &options(4, None, None));
        assert_eq!(ids(&result), vec!["1", "2", "3", "4", "5", "7", "9"]);
    }

    #[test]
    fn test_river_query_matches_only_the_riverside() {
        let all = builtin_restaurants();
        let result = apply_filters(&all, "river", &options(0, None, None));
        assert_eq!(ids(&result), vec!["10"]);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let all = builtin_restaurants();
        let result = apply_filters(&all, "spice", &options(0, None, None));
        assert!(result.iter().any(|r| r.name == "Spice Garden"));
    }

    #[test]
    fn test_empty_query_and_default_options_keep_everything() {
        let all = builtin_restaurants();
        let result = apply_filters(&all, "", &FilterOptions::default());
        assert_eq!(result, all);
    }

    #[test_case(Some("Indian"), None, vec!["2"]; "cuisine is an exact match")]
    #[test_case(Some("indian"), None, vec![]; "cuisine match is case sensitive")]
    #[test_case(None, Some("£"), vec!["8", "9"]; "price range is an exact match")]
    #[test_case(Some("Seafood"), Some("£££"), vec!["5"]; "constraints combine with and")]
    fn test_structured_filters(
        cuisine: Option<&str>,
        price: Option<&str>,
        expected: Vec<&str>,
    ) {
        let all = builtin_restaurants();
        let result = apply_filters(&all, "", &options(0, cuisine, price));
        assert_eq!(ids(&result), expected);
    }

    #[test]
    fn test_raising_min_rating_never_grows_the_subset() {
        let all = builtin_restaurants();
        let mut previous = all.len() + 1;
        for min_rating in 0..=6 {
            let size = apply_filters(&all, "", &options(min_rating, None, None)).len();
            assert!(
                size <= previous,
                "subset grew from {previous} to {size} at min_rating {min_rating}"
            );
            previous = size;
        }
    }

    #[test]
    fn test_output_is_an_ordered_subsequence_of_input() {
        let all = builtin_restaurants();
        let result = apply_filters(&all, "street", &options(0, None, None));
        assert!(!result.is_empty());

        let positions: Vec<usize> = result
            .iter()
            .map(|r| all.iter().position(|a| a.id == r.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_filtering_does_not_mutate_input() {
        let all = builtin_restaurants();
        let before = all.clone();
        let _ = apply_filters(&all, "cafe", &options(3, None, None));
        assert_eq!(all, before);
    }

    #[test]
    fn test_distinct_cuisines_sorted() {
        let all = builtin_restaurants();
        let cuisines = distinct_cuisines(&all);
        assert_eq!(
            cuisines,
            vec![
                "British", "Cafe", "Chinese", "Fast Food", "Indian", "Italian", "Mixed",
                "Pub Food", "Seafood", "Vegan"
            ]
        );
    }

    #[test]
    fn test_distinct_price_ranges_sorted() {
        let all = builtin_restaurants();
        assert_eq!(distinct_price_ranges(&all), vec!["£", "££", "£££"]);
    }
}

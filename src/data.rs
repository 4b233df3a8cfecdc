// Built-in Lancaster sample dataset, used at startup and as the fallback
// when XML ingestion yields nothing.
use std::collections::BTreeMap;

use crate::model::{Restaurant, Review};

fn record(
    id: &str,
    name: &str,
    address: &str,
    postcode: &str,
    latitude: f64,
    longitude: f64,
    hygiene_rating: i32,
    last_inspection: &str,
    cuisine: &str,
    price_range: &str,
    description: &str,
    phone: &str,
    website: Option<&str>,
) -> Restaurant {
    Restaurant {
        id: id.to_string(),
        name: name.to_string(),
        address: address.to_string(),
        city: "Lancaster".to_string(),
        postcode: postcode.to_string(),
        latitude,
        longitude,
        hygiene_rating,
        last_inspection: last_inspection.to_string(),
        cuisine: cuisine.to_string(),
        price_range: price_range.to_string(),
        description: description.to_string(),
        phone: Some(phone.to_string()),
        website: website.map(str::to_string),
        opening_hours: None,
        reviews: None,
    }
}

fn hours(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(day, times)| (day.to_string(), times.to_string()))
        .collect()
}

/// The ten-restaurant sample dataset shipped with the finder.
pub fn builtin_restaurants() -> Vec<Restaurant> {
    let mut brasserie = record(
        "1",
        "The Lancaster Brasserie",
        "14 Market Street",
        "LA1 1HY",
        54.0471,
        -2.8037,
        5,
        "2023-09-15",
        "British",
        "££",
        "Modern British cuisine in a stylish setting with locally-sourced ingredients.",
        "01524 123456",
        Some("https://lancasterbrasserie.example.com"),
    );
    brasserie.opening_hours = Some(hours(&[
        ("Monday", "12:00 - 22:00"),
        ("Tuesday", "12:00 - 22:00"),
        ("Wednesday", "12:00 - 22:00"),
        ("Thursday", "12:00 - 22:00"),
        ("Friday", "12:00 - 23:00"),
        ("Saturday", "12:00 - 23:00"),
        ("Sunday", "12:00 - 21:00"),
    ]));
    brasserie.reviews = Some(vec![Review {
        id: "r1".to_string(),
        user_name: "FoodLover42".to_string(),
        rating: 4.5,
        comment: "Excellent food and spotlessly clean restaurant. The staff were very attentive."
            .to_string(),
        date: "2023-10-05".to_string(),
    }]);

    let mut spice_garden = record(
        "2",
        "Spice Garden",
        "27 King Street",
        "LA1 1JE",
        54.0483,
        -2.8003,
        4,
        "2023-08-22",
        "Indian",
        "££",
        "Authentic Indian cuisine with a modern twist.",
        "01524 234567",
        Some("https://spicegarden.example.com"),
    );
    spice_garden.opening_hours = Some(hours(&[
        ("Monday", "17:00 - 22:30"),
        ("Tuesday", "17:00 - 22:30"),
        ("Wednesday", "17:00 - 22:30"),
        ("Thursday", "17:00 - 22:30"),
        ("Friday", "17:00 - 23:00"),
        ("Saturday", "17:00 - 23:00"),
        ("Sunday", "17:00 - 22:00"),
    ]));

    vec![
        brasserie,
        spice_garden,
        record(
            "3",
            "Bella Italia",
            "5 Dalton Square",
            "LA1 1PP",
            54.0497,
            -2.8021,
            5,
            "2023-07-10",
            "Italian",
            "££",
            "Family-friendly Italian restaurant offering pasta, pizza and classic Italian dishes.",
            "01524 345678",
            Some("https://bellaitalia.example.com"),
        ),
        record(
            "4",
            "The Green Room",
            "42 Penny Street",
            "LA1 1XT",
            54.0461,
            -2.8018,
            5,
            "2023-09-02",
            "Vegan",
            "££",
            "Plant-based cuisine in an eco-friendly setting.",
            "01524 456789",
            Some("https://greenroom.example.com"),
        ),
        record(
            "5",
            "The Waterfront",
            "10 St. George's Quay",
            "LA1 1RD",
            54.0514,
            -2.8046,
            4,
            "2023-08-05",
            "Seafood",
            "£££",
            "Fresh seafood restaurant overlooking the Lune estuary.",
            "01524 567890",
            Some("https://waterfront.example.com"),
        ),
        record(
            "6",
            "Dragon Palace",
            "8 Church Street",
            "LA1 1ET",
            54.0488,
            -2.8016,
            3,
            "2023-06-20",
            "Chinese",
            "££",
            "Traditional Chinese cuisine in the heart of Lancaster.",
            "01524 678901",
            Some("https://dragonpalace.example.com"),
        ),
        record(
            "7",
            "The Royal Oak",
            "22 Market Street",
            "LA1 1JG",
            54.0479,
            -2.8031,
            5,
            "2023-09-25",
            "Pub Food",
            "££",
            "Historic pub serving classic British food and local ales.",
            "01524 789012",
            Some("https://royaloak.example.com"),
        ),
        record(
            "8",
            "Quick Bites",
            "3 Common Garden Street",
            "LA1 1XD",
            54.0472,
            -2.8012,
            2,
            "2023-07-18",
            "Fast Food",
            "£",
            "Fast and affordable meals on the go.",
            "01524 890123",
            None,
        ),
        record(
            "9",
            "University Cafe",
            "Lancaster University",
            "LA1 4YW",
            54.0104,
            -2.7877,
            4,
            "2023-08-30",
            "Cafe",
            "£",
            "Campus cafe serving sandwiches, snacks and hot drinks.",
            "01524 901234",
            None,
        ),
        record(
            "10",
            "The Riverside",
            "15 Lune Road",
            "LA1 1QW",
            54.0522,
            -2.8054,
            1,
            "2023-06-05",
            "Mixed",
            "££",
            "Varied menu with river views. Currently addressing hygiene concerns.",
            "01524 012345",
            None,
        ),
    ]
}

// XML ingestion: turns a document of <restaurant> elements into normalized
// Restaurant records. Per-field problems degrade to the defaults below; the
// only hard failure is malformed markup.
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::model::{Restaurant, Review};

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("XML parse error: {0}")]
    XmlParseError(String),

    #[error("document ended inside <{0}>")]
    TruncatedDocument(&'static str),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

fn xml_err(e: quick_xml::Error) -> IngestError {
    IngestError::XmlParseError(e.to_string())
}

// Defaults applied when a source field is missing or unparseable
const DEFAULT_CITY: &str = "Lancaster";
const DEFAULT_CUISINE: &str = "Other";
const DEFAULT_PRICE_RANGE: &str = "££";
const DEFAULT_REVIEWER: &str = "Anonymous";
const DEFAULT_REVIEW_RATING: f64 = 3.0;
const CLOSED: &str = "Closed";

/// Parse an XML document into restaurant records, in document order.
pub fn parse_document(xml: &str) -> Result<Vec<Restaurant>, IngestError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let today = current_date();
    let mut restaurants = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"restaurant" => {
                let raw = read_restaurant(&mut reader, &e)?;
                let index = restaurants.len();
                restaurants.push(raw.finish(index, &today));
            }
            Ok(Event::Empty(e)) if e.name().as_ref() == b"restaurant" => {
                // Attribute-only record; still occupies a document position
                let raw = RawRestaurant {
                    id: attr_value(&e, "id"),
                    ..RawRestaurant::default()
                };
                let index = restaurants.len();
                restaurants.push(raw.finish(index, &today));
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(xml_err(e)),
        }
    }

    Ok(restaurants)
}

// One <restaurant> element as read from the source, before defaulting
#[derive(Default)]
struct RawRestaurant {
    id: Option<String>,
    name: Option<String>,
    address: Option<String>,
    city: Option<String>,
    postcode: Option<String>,
    latitude: Option<String>,
    longitude: Option<String>,
    hygiene_rating: Option<String>,
    last_inspection: Option<String>,
    cuisine: Option<String>,
    price_range: Option<String>,
    description: Option<String>,
    phone: Option<String>,
    website: Option<String>,
    opening_hours: Option<BTreeMap<String, String>>,
    reviews: Option<Vec<RawReview>>,
}

impl RawRestaurant {
    // The full defaults table lives here so parsing behavior stays auditable
    fn finish(self, index: usize, today: &str) -> Restaurant {
        let id = self.id.unwrap_or_else(|| format!("xml-{index}"));
        let reviews = self.reviews.map(|raw| {
            raw.into_iter()
                .enumerate()
                .map(|(j, review)| review.finish(&id, j, today))
                .collect()
        });

        Restaurant {
            name: self.name.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
            city: self.city.unwrap_or_else(|| DEFAULT_CITY.to_string()),
            postcode: self.postcode.unwrap_or_default(),
            // Missing or non-numeric coordinates land on the null coordinate
            // (0, 0): degenerate map placement, but not fatal
            latitude: float_or(self.latitude, 0.0),
            longitude: float_or(self.longitude, 0.0),
            // Not clamped to the 1-5 inspection scale; 0 means unrated
            hygiene_rating: int_or(self.hygiene_rating, 0),
            last_inspection: self.last_inspection.unwrap_or_else(|| today.to_string()),
            cuisine: self.cuisine.unwrap_or_else(|| DEFAULT_CUISINE.to_string()),
            price_range: self
                .price_range
                .unwrap_or_else(|| DEFAULT_PRICE_RANGE.to_string()),
            description: self.description.unwrap_or_default(),
            phone: self.phone,
            website: self.website,
            opening_hours: self.opening_hours,
            reviews,
            id,
        }
    }
}

#[derive(Default)]
struct RawReview {
    user_name: Option<String>,
    rating: Option<String>,
    comment: Option<String>,
    date: Option<String>,
}

impl RawReview {
    fn finish(self, restaurant_id: &str, index: usize, today: &str) -> Review {
        Review {
            // Source-supplied review ids are ignored in favor of a stable
            // synthesized id
            id: format!("review-{restaurant_id}-{index}"),
            user_name: self
                .user_name
                .unwrap_or_else(|| DEFAULT_REVIEWER.to_string()),
            rating: self
                .rating
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_REVIEW_RATING),
            comment: self.comment.unwrap_or_default(),
            date: self.date.unwrap_or_else(|| today.to_string()),
        }
    }
}

fn read_restaurant(
    reader: &mut Reader<&[u8]>,
    start: &BytesStart,
) -> Result<RawRestaurant, IngestError> {
    let mut raw = RawRestaurant {
        id: attr_value(start, "id"),
        ..RawRestaurant::default()
    };

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"name" => raw.name = read_scalar(reader, &e)?,
                b"address" => raw.address = read_scalar(reader, &e)?,
                b"city" => raw.city = read_scalar(reader, &e)?,
                b"postcode" => raw.postcode = read_scalar(reader, &e)?,
                b"latitude" => raw.latitude = read_scalar(reader, &e)?,
                b"longitude" => raw.longitude = read_scalar(reader, &e)?,
                b"hygiene_rating" => raw.hygiene_rating = read_scalar(reader, &e)?,
                b"last_inspection" => raw.last_inspection = read_scalar(reader, &e)?,
                b"cuisine" => raw.cuisine = read_scalar(reader, &e)?,
                b"price_range" => raw.price_range = read_scalar(reader, &e)?,
                b"description" => raw.description = read_scalar(reader, &e)?,
                b"phone" => raw.phone = read_scalar(reader, &e)?,
                b"website" => raw.website = read_scalar(reader, &e)?,
                b"opening_hours" => raw.opening_hours = Some(read_opening_hours(reader)?),
                b"reviews" => {
                    // A reviews block with zero children yields no reviews
                    // field, not an empty one
                    let reviews = read_reviews(reader)?;
                    if !reviews.is_empty() {
                        raw.reviews = Some(reviews);
                    }
                }
                _ => {
                    reader.read_to_end(e.name()).map_err(xml_err)?;
                }
            },
            Ok(Event::Empty(e)) => {
                // Self-closing scalars carry no text and count as absent; a
                // self-closing opening_hours block still exists, with no days
                if e.name().as_ref() == b"opening_hours" {
                    raw.opening_hours = Some(BTreeMap::new());
                }
            }
            Ok(Event::End(e)) if e.name().as_ref() == b"restaurant" => break,
            Ok(Event::Eof) => return Err(IngestError::TruncatedDocument("restaurant")),
            Ok(_) => {}
            Err(e) => return Err(xml_err(e)),
        }
    }

    Ok(raw)
}

fn read_opening_hours(
    reader: &mut Reader<&[u8]>,
) -> Result<BTreeMap<String, String>, IngestError> {
    let mut hours = BTreeMap::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let day = weekday_label(e.name().as_ref());
                let text = reader.read_text(e.name()).map_err(xml_err)?;
                if let Some(day) = day {
                    let text = text.trim();
                    let value = if text.is_empty() { CLOSED } else { text };
                    hours.insert(day.to_string(), value.to_string());
                }
            }
            Ok(Event::Empty(e)) => {
                if let Some(day) = weekday_label(e.name().as_ref()) {
                    hours.insert(day.to_string(), CLOSED.to_string());
                }
            }
            Ok(Event::End(e)) if e.name().as_ref() == b"opening_hours" => break,
            Ok(Event::Eof) => return Err(IngestError::TruncatedDocument("opening_hours")),
            Ok(_) => {}
            Err(e) => return Err(xml_err(e)),
        }
    }

    Ok(hours)
}

fn read_reviews(reader: &mut Reader<&[u8]>) -> Result<Vec<RawReview>, IngestError> {
    let mut reviews = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"review" => {
                reviews.push(read_review(reader)?);
            }
            Ok(Event::Start(e)) => {
                reader.read_to_end(e.name()).map_err(xml_err)?;
            }
            Ok(Event::End(e)) if e.name().as_ref() == b"reviews" => break,
            Ok(Event::Eof) => return Err(IngestError::TruncatedDocument("reviews")),
            Ok(_) => {}
            Err(e) => return Err(xml_err(e)),
        }
    }

    Ok(reviews)
}

fn read_review(reader: &mut Reader<&[u8]>) -> Result<RawReview, IngestError> {
    let mut raw = RawReview::default();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"user_name" => raw.user_name = read_scalar(reader, &e)?,
                b"rating" => raw.rating = read_scalar(reader, &e)?,
                b"comment" => raw.comment = read_scalar(reader, &e)?,
                b"date" => raw.date = read_scalar(reader, &e)?,
                _ => {
                    reader.read_to_end(e.name()).map_err(xml_err)?;
                }
            },
            Ok(Event::End(e)) if e.name().as_ref() == b"review" => break,
            Ok(Event::Eof) => return Err(IngestError::TruncatedDocument("review")),
            Ok(_) => {}
            Err(e) => return Err(xml_err(e)),
        }
    }

    Ok(raw)
}

// Empty or whitespace-only element text counts as absent
fn read_scalar(
    reader: &mut Reader<&[u8]>,
    start: &BytesStart,
) -> Result<Option<String>, IngestError> {
    let text = reader.read_text(start.name()).map_err(xml_err)?;
    let text = text.trim();
    Ok(if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    })
}

fn attr_value(element: &BytesStart, name: &str) -> Option<String> {
    element
        .try_get_attribute(name)
        .ok()
        .flatten()
        .and_then(|attr| attr.unescape_value().ok())
        .map(|value| value.into_owned())
}

fn weekday_label(tag: &[u8]) -> Option<&'static str> {
    match tag {
        b"monday" => Some("Monday"),
        b"tuesday" => Some("Tuesday"),
        b"wednesday" => Some("Wednesday"),
        b"thursday" => Some("Thursday"),
        b"friday" => Some("Friday"),
        b"saturday" => Some("Saturday"),
        b"sunday" => Some("Sunday"),
        _ => None,
    }
}

fn float_or(value: Option<String>, fallback: f64) -> f64 {
    value.and_then(|v| v.parse().ok()).unwrap_or(fallback)
}

fn int_or(value: Option<String>, fallback: i32) -> i32 {
    value.and_then(|v| v.parse().ok()).unwrap_or(fallback)
}

// ISO calendar date, no time component
fn current_date() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}

// Sample file path (the actual file is stored in the samples directory)
pub const SAMPLE_XML_PATH: &str = "samples/restaurants.xml";

// Helper to load the sample restaurant XML
pub fn load_sample() -> Result<String, IngestError> {
    Ok(std::fs::read_to_string(SAMPLE_XML_PATH)?)
}

// A small sample for inline testing
pub const SMALL_SAMPLE_XML: &str = r#"
<restaurants>
  <restaurant id="r-101">
    <name>The Castle Grill</name>
    <address>2 Castle Hill</address>
    <city>Lancaster</city>
    <postcode>LA1 1YS</postcode>
    <latitude>54.0489</latitude>
    <longitude>-2.8055</longitude>
    <hygiene_rating>5</hygiene_rating>
    <last_inspection>2023-09-01</last_inspection>
    <cuisine>British</cuisine>
    <price_range>£££</price_range>
    <description>Steaks and grills beside the castle walls.</description>
    <phone>01524 111222</phone>
    <website>https://castlegrill.example.com</website>
    <opening_hours>
      <monday>12:00 - 22:00</monday>
      <tuesday>12:00 - 22:00</tuesday>
      <sunday></sunday>
    </opening_hours>
    <reviews>
      <review id="ignored-source-id">
        <user_name>GrillFan</user_name>
        <rating>4.5</rating>
        <comment>Great steak, spotless kitchen.</comment>
        <date>2023-09-20</date>
      </review>
      <review>
        <rating>not-a-number</rating>
      </review>
    </reviews>
  </restaurant>
  <restaurant>
    <name>Noodle Stop</name>
    <hygiene_rating>unknown</hygiene_rating>
    <latitude>not-a-coordinate</latitude>
    <reviews></reviews>
  </restaurant>
</restaurants>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_small_sample() {
        let restaurants = parse_document(SMALL_SAMPLE_XML).unwrap();
        assert_eq!(restaurants.len(), 2);

        let grill = &restaurants[0];
        assert_eq!(grill.id, "r-101");
        assert_eq!(grill.name, "The Castle Grill");
        assert_eq!(grill.city, "Lancaster");
        assert_eq!(grill.latitude, 54.0489);
        assert_eq!(grill.hygiene_rating, 5);
        assert_eq!(grill.cuisine, "British");
        assert_eq!(grill.price_range, "£££");
        assert_eq!(grill.phone.as_deref(), Some("01524 111222"));

        let hours = grill.opening_hours.as_ref().unwrap();
        assert_eq!(hours.get("Monday").map(String::as_str), Some("12:00 - 22:00"));
        // Empty day element means the place exists but is closed that day
        assert_eq!(hours.get("Sunday").map(String::as_str), Some("Closed"));
        // Days without a sub-element are omitted, not defaulted
        assert!(!hours.contains_key("Wednesday"));

        let reviews = grill.reviews.as_ref().unwrap();
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0].id, "review-r-101-0");
        assert_eq!(reviews[0].user_name, "GrillFan");
        assert_eq!(reviews[0].rating, 4.5);
        // Second review exercises every review default
        assert_eq!(reviews[1].id, "review-r-101-1");
        assert_eq!(reviews[1].user_name, "Anonymous");
        assert_eq!(reviews[1].rating, 3.0);
        assert_eq!(reviews[1].comment, "");
    }

    #[test]
    fn test_defaults_for_sparse_record() {
        let restaurants = parse_document(SMALL_SAMPLE_XML).unwrap();
        let noodle = &restaurants[1];

        assert_eq!(noodle.id, "xml-1");
        assert_eq!(noodle.name, "Noodle Stop");
        assert_eq!(noodle.address, "");
        assert_eq!(noodle.city, "Lancaster");
        assert_eq!(noodle.cuisine, "Other");
        assert_eq!(noodle.price_range, "££");
        assert_eq!(noodle.description, "");
        // Non-numeric values degrade the same way as missing ones
        assert_eq!(noodle.hygiene_rating, 0);
        assert_eq!((noodle.latitude, noodle.longitude), (0.0, 0.0));
        assert!(noodle.phone.is_none());
        assert!(noodle.website.is_none());
        assert!(noodle.opening_hours.is_none());
        // A reviews block with no review children yields no reviews field
        assert!(noodle.reviews.is_none());
    }

    #[test]
    fn test_synthesized_ids_follow_document_position() {
        let xml = r#"<restaurants>
            <restaurant><name>First</name></restaurant>
            <restaurant id="given"><name>Second</name></restaurant>
            <restaurant><name>Third</name></restaurant>
        </restaurants>"#;

        let restaurants = parse_document(xml).unwrap();
        let ids: Vec<&str> = restaurants.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["xml-0", "given", "xml-2"]);
    }

    #[test]
    fn test_last_inspection_defaults_to_current_date() {
        let restaurants =
            parse_document("<restaurants><restaurant/></restaurants>").unwrap();
        assert_eq!(restaurants.len(), 1);
        assert_eq!(restaurants[0].last_inspection, current_date());
    }

    #[test]
    fn test_empty_opening_hours_block_is_present_but_empty() {
        let xml = "<restaurants><restaurant><opening_hours/></restaurant></restaurants>";
        let restaurants = parse_document(xml).unwrap();
        let hours = restaurants[0].opening_hours.as_ref().unwrap();
        assert!(hours.is_empty());
    }

    #[test]
    fn test_self_closing_day_reads_as_closed() {
        let xml = r#"<restaurants><restaurant>
            <opening_hours><friday/></opening_hours>
        </restaurant></restaurants>"#;

        let restaurants = parse_document(xml).unwrap();
        let hours = restaurants[0].opening_hours.as_ref().unwrap();
        assert_eq!(hours.get("Friday").map(String::as_str), Some("Closed"));
        assert_eq!(hours.len(), 1);
    }

    #[test]
    fn test_unknown_elements_are_skipped() {
        let xml = r#"<restaurants>
            <notice>Dataset refreshed weekly</notice>
            <restaurant id="a">
                <name>Kept</name>
                <wheelchair_access>yes</wheelchair_access>
            </restaurant>
        </restaurants>"#;

        let restaurants = parse_document(xml).unwrap();
        assert_eq!(restaurants.len(), 1);
        assert_eq!(restaurants[0].name, "Kept");
    }

    #[test]
    fn test_parse_is_idempotent() {
        let first = parse_document(SMALL_SAMPLE_XML).unwrap();
        let second = parse_document(SMALL_SAMPLE_XML).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_malformed_markup_is_rejected() {
        let result = parse_document("<restaurants><restaurant><name>Broken</restaurants>");
        assert!(matches!(result, Err(IngestError::XmlParseError(_))));
    }

    #[test]
    fn test_truncated_document_is_rejected() {
        let result = parse_document("<restaurants><restaurant><reviews>");
        assert!(result.is_err());
    }

    #[test]
    fn test_document_without_restaurants_is_empty() {
        let restaurants = parse_document("<restaurants></restaurants>").unwrap();
        assert!(restaurants.is_empty());
    }

    #[test]
    fn test_load_sample() {
        let xml = load_sample();
        assert!(xml.is_ok(), "Failed to load sample XML: {:?}", xml.err());

        let restaurants = parse_document(&xml.unwrap()).unwrap();
        assert_eq!(restaurants.len(), 3);
        assert_eq!(restaurants[0].name, "The Borough Kitchen");
        assert_eq!(restaurants[2].id, "xml-2");
    }
}

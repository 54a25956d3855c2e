//! Normalize raw catalogue records into domain attractions.
//!
//! The catalogue is hand-maintained and sloppy: coordinates arrive as a
//! `"lat,lon"` string, prices as free text, the city is buried in the
//! address. Every parser here is total. Malformed input becomes an
//! absent field, never an error, so one bad record cannot poison a
//! batch.

use geo::Coord;

use putnik_core::{Attraction, Category, Review};

use crate::record::PlaceRecord;

/// Parse a `"lat,lon"` pair into a coordinate.
///
/// Requires exactly two comma-separated finite numbers; anything else
/// yields no coordinates. The result follows the crate-wide axis order
/// `x = longitude`, `y = latitude`.
#[must_use]
pub fn parse_lat_lon(value: &str) -> Option<Coord<f64>> {
    let parts: Vec<&str> = value.split(',').collect();
    if parts.len() != 2 {
        return None;
    }
    let latitude: f64 = parts[0].trim().parse().ok()?;
    let longitude: f64 = parts[1].trim().parse().ok()?;
    (latitude.is_finite() && longitude.is_finite()).then_some(Coord {
        x: longitude,
        y: latitude,
    })
}

/// Extract the city from a postal address: the part before the first
/// comma, or the whole address when there is none.
#[must_use]
pub fn city_from_address(address: &str) -> String {
    match address.find(',') {
        Some(idx) if idx > 0 => address[..idx].trim().to_owned(),
        _ => address.trim().to_owned(),
    }
}

/// Parse a free-text price into roubles.
///
/// Any mention of "free" maps to zero. Otherwise every non-digit
/// character is stripped and the remainder parsed; an empty remainder
/// means the price is unknown, which is distinct from free.
///
/// # Examples
/// ```
/// use putnik_api::parse_price_rub;
///
/// assert_eq!(parse_price_rub("бесплатно"), Some(0));
/// assert_eq!(parse_price_rub("300 ₽"), Some(300));
/// assert_eq!(parse_price_rub("по запросу"), None);
/// ```
#[must_use]
pub fn parse_price_rub(price: &str) -> Option<u32> {
    if price.to_lowercase().contains("бесплат") {
        return Some(0);
    }
    let digits: String = price.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Map a raw place record onto an [`Attraction`].
///
/// Records without a usable name are unusable and yield `None`; callers
/// skip them. Everything else degrades field by field.
#[must_use]
pub fn map_place(record: &PlaceRecord) -> Option<Attraction> {
    let name = record
        .data
        .name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())?
        .to_owned();

    let data = &record.data;
    let mut attraction = Attraction::new(
        record.id.clone(),
        name,
        data.address.as_deref().map(city_from_address).unwrap_or_default(),
        Category::normalize(record.meta.kind.as_deref().unwrap_or_default()),
        data.avg_rating.unwrap_or(0.0),
    );
    attraction.price_rub = data.price.as_deref().and_then(parse_price_rub);
    attraction.location = data.location.as_deref().and_then(parse_lat_lon);
    attraction.time = data.time.clone();
    attraction.description = data.description.clone();
    attraction.address = data.address.clone();
    attraction.yandex_maps_link = data.yandex_maps_link.clone();
    attraction.two_gis_link = data.two_gis_link.clone();
    attraction.book_link = data.book_link.clone();
    attraction.buy_tickets_link = data.buy_tickets_link.clone();
    attraction.reviews = data
        .reviews
        .iter()
        .flatten()
        .map(|r| Review {
            author: r.name.clone(),
            text: r.review.clone(),
            rating: r.rating,
        })
        .collect();
    Some(attraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("47.2357,39.7015", Some((47.2357, 39.7015)))]
    #[case("47.2357, 39.7015", Some((47.2357, 39.7015)))]
    #[case("", None)]
    #[case("47.2357", None)]
    #[case("47.2,39.7,12", None)]
    #[case("north,east", None)]
    #[case("NaN,39.7", None)]
    #[case("inf,39.7", None)]
    fn lat_lon_parsing(#[case] raw: &str, #[case] expected: Option<(f64, f64)>) {
        let parsed = parse_lat_lon(raw).map(|c| (c.y, c.x));
        assert_eq!(parsed, expected);
    }

    #[rstest]
    #[case("Ростов-на-Дону, ул. Пушкинская, 115", "Ростов-на-Дону")]
    #[case("Таганрог", "Таганрог")]
    #[case("  Азов , Петровская площадь", "Азов")]
    #[case("", "")]
    fn city_extraction(#[case] address: &str, #[case] expected: &str) {
        assert_eq!(city_from_address(address), expected);
    }

    #[rstest]
    #[case("бесплатно", Some(0))]
    #[case("Бесплатный вход", Some(0))]
    #[case("300 ₽", Some(300))]
    #[case("от 1 200 руб.", Some(1200))]
    #[case("", None)]
    #[case("по запросу", None)]
    fn price_parsing(#[case] raw: &str, #[case] expected: Option<u32>) {
        assert_eq!(parse_price_rub(raw), expected);
    }

    fn record_from(json: &str) -> PlaceRecord {
        serde_json::from_str(json).expect("record should deserialise")
    }

    #[test]
    fn mapping_skips_records_without_a_name() {
        let record = record_from(r#"{ "id": "p1", "data": { "name": "   " } }"#);
        assert!(map_place(&record).is_none());
        let record = record_from(r#"{ "id": "p1" }"#);
        assert!(map_place(&record).is_none());
    }

    #[test]
    fn mapping_fills_every_normalized_field() {
        let record = record_from(
            r#"{
                "id": "p1",
                "meta": { "type": "музей" },
                "data": {
                    "name": " Музей ИЗО ",
                    "address": "Ростов-на-Дону, ул. Пушкинская, 115",
                    "avgRating": 4.7,
                    "location": "47.2220,39.7203",
                    "price": "300 ₽"
                }
            }"#,
        );

        let attraction = map_place(&record).expect("record has a name");
        assert_eq!(attraction.name, "Музей ИЗО");
        assert_eq!(attraction.city, "Ростов-на-Дону");
        assert_eq!(attraction.category, Category::Museum);
        assert_eq!(attraction.price_rub, Some(300));
        let location = attraction.location.expect("location parses");
        assert!((location.y - 47.2220).abs() < 1e-9);
        assert!((location.x - 39.7203).abs() < 1e-9);
    }

    #[test]
    fn mapping_defaults_missing_optionals() {
        let record = record_from(r#"{ "id": "p1", "data": { "name": "Парк" } }"#);
        let attraction = map_place(&record).expect("record has a name");
        assert_eq!(attraction.city, "");
        assert_eq!(attraction.category, Category::Park);
        assert_eq!(attraction.rating, 0.0);
        assert_eq!(attraction.price_rub, None);
        assert_eq!(attraction.location, None);
    }
}

//! Attractions: the places a route visits.

use geo::Coord;

use crate::Category;

/// A visitor review attached to an attraction.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Review {
    /// Reviewer's display name, when given.
    pub author: Option<String>,
    /// Free-text review body.
    pub text: Option<String>,
    /// Reviewer's rating, when given.
    pub rating: Option<f64>,
}

/// A place worth visiting.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`, and are
/// either both present and finite or absent entirely. Prices are in roubles;
/// a missing price means "unknown", not "free".
///
/// # Examples
/// ```
/// use putnik_core::{Attraction, Category};
///
/// let attraction = Attraction::new("a1", "Набережная", "Ростов-на-Дону", Category::Park, 4.8);
/// assert_eq!(attraction.id, "a1");
/// assert!(attraction.location.is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attraction {
    /// Catalogue identifier, unique within a fetched batch.
    pub id: String,
    /// Display name.
    pub name: String,
    /// City the attraction belongs to; empty when the address gave none.
    pub city: String,
    /// Category used for icons, labels and interest filtering.
    pub category: Category,
    /// Average visitor rating in `[0, 5]`; `0.0` when the catalogue has none.
    pub rating: f64,
    /// Entry price in roubles, when known.
    pub price_rub: Option<u32>,
    /// Opening hours as free text.
    pub time: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
    /// Full postal address.
    pub address: Option<String>,
    /// Geographic position, when the catalogue supplied one.
    pub location: Option<Coord<f64>>,
    /// Link to the place on Yandex Maps.
    pub yandex_maps_link: Option<String>,
    /// Link to the place on 2GIS.
    pub two_gis_link: Option<String>,
    /// Booking link, for hotels.
    pub book_link: Option<String>,
    /// Ticket purchase link.
    pub buy_tickets_link: Option<String>,
    /// Visitor reviews.
    pub reviews: Vec<Review>,
}

impl Attraction {
    /// Construct an attraction with the required fields; everything
    /// optional starts absent.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        city: impl Into<String>,
        category: Category,
        rating: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            city: city.into(),
            category,
            rating,
            price_rub: None,
            time: None,
            description: None,
            address: None,
            location: None,
            yandex_maps_link: None,
            two_gis_link: None,
            book_link: None,
            buy_tickets_link: None,
            reviews: Vec::new(),
        }
    }

    /// Set the entry price in roubles.
    #[must_use]
    pub fn with_price_rub(mut self, price_rub: u32) -> Self {
        self.price_rub = Some(price_rub);
        self
    }

    /// Set the position from latitude and longitude in degrees.
    #[must_use]
    pub fn with_location(mut self, latitude: f64, longitude: f64) -> Self {
        self.location = Some(Coord {
            x: longitude,
            y: latitude,
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_location_uses_lon_lat_axis_order() {
        let attraction =
            Attraction::new("a", "A", "X", Category::Park, 0.0).with_location(47.2, 39.7);
        let location = attraction.location.unwrap();
        assert_eq!(location.y, 47.2);
        assert_eq!(location.x, 39.7);
    }

    #[test]
    fn optional_fields_start_absent() {
        let attraction = Attraction::new("a", "A", "X", Category::Park, 0.0);
        assert!(attraction.price_rub.is_none());
        assert!(attraction.reviews.is_empty());
    }
}

//! Wire shapes of the guide API.
//!
//! Field names are the external contract and must not drift: the
//! catalogue uses camelCase inside `data`, the account endpoints use
//! snake_case, and the favourites payload tags entries with a lowercase
//! `type` discriminator.

use serde::{Deserialize, Serialize};

/// A raw catalogue place as the `/places` endpoint returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceRecord {
    /// Catalogue identifier.
    pub id: String,
    /// Envelope metadata.
    #[serde(default)]
    pub meta: PlaceMeta,
    /// Place payload.
    #[serde(default)]
    pub data: PlaceData,
}

/// Envelope metadata of a place record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceMeta {
    /// Raw category label, Russian or English.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Upstream identifier, when distinct from the record id.
    pub id: Option<String>,
    /// Creation timestamp as supplied upstream.
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
    /// Last-update timestamp as supplied upstream.
    #[serde(rename = "lastUpdated")]
    pub last_updated: Option<String>,
}

/// Payload of a place record. Every field is optional on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlaceData {
    /// Display name.
    pub name: Option<String>,
    /// Opening hours as free text.
    pub time: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
    /// Postal address; the city is its first comma-separated component.
    pub address: Option<String>,
    /// Average rating.
    pub avg_rating: Option<f64>,
    /// `"lat,lon"` string.
    pub location: Option<String>,
    /// Free-text price (`"300 ₽"`, `"бесплатно"`, …).
    pub price: Option<String>,
    /// Yandex Maps link.
    pub yandex_maps_link: Option<String>,
    /// 2GIS link.
    pub two_gis_link: Option<String>,
    /// Booking link.
    pub book_link: Option<String>,
    /// Ticket purchase link.
    pub buy_tickets_link: Option<String>,
    /// Visitor reviews.
    pub reviews: Option<Vec<ReviewRecord>>,
}

/// A single review inside a place record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewRecord {
    /// Reviewer's name.
    pub name: Option<String>,
    /// Review body.
    pub review: Option<String>,
    /// Reviewer's rating.
    pub rating: Option<f64>,
}

/// The `/places` response: a bare array, an `items` wrapper, or (from
/// older deployments) something else entirely, which reads as empty.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PlacesResponse {
    /// The documented bare-array shape.
    List(Vec<PlaceRecord>),
    /// The `{ "items": [...] }` wrapper some deployments produce.
    Wrapped {
        /// The wrapped records.
        items: Vec<PlaceRecord>,
    },
    /// Anything else; degrades to an empty batch.
    Other(serde_json::Value),
}

impl PlacesResponse {
    /// Unwrap the records regardless of which shape arrived.
    #[must_use]
    pub fn into_records(self) -> Vec<PlaceRecord> {
        match self {
            Self::List(records) | Self::Wrapped { items: records } => records,
            Self::Other(_) => Vec::new(),
        }
    }
}

/// Response body of `POST /login`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginResponse {
    /// Bearer token on success.
    pub token: Option<String>,
    /// Role on success; missing defaults to `"user"`.
    pub role: Option<String>,
    /// Human-readable rejection reason on failure.
    pub message: Option<String>,
}

/// Account record from `GET /users/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserRecord {
    /// Account login.
    pub username: Option<String>,
    /// Display name.
    pub name: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Contact phone.
    pub phone: Option<String>,
}

/// Discriminator of a synced favourite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteKind {
    /// A favourite route.
    Route,
    /// A favourite place.
    Place,
}

/// One favourite entry in the sync payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteRecord {
    /// Whether the entry is a route or a place.
    #[serde(rename = "type")]
    pub kind: FavoriteKind,
    /// Identifier of the favourited item.
    pub item_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialise_full_place_record() {
        let json = r#"{
            "id": "p1",
            "meta": { "type": "Музей", "createdAt": "2024-01-01" },
            "data": {
                "name": "Музей ИЗО",
                "address": "Ростов-на-Дону, ул. Пушкинская, 115",
                "avgRating": 4.7,
                "location": "47.2220,39.7203",
                "price": "300 ₽",
                "yandexMapsLink": "https://yandex.ru/maps/-/abc",
                "reviews": [{ "name": "Анна", "review": "Отлично", "rating": 5 }]
            }
        }"#;

        let record: PlaceRecord = serde_json::from_str(json).expect("should deserialise");

        assert_eq!(record.id, "p1");
        assert_eq!(record.meta.kind.as_deref(), Some("Музей"));
        assert_eq!(record.data.avg_rating, Some(4.7));
        assert_eq!(record.data.yandex_maps_link.as_deref(), Some("https://yandex.ru/maps/-/abc"));
        assert_eq!(record.data.reviews.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn deserialise_sparse_place_record() {
        let record: PlaceRecord =
            serde_json::from_str(r#"{ "id": "p2" }"#).expect("should deserialise");
        assert!(record.meta.kind.is_none());
        assert!(record.data.name.is_none());
    }

    #[test]
    fn places_response_accepts_bare_array() {
        let response: PlacesResponse =
            serde_json::from_str(r#"[{ "id": "p1" }]"#).expect("should deserialise");
        assert_eq!(response.into_records().len(), 1);
    }

    #[test]
    fn places_response_accepts_items_wrapper() {
        let response: PlacesResponse =
            serde_json::from_str(r#"{ "items": [{ "id": "p1" }, { "id": "p2" }] }"#)
                .expect("should deserialise");
        assert_eq!(response.into_records().len(), 2);
    }

    #[test]
    fn places_response_degrades_to_empty_for_unknown_shapes() {
        let response: PlacesResponse =
            serde_json::from_str(r#"{ "error": "maintenance" }"#).expect("should deserialise");
        assert!(response.into_records().is_empty());
    }

    #[test]
    fn favourites_payload_shape() {
        let record = FavoriteRecord {
            kind: FavoriteKind::Route,
            item_id: "r1".to_owned(),
        };
        let json = serde_json::to_string(&record).expect("should serialise");
        assert_eq!(json, r#"{"type":"route","item_id":"r1"}"#);
    }
}

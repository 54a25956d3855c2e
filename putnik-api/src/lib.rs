//! Remote boundary of the Putnik travel guide.
//!
//! This crate owns everything that crosses the wire: the catalogue and
//! user-account record shapes, the normalization of raw place records
//! into [`putnik_core::Attraction`] values, the HTTP client for the guide
//! API, bearer-token payload introspection, and the assistant chat
//! client.
//!
//! The crate is a transformation layer over documented shapes; it designs
//! no protocol of its own. Malformed optional input degrades to absent
//! fields, while transport and authorization failures surface as
//! [`ApiError`].

#![forbid(unsafe_code)]

pub mod assistant;
pub mod client;
pub mod error;
pub mod normalize;
pub mod record;
pub mod token;

pub use assistant::{AssistantClient, DEFAULT_ASSISTANT_URL};
pub use client::{
    AuthSession, ClientBuildError, DEFAULT_BASE_URL, GuideClient, GuideClientConfig,
    MIN_PASSWORD_LEN, ProfileUpdate, ProfileValidationError, Registration, RegistrationError,
};
pub use error::ApiError;
pub use normalize::{city_from_address, map_place, parse_lat_lon, parse_price_rub};
pub use record::{
    FavoriteKind, FavoriteRecord, LoginResponse, PlaceData, PlaceMeta, PlaceRecord,
    PlacesResponse, ReviewRecord, UserRecord,
};
pub use token::{TokenClaims, decode_claims};

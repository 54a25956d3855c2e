//! Core domain types for the Putnik travel guide.
//!
//! The crate models attractions, multi-stop routes and their travel legs,
//! and provides the pure route-planning helpers used by every frontend:
//! leg synthesis from coordinates, route summaries, the in-progress route
//! draft and the curated catalogue. Everything here is synchronous and
//! deterministic; network and persistence concerns live in the sibling
//! crates.

#![forbid(unsafe_code)]

pub mod attraction;
pub mod catalog;
pub mod category;
pub mod distance;
pub mod draft;
pub mod legs;
pub mod route;
pub mod summary;

pub use attraction::{Attraction, Review};
pub use catalog::{DEFAULT_DWELL_MIN, aggregate, curated_routes, expand_user_route};
pub use category::Category;
pub use distance::{EARTH_RADIUS_KM, distance_km, haversine_km};
pub use draft::{DraftError, RouteDraft};
pub use legs::{
    BUS_SPEED_KMH, FALLBACK_LEG_MIN, WALK_SPEED_KMH, WALK_THRESHOLD_KM, leg_for_distance,
    synthesize_legs,
};
pub use route::{Leg, MULTIPLE_CITIES, Route, Stop, TransportMode, UserRoute};
pub use summary::{RouteSummary, format_duration_ru, plural_ru};

//! Facade crate for the Putnik travel guide.
//!
//! Re-exports the core domain types and, behind feature flags, the
//! remote API client and the client-side session state.

#![forbid(unsafe_code)]

pub use putnik_core::{
    Attraction, Category, DraftError, Leg, MULTIPLE_CITIES, Review, Route, RouteDraft,
    RouteSummary, Stop, TransportMode, UserRoute, aggregate, curated_routes, distance_km,
    format_duration_ru, haversine_km, leg_for_distance, plural_ru, synthesize_legs,
};

#[cfg(feature = "client")]
pub use putnik_api::{
    ApiError, AssistantClient, AuthSession, GuideClient, GuideClientConfig, decode_claims,
};

#[cfg(feature = "session")]
pub use putnik_app::{MemoryVault, Session, Vault, ViewScope};

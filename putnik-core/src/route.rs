//! Routes through attractions.
//!
//! A route owns its ordered stops and the legs connecting them. For a
//! route with `n` stops the leg sequence has exactly `n - 1` entries
//! (empty for zero or one stop); leg `i` describes the transition from
//! stop `i` to stop `i + 1`.

use crate::Attraction;

/// City label used when a route's stops span more than one city.
pub const MULTIPLE_CITIES: &str = "Несколько городов";

/// How a leg is travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TransportMode {
    /// On foot.
    Walk,
    /// City bus.
    Bus,
    /// Car or taxi.
    Car,
    /// Suburban train.
    Train,
}

impl TransportMode {
    /// Material icon name used when rendering the mode.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Walk => "walk",
            Self::Bus => "bus",
            Self::Car => "car",
            Self::Train => "train",
        }
    }
}

/// A stop on a route: an attraction plus the time spent there.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop {
    /// The place visited.
    pub attraction: Attraction,
    /// Dwell time at the stop, in minutes.
    pub dwell_min: u32,
}

/// The travel segment between two consecutive stops.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Leg {
    /// Travel mode.
    pub mode: TransportMode,
    /// Travel time in minutes.
    pub duration_min: u32,
    /// Distance in kilometres, when known.
    pub distance_km: Option<f64>,
    /// Free-text note, e.g. a bus number.
    pub note: Option<String>,
}

/// An ordered itinerary of stops connected by legs.
///
/// # Examples
/// ```
/// use putnik_core::{Attraction, Category, Route, Stop};
///
/// let stop = Stop {
///     attraction: Attraction::new("a1", "Набережная", "Ростов-на-Дону", Category::Park, 4.8),
///     dwell_min: 40,
/// };
/// let route = Route::new("r1", "Классика", "Ростов-на-Дону", vec![stop], Vec::new());
/// assert_eq!(route.stops.len(), 1);
/// assert!(route.legs.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Route identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// City label: the shared city, or [`MULTIPLE_CITIES`].
    pub city: String,
    /// Stops in visiting order.
    pub stops: Vec<Stop>,
    /// Legs between consecutive stops; `stops.len() - 1` entries.
    pub legs: Vec<Leg>,
    /// Suggested budget in roubles, for curated routes that carry one.
    pub budget_rub: Option<u32>,
}

impl Route {
    /// Construct a route from its parts.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        city: impl Into<String>,
        stops: Vec<Stop>,
        legs: Vec<Leg>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            city: city.into(),
            stops,
            legs,
            budget_rub: None,
        }
    }

    /// Set the suggested budget.
    #[must_use]
    pub fn with_budget_rub(mut self, budget_rub: u32) -> Self {
        self.budget_rub = Some(budget_rub);
        self
    }
}

/// A route assembled by the user, before dwell times and legs are derived.
///
/// User routes keep only the selected attractions; the aggregator expands
/// them with default dwell times and synthesized legs when they are shown
/// next to curated routes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserRoute {
    /// Identifier derived from the creation time (`"u_{millis}"`).
    pub id: String,
    /// Title, user-supplied or defaulted at finalization.
    pub title: String,
    /// City label derived from the stops.
    pub city: String,
    /// Selected attractions in visiting order.
    pub stops: Vec<Attraction>,
    /// Creation time in milliseconds since the Unix epoch.
    pub created_at_ms: u64,
}

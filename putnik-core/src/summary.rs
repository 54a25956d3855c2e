//! Per-route summary statistics and the display helpers built on them.

use crate::route::Route;

/// Derived totals for a route. Computed on demand, never stored.
///
/// # Examples
/// ```
/// use putnik_core::{Attraction, Category, Leg, Route, Stop, TransportMode};
///
/// let stops = vec![
///     Stop {
///         attraction: Attraction::new("a", "A", "X", Category::Park, 4.0),
///         dwell_min: 40,
///     },
///     Stop {
///         attraction: Attraction::new("b", "B", "X", Category::Museum, 4.5).with_price_rub(300),
///         dwell_min: 50,
///     },
/// ];
/// let legs = vec![Leg {
///     mode: TransportMode::Bus,
///     duration_min: 18,
///     distance_km: None,
///     note: None,
/// }];
/// let summary = Route::new("r", "T", "X", stops, legs).summary();
/// assert_eq!(summary.total_time_min, 108);
/// assert_eq!(summary.total_cost_rub, 300);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSummary {
    /// Dwell minutes plus leg minutes.
    pub total_time_min: u32,
    /// Sum of stop prices; unknown prices count as zero.
    pub total_cost_rub: u32,
    /// Sum of leg distances; `None` when nothing contributed, so a
    /// zero total reads as "not applicable" rather than "zero km".
    pub total_distance_km: Option<f64>,
    /// Number of stops.
    pub stop_count: usize,
}

impl Route {
    /// Compute the route's summary.
    #[must_use]
    pub fn summary(&self) -> RouteSummary {
        let dwell: u32 = self.stops.iter().map(|s| s.dwell_min).sum();
        let travel: u32 = self.legs.iter().map(|l| l.duration_min).sum();
        let cost: u32 = self
            .stops
            .iter()
            .filter_map(|s| s.attraction.price_rub)
            .sum();
        let distance: f64 = self.legs.iter().filter_map(|l| l.distance_km).sum();
        RouteSummary {
            total_time_min: dwell + travel,
            total_cost_rub: cost,
            total_distance_km: (distance > 0.0).then_some(distance),
            stop_count: self.stops.len(),
        }
    }
}

/// Format a duration in minutes the way the app displays it: `"45м"`,
/// `"2ч"`, `"2ч 15м"`.
#[must_use]
pub fn format_duration_ru(minutes: u32) -> String {
    let h = minutes / 60;
    let m = minutes % 60;
    match (h, m) {
        (0, m) => format!("{m}м"),
        (h, 0) => format!("{h}ч"),
        (h, m) => format!("{h}ч {m}м"),
    }
}

/// Pick the Russian plural form for `n`: one (`точка`), few (`точки`),
/// many (`точек`).
#[must_use]
pub fn plural_ru<'a>(n: u64, one: &'a str, few: &'a str, many: &'a str) -> &'a str {
    let n10 = n % 10;
    let n100 = n % 100;
    if n10 == 1 && n100 != 11 {
        one
    } else if (2..=4).contains(&n10) && !(12..=14).contains(&n100) {
        few
    } else {
        many
    }
}

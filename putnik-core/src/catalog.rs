//! The curated route catalogue and the aggregated route list.
//!
//! Curated routes are fixed editorial content: defined once, never
//! mutated, complete with hand-authored legs and budgets. User-built
//! routes are merged in front of them for display.

use crate::legs::synthesize_legs;
use crate::route::{Leg, Route, Stop, TransportMode, UserRoute};
use crate::{Attraction, Category};

/// Dwell time assumed for every stop of a user-built route, in minutes.
pub const DEFAULT_DWELL_MIN: u32 = 30;

/// Expand a user route into a displayable [`Route`]: default dwell times
/// plus synthesized legs.
#[must_use]
pub fn expand_user_route(route: &UserRoute) -> Route {
    let stops: Vec<Stop> = route
        .stops
        .iter()
        .cloned()
        .map(|attraction| Stop {
            attraction,
            dwell_min: DEFAULT_DWELL_MIN,
        })
        .collect();
    let legs = synthesize_legs(&stops);
    Route::new(
        route.id.clone(),
        route.title.clone(),
        route.city.clone(),
        stops,
        legs,
    )
}

/// Merge user routes and the curated catalogue into one browsable list.
///
/// User routes come first, in the order of the given slice (the caller
/// keeps that collection most-recent-first), followed by the curated
/// routes in definition order. Identifiers are not deduplicated across
/// the two sources: a collision shows both routes.
#[must_use]
pub fn aggregate(user_routes: &[UserRoute], curated: &[Route]) -> Vec<Route> {
    user_routes
        .iter()
        .map(expand_user_route)
        .chain(curated.iter().cloned())
        .collect()
}

fn walk(duration_min: u32, distance_km: f64) -> Leg {
    Leg {
        mode: TransportMode::Walk,
        duration_min,
        distance_km: Some(distance_km),
        note: None,
    }
}

/// The fixed editorial catalogue for the Rostov region.
///
/// Three routes with hand-authored legs; the leg synthesizer is never
/// applied to these.
#[must_use]
pub fn curated_routes() -> Vec<Route> {
    vec![
        Route::new(
            "r1",
            "Классика Ростова за день",
            "Ростов-на-Дону",
            vec![
                Stop {
                    attraction: Attraction::new(
                        "a1",
                        "Набережная",
                        "Ростов-на-Дону",
                        Category::Park,
                        4.8,
                    ),
                    dwell_min: 40,
                },
                Stop {
                    attraction: Attraction::new(
                        "a2",
                        "Театр им. Горького",
                        "Ростов-на-Дону",
                        Category::Theatre,
                        4.6,
                    ),
                    dwell_min: 50,
                },
                Stop {
                    attraction: Attraction::new(
                        "a3",
                        "Музей ИЗО",
                        "Ростов-на-Дону",
                        Category::Museum,
                        4.7,
                    )
                    .with_price_rub(300),
                    dwell_min: 60,
                },
            ],
            vec![walk(12, 0.9), Leg {
                mode: TransportMode::Bus,
                duration_min: 18,
                distance_km: Some(5.4),
                note: Some("Автобус №7".to_owned()),
            }],
        )
        .with_budget_rub(600),
        Route::new(
            "r2",
            "Азов и крепость",
            "Азов",
            vec![
                Stop {
                    attraction: Attraction::new(
                        "b1",
                        "Азовская крепость",
                        "Азов",
                        Category::Monument,
                        4.4,
                    )
                    .with_price_rub(150),
                    dwell_min: 70,
                },
                Stop {
                    attraction: Attraction::new(
                        "b2",
                        "Азовский музей-заповедник",
                        "Азов",
                        Category::Museum,
                        4.5,
                    )
                    .with_price_rub(200),
                    dwell_min: 60,
                },
            ],
            vec![walk(10, 0.7)],
        )
        .with_budget_rub(500),
        Route::new(
            "r3",
            "Таганрог: набережная и бульвар",
            "Таганрог",
            vec![
                Stop {
                    attraction: Attraction::new(
                        "c1",
                        "Петровская набережная",
                        "Таганрог",
                        Category::Park,
                        4.3,
                    ),
                    dwell_min: 45,
                },
                Stop {
                    attraction: Attraction::new(
                        "c2",
                        "Петровский бульвар",
                        "Таганрог",
                        Category::Park,
                        4.6,
                    ),
                    dwell_min: 50,
                },
            ],
            vec![Leg {
                mode: TransportMode::Car,
                duration_min: 8,
                distance_km: Some(3.2),
                note: None,
            }],
        ),
    ]
}

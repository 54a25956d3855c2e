//! Derive travel legs for routes that do not carry hand-authored ones.
//!
//! User-built routes only record which attractions to visit; the legs
//! between consecutive stops are synthesized from coordinates with a
//! deliberately simple heuristic. Short hops are walked, anything else
//! takes the bus, and the durations are display estimates only: no
//! routing service is involved and the result is fully deterministic.

use crate::distance::distance_km;
use crate::route::{Leg, Stop, TransportMode};

/// Distances below this are walked; everything else goes by bus.
pub const WALK_THRESHOLD_KM: f64 = 1.5;

/// Assumed walking speed, km/h.
pub const WALK_SPEED_KMH: f64 = 5.0;

/// Assumed bus speed, km/h.
pub const BUS_SPEED_KMH: f64 = 30.0;

/// Leg duration used when the distance is unknown or zero, in minutes.
///
/// Keeps legs between co-located or un-located stops from showing a
/// zero-minute transition.
pub const FALLBACK_LEG_MIN: u32 = 5;

/// Build the leg for a single transition of known or unknown distance.
///
/// An unknown distance is treated as zero for the mode/duration choice but
/// stays absent on the leg itself; a zero distance likewise yields no
/// distance on the leg.
///
/// # Examples
/// ```
/// use putnik_core::{TransportMode, leg_for_distance};
///
/// let walk = leg_for_distance(Some(1.0));
/// assert_eq!(walk.mode, TransportMode::Walk);
/// assert_eq!(walk.duration_min, 12);
///
/// let bus = leg_for_distance(Some(10.0));
/// assert_eq!(bus.mode, TransportMode::Bus);
/// assert_eq!(bus.duration_min, 20);
/// ```
#[must_use]
pub fn leg_for_distance(distance: Option<f64>) -> Leg {
    let d = distance.unwrap_or(0.0);
    let (mode, speed) = if d < WALK_THRESHOLD_KM {
        (TransportMode::Walk, WALK_SPEED_KMH)
    } else {
        (TransportMode::Bus, BUS_SPEED_KMH)
    };
    let duration_min = if d > 0.0 {
        (d / speed * 60.0).ceil() as u32
    } else {
        FALLBACK_LEG_MIN
    };
    Leg {
        mode,
        duration_min,
        distance_km: distance.filter(|&d| d > 0.0),
        note: None,
    }
}

/// Synthesize legs for each consecutive stop pair.
///
/// Returns exactly `max(0, stops.len() - 1)` legs, in stop order. Pure and
/// infallible: stops without coordinates degrade to the fallback leg
/// rather than erroring.
#[must_use]
pub fn synthesize_legs(stops: &[Stop]) -> Vec<Leg> {
    stops
        .windows(2)
        .map(|pair| leg_for_distance(distance_km(&pair[0].attraction, &pair[1].attraction)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(1.0), TransportMode::Walk, 12)]
    #[case(Some(10.0), TransportMode::Bus, 20)]
    #[case(Some(0.1), TransportMode::Walk, 2)]
    // The threshold itself is a bus leg.
    #[case(Some(1.5), TransportMode::Bus, 3)]
    #[case(None, TransportMode::Walk, FALLBACK_LEG_MIN)]
    #[case(Some(0.0), TransportMode::Walk, FALLBACK_LEG_MIN)]
    fn heuristic_mode_and_duration(
        #[case] distance: Option<f64>,
        #[case] mode: TransportMode,
        #[case] duration_min: u32,
    ) {
        let leg = leg_for_distance(distance);
        assert_eq!(leg.mode, mode);
        assert_eq!(leg.duration_min, duration_min);
    }

    #[rstest]
    #[case(None)]
    #[case(Some(0.0))]
    fn unknown_and_zero_distances_stay_off_the_leg(#[case] distance: Option<f64>) {
        assert_eq!(leg_for_distance(distance).distance_km, None);
    }

    #[test]
    fn known_distance_is_kept_on_the_leg() {
        assert_eq!(leg_for_distance(Some(0.9)).distance_km, Some(0.9));
    }
}

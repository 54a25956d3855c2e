//! The in-progress route a user is assembling.

use thiserror::Error;

use crate::route::{MULTIPLE_CITIES, UserRoute};
use crate::Attraction;

/// Errors returned by [`RouteDraft::finalize`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    /// The draft has no stops to build a route from.
    #[error("route draft has no stops")]
    Empty,
}

/// An ordered, editable list of selected attractions.
///
/// All editing operations are total: adding an attraction that is already
/// present and moving with an out-of-range index are silent no-ops,
/// matching how the interactive builder behaves.
///
/// # Examples
/// ```
/// use putnik_core::{Attraction, Category, RouteDraft};
///
/// let mut draft = RouteDraft::new();
/// draft.add(Attraction::new("a1", "Набережная", "Ростов-на-Дону", Category::Park, 4.8));
/// draft.add(Attraction::new("a1", "Набережная", "Ростов-на-Дону", Category::Park, 4.8));
/// assert_eq!(draft.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteDraft {
    stops: Vec<Attraction>,
}

impl RouteDraft {
    /// Create an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stops in their current order.
    #[must_use]
    pub fn stops(&self) -> &[Attraction] {
        &self.stops
    }

    /// Number of stops.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Whether the draft has no stops.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Whether an attraction with this identifier is already selected.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.stops.iter().any(|a| a.id == id)
    }

    /// Append an attraction. Adding an identifier that is already present
    /// is a no-op; returns whether the draft changed.
    pub fn add(&mut self, attraction: Attraction) -> bool {
        if self.contains(&attraction.id) {
            return false;
        }
        self.stops.push(attraction);
        true
    }

    /// Remove the stop with this identifier, if present.
    pub fn remove(&mut self, id: &str) {
        self.stops.retain(|a| a.id != id);
    }

    /// Move the stop at `from` so it ends up at `to`.
    ///
    /// A single extract-and-reinsert, not a swap: the stops between the
    /// two positions shift by one. Equal or out-of-range indices are
    /// ignored.
    pub fn move_stop(&mut self, from: usize, to: usize) {
        if from == to || from >= self.stops.len() || to >= self.stops.len() {
            return;
        }
        let stop = self.stops.remove(from);
        self.stops.insert(to, stop);
    }

    /// Drop every stop.
    pub fn clear(&mut self) {
        self.stops.clear();
    }

    /// Turn the draft into a [`UserRoute`] created at `created_at_ms`
    /// (milliseconds since the Unix epoch; also the identifier source).
    ///
    /// A blank title defaults to `"Мой маршрут (N)"`. The city label is
    /// the city every stop shares, or [`MULTIPLE_CITIES`] when they
    /// disagree or the first stop has none. The draft itself is left
    /// untouched; callers clear it once the route is stored.
    ///
    /// # Errors
    /// Returns [`DraftError::Empty`] when there are no stops.
    pub fn finalize(
        &self,
        title: Option<&str>,
        created_at_ms: u64,
    ) -> Result<UserRoute, DraftError> {
        if self.stops.is_empty() {
            return Err(DraftError::Empty);
        }
        let title = match title.map(str::trim) {
            Some(t) if !t.is_empty() => t.to_owned(),
            _ => format!("Мой маршрут ({})", self.stops.len()),
        };
        Ok(UserRoute {
            id: format!("u_{created_at_ms}"),
            title,
            city: self.city_label(),
            stops: self.stops.clone(),
            created_at_ms,
        })
    }

    fn city_label(&self) -> String {
        match self.stops.first() {
            Some(first)
                if !first.city.is_empty() && self.stops.iter().all(|a| a.city == first.city) =>
            {
                first.city.clone()
            }
            _ => MULTIPLE_CITIES.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Category;
    use rstest::{fixture, rstest};

    fn attraction(id: &str, city: &str) -> Attraction {
        Attraction::new(id, id.to_uppercase(), city, Category::Park, 4.0)
    }

    #[fixture]
    fn abc_draft() -> RouteDraft {
        let mut draft = RouteDraft::new();
        for id in ["a", "b", "c"] {
            draft.add(attraction(id, "Ростов-на-Дону"));
        }
        draft
    }

    fn ids(draft: &RouteDraft) -> Vec<&str> {
        draft.stops().iter().map(|a| a.id.as_str()).collect()
    }

    #[rstest]
    fn duplicate_add_is_a_no_op(mut abc_draft: RouteDraft) {
        assert!(!abc_draft.add(attraction("a", "Азов")));
        assert_eq!(abc_draft.len(), 3);
    }

    #[rstest]
    fn move_reinserts_rather_than_swaps(mut abc_draft: RouteDraft) {
        abc_draft.move_stop(0, 2);
        assert_eq!(ids(&abc_draft), ["b", "c", "a"]);
    }

    #[rstest]
    #[case(1, 1)]
    #[case(5, 0)]
    #[case(0, 3)]
    fn move_ignores_equal_and_out_of_range_indices(
        mut abc_draft: RouteDraft,
        #[case] from: usize,
        #[case] to: usize,
    ) {
        abc_draft.move_stop(from, to);
        assert_eq!(ids(&abc_draft), ["a", "b", "c"]);
    }

    #[rstest]
    fn remove_then_clear(mut abc_draft: RouteDraft) {
        abc_draft.remove("b");
        assert_eq!(ids(&abc_draft), ["a", "c"]);
        abc_draft.clear();
        assert!(abc_draft.is_empty());
    }

    #[rstest]
    fn finalize_defaults_title_and_derives_id(abc_draft: RouteDraft) {
        let route = abc_draft.finalize(None, 1_700_000_000_000).unwrap();
        assert_eq!(route.id, "u_1700000000000");
        assert_eq!(route.title, "Мой маршрут (3)");
        assert_eq!(route.city, "Ростов-на-Дону");
        assert_eq!(route.stops.len(), 3);
    }

    #[rstest]
    fn finalize_keeps_trimmed_user_title(abc_draft: RouteDraft) {
        let route = abc_draft.finalize(Some("  Выходные  "), 1).unwrap();
        assert_eq!(route.title, "Выходные");
    }

    #[rstest]
    fn blank_title_falls_back_to_default(abc_draft: RouteDraft) {
        let route = abc_draft.finalize(Some("   "), 1).unwrap();
        assert_eq!(route.title, "Мой маршрут (3)");
    }

    #[test]
    fn mixed_cities_use_the_sentinel_label() {
        let mut draft = RouteDraft::new();
        draft.add(attraction("a", "Ростов-на-Дону"));
        draft.add(attraction("b", "Таганрог"));
        let route = draft.finalize(None, 1).unwrap();
        assert_eq!(route.city, MULTIPLE_CITIES);
    }

    #[test]
    fn missing_first_city_uses_the_sentinel_label() {
        let mut draft = RouteDraft::new();
        draft.add(attraction("a", ""));
        let route = draft.finalize(None, 1).unwrap();
        assert_eq!(route.city, MULTIPLE_CITIES);
    }

    #[test]
    fn finalize_rejects_an_empty_draft() {
        let err = RouteDraft::new().finalize(None, 1).unwrap_err();
        assert_eq!(err, DraftError::Empty);
    }
}

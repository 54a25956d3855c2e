//! List filtering and map projection for the attraction views.

use std::collections::HashSet;

use geo::Coord;

use putnik_core::{Attraction, Category};

/// Which slice of the catalogue the list shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttractionFilter {
    /// Everything.
    All,
    /// Only categories in the user's interest set; with no interests
    /// enabled this degrades to [`AttractionFilter::All`].
    Interests,
    /// Only favourited attractions.
    Favorites,
    /// One specific category.
    Category(Category),
}

/// Filter attractions by mode and a name-or-city substring query.
///
/// The query is case-insensitive; an empty query matches everything.
#[must_use]
pub fn filter_attractions<'a>(
    items: &'a [Attraction],
    filter: AttractionFilter,
    query: &str,
    interests: &HashSet<Category>,
    favorite_ids: &HashSet<String>,
) -> Vec<&'a Attraction> {
    let query = query.trim().to_lowercase();
    let matches_query = |a: &Attraction| {
        query.is_empty()
            || a.name.to_lowercase().contains(&query)
            || a.city.to_lowercase().contains(&query)
    };
    let matches_filter = |a: &Attraction| match filter {
        AttractionFilter::All => true,
        AttractionFilter::Interests => interests.is_empty() || interests.contains(&a.category),
        AttractionFilter::Favorites => favorite_ids.contains(&a.id),
        AttractionFilter::Category(category) => a.category == category,
    };
    items
        .iter()
        .filter(|a| matches_filter(a) && matches_query(a))
        .collect()
}

/// A map marker for an attraction with known coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct MapPin {
    /// Attraction id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Category, for the marker icon.
    pub category: Category,
    /// Position, `x = longitude`, `y = latitude`.
    pub location: Coord<f64>,
}

/// Project attractions onto map pins, skipping those without
/// coordinates.
#[must_use]
pub fn map_pins(items: &[Attraction]) -> Vec<MapPin> {
    items
        .iter()
        .filter_map(|a| {
            a.location.map(|location| MapPin {
                id: a.id.clone(),
                name: a.name.clone(),
                category: a.category,
                location,
            })
        })
        .collect()
}

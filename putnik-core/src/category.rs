//! Attraction categories and their display dispatch.
//!
//! The enum offers compile-time safety for category lookups. Display
//! labels and icon names live here as a single table so every consumer
//! renders the same mapping.
//!
//! # Examples
//! ```
//! use putnik_core::Category;
//!
//! assert_eq!(Category::Museum.as_str(), "museum");
//! assert_eq!(Category::normalize("Музей"), Category::Museum);
//! assert_eq!(Category::normalize("crypt"), Category::Park);
//! ```

/// Category of an attraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Category {
    /// Museums and galleries.
    Museum,
    /// Theatres and concert venues.
    Theatre,
    /// Restaurants and cafes.
    Restaurant,
    /// Hotels and guest houses.
    Hotel,
    /// Parks, embankments and green spaces.
    Park,
    /// Monuments and memorials.
    Monument,
    /// Churches and cathedrals.
    Church,
    /// Markets and bazaars.
    Market,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Self; 8] = [
        Self::Museum,
        Self::Theatre,
        Self::Restaurant,
        Self::Hotel,
        Self::Park,
        Self::Monument,
        Self::Church,
        Self::Market,
    ];

    /// Map a raw catalogue label onto a category.
    ///
    /// The lookup is case-insensitive and accepts both the English keys and
    /// the Russian labels the remote catalogue uses. Anything unrecognised
    /// falls back to [`Category::Park`]; the function never fails.
    ///
    /// # Examples
    /// ```
    /// use putnik_core::Category;
    ///
    /// assert_eq!(Category::normalize("museum"), Category::Museum);
    /// assert_eq!(Category::normalize("музей"), Category::Museum);
    /// assert_eq!(Category::normalize(""), Category::Park);
    /// ```
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "museum" | "музей" => Self::Museum,
            "theatre" | "театр" => Self::Theatre,
            "restaurant" | "ресторан" => Self::Restaurant,
            "hotel" | "отель" => Self::Hotel,
            "park" | "парк" => Self::Park,
            "monument" | "памятник" => Self::Monument,
            "church" | "церковь" => Self::Church,
            "market" | "рынок" => Self::Market,
            _ => Self::Park,
        }
    }

    /// Return the category as its lowercase English key.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Museum => "museum",
            Self::Theatre => "theatre",
            Self::Restaurant => "restaurant",
            Self::Hotel => "hotel",
            Self::Park => "park",
            Self::Monument => "monument",
            Self::Church => "church",
            Self::Market => "market",
        }
    }

    /// Russian display label.
    #[must_use]
    pub fn label_ru(self) -> &'static str {
        match self {
            Self::Museum => "Музей",
            Self::Theatre => "Театр",
            Self::Restaurant => "Ресторан",
            Self::Hotel => "Отель",
            Self::Park => "Парк",
            Self::Monument => "Памятник",
            Self::Church => "Церковь",
            Self::Market => "Рынок",
        }
    }

    /// Material icon name used when rendering the category.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Museum => "bank-outline",
            Self::Theatre => "drama-masks",
            Self::Restaurant => "silverware-fork-knife",
            Self::Hotel => "bed-queen-outline",
            Self::Park => "tree-outline",
            Self::Monument => "pillar",
            Self::Church => "church-outline",
            Self::Market => "storefront-outline",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    /// Strict parse of the English keys; unlike [`Category::normalize`] this
    /// rejects unknown input, which is what CLI argument parsing wants.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "museum" => Ok(Self::Museum),
            "theatre" => Ok(Self::Theatre),
            "restaurant" => Ok(Self::Restaurant),
            "hotel" => Ok(Self::Hotel),
            "park" => Ok(Self::Park),
            "monument" => Ok(Self::Monument),
            "church" => Ok(Self::Church),
            "market" => Ok(Self::Market),
            _ => Err(format!("unknown category '{s}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case("museum", Category::Museum)]
    #[case("музей", Category::Museum)]
    #[case("Музей", Category::Museum)]
    #[case("THEATRE", Category::Theatre)]
    #[case("рынок", Category::Market)]
    #[case("церковь", Category::Church)]
    fn normalize_accepts_both_languages(#[case] raw: &str, #[case] expected: Category) {
        assert_eq!(Category::normalize(raw), expected);
    }

    #[rstest]
    #[case("")]
    #[case("crypt")]
    #[case("достопримечательность")]
    fn normalize_defaults_to_park(#[case] raw: &str) {
        assert_eq!(Category::normalize(raw), Category::Park);
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(Category::Museum.to_string(), Category::Museum.as_str());
    }

    #[test]
    fn from_str_rejects_unknown() {
        let err = Category::from_str("музей").unwrap_err();
        assert!(err.contains("unknown category"));
    }

    #[test]
    fn dispatch_covers_every_category() {
        for category in Category::ALL {
            assert!(!category.label_ru().is_empty());
            assert!(!category.icon().is_empty());
        }
    }
}

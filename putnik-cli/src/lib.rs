//! Command-line frontend for the Putnik travel guide.
//!
//! Browses the curated route catalogue offline and the remote attraction
//! catalogue over the network. The API endpoint and token can come from
//! flags or the `PUTNIK_API_URL` / `PUTNIK_TOKEN` environment variables.

use std::collections::HashSet;

use clap::{Parser, Subcommand};

use putnik_api::{DEFAULT_BASE_URL, GuideClient, GuideClientConfig};
use putnik_app::{AttractionFilter, filter_attractions};
use putnik_core::{
    Attraction, Category, Route, aggregate, curated_routes, format_duration_ru, plural_ru,
};

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "putnik", about = "Гид по Ростовской области: маршруты и места")]
pub struct Cli {
    /// Base URL of the guide API.
    #[arg(long, env = "PUTNIK_API_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Bearer token for authenticated requests.
    #[arg(long, env = "PUTNIK_TOKEN")]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the route catalogue.
    Routes,
    /// Show one route's full itinerary.
    Route {
        /// Route identifier, e.g. "r1".
        id: String,
    },
    /// List attractions from the remote catalogue.
    Places {
        /// Only this category (museum, theatre, restaurant, hotel, park,
        /// monument, church, market).
        #[arg(long)]
        category: Option<Category>,
        /// Name or city substring to search for.
        #[arg(long, default_value = "")]
        query: String,
    },
}

/// Parse arguments and run the requested command.
///
/// # Errors
/// Propagates network and decoding failures from the guide API, and an
/// error for an unknown route id.
pub fn run() -> eyre::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Routes => {
            for route in aggregate(&[], &curated_routes()) {
                println!("{}", route_card(&route));
            }
            Ok(())
        }
        Command::Route { id } => {
            let routes = aggregate(&[], &curated_routes());
            let route = routes
                .iter()
                .find(|r| r.id == id)
                .ok_or_else(|| eyre::eyre!("маршрут '{id}' не найден"))?;
            println!("{}", itinerary(route));
            Ok(())
        }
        Command::Places { category, query } => {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            let client = GuideClient::with_config(GuideClientConfig::new(cli.api_url))?;
            let attractions =
                runtime.block_on(client.fetch_attractions(cli.token.as_deref()))?;
            let filter = category.map_or(AttractionFilter::All, AttractionFilter::Category);
            let no_interests = HashSet::new();
            let no_favorites = HashSet::new();
            for attraction in
                filter_attractions(&attractions, filter, &query, &no_interests, &no_favorites)
            {
                println!("{}", place_line(attraction));
            }
            Ok(())
        }
    }
}

/// One-line route card: title, city and summary chips.
fn route_card(route: &Route) -> String {
    let summary = route.summary();
    let mut chips = vec![
        format!(
            "{} {}",
            summary.stop_count,
            plural_ru(summary.stop_count as u64, "точка", "точки", "точек")
        ),
        format_duration_ru(summary.total_time_min),
    ];
    if let Some(distance) = summary.total_distance_km {
        chips.push(format!("{:.1} км", distance));
    }
    if let Some(budget) = route.budget_rub {
        chips.push(format!("{budget} ₽"));
    }
    format!(
        "{} — {} · {} · {}",
        route.id,
        route.title,
        route.city,
        chips.join(", ")
    )
}

/// Multi-line itinerary: stops interleaved with their legs.
fn itinerary(route: &Route) -> String {
    let summary = route.summary();
    let mut lines = vec![
        route.title.clone(),
        format!(
            "{} · {} · {} ₽",
            route.city,
            format_duration_ru(summary.total_time_min),
            summary.total_cost_rub
        ),
    ];
    for (index, stop) in route.stops.iter().enumerate() {
        lines.push(format!(
            "{}. {} ({}, {})",
            index + 1,
            stop.attraction.name,
            stop.attraction.category.label_ru(),
            format_duration_ru(stop.dwell_min)
        ));
        if let Some(leg) = route.legs.get(index) {
            let mut leg_line = format!(
                "   ↓ {} {}",
                leg.mode.icon(),
                format_duration_ru(leg.duration_min)
            );
            if let Some(distance) = leg.distance_km {
                leg_line.push_str(&format!(", {distance:.1} км"));
            }
            if let Some(note) = &leg.note {
                leg_line.push_str(&format!(" — {note}"));
            }
            lines.push(leg_line);
        }
    }
    lines.join("\n")
}

/// One-line attraction entry.
fn place_line(attraction: &Attraction) -> String {
    let price = match attraction.price_rub {
        Some(0) => "бесплатно".to_owned(),
        Some(price) => format!("{price} ₽"),
        None => "—".to_owned(),
    };
    format!(
        "{} ({}) · {} · ★{:.1} · {}",
        attraction.name,
        attraction.category.label_ru(),
        if attraction.city.is_empty() {
            "—"
        } else {
            attraction.city.as_str()
        },
        attraction.rating,
        price
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic_rostov() -> Route {
        curated_routes().into_iter().next().unwrap()
    }

    #[test]
    fn route_card_shows_summary_chips() {
        let card = route_card(&classic_rostov());
        assert!(card.contains("r1"));
        assert!(card.contains("3 точки"));
        assert!(card.contains("3ч"));
        assert!(card.contains("6.3 км"));
        assert!(card.contains("600 ₽"));
    }

    #[test]
    fn itinerary_interleaves_stops_and_legs() {
        let text = itinerary(&classic_rostov());
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[2].starts_with("1. Набережная"));
        assert!(lines[3].contains("walk"));
        assert!(lines[5].contains("Автобус №7"));
    }

    #[test]
    fn place_line_distinguishes_free_from_unknown() {
        let mut attraction = Attraction::new("a", "Парк", "Азов", Category::Park, 4.2);
        assert!(place_line(&attraction).contains("—"));
        attraction.price_rub = Some(0);
        assert!(place_line(&attraction).contains("бесплатно"));
    }
}

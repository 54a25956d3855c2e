//! Behaviour of the aggregated route list.

use rstest::rstest;

use putnik_core::{
    Attraction, Category, DEFAULT_DWELL_MIN, Route, UserRoute, aggregate, curated_routes,
    expand_user_route,
};

fn user_route(id: &str, stop_ids: &[&str]) -> UserRoute {
    UserRoute {
        id: id.to_owned(),
        title: format!("Мой маршрут ({})", stop_ids.len()),
        city: "Ростов-на-Дону".to_owned(),
        stops: stop_ids
            .iter()
            .map(|s| Attraction::new(*s, s.to_uppercase(), "Ростов-на-Дону", Category::Park, 4.0))
            .collect(),
        created_at_ms: 0,
    }
}

#[test]
fn user_routes_come_before_the_curated_catalogue() {
    let user = [user_route("u_2", &["a"]), user_route("u_1", &["b"])];
    let routes = aggregate(&user, &curated_routes());
    let ids: Vec<&str> = routes.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["u_2", "u_1", "r1", "r2", "r3"]);
}

#[test]
fn id_collisions_are_not_deduplicated() {
    let user = [user_route("r1", &["a"])];
    let routes = aggregate(&user, &curated_routes());
    let matching = routes.iter().filter(|r| r.id == "r1").count();
    assert_eq!(matching, 2);
}

#[rstest]
#[case(&[] as &[&str])]
#[case(&["a"])]
#[case(&["a", "b", "c"])]
fn expansion_applies_default_dwell_and_synthesized_legs(#[case] stop_ids: &[&str]) {
    let expanded = expand_user_route(&user_route("u_1", stop_ids));
    assert_eq!(expanded.stops.len(), stop_ids.len());
    assert_eq!(expanded.legs.len(), stop_ids.len().saturating_sub(1));
    assert!(expanded.stops.iter().all(|s| s.dwell_min == DEFAULT_DWELL_MIN));
    assert!(expanded.budget_rub.is_none());
}

#[test]
fn aggregation_leaves_curated_routes_untouched() {
    let curated = curated_routes();
    let routes = aggregate(&[], &curated);
    let curated_slice: Vec<Route> = routes;
    assert_eq!(curated_slice, curated);
}

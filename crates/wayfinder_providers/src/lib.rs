pub mod apple_maps;
pub mod error;
pub mod google_routes;
pub mod straight_line;
pub mod travel_query_client;
pub mod travel_query_provider;

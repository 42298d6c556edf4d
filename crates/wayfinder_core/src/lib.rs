pub mod geopoint;
pub mod transport_mode;
pub mod travel_result;

mod isochrone_client;
mod isochrone_error;
mod isochrone_polygon;
mod isochrone_request;
pub mod isochrone_response;
mod isochrone_source;
mod time_budget;
mod travel_mode;

pub use isochrone_client::IsochroneClient;
pub use isochrone_error::IsochroneError;
pub use isochrone_polygon::IsochronePolygon;
pub use isochrone_request::{IsochroneRequest, RouteOptions};
pub use isochrone_source::IsochroneSource;
pub use time_budget::TimeBudget;
pub use travel_mode::TravelMode;

#[cfg(test)]
pub mod stub_source;

pub mod coordinate;
pub mod isochrone;
pub mod output;
pub mod render_state;
pub mod sampling;
pub mod selection;

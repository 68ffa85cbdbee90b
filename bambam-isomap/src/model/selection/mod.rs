mod location_selection_controller;
mod map_view;
mod ui_event;

pub use location_selection_controller::LocationSelectionController;
pub use map_view::{LoggingMapView, MapView};
pub use ui_event::UiEvent;

use crate::model::coordinate::Position;

/// the map-rendering collaborator, as seen from the controller.
pub trait MapView {
    /// moves the view so that `position` is centered
    fn recenter(&self, position: &Position);
}

/// a map that only reports where it was asked to look.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingMapView;

impl MapView for LoggingMapView {
    fn recenter(&self, position: &Position) {
        log::info!("recenter map on {position}");
    }
}

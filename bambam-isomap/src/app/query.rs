use crate::{
    config::IsomapConfig,
    model::{
        isochrone::{TimeBudget, TravelMode},
        output::OverlayFormat,
        render_state::{RefreshOutcome, RenderState, RenderStateModel},
        selection::{LocationSelectionController, LoggingMapView},
    },
};

use super::{runtime, IsomapAppError};

/// runs one map click at (lat, lon) and writes the published overlay to stdout.
///
/// # Arguments
/// * conf        - run configuration
/// * lat, lon    - clicked location
/// * mode        - travel mode, or the configured default
/// * time_budget - time budget, or the configured default
/// * format      - output encoding
///
/// # Result
/// If successful, returns nothing, otherwise an error
pub fn run_query(
    conf: &IsomapConfig,
    lat: f64,
    lon: f64,
    mode: Option<TravelMode>,
    time_budget: Option<TimeBudget>,
    format: &OverlayFormat,
) -> Result<(), IsomapAppError> {
    let client = conf.build_client()?;
    let initial = RenderState::new(
        conf.default_center,
        mode.unwrap_or(conf.default_mode),
        time_budget.unwrap_or(conf.default_time_budget),
    );
    let model = RenderStateModel::new(client, initial, conf.refresh_settings());
    let controller = LocationSelectionController::new(model, LoggingMapView);

    let rt = runtime()?;
    let outcome = rt.block_on(controller.on_click(lat, lon))?;
    match outcome {
        RefreshOutcome::Published { sequence } => {
            let overlay = controller
                .model()
                .state()
                .overlay
                .ok_or(IsomapAppError::RefreshDiscarded(sequence))?;
            println!("{}", format.serialize_overlay(&overlay)?);
            Ok(())
        }
        RefreshOutcome::Discarded { sequence } => Err(IsomapAppError::RefreshDiscarded(sequence)),
        RefreshOutcome::Failed { error, .. } => Err(IsomapAppError::RefreshFailed(error)),
    }
}

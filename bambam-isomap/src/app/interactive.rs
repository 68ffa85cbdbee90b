use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::mpsc,
};

use crate::{
    config::IsomapConfig,
    model::{
        output::OverlayFormat,
        render_state::{RenderState, RenderStateModel},
        selection::{LocationSelectionController, LoggingMapView, UiEvent},
    },
};

use super::{runtime, IsomapAppError};

const EVENT_BUFFER: usize = 16;

/// mounts the map at the configured center, then turns stdin commands into
/// interactions until `quit` or end of input. whenever the published overlay
/// changes, the latest one is written to stdout; overlays replaced before the
/// printer observes them are skipped.
pub fn run_interactive(
    conf: &IsomapConfig,
    format: Option<&OverlayFormat>,
) -> Result<(), IsomapAppError> {
    let client = conf.build_client()?;
    let model = RenderStateModel::new(client, conf.initial_state(), conf.refresh_settings());
    let controller = LocationSelectionController::new(model, LoggingMapView);
    let rt = runtime()?;

    rt.block_on(async {
        let (tx, rx) = mpsc::channel(EVENT_BUFFER);
        let mut state_rx = controller.model().subscribe();
        let mut last_printed: Option<u64> = None;

        let session = async { tokio::join!(controller.run(rx), read_commands(tx)) };
        tokio::pin!(session);
        loop {
            tokio::select! {
                (outcomes, read) = &mut session => {
                    read?;
                    log::info!("session finished after {} refreshes", outcomes.len());
                    break;
                }
                changed = state_rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let state = state_rx.borrow_and_update().clone();
                    print_state(&state, format, &mut last_printed)?;
                }
            }
        }
        let state = controller.model().state();
        print_state(&state, format, &mut last_printed)
    })
}

async fn read_commands(tx: mpsc::Sender<UiEvent>) -> Result<(), IsomapAppError> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }
        match line.parse::<UiEvent>() {
            Ok(event) => {
                if tx.send(event).await.is_err() {
                    break;
                }
            }
            Err(e) => eprintln!("{e}"),
        }
    }
    Ok(())
}

/// prints the overlay if it has not been printed yet
fn print_state(
    state: &RenderState,
    format: Option<&OverlayFormat>,
    last_printed: &mut Option<u64>,
) -> Result<(), IsomapAppError> {
    let overlay = match &state.overlay {
        Some(o) if *last_printed != Some(o.sequence) => o,
        _ => return Ok(()),
    };
    *last_printed = Some(overlay.sequence);
    match format {
        Some(f) => println!("{}", f.serialize_overlay(overlay)?),
        None => println!(
            "#{} {} {} from {}: polygon with {} vertices, {} listings{}",
            overlay.sequence,
            state.mode,
            state.time_budget,
            state.position,
            overlay.polygon.len(),
            overlay.listings.len(),
            if state.busy() { " (loading)" } else { "" }
        ),
    }
    Ok(())
}

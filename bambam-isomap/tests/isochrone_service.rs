//! end-to-end tests of the isochrone client and render state model against a
//! local stub of the isochrone service.

use bambam_isomap::model::{
    coordinate::Position,
    isochrone::{IsochroneClient, IsochroneError, IsochroneSource, TimeBudget, TravelMode},
    render_state::{RefreshError, RefreshOutcome, RefreshSettings, RenderState, RenderStateModel},
};
use std::sync::{Mutex, Once};

use geo::{Contains, Point};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
    task::JoinHandle,
};

/// keeps every error-level record so tests can check what the refresh reported
struct ErrorLog {
    records: Mutex<Vec<String>>,
}

impl log::Log for ErrorLog {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::Level::Error
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            self.records.lock().unwrap().push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

static ERROR_LOG: ErrorLog = ErrorLog {
    records: Mutex::new(Vec::new()),
};
static INIT_LOG: Once = Once::new();

fn error_log() -> &'static ErrorLog {
    INIT_LOG.call_once(|| {
        log::set_logger(&ERROR_LOG).unwrap();
        log::set_max_level(log::LevelFilter::Error);
    });
    &ERROR_LOG
}

/// what the stub service saw of one request
#[derive(Debug)]
struct RecordedRequest {
    request_line: String,
    headers: Vec<String>,
    body: String,
}

/// serves the given (status, body) responses to consecutive connections, then stops.
/// returns the base URL and a handle resolving to the recorded requests.
async fn stub_service(responses: Vec<(u16, String)>) -> (String, JoinHandle<Vec<RecordedRequest>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let mut recorded = vec![];
        for (status, body) in responses {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            recorded.push(request);
            let reason = match status {
                200 => "OK",
                400 => "Bad Request",
                _ => "Error",
            };
            let response = format!(
                "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        }
        recorded
    });
    (format!("http://{addr}"), handle)
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> RecordedRequest {
    let mut buf = vec![];
    let mut chunk = [0u8; 4096];
    let header_end = loop {
        let n = socket.read(&mut chunk).await.unwrap();
        assert!(n > 0, "connection closed before request headers ended");
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };
    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.split("\r\n").filter(|l| !l.is_empty());
    let request_line = lines.next().unwrap().to_string();
    let headers = lines.map(|l| l.to_lowercase()).collect::<Vec<_>>();
    let content_length = headers
        .iter()
        .find_map(|h| h.strip_prefix("content-length:"))
        .map(|v| v.trim().parse::<usize>().unwrap())
        .unwrap_or(0);
    while buf.len() < header_end + content_length {
        let n = socket.read(&mut chunk).await.unwrap();
        assert!(n > 0, "connection closed before request body ended");
        buf.extend_from_slice(&chunk[..n]);
    }
    let body = String::from_utf8_lossy(&buf[header_end..header_end + content_length]).to_string();
    RecordedRequest {
        request_line,
        headers,
        body,
    }
}

fn square_response() -> String {
    serde_json::json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": { "group_index": 0, "value": 900.0, "center": [-8.605, 41.147] },
            "geometry": {
                "type": "Polygon",
                "coordinates": [[
                    [-8.61, 41.14],
                    [-8.60, 41.14],
                    [-8.60, 41.15],
                    [-8.61, 41.15],
                    [-8.61, 41.14]
                ]]
            }
        }]
    })
    .to_string()
}

fn porto() -> Position {
    Position::new(41.147, -8.605).unwrap()
}

fn model(endpoint: &str) -> RenderStateModel<IsochroneClient> {
    let client = IsochroneClient::new(endpoint, "my_request", None).unwrap();
    let initial = RenderState::new(porto(), TravelMode::Driving, TimeBudget::Fifteen);
    RenderStateModel::new(client, initial, RefreshSettings::default())
}

#[tokio::test]
async fn test_square_isochrone_is_published_with_samples() {
    let (endpoint, service) = stub_service(vec![(200, square_response())]).await;
    let model = model(&endpoint);

    let outcome = model
        .refresh(porto(), TravelMode::Driving, TimeBudget::Fifteen)
        .await;
    assert!(outcome.is_published(), "unexpected outcome {outcome:?}");

    let state = model.state();
    assert!(!state.busy());
    let overlay = state.overlay.expect("overlay should be published");
    let lat_lon = overlay
        .polygon
        .ring()
        .iter()
        .map(|p| (p.lat(), p.lon()))
        .collect::<Vec<_>>();
    assert_eq!(
        lat_lon,
        vec![
            (41.14, -8.61),
            (41.14, -8.60),
            (41.15, -8.60),
            (41.15, -8.61),
            (41.14, -8.61),
        ]
    );

    assert_eq!(overlay.listings.len(), 15);
    let geometry = overlay.polygon.to_geo();
    for listing in overlay.listings.iter() {
        let p = Point::from(&listing.position);
        assert!(geometry.contains(&p));
    }

    let requests = service.await.unwrap();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(
        request.request_line,
        "POST /v2/isochrones/driving-car HTTP/1.1"
    );
    assert!(request
        .headers
        .iter()
        .any(|h| h == "content-type: application/json"));
    let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(body["locations"], serde_json::json!([[-8.605, 41.147]]));
    assert_eq!(body["range"], serde_json::json!([900]));
    assert_eq!(body["interval"], 900);
    assert_eq!(body["location_type"], "start");
    assert_eq!(body["options"]["avoid_borders"], "controlled");
}

#[tokio::test]
async fn test_rejection_clears_busy_and_keeps_overlay() {
    let errors = error_log();
    let body = String::from(r#"{"message":"invalid profile"}"#);
    let (endpoint, service) = stub_service(vec![(400, body)]).await;
    let model = model(&endpoint);

    let outcome = model
        .refresh(porto(), TravelMode::Cycling, TimeBudget::Fifteen)
        .await;
    match outcome {
        RefreshOutcome::Failed {
            error: RefreshError::Fetch(e),
            ..
        } => assert_eq!(
            e,
            IsochroneError::ServiceRejected(String::from("invalid profile"))
        ),
        other => panic!("expected a rejected request, found {other:?}"),
    }
    let state = model.state();
    assert!(!state.busy());
    assert!(state.overlay.is_none());
    let logged = errors.records.lock().unwrap().clone();
    assert!(
        logged
            .iter()
            .any(|r| r.contains("isochrone service rejected request: invalid profile")),
        "rejection was not logged, found {logged:?}"
    );

    let requests = service.await.unwrap();
    assert_eq!(
        requests[0].request_line,
        "POST /v2/isochrones/cycling-regular HTTP/1.1"
    );
}

#[tokio::test]
async fn test_rejection_after_success_keeps_previous_overlay() {
    let rejection = String::from(r#"{"error":{"code":3004,"message":"range too large"}}"#);
    let (endpoint, _service) =
        stub_service(vec![(200, square_response()), (400, rejection)]).await;
    let model = model(&endpoint);

    model
        .refresh(porto(), TravelMode::Driving, TimeBudget::Fifteen)
        .await;
    let before = model.state().overlay.expect("first refresh publishes");

    let outcome = model
        .refresh(porto(), TravelMode::Driving, TimeBudget::Sixty)
        .await;
    assert!(matches!(outcome, RefreshOutcome::Failed { sequence: 2, .. }));
    let state = model.state();
    assert!(!state.busy());
    assert_eq!(state.overlay, Some(before));
}

#[tokio::test]
async fn test_client_reports_malformed_response() {
    let (endpoint, _service) = stub_service(vec![(
        200,
        String::from(r#"{"type":"FeatureCollection","features":[]}"#),
    )])
    .await;
    let client = IsochroneClient::new(&endpoint, "my_request", None).unwrap();
    let result = client
        .fetch_isochrone(porto(), TravelMode::Driving, TimeBudget::Five)
        .await;
    assert!(matches!(result, Err(IsochroneError::MalformedResponse(_))));
}

#[tokio::test]
async fn test_client_keeps_endpoint_path_prefix() {
    let (endpoint, service) = stub_service(vec![(200, square_response())]).await;
    let client = IsochroneClient::new(&format!("{endpoint}/ors/"), "my_request", None).unwrap();
    let polygon = client
        .fetch_isochrone(porto(), TravelMode::Walking, TimeBudget::Thirty)
        .await
        .expect("square response should parse");
    assert_eq!(polygon.len(), 5);

    let requests = service.await.unwrap();
    assert_eq!(
        requests[0].request_line,
        "POST /ors/v2/isochrones/foot-walking HTTP/1.1"
    );
    let body: serde_json::Value = serde_json::from_str(&requests[0].body).unwrap();
    assert_eq!(body["range"], serde_json::json!([1800]));
}

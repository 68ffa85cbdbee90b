use std::time::Duration;

use reqwest::{header::CONTENT_TYPE, Client};

use crate::model::coordinate::Position;

use super::{
    isochrone_response, IsochroneError, IsochronePolygon, IsochroneRequest, IsochroneSource,
    TimeBudget, TravelMode,
};

/// HTTP client for an openrouteservice-style isochrone API. holds no state about
/// past requests; every call builds a fresh [`IsochroneRequest`].
#[derive(Debug, Clone)]
pub struct IsochroneClient {
    client: Client,
    endpoint: String,
    request_id: String,
}

impl IsochroneClient {
    /// builds a client for the service rooted at `endpoint`. with no timeout, a
    /// request that never resolves stays in flight forever.
    pub fn new(
        endpoint: &str,
        request_id: &str,
        timeout: Option<Duration>,
    ) -> Result<IsochroneClient, IsochroneError> {
        let mut builder = Client::builder();
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let client = builder.build().map_err(|e| {
            IsochroneError::InvalidRequest(format!("failure building HTTP client: {e}"))
        })?;
        Ok(IsochroneClient {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            request_id: request_id.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn isochrone_url(&self, mode: TravelMode) -> String {
        format!("{}/v2/isochrones/{}", self.endpoint, mode.profile())
    }
}

impl IsochroneSource for IsochroneClient {
    async fn fetch_isochrone(
        &self,
        position: Position,
        mode: TravelMode,
        time_budget: TimeBudget,
    ) -> Result<IsochronePolygon, IsochroneError> {
        let request = IsochroneRequest::new(&self.request_id, &position, time_budget);
        let body = serde_json::to_string(&request).map_err(|e| {
            IsochroneError::InvalidRequest(format!("failure encoding request body: {e}"))
        })?;
        let url = self.isochrone_url(mode);
        log::debug!("POST {url} for origin {position}, {time_budget}");

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_builder() {
                    IsochroneError::InvalidRequest(format!("cannot POST to '{url}': {e}"))
                } else {
                    IsochroneError::NetworkFailure(format!("POST {url} failed: {e}"))
                }
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            IsochroneError::NetworkFailure(format!("failure reading response from {url}: {e}"))
        })?;

        if !status.is_success() {
            let message = isochrone_response::rejection_message(status.as_u16(), &text);
            return Err(IsochroneError::ServiceRejected(message));
        }
        isochrone_response::parse_isochrone_response(&text)
    }
}

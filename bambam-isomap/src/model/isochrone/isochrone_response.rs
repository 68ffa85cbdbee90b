use serde::Deserialize;
use serde_json::Value;

use crate::model::coordinate::coordinate_ops;

use super::{IsochroneError, IsochronePolygon};

#[derive(Deserialize)]
struct IsochroneResponse {
    #[serde(default)]
    features: Vec<IsochroneFeature>,
}

#[derive(Deserialize)]
struct IsochroneFeature {
    geometry: Option<geojson::Geometry>,
}

/// reads the outer ring of the first feature of a successful isochrone response,
/// `features[0].geometry.coordinates[0]`, as a polygon in user order.
pub fn parse_isochrone_response(body: &str) -> Result<IsochronePolygon, IsochroneError> {
    let response: IsochroneResponse = serde_json::from_str(body).map_err(|e| {
        IsochroneError::MalformedResponse(format!("response is not an isochrone collection: {e}"))
    })?;
    let feature = response.features.first().ok_or_else(|| {
        IsochroneError::MalformedResponse(String::from("response has no features"))
    })?;
    let geometry = feature.geometry.as_ref().ok_or_else(|| {
        IsochroneError::MalformedResponse(String::from("first feature has no geometry"))
    })?;
    let rings = match &geometry.value {
        geojson::Value::Polygon(rings) => rings,
        other => {
            return Err(IsochroneError::MalformedResponse(format!(
                "expected Polygon geometry, found {}",
                geometry_type(other)
            )))
        }
    };
    let outer = rings.first().ok_or_else(|| {
        IsochroneError::MalformedResponse(String::from("polygon has no outer ring"))
    })?;
    let polygon = coordinate_ops::to_user_order(outer)?;
    Ok(polygon)
}

fn geometry_type(value: &geojson::Value) -> &'static str {
    match value {
        geojson::Value::Point(_) => "Point",
        geojson::Value::MultiPoint(_) => "MultiPoint",
        geojson::Value::LineString(_) => "LineString",
        geojson::Value::MultiLineString(_) => "MultiLineString",
        geojson::Value::Polygon(_) => "Polygon",
        geojson::Value::MultiPolygon(_) => "MultiPolygon",
        geojson::Value::GeometryCollection(_) => "GeometryCollection",
    }
}

/// finds the rejection reason in a failed response body. the service reports it as
/// a top-level `message`, or nested under `error`. falls back to the HTTP status.
pub fn rejection_message(status: u16, body: &str) -> String {
    let value = serde_json::from_str::<Value>(body).unwrap_or(Value::Null);
    let message = value
        .get("message")
        .and_then(Value::as_str)
        .or_else(|| {
            value
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(Value::as_str)
        })
        .or_else(|| value.get("error").and_then(Value::as_str));
    match message {
        Some(m) => m.to_string(),
        None => format!("HTTP {status}"),
    }
}

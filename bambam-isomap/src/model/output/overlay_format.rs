use geo::{Geometry, GeometryCollection, Point};
use geojson::{Feature, FeatureCollection, GeoJson, JsonObject};
use serde_json::json;
use wkt::ToWkt;

use crate::model::{coordinate::coordinate_ops, render_state::IsochroneOverlay};

use super::OutputError;

/// text encodings for a published overlay
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OverlayFormat {
    #[default]
    #[value(name = "geojson")]
    GeoJson,
    Wkt,
}

impl OverlayFormat {
    pub fn serialize_overlay(&self, overlay: &IsochroneOverlay) -> Result<String, OutputError> {
        match self {
            OverlayFormat::GeoJson => {
                let collection = overlay_feature_collection(overlay)?;
                Ok(GeoJson::from(collection).to_string())
            }
            OverlayFormat::Wkt => {
                let mut geometries = vec![Geometry::Polygon(overlay.polygon.to_geo())];
                geometries.extend(
                    overlay
                        .listings
                        .iter()
                        .map(|l| Geometry::Point(Point::from(&l.position))),
                );
                let collection = Geometry::GeometryCollection(GeometryCollection(geometries));
                Ok(collection.wkt_string())
            }
        }
    }
}

/// GeoJSON features in service (longitude, latitude) order: the isochrone polygon
/// followed by one point per sampled listing.
fn overlay_feature_collection(overlay: &IsochroneOverlay) -> Result<FeatureCollection, OutputError> {
    let ring = coordinate_ops::to_service_ring(&overlay.polygon);
    let polygon_properties = json!({
        "kind": "isochrone",
        "sequence": overlay.sequence,
    });
    let mut features = vec![feature(
        geojson::Value::Polygon(vec![ring]),
        polygon_properties,
    )?];
    for listing in overlay.listings.iter() {
        let coordinates = coordinate_ops::to_service_order(&listing.position).to_vec();
        let properties = json!({
            "kind": "listing",
            "index": listing.index,
            "description": listing.description,
            "image": listing.image,
        });
        features.push(feature(geojson::Value::Point(coordinates), properties)?);
    }
    Ok(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}

fn feature(value: geojson::Value, properties: serde_json::Value) -> Result<Feature, OutputError> {
    let properties: JsonObject = match properties {
        serde_json::Value::Object(map) => map,
        other => {
            return Err(OutputError::SerializeFailed(format!(
                "feature properties must be an object, found {other}"
            )))
        }
    };
    Ok(Feature {
        bbox: None,
        geometry: Some(geojson::Geometry::new(value)),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        coordinate::Position,
        isochrone::stub_source::square,
        sampling::SampleCatalog,
    };

    fn overlay() -> IsochroneOverlay {
        let catalog = SampleCatalog::default();
        IsochroneOverlay {
            sequence: 4,
            polygon: square(41.14, -8.61, 0.01),
            listings: catalog.pair(vec![
                Position::new(41.145, -8.605).unwrap(),
                Position::new(41.146, -8.601).unwrap(),
            ]),
        }
    }

    #[test]
    fn test_geojson_features() {
        let text = OverlayFormat::GeoJson.serialize_overlay(&overlay()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["type"], "FeatureCollection");
        let features = value["features"].as_array().unwrap();
        assert_eq!(features.len(), 3);
        assert_eq!(features[0]["geometry"]["type"], "Polygon");
        assert_eq!(
            features[0]["geometry"]["coordinates"][0][1],
            json!([-8.6, 41.14])
        );
        assert_eq!(features[0]["properties"]["sequence"], 4);
        assert_eq!(features[1]["geometry"]["coordinates"], json!([-8.605, 41.145]));
        assert_eq!(
            features[1]["properties"]["description"],
            "Mansão de luxo com piscina"
        );
        assert_eq!(features[2]["properties"]["index"], 1);
    }

    #[test]
    fn test_wkt_collection() {
        let text = OverlayFormat::Wkt.serialize_overlay(&overlay()).unwrap();
        assert!(text.starts_with("GEOMETRYCOLLECTION"));
        assert!(text.contains("POLYGON"));
        assert_eq!(text.matches("POINT").count(), 2);
    }
}

use geo::{Area, BoundingRect, Contains, Point};
use rand::Rng;

use crate::model::{coordinate::Position, isochrone::IsochronePolygon};

use super::SampleError;

pub const DEFAULT_MAX_ATTEMPTS: usize = 100_000;

/// rejection sampler for points inside a simple polygon. draws uniformly from the
/// polygon's bounding box and keeps a draw only if it lies strictly inside the
/// polygon, so a point on the boundary is rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RandomPointSampler {
    pub max_attempts: usize,
}

impl Default for RandomPointSampler {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl RandomPointSampler {
    pub fn new(max_attempts: usize) -> RandomPointSampler {
        RandomPointSampler { max_attempts }
    }

    /// samples `count` interior points of `polygon`, in draw order.
    ///
    /// # Arguments
    ///
    /// * `polygon` - the sampled area. must have at least three distinct vertices
    ///               and a non-zero area.
    /// * `count`   - number of points to return
    /// * `rng`     - source of randomness
    ///
    /// # Returns
    ///
    /// exactly `count` points, or an error if the polygon is degenerate or the
    /// attempt limit runs out first
    pub fn sample_interior<R: Rng>(
        &self,
        polygon: &IsochronePolygon,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<Position>, SampleError> {
        if count == 0 {
            return Ok(vec![]);
        }
        if polygon.len() < 4 {
            return Err(SampleError::DegeneratePolygon(format!(
                "ring has {} vertices, need at least 4",
                polygon.len()
            )));
        }
        let geometry = polygon.to_geo();
        if geometry.unsigned_area() <= 0.0 {
            return Err(SampleError::DegeneratePolygon(String::from(
                "ring has zero area",
            )));
        }
        let bbox = geometry.bounding_rect().ok_or_else(|| {
            SampleError::DegeneratePolygon(String::from("ring has no bounding box"))
        })?;
        let (min, max) = (bbox.min(), bbox.max());

        let mut result = Vec::with_capacity(count);
        let mut attempts = 0;
        while result.len() < count {
            if attempts >= self.max_attempts {
                return Err(SampleError::AttemptsExhausted {
                    accepted: result.len(),
                    requested: count,
                    attempts,
                });
            }
            attempts += 1;
            let x = rng.random_range(min.x..=max.x);
            let y = rng.random_range(min.y..=max.y);
            let candidate = Point::new(x, y);
            if geometry.contains(&candidate) {
                // bbox of a valid ring is within geographic range
                if let Ok(p) = Position::new(y, x) {
                    result.push(p);
                }
            }
        }
        log::debug!(
            "sampled {} interior points in {} draws",
            result.len(),
            attempts
        );
        Ok(result)
    }
}

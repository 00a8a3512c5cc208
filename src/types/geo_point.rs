//! Geographic points and the polygon centroid used as the query location.

use serde::{Deserialize, Serialize};

/// A geographic coordinate in decimal degrees.
///
/// # Examples
///
/// ```
/// use airquality::GeoPoint;
///
/// let delhi = GeoPoint::new(28.6139, 77.2090);
/// assert_eq!(delhi.latitude, 28.6139);
/// assert_eq!(delhi.longitude, 77.2090);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// `(latitude, longitude)`
impl From<(f64, f64)> for GeoPoint {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

/// Arithmetic mean of the given points, or `None` when there are none.
pub fn centroid(points: &[GeoPoint]) -> Option<GeoPoint> {
    if points.is_empty() {
        return None;
    }
    let count = points.len() as f64;
    let (lat_sum, lon_sum) = points.iter().fold((0.0, 0.0), |(lat, lon), p| {
        (lat + p.latitude, lon + p.longitude)
    });
    Some(GeoPoint::new(lat_sum / count, lon_sum / count))
}

/// A drawn or uploaded area, kept as its ordered list of vertices.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polygon {
    vertices: Vec<GeoPoint>,
}

impl Polygon {
    pub fn new(vertices: Vec<GeoPoint>) -> Self {
        Self { vertices }
    }

    /// Builds a polygon from a GeoJSON-style ring, where each position is `[longitude, latitude]`.
    ///
    /// ```
    /// use airquality::{GeoPoint, Polygon};
    ///
    /// let polygon = Polygon::from_lon_lat_ring(&[[77.0, 28.0], [78.0, 29.0]]);
    /// assert_eq!(polygon.vertices()[0], GeoPoint::new(28.0, 77.0));
    /// ```
    pub fn from_lon_lat_ring(ring: &[[f64; 2]]) -> Self {
        Self::new(
            ring.iter()
                .map(|[lon, lat]| GeoPoint::new(*lat, *lon))
                .collect(),
        )
    }

    pub fn vertices(&self) -> &[GeoPoint] {
        &self.vertices
    }

    /// Mean of all vertices. A closed ring's repeated first vertex is counted like any other.
    pub fn centroid(&self) -> Option<GeoPoint> {
        centroid(&self.vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centroid_of_square() {
        let square = Polygon::new(vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 2.0),
            GeoPoint::new(2.0, 2.0),
            GeoPoint::new(2.0, 0.0),
        ]);
        assert_eq!(square.centroid(), Some(GeoPoint::new(1.0, 1.0)));
    }

    #[test]
    fn test_centroid_of_single_vertex_is_that_vertex() {
        let point = GeoPoint::new(51.5, -0.12);
        assert_eq!(centroid(&[point]), Some(point));
    }

    #[test]
    fn test_centroid_is_mean_of_irregular_vertices() {
        let points = [
            GeoPoint::new(10.0, 20.0),
            GeoPoint::new(13.0, 26.0),
            GeoPoint::new(11.0, 21.5),
        ];
        let c = centroid(&points).unwrap();
        assert!((c.latitude - 34.0 / 3.0).abs() < 1e-12);
        assert!((c.longitude - 67.5 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_centroid_of_empty_polygon_is_none() {
        assert_eq!(Polygon::default().centroid(), None);
    }

    #[test]
    fn test_ring_swaps_coordinate_order() {
        let polygon = Polygon::from_lon_lat_ring(&[[4.0, 52.0], [6.0, 54.0]]);
        assert_eq!(polygon.centroid(), Some(GeoPoint::new(53.0, 5.0)));
    }
}

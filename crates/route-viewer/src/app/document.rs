//! Route documents as written by the route source
//!
//! A document is either a computed route or a failure message:
//!
//! ```json
//! {
//!   "path": [{ "latitude": 51.5074, "longitude": -0.1278 }, ...],
//!   "instructions": [{ "sign": -2, "distance": 120.0, "text": "Turn left",
//!                      "street_name": "Strand", "interval": [1, 2] }, ...],
//!   "distance": 1200.0,
//!   "time": 300.0,
//!   "bbox": [-0.1278, 51.5074, -0.1260, 51.5090]
//! }
//! ```

use crate::Result;
use route_model_lib::{
    BoundingBox, Coordinate, InstructionAssembler, RawTurnEvent, RouteUpdate,
};
use serde::{Deserialize, Serialize};
use std::io::BufReader;
use std::path::Path;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteDocument {
    #[serde(default)]
    pub path: Vec<Coordinate>,
    #[serde(default)]
    pub instructions: Vec<RawTurnEvent>,
    /// Total distance in meters
    #[serde(default)]
    pub distance: f64,
    /// Total time in seconds
    #[serde(default)]
    pub time: f64,
    /// `[min_lon, min_lat, max_lon, max_lat]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<[f64; 4]>,
    /// Set instead of a route when the route source failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RouteDocument {
    /// Read and parse a document from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading route document {}", path.display());
        let file = std::fs::File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    pub fn parse(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reject coordinates outside the WGS84 ranges
    pub fn validate(&self) -> Result<()> {
        for coordinate in &self.path {
            Coordinate::try_new(coordinate.latitude, coordinate.longitude)?;
        }
        Ok(())
    }

    /// Resolve the raw events into a model update
    pub fn into_update(self, assembler: &InstructionAssembler) -> Result<RouteUpdate> {
        let bounding_box = self.bbox.map(BoundingBox::from_lon_lat_array);
        Ok(RouteUpdate::assemble(
            assembler,
            self.path,
            &self.instructions,
            self.distance,
            self.time,
            bounding_box,
        )?)
    }
}

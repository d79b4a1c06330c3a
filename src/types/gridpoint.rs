//! Defines the `Gridpoint` reference that forecast requests are scoped to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A weather-service grid cell, as returned by the `/points/{lat},{lon}` endpoint.
///
/// Only the grid identification in [`GridpointProperties`] is modelled; the
/// remaining members of the `/points` feature are ignored on deserialization,
/// so the response body of that endpoint can be decoded directly into this type.
///
/// # Examples
///
/// ```
/// use nws_forecast::Gridpoint;
///
/// let point = Gridpoint::new("TOP", 31, 80);
/// assert_eq!(point.properties.grid_id, "TOP");
/// assert_eq!(point.to_string(), "TOP/31,80");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Gridpoint {
    pub properties: GridpointProperties,
}

/// The station grid identifier and integer grid coordinates of a [`Gridpoint`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridpointProperties {
    /// The forecast office grid identifier (e.g. `"TOP"`, `"LWX"`).
    pub grid_id: String,
    /// The x coordinate within the office grid.
    pub grid_x: i32,
    /// The y coordinate within the office grid.
    pub grid_y: i32,
}

impl Gridpoint {
    /// Creates a new `Gridpoint` from its grid identification.
    ///
    /// # Arguments
    ///
    /// * `grid_id` - The forecast office grid identifier (e.g. `"TOP"`).
    /// * `grid_x` - The x coordinate within the office grid.
    /// * `grid_y` - The y coordinate within the office grid.
    ///
    /// # Returns
    ///
    /// A new `Gridpoint` instance.
    pub fn new(grid_id: impl Into<String>, grid_x: i32, grid_y: i32) -> Self {
        Self {
            properties: GridpointProperties {
                grid_id: grid_id.into(),
                grid_x,
                grid_y,
            },
        }
    }
}

/// Formats as `{gridId}/{gridX},{gridY}`, the form used inside resource paths.
impl fmt::Display for Gridpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let GridpointProperties {
            grid_id,
            grid_x,
            grid_y,
        } = &self.properties;
        write!(f, "{}/{},{}", grid_id, grid_x, grid_y)
    }
}

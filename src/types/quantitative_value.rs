//! Defines `QuantitativeValue`, the (value, unit code) pair the weather API uses
//! for every measured or forecast quantity.

use serde::{Deserialize, Serialize};

/// A numeric value paired with the unit it is expressed in.
///
/// Unit codes follow the WMO code registry and are prefixed with their
/// namespace, e.g. `"wmoUnit:degC"`, `"wmoUnit:km_h-1"` or `"wmoUnit:percent"`.
///
/// `value` is `None` when the service has no value for the quantity, which is
/// common for `probabilityOfPrecipitation` when no precipitation is expected.
///
/// # Examples
///
/// ```
/// use nws_forecast::QuantitativeValue;
///
/// let temperature = QuantitativeValue::new(Some(21.5), "wmoUnit:degC");
/// assert_eq!(temperature.unit(), "degC");
/// assert_eq!(temperature.value, Some(21.5));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantitativeValue {
    /// The measured or forecast value, if the service reported one.
    pub value: Option<f64>,
    /// The upper bound of the value, when the service reports a range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,
    /// The lower bound of the value, when the service reports a range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,
    /// The namespaced unit code (e.g. `"wmoUnit:degF"`).
    pub unit_code: String,
    /// Quality control flag for observed values, if present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality_control: Option<String>,
}

impl QuantitativeValue {
    /// Creates a new `QuantitativeValue` without range or quality-control information.
    ///
    /// # Arguments
    ///
    /// * `value` - The value, or `None` if the quantity is unknown.
    /// * `unit_code` - The namespaced unit code (e.g. `"wmoUnit:degC"`).
    ///
    /// # Returns
    ///
    /// A new `QuantitativeValue` instance.
    pub fn new(value: Option<f64>, unit_code: impl Into<String>) -> Self {
        Self {
            value,
            max_value: None,
            min_value: None,
            unit_code: unit_code.into(),
            quality_control: None,
        }
    }

    /// The unit code with its namespace prefix removed (`"wmoUnit:degF"` -> `"degF"`).
    pub fn unit(&self) -> &str {
        self.unit_code
            .split_once(':')
            .map_or(self.unit_code.as_str(), |(_, unit)| unit)
    }
}

/// Current weather for one city, already shaped for presentation.
///
/// Built from a single provider response and discarded after the reply
/// is sent; nothing here outlives the request/reply cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    /// City name as the provider resolved it (may differ from the query).
    pub city: String,
    /// Condition description, first letter capitalized (e.g. "Облачно").
    pub description: String,
    pub temperature_c: f64,
    pub humidity_pct: u8,
    pub pressure_hpa: u32,
    pub wind_speed_mps: f64,
    /// Sunrise in the host's local timezone, "HH:MM".
    pub sunrise_local: String,
    /// Sunset in the host's local timezone, "HH:MM".
    pub sunset_local: String,
}

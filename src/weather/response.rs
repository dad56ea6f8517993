/// Response structure for the OpenWeather current weather endpoint
/// Represents the JSON structure returned by api.openweathermap.org/data/2.5/weather.
/// Every field is optional so partial payloads still deserialize.
#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct WeatherPayload {
    /// Condition descriptors, most relevant first; `null` entries are kept as `None`
    pub weather: Option<Vec<Option<ConditionDescriptor>>>,
    /// Temperature, feels-like temperature and humidity
    pub main: Option<MainMeasurements>,
    pub wind: Option<Wind>,
    /// Location name (e.g., "Paris")
    pub name: Option<String>,
    pub sys: Option<Sys>,
}

/// Weather condition entry
#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ConditionDescriptor {
    /// Human-readable description (e.g., "clear sky")
    pub description: Option<String>,
    /// Icon identifier (e.g., "01d")
    pub icon: Option<String>,
}

#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct MainMeasurements {
    pub temp: Option<f64>,
    pub feels_like: Option<f64>,
    /// Humidity percentage (0-100)
    pub humidity: Option<f64>,
}

#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Wind {
    /// Wind speed in m/s
    pub speed: Option<f64>,
}

#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Sys {
    /// ISO-3166-1 alpha-2 country code (e.g., "FR")
    pub country: Option<String>,
}

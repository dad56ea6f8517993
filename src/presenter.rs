use std::fmt;

use crate::{surface::DisplayRegion, weather::WeatherPayload};

const ICON_BASE_URL: &str = "http://openweathermap.org/img/wn";

// Raw values above this are taken to be Kelvin
const KELVIN_THRESHOLD: f64 = 100.0;
const KELVIN_OFFSET: f64 = 273.15;

/// Normalized, fixed-shape projection of a [`WeatherPayload`].
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedView {
    /// "City" or "City, Country"
    pub city: String,
    /// Celsius, rounded
    pub temperature: Option<i64>,
    /// Celsius, rounded
    pub feels_like: Option<i64>,
    pub humidity: Option<f64>,
    /// m/s
    pub wind_speed: Option<f64>,
    pub description: String,
    /// Icon identifier, e.g. "01d"
    pub icon: Option<String>,
}

impl RenderedView {
    pub fn icon_url(&self) -> Option<String> {
        self.icon
            .as_ref()
            .map(|icon| format!("{ICON_BASE_URL}/{icon}@2x.png"))
    }
}

/// Converts a raw temperature to rounded Celsius, treating values above 100 as Kelvin.
pub fn to_celsius(raw: f64) -> i64 {
    let celsius = if raw > KELVIN_THRESHOLD {
        raw - KELVIN_OFFSET
    } else {
        raw
    };
    round_half_up(celsius)
}

// halves round towards positive infinity, so -2.5 becomes -2
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

/// Normalizes a payload into a view. An absent payload produces no view.
pub fn present(payload: Option<&WeatherPayload>) -> Option<RenderedView> {
    let payload = payload?;

    let condition = payload
        .weather
        .as_ref()
        .and_then(|list| list.first())
        .and_then(Option::as_ref);
    let description = condition
        .and_then(|c| c.description.clone())
        .unwrap_or_default();
    let icon = condition
        .and_then(|c| non_empty(c.icon.as_ref()))
        .map(str::to_string);

    let main = payload.main.clone().unwrap_or_default();

    let name = payload.name.clone().unwrap_or_default();
    let country = payload
        .sys
        .as_ref()
        .and_then(|sys| non_empty(sys.country.as_ref()));
    let city = match country {
        Some(country) => format!("{name}, {country}"),
        None => name,
    };

    Some(RenderedView {
        city,
        temperature: main.temp.map(to_celsius),
        feels_like: main.feels_like.map(to_celsius),
        humidity: main.humidity,
        wind_speed: payload.wind.as_ref().and_then(|w| w.speed),
        description,
        icon,
    })
}

/// Presents `payload` and writes the rendered card into `display`.
///
/// Nothing is written when the payload is absent.
pub fn present_into<D: DisplayRegion>(
    payload: Option<&WeatherPayload>,
    display: &mut D,
) -> Option<RenderedView> {
    let view = present(payload)?;
    display.write(&view.to_string());
    Some(view)
}

struct Blank<'a, T>(Option<&'a T>);

impl<T: fmt::Display> fmt::Display for Blank<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => fmt::Display::fmt(value, f),
            None => Ok(()),
        }
    }
}

impl fmt::Display for RenderedView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.city)?;
        if let Some(url) = self.icon_url() {
            writeln!(f, "[{}] {}", self.description, url)?;
        }
        match self.temperature {
            Some(temp) => writeln!(f, "{temp}°C")?,
            None => writeln!(f)?,
        }
        writeln!(f, "{}", self.description)?;
        writeln!(f, "Humidity: {}%", Blank(self.humidity.as_ref()))?;
        match self.feels_like {
            Some(feels_like) => writeln!(f, "Feels like: {feels_like}°C")?,
            None => writeln!(f, "Feels like: ")?,
        }
        write!(f, "Wind: {} m/s", Blank(self.wind_speed.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MemoryDisplay;
    use proptest::prelude::*;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> WeatherPayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn paris_scenario() {
        let payload = payload(json!({
            "main": { "temp": 25.4, "humidity": 60 },
            "wind": { "speed": 3 },
            "weather": [{ "description": "clear sky", "icon": "01d" }],
            "name": "Paris",
            "sys": { "country": "FR" }
        }));

        let view = present(Some(&payload)).unwrap();
        assert_eq!(view.city, "Paris, FR");
        assert_eq!(view.temperature, Some(25));
        assert_eq!(view.humidity, Some(60.0));
        assert_eq!(view.wind_speed, Some(3.0));
        assert_eq!(view.description, "clear sky");
        assert_eq!(view.icon.as_deref(), Some("01d"));
        assert_eq!(view.feels_like, None);
    }

    #[test]
    fn cairo_scenario_converts_kelvin() {
        let payload = payload(json!({ "main": { "temp": 300.15 }, "name": "Cairo" }));

        let view = present(Some(&payload)).unwrap();
        assert_eq!(view.city, "Cairo");
        assert_eq!(view.temperature, Some(27));
        assert_eq!(view.description, "");
        assert_eq!(view.icon, None);
        assert_eq!(view.humidity, None);
        assert_eq!(view.wind_speed, None);
    }

    #[test]
    fn absent_payload_produces_no_view() {
        let mut display = MemoryDisplay::default();
        assert_eq!(present(None), None);
        assert_eq!(present_into(None, &mut display), None);
        assert_eq!(display.content(), "");
    }

    #[test]
    fn empty_condition_list_and_empty_country() {
        let payload = payload(json!({
            "weather": [],
            "name": "Oslo",
            "sys": { "country": "" }
        }));

        let view = present(Some(&payload)).unwrap();
        assert_eq!(view.city, "Oslo");
        assert_eq!(view.description, "");
        assert_eq!(view.icon, None);
        assert_eq!(view.temperature, None);
    }

    #[test]
    fn null_condition_entry_renders_empty_description() {
        let payload = payload(json!({
            "weather": [null, { "description": "mist", "icon": "50d" }],
            "main": { "temp": 20 },
            "name": "Rome"
        }));

        let view = present(Some(&payload)).unwrap();
        assert_eq!(view.city, "Rome");
        assert_eq!(view.temperature, Some(20));
        assert_eq!(view.description, "");
        assert_eq!(view.icon, None);
    }

    #[test]
    fn feels_like_is_normalized_independently() {
        let payload = payload(json!({ "main": { "temp": 12.2, "feels_like": 284.15 } }));

        let view = present(Some(&payload)).unwrap();
        assert_eq!(view.temperature, Some(12));
        assert_eq!(view.feels_like, Some(11));
    }

    #[test]
    fn rounding_is_half_up() {
        assert_eq!(to_celsius(2.5), 3);
        assert_eq!(to_celsius(-2.5), -2);
        assert_eq!(to_celsius(-2.6), -3);
        assert_eq!(to_celsius(100.0), 100);
        assert_eq!(to_celsius(100.5), -173);
    }

    #[test]
    fn renders_full_card() {
        let payload = payload(json!({
            "main": { "temp": 25.4, "feels_like": 24.6, "humidity": 60 },
            "wind": { "speed": 3.6 },
            "weather": [{ "description": "clear sky", "icon": "01d" }],
            "name": "Paris",
            "sys": { "country": "FR" }
        }));

        let view = present(Some(&payload)).unwrap();
        assert_eq!(
            view.to_string(),
            "Paris, FR\n\
             [clear sky] http://openweathermap.org/img/wn/01d@2x.png\n\
             25°C\n\
             clear sky\n\
             Humidity: 60%\n\
             Feels like: 25°C\n\
             Wind: 3.6 m/s"
        );
    }

    #[test]
    fn renders_missing_values_blank() {
        let payload = payload(json!({ "main": { "temp": 300.15 }, "name": "Cairo" }));

        let view = present(Some(&payload)).unwrap();
        assert_eq!(
            view.to_string(),
            "Cairo\n27°C\n\nHumidity: %\nFeels like: \nWind:  m/s"
        );
    }

    #[test]
    fn present_into_writes_card() {
        let payload = payload(json!({
            "main": { "temp": 18 },
            "name": "Lima",
            "sys": { "country": "PE" }
        }));
        let mut display = MemoryDisplay::default();

        let view = present_into(Some(&payload), &mut display).unwrap();
        assert_eq!(display.content(), view.to_string());
        assert!(display.content().starts_with("Lima, PE\n18°C\n"));
    }

    proptest! {
        #[test]
        fn celsius_values_pass_through_rounded(temp in -90.0f64..=100.0) {
            let payload = WeatherPayload {
                main: Some(crate::weather::MainMeasurements { temp: Some(temp), ..Default::default() }),
                ..Default::default()
            };
            let view = present(Some(&payload)).unwrap();
            prop_assert_eq!(view.temperature, Some((temp + 0.5).floor() as i64));
        }

        #[test]
        fn kelvin_values_are_converted(temp in 100.000_001f64..400.0) {
            let payload = WeatherPayload {
                main: Some(crate::weather::MainMeasurements { temp: Some(temp), ..Default::default() }),
                ..Default::default()
            };
            let view = present(Some(&payload)).unwrap();
            prop_assert_eq!(view.temperature, Some((temp - 273.15 + 0.5).floor() as i64));
        }

        #[test]
        fn rendering_is_idempotent(
            temp in proptest::option::of(-50.0f64..350.0),
            name in "[A-Za-z ]{0,20}",
            country in proptest::option::of("[A-Z]{2}"),
        ) {
            let payload = WeatherPayload {
                main: Some(crate::weather::MainMeasurements { temp, ..Default::default() }),
                name: Some(name),
                sys: Some(crate::weather::Sys { country }),
                ..Default::default()
            };
            let first = present(Some(&payload)).unwrap().to_string();
            let second = present(Some(&payload)).unwrap().to_string();
            prop_assert_eq!(first, second);
        }
    }
}

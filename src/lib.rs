//! Current weather lookup against the OpenWeather API.
//!
//! A lookup validates a city name, fetches the current weather, normalizes the
//! loosely-typed payload into a [`RenderedView`] and writes it to caller-provided
//! presentation regions.

pub mod config;
pub mod error;
pub mod lookup;
pub mod presenter;
pub mod surface;
pub mod terminal;
pub mod weather;

pub use config::WeatherConfig;
pub use error::{AppError, ErrorKind};
pub use lookup::{Lookup, LookupState};
pub use presenter::{RenderedView, present, present_into};
pub use surface::{DisplayRegion, ErrorRegion, MemoryDisplay, MemoryErrors};
pub use weather::{OpenWeatherClient, WeatherPayload, WeatherQuery};

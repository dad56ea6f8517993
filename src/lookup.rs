use tracing::{debug, info};

use crate::{
    error::AppError,
    presenter::{self, RenderedView},
    surface::{DisplayRegion, ErrorRegion},
    weather::{OpenWeatherClient, WeatherQuery},
};

/// States of a single lookup. Every lookup ends back in `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupState {
    Idle,
    Validating,
    Loading,
    Rendered,
    Error,
}

/// One user-initiated request/response/render cycle against injected regions.
///
/// The regions are borrowed mutably for the whole lookup, so a second lookup
/// on the same regions cannot start until this one has finished.
#[derive(Debug)]
pub struct Lookup<'a, D, E> {
    client: &'a OpenWeatherClient,
    display: &'a mut D,
    errors: &'a mut E,
    state: LookupState,
}

impl<'a, D: DisplayRegion, E: ErrorRegion> Lookup<'a, D, E> {
    pub fn new(client: &'a OpenWeatherClient, display: &'a mut D, errors: &'a mut E) -> Self {
        Self {
            client,
            display,
            errors,
            state: LookupState::Idle,
        }
    }

    pub fn state(&self) -> LookupState {
        self.state
    }

    fn transition(&mut self, next: LookupState) {
        debug!("Lookup state: {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    fn fail(&mut self, error: &AppError) {
        self.transition(LookupState::Error);
        self.display.clear();
        self.errors.report(&error.to_string());
    }

    /// Runs a lookup for the raw `input`.
    ///
    /// Failures are reported to the error region and also returned. `Ok(None)`
    /// means the API answered with an empty payload and nothing was rendered.
    pub async fn run(&mut self, input: &str) -> Result<Option<RenderedView>, AppError> {
        self.transition(LookupState::Validating);
        let result = self.validated_run(input).await;
        if let Err(e) = &result {
            self.fail(e);
        }
        self.transition(LookupState::Idle);
        result
    }

    async fn validated_run(&mut self, input: &str) -> Result<Option<RenderedView>, AppError> {
        let query = WeatherQuery::parse(input)?;

        self.transition(LookupState::Loading);
        self.display.show_loading();
        self.errors.clear();

        let fetched = self.client.fetch(&query).await;
        // exactly once per lookup, before anything else is written
        self.display.hide_loading();

        let payload = fetched?;
        let view = presenter::present_into(payload.as_ref(), &mut *self.display);
        match &view {
            Some(view) => info!("Rendered weather for {}", view.city),
            None => info!("Empty weather payload for {}", query.city()),
        }
        self.transition(LookupState::Rendered);
        Ok(view)
    }
}

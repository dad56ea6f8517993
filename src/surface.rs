//! Presentation regions a lookup writes to.
//!
//! The lookup never looks regions up on its own; callers hand them in,
//! so any binding (terminal, in-memory, GUI) can back them.

/// Placeholder shown in the display region while a request is in flight
pub const LOADING_PLACEHOLDER: &str = "Loading weather data...";

/// Region holding either the loading placeholder or a rendered weather card.
pub trait DisplayRegion {
    /// Replaces the current content with the loading placeholder.
    fn show_loading(&mut self);

    /// Removes the loading placeholder; any other content is left alone.
    fn hide_loading(&mut self);

    /// Replaces the current content with a rendered fragment.
    fn write(&mut self, fragment: &str);

    fn clear(&mut self);
}

/// Region holding a single user-facing error message.
pub trait ErrorRegion {
    /// Shows `message` verbatim and makes the region visible.
    fn report(&mut self, message: &str);

    /// Empties and hides the region.
    fn clear(&mut self);
}

/// What a [`MemoryDisplay`] currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DisplayContent {
    #[default]
    Empty,
    Loading,
    Fragment(String),
}

/// In-memory display region.
#[derive(Debug, Clone, Default)]
pub struct MemoryDisplay {
    content: DisplayContent,
    /// Number of times loading was shown
    pub loading_shown: usize,
    /// Number of times loading was hidden
    pub loading_hidden: usize,
}

impl MemoryDisplay {
    pub fn state(&self) -> &DisplayContent {
        &self.content
    }

    pub fn is_loading(&self) -> bool {
        self.content == DisplayContent::Loading
    }

    /// Text currently visible in the region
    pub fn content(&self) -> &str {
        match &self.content {
            DisplayContent::Empty => "",
            DisplayContent::Loading => LOADING_PLACEHOLDER,
            DisplayContent::Fragment(fragment) => fragment,
        }
    }
}

impl DisplayRegion for MemoryDisplay {
    fn show_loading(&mut self) {
        self.loading_shown += 1;
        self.content = DisplayContent::Loading;
    }

    fn hide_loading(&mut self) {
        self.loading_hidden += 1;
        if self.is_loading() {
            self.content = DisplayContent::Empty;
        }
    }

    fn write(&mut self, fragment: &str) {
        self.content = DisplayContent::Fragment(fragment.to_string());
    }

    fn clear(&mut self) {
        self.content = DisplayContent::Empty;
    }
}

/// In-memory error region. Starts empty and hidden.
#[derive(Debug, Clone)]
pub struct MemoryErrors {
    message: String,
    hidden: bool,
}

impl Default for MemoryErrors {
    fn default() -> Self {
        Self {
            message: String::new(),
            hidden: true,
        }
    }
}

impl MemoryErrors {
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_visible(&self) -> bool {
        !self.hidden
    }
}

impl ErrorRegion for MemoryErrors {
    fn report(&mut self, message: &str) {
        self.message = message.to_string();
        self.hidden = false;
    }

    fn clear(&mut self) {
        self.message.clear();
        self.hidden = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_then_clear_leaves_region_empty_and_hidden() {
        let mut errors = MemoryErrors::default();
        assert!(!errors.is_visible());

        errors.report("City not found");
        assert!(errors.is_visible());
        assert_eq!(errors.message(), "City not found");

        errors.clear();
        assert!(!errors.is_visible());
        assert_eq!(errors.message(), "");
    }

    #[test]
    fn report_replaces_previous_message() {
        let mut errors = MemoryErrors::default();
        errors.report("first");
        errors.report("second");
        assert_eq!(errors.message(), "second");
    }

    #[test]
    fn loading_placeholder_lifecycle() {
        let mut display = MemoryDisplay::default();
        display.write("old card");

        display.show_loading();
        assert!(display.is_loading());
        assert_eq!(display.content(), LOADING_PLACEHOLDER);

        display.hide_loading();
        assert_eq!(display.state(), &DisplayContent::Empty);
        assert_eq!((display.loading_shown, display.loading_hidden), (1, 1));
    }

    #[test]
    fn hide_loading_keeps_rendered_content() {
        let mut display = MemoryDisplay::default();
        display.show_loading();
        display.write("Paris, FR");

        display.hide_loading();
        assert_eq!(display.content(), "Paris, FR");
    }
}

use crate::analysis::{self, CrackReport};
use crate::config::Config;
use crate::ui::state::{reduce, ViewIntent, ViewState};

/// Contents of the analysis popup.
#[derive(Clone, Debug, PartialEq)]
pub enum AnalysisPopup {
    /// The current text has no letters to analyze.
    Empty,
    /// Ranked shift candidates for the current text.
    Report(CrackReport),
}

pub struct App {
    should_quit: bool,
    state: ViewState,
    popup: Option<AnalysisPopup>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            state: ViewState::with_initial(&config.defaults.text, config.defaults.shift),
            popup: None,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Run one intent through the reducer and store the result.
    pub fn dispatch(&mut self, intent: ViewIntent) {
        self.state = reduce(std::mem::take(&mut self.state), intent);
    }

    /// Bracketed paste: insert the pasted text at the cursor.
    pub fn paste(&mut self, text: &str) {
        for ch in text.chars() {
            self.dispatch(ViewIntent::Insert(ch));
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn popup(&self) -> Option<&AnalysisPopup> {
        self.popup.as_ref()
    }

    pub fn popup_open(&self) -> bool {
        self.popup.is_some()
    }

    /// Open the analysis popup for the current text. While the popup is
    /// open input is not routed to the text, so the report cannot go
    /// stale.
    pub fn open_analysis(&mut self) {
        let popup = if analysis::has_letters(&self.state.text) {
            AnalysisPopup::Report(analysis::crack(&self.state.text))
        } else {
            AnalysisPopup::Empty
        };
        self.popup = Some(popup);
    }

    pub fn close_popup(&mut self) {
        self.popup = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_app_seeds_state_from_config() {
        let config = Config::default();
        let app = App::new(&config);
        assert_eq!(app.state().text, "HELLO WORLD");
        assert_eq!(app.state().shift, 3);
        assert!(!app.should_quit());
    }

    #[test]
    fn analysis_popup_is_empty_without_letters() {
        let config = Config::default();
        let mut app = App::new(&config);
        app.dispatch(ViewIntent::Clear);
        app.open_analysis();
        assert_eq!(app.popup(), Some(&AnalysisPopup::Empty));
    }

    #[test]
    fn analysis_popup_toggles_closed() {
        let config = Config::default();
        let mut app = App::new(&config);
        app.open_analysis();
        assert!(app.popup_open());
        app.close_popup();
        assert!(!app.popup_open());
    }
}

//! Widget visibility state store

/// UI state for the chat widget.
///
/// The panel starts hidden. The launcher flips it, the header (or Escape)
/// closes it; these methods are the only mutation paths for the flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WidgetState {
    /// Whether the chat panel is currently shown
    pub panel_open: bool,
}

impl WidgetState {
    /// Flip the panel between shown and hidden.
    pub fn toggle_panel(&mut self) {
        self.panel_open = !self.panel_open;
    }

    /// Hide the panel. Idempotent.
    pub fn close_panel(&mut self) {
        self.panel_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_starts_hidden() {
        assert!(!WidgetState::default().panel_open);
    }

    #[test]
    fn toggle_flips_both_ways() {
        let mut state = WidgetState::default();
        state.toggle_panel();
        assert!(state.panel_open);
        state.toggle_panel();
        assert!(!state.panel_open);
    }

    #[test]
    fn close_forces_hidden_regardless_of_prior_state() {
        let mut state = WidgetState { panel_open: true };
        state.close_panel();
        assert!(!state.panel_open);
        state.close_panel();
        assert!(!state.panel_open);
    }

    #[test]
    fn repeated_toggle_close_sequences_end_hidden() {
        let mut state = WidgetState::default();
        for _ in 0..3 {
            state.toggle_panel();
            state.close_panel();
        }
        assert!(!state.panel_open);
    }
}

//! Language switcher dropdown state.

/// Dropdown visibility.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SwitcherState {
    /// Dropdown hidden.
    #[default]
    Closed,
    /// Dropdown listing languages.
    Open,
}

/// Interactions the dropdown reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwitcherInput {
    /// The current-language button was clicked.
    Toggle,
    /// A click landed outside the switcher.
    OutsideClick,
    /// A language entry was chosen.
    Selected,
}

impl SwitcherState {
    /// Next state after an interaction.
    #[must_use]
    pub const fn next(self, input: SwitcherInput) -> Self {
        match (self, input) {
            (Self::Closed, SwitcherInput::Toggle) => Self::Open,
            _ => Self::Closed,
        }
    }

    /// Value for the button's `aria-expanded`.
    #[must_use]
    pub const fn aria_expanded(self) -> &'static str {
        match self {
            Self::Closed => "false",
            Self::Open => "true",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_opens_and_closes() {
        let open = SwitcherState::Closed.next(SwitcherInput::Toggle);
        assert_eq!(open, SwitcherState::Open);
        assert_eq!(open.aria_expanded(), "true");
        assert_eq!(open.next(SwitcherInput::Toggle), SwitcherState::Closed);
    }

    #[test]
    fn outside_click_and_selection_always_close() {
        for state in [SwitcherState::Closed, SwitcherState::Open] {
            assert_eq!(state.next(SwitcherInput::OutsideClick), SwitcherState::Closed);
            assert_eq!(state.next(SwitcherInput::Selected), SwitcherState::Closed);
        }
    }
}

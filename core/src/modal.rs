/// Visibility of the info dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Hidden,
    Visible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalTrigger {
    PageLoad,
    InfoControl,
    CloseControl,
    /// A pointer interaction whose target is the overlay itself.
    BackdropClick,
    /// A pointer interaction on the dialog's content.
    ContentClick,
}

impl ModalState {
    pub const fn apply(self, trigger: ModalTrigger) -> Self {
        match trigger {
            ModalTrigger::PageLoad | ModalTrigger::InfoControl => Self::Visible,
            ModalTrigger::CloseControl | ModalTrigger::BackdropClick => Self::Hidden,
            ModalTrigger::ContentClick => self,
        }
    }

    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }

    /// Value for the dialog's CSS `display` property.
    pub const fn css_display(self) -> &'static str {
        match self {
            Self::Visible => "block",
            Self::Hidden => "none",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shown_on_load_and_info() {
        assert_eq!(ModalState::Hidden.apply(ModalTrigger::PageLoad), ModalState::Visible);
        assert_eq!(ModalState::Hidden.apply(ModalTrigger::InfoControl), ModalState::Visible);
        assert_eq!(ModalState::Visible.apply(ModalTrigger::InfoControl), ModalState::Visible);
    }

    #[test]
    fn hidden_by_close_and_backdrop_only() {
        assert_eq!(ModalState::Visible.apply(ModalTrigger::CloseControl), ModalState::Hidden);
        assert_eq!(ModalState::Visible.apply(ModalTrigger::BackdropClick), ModalState::Hidden);
        assert_eq!(ModalState::Visible.apply(ModalTrigger::ContentClick), ModalState::Visible);
        assert_eq!(ModalState::Hidden.apply(ModalTrigger::ContentClick), ModalState::Hidden);
    }

    #[test]
    fn display_values() {
        assert_eq!(ModalState::Visible.css_display(), "block");
        assert_eq!(ModalState::Hidden.css_display(), "none");
    }
}

//! The show/hide checkbox.
//!
//! Two states, `Unchecked` (initial) and `Checked`. The toggle never calls
//! anyone itself: state changes hand back a [`Toggled`] notification that
//! the owning window delivers to its single subscriber before handling the
//! next event.

/// Checked state of the toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToggleState {
    #[default]
    Unchecked,
    Checked,
}

impl ToggleState {
    pub fn is_checked(self) -> bool {
        matches!(self, ToggleState::Checked)
    }

    pub fn flipped(self) -> Self {
        match self {
            ToggleState::Unchecked => ToggleState::Checked,
            ToggleState::Checked => ToggleState::Unchecked,
        }
    }
}

impl From<bool> for ToggleState {
    fn from(checked: bool) -> Self {
        if checked {
            ToggleState::Checked
        } else {
            ToggleState::Unchecked
        }
    }
}

/// Notification fired when the checked state transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggled {
    /// Checked state after the transition.
    pub checked: bool,
}

/// A labelled two-state checkbox.
#[derive(Debug, Clone)]
pub struct VisibilityToggle {
    label: String,
    state: ToggleState,
}

impl VisibilityToggle {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            state: ToggleState::Unchecked,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn state(&self) -> ToggleState {
        self.state
    }

    pub fn is_checked(&self) -> bool {
        self.state.is_checked()
    }

    /// A user click (or space-bar activation). Always flips the state.
    #[must_use = "the notification must be delivered to the subscriber"]
    pub fn activate(&mut self) -> Option<Toggled> {
        self.transition_to(self.state.flipped())
    }

    /// Apply the state reported by the native control.
    ///
    /// Returns `None` when `checked` equals the current state: the toggle
    /// only notifies on an actual transition.
    #[must_use = "the notification must be delivered to the subscriber"]
    pub fn set_checked(&mut self, checked: bool) -> Option<Toggled> {
        self.transition_to(ToggleState::from(checked))
    }

    fn transition_to(&mut self, next: ToggleState) -> Option<Toggled> {
        if next == self.state {
            return None;
        }
        self.state = next;
        Some(Toggled {
            checked: next.is_checked(),
        })
    }
}

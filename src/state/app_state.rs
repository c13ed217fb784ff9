//! Core application state

use std::collections::VecDeque;

use crate::validation::ValidationErrors;

use super::autosave::{AutoSaveDebouncer, SaveStatus};
use super::draft::CampaignDraft;
use super::field::FieldId;
use super::toasts::ToastQueue;

/// Number of editable fields; the index one past the last field is the
/// action-button row
pub const FIELD_COUNT: usize = FieldId::ALL.len();

/// Labels of the action buttons, in order
pub const ACTION_BUTTONS: [&str; 2] = ["Submit", "Import CSV"];

/// Index of the Submit button within `ACTION_BUTTONS`
pub const SUBMIT_BUTTON: usize = 0;

/// Index of the Import CSV button within `ACTION_BUTTONS`
pub const IMPORT_BUTTON: usize = 1;

/// Available views in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Form,
    ImportCsv,
}

/// Central application state
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,

    // Form
    pub draft: CampaignDraft,
    pub active_field: usize,
    pub selected_button: usize,
    pub validation: ValidationErrors,

    // Auto-save
    pub save_status: SaveStatus,
    pub autosave: AutoSaveDebouncer,

    // Notifications
    pub toasts: ToastQueue,

    // Import view input
    pub import_path: String,

    // Modal error dialog queue (FIFO)
    errors: VecDeque<String>,
}

impl AppState {
    /// The field under the cursor, `None` while the button row is focused
    pub fn active_field_id(&self) -> Option<FieldId> {
        FieldId::ALL.get(self.active_field).copied()
    }

    /// Whether focus sits on the action-button row
    pub fn on_buttons_row(&self) -> bool {
        self.active_field == FIELD_COUNT
    }

    /// Move focus to the next field, wrapping through the button row
    pub fn next_form_field(&mut self) {
        self.active_field = (self.active_field + 1) % (FIELD_COUNT + 1);
    }

    /// Move focus to the previous field, wrapping through the button row
    pub fn prev_form_field(&mut self) {
        self.active_field = if self.active_field == 0 {
            FIELD_COUNT
        } else {
            self.active_field - 1
        };
    }

    /// Put the cursor on a specific field
    pub fn focus_field(&mut self, field: FieldId) {
        self.active_field = field.index();
    }

    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % ACTION_BUTTONS.len();
    }

    pub fn prev_button(&mut self) {
        self.selected_button = if self.selected_button == 0 {
            ACTION_BUTTONS.len() - 1
        } else {
            self.selected_button - 1
        };
    }

    /// Queue a message for the modal error dialog
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.errors.push_back(message.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The error currently shown in the dialog
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    /// Dismiss the currently shown error
    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod navigation {
        use super::*;

        #[test]
        fn test_next_field_wraps_through_button_row() {
            let mut state = AppState::default();
            assert_eq!(state.active_field_id(), Some(FieldId::Name));

            for _ in 0..FIELD_COUNT {
                state.next_form_field();
            }
            assert!(state.on_buttons_row());
            assert_eq!(state.active_field_id(), None);

            state.next_form_field();
            assert_eq!(state.active_field_id(), Some(FieldId::Name));
        }

        #[test]
        fn test_prev_field_from_first_lands_on_button_row() {
            let mut state = AppState::default();
            state.prev_form_field();
            assert!(state.on_buttons_row());

            state.prev_form_field();
            assert_eq!(state.active_field_id(), Some(FieldId::EndDate));
        }

        #[test]
        fn test_focus_field_jumps_directly() {
            let mut state = AppState::default();
            state.focus_field(FieldId::StartDate);
            assert_eq!(state.active_field_id(), Some(FieldId::StartDate));
        }

        #[test]
        fn test_buttons_cycle_both_directions() {
            let mut state = AppState::default();
            assert_eq!(state.selected_button, SUBMIT_BUTTON);

            state.next_button();
            assert_eq!(state.selected_button, IMPORT_BUTTON);
            state.next_button();
            assert_eq!(state.selected_button, SUBMIT_BUTTON);

            state.prev_button();
            assert_eq!(state.selected_button, IMPORT_BUTTON);
        }
    }

    mod error_queue {
        use super::*;

        #[test]
        fn test_errors_dismiss_in_fifo_order() {
            let mut state = AppState::default();
            assert!(!state.has_errors());

            state.push_error("first");
            state.push_error("second");

            assert_eq!(state.current_error(), Some("first"));
            state.dismiss_error();
            assert_eq!(state.current_error(), Some("second"));
            state.dismiss_error();
            assert!(!state.has_errors());
        }
    }
}

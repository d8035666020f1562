//! Interactive form state

use super::event::{update, FormData, FormEvent};
use super::field::FieldId;

/// Buttons on the actions row, top to bottom
pub const BUTTONS: &[&str] = &["Submit", "Clear", "Quit"];

/// Focus index of the actions row, one past the last field
pub const ACTIONS_ROW: usize = FieldId::ALL.len();

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// The contact form: reducer-owned data plus focus bookkeeping.
///
/// Focus indices 0..3 are the fields in display order; index 3 is the
/// actions row. Every edit is routed through [`update`] as a
/// `FieldChanged` event carrying the field's full replacement value.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub data: FormData,
    pub active_field_index: usize,
    pub selected_button: usize,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// The field under the cursor, `None` when the actions row is focused
    pub fn active_field_id(&self) -> Option<FieldId> {
        FieldId::ALL.get(self.active_field_index).copied()
    }

    /// Returns true if the actions row is currently focused
    pub fn is_actions_row_active(&self) -> bool {
        self.active_field_index == ACTIONS_ROW
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % BUTTONS.len();
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = BUTTONS.len() - 1;
        } else {
            self.selected_button -= 1;
        }
    }

    /// Route an event through the reducer
    pub fn apply(&mut self, event: &FormEvent) {
        self.data = update(std::mem::take(&mut self.data), event);
    }

    fn apply_value(&mut self, field: FieldId, value: String) {
        self.apply(&FormEvent::FieldChanged { field, value });
    }

    /// Append a character to the active field
    pub fn push_char(&mut self, c: char) {
        if let Some(field) = self.active_field_id() {
            let mut value = self.data.get(field).to_string();
            value.push(c);
            self.apply_value(field, value);
        }
    }

    /// Remove the last character from the active field
    pub fn backspace(&mut self) {
        if let Some(field) = self.active_field_id() {
            let mut value = self.data.get(field).to_string();
            value.pop();
            self.apply_value(field, value);
        }
    }

    /// Append a newline to the active field if it is multiline
    pub fn insert_newline(&mut self) {
        match self.active_field_id() {
            Some(field) if field.is_multiline() => self.push_char('\n'),
            _ => {}
        }
    }

    /// Reset every field to empty without moving focus
    pub fn clear(&mut self) {
        for field in FieldId::ALL {
            self.apply_value(field, String::new());
        }
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        FieldId::ALL.len() + 1 // fields + actions row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(ACTIONS_ROW);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod focus {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_starts_on_first_field() {
            let form = ContactForm::new();
            assert_eq!(form.active_field_id(), Some(FieldId::Name));
            assert!(!form.is_actions_row_active());
        }

        #[test]
        fn test_field_count() {
            let form = ContactForm::new();
            assert_eq!(form.field_count(), 4); // name, email, message, actions
        }

        #[test]
        fn test_next_field_cycles_through_actions_row() {
            let mut form = ContactForm::new();
            for _ in 0..FieldId::ALL.len() {
                form.next_field();
            }
            assert!(form.is_actions_row_active());
            assert_eq!(form.active_field_id(), None);
            form.next_field();
            assert_eq!(form.active_field_id(), Some(FieldId::Name));
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = ContactForm::new();
            form.set_active_field(100);
            assert_eq!(form.active_field(), ACTIONS_ROW);
        }

        #[test]
        fn test_prev_field_wraps_to_actions_row() {
            let mut form = ContactForm::new();
            form.prev_field();
            assert!(form.is_actions_row_active());
        }

        #[test]
        fn test_next_button_wraps() {
            let mut form = ContactForm::new();
            form.selected_button = BUTTONS.len() - 1;
            form.next_button();
            assert_eq!(form.selected_button, 0);
        }

        #[test]
        fn test_prev_button_wraps() {
            let mut form = ContactForm::new();
            form.prev_button();
            assert_eq!(form.selected_button, BUTTONS.len() - 1);
        }
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_push_char_targets_active_field() {
            let mut form = ContactForm::new();
            form.push_char('A');
            form.next_field();
            form.push_char('x');
            assert_eq!(form.data.name, "A");
            assert_eq!(form.data.email, "x");
            assert_eq!(form.data.message, "");
        }

        #[test]
        fn test_push_char_on_actions_row_is_noop() {
            let mut form = ContactForm::new();
            form.prev_field(); // actions row
            form.push_char('x');
            assert_eq!(form.data, FormData::default());
        }

        #[test]
        fn test_backspace_removes_last_char() {
            let mut form = ContactForm::new();
            form.push_char('A');
            form.push_char('n');
            form.backspace();
            assert_eq!(form.data.name, "A");
        }

        #[test]
        fn test_backspace_on_empty_field_is_noop() {
            let mut form = ContactForm::new();
            form.backspace();
            assert_eq!(form.data.name, "");
        }

        #[test]
        fn test_newline_only_in_message_field() {
            let mut form = ContactForm::new();
            form.insert_newline(); // name field
            assert_eq!(form.data.name, "");

            form.active_field_index = 2; // message field
            form.push_char('H');
            form.insert_newline();
            form.push_char('i');
            assert_eq!(form.data.message, "H\ni");
        }

        #[test]
        fn test_clear_resets_all_fields() {
            let mut form = ContactForm::new();
            form.push_char('A');
            form.next_field();
            form.push_char('x');
            form.clear();
            assert_eq!(form.data, FormData::default());
            // focus is untouched
            assert_eq!(form.active_field_id(), Some(FieldId::Email));
        }
    }
}

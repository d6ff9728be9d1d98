//! Contact form validation state.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Fields of the contact form. All are required.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];
}

/// Values and error flags for the contact form.
///
/// A field is invalid when its trimmed value is empty. Errors are set only
/// at submission time and cleared per-field as the user edits, so typing
/// never flags untouched fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    errors: Vec<Field>,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Record an edit, clearing that field's error flag.
    pub fn edit(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
        self.errors.retain(|&f| f != field);
    }

    pub fn has_error(&self, field: Field) -> bool {
        self.errors.contains(&field)
    }

    /// Validate and, if everything is filled in, reset for the next visitor.
    ///
    /// Returns `true` on success. On failure only the blank fields are
    /// flagged; previously flagged fields that now hold text are cleared.
    pub fn submit(&mut self) -> bool {
        self.errors = Field::ALL
            .into_iter()
            .filter(|&f| self.value(f).trim().is_empty())
            .collect();

        if self.errors.is_empty() {
            *self = Self::default();
            true
        } else {
            false
        }
    }
}

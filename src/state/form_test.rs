use super::*;

fn filled() -> ContactForm {
    let mut form = ContactForm::default();
    form.edit(Field::Name, "Ada".to_owned());
    form.edit(Field::Email, "ada@example.com".to_owned());
    form.edit(Field::Message, "Interested in the M2 lever machine.".to_owned());
    form
}

// =============================================================
// Submission
// =============================================================

#[test]
fn valid_submission_succeeds_and_resets() {
    let mut form = filled();
    assert!(form.submit());
    assert_eq!(form, ContactForm::default());
}

#[test]
fn blank_field_blocks_submission() {
    let mut form = filled();
    form.edit(Field::Email, String::new());
    assert!(!form.submit());
    assert!(form.has_error(Field::Email));
    assert!(!form.has_error(Field::Name));
    assert!(!form.has_error(Field::Message));
}

#[test]
fn whitespace_only_counts_as_blank() {
    let mut form = filled();
    form.edit(Field::Message, "   \n\t ".to_owned());
    assert!(!form.submit());
    assert!(form.has_error(Field::Message));
}

#[test]
fn failed_submission_keeps_entered_values() {
    let mut form = filled();
    form.edit(Field::Name, String::new());
    assert!(!form.submit());
    assert_eq!(form.value(Field::Email), "ada@example.com");
}

#[test]
fn empty_form_flags_every_field() {
    let mut form = ContactForm::default();
    assert!(!form.submit());
    for field in Field::ALL {
        assert!(form.has_error(field));
    }
}

// =============================================================
// Error clearing
// =============================================================

#[test]
fn editing_a_flagged_field_clears_its_flag() {
    let mut form = ContactForm::default();
    form.submit();
    form.edit(Field::Name, "A".to_owned());
    assert!(!form.has_error(Field::Name));
    // Other flags are untouched until their fields are edited.
    assert!(form.has_error(Field::Email));
    assert!(form.has_error(Field::Message));
}

#[test]
fn resubmission_reflags_still_blank_fields() {
    let mut form = ContactForm::default();
    form.submit();
    form.edit(Field::Name, "Ada".to_owned());
    assert!(!form.submit());
    assert!(!form.has_error(Field::Name));
    assert!(form.has_error(Field::Email));
}

#[test]
fn resubmission_clears_flag_on_field_filled_meanwhile() {
    let mut form = ContactForm::default();
    form.submit();
    assert!(form.has_error(Field::Email));
    form.email = "ada@example.com".to_owned();
    form.name = "Ada".to_owned();
    form.message = "Hello".to_owned();
    assert!(form.submit());
}

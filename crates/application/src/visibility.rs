use formweaver_domain::{Field, FieldValue, FormState};

/// Returns whether a field is currently shown, based on its parent-link
/// declaration and the given form-state snapshot.
///
/// Pure and side-effect free; invoked on every render and state change.
#[must_use]
pub fn is_visible(field: &Field, state: &FormState) -> bool {
    let Some(parent_id) = field.parent_field_id() else {
        return true;
    };

    let Some(parent_value) = state.get(parent_id) else {
        return false;
    };
    if parent_value.is_empty() {
        return false;
    }

    let Some(expected) = field.parent_option_value() else {
        return false;
    };

    match parent_value {
        FieldValue::Many(values) => values.iter().any(|value| value == expected),
        FieldValue::Single(value) => value == expected,
    }
}

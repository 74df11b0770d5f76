use std::collections::BTreeMap;
use std::sync::LazyLock;

use formweaver_domain::{Field, FieldControl, FieldValue, FormState, OptionKind, TextInputType};
use regex::Regex;
use url::Url;

use crate::messages;

fn pattern(source: &str) -> Regex {
    // Patterns below are compile-time constants; construction cannot fail.
    Regex::new(source).unwrap_or_else(|_| unreachable!())
}

static NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| pattern(r"^\d+$"));
static LETTER_PATTERN: LazyLock<Regex> = LazyLock::new(|| pattern(r"^[A-Za-z]+$"));
static ALPHANUMERIC_PATTERN: LazyLock<Regex> = LazyLock::new(|| pattern(r"^[A-Za-z0-9]+$"));
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| pattern(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"));
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| pattern(r"^1[3-9]\d{9}$"));

/// Outcome of validating one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValidation {
    is_valid: bool,
    error: Option<String>,
}

impl FieldValidation {
    fn valid() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }

    /// Returns whether the field passed validation.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Returns the failure message when validation failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

fn required_message(field: &Field) -> &str {
    match field.control() {
        FieldControl::SingleSelect(_) => messages::REQUIRED_SELECT,
        FieldControl::MultiSelect(_) => messages::REQUIRED_MULTI_SELECT,
        FieldControl::Date(_) => messages::REQUIRED_DATE,
        FieldControl::Time(_) => messages::REQUIRED_TIME,
        FieldControl::DateTime(_) => messages::REQUIRED_DATE_TIME,
        _ => messages::REQUIRED,
    }
}

fn fail(field: &Field, default_message: impl Into<String>) -> FieldValidation {
    match field.error_message() {
        Some(custom) => FieldValidation::invalid(custom),
        None => FieldValidation::invalid(default_message.into()),
    }
}

fn check_selection_range(
    field: &Field,
    count: usize,
    min_select: Option<usize>,
    max_select: Option<usize>,
) -> FieldValidation {
    if let Some(min) = min_select.filter(|min| *min > 0)
        && count < min
    {
        return fail(field, messages::min_select(min));
    }
    if let Some(max) = max_select.filter(|max| *max > 0)
        && count > max
    {
        return fail(field, messages::max_select(max));
    }

    FieldValidation::valid()
}

fn check_text(field: &Field, value: &FieldValue) -> FieldValidation {
    let FieldControl::Text(config) = field.control() else {
        return FieldValidation::valid();
    };
    let Some(text) = value.as_single() else {
        return FieldValidation::valid();
    };

    if config.max_length > 0 && text.chars().count() > config.max_length {
        return fail(field, messages::max_length_exceeded(config.max_length));
    }

    let failure = match config.input_type {
        TextInputType::None => None,
        TextInputType::Number => {
            (!NUMBER_PATTERN.is_match(text)).then_some(messages::INVALID_NUMBER)
        }
        TextInputType::Letter => {
            (!LETTER_PATTERN.is_match(text)).then_some(messages::INVALID_LETTER)
        }
        TextInputType::Alphanumeric => {
            (!ALPHANUMERIC_PATTERN.is_match(text)).then_some(messages::INVALID_ALPHANUMERIC)
        }
        TextInputType::Email => (!EMAIL_PATTERN.is_match(text)).then_some(messages::INVALID_EMAIL),
        TextInputType::Phone => (!PHONE_PATTERN.is_match(text)).then_some(messages::INVALID_PHONE),
        TextInputType::Url => Url::parse(text).is_err().then_some(messages::INVALID_URL),
    };

    match failure {
        Some(message) => fail(field, message),
        None => FieldValidation::valid(),
    }
}

/// Validates one field against its current value.
///
/// Composite containers hold no value and always pass. The required check
/// runs first; type-specific checks only run for a present, non-empty
/// value. The field's configured `error_message` overrides every default
/// failure message.
#[must_use]
pub fn validate_field(field: &Field, value: Option<&FieldValue>) -> FieldValidation {
    if field.is_composite() {
        return FieldValidation::valid();
    }

    let present = value.is_some_and(|value| !value.is_empty());
    if field.required() && !present {
        return fail(field, required_message(field));
    }
    if !present {
        return FieldValidation::valid();
    }
    let Some(value) = value else {
        return FieldValidation::valid();
    };

    match field.control() {
        FieldControl::Text(_) => check_text(field, value),
        FieldControl::SingleChoice(config) if config.option_type == OptionKind::Checkbox => {
            check_selection_range(
                field,
                value.selection_count(),
                config.min_select,
                config.max_select,
            )
        }
        FieldControl::MultiSelect(config) => check_selection_range(
            field,
            value.selection_count(),
            config.min_select,
            config.max_select,
        ),
        _ => FieldValidation::valid(),
    }
}

/// Aggregate outcome of validating a whole form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    errors: BTreeMap<String, String>,
    first_invalid: Option<String>,
}

impl ValidationReport {
    /// Returns whether every field passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns per-field failure messages.
    #[must_use]
    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    /// Returns the first invalid field in render order; the scroll anchor
    /// for the global error notification.
    #[must_use]
    pub fn first_invalid(&self) -> Option<&str> {
        self.first_invalid.as_deref()
    }
}

/// Validates every field against the form-state snapshot.
///
/// Fields are evaluated in render order (`order`-sorted, stable ties) and
/// never short-circuited, so all errors surface together.
#[must_use]
pub fn validate_all(fields: &[Field], state: &FormState) -> ValidationReport {
    let mut ordered: Vec<&Field> = fields.iter().collect();
    ordered.sort_by_key(|field| field.order());

    let mut errors = BTreeMap::new();
    let mut first_invalid = None;
    for field in ordered {
        let result = validate_field(field, state.get(field.id()));
        if result.is_valid() {
            continue;
        }

        if first_invalid.is_none() {
            first_invalid = Some(field.id().to_owned());
        }
        errors.insert(
            field.id().to_owned(),
            result.error().unwrap_or(messages::REQUIRED).to_owned(),
        );
    }

    ValidationReport {
        errors,
        first_invalid,
    }
}

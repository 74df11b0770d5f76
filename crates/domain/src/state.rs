use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::field::{Field, FieldControl, OptionKind};

/// Current value of one field; scalar for single-valued controls, list for
/// checkbox groups and multi selects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Scalar string value.
    Single(String),
    /// List of stored option values.
    Many(Vec<String>),
}

impl FieldValue {
    /// Returns an empty scalar value.
    #[must_use]
    pub fn empty() -> Self {
        Self::Single(String::new())
    }

    /// Canonical emptiness test: empty string or empty list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(value) => value.is_empty(),
            Self::Many(values) => values.is_empty(),
        }
    }

    /// Returns the scalar value when this is one.
    #[must_use]
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(value) => Some(value.as_str()),
            Self::Many(_) => None,
        }
    }

    /// Returns the value list when this is one.
    #[must_use]
    pub fn as_many(&self) -> Option<&[String]> {
        match self {
            Self::Single(_) => None,
            Self::Many(values) => Some(values.as_slice()),
        }
    }

    /// Number of selected entries; a scalar counts as one when non-empty.
    #[must_use]
    pub fn selection_count(&self) -> usize {
        match self {
            Self::Single(value) => usize::from(!value.is_empty()),
            Self::Many(values) => values.len(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(values: Vec<String>) -> Self {
        Self::Many(values)
    }
}

/// Live mapping of field id to current value for one form instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormState {
    values: BTreeMap<String, FieldValue>,
}

impl FormState {
    /// Creates an empty state with no seeded entries.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives the initial snapshot from each field's default or derivable
    /// value. Composite containers hold no value and get no entry.
    #[must_use]
    pub fn seeded(fields: &[Field]) -> Self {
        let mut values = BTreeMap::new();

        for field in fields {
            let seeded = match field.control() {
                FieldControl::Text(config) => {
                    FieldValue::Single(config.default_value.clone().unwrap_or_default())
                }
                FieldControl::SingleChoice(config) => match config.option_type {
                    OptionKind::Checkbox => FieldValue::Many(
                        config
                            .options
                            .iter()
                            .filter(|option| option.default_checked)
                            .map(|option| option.storable_value().to_owned())
                            .collect(),
                    ),
                    OptionKind::Radio | OptionKind::Tag => FieldValue::Single(
                        config
                            .options
                            .iter()
                            .find(|option| option.default_checked)
                            .map(|option| option.storable_value().to_owned())
                            .unwrap_or_default(),
                    ),
                },
                FieldControl::SingleSelect(config) => {
                    FieldValue::Single(config.default_value.clone().unwrap_or_default())
                }
                FieldControl::MultiSelect(config) => {
                    FieldValue::Many(config.default_value.clone())
                }
                FieldControl::Date(config) => {
                    FieldValue::Single(config.default_value.clone().unwrap_or_default())
                }
                FieldControl::Time(config) => {
                    FieldValue::Single(config.default_value.clone().unwrap_or_default())
                }
                FieldControl::DateTime(config) => {
                    FieldValue::Single(config.default_value.clone().unwrap_or_default())
                }
                FieldControl::Composite(_) => continue,
            };

            values.insert(field.id().to_owned(), seeded);
        }

        Self { values }
    }

    /// Returns the current value of a field.
    #[must_use]
    pub fn get(&self, field_id: &str) -> Option<&FieldValue> {
        self.values.get(field_id)
    }

    /// Stores the current value of a field.
    pub fn set(&mut self, field_id: impl Into<String>, value: FieldValue) {
        self.values.insert(field_id.into(), value);
    }

    /// Returns every stored entry.
    #[must_use]
    pub fn entries(&self) -> &BTreeMap<String, FieldValue> {
        &self.values
    }

    /// Returns whether a field currently holds a non-empty value.
    #[must_use]
    pub fn has_value(&self, field_id: &str) -> bool {
        self.values
            .get(field_id)
            .is_some_and(|value| !value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use formweaver_core::NonEmptyString;

    use crate::field::{
        ChoiceConfig, Field, FieldCommon, FieldControl, MultiSelectConfig, OptionDirection,
        OptionItem, OptionKind, TextConfig,
    };

    use super::{FieldValue, FormState};

    fn common(id: &str) -> FieldCommon {
        FieldCommon::new(id, "Field", false, 0).unwrap_or_else(|_| unreachable!())
    }

    fn option(label: &str, value: Option<&str>, checked: bool) -> OptionItem {
        OptionItem {
            id: NonEmptyString::new(format!("opt_{label}")).unwrap_or_else(|_| unreachable!()),
            label: label.to_owned(),
            value: value.map(str::to_owned),
            default_checked: checked,
            order: 0,
        }
    }

    #[test]
    fn seeds_text_from_default_value() {
        let field = Field::new(
            common("f1"),
            FieldControl::Text(TextConfig {
                default_value: Some("hello".to_owned()),
                ..TextConfig::default()
            }),
        );

        let state = FormState::seeded(&[field]);
        assert_eq!(state.get("f1"), Some(&FieldValue::Single("hello".to_owned())));
    }

    #[test]
    fn seeds_checkbox_group_from_checked_options() {
        let field = Field::new(
            common("f1"),
            FieldControl::SingleChoice(ChoiceConfig {
                option_type: OptionKind::Checkbox,
                options: vec![
                    option("A", Some("a"), true),
                    option("B", None, false),
                    option("C", None, true),
                ],
                default_value: None,
                min_select: None,
                max_select: None,
                direction: OptionDirection::Horizontal,
            }),
        );

        let state = FormState::seeded(&[field]);
        assert_eq!(
            state.get("f1"),
            Some(&FieldValue::Many(vec!["a".to_owned(), "C".to_owned()]))
        );
    }

    #[test]
    fn seeds_radio_group_from_first_checked_option() {
        let field = Field::new(
            common("f1"),
            FieldControl::SingleChoice(ChoiceConfig {
                option_type: OptionKind::Radio,
                options: vec![option("A", None, false), option("B", Some("b"), true)],
                default_value: None,
                min_select: None,
                max_select: None,
                direction: OptionDirection::Horizontal,
            }),
        );

        let state = FormState::seeded(&[field]);
        assert_eq!(state.get("f1"), Some(&FieldValue::Single("b".to_owned())));
    }

    #[test]
    fn seeds_multi_select_from_default_list() {
        let field = Field::new(
            common("f1"),
            FieldControl::MultiSelect(MultiSelectConfig {
                placeholder: None,
                options: vec![option("A", None, false)],
                default_value: vec!["A".to_owned()],
                min_select: None,
                max_select: None,
            }),
        );

        let state = FormState::seeded(&[field]);
        assert_eq!(
            state.get("f1"),
            Some(&FieldValue::Many(vec!["A".to_owned()]))
        );
    }

    #[test]
    fn empty_list_and_empty_string_are_empty() {
        assert!(FieldValue::empty().is_empty());
        assert!(FieldValue::Many(Vec::new()).is_empty());
        assert!(!FieldValue::Single("x".to_owned()).is_empty());
        assert!(!FieldValue::Many(vec!["x".to_owned()]).is_empty());
    }
}

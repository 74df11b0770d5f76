use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use formweaver_core::{AppError, AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};

/// Supported field types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldType {
    /// Single-line text input.
    Text,
    /// Radio, checkbox or tag option group.
    SingleChoice,
    /// Dropdown single select.
    SingleSelect,
    /// Dropdown multi select.
    MultiSelect,
    /// Date picker.
    Date,
    /// Time picker.
    Time,
    /// Combined date and time picker.
    DateTime,
    /// Container laying out other fields in weighted columns.
    Composite,
}

impl FieldType {
    /// Returns stable storage value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::SingleChoice => "singleChoice",
            Self::SingleSelect => "singleSelect",
            Self::MultiSelect => "multiSelect",
            Self::Date => "date",
            Self::Time => "time",
            Self::DateTime => "dateTime",
            Self::Composite => "composite",
        }
    }

    /// Returns the prefix used for generated field identifiers.
    #[must_use]
    pub fn id_prefix(&self) -> &'static str {
        match self {
            Self::Text => "input",
            Self::SingleChoice => "option",
            Self::SingleSelect => "select",
            Self::MultiSelect => "multiSelect",
            Self::Date => "datePicker",
            Self::Time => "timePicker",
            Self::DateTime => "dateTimePicker",
            Self::Composite => "composite",
        }
    }
}

impl FromStr for FieldType {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "text" => Ok(Self::Text),
            "singleChoice" => Ok(Self::SingleChoice),
            "singleSelect" => Ok(Self::SingleSelect),
            "multiSelect" => Ok(Self::MultiSelect),
            "date" => Ok(Self::Date),
            "time" => Ok(Self::Time),
            "dateTime" => Ok(Self::DateTime),
            "composite" => Ok(Self::Composite),
            _ => Err(AppError::Validation(format!(
                "unknown field type '{value}'"
            ))),
        }
    }
}

/// Horizontal alignment of a field or button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormAlign {
    /// Align to the left edge.
    #[default]
    Left,
    /// Center within the row.
    Center,
    /// Align to the right edge.
    Right,
}

/// Width behavior of a field or button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldWidth {
    /// Sized to content.
    #[default]
    Auto,
    /// Stretched to the full row.
    Full,
}

fn default_label_spacing() -> i32 {
    8
}

/// Attributes shared by every field variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldCommon {
    /// Unique identifier within a form; form-state key and scroll anchor.
    pub id: NonEmptyString,
    /// Display label.
    pub name: NonEmptyString,
    /// Whether a non-empty value is needed to submit.
    #[serde(default)]
    pub required: bool,
    /// Render sequence; ties broken by original list position.
    #[serde(default)]
    pub order: i32,
    /// Overrides every validation failure message for this field.
    #[serde(default)]
    pub error_message: Option<String>,
    /// Gap between label and control, in pixels.
    #[serde(default = "default_label_spacing")]
    pub label_spacing: i32,
    /// Label font size override, in pixels.
    #[serde(default)]
    pub label_font_size: Option<i32>,
    /// Horizontal alignment.
    #[serde(default)]
    pub align: FormAlign,
    /// Width behavior.
    #[serde(default)]
    pub width: FieldWidth,
    /// Whether the parent-link visibility dependency is active in the editor.
    #[serde(default)]
    pub enable_parent_link: bool,
    /// Field whose current value gates this field's visibility.
    #[serde(default)]
    pub parent_field_id: Option<String>,
    /// Parent value that makes this field visible.
    #[serde(default)]
    pub parent_option_value: Option<String>,
}

impl FieldCommon {
    /// Creates common attributes with presentation defaults.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        required: bool,
        order: i32,
    ) -> AppResult<Self> {
        Ok(Self {
            id: NonEmptyString::new(id)?,
            name: NonEmptyString::new(name)?,
            required,
            order,
            error_message: None,
            label_spacing: default_label_spacing(),
            label_font_size: None,
            align: FormAlign::Left,
            width: FieldWidth::Auto,
            enable_parent_link: false,
            parent_field_id: None,
            parent_option_value: None,
        })
    }
}

/// One selectable option of a choice or select field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionItem {
    /// Stable option identifier.
    pub id: NonEmptyString,
    /// Display label.
    pub label: String,
    /// Stored value; falls back to the label when absent.
    #[serde(default)]
    pub value: Option<String>,
    /// Whether the option is pre-selected in a fresh form state.
    #[serde(default)]
    pub default_checked: bool,
    /// Render sequence inside the option list.
    #[serde(default)]
    pub order: i32,
}

impl OptionItem {
    /// Creates an option with no explicit stored value.
    pub fn new(id: impl Into<String>, label: impl Into<String>, order: i32) -> AppResult<Self> {
        Ok(Self {
            id: NonEmptyString::new(id)?,
            label: label.into(),
            value: None,
            default_checked: false,
            order,
        })
    }

    /// Returns the stored and compared representation of this option.
    ///
    /// This is the single point where options convert to storable values;
    /// every comparison and every seeded default goes through it.
    #[must_use]
    pub fn storable_value(&self) -> &str {
        self.value.as_deref().unwrap_or(&self.label)
    }
}

/// Input restriction applied to a text field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextInputType {
    /// No restriction.
    #[default]
    None,
    /// Digits only.
    Number,
    /// ASCII letters only.
    Letter,
    /// ASCII letters and digits only.
    Alphanumeric,
    /// Email address shape.
    Email,
    /// Eleven-digit mobile number.
    Phone,
    /// Absolute URL.
    Url,
}

/// Presentation of a single-choice option group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OptionKind {
    /// Radio buttons.
    #[default]
    Radio,
    /// Checkboxes; allows multiple selections.
    Checkbox,
    /// Clickable tags.
    Tag,
}

/// Flow direction of an option group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OptionDirection {
    /// Options flow left to right.
    #[default]
    Horizontal,
    /// Options stack top to bottom.
    Vertical,
}

/// Date display and parse format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateFormat {
    /// ISO-style year first.
    #[default]
    #[serde(rename = "YYYY-MM-DD")]
    YearMonthDay,
    /// US-style month first.
    #[serde(rename = "MM/DD/YYYY")]
    MonthDayYear,
    /// Day-first format.
    #[serde(rename = "DD/MM/YYYY")]
    DayMonthYear,
}

impl DateFormat {
    /// Returns the chrono format string for this display format.
    #[must_use]
    pub fn chrono_format(&self) -> &'static str {
        match self {
            Self::YearMonthDay => "%Y-%m-%d",
            Self::MonthDayYear => "%m/%d/%Y",
            Self::DayMonthYear => "%d/%m/%Y",
        }
    }
}

/// Time display and parse format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeFormat {
    /// Hours and minutes.
    #[default]
    #[serde(rename = "HH:mm")]
    HourMinute,
    /// Hours, minutes and seconds.
    #[serde(rename = "HH:mm:ss")]
    HourMinuteSecond,
}

impl TimeFormat {
    /// Returns the chrono format string for this display format.
    #[must_use]
    pub fn chrono_format(&self) -> &'static str {
        match self {
            Self::HourMinute => "%H:%M",
            Self::HourMinuteSecond => "%H:%M:%S",
        }
    }
}

fn default_max_length() -> usize {
    200
}

fn default_time_interval() -> u32 {
    30
}

fn default_width_ratios() -> String {
    "1:1".to_owned()
}

/// Default child capacity of a composite group.
pub const DEFAULT_MAX_CHILDREN: usize = 4;

/// Child capacity of a composite group inside a full-width form.
pub const FULL_WIDTH_MAX_CHILDREN: usize = 8;

fn default_max_children() -> usize {
    DEFAULT_MAX_CHILDREN
}

/// Configuration of a text field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextConfig {
    /// Hint shown while the field is empty.
    #[serde(default)]
    pub placeholder: Option<String>,
    /// Initial value in a fresh form state.
    #[serde(default)]
    pub default_value: Option<String>,
    /// Maximum accepted length in characters.
    #[serde(default = "default_max_length")]
    pub max_length: usize,
    /// Input restriction.
    #[serde(default)]
    pub input_type: TextInputType,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            placeholder: None,
            default_value: None,
            max_length: default_max_length(),
            input_type: TextInputType::None,
        }
    }
}

/// Default value of a single-choice field; scalar for radio/tag,
/// list for checkbox groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChoiceDefault {
    /// Single stored value.
    One(String),
    /// Several stored values.
    Many(Vec<String>),
}

/// Configuration of a radio/checkbox/tag option group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceConfig {
    /// Presentation of the option group.
    #[serde(default)]
    pub option_type: OptionKind,
    /// Selectable options.
    pub options: Vec<OptionItem>,
    /// Explicit default value; seeding derives from `default_checked`.
    #[serde(default)]
    pub default_value: Option<ChoiceDefault>,
    /// Minimum selected count for checkbox groups; 0/absent is unbounded.
    #[serde(default)]
    pub min_select: Option<usize>,
    /// Maximum selected count for checkbox groups; 0/absent is unbounded.
    #[serde(default)]
    pub max_select: Option<usize>,
    /// Flow direction.
    #[serde(default)]
    pub direction: OptionDirection,
}

/// Configuration of a dropdown single select.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectConfig {
    /// Hint shown while nothing is selected.
    #[serde(default)]
    pub placeholder: Option<String>,
    /// Selectable options.
    pub options: Vec<OptionItem>,
    /// Initial value in a fresh form state.
    #[serde(default)]
    pub default_value: Option<String>,
}

/// Configuration of a dropdown multi select.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiSelectConfig {
    /// Hint shown while nothing is selected.
    #[serde(default)]
    pub placeholder: Option<String>,
    /// Selectable options.
    pub options: Vec<OptionItem>,
    /// Initial values in a fresh form state.
    #[serde(default)]
    pub default_value: Vec<String>,
    /// Minimum selected count; 0/absent is unbounded.
    #[serde(default)]
    pub min_select: Option<usize>,
    /// Maximum selected count; 0/absent is unbounded.
    #[serde(default)]
    pub max_select: Option<usize>,
}

/// Configuration of a date picker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateConfig {
    /// Hint shown while the field is empty.
    #[serde(default)]
    pub placeholder: Option<String>,
    /// Initial value, formatted per `date_format`.
    #[serde(default)]
    pub default_value: Option<String>,
    /// Display and parse format.
    #[serde(default)]
    pub date_format: DateFormat,
    /// Earliest selectable date, formatted per `date_format`.
    #[serde(default)]
    pub min_date: Option<String>,
    /// Latest selectable date, formatted per `date_format`.
    #[serde(default)]
    pub max_date: Option<String>,
}

impl DateConfig {
    /// Parses the configured min/max into calendar dates.
    ///
    /// Bounds that do not parse per the declared format are dropped, the
    /// picker then falls back to an unbounded edge.
    #[must_use]
    pub fn date_bounds(&self) -> (Option<NaiveDate>, Option<NaiveDate>) {
        let parse = |bound: Option<&str>| {
            bound.and_then(|value| {
                NaiveDate::parse_from_str(value, self.date_format.chrono_format()).ok()
            })
        };
        (parse(self.min_date.as_deref()), parse(self.max_date.as_deref()))
    }
}

/// Configuration of a time picker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeConfig {
    /// Hint shown while the field is empty.
    #[serde(default)]
    pub placeholder: Option<String>,
    /// Initial value, formatted per `time_format`.
    #[serde(default)]
    pub default_value: Option<String>,
    /// Display and parse format.
    #[serde(default)]
    pub time_format: TimeFormat,
    /// Step between selectable times, in minutes.
    #[serde(default = "default_time_interval")]
    pub time_interval: u32,
    /// Earliest selectable time, formatted per `time_format`.
    #[serde(default)]
    pub min_time: Option<String>,
    /// Latest selectable time, formatted per `time_format`.
    #[serde(default)]
    pub max_time: Option<String>,
}

impl TimeConfig {
    /// Parses the configured min/max into times of day.
    #[must_use]
    pub fn time_bounds(&self) -> (Option<NaiveTime>, Option<NaiveTime>) {
        let parse = |bound: Option<&str>| {
            bound.and_then(|value| {
                NaiveTime::parse_from_str(value, self.time_format.chrono_format()).ok()
            })
        };
        (parse(self.min_time.as_deref()), parse(self.max_time.as_deref()))
    }
}

/// Configuration of a combined date and time picker; the value string is
/// `"<date> <time>"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateTimeConfig {
    /// Hint shown while the field is empty.
    #[serde(default)]
    pub placeholder: Option<String>,
    /// Initial value, formatted per the combined formats.
    #[serde(default)]
    pub default_value: Option<String>,
    /// Date half display and parse format.
    #[serde(default)]
    pub date_format: DateFormat,
    /// Time half display and parse format.
    #[serde(default)]
    pub time_format: TimeFormat,
    /// Step between selectable times, in minutes.
    #[serde(default = "default_time_interval")]
    pub time_interval: u32,
    /// Earliest selectable instant.
    #[serde(default)]
    pub min_date_time: Option<String>,
    /// Latest selectable instant.
    #[serde(default)]
    pub max_date_time: Option<String>,
}

impl DateTimeConfig {
    /// Parses the configured min/max into naive timestamps.
    #[must_use]
    pub fn date_time_bounds(&self) -> (Option<NaiveDateTime>, Option<NaiveDateTime>) {
        let format = format!(
            "{} {}",
            self.date_format.chrono_format(),
            self.time_format.chrono_format()
        );
        let parse = |bound: Option<&str>| {
            bound.and_then(|value| NaiveDateTime::parse_from_str(value, &format).ok())
        };
        (
            parse(self.min_date_time.as_deref()),
            parse(self.max_date_time.as_deref()),
        )
    }
}

fn ratio_tokens(width_ratios: &str) -> Vec<String> {
    width_ratios
        .split(':')
        .map(|token| token.trim().to_owned())
        .collect()
}

/// Configuration of a composite group laying out child fields in columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeConfig {
    /// Ordered ids of the child fields; children cannot be composite.
    #[serde(default)]
    pub children: Vec<String>,
    /// Colon-separated column weights, each a positive integer or `auto`.
    #[serde(default = "default_width_ratios")]
    pub width_ratios: String,
    /// Maximum number of children.
    #[serde(default = "default_max_children")]
    pub max_children: usize,
}

impl Default for CompositeConfig {
    fn default() -> Self {
        Self {
            children: Vec::new(),
            width_ratios: default_width_ratios(),
            max_children: DEFAULT_MAX_CHILDREN,
        }
    }
}

impl CompositeConfig {
    /// Appends a child id, keeping the ratio-token count tracking the
    /// child count when it did so before.
    pub fn add_child(&mut self, child_id: impl Into<String>) -> AppResult<()> {
        let child_id = child_id.into();
        if self.children.len() >= self.max_children {
            return Err(AppError::Validation(format!(
                "composite group is limited to {} children",
                self.max_children
            )));
        }
        if self.children.contains(&child_id) {
            return Err(AppError::Conflict(format!(
                "field '{child_id}' is already a child of this group"
            )));
        }

        let mut tokens = ratio_tokens(&self.width_ratios);
        if tokens.len() == self.children.len() {
            tokens.push("1".to_owned());
            self.width_ratios = tokens.join(":");
        }
        self.children.push(child_id);
        Ok(())
    }

    /// Removes a child id and drops its ratio token when the token count
    /// tracked the child count. Unknown ids are ignored.
    pub fn remove_child(&mut self, child_id: &str) {
        let Some(position) = self.children.iter().position(|id| id == child_id) else {
            return;
        };

        let mut tokens = ratio_tokens(&self.width_ratios);
        if tokens.len() == self.children.len() {
            tokens.remove(position);
            self.width_ratios = tokens.join(":");
        }
        self.children.remove(position);
    }
}

/// Variant-specific configuration, discriminated by the wire `type` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FieldControl {
    /// Single-line text input.
    Text(TextConfig),
    /// Radio, checkbox or tag option group.
    SingleChoice(ChoiceConfig),
    /// Dropdown single select.
    SingleSelect(SelectConfig),
    /// Dropdown multi select.
    MultiSelect(MultiSelectConfig),
    /// Date picker.
    Date(DateConfig),
    /// Time picker.
    Time(TimeConfig),
    /// Combined date and time picker.
    DateTime(DateTimeConfig),
    /// Column container for other fields.
    Composite(CompositeConfig),
}

impl FieldControl {
    /// Returns the discriminant of this control.
    #[must_use]
    pub fn field_type(&self) -> FieldType {
        match self {
            Self::Text(_) => FieldType::Text,
            Self::SingleChoice(_) => FieldType::SingleChoice,
            Self::SingleSelect(_) => FieldType::SingleSelect,
            Self::MultiSelect(_) => FieldType::MultiSelect,
            Self::Date(_) => FieldType::Date,
            Self::Time(_) => FieldType::Time,
            Self::DateTime(_) => FieldType::DateTime,
            Self::Composite(_) => FieldType::Composite,
        }
    }
}

/// One configured field of a form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    #[serde(flatten)]
    common: FieldCommon,
    #[serde(flatten)]
    control: FieldControl,
}

impl Field {
    /// Creates a field from common attributes and a control configuration.
    #[must_use]
    pub fn new(common: FieldCommon, control: FieldControl) -> Self {
        Self { common, control }
    }

    /// Returns the unique field identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        self.common.id.as_str()
    }

    /// Returns the display label.
    #[must_use]
    pub fn name(&self) -> &str {
        self.common.name.as_str()
    }

    /// Returns the common attributes.
    #[must_use]
    pub fn common(&self) -> &FieldCommon {
        &self.common
    }

    /// Returns the mutable common attributes.
    pub fn common_mut(&mut self) -> &mut FieldCommon {
        &mut self.common
    }

    /// Returns the variant-specific configuration.
    #[must_use]
    pub fn control(&self) -> &FieldControl {
        &self.control
    }

    /// Returns the mutable variant-specific configuration.
    pub fn control_mut(&mut self) -> &mut FieldControl {
        &mut self.control
    }

    /// Returns the field type discriminant.
    #[must_use]
    pub fn field_type(&self) -> FieldType {
        self.control.field_type()
    }

    /// Returns whether this field is a composite container.
    #[must_use]
    pub fn is_composite(&self) -> bool {
        matches!(self.control, FieldControl::Composite(_))
    }

    /// Returns whether a non-empty value is needed to submit.
    #[must_use]
    pub fn required(&self) -> bool {
        self.common.required
    }

    /// Returns the render order.
    #[must_use]
    pub fn order(&self) -> i32 {
        self.common.order
    }

    /// Returns the configured validation message override.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.common.error_message.as_deref()
    }

    /// Returns the visibility-gating parent field id.
    #[must_use]
    pub fn parent_field_id(&self) -> Option<&str> {
        self.common.parent_field_id.as_deref()
    }

    /// Returns the parent value that makes this field visible.
    #[must_use]
    pub fn parent_option_value(&self) -> Option<&str> {
        self.common.parent_option_value.as_deref()
    }

    /// Returns the option list for choice and select variants.
    #[must_use]
    pub fn options(&self) -> Option<&[OptionItem]> {
        match &self.control {
            FieldControl::SingleChoice(config) => Some(&config.options),
            FieldControl::SingleSelect(config) => Some(&config.options),
            FieldControl::MultiSelect(config) => Some(&config.options),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        CompositeConfig, DateConfig, DateFormat, Field, FieldCommon, FieldControl, FieldType,
        OptionItem, TextConfig,
    };

    fn text_field(id: &str) -> Field {
        let common = FieldCommon::new(id, "Name", false, 0).unwrap_or_else(|_| unreachable!());
        Field::new(common, FieldControl::Text(TextConfig::default()))
    }

    #[test]
    fn field_type_round_trips_stable_values() {
        for field_type in [
            FieldType::Text,
            FieldType::SingleChoice,
            FieldType::SingleSelect,
            FieldType::MultiSelect,
            FieldType::Date,
            FieldType::Time,
            FieldType::DateTime,
            FieldType::Composite,
        ] {
            let parsed: FieldType = field_type
                .as_str()
                .parse()
                .unwrap_or_else(|_| unreachable!());
            assert_eq!(parsed, field_type);
        }
    }

    #[test]
    fn option_value_falls_back_to_label() {
        let mut option =
            OptionItem::new("opt_1", "Option 1", 0).unwrap_or_else(|_| unreachable!());
        assert_eq!(option.storable_value(), "Option 1");

        option.value = Some("one".to_owned());
        assert_eq!(option.storable_value(), "one");
    }

    #[test]
    fn field_serializes_flat_with_type_tag() {
        let value =
            serde_json::to_value(text_field("input_a1")).unwrap_or_else(|_| unreachable!());
        assert_eq!(value["type"], "text");
        assert_eq!(value["id"], "input_a1");
        assert_eq!(value["maxLength"], 200);

        let parsed: Field = serde_json::from_value(value).unwrap_or_else(|_| unreachable!());
        assert_eq!(parsed.field_type(), FieldType::Text);
    }

    #[test]
    fn add_child_appends_matching_ratio_token() {
        let mut composite = CompositeConfig {
            children: vec!["a".to_owned()],
            width_ratios: "2".to_owned(),
            max_children: 4,
        };

        composite
            .add_child("b")
            .unwrap_or_else(|_| unreachable!());
        assert_eq!(composite.width_ratios, "2:1");
        assert_eq!(composite.children, vec!["a".to_owned(), "b".to_owned()]);
    }

    #[test]
    fn add_child_rejects_full_group() {
        let mut composite = CompositeConfig {
            children: vec!["a".to_owned(), "b".to_owned()],
            width_ratios: "1:1".to_owned(),
            max_children: 2,
        };

        assert!(composite.add_child("c").is_err());
    }

    #[test]
    fn remove_child_drops_its_ratio_token() {
        let mut composite = CompositeConfig {
            children: vec!["a".to_owned(), "b".to_owned(), "c".to_owned()],
            width_ratios: "1:2:3".to_owned(),
            max_children: 4,
        };

        composite.remove_child("b");
        assert_eq!(composite.width_ratios, "1:3");
        assert_eq!(composite.children, vec!["a".to_owned(), "c".to_owned()]);
    }

    #[test]
    fn remove_child_keeps_mismatched_ratios_untouched() {
        let mut composite = CompositeConfig {
            children: vec!["a".to_owned(), "b".to_owned()],
            width_ratios: "1:1:1".to_owned(),
            max_children: 4,
        };

        composite.remove_child("a");
        assert_eq!(composite.width_ratios, "1:1:1");
        assert_eq!(composite.children, vec!["b".to_owned()]);
    }

    #[test]
    fn date_bounds_parse_per_declared_format() {
        let config = DateConfig {
            date_format: DateFormat::MonthDayYear,
            min_date: Some("01/31/2026".to_owned()),
            max_date: Some("2026-12-31".to_owned()),
            ..DateConfig::default()
        };

        let (min, max) = config.date_bounds();
        assert_eq!(
            min.map(|date| date.to_string()),
            Some("2026-01-31".to_owned())
        );
        assert!(max.is_none());
    }
}

use std::str::FromStr;

use formweaver_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use crate::field::{FieldWidth, FormAlign};

/// Visual style of the submit button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ButtonStyle {
    /// Primary call-to-action.
    #[default]
    Primary,
    /// Secondary action.
    Secondary,
    /// Warning accent.
    Warning,
    /// Danger accent.
    Danger,
}

/// Size of the submit button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ButtonSize {
    /// Compact button.
    Small,
    /// Regular button.
    #[default]
    Medium,
    /// Prominent button.
    Large,
}

/// What happens to the form state after a successful submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AfterSubmit {
    /// Re-seed the state from field defaults and clear errors.
    #[default]
    Reset,
    /// Freeze the form; inputs become read-only.
    Disable,
    /// Leave state untouched.
    Keep,
}

/// Submit button settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitButton {
    /// Button caption.
    pub text: String,
    /// Visual style.
    #[serde(default)]
    pub style: ButtonStyle,
    /// Button size.
    #[serde(default)]
    pub size: ButtonSize,
    /// Message shown after a successful submission when the server
    /// provides none.
    pub success_message: String,
    /// Post-submit policy.
    #[serde(default)]
    pub after_submit: AfterSubmit,
    /// Horizontal alignment.
    #[serde(default)]
    pub align: FormAlign,
    /// Width behavior.
    #[serde(default)]
    pub width: FieldWidth,
}

impl Default for SubmitButton {
    fn default() -> Self {
        Self {
            text: "Submit".to_owned(),
            style: ButtonStyle::Primary,
            size: ButtonSize::Medium,
            success_message: "Submitted successfully".to_owned(),
            after_submit: AfterSubmit::Reset,
            align: FormAlign::Left,
            width: FieldWidth::Auto,
        }
    }
}

/// HTTP method of the submission recipe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    /// Data carried as query parameters.
    #[serde(rename = "GET")]
    Get,
    /// Data carried as a JSON body.
    #[default]
    #[serde(rename = "POST")]
    Post,
}

impl HttpMethod {
    /// Returns the wire method name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl FromStr for HttpMethod {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            _ => Err(AppError::Validation(format!(
                "unknown submit method '{value}'"
            ))),
        }
    }
}

/// One configured static parameter or header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValuePair {
    /// Entry key; entries with an empty key are skipped at build time.
    pub key: String,
    /// Entry value; entries with an empty value are skipped at build time.
    pub value: String,
}

impl KeyValuePair {
    /// Creates a key/value entry.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Returns whether both key and value are non-empty.
    #[must_use]
    pub fn is_populated(&self) -> bool {
        !self.key.is_empty() && !self.value.is_empty()
    }
}

/// Inclusive HTTP status range treated as success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRange {
    /// Lowest successful status.
    pub min: u16,
    /// Highest successful status.
    pub max: u16,
}

impl StatusRange {
    /// Creates a validated status range.
    pub fn new(min: u16, max: u16) -> AppResult<Self> {
        if min > max {
            return Err(AppError::Validation(format!(
                "status range minimum {min} exceeds maximum {max}"
            )));
        }

        Ok(Self { min, max })
    }

    /// Returns whether the status falls inside the range.
    #[must_use]
    pub fn contains(&self, status: u16) -> bool {
        status >= self.min && status <= self.max
    }
}

impl Default for StatusRange {
    fn default() -> Self {
        Self { min: 200, max: 299 }
    }
}

/// HTTP submission recipe of a form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitConfig {
    /// Whether submissions leave the widget at all.
    #[serde(default)]
    pub enabled: bool,
    /// HTTP method.
    #[serde(default)]
    pub method: HttpMethod,
    /// Endpoint URL.
    #[serde(default)]
    pub url: String,
    /// Static query parameters, appended before field values.
    #[serde(default)]
    pub params: Vec<KeyValuePair>,
    /// Static headers for POST submissions.
    #[serde(default)]
    pub headers: Vec<KeyValuePair>,
    /// Status range treated as success.
    #[serde(default)]
    pub success_status_range: StatusRange,
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            method: HttpMethod::Post,
            url: String::new(),
            params: Vec::new(),
            headers: Vec::new(),
            success_status_range: StatusRange::default(),
        }
    }
}

//! Single-locale message literals.
//!
//! Every user-facing string the engine produces lives here so a message
//! catalog can replace the module wholesale.

pub(crate) const REQUIRED: &str = "This field is required";
pub(crate) const REQUIRED_SELECT: &str = "Please select an option";
pub(crate) const REQUIRED_MULTI_SELECT: &str = "Please select at least one option";
pub(crate) const REQUIRED_DATE: &str = "Please select a date";
pub(crate) const REQUIRED_TIME: &str = "Please select a time";
pub(crate) const REQUIRED_DATE_TIME: &str = "Please select a date and time";

pub(crate) const INVALID_NUMBER: &str = "Please enter digits only";
pub(crate) const INVALID_LETTER: &str = "Please enter letters only";
pub(crate) const INVALID_ALPHANUMERIC: &str = "Please enter letters or digits only";
pub(crate) const INVALID_EMAIL: &str = "Please enter a valid email address";
pub(crate) const INVALID_PHONE: &str = "Please enter a valid phone number";
pub(crate) const INVALID_URL: &str = "Please enter a valid URL";

pub(crate) fn max_length_exceeded(max_length: usize) -> String {
    format!("Please enter at most {max_length} characters")
}

pub(crate) fn min_select(min: usize) -> String {
    format!("Please select at least {min} options")
}

pub(crate) fn max_select(max: usize) -> String {
    format!("Please select at most {max} options")
}

pub(crate) const SUBMIT_SUCCESS: &str = "Submitted successfully";
pub(crate) const SUBMIT_NETWORK_FAILURE: &str =
    "Submission failed, please check your network connection";
pub(crate) const FORM_INVALID: &str = "Please correct the highlighted fields";
pub(crate) const FORM_DISABLED: &str = "The form is no longer accepting input";
pub(crate) const SUBMIT_IN_FLIGHT: &str = "A submission is already in progress";
pub(crate) const SUBMIT_CANCELLED: &str = "Submission was cancelled";

pub(crate) fn submit_failed_status(status: u16) -> String {
    format!("Submission failed with status {status}")
}

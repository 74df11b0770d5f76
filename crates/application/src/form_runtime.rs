use std::collections::BTreeMap;

use formweaver_domain::{AfterSubmit, Field, FieldValue, FormDefinition, FormState};
use serde_json::Value;

use crate::messages;
use crate::submission_service::{SubmissionService, SubmitOutcome};
use crate::validation::{validate_all, validate_field};
use crate::visibility::is_visible;

/// One surfaced field error, in render order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Offending field id.
    pub field_id: String,
    /// Failure message.
    pub error: String,
}

/// Externally registered observation and veto callbacks.
///
/// Every hook is optional; absence never alters control flow. Hooks are
/// invoked synchronously in the documented order: `on_mount` at
/// construction, `on_change` after every value update, then on submit
/// `on_validate` (may veto), `on_submit` (may veto), and `on_error` when
/// validation blocks the attempt.
#[derive(Default)]
pub struct FormHooks {
    /// Observes the definition when the runtime comes up.
    pub on_mount: Option<Box<dyn Fn(&FormDefinition) + Send + Sync>>,
    /// Observes every value change.
    pub on_change: Option<Box<dyn Fn(&str, &FieldValue) + Send + Sync>>,
    /// May veto a validated submission by returning `false`.
    pub on_validate: Option<Box<dyn Fn(&[FieldError]) -> bool + Send + Sync>>,
    /// May veto the outgoing submission by returning `false`.
    pub on_submit: Option<Box<dyn Fn(&FormState) -> bool + Send + Sync>>,
    /// Observes validation errors that blocked a submit attempt.
    pub on_error: Option<Box<dyn Fn(&[FieldError]) + Send + Sync>>,
}

/// Observable phase of a form instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    /// Accepting input.
    Filling,
    /// A submission is in flight; the submit control must be inert.
    Submitting,
    /// Frozen by the `disable` post-submit policy.
    Disabled,
}

/// Orchestrates one form instance: holds current values, wires change and
/// blur events to the validator, applies the visibility resolver, invokes
/// the submission service and applies the post-submit policy.
///
/// The definition is never mutated here; only the form state is.
pub struct FormRuntime {
    definition: FormDefinition,
    submission: SubmissionService,
    state: FormState,
    errors: BTreeMap<String, String>,
    hooks: FormHooks,
    disabled: bool,
    submitting: bool,
}

impl FormRuntime {
    /// Creates a runtime for the given definition, seeds the state from
    /// field defaults and fires `on_mount`.
    #[must_use]
    pub fn new(definition: FormDefinition, submission: SubmissionService, hooks: FormHooks) -> Self {
        let state = FormState::seeded(definition.fields());
        if let Some(on_mount) = &hooks.on_mount {
            on_mount(&definition);
        }

        Self {
            definition,
            submission,
            state,
            errors: BTreeMap::new(),
            hooks,
            disabled: false,
            submitting: false,
        }
    }

    /// Returns the immutable definition.
    #[must_use]
    pub fn definition(&self) -> &FormDefinition {
        &self.definition
    }

    /// Returns the live form state.
    #[must_use]
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Returns the current value of a field.
    #[must_use]
    pub fn value(&self, field_id: &str) -> Option<&FieldValue> {
        self.state.get(field_id)
    }

    /// Returns the current per-field error messages.
    #[must_use]
    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    /// Returns the observable phase.
    #[must_use]
    pub fn status(&self) -> FormStatus {
        if self.submitting {
            FormStatus::Submitting
        } else if self.disabled {
            FormStatus::Disabled
        } else {
            FormStatus::Filling
        }
    }

    /// Returns whether the form is frozen.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Returns the first invalid field in render order; the anchor the
    /// rendering layer scrolls to after a blocked submit.
    #[must_use]
    pub fn first_invalid_field(&self) -> Option<&str> {
        self.definition
            .ordered_fields()
            .into_iter()
            .find(|field| self.errors.contains_key(field.id()))
            .map(Field::id)
    }

    /// Returns the top-level fields to render: sorted by `order`, filtered
    /// by the visibility resolver, composite children excluded (they
    /// render inside their group).
    #[must_use]
    pub fn visible_fields(&self) -> Vec<&Field> {
        let claimed = self.definition.composite_child_ids();
        self.definition
            .ordered_fields()
            .into_iter()
            .filter(|field| !claimed.contains(field.id()))
            .filter(|field| is_visible(field, &self.state))
            .collect()
    }

    fn revalidate_one(&mut self, field_id: &str) {
        let Some(field) = self.definition.field(field_id) else {
            return;
        };

        let result = validate_field(field, self.state.get(field_id));
        match result.error() {
            Some(error) if !result.is_valid() => {
                self.errors.insert(field_id.to_owned(), error.to_owned());
            }
            _ => {
                self.errors.remove(field_id);
            }
        }
    }

    /// Stores a changed value and re-validates that field only. Ignored
    /// while the form is frozen or for unknown field ids.
    pub fn set_value(&mut self, field_id: &str, value: FieldValue) {
        if self.disabled || self.definition.field(field_id).is_none() {
            return;
        }

        self.state.set(field_id.to_owned(), value);
        self.revalidate_one(field_id);

        if let Some(on_change) = &self.hooks.on_change
            && let Some(value) = self.state.get(field_id)
        {
            on_change(field_id, value);
        }
    }

    /// Re-validates the stored value of a field; catches cases where the
    /// change handler saw an intermediate value.
    pub fn blur(&mut self, field_id: &str) {
        if self.disabled {
            return;
        }
        self.revalidate_one(field_id);
    }

    fn ordered_errors(&self) -> Vec<FieldError> {
        self.definition
            .ordered_fields()
            .into_iter()
            .filter_map(|field| {
                self.errors.get(field.id()).map(|error| FieldError {
                    field_id: field.id().to_owned(),
                    error: error.clone(),
                })
            })
            .collect()
    }

    fn blocked(message: &str) -> SubmitOutcome {
        SubmitOutcome {
            success: false,
            message: message.to_owned(),
            payload: None,
        }
    }

    /// Runs the full submit sequence: whole-form validation, the
    /// `on_validate` and `on_submit` veto points, the submission service,
    /// then the configured post-submit policy.
    ///
    /// At most one submission is in flight per instance; re-entry while
    /// `Submitting` is rejected without touching state.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.submitting {
            return Self::blocked(messages::SUBMIT_IN_FLIGHT);
        }
        if self.disabled {
            return Self::blocked(messages::FORM_DISABLED);
        }

        let report = validate_all(self.definition.fields(), &self.state);
        self.errors = report.errors().clone();
        if !report.is_valid() {
            let errors = self.ordered_errors();
            if let Some(on_error) = &self.hooks.on_error {
                on_error(&errors);
            }
            return Self::blocked(messages::FORM_INVALID);
        }

        if let Some(on_validate) = &self.hooks.on_validate
            && !on_validate(&[])
        {
            return Self::blocked(messages::SUBMIT_CANCELLED);
        }
        if let Some(on_submit) = &self.hooks.on_submit
            && !on_submit(&self.state)
        {
            return Self::blocked(messages::SUBMIT_CANCELLED);
        }

        if !self.definition.submit_config().enabled {
            // Collection without delivery: the recipe is switched off.
            return SubmitOutcome {
                success: true,
                message: self.definition.submit_button().success_message.clone(),
                payload: None,
            };
        }

        self.submitting = true;
        let mut outcome = self
            .submission
            .submit(
                self.definition.submit_config(),
                &self.state,
                self.definition.fields(),
            )
            .await;
        self.submitting = false;

        if outcome.success {
            if outcome.message.is_empty() {
                outcome.message = self.definition.submit_button().success_message.clone();
            }
            match self.definition.submit_button().after_submit {
                AfterSubmit::Reset => self.reset(),
                AfterSubmit::Disable => self.disabled = true,
                AfterSubmit::Keep => {}
            }
        }

        outcome
    }

    /// Re-seeds the state from field defaults, clears errors and lifts the
    /// disabled flag.
    pub fn reset(&mut self) {
        self.state = FormState::seeded(self.definition.fields());
        self.errors.clear();
        self.disabled = false;
    }

    /// Returns the last submission payload shape without sending; handy
    /// for previews in the editor's submit panel.
    #[must_use]
    pub fn preview_payload(&self) -> Value {
        Value::Object(crate::submission_service::build_payload(
            &self.state,
            self.definition.fields(),
        ))
    }
}

//! Application services and ports for the form engine.

#![forbid(unsafe_code)]

mod component_registry;
mod composite_layout;
mod form_runtime;
mod host_ports;
mod messages;
mod submission_service;
mod validation;
mod visibility;

pub use component_registry::{ComponentDescriptor, ComponentRegistry};
pub use composite_layout::{ColumnWidth, resolve_children, resolve_columns};
pub use form_runtime::{FieldError, FormHooks, FormRuntime, FormStatus};
pub use host_ports::{
    ConfigChannel, ConfigListener, DashboardMode, PersistedDashboardConfig, ThemeChannel,
    ThemeListener, ThemeMode, ThemeSnapshot,
};
pub use submission_service::{
    build_headers, build_payload, build_request, build_url_with_params, SubmissionRequest,
    SubmissionResponse, SubmissionService, SubmissionTransport, SubmitOutcome,
};
pub use validation::{FieldValidation, validate_all, validate_field, ValidationReport};
pub use visibility::is_visible;

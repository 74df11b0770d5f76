//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod in_memory_config_channel;
mod in_memory_theme_channel;
mod reqwest_submission_transport;

pub use in_memory_config_channel::InMemoryConfigChannel;
pub use in_memory_theme_channel::InMemoryThemeChannel;
pub use reqwest_submission_transport::ReqwestSubmissionTransport;

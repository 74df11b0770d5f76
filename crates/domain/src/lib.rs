//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod field;
mod form;
mod state;
mod submit;

pub use field::{
    ChoiceConfig, ChoiceDefault, CompositeConfig, DateConfig, DateFormat, DateTimeConfig,
    DEFAULT_MAX_CHILDREN, Field, FieldCommon, FieldControl, FieldType, FieldWidth, FormAlign,
    FULL_WIDTH_MAX_CHILDREN, MultiSelectConfig, OptionDirection, OptionItem, OptionKind,
    SelectConfig, TextConfig, TextInputType, TimeConfig, TimeFormat,
};
pub use form::{FormDefinition, FormSettings, FormWidth};
pub use state::{FieldValue, FormState};
pub use submit::{
    AfterSubmit, ButtonSize, ButtonStyle, HttpMethod, KeyValuePair, StatusRange, SubmitButton,
    SubmitConfig,
};

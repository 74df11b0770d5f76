use std::collections::{HashMap, HashSet};

use formweaver_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use crate::field::{
    DEFAULT_MAX_CHILDREN, Field, FieldCommon, FieldControl, FieldType, FULL_WIDTH_MAX_CHILDREN,
    TextConfig,
};
use crate::submit::{SubmitButton, SubmitConfig};

/// Overall form width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormWidth {
    /// 300px column.
    #[default]
    Narrow,
    /// 500px column.
    Standard,
    /// 700px column.
    Wide,
    /// Stretch to the container.
    Full,
}

impl FormWidth {
    /// Returns the composite child capacity for forms of this width.
    #[must_use]
    pub fn max_composite_children(&self) -> usize {
        match self {
            Self::Full => FULL_WIDTH_MAX_CHILDREN,
            _ => DEFAULT_MAX_CHILDREN,
        }
    }
}

fn default_field_spacing() -> i32 {
    12
}

fn default_padding() -> i32 {
    16
}

fn default_border_radius() -> i32 {
    8
}

fn default_flag_on() -> bool {
    true
}

/// Layout and chrome settings of a form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSettings {
    /// Text shown above the fields.
    #[serde(default)]
    pub description: Option<String>,
    /// Overall form width.
    #[serde(default)]
    pub width: FormWidth,
    /// Vertical gap between fields, in pixels.
    #[serde(default = "default_field_spacing")]
    pub field_spacing: i32,
    /// Inner padding, in pixels.
    #[serde(default = "default_padding")]
    pub padding: i32,
    /// Whether the container draws a border.
    #[serde(default = "default_flag_on")]
    pub show_border: bool,
    /// Whether the container draws a drop shadow.
    #[serde(default = "default_flag_on")]
    pub show_shadow: bool,
    /// Container corner radius, in pixels.
    #[serde(default = "default_border_radius")]
    pub border_radius: i32,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            description: None,
            width: FormWidth::Narrow,
            field_spacing: default_field_spacing(),
            padding: default_padding(),
            show_border: true,
            show_shadow: true,
            border_radius: default_border_radius(),
        }
    }
}

/// The persisted, editor-authored description of a form: fields, layout,
/// submit button and submission recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDefinition {
    #[serde(flatten)]
    settings: FormSettings,
    #[serde(default)]
    fields: Vec<Field>,
    #[serde(default)]
    submit_button: SubmitButton,
    #[serde(default)]
    submit_config: SubmitConfig,
}

impl FormDefinition {
    /// Creates a validated form definition.
    pub fn new(
        settings: FormSettings,
        fields: Vec<Field>,
        submit_button: SubmitButton,
        submit_config: SubmitConfig,
    ) -> AppResult<Self> {
        Self::check_fields(&fields)?;

        Ok(Self {
            settings,
            fields,
            submit_button,
            submit_config,
        })
    }

    /// The built-in default: two required text fields and the standard
    /// submit recipe.
    #[must_use]
    pub fn standard() -> Self {
        let make_text = |id: &str, order: i32| {
            let common = FieldCommon::new(id, "Text input", true, order)
                .unwrap_or_else(|_| unreachable!());
            Field::new(
                common,
                FieldControl::Text(TextConfig {
                    placeholder: Some("Enter text".to_owned()),
                    ..TextConfig::default()
                }),
            )
        };

        Self {
            settings: FormSettings::default(),
            fields: vec![make_text("input_1", 0), make_text("input_2", 1)],
            submit_button: SubmitButton::default(),
            submit_config: SubmitConfig::default(),
        }
    }

    fn check_fields(fields: &[Field]) -> AppResult<()> {
        let mut seen = HashSet::new();
        for field in fields {
            if !seen.insert(field.id().to_owned()) {
                return Err(AppError::Conflict(format!(
                    "duplicate field id '{}' in form",
                    field.id()
                )));
            }
        }

        let types_by_id: HashMap<&str, FieldType> = fields
            .iter()
            .map(|field| (field.id(), field.field_type()))
            .collect();

        for field in fields {
            if let FieldControl::Composite(composite) = field.control() {
                if composite.children.len() > composite.max_children {
                    return Err(AppError::Validation(format!(
                        "composite '{}' holds {} children but is limited to {}",
                        field.id(),
                        composite.children.len(),
                        composite.max_children
                    )));
                }

                for child_id in &composite.children {
                    match types_by_id.get(child_id.as_str()) {
                        None => {
                            return Err(AppError::Validation(format!(
                                "composite '{}' references unknown field '{}'",
                                field.id(),
                                child_id
                            )));
                        }
                        Some(FieldType::Composite) => {
                            return Err(AppError::Validation(format!(
                                "composite '{}' cannot nest composite field '{}'",
                                field.id(),
                                child_id
                            )));
                        }
                        Some(_) => {}
                    }
                }
            }

            if let Some(parent_id) = field.parent_field_id() {
                match types_by_id.get(parent_id) {
                    None => {
                        return Err(AppError::Validation(format!(
                            "field '{}' links to unknown parent '{}'",
                            field.id(),
                            parent_id
                        )));
                    }
                    Some(FieldType::SingleChoice) => {}
                    Some(_) => {
                        return Err(AppError::Validation(format!(
                            "field '{}' links to parent '{}' which is not an option field",
                            field.id(),
                            parent_id
                        )));
                    }
                }
            }
        }

        Ok(())
    }

    /// Returns layout and chrome settings.
    #[must_use]
    pub fn settings(&self) -> &FormSettings {
        &self.settings
    }

    /// Replaces layout and chrome settings.
    pub fn set_settings(&mut self, settings: FormSettings) {
        self.settings = settings;
    }

    /// Returns the fields in list order.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Returns the fields in render order: sorted by `order`, ties broken
    /// by original list position.
    #[must_use]
    pub fn ordered_fields(&self) -> Vec<&Field> {
        let mut ordered: Vec<&Field> = self.fields.iter().collect();
        ordered.sort_by_key(|field| field.order());
        ordered
    }

    /// Looks up one field by id.
    #[must_use]
    pub fn field(&self, field_id: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.id() == field_id)
    }

    /// Returns the ids claimed as children by any composite.
    #[must_use]
    pub fn composite_child_ids(&self) -> HashSet<&str> {
        self.fields
            .iter()
            .filter_map(|field| match field.control() {
                FieldControl::Composite(composite) => Some(&composite.children),
                _ => None,
            })
            .flatten()
            .map(String::as_str)
            .collect()
    }

    /// Appends a field, revalidating the aggregate.
    pub fn add_field(&mut self, field: Field) -> AppResult<()> {
        let mut candidate = self.fields.clone();
        candidate.push(field);
        Self::check_fields(&candidate)?;
        self.fields = candidate;
        Ok(())
    }

    /// Replaces the field carrying the same id, revalidating the aggregate.
    pub fn replace_field(&mut self, field: Field) -> AppResult<()> {
        let Some(position) = self.fields.iter().position(|f| f.id() == field.id()) else {
            return Err(AppError::NotFound(format!(
                "field '{}' does not exist",
                field.id()
            )));
        };

        let mut candidate = self.fields.clone();
        candidate[position] = field;
        Self::check_fields(&candidate)?;
        self.fields = candidate;
        Ok(())
    }

    /// Removes a field and strips its id from every composite's children.
    pub fn remove_field(&mut self, field_id: &str) -> AppResult<()> {
        let Some(position) = self.fields.iter().position(|f| f.id() == field_id) else {
            return Err(AppError::NotFound(format!(
                "field '{field_id}' does not exist"
            )));
        };

        self.fields.remove(position);
        for field in &mut self.fields {
            if let FieldControl::Composite(composite) = field.control_mut() {
                composite.remove_child(field_id);
            }
        }
        Ok(())
    }

    /// Moves a field to a new list position and renumbers `order` by
    /// position for every field.
    pub fn move_field(&mut self, from: usize, to: usize) -> AppResult<()> {
        if from >= self.fields.len() || to >= self.fields.len() {
            return Err(AppError::Validation(format!(
                "move positions {from}..{to} fall outside the field list"
            )));
        }

        let field = self.fields.remove(from);
        self.fields.insert(to, field);
        for (position, field) in self.fields.iter_mut().enumerate() {
            field.common_mut().order = position as i32;
        }
        Ok(())
    }

    /// Returns the submit button settings.
    #[must_use]
    pub fn submit_button(&self) -> &SubmitButton {
        &self.submit_button
    }

    /// Replaces the submit button settings.
    pub fn set_submit_button(&mut self, submit_button: SubmitButton) {
        self.submit_button = submit_button;
    }

    /// Returns the HTTP submission recipe.
    #[must_use]
    pub fn submit_config(&self) -> &SubmitConfig {
        &self.submit_config
    }

    /// Replaces the HTTP submission recipe.
    pub fn set_submit_config(&mut self, submit_config: SubmitConfig) {
        self.submit_config = submit_config;
    }
}

#[cfg(test)]
mod tests {
    use crate::field::{
        ChoiceConfig, CompositeConfig, Field, FieldCommon, FieldControl, OptionDirection,
        OptionItem, OptionKind, TextConfig,
    };
    use crate::submit::{SubmitButton, SubmitConfig};

    use super::{FormDefinition, FormSettings, FormWidth};

    fn text_field(id: &str, order: i32) -> Field {
        let common =
            FieldCommon::new(id, "Field", false, order).unwrap_or_else(|_| unreachable!());
        Field::new(common, FieldControl::Text(TextConfig::default()))
    }

    fn choice_field(id: &str, order: i32) -> Field {
        let common =
            FieldCommon::new(id, "Choice", false, order).unwrap_or_else(|_| unreachable!());
        Field::new(
            common,
            FieldControl::SingleChoice(ChoiceConfig {
                option_type: OptionKind::Radio,
                options: vec![
                    OptionItem::new("opt_1", "A", 0).unwrap_or_else(|_| unreachable!()),
                ],
                default_value: None,
                min_select: None,
                max_select: None,
                direction: OptionDirection::Horizontal,
            }),
        )
    }

    fn composite_field(id: &str, children: Vec<&str>, max_children: usize) -> Field {
        let common = FieldCommon::new(id, "Group", false, 0).unwrap_or_else(|_| unreachable!());
        Field::new(
            common,
            FieldControl::Composite(CompositeConfig {
                children: children.into_iter().map(str::to_owned).collect(),
                width_ratios: "1:1".to_owned(),
                max_children,
            }),
        )
    }

    fn definition(fields: Vec<Field>) -> Result<FormDefinition, formweaver_core::AppError> {
        FormDefinition::new(
            FormSettings::default(),
            fields,
            SubmitButton::default(),
            SubmitConfig::default(),
        )
    }

    #[test]
    fn rejects_duplicate_field_ids() {
        let result = definition(vec![text_field("f1", 0), text_field("f1", 1)]);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_dangling_composite_child() {
        let result = definition(vec![composite_field("g1", vec!["missing"], 4)]);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_nested_composite_child() {
        let result = definition(vec![
            composite_field("g1", vec!["g2"], 4),
            composite_field("g2", vec![], 4),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_overfull_composite() {
        let result = definition(vec![
            composite_field("g1", vec!["a", "b"], 1),
            text_field("a", 1),
            text_field("b", 2),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_parent_link_to_non_option_field() {
        let mut child = text_field("child", 1);
        child.common_mut().parent_field_id = Some("parent".to_owned());
        child.common_mut().parent_option_value = Some("A".to_owned());

        let result = definition(vec![text_field("parent", 0), child]);
        assert!(result.is_err());
    }

    #[test]
    fn accepts_parent_link_to_option_field() {
        let mut child = text_field("child", 1);
        child.common_mut().parent_field_id = Some("parent".to_owned());
        child.common_mut().parent_option_value = Some("A".to_owned());

        let result = definition(vec![choice_field("parent", 0), child]);
        assert!(result.is_ok());
    }

    #[test]
    fn remove_field_strips_composite_references() {
        let mut form = definition(vec![
            composite_field("g1", vec!["a", "b"], 4),
            text_field("a", 1),
            text_field("b", 2),
        ])
        .unwrap_or_else(|_| unreachable!());

        form.remove_field("a").unwrap_or_else(|_| unreachable!());

        let Some(group) = form.field("g1") else {
            unreachable!()
        };
        let FieldControl::Composite(composite) = group.control() else {
            unreachable!()
        };
        assert_eq!(composite.children, vec!["b".to_owned()]);
        assert_eq!(composite.width_ratios, "1");
    }

    #[test]
    fn move_field_renumbers_order_by_position() {
        let mut form = definition(vec![
            text_field("a", 0),
            text_field("b", 1),
            text_field("c", 2),
        ])
        .unwrap_or_else(|_| unreachable!());

        form.move_field(2, 0).unwrap_or_else(|_| unreachable!());

        let ids: Vec<&str> = form.fields().iter().map(|field| field.id()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
        let orders: Vec<i32> = form.fields().iter().map(|field| field.order()).collect();
        assert_eq!(orders, vec![0, 1, 2]);
    }

    #[test]
    fn ordered_fields_breaks_ties_stably() {
        let form = definition(vec![
            text_field("a", 1),
            text_field("b", 0),
            text_field("c", 1),
        ])
        .unwrap_or_else(|_| unreachable!());

        let ids: Vec<&str> = form.ordered_fields().iter().map(|field| field.id()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn standard_form_ships_two_required_text_fields() {
        let form = FormDefinition::standard();
        assert_eq!(form.fields().len(), 2);
        assert!(form.fields().iter().all(|field| field.required()));
        assert_eq!(form.settings().width, FormWidth::Narrow);
        assert!(form.submit_config().enabled);
    }

    #[test]
    fn full_width_forms_allow_larger_groups() {
        assert_eq!(FormWidth::Full.max_composite_children(), 8);
        assert_eq!(FormWidth::Narrow.max_composite_children(), 4);
    }
}

use formweaver_core::AppResult;
use formweaver_domain::{
    ChoiceConfig, CompositeConfig, DateConfig, DateTimeConfig, Field, FieldCommon, FieldControl,
    FieldType, FormWidth, MultiSelectConfig, OptionDirection, OptionItem, OptionKind,
    SelectConfig, TextConfig, TimeConfig,
};
use uuid::Uuid;

/// Catalog entry describing one field type for the editor palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentDescriptor {
    /// Described field type.
    pub field_type: FieldType,
    /// Palette label.
    pub label: &'static str,
    /// Palette icon.
    pub icon: &'static str,
    /// One-line palette description.
    pub description: &'static str,
}

/// Static catalog mapping each field type to its palette entry and default
/// configuration template. Pure factory, used by the editor only.
pub struct ComponentRegistry;

fn generate_id(prefix: &str) -> String {
    let fragment = Uuid::new_v4().simple().to_string();
    format!("{prefix}_{}", &fragment[..8])
}

fn starter_options() -> AppResult<Vec<OptionItem>> {
    Ok(vec![
        OptionItem::new(generate_id("option"), "Option 1", 0)?,
        OptionItem::new(generate_id("option"), "Option 2", 1)?,
    ])
}

impl ComponentRegistry {
    /// Returns the palette entry for one field type.
    #[must_use]
    pub fn describe(field_type: FieldType) -> ComponentDescriptor {
        let (label, icon, description) = match field_type {
            FieldType::Text => ("Text input", "✏️", "Single-line text input"),
            FieldType::SingleChoice => ("Option group", "🔘", "Radio, checkbox or tag options"),
            FieldType::SingleSelect => ("Dropdown select", "📋", "Single-choice dropdown"),
            FieldType::MultiSelect => ("Multi select", "☑️", "Multi-choice dropdown"),
            FieldType::Date => ("Date picker", "📅", "Calendar date input"),
            FieldType::Time => ("Time picker", "🕐", "Time of day input"),
            FieldType::DateTime => ("Date & time picker", "🗓️", "Combined date and time input"),
            FieldType::Composite => ("Composite group", "🧩", "Columns of nested fields"),
        };

        ComponentDescriptor {
            field_type,
            label,
            icon,
            description,
        }
    }

    /// Returns every palette entry in palette order.
    #[must_use]
    pub fn catalog() -> [ComponentDescriptor; 8] {
        [
            Self::describe(FieldType::Text),
            Self::describe(FieldType::SingleChoice),
            Self::describe(FieldType::SingleSelect),
            Self::describe(FieldType::MultiSelect),
            Self::describe(FieldType::Date),
            Self::describe(FieldType::Time),
            Self::describe(FieldType::DateTime),
            Self::describe(FieldType::Composite),
        ]
    }

    /// Creates a fresh field with a generated unique id, the type's
    /// template defaults and the given render order.
    pub fn create_default(field_type: FieldType, order: i32) -> AppResult<Field> {
        Self::create_default_for_width(field_type, order, FormWidth::Standard)
    }

    /// Creates a fresh field sized for a form of the given width; only
    /// composite child capacity depends on it.
    pub fn create_default_for_width(
        field_type: FieldType,
        order: i32,
        form_width: FormWidth,
    ) -> AppResult<Field> {
        let descriptor = Self::describe(field_type);
        let common = FieldCommon::new(
            generate_id(field_type.id_prefix()),
            descriptor.label,
            false,
            order,
        )?;

        let control = match field_type {
            FieldType::Text => FieldControl::Text(TextConfig {
                placeholder: Some("Enter text".to_owned()),
                ..TextConfig::default()
            }),
            FieldType::SingleChoice => FieldControl::SingleChoice(ChoiceConfig {
                option_type: OptionKind::Radio,
                options: starter_options()?,
                default_value: None,
                min_select: None,
                max_select: None,
                direction: OptionDirection::Horizontal,
            }),
            FieldType::SingleSelect => FieldControl::SingleSelect(SelectConfig {
                placeholder: Some("Select an option".to_owned()),
                options: starter_options()?,
                default_value: None,
            }),
            FieldType::MultiSelect => FieldControl::MultiSelect(MultiSelectConfig {
                placeholder: Some("Select options".to_owned()),
                options: starter_options()?,
                default_value: Vec::new(),
                min_select: None,
                max_select: None,
            }),
            FieldType::Date => FieldControl::Date(DateConfig {
                placeholder: Some("Select a date".to_owned()),
                ..DateConfig::default()
            }),
            FieldType::Time => FieldControl::Time(TimeConfig {
                placeholder: Some("Select a time".to_owned()),
                default_value: None,
                time_format: Default::default(),
                time_interval: 30,
                min_time: None,
                max_time: None,
            }),
            FieldType::DateTime => FieldControl::DateTime(DateTimeConfig {
                placeholder: Some("Select a date and time".to_owned()),
                default_value: None,
                date_format: Default::default(),
                time_format: Default::default(),
                time_interval: 30,
                min_date_time: None,
                max_date_time: None,
            }),
            FieldType::Composite => FieldControl::Composite(CompositeConfig {
                max_children: form_width.max_composite_children(),
                ..CompositeConfig::default()
            }),
        };

        Ok(Field::new(common, control))
    }
}

#[cfg(test)]
mod tests {
    use formweaver_domain::{FieldControl, FieldType, FormWidth};

    use super::ComponentRegistry;

    #[test]
    fn catalog_covers_every_field_type() {
        let catalog = ComponentRegistry::catalog();
        assert_eq!(catalog.len(), 8);
    }

    #[test]
    fn created_fields_carry_prefixed_unique_ids() {
        let first = ComponentRegistry::create_default(FieldType::Text, 0)
            .unwrap_or_else(|_| unreachable!());
        let second = ComponentRegistry::create_default(FieldType::Text, 1)
            .unwrap_or_else(|_| unreachable!());

        assert!(first.id().starts_with("input_"));
        assert_ne!(first.id(), second.id());
        assert_eq!(second.order(), 1);
    }

    #[test]
    fn composite_capacity_follows_form_width() {
        let narrow =
            ComponentRegistry::create_default_for_width(FieldType::Composite, 0, FormWidth::Narrow)
                .unwrap_or_else(|_| unreachable!());
        let full =
            ComponentRegistry::create_default_for_width(FieldType::Composite, 0, FormWidth::Full)
                .unwrap_or_else(|_| unreachable!());

        let FieldControl::Composite(narrow_config) = narrow.control() else {
            unreachable!()
        };
        let FieldControl::Composite(full_config) = full.control() else {
            unreachable!()
        };
        assert_eq!(narrow_config.max_children, 4);
        assert_eq!(full_config.max_children, 8);
    }

    #[test]
    fn choice_template_ships_two_starter_options() {
        let field = ComponentRegistry::create_default(FieldType::SingleChoice, 0)
            .unwrap_or_else(|_| unreachable!());
        let Some(options) = field.options() else {
            unreachable!()
        };
        assert_eq!(options.len(), 2);
    }
}

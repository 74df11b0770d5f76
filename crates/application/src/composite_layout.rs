use std::collections::HashMap;

use formweaver_domain::{CompositeConfig, Field, FormState};
use tracing::warn;

use crate::visibility::is_visible;

/// Render width of one composite column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnWidth {
    /// Column sized to its content.
    Auto,
    /// Column taking a proportional share of the remaining width.
    Weight(u32),
}

fn equal_columns(child_count: usize) -> Vec<ColumnWidth> {
    vec![ColumnWidth::Weight(1); child_count]
}

fn parse_token(token: &str) -> Option<ColumnWidth> {
    if token == "auto" {
        return Some(ColumnWidth::Auto);
    }

    token
        .parse::<u32>()
        .ok()
        .filter(|weight| *weight > 0)
        .map(ColumnWidth::Weight)
}

/// Parses a ratio specification into render-time column widths.
///
/// Tokens are colon-separated, each a positive integer weight or the
/// literal `auto`. A token count that does not match the child count, or
/// any malformed token, yields equal-weight columns for every child
/// instead of failing.
#[must_use]
pub fn resolve_columns(width_ratios: &str, child_count: usize) -> Vec<ColumnWidth> {
    let tokens: Vec<&str> = width_ratios.split(':').map(str::trim).collect();
    if tokens.len() != child_count {
        return equal_columns(child_count);
    }

    let mut columns = Vec::with_capacity(child_count);
    for token in tokens {
        match parse_token(token) {
            Some(column) => columns.push(column),
            None => {
                warn!(
                    width_ratios,
                    token, "malformed ratio token, falling back to equal columns"
                );
                return equal_columns(child_count);
            }
        }
    }

    columns
}

/// Resolves a composite's child ids to field objects.
///
/// Unresolved ids are dropped, children hidden by the visibility resolver
/// are dropped, and the `children` order is preserved.
#[must_use]
pub fn resolve_children<'a>(
    composite: &CompositeConfig,
    fields: &'a [Field],
    state: &FormState,
) -> Vec<&'a Field> {
    let by_id: HashMap<&str, &Field> = fields.iter().map(|field| (field.id(), field)).collect();

    composite
        .children
        .iter()
        .filter_map(|child_id| {
            let field = by_id.get(child_id.as_str()).copied();
            if field.is_none() {
                warn!(%child_id, "composite references unknown field, skipping");
            }
            field
        })
        .filter(|field| is_visible(field, state))
        .collect()
}

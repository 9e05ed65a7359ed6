use crate::{ApiResult, SelectedFilters};

/// Lines shown under "Filtered Response", one per selected filter.
///
/// Lines follow the fixed filter order regardless of selection order. A
/// selected field missing from the result (or not an array) is skipped; the
/// remaining lines still render. No result or no selection yields no lines.
pub fn render_filtered(result: Option<&ApiResult>, selected: &SelectedFilters) -> Vec<String> {
    let Some(result) = result else {
        return Vec::new();
    };

    selected
        .iter()
        .filter_map(|name| {
            result
                .list_field(name.field())
                .map(|items| format!("{}: {}", name.label(), items.join(", ")))
        })
        .collect()
}

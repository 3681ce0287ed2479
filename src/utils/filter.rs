use crate::models::DisplayedProduct;

/// Trim surrounding whitespace and lowercase the user's filter text.
pub fn normalize_filter(text: &str) -> String {
    text.trim().to_lowercase()
}

/// True when any displayed column contains `needle` case-insensitively.
/// `needle` must already be normalized; an empty needle matches every row.
pub fn row_matches(row: &DisplayedProduct, needle: &str) -> bool {
    needle.is_empty()
        || row
            .fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
}

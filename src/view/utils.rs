//! Utility functions for rendering UI components

/// Cards per grid row for a given terminal width
pub fn card_columns(width: u16) -> usize {
    match width {
        0..80 => 1,
        80..140 => 2,
        _ => 3,
    }
}

/// Calculate width needed for index column (log10(n) + padding)
pub fn calculate_num_width(item_count: usize) -> usize {
    if item_count == 0 {
        2
    } else {
        let digits = (item_count as f64).log10().floor() as usize + 1;
        digits + 1
    }
}

pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() > max_width {
        let truncated: String = s.chars().take(max_width.saturating_sub(3)).collect();
        format!("{}...", truncated)
    } else {
        s.to_string()
    }
}

/// Number of rows needed to lay out `items` across `columns`
pub fn row_count(items: usize, columns: usize) -> usize {
    items.div_ceil(columns.max(1))
}

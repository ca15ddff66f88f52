//! Display formatting for the current filter selections.

use finder_core::FilterState;

/// One-line-per-field summary of the filter, shown above the form menu.
pub fn filter_summary(state: &FilterState) -> String {
    let storage = if state.storage.is_full() {
        "any".to_string()
    } else {
        format!("{} - {}", state.storage.lo_mark(), state.storage.hi_mark())
    };
    let ram = if state.ram.is_empty() {
        "any".to_string()
    } else {
        state.ram.join(", ")
    };
    let hdd = state
        .hdd
        .map_or_else(|| "any".to_string(), |d| d.to_string());
    let location = state.location.as_deref().unwrap_or("any");

    format!(
        "Storage:  {storage}\nRAM:      {ram}\nDisk:     {hdd}\nLocation: {location}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use finder_core::DiskType;

    #[test]
    fn test_default_filter_shows_any_everywhere() {
        let summary = filter_summary(&FilterState::default());
        assert_eq!(summary.matches("any").count(), 4);
    }

    #[test]
    fn test_selected_fields_are_shown() {
        let mut state = FilterState {
            hdd: Some(DiskType::Ssd),
            location: Some("LondonLON-01".to_string()),
            ..FilterState::default()
        };
        state.toggle_ram("8GB");
        state.toggle_ram("16GB");
        state.storage.set_lo(1);

        let summary = filter_summary(&state);
        assert!(summary.contains("250GB - 72TB"));
        assert!(summary.contains("8GB, 16GB"));
        assert!(summary.contains("SSD"));
        assert!(summary.contains("LondonLON-01"));
    }
}

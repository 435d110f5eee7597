use ratatui::text::Line;
use unicode_width::UnicodeWidthStr;

pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Estimate how many terminal rows a set of logical lines occupies once
/// wrapped at `max_width`. Good enough for scroll bounding; ratatui's word
/// wrapping may differ by a row on long unbroken words.
pub fn estimate_lines_height(lines: &[Line], max_width: usize) -> usize {
    let max_width = max_width.max(1);
    lines
        .iter()
        .map(|line| {
            let width: usize = line.spans.iter().map(|s| s.content.width()).sum();
            if width == 0 { 1 } else { width.div_ceil(max_width) }
        })
        .sum()
}

pub fn calculate_max_scroll(content_height: usize, visible_height: usize) -> u16 {
    content_height.saturating_sub(visible_height) as u16
}

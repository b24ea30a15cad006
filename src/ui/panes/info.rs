//! Header pane: algorithm, array contents and progress counters

use crate::config::Playback;
use crate::engine::{Phase, Projection, Value};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Format the array as `[a, b, c]`
pub fn format_values(values: &[Value]) -> String {
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(", "))
}

/// Render the info pane
pub fn render_info_pane(frame: &mut Frame, area: Rect, view: &Projection<'_>, playback: &Playback) {
    let label = Style::default().fg(DEFAULT_THEME.comment);
    let value = Style::default().fg(DEFAULT_THEME.fg);

    let progress = if view.phase == Phase::Complete {
        Span::styled(
            format!("Sorting complete! Steps taken: {}", view.steps),
            Style::default()
                .fg(DEFAULT_THEME.success)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(format!("Step: {}", view.steps), value)
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Algorithm: ", label),
            Span::styled(
                view.algorithm.to_string(),
                Style::default()
                    .fg(DEFAULT_THEME.algorithm)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ({}/{})", view.algorithm_index + 1, view.algorithm_count),
                label,
            ),
        ]),
        Line::from(vec![
            Span::styled("Array: ", label),
            Span::styled(format_values(view.values), Style::default().fg(DEFAULT_THEME.primary)),
        ]),
        Line::from(vec![
            progress,
            Span::styled("   Swaps: ", label),
            Span::styled(view.swaps.to_string(), value),
            Span::styled("   Size: ", label),
            Span::styled(view.size.to_string(), value),
            Span::styled("   Speed: ", label),
            Span::styled(
                format!(
                    "{}ms x{}",
                    playback.delay.as_millis(),
                    playback.steps_per_tick
                ),
                value,
            ),
        ]),
    ];

    let block = Block::default()
        .title(" Sorting Visualizer ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border))
        .padding(Padding::new(1, 0, 0, 0));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_values() {
        assert_eq!(format_values(&[3, 5, 4]), "[3, 5, 4]");
        assert_eq!(format_values(&[]), "[]");
    }
}

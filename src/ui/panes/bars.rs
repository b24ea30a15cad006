//! Bar chart of the array being sorted
//!
//! One bar per element, height proportional to its value. Bars touched by
//! the last step are coloured by what the step did: compared only, or
//! written. Once the sort completes every bar turns to the sorted colour.

use crate::engine::{Phase, Projection};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

/// Gap between bars when there is room for one
const BAR_GAP: u16 = 1;

/// Bar width and gap that fit `count` bars into `width` columns
pub fn bar_layout(width: u16, count: usize) -> (u16, u16) {
    if count == 0 {
        return (1, 0);
    }
    let count = count.min(u16::MAX as usize) as u16;
    let gaps = BAR_GAP.saturating_mul(count - 1);
    if width > gaps && (width - gaps) / count >= 1 {
        ((width - gaps) / count, BAR_GAP)
    } else {
        ((width / count).max(1), 0)
    }
}

/// Colour for the bar at `index`
pub fn bar_color(view: &Projection<'_>, index: usize) -> Color {
    if view.phase == Phase::Complete {
        DEFAULT_THEME.bar_sorted
    } else if view.is_highlighted(index) {
        if view.last_mutated {
            DEFAULT_THEME.bar_moved
        } else {
            DEFAULT_THEME.bar_compared
        }
    } else {
        DEFAULT_THEME.bar
    }
}

/// Render the bar chart pane
pub fn render_bars_pane(frame: &mut Frame, area: Rect, view: &Projection<'_>) {
    let block = Block::default()
        .title(format!(" {} ", view.algorithm))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border));

    if view.values.is_empty() {
        let paragraph = Paragraph::new("(empty array)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let inner_width = area.width.saturating_sub(2);
    let (bar_width, bar_gap) = bar_layout(inner_width, view.values.len());

    let bars: Vec<Bar> = view
        .values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let color = bar_color(view, i);
            Bar::default()
                .value(value.max(0) as u64)
                .text_value(value.to_string())
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .bar_width(bar_width)
        .bar_gap(bar_gap)
        .max(view.max_value().max(1) as u64)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

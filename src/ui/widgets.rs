//! Reusable UI widgets
//!
//! Contains common UI components used across multiple tabs:
//! - Progress meters and stat tiles
//! - The rest timer overlay
//! - Status bar and layout helpers

use crate::ui::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Build a fixed-width progress bar string from a bounded percentage
pub fn meter(percent: u16, width: usize) -> String {
    let pct = usize::from(percent.min(100));
    let filled = pct * width / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Render a one-line progress meter filling the given area
pub fn render_meter(frame: &mut Frame, percent: u16, style: Style, area: Rect) {
    let bar = meter(percent, area.width as usize);
    frame.render_widget(Paragraph::new(bar).style(style), area);
}

/// Render a bordered tile with a title, a value line, and a thin meter
pub fn render_stat_tile(
    frame: &mut Frame,
    title: &str,
    value: &str,
    percent: Option<u16>,
    accent: Style,
    theme: &Theme,
    area: Rect,
) {
    let block = Block::default()
        .style(theme.block_style())
        .title(format!(" {} ", title))
        .title_style(theme.text_dim())
        .borders(Borders::ALL)
        .border_style(theme.border());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    let value_area = Rect { height: 1, ..inner };
    let value_widget = Paragraph::new(Line::styled(value, accent));
    frame.render_widget(value_widget, value_area);

    if let Some(pct) = percent {
        if inner.height >= 2 {
            let meter_area = Rect {
                y: inner.y + inner.height - 1,
                height: 1,
                ..inner
            };
            render_meter(frame, pct, accent, meter_area);
        }
    }
}

/// Render the rest timer as a bottom-anchored overlay
pub fn render_rest_timer(
    frame: &mut Frame,
    remaining: u32,
    total: u32,
    theme: &Theme,
    area: Rect,
) {
    let width = 40.min(area.width.saturating_sub(4));
    let overlay = Rect {
        y: area.y + area.height.saturating_sub(7),
        height: 6,
        ..centered_rect(width, 6, area)
    };

    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .title(" Rest ")
        .title_style(theme.timer())
        .borders(Borders::ALL)
        .border_style(theme.border_focused())
        .style(theme.block_style());

    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let percent = crate::types::percent(f64::from(remaining), f64::from(total));
    let bar = meter(percent, inner.width.saturating_sub(2) as usize);

    let content = vec![
        Line::styled(format!("{} s", remaining), theme.timer()),
        Line::styled(bar, theme.warning()),
        Line::from(vec![
            Span::styled("[c]", theme.title()),
            Span::styled(" end rest", theme.text_dim()),
        ]),
    ];

    let body = Paragraph::new(content).alignment(Alignment::Center);
    frame.render_widget(body, inner);
}

/// Render status bar at bottom
pub fn render_status_bar(
    frame: &mut Frame,
    left_content: &str,
    right_content: &str,
    theme: &Theme,
    area: Rect,
) {
    let status_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    frame.render_widget(Clear, status_area);

    let left_widget = Paragraph::new(left_content).style(theme.text_dim());

    let right_len = right_content.chars().count() as u16;
    let right_area = Rect {
        x: status_area.x + status_area.width.saturating_sub(right_len + 1),
        y: status_area.y,
        width: right_len + 1,
        height: 1,
    };
    let right_widget = Paragraph::new(right_content).style(theme.warning());

    frame.render_widget(left_widget, status_area);
    frame.render_widget(right_widget, right_area);
}

/// Helper: Create a centered rect of given size
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect {
        x,
        y,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meter_fill() {
        assert_eq!(meter(0, 10), "░░░░░░░░░░");
        assert_eq!(meter(50, 10), "█████░░░░░");
        assert_eq!(meter(100, 10), "██████████");
    }

    #[test]
    fn test_meter_never_overflows_width() {
        // Percentages above 100 are clamped, not extended
        let bar = meter(250, 10);
        assert_eq!(bar.chars().count(), 10);
        assert_eq!(bar, meter(100, 10));
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(40, 20, area);

        assert_eq!(popup.x, 30);
        assert_eq!(popup.y, 15);
        assert_eq!(popup.width, 40);
        assert_eq!(popup.height, 20);
    }
}

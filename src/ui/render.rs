//! Main rendering module
//!
//! Handles rendering the complete UI including:
//! - Header with greeting and tab bar
//! - Active tab content
//! - Rest timer overlay
//! - Status bar

use crate::app::{App, WorkoutsPanel};
use crate::data;
use crate::types::Tab;
use crate::ui::widgets;
use chrono::{Local, Timelike};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Cell, List, ListItem, Paragraph, Row, Table, Tabs},
    Frame,
};

/// Main render function - entry point for all UI rendering
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Main layout: header, content, status bar
    let layout = Layout::vertical([
        Constraint::Length(3), // Header + tabs
        Constraint::Min(10),   // Content
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    render_header(frame, app, layout[0]);
    render_tab_content(frame, app, layout[1]);
    render_status_bar(frame, app, layout[2]);

    // Rest timer overlay lives on the Workouts tab
    if app.active_tab == Tab::Workouts {
        if let Some(remaining) = app.rest_timer.remaining() {
            widgets::render_rest_timer(
                frame,
                remaining,
                app.config.timer.rest_seconds,
                &app.theme,
                layout[1],
            );
        }
    }
}

/// Render header with greeting and tab bar
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let header_block = Block::default()
        .style(theme.block_style())
        .title(format!(" fitdash · {}! ", greeting_for_hour(Local::now().hour())))
        .title_style(theme.title())
        .borders(Borders::BOTTOM)
        .border_style(theme.border());

    frame.render_widget(header_block, area);

    // Tab bar
    let tab_titles: Vec<Line> = Tab::all()
        .iter()
        .enumerate()
        .map(|(i, tab)| {
            let style = if app.active_tab == *tab {
                theme.tab_active()
            } else {
                theme.tab_inactive()
            };
            Line::styled(format!("[{}] {}", i + 1, tab.label()), style)
        })
        .collect();

    let tabs = Tabs::new(tab_titles)
        .select(app.active_tab.index())
        .divider(" │ ")
        .style(theme.text());

    let tabs_area = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: 1,
    };
    frame.render_widget(tabs, tabs_area);
}

/// Render the active tab's content
fn render_tab_content(frame: &mut Frame, app: &App, area: Rect) {
    match app.active_tab {
        Tab::Home => render_home_tab(frame, app, area),
        Tab::Workouts => render_workouts_tab(frame, app, area),
        Tab::Nutrition => render_nutrition_tab(frame, app, area),
        Tab::Stats => render_stats_tab(frame, app, area),
    }
}

/// Render status bar with keybindings
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let hints = if app.filter_editing {
        "Type to filter  [Enter] Apply  [Esc] Clear"
    } else {
        match app.active_tab {
            Tab::Home => "[1-4] Switch Tab  [q] Quit",
            Tab::Workouts => {
                "[Tab] Switch Panel  [j/k] Navigate  [/] Filter  [s] Rest Timer  [c] End Rest  [q] Quit"
            }
            Tab::Nutrition => "[j/k] Navigate  [q] Quit",
            Tab::Stats => "[1-4] Switch Tab  [q] Quit",
        }
    };

    // Keep the countdown visible while browsing other tabs
    let right = match app.rest_timer.remaining() {
        Some(remaining) if app.active_tab != Tab::Workouts => format!("Rest {}s", remaining),
        _ => String::new(),
    };

    widgets::render_status_bar(frame, hints, &right, theme, area);
}

// === TAB RENDERERS ===

/// Home tab: daily stats overview and today's workout
fn render_home_tab(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let today = &app.config.today;

    let rows = Layout::vertical([
        Constraint::Length(2), // Greeting
        Constraint::Length(5), // Calories card
        Constraint::Length(4), // Water + protein tiles
        Constraint::Min(5),    // Today's workout
    ])
    .split(area);

    // Greeting
    let greeting = Paragraph::new(vec![
        Line::styled("Keep moving toward your goal", theme.text()),
        Line::styled(
            format!(
                "{} of {} workouts done today",
                today.workouts, today.workouts_goal
            ),
            theme.text_dim(),
        ),
    ]);
    frame.render_widget(greeting, rows[0]);

    // Calories card
    let calories_block = Block::default()
        .style(theme.block_style())
        .title(" Calories today ")
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border_focused());
    let calories_inner = calories_block.inner(rows[1]);
    frame.render_widget(calories_block, rows[1]);

    let pct = today.calories_percent();
    let value_line = Line::from(vec![
        Span::styled(format!("{}", today.calories), theme.title()),
        Span::styled(format!(" / {} kcal", today.calories_goal), theme.text_dim()),
        Span::styled(format!("   {}%", pct), theme.calories()),
    ]);
    frame.render_widget(
        Paragraph::new(value_line),
        Rect {
            height: 1,
            ..calories_inner
        },
    );
    if calories_inner.height >= 2 {
        let meter_area = Rect {
            y: calories_inner.y + calories_inner.height - 1,
            height: 1,
            ..calories_inner
        };
        widgets::render_meter(frame, pct, theme.calories(), meter_area);
    }

    // Water and protein tiles
    let tiles = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);
    widgets::render_stat_tile(
        frame,
        "Water",
        &format!("{:.1} L / {:.1} L", today.water, today.water_goal),
        Some(today.water_percent()),
        theme.water(),
        theme,
        tiles[0],
    );
    widgets::render_stat_tile(
        frame,
        "Protein",
        &format!("{} g / {} g", today.protein, today.protein_goal),
        Some(today.protein_percent()),
        theme.protein(),
        theme,
        tiles[1],
    );

    // Today's workout card
    let workout = data::today_workout();
    let workout_block = Block::default()
        .style(theme.block_style())
        .title(" Today's Workout ")
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border());
    let workout_inner = workout_block.inner(rows[3]);
    frame.render_widget(workout_block, rows[3]);

    let mut lines = vec![Line::styled(workout.focus, theme.success()), Line::raw("")];
    for set in workout.sets {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<32}", set.exercise), theme.text()),
            Span::styled(set.scheme, theme.text_dim()),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), workout_inner);
}

/// Workouts tab: exercise catalog and canned plans
fn render_workouts_tab(frame: &mut Frame, app: &App, area: Rect) {
    let panels =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).split(area);

    render_exercise_catalog(frame, app, panels[0]);
    render_plans_panel(frame, app, panels[1]);
}

/// Render the fetched exercise catalog with its filter line
fn render_exercise_catalog(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let is_focused = app.workouts_focus == WorkoutsPanel::Catalog;
    let filtered = app.filtered_exercises();

    let block = Block::default()
        .style(theme.block_style())
        .title(format!(" Exercise Catalog ({}) ", filtered.len()))
        .title_style(if is_focused { theme.title() } else { theme.text_dim() })
        .borders(Borders::ALL)
        .border_style(if is_focused {
            theme.border_focused()
        } else {
            theme.border()
        });

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Filter input
    let filter_area = Rect { height: 1, ..inner };
    let filter_text = if app.filter_editing {
        format!("Filter: {}_", app.exercises_filter)
    } else if !app.exercises_filter.is_empty() {
        format!("Filter: {}", app.exercises_filter)
    } else {
        "Filter: [/] to search".to_string()
    };
    frame.render_widget(
        Paragraph::new(filter_text).style(theme.text_dim()),
        filter_area,
    );

    let list_area = Rect {
        x: inner.x,
        y: inner.y + 2,
        width: inner.width,
        height: inner.height.saturating_sub(2),
    };

    if filtered.is_empty() {
        let message = if app.exercises_filter.is_empty() {
            "No exercises loaded"
        } else {
            "No exercises match filter"
        };
        let empty_msg = Paragraph::new(message)
            .style(theme.text_dim())
            .alignment(Alignment::Center);
        frame.render_widget(empty_msg, list_area);
        return;
    }

    let items: Vec<ListItem> = filtered
        .iter()
        .enumerate()
        .map(|(i, exercise)| {
            let style = if is_focused && i == app.exercises_selected {
                theme.selected()
            } else {
                theme.text()
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<28}", exercise.name), style),
                Span::styled(format!("{:<14}", exercise.muscle_group), theme.text_dim()),
                Span::styled(format!("[{}]", exercise.category), theme.text_dim()),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items), list_area);
}

/// Render the canned workout plans
fn render_plans_panel(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let is_focused = app.workouts_focus == WorkoutsPanel::Plans;

    let block = Block::default()
        .style(theme.block_style())
        .title(" Plans ")
        .title_style(if is_focused { theme.title() } else { theme.text_dim() })
        .borders(Borders::ALL)
        .border_style(if is_focused {
            theme.border_focused()
        } else {
            theme.border()
        });

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    for (i, plan) in data::workout_plans().iter().enumerate() {
        let style = if is_focused && i == app.plans_selected {
            theme.selected()
        } else {
            theme.text()
        };
        lines.push(Line::styled(plan.name, style));
        lines.push(Line::styled(format!("  {}", plan.description), theme.text_dim()));
        lines.push(Line::raw(""));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Nutrition tab: daily macros and today's meals
fn render_nutrition_tab(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let today = &app.config.today;

    let rows = Layout::vertical([
        Constraint::Length(4), // Summary tiles
        Constraint::Min(5),    // Meal list
    ])
    .split(area);

    let tiles = Layout::horizontal([
        Constraint::Percentage(34),
        Constraint::Percentage(33),
        Constraint::Percentage(33),
    ])
    .split(rows[0]);

    widgets::render_stat_tile(
        frame,
        "Calories",
        &format!("{}", today.calories),
        None,
        theme.calories(),
        theme,
        tiles[0],
    );
    widgets::render_stat_tile(
        frame,
        "Protein",
        &format!("{} g", today.protein),
        None,
        theme.protein(),
        theme,
        tiles[1],
    );
    widgets::render_stat_tile(
        frame,
        "Meals",
        &format!("{}", app.meals.len()),
        None,
        theme.success(),
        theme,
        tiles[2],
    );

    // Meal list
    let block = Block::default()
        .style(theme.block_style())
        .title(" Today's Meals ")
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border_focused());
    let inner = block.inner(rows[1]);
    frame.render_widget(block, rows[1]);

    if app.meals_loading {
        let loading = Paragraph::new("Loading…")
            .style(theme.text_dim())
            .alignment(Alignment::Center);
        frame.render_widget(loading, inner);
        return;
    }

    if app.meals.is_empty() {
        let empty_msg = Paragraph::new("No meals logged today")
            .style(theme.text_dim())
            .alignment(Alignment::Center);
        frame.render_widget(empty_msg, inner);
        return;
    }

    let header = Row::new(vec![
        Cell::from("MEAL").style(theme.title()),
        Cell::from("TIME").style(theme.title()),
        Cell::from("KCAL").style(theme.title()),
        Cell::from("PROTEIN").style(theme.title()),
    ]);

    let meal_rows: Vec<Row> = app
        .meals
        .iter()
        .enumerate()
        .map(|(i, meal)| {
            let style = if i == app.meals_selected {
                theme.selected()
            } else {
                theme.text()
            };

            Row::new(vec![
                Cell::from(meal.name.clone()),
                Cell::from(meal.time.clone()),
                Cell::from(meal.calories.to_string()),
                Cell::from(format!("{} g", meal.protein)),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        meal_rows,
        [
            Constraint::Percentage(45),
            Constraint::Percentage(15),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
        ],
    )
    .header(header);

    frame.render_widget(table, inner);
}

/// Stats tab: weight trend, monthly progress, and personal records
fn render_stats_tab(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let rows = Layout::vertical([
        Constraint::Length(11), // Weight chart
        Constraint::Length(8),  // Monthly progress
        Constraint::Min(4),     // Personal records
    ])
    .split(area);

    // Weight chart
    let weight_block = Block::default()
        .style(theme.block_style())
        .title(" Weight · last 7 days (kg) ")
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border());
    let weight_inner = weight_block.inner(rows[0]);
    frame.render_widget(weight_block, rows[0]);

    let bars: Vec<Bar> = data::weight_history()
        .iter()
        .map(|w| {
            Bar::default()
                .value((w * 10.0).round() as u64)
                .label(Line::styled(format!("{:.1}", w), theme.text_dim()))
                .text_value(String::new())
        })
        .collect();

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(5)
        .bar_gap(2)
        .bar_style(theme.water());
    frame.render_widget(chart, weight_inner);

    // Monthly progress
    let progress_block = Block::default()
        .style(theme.block_style())
        .title(" Monthly Progress ")
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border());
    let progress_inner = progress_block.inner(rows[1]);
    frame.render_widget(progress_block, rows[1]);

    let bar_width = progress_inner.width.saturating_sub(2) as usize;
    let mut lines: Vec<Line> = Vec::new();
    for item in data::monthly_progress() {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<28}", item.label), theme.text()),
            Span::styled(item.value, theme.title()),
        ]));
        lines.push(Line::styled(
            widgets::meter(item.percent, bar_width),
            theme.success(),
        ));
    }
    frame.render_widget(Paragraph::new(lines), progress_inner);

    // Personal records
    let records_block = Block::default()
        .style(theme.block_style())
        .title(" Personal Records ")
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border());
    let records_inner = records_block.inner(rows[2]);
    frame.render_widget(records_block, rows[2]);

    let record_lines: Vec<Line> = data::personal_records()
        .iter()
        .map(|record| {
            Line::from(vec![
                Span::styled("★ ", theme.warning()),
                Span::styled(format!("{:<24}", record.exercise), theme.text()),
                Span::styled(format!("max {} kg", record.weight_kg), theme.title()),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(record_lines), records_inner);
}

/// Time-of-day greeting for the header
fn greeting_for_hour(hour: u32) -> &'static str {
    match hour {
        5..=11 => "Good morning",
        12..=17 => "Good afternoon",
        _ => "Good evening",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_covers_the_clock() {
        assert_eq!(greeting_for_hour(6), "Good morning");
        assert_eq!(greeting_for_hour(13), "Good afternoon");
        assert_eq!(greeting_for_hour(22), "Good evening");
        assert_eq!(greeting_for_hour(3), "Good evening");
    }
}

//! Application state and event handling
//!
//! This is the core of fitdash, managing:
//! - Active tab and per-tab cursor state
//! - Keyboard input
//! - The rest timer and the fetched collections

use crate::api::DataEvent;
use crate::config::Config;
use crate::timer::RestTimer;
use crate::types::{Exercise, Meal, Tab};
use crate::ui::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use std::time::Instant;
use tracing::warn;

/// Which panel of the Workouts tab has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkoutsPanel {
    #[default]
    Catalog,
    Plans,
}

/// Main application state
pub struct App {
    // Core state
    pub should_quit: bool,
    pub active_tab: Tab,
    pub config: Config,
    pub theme: Theme,

    // Fetched collections
    pub exercises: Vec<Exercise>,
    pub meals: Vec<Meal>,
    /// Set until the meals fetch attempt finishes, success or not
    pub meals_loading: bool,

    // Rest timer
    pub rest_timer: RestTimer,

    // Workouts tab state
    pub workouts_focus: WorkoutsPanel,
    pub exercises_selected: usize,
    pub exercises_filter: String,
    pub filter_editing: bool,
    pub plans_selected: usize,

    // Nutrition tab state
    pub meals_selected: usize,
}

impl App {
    /// Create a new App instance
    pub fn new(config: Config) -> Self {
        let theme = Theme::from_name(config.theme);

        Self {
            should_quit: false,
            active_tab: Tab::Home,
            config,
            theme,

            exercises: Vec::new(),
            meals: Vec::new(),
            meals_loading: true,

            rest_timer: RestTimer::new(),

            workouts_focus: WorkoutsPanel::Catalog,
            exercises_selected: 0,
            exercises_filter: String::new(),
            filter_editing: false,
            plans_selected: 0,

            meals_selected: 0,
        }
    }

    /// Advance time-driven state; called every event-loop iteration
    pub fn update(&mut self, now: Instant) {
        self.rest_timer.advance(now);
    }

    /// Apply a completed fetch attempt
    ///
    /// Failures are logged and otherwise ignored: the prior collection
    /// (empty on a first attempt) stays in place, and the meals loading
    /// flag always clears so the nutrition panel cannot hang.
    pub fn apply_data_event(&mut self, event: DataEvent) {
        match event {
            DataEvent::Exercises(Ok(list)) => {
                self.exercises = list;
                self.exercises_selected = 0;
            }
            DataEvent::Exercises(Err(e)) => {
                warn!("exercise catalog fetch failed: {:#}", e);
            }
            DataEvent::Meals(Ok(list)) => {
                self.meals = list;
                self.meals_selected = 0;
                self.meals_loading = false;
            }
            DataEvent::Meals(Err(e)) => {
                warn!("meals fetch failed: {:#}", e);
                self.meals_loading = false;
            }
        }
    }

    /// Exercises matching the current filter, in catalog order
    pub fn filtered_exercises(&self) -> Vec<&Exercise> {
        if self.exercises_filter.is_empty() {
            return self.exercises.iter().collect();
        }
        let needle = self.exercises_filter.to_lowercase();
        self.exercises
            .iter()
            .filter(|e| e.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.filter_editing {
            self.handle_filter_key(key);
            return;
        }

        // Global keys (work in all tabs)
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('1') => self.active_tab = Tab::Home,
            KeyCode::Char('2') => self.active_tab = Tab::Workouts,
            KeyCode::Char('3') => self.active_tab = Tab::Nutrition,
            KeyCode::Char('4') => self.active_tab = Tab::Stats,
            _ => {}
        }

        // Tab-specific handling
        match self.active_tab {
            Tab::Workouts => self.handle_workouts_key(key),
            Tab::Nutrition => self.handle_nutrition_key(key),
            Tab::Home | Tab::Stats => {}
        }
    }

    /// Handle keys in Workouts tab
    fn handle_workouts_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => {
                self.workouts_focus = match self.workouts_focus {
                    WorkoutsPanel::Catalog => WorkoutsPanel::Plans,
                    WorkoutsPanel::Plans => WorkoutsPanel::Catalog,
                };
            }
            KeyCode::Char('/') if self.workouts_focus == WorkoutsPanel::Catalog => {
                self.filter_editing = true;
            }
            KeyCode::Char('j') | KeyCode::Down => match self.workouts_focus {
                WorkoutsPanel::Catalog => {
                    let count = self.filtered_exercises().len();
                    if self.exercises_selected < count.saturating_sub(1) {
                        self.exercises_selected += 1;
                    }
                }
                WorkoutsPanel::Plans => {
                    let count = crate::data::workout_plans().len();
                    if self.plans_selected < count.saturating_sub(1) {
                        self.plans_selected += 1;
                    }
                }
            },
            KeyCode::Char('k') | KeyCode::Up => match self.workouts_focus {
                WorkoutsPanel::Catalog => {
                    self.exercises_selected = self.exercises_selected.saturating_sub(1);
                }
                WorkoutsPanel::Plans => {
                    self.plans_selected = self.plans_selected.saturating_sub(1);
                }
            },
            KeyCode::Char('g') => self.exercises_selected = 0,
            KeyCode::Char('G') => {
                self.exercises_selected = self.filtered_exercises().len().saturating_sub(1);
            }
            KeyCode::Char('s') => {
                self.rest_timer.start(self.config.timer.rest_seconds);
            }
            KeyCode::Char('c') | KeyCode::Esc => {
                if self.rest_timer.is_active() {
                    self.rest_timer.cancel();
                } else if !self.exercises_filter.is_empty() {
                    self.exercises_filter.clear();
                    self.exercises_selected = 0;
                }
            }
            _ => {}
        }
    }

    /// Handle keys in Nutrition tab
    fn handle_nutrition_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if self.meals_selected < self.meals.len().saturating_sub(1) {
                    self.meals_selected += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.meals_selected = self.meals_selected.saturating_sub(1);
            }
            KeyCode::Char('g') => self.meals_selected = 0,
            KeyCode::Char('G') => {
                self.meals_selected = self.meals.len().saturating_sub(1);
            }
            _ => {}
        }
    }

    /// Handle keys while the exercise filter is being edited
    fn handle_filter_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.exercises_filter.clear();
                self.filter_editing = false;
                self.exercises_selected = 0;
            }
            KeyCode::Enter => self.filter_editing = false,
            KeyCode::Backspace => {
                self.exercises_filter.pop();
                self.exercises_selected = 0;
            }
            KeyCode::Char(c) => {
                self.exercises_filter.push(c);
                self.exercises_selected = 0;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    fn test_app() -> App {
        App::new(Config::default())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code));
    }

    fn sample_exercises() -> Vec<Exercise> {
        vec![
            Exercise {
                id: 1,
                name: "Bench Press".into(),
                category: "Strength".into(),
                muscle_group: "Chest".into(),
            },
            Exercise {
                id: 2,
                name: "Deadlift".into(),
                category: "Strength".into(),
                muscle_group: "Back".into(),
            },
            Exercise {
                id: 3,
                name: "Incline Bench".into(),
                category: "Strength".into(),
                muscle_group: "Chest".into(),
            },
        ]
    }

    #[test]
    fn test_digit_keys_select_exactly_one_tab() {
        let mut app = test_app();
        let keys = [
            (KeyCode::Char('1'), Tab::Home),
            (KeyCode::Char('2'), Tab::Workouts),
            (KeyCode::Char('3'), Tab::Nutrition),
            (KeyCode::Char('4'), Tab::Stats),
        ];
        for (code, expected) in keys {
            press(&mut app, code);
            assert_eq!(app.active_tab, expected);
        }
    }

    #[test]
    fn test_quit_key() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_exercises_load_replaces_list() {
        let mut app = test_app();
        app.apply_data_event(DataEvent::Exercises(Ok(sample_exercises())));
        assert_eq!(app.exercises.len(), 3);

        // An empty payload renders as an empty list, not an error state
        app.apply_data_event(DataEvent::Exercises(Ok(Vec::new())));
        assert!(app.exercises.is_empty());
    }

    #[test]
    fn test_failed_exercises_fetch_keeps_prior_list() {
        let mut app = test_app();
        app.apply_data_event(DataEvent::Exercises(Ok(sample_exercises())));
        app.apply_data_event(DataEvent::Exercises(Err(anyhow!("timeout"))));
        assert_eq!(app.exercises.len(), 3);
    }

    #[test]
    fn test_failed_meals_fetch_still_clears_loading() {
        let mut app = test_app();
        assert!(app.meals_loading);
        app.apply_data_event(DataEvent::Meals(Err(anyhow!("connection refused"))));
        assert!(!app.meals_loading);
        assert!(app.meals.is_empty());
    }

    #[test]
    fn test_exercise_filter_is_case_insensitive() {
        let mut app = test_app();
        app.apply_data_event(DataEvent::Exercises(Ok(sample_exercises())));

        app.exercises_filter = "bench".into();
        let filtered = app.filtered_exercises();
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|e| e.name.to_lowercase().contains("bench")));
    }

    #[test]
    fn test_filter_editing_captures_quit_key() {
        let mut app = test_app();
        app.active_tab = Tab::Workouts;
        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.exercises_filter, "q");

        press(&mut app, KeyCode::Esc);
        assert!(!app.filter_editing);
        assert!(app.exercises_filter.is_empty());
    }

    #[test]
    fn test_timer_keys() {
        let mut app = test_app();
        app.active_tab = Tab::Workouts;

        press(&mut app, KeyCode::Char('s'));
        assert!(app.rest_timer.is_active());
        assert_eq!(app.rest_timer.remaining(), Some(60));

        press(&mut app, KeyCode::Char('c'));
        assert!(!app.rest_timer.is_active());
        assert_eq!(app.rest_timer.remaining(), None);
    }

    #[test]
    fn test_catalog_navigation_stays_in_bounds() {
        let mut app = test_app();
        app.active_tab = Tab::Workouts;
        app.apply_data_event(DataEvent::Exercises(Ok(sample_exercises())));

        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.exercises_selected, 0);

        for _ in 0..10 {
            press(&mut app, KeyCode::Char('j'));
        }
        assert_eq!(app.exercises_selected, 2);

        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.exercises_selected, 0);
    }

    #[test]
    fn test_meal_navigation_on_empty_list() {
        let mut app = test_app();
        app.active_tab = Tab::Nutrition;
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('G'));
        assert_eq!(app.meals_selected, 0);
    }
}

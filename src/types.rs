//! Core data types for fitdash
//!
//! This module defines all shared data structures used throughout the application.

use serde::{Deserialize, Serialize};

/// An exercise from the remote catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Exercise {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub muscle_group: String,
}

/// A logged meal for the current day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Meal {
    pub id: String,
    pub name: String,
    pub time: String,
    pub calories: u32,
    pub protein: u32,
}

/// Daily aggregate figures (consumed vs. goal)
///
/// These are injected via the config file rather than derived from the
/// fetched collections. Defaults mirror the shipped placeholder day.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyStats {
    pub calories: u32,
    pub calories_goal: u32,
    pub protein: u32,
    pub protein_goal: u32,
    pub water: f64,
    pub water_goal: f64,
    pub workouts: u32,
    pub workouts_goal: u32,
}

impl Default for DailyStats {
    fn default() -> Self {
        Self {
            calories: 1570,
            calories_goal: 2200,
            protein: 120,
            protein_goal: 150,
            water: 1.8,
            water_goal: 2.5,
            workouts: 1,
            workouts_goal: 1,
        }
    }
}

impl DailyStats {
    /// Calories progress as a bounded percentage
    pub fn calories_percent(&self) -> u16 {
        percent(f64::from(self.calories), f64::from(self.calories_goal))
    }

    /// Protein progress as a bounded percentage
    pub fn protein_percent(&self) -> u16 {
        percent(f64::from(self.protein), f64::from(self.protein_goal))
    }

    /// Water progress as a bounded percentage
    pub fn water_percent(&self) -> u16 {
        percent(self.water, self.water_goal)
    }
}

/// Application tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Workouts,
    Nutrition,
    Stats,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Home, Tab::Workouts, Tab::Nutrition, Tab::Stats]
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Home => 0,
            Tab::Workouts => 1,
            Tab::Nutrition => 2,
            Tab::Stats => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Workouts => "Workouts",
            Tab::Nutrition => "Nutrition",
            Tab::Stats => "Stats",
        }
    }
}

// Helper functions

/// Ratio of value to goal as a percentage, clamped to 0..=100
///
/// Gauges and percentage rings must stay within bounds even when the
/// day overshoots its goal (or the goal is configured as zero).
pub fn percent(value: f64, goal: f64) -> u16 {
    if goal <= 0.0 {
        return 0;
    }
    let pct = (value / goal * 100.0).round();
    pct.clamp(0.0, 100.0) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_bounds() {
        assert_eq!(percent(1570.0, 2200.0), 71);
        assert_eq!(percent(0.0, 2200.0), 0);
        assert_eq!(percent(2200.0, 2200.0), 100);
        // Overshooting the goal must not exceed 100
        assert_eq!(percent(3000.0, 2200.0), 100);
        // Degenerate goal
        assert_eq!(percent(500.0, 0.0), 0);
    }

    #[test]
    fn test_daily_stats_defaults() {
        let stats = DailyStats::default();
        assert_eq!(stats.calories, 1570);
        assert_eq!(stats.calories_goal, 2200);
        assert_eq!(stats.calories_percent(), 71);
        assert_eq!(stats.protein_percent(), 80);
        assert_eq!(stats.water_percent(), 72);
    }

    #[test]
    fn test_tab_index_matches_order() {
        for (i, tab) in Tab::all().iter().enumerate() {
            assert_eq!(tab.index(), i);
        }
        assert_eq!(Tab::default(), Tab::Home);
    }

    #[test]
    fn test_meal_deserializes_from_endpoint_shape() {
        let meal: Meal = serde_json::from_str(
            r#"{"id": "m1", "name": "Oatmeal", "time": "08:00", "calories": 320, "protein": 12}"#,
        )
        .unwrap();
        assert_eq!(meal.name, "Oatmeal");
        assert_eq!(meal.protein, 12);
    }
}

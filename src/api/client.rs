//! HTTP client for the fitness endpoint
//!
//! The endpoint serves every collection from a single URL, selected by
//! an `action` query parameter. Responses wrap each collection in a
//! single-key JSON envelope; a missing key means an empty collection.

use crate::config::ApiConfig;
use crate::types::{Exercise, Meal};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;

/// Blocking client for the two read-only collection fetches
pub struct ApiClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: config.base_url.clone(),
            http,
        })
    }

    /// Fetch the exercise catalog (`?action=exercises`)
    pub fn exercises(&self) -> Result<Vec<Exercise>> {
        let body = self.get("exercises")?;
        parse_exercises(&body)
    }

    /// Fetch today's meals (`?action=meals_today`)
    pub fn meals_today(&self) -> Result<Vec<Meal>> {
        let body = self.get("meals_today")?;
        parse_meals(&body)
    }

    fn get(&self, action: &str) -> Result<String> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[("action", action)])
            .send()
            .with_context(|| format!("Request for action={} failed", action))?;

        response
            .error_for_status()
            .with_context(|| format!("Endpoint rejected action={}", action))?
            .text()
            .with_context(|| format!("Failed to read action={} response body", action))
    }
}

#[derive(Debug, Default, Deserialize)]
struct ExercisesEnvelope {
    #[serde(default)]
    exercises: Vec<Exercise>,
}

#[derive(Debug, Default, Deserialize)]
struct MealsEnvelope {
    #[serde(default)]
    meals: Vec<Meal>,
}

/// Parse an `{ "exercises": [...] }` envelope; an absent key is an empty list
fn parse_exercises(body: &str) -> Result<Vec<Exercise>> {
    let envelope: ExercisesEnvelope =
        serde_json::from_str(body).context("Malformed exercises response")?;
    Ok(envelope.exercises)
}

/// Parse an `{ "meals": [...] }` envelope; an absent key is an empty list
fn parse_meals(body: &str) -> Result<Vec<Meal>> {
    let envelope: MealsEnvelope =
        serde_json::from_str(body).context("Malformed meals response")?;
    Ok(envelope.meals)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exercises() {
        let body = r#"{
            "exercises": [
                {"id": 1, "name": "Bench Press", "category": "Strength", "muscle_group": "Chest"},
                {"id": 2, "name": "Squat", "category": "Strength", "muscle_group": "Legs"}
            ]
        }"#;

        let exercises = parse_exercises(body).unwrap();
        assert_eq!(exercises.len(), 2);
        assert_eq!(exercises[0].name, "Bench Press");
        assert_eq!(exercises[1].muscle_group, "Legs");
    }

    #[test]
    fn test_empty_list_is_not_an_error() {
        let exercises = parse_exercises(r#"{"exercises": []}"#).unwrap();
        assert!(exercises.is_empty());
    }

    #[test]
    fn test_absent_key_is_empty_list() {
        assert!(parse_exercises("{}").unwrap().is_empty());
        assert!(parse_meals("{}").unwrap().is_empty());
    }

    #[test]
    fn test_parse_meals() {
        let body = r#"{
            "meals": [
                {"id": "m1", "name": "Oatmeal", "time": "08:00", "calories": 320, "protein": 12}
            ]
        }"#;

        let meals = parse_meals(body).unwrap();
        assert_eq!(meals.len(), 1);
        assert_eq!(meals[0].time, "08:00");
        assert_eq!(meals[0].calories, 320);
    }

    #[test]
    fn test_malformed_body_is_an_error() {
        assert!(parse_exercises("<html>502</html>").is_err());
        assert!(parse_meals(r#"{"meals": "nope"}"#).is_err());
    }
}

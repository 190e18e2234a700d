//! Static placeholder content
//!
//! Display-only figures that ship with the app: today's workout, the
//! canned plans, the recent weight series, monthly progress, and
//! personal records. None of this is derived from the fetched
//! collections or mutated at runtime.

/// One line of today's workout card
#[derive(Debug, Clone, Copy)]
pub struct WorkoutSet {
    pub exercise: &'static str,
    /// Sets × reps, e.g. "4x8"
    pub scheme: &'static str,
}

/// Today's planned workout
#[derive(Debug, Clone, Copy)]
pub struct TodayWorkout {
    pub focus: &'static str,
    pub sets: &'static [WorkoutSet],
}

pub fn today_workout() -> TodayWorkout {
    TodayWorkout {
        focus: "Chest + Triceps",
        sets: &[
            WorkoutSet {
                exercise: "Barbell Bench Press",
                scheme: "4x8",
            },
            WorkoutSet {
                exercise: "Incline Dumbbell Press",
                scheme: "3x12",
            },
        ],
    }
}

/// A canned workout plan
#[derive(Debug, Clone, Copy)]
pub struct WorkoutPlan {
    pub name: &'static str,
    pub description: &'static str,
}

pub fn workout_plans() -> &'static [WorkoutPlan] {
    &[
        WorkoutPlan {
            name: "Push Day",
            description: "Chest, shoulders, triceps",
        },
        WorkoutPlan {
            name: "Pull Day",
            description: "Back, biceps",
        },
    ]
}

/// Body weight over the last seven days, in kilograms
pub fn weight_history() -> &'static [f64] {
    &[72.0, 71.5, 71.8, 71.2, 71.0, 70.8, 70.5]
}

/// One row of the monthly progress card
#[derive(Debug, Clone, Copy)]
pub struct ProgressItem {
    pub label: &'static str,
    pub value: &'static str,
    pub percent: u16,
}

pub fn monthly_progress() -> &'static [ProgressItem] {
    &[
        ProgressItem {
            label: "Workouts",
            value: "16 / 20",
            percent: 80,
        },
        ProgressItem {
            label: "Days on calorie target",
            value: "22 / 30",
            percent: 73,
        },
        ProgressItem {
            label: "Weight change",
            value: "-1.5 kg",
            percent: 60,
        },
    ]
}

/// A personal best lift
#[derive(Debug, Clone, Copy)]
pub struct PersonalRecord {
    pub exercise: &'static str,
    pub weight_kg: u32,
}

pub fn personal_records() -> &'static [PersonalRecord] {
    &[
        PersonalRecord {
            exercise: "Bench Press",
            weight_kg: 85,
        },
        PersonalRecord {
            exercise: "Squat",
            weight_kg: 110,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_history_covers_a_week() {
        assert_eq!(weight_history().len(), 7);
        assert!(weight_history().iter().all(|w| *w > 0.0));
    }

    #[test]
    fn test_progress_percentages_are_bounded() {
        for item in monthly_progress() {
            assert!(item.percent <= 100, "{} exceeds 100%", item.label);
        }
    }
}

use serde::Serialize;

/// Weekly habit completions that earn the full habit share of the score.
pub const HABIT_TARGET_PER_WEEK: f64 = 50.0;
/// Weekly task completions that earn the full task share of the score.
pub const TASK_TARGET_PER_WEEK: f64 = 30.0;

const HABIT_WEIGHT: f64 = 0.40;
const TASK_WEIGHT: f64 = 0.35;
const MOOD_WEIGHT: f64 = 0.25;

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `part / whole` as a percentage; zero when there is nothing to complete.
pub fn completion_rate(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    f64::from(part) / f64::from(whole) * 100.0
}

/// Week-over-week change in percent. Growth from nothing counts as 100.
pub fn percentage_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return if current > 0.0 { 100.0 } else { 0.0 };
    }
    (current - previous) / previous * 100.0
}

/// 0..=100 activity score for one week.
pub fn activity_score(habit_completions: u32, tasks_completed: u32, average_mood: f64) -> f64 {
    let habits = (f64::from(habit_completions) / HABIT_TARGET_PER_WEEK).min(1.0) * 100.0;
    let tasks = (f64::from(tasks_completed) / TASK_TARGET_PER_WEEK).min(1.0) * 100.0;
    let mood = (average_mood / 5.0) * 100.0;

    habits * HABIT_WEIGHT + tasks * TASK_WEIGHT + mood * MOOD_WEIGHT
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Rank {
    Master,
    Expert,
    Advanced,
    Intermediate,
    Beginner,
}

impl Rank {
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 90.0 => Rank::Master,
            s if s >= 75.0 => Rank::Expert,
            s if s >= 60.0 => Rank::Advanced,
            s if s >= 40.0 => Rank::Intermediate,
            _ => Rank::Beginner,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rank::Master => "Master",
            Rank::Expert => "Expert",
            Rank::Advanced => "Advanced",
            Rank::Intermediate => "Intermediate",
            Rank::Beginner => "Beginner",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Rank::Master => "🏆",
            Rank::Expert => "⭐",
            Rank::Advanced => "🎯",
            Rank::Intermediate => "📈",
            Rank::Beginner => "🌱",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(66.666_666), 66.67);
        assert_eq!(round2(0.0), 0.0);
        assert_eq!(round2(12.344), 12.34);
    }

    #[test]
    fn test_completion_rate_handles_zero_whole() {
        assert_eq!(completion_rate(3, 0), 0.0);
        assert_eq!(completion_rate(1, 4), 25.0);
    }

    #[test]
    fn test_percentage_change() {
        assert_eq!(percentage_change(5.0, 0.0), 100.0);
        assert_eq!(percentage_change(0.0, 0.0), 0.0);
        assert_eq!(percentage_change(15.0, 10.0), 50.0);
        assert_eq!(percentage_change(5.0, 10.0), -50.0);
    }

    #[test]
    fn test_activity_score_caps_each_component() {
        assert_eq!(activity_score(0, 0, 0.0), 0.0);
        assert_eq!(round2(activity_score(500, 300, 5.0)), 100.0);
        // 25 habits -> half of 40, 15 tasks -> half of 35, mood 2.5 -> half of 25.
        assert_eq!(round2(activity_score(25, 15, 2.5)), 50.0);
    }

    #[test]
    fn test_rank_thresholds() {
        assert_eq!(Rank::from_score(90.0), Rank::Master);
        assert_eq!(Rank::from_score(89.99), Rank::Expert);
        assert_eq!(Rank::from_score(75.0), Rank::Expert);
        assert_eq!(Rank::from_score(60.0), Rank::Advanced);
        assert_eq!(Rank::from_score(40.0), Rank::Intermediate);
        assert_eq!(Rank::from_score(39.9), Rank::Beginner);
        assert_eq!(Rank::Beginner.label(), "Beginner");
    }
}

/// Inputs for the rule-based dashboard hints.
#[derive(Debug, Clone, Copy, Default)]
pub struct DashboardSignals {
    pub habit_rate: f64,
    pub task_rate: f64,
    pub overdue_tasks: u32,
    pub average_mood: f64,
    pub mood_logs: u32,
    pub days: u32,
}

pub fn dashboard_insights(signals: &DashboardSignals) -> Vec<String> {
    let mut insights = Vec::new();

    insights.push(
        match signals.habit_rate {
            r if r >= 80.0 => "🎯 Excellent habit consistency! You're building strong routines.",
            r if r >= 60.0 => "💪 Good habit progress! Try to be more consistent.",
            _ => "🔄 Focus on building habit consistency. Start with small, achievable goals.",
        }
        .to_string(),
    );

    insights.push(
        match signals.task_rate {
            r if r >= 80.0 => "✅ Great task management! You're staying on top of your work.",
            r if r >= 60.0 => "📋 Decent task completion. Consider better time management.",
            _ => "⏰ Focus on completing tasks. Break them into smaller, manageable pieces.",
        }
        .to_string(),
    );

    if signals.overdue_tasks > 0 {
        insights.push(format!(
            "⚠️ You have {} overdue tasks. Prioritize completing them.",
            signals.overdue_tasks
        ));
    }

    if signals.average_mood >= 4.0 {
        insights.push("😊 Your mood has been positive! Keep up the good work.".to_string());
    } else if signals.average_mood >= 3.0 {
        insights.push(
            "😐 Your mood is stable. Consider activities that boost your wellbeing.".to_string(),
        );
    } else if signals.mood_logs > 0 {
        insights.push(
            "😔 Your mood could be better. Consider self-care and stress management.".to_string(),
        );
    }

    if f64::from(signals.mood_logs) < f64::from(signals.days) * 0.5 {
        insights.push("📱 Track your mood more regularly for better insights.".to_string());
    }

    insights
}

/// `consistency` is the percentage of days in the window that have a log.
pub fn mood_insights(average_mood: f64, average_energy: f64, consistency: f64) -> Vec<String> {
    let mood = match average_mood {
        m if m >= 4.0 => "Your overall mood has been positive! Keep up the good habits.",
        m if m >= 3.0 => "Your mood has been generally stable.",
        _ => "Your mood has been lower recently. Consider talking to someone or practicing self-care.",
    };
    let energy = match average_energy {
        e if e >= 4.0 => "You've been maintaining high energy levels consistently.",
        e if e >= 3.0 => "Your energy levels are moderate.",
        _ => "Your energy has been low. Consider improving sleep or exercise habits.",
    };
    let tracking = match consistency {
        c if c >= 80.0 => "Great job maintaining consistent mood tracking!",
        c if c >= 50.0 => "You're doing well with mood tracking, try to be more consistent.",
        _ => "Try to log your mood more regularly for better insights.",
    };

    vec![mood.to_string(), energy.to_string(), tracking.to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_insights_for_strong_week() {
        let insights = dashboard_insights(&DashboardSignals {
            habit_rate: 90.0,
            task_rate: 85.0,
            overdue_tasks: 0,
            average_mood: 4.5,
            mood_logs: 7,
            days: 7,
        });

        assert_eq!(insights.len(), 3);
        assert!(insights[0].contains("Excellent habit consistency"));
        assert!(insights[1].contains("Great task management"));
        assert!(insights[2].contains("positive"));
    }

    #[test]
    fn test_dashboard_insights_flag_overdue_and_sparse_logging() {
        let insights = dashboard_insights(&DashboardSignals {
            habit_rate: 10.0,
            task_rate: 65.0,
            overdue_tasks: 3,
            average_mood: 0.0,
            mood_logs: 0,
            days: 30,
        });

        assert!(insights.iter().any(|i| i.contains("3 overdue tasks")));
        assert!(insights.iter().any(|i| i.contains("Track your mood")));
        // No mood sentence without any logs.
        assert!(!insights.iter().any(|i| i.contains("mood could be better")));
    }

    #[test]
    fn test_mood_insights_bands() {
        let insights = mood_insights(3.2, 4.1, 40.0);
        assert_eq!(insights.len(), 3);
        assert!(insights[0].contains("generally stable"));
        assert!(insights[1].contains("high energy"));
        assert!(insights[2].contains("more regularly"));
    }
}

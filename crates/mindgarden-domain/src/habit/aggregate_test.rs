#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::shared::UserId;
    use chrono::{NaiveDate, Utc};

    fn habit(frequency: Frequency) -> Habit {
        Habit::new(
            UserId::new(),
            "Meditate".to_string(),
            Some("  ten minutes ".to_string()),
            frequency,
            None,
            Some("".to_string()),
            None,
            Utc::now(),
        )
        .unwrap()
    }

    #[test]
    fn test_create_habit_defaults() {
        let h = habit(Frequency::every_day());

        assert_eq!(h.name(), "Meditate");
        assert_eq!(h.description(), Some("ten minutes"));
        assert_eq!(h.category(), None);
        assert_eq!(h.target_per_week(), DEFAULT_TARGET_PER_WEEK);
        assert!(h.target_days().is_empty());
        assert_eq!(h.weekly_target(), 7);
        assert!(h.is_active());
        assert!(h.updated_at().is_none());
    }

    #[test]
    fn test_create_habit_rejects_empty_name() {
        let result = Habit::new(
            UserId::new(),
            "   ".to_string(),
            None,
            Frequency::every_day(),
            None,
            None,
            None,
            Utc::now(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_target_per_week_bounds() {
        let mut h = habit(Frequency::every_day());
        assert!(h.set_target_per_week(0, Utc::now()).is_err());
        assert!(h.set_target_per_week(8, Utc::now()).is_err());
        assert_eq!(h.target_per_week(), DEFAULT_TARGET_PER_WEEK);

        h.set_target_per_week(5, Utc::now()).unwrap();
        assert_eq!(h.target_per_week(), 5);
        assert!(h.updated_at().is_some());
    }

    #[test]
    fn test_target_days_are_validated_and_sorted() {
        let mut h = habit(Frequency::every_day());
        assert!(h.set_target_days(vec![1, 9], Utc::now()).is_err());

        h.set_target_days(vec![5, 1, 3, 1], Utc::now()).unwrap();
        assert_eq!(h.target_days(), &[1, 3, 5]);
        assert_eq!(h.weekly_target(), 3);
    }

    #[test]
    fn test_is_scheduled_on() {
        let h = habit(Frequency::parse(&["mon", "wed"]).unwrap());
        // 2024-01-01 is a Monday.
        assert!(h.is_scheduled_on(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()));
        assert!(!h.is_scheduled_on(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()));
        assert!(h.is_scheduled_on(NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()));
    }

    #[test]
    fn test_ownership() {
        let h = habit(Frequency::every_day());
        assert!(h.is_owned_by(&h.user_id().clone()));
        assert!(!h.is_owned_by(&UserId::new()));
    }

    #[test]
    fn test_deactivate_and_rename() {
        let mut h = habit(Frequency::every_day());
        h.set_active(false, Utc::now());
        assert!(!h.is_active());

        assert!(h.rename("".to_string(), Utc::now()).is_err());
        h.rename("Journal".to_string(), Utc::now()).unwrap();
        assert_eq!(h.name(), "Journal");
    }
}

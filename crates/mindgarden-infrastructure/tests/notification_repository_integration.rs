use chrono::Duration;
use mindgarden_domain::notification::{
    NotificationPreferences, NotificationRepository, NotificationSnooze, ReminderTime,
};
use mindgarden_infrastructure::persistence::repositories::SqliteNotificationRepository;

mod test_helpers;

#[tokio::test]
async fn preferences_absent_until_saved() {
    let pool = test_helpers::setup_in_memory_db().await;
    let user_id = test_helpers::seed_user(&pool, "prefs@example.com").await;
    let repo = SqliteNotificationRepository::new(pool);

    assert!(repo.find_preferences(&user_id).await.unwrap().is_none());

    let prefs = NotificationPreferences::new(
        user_id.clone(),
        false,
        true,
        ReminderTime::hm(7, 30).unwrap(),
        ReminderTime::hm(20, 0).unwrap(),
        15,
    )
    .unwrap();
    repo.save_preferences(&prefs).await.expect("Save preferences");

    let found = repo.find_preferences(&user_id).await.unwrap().unwrap();
    assert_eq!(found, prefs);

    let updated = NotificationPreferences::new(
        user_id.clone(),
        true,
        true,
        ReminderTime::hm(8, 0).unwrap(),
        ReminderTime::hm(20, 0).unwrap(),
        45,
    )
    .unwrap();
    repo.save_preferences(&updated).await.unwrap();

    let found = repo.find_preferences(&user_id).await.unwrap().unwrap();
    assert!(found.habits_enabled());
    assert_eq!(found.habits_time().to_string(), "08:00");
    assert_eq!(found.snooze_minutes(), 45);
}

#[tokio::test]
async fn active_snooze_is_latest_unexpired() {
    let pool = test_helpers::setup_in_memory_db().await;
    let user_id = test_helpers::seed_user(&pool, "snooze@example.com").await;
    let repo = SqliteNotificationRepository::new(pool);
    let now = test_helpers::fixed_now();

    let short = NotificationSnooze::new(user_id.clone(), "habit-1".into(), 10, now).unwrap();
    let long = NotificationSnooze::new(user_id.clone(), "habit-1".into(), 60, now).unwrap();
    repo.save_snooze(&short).await.unwrap();
    repo.save_snooze(&long).await.unwrap();

    let active = repo
        .find_active_snooze(&user_id, "habit-1", now + Duration::minutes(5))
        .await
        .unwrap()
        .expect("Snooze should be active");
    assert_eq!(active.snooze_until(), now + Duration::minutes(60));

    assert!(repo
        .find_active_snooze(&user_id, "habit-1", now + Duration::minutes(61))
        .await
        .unwrap()
        .is_none());
    assert!(repo
        .find_active_snooze(&user_id, "task-9", now)
        .await
        .unwrap()
        .is_none());
}

use chrono::NaiveDate;
use mindgarden_domain::habit::{
    Frequency, Habit, HabitCompletion, HabitCompletionRepository, HabitRepository,
};
use mindgarden_domain::shared::{DomainError, UserId};
use mindgarden_domain::streak::{compute_streaks, normalize_dates_lossy};
use mindgarden_infrastructure::persistence::repositories::{
    SqliteHabitCompletionRepository, SqliteHabitRepository,
};

mod test_helpers;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
}

fn habit_for(user_id: &UserId, name: &str) -> Habit {
    Habit::new(
        user_id.clone(),
        name.to_string(),
        Some("Ten minutes".to_string()),
        Frequency::parse(&["mon", "wed", "fri"]).unwrap(),
        Some(3),
        Some("health".to_string()),
        Some(vec![5, 1, 3]),
        test_helpers::fixed_now(),
    )
    .expect("Create habit")
}

#[tokio::test]
async fn habit_repo_round_trip() {
    let pool = test_helpers::setup_in_memory_db().await;
    let user_id = test_helpers::seed_user(&pool, "habits@example.com").await;
    let repo = SqliteHabitRepository::new(pool);

    let habit = habit_for(&user_id, "Meditate");
    repo.save(&habit).await.expect("Save habit");

    let found = repo
        .find_by_id(habit.id())
        .await
        .expect("Find habit")
        .expect("Habit should exist");
    assert_eq!(found.name(), "Meditate");
    assert_eq!(found.description(), Some("Ten minutes"));
    assert_eq!(found.target_per_week(), 3);
    assert_eq!(found.category(), Some("health"));
    assert!(found.is_active());
    assert_eq!(found.created_at(), habit.created_at());
    assert_eq!(found.frequency().keys(), vec!["mon", "wed", "fri"]);
    assert_eq!(found.target_days(), &[1, 3, 5]);
}

#[tokio::test]
async fn habit_repo_scopes_by_user_and_activity() {
    let pool = test_helpers::setup_in_memory_db().await;
    let alice = test_helpers::seed_user(&pool, "alice@example.com").await;
    let bob = test_helpers::seed_user(&pool, "bob@example.com").await;
    let repo = SqliteHabitRepository::new(pool);

    let mut paused = habit_for(&alice, "Journal");
    paused.set_active(false, test_helpers::fixed_now());
    repo.save(&habit_for(&alice, "Walk")).await.unwrap();
    repo.save(&paused).await.unwrap();
    repo.save(&habit_for(&bob, "Read")).await.unwrap();

    assert_eq!(repo.find_by_user(&alice).await.unwrap().len(), 2);
    let active = repo.find_active_by_user(&alice).await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].name(), "Walk");
    assert_eq!(repo.find_by_user(&bob).await.unwrap().len(), 1);
}

#[tokio::test]
async fn habit_update_keeps_completions() {
    let pool = test_helpers::setup_in_memory_db().await;
    let user_id = test_helpers::seed_user(&pool, "keep@example.com").await;
    let habits = SqliteHabitRepository::new(pool.clone());
    let completions = SqliteHabitCompletionRepository::new(pool);
    let now = test_helpers::fixed_now();

    let mut habit = habit_for(&user_id, "Stretch");
    habits.save(&habit).await.unwrap();
    completions
        .insert(&HabitCompletion::new(user_id.clone(), habit.id().clone(), day(9), now))
        .await
        .unwrap();

    habit.rename("Stretch more".to_string(), now).unwrap();
    habits.save(&habit).await.unwrap();

    assert_eq!(completions.count_for_habit(habit.id()).await.unwrap(), 1);
}

#[tokio::test]
async fn completion_is_unique_per_day() {
    let pool = test_helpers::setup_in_memory_db().await;
    let user_id = test_helpers::seed_user(&pool, "unique@example.com").await;
    let habits = SqliteHabitRepository::new(pool.clone());
    let completions = SqliteHabitCompletionRepository::new(pool);
    let now = test_helpers::fixed_now();

    let habit = habit_for(&user_id, "Water");
    habits.save(&habit).await.unwrap();

    let first = HabitCompletion::new(user_id.clone(), habit.id().clone(), day(10), now);
    let again = HabitCompletion::new(user_id.clone(), habit.id().clone(), day(10), now);
    completions.insert(&first).await.expect("First completion");

    let err = completions.insert(&again).await.unwrap_err();
    assert!(matches!(err, DomainError::Conflict(_)), "got {err:?}");
    assert!(completions.exists_on(habit.id(), day(10)).await.unwrap());
    assert!(!completions.exists_on(habit.id(), day(9)).await.unwrap());
}

#[tokio::test]
async fn completion_counts_and_delete() {
    let pool = test_helpers::setup_in_memory_db().await;
    let user_id = test_helpers::seed_user(&pool, "counts@example.com").await;
    let habits = SqliteHabitRepository::new(pool.clone());
    let completions = SqliteHabitCompletionRepository::new(pool);
    let now = test_helpers::fixed_now();

    let a = habit_for(&user_id, "A");
    let b = habit_for(&user_id, "B");
    habits.save(&a).await.unwrap();
    habits.save(&b).await.unwrap();

    for d in [6, 8, 9, 10] {
        completions
            .insert(&HabitCompletion::new(user_id.clone(), a.id().clone(), day(d), now))
            .await
            .unwrap();
    }
    completions
        .insert(&HabitCompletion::new(user_id.clone(), b.id().clone(), day(10), now))
        .await
        .unwrap();

    assert_eq!(completions.count_for_habit(a.id()).await.unwrap(), 4);
    assert_eq!(
        completions.count_for_habit_between(a.id(), day(8), day(10)).await.unwrap(),
        3
    );
    assert_eq!(
        completions.count_for_user_between(&user_id, day(10), day(10)).await.unwrap(),
        2
    );

    assert!(completions.delete_on(a.id(), day(6)).await.unwrap());
    assert!(!completions.delete_on(a.id(), day(6)).await.unwrap());
    assert_eq!(completions.count_for_habit(a.id()).await.unwrap(), 3);
}

#[tokio::test]
async fn deleting_habit_removes_completions() {
    let pool = test_helpers::setup_in_memory_db().await;
    let user_id = test_helpers::seed_user(&pool, "cascade@example.com").await;
    let habits = SqliteHabitRepository::new(pool.clone());
    let completions = SqliteHabitCompletionRepository::new(pool);
    let now = test_helpers::fixed_now();

    let habit = habit_for(&user_id, "Floss");
    habits.save(&habit).await.unwrap();
    completions
        .insert(&HabitCompletion::new(user_id.clone(), habit.id().clone(), day(10), now))
        .await
        .unwrap();

    habits.delete(habit.id()).await.expect("Delete habit");

    assert!(habits.find_by_id(habit.id()).await.unwrap().is_none());
    assert!(completions.raw_dates_for_user(&user_id).await.unwrap().is_empty());
}

#[tokio::test]
async fn legacy_timestamp_rows_feed_streaks() {
    let pool = test_helpers::setup_in_memory_db().await;
    let user_id = test_helpers::seed_user(&pool, "legacy@example.com").await;
    let habits = SqliteHabitRepository::new(pool.clone());
    let completions = SqliteHabitCompletionRepository::new(pool.clone());

    let habit = habit_for(&user_id, "Run");
    habits.save(&habit).await.unwrap();

    // Older clients wrote full timestamps, and one row is unreadable.
    for (id, date) in [
        ("c1", "2024-01-08T07:30:00Z"),
        ("c2", "2024-01-09"),
        ("c3", "2024-01-10T21:15:00.123"),
        ("c4", "not-a-date"),
    ] {
        sqlx::query(
            "INSERT INTO habit_completions (id, user_id, habit_id, date, completed_at) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(id)
        .bind(user_id.as_str())
        .bind(habit.id().as_str())
        .bind(date)
        .bind(test_helpers::fixed_now())
        .execute(pool.as_ref())
        .await
        .unwrap();
    }

    let raws = completions.raw_dates_for_habit(habit.id()).await.unwrap();
    let (dates, rejected) = normalize_dates_lossy(raws);
    assert_eq!(rejected.len(), 1);
    assert!(rejected[0].contains("not-a-date"));

    let result = compute_streaks(dates, day(10));
    assert_eq!(result.current_streak, 3);
    assert_eq!(result.longest_streak, 3);

    assert!(completions.exists_on(habit.id(), day(8)).await.unwrap());
    assert_eq!(
        completions.count_for_habit_between(habit.id(), day(8), day(10)).await.unwrap(),
        3
    );
}

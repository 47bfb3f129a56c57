use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use std::collections::HashMap;
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::habit_commands::*;
use crate::application::commands::handlers::*;
use crate::application::commands::mood_commands::*;
use crate::application::commands::notification_commands::*;
use crate::application::commands::task_commands::*;
use crate::application::commands::user_commands::*;
use crate::application::context::UserContext;
use crate::application::dtos::*;
use crate::application::services::StreakReader;
use mindgarden_domain::habit::{
    Frequency, Habit, HabitCompletion, HabitCompletionRepository, HabitRepository,
};
use mindgarden_domain::mood::{MoodLog, MoodLogRepository};
use mindgarden_domain::notification::{
    NotificationPreferences, NotificationRepository, NotificationSnooze,
};
use mindgarden_domain::shared::{Clock, DomainError, FixedClock, HabitId, TaskId, UserId};
use mindgarden_domain::streak::RawDate;
use mindgarden_domain::task::{Task, TaskCounts, TaskFilter, TaskRepository};
use mindgarden_domain::user::{User, UserRepository, UserTimezone};

// Mock repositories for testing

struct MockHabitRepository {
    habits: tokio::sync::RwLock<HashMap<String, Habit>>,
}

impl MockHabitRepository {
    fn new() -> Self {
        Self {
            habits: tokio::sync::RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait::async_trait]
impl HabitRepository for MockHabitRepository {
    async fn save(&self, habit: &Habit) -> Result<(), DomainError> {
        let mut habits = self.habits.write().await;
        habits.insert(habit.id().as_str().to_string(), habit.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &HabitId) -> Result<Option<Habit>, DomainError> {
        let habits = self.habits.read().await;
        Ok(habits.get(id.as_str()).cloned())
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Habit>, DomainError> {
        let habits = self.habits.read().await;
        Ok(habits
            .values()
            .filter(|h| h.is_owned_by(user_id))
            .cloned()
            .collect())
    }

    async fn find_active_by_user(&self, user_id: &UserId) -> Result<Vec<Habit>, DomainError> {
        let habits = self.habits.read().await;
        Ok(habits
            .values()
            .filter(|h| h.is_owned_by(user_id) && h.is_active())
            .cloned()
            .collect())
    }

    async fn delete(&self, id: &HabitId) -> Result<(), DomainError> {
        let mut habits = self.habits.write().await;
        habits.remove(id.as_str());
        Ok(())
    }
}

/// Keeps `(habit_id, raw date)` pairs so tests can seed legacy encodings.
struct MockCompletionRepository {
    rows: tokio::sync::RwLock<Vec<(String, String, RawDate)>>,
}

impl MockCompletionRepository {
    fn new() -> Self {
        Self {
            rows: tokio::sync::RwLock::new(Vec::new()),
        }
    }

    async fn seed_raw(&self, user_id: &UserId, habit_id: &HabitId, raw: &str) {
        self.rows.write().await.push((
            user_id.as_str().to_string(),
            habit_id.as_str().to_string(),
            RawDate::from(raw),
        ));
    }

    async fn dates_for(&self, habit_id: &HabitId) -> Vec<NaiveDate> {
        self.rows
            .read()
            .await
            .iter()
            .filter(|(_, h, _)| h == habit_id.as_str())
            .filter_map(|(_, _, raw)| raw.normalize().ok())
            .collect()
    }
}

#[async_trait::async_trait]
impl HabitCompletionRepository for MockCompletionRepository {
    async fn insert(&self, completion: &HabitCompletion) -> Result<(), DomainError> {
        if self.exists_on(completion.habit_id(), completion.date()).await? {
            return Err(DomainError::Conflict("duplicate completion".to_string()));
        }
        self.rows.write().await.push((
            completion.user_id().as_str().to_string(),
            completion.habit_id().as_str().to_string(),
            RawDate::Date(completion.date()),
        ));
        Ok(())
    }

    async fn exists_on(&self, habit_id: &HabitId, date: NaiveDate) -> Result<bool, DomainError> {
        Ok(self.dates_for(habit_id).await.contains(&date))
    }

    async fn delete_on(&self, habit_id: &HabitId, date: NaiveDate) -> Result<bool, DomainError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|(_, h, raw)| !(h == habit_id.as_str() && raw.normalize().ok() == Some(date)));
        Ok(rows.len() < before)
    }

    async fn raw_dates_for_habit(&self, habit_id: &HabitId) -> Result<Vec<RawDate>, DomainError> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .filter(|(_, h, _)| h == habit_id.as_str())
            .map(|(_, _, raw)| raw.clone())
            .collect())
    }

    async fn raw_dates_for_user(&self, user_id: &UserId) -> Result<Vec<RawDate>, DomainError> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .filter(|(u, _, _)| u == user_id.as_str())
            .map(|(_, _, raw)| raw.clone())
            .collect())
    }

    async fn count_for_habit(&self, habit_id: &HabitId) -> Result<u32, DomainError> {
        Ok(self.dates_for(habit_id).await.len() as u32)
    }

    async fn count_for_habit_between(
        &self,
        habit_id: &HabitId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<u32, DomainError> {
        Ok(self
            .dates_for(habit_id)
            .await
            .into_iter()
            .filter(|d| *d >= start && *d <= end)
            .count() as u32)
    }

    async fn count_for_user_between(
        &self,
        _user_id: &UserId,
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> Result<u32, DomainError> {
        Ok(0)
    }
}

struct MockTaskRepository {
    tasks: tokio::sync::RwLock<HashMap<String, Task>>,
}

impl MockTaskRepository {
    fn new() -> Self {
        Self {
            tasks: tokio::sync::RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait::async_trait]
impl TaskRepository for MockTaskRepository {
    async fn save(&self, task: &Task) -> Result<(), DomainError> {
        let mut tasks = self.tasks.write().await;
        tasks.insert(task.id().as_str().to_string(), task.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, DomainError> {
        let tasks = self.tasks.read().await;
        Ok(tasks.get(id.as_str()).cloned())
    }

    async fn delete(&self, id: &TaskId) -> Result<(), DomainError> {
        let mut tasks = self.tasks.write().await;
        tasks.remove(id.as_str());
        Ok(())
    }

    async fn list(&self, user_id: &UserId, _filter: &TaskFilter) -> Result<Vec<Task>, DomainError> {
        let tasks = self.tasks.read().await;
        Ok(tasks
            .values()
            .filter(|t| t.is_owned_by(user_id))
            .cloned()
            .collect())
    }

    async fn list_overdue(
        &self,
        user_id: &UserId,
        now: DateTime<Utc>,
    ) -> Result<Vec<Task>, DomainError> {
        let tasks = self.tasks.read().await;
        Ok(tasks
            .values()
            .filter(|t| t.is_owned_by(user_id) && t.is_overdue(now))
            .cloned()
            .collect())
    }

    async fn list_incomplete(&self, user_id: &UserId) -> Result<Vec<Task>, DomainError> {
        let tasks = self.tasks.read().await;
        Ok(tasks
            .values()
            .filter(|t| t.is_owned_by(user_id) && !t.is_completed())
            .cloned()
            .collect())
    }

    async fn counts(
        &self,
        _user_id: &UserId,
        _now: DateTime<Utc>,
    ) -> Result<TaskCounts, DomainError> {
        Ok(TaskCounts::default())
    }

    async fn count_created_between(
        &self,
        _user_id: &UserId,
        _start: DateTime<Utc>,
        _end: DateTime<Utc>,
    ) -> Result<u32, DomainError> {
        Ok(0)
    }

    async fn count_completed_between(
        &self,
        _user_id: &UserId,
        _start: DateTime<Utc>,
        _end: DateTime<Utc>,
    ) -> Result<u32, DomainError> {
        Ok(0)
    }
}

struct MockMoodRepository {
    logs: tokio::sync::RwLock<HashMap<(String, NaiveDate), MoodLog>>,
}

impl MockMoodRepository {
    fn new() -> Self {
        Self {
            logs: tokio::sync::RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait::async_trait]
impl MoodLogRepository for MockMoodRepository {
    async fn upsert(&self, log: &MoodLog) -> Result<MoodLog, DomainError> {
        let mut logs = self.logs.write().await;
        let key = (log.user_id().as_str().to_string(), log.date());
        let saved = match logs.get(&key) {
            Some(existing) => MoodLog::restore(
                existing.id().clone(),
                log.user_id().clone(),
                log.date(),
                log.mood(),
                log.energy(),
                log.notes().map(str::to_string),
                log.source(),
                log.logged_at(),
            ),
            None => log.clone(),
        };
        logs.insert(key, saved.clone());
        Ok(saved)
    }

    async fn find_on(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Option<MoodLog>, DomainError> {
        let logs = self.logs.read().await;
        Ok(logs.get(&(user_id.as_str().to_string(), date)).cloned())
    }

    async fn list_between(
        &self,
        user_id: &UserId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<MoodLog>, DomainError> {
        let logs = self.logs.read().await;
        let mut found: Vec<MoodLog> = logs
            .values()
            .filter(|l| l.user_id() == user_id && l.date() >= start && l.date() <= end)
            .cloned()
            .collect();
        found.sort_by_key(|l| l.date());
        Ok(found)
    }

    async fn delete_on(&self, user_id: &UserId, date: NaiveDate) -> Result<bool, DomainError> {
        let mut logs = self.logs.write().await;
        Ok(logs.remove(&(user_id.as_str().to_string(), date)).is_some())
    }
}

mockall::mock! {
    Notifications {}

    #[async_trait::async_trait]
    impl NotificationRepository for Notifications {
        async fn find_preferences(
            &self,
            user_id: &UserId,
        ) -> Result<Option<NotificationPreferences>, DomainError>;
        async fn save_preferences(
            &self,
            preferences: &NotificationPreferences,
        ) -> Result<(), DomainError>;
        async fn save_snooze(&self, snooze: &NotificationSnooze) -> Result<(), DomainError>;
        async fn find_active_snooze(
            &self,
            user_id: &UserId,
            notification_id: &str,
            now: DateTime<Utc>,
        ) -> Result<Option<NotificationSnooze>, DomainError>;
    }
}

struct MockUserRepository {
    users: tokio::sync::RwLock<HashMap<String, User>>,
}

impl MockUserRepository {
    fn new() -> Self {
        Self {
            users: tokio::sync::RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait::async_trait]
impl UserRepository for MockUserRepository {
    async fn save(&self, user: &User) -> Result<(), DomainError> {
        let mut users = self.users.write().await;
        users.insert(user.id().as_str().to_string(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(id.as_str()).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email() == email).cloned())
    }
}

// Fixtures

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap()
}

fn clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock::new(now()))
}

fn ctx() -> UserContext {
    UserContext::new(UserId::new(), UserTimezone::UTC)
}

struct HabitFixture {
    habits: Arc<MockHabitRepository>,
    completions: Arc<MockCompletionRepository>,
    handler: HabitCompletionHandler,
}

impl HabitFixture {
    fn new() -> Self {
        let habits = Arc::new(MockHabitRepository::new());
        let completions = Arc::new(MockCompletionRepository::new());
        let streaks = Arc::new(StreakReader::new(completions.clone()));
        let handler =
            HabitCompletionHandler::new(habits.clone(), completions.clone(), streaks, clock());
        Self {
            habits,
            completions,
            handler,
        }
    }

    async fn habit_for(&self, context: &UserContext) -> Habit {
        let habit = Habit::new(
            context.user_id.clone(),
            "Read".to_string(),
            None,
            Frequency::every_day(),
            None,
            None,
            None,
            now(),
        )
        .unwrap();
        self.habits.save(&habit).await.unwrap();
        habit
    }
}

// ============================================================
// Habit handlers
// ============================================================

#[tokio::test]
async fn test_create_habit_handler() {
    let repo = Arc::new(MockHabitRepository::new());
    let handler = CreateHabitHandler::new(repo.clone(), clock());
    let context = ctx();

    let dto = handler
        .handle(CreateHabitCommand {
            context: context.clone(),
            input: CreateHabitInput {
                name: "  Meditate ".to_string(),
                description: Some("Ten minutes".to_string()),
                frequency: vec!["mon".to_string(), "Wednesday".to_string()],
                target_per_week: Some(2),
                category: Some("Health".to_string()),
                target_days: None,
            },
        })
        .await
        .unwrap();

    assert_eq!(dto.name, "Meditate");
    assert_eq!(dto.frequency, vec!["mon", "wed"]);
    assert_eq!(dto.current_streak, 0);
    assert!(dto.is_active);

    let stored = repo.find_by_user(&context.user_id).await.unwrap();
    assert_eq!(stored.len(), 1);
}

#[tokio::test]
async fn test_create_habit_rejects_unknown_weekday() {
    let handler = CreateHabitHandler::new(Arc::new(MockHabitRepository::new()), clock());

    let result = handler
        .handle(CreateHabitCommand {
            context: ctx(),
            input: CreateHabitInput {
                name: "Run".to_string(),
                description: None,
                frequency: vec!["someday".to_string()],
                target_per_week: None,
                category: None,
                target_days: None,
            },
        })
        .await;

    assert!(matches!(result, Err(DomainError::Validation(_))));
}

#[tokio::test]
async fn test_update_habit_applies_partial_fields() {
    let fixture = HabitFixture::new();
    let context = ctx();
    let habit = fixture.habit_for(&context).await;
    fixture
        .completions
        .seed_raw(&context.user_id, habit.id(), "2024-01-10")
        .await;

    let handler = UpdateHabitHandler::new(
        fixture.habits.clone(),
        Arc::new(StreakReader::new(fixture.completions.clone())),
        clock(),
    );
    let dto = handler
        .handle(UpdateHabitCommand {
            context: context.clone(),
            habit_id: habit.id().as_str().to_string(),
            input: UpdateHabitInput {
                name: Some("Read fiction".to_string()),
                is_active: Some(false),
                ..Default::default()
            },
        })
        .await
        .unwrap();

    assert_eq!(dto.name, "Read fiction");
    assert!(!dto.is_active);
    assert!(dto.updated_at.is_some());
    assert!(dto.completed_today);
    assert_eq!(dto.current_streak, 1);
}

#[tokio::test]
async fn test_update_habit_of_other_user_is_not_found() {
    let fixture = HabitFixture::new();
    let owner = ctx();
    let habit = fixture.habit_for(&owner).await;

    let handler = UpdateHabitHandler::new(
        fixture.habits.clone(),
        Arc::new(StreakReader::new(fixture.completions.clone())),
        clock(),
    );
    let result = handler
        .handle(UpdateHabitCommand {
            context: ctx(),
            habit_id: habit.id().as_str().to_string(),
            input: UpdateHabitInput::default(),
        })
        .await;

    assert!(matches!(result, Err(DomainError::NotFound(_))));
}

#[tokio::test]
async fn test_delete_habit_handler() {
    let fixture = HabitFixture::new();
    let context = ctx();
    let habit = fixture.habit_for(&context).await;

    let handler = DeleteHabitHandler::new(fixture.habits.clone());
    handler
        .handle(DeleteHabitCommand {
            context: context.clone(),
            habit_id: habit.id().as_str().to_string(),
        })
        .await
        .unwrap();

    assert!(fixture.habits.find_by_id(habit.id()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_log_habit_returns_streak_including_the_write() {
    let fixture = HabitFixture::new();
    let context = ctx();
    let habit = fixture.habit_for(&context).await;
    for day in ["2024-01-08", "2024-01-09T06:00:00Z"] {
        fixture
            .completions
            .seed_raw(&context.user_id, habit.id(), day)
            .await;
    }

    let result = fixture
        .handler
        .handle(LogHabitCommand {
            context: context.clone(),
            habit_id: habit.id().as_str().to_string(),
            input: LogHabitInput::default(),
        })
        .await
        .unwrap();

    assert_eq!(result.date, "2024-01-10");
    assert!(result.completed);
    assert_eq!(result.current_streak, 3);
    assert_eq!(result.longest_streak, 3);
}

#[tokio::test]
async fn test_log_habit_twice_is_idempotent() {
    let fixture = HabitFixture::new();
    let context = ctx();
    let habit = fixture.habit_for(&context).await;

    for _ in 0..2 {
        let result = fixture
            .handler
            .handle(LogHabitCommand {
                context: context.clone(),
                habit_id: habit.id().as_str().to_string(),
                input: LogHabitInput::default(),
            })
            .await
            .unwrap();
        assert_eq!(result.current_streak, 1);
    }
    assert_eq!(fixture.completions.count_for_habit(habit.id()).await.unwrap(), 1);
}

#[tokio::test]
async fn test_log_habit_with_unreadable_date_uses_today() {
    let fixture = HabitFixture::new();
    let context = ctx();
    let habit = fixture.habit_for(&context).await;

    let result = fixture
        .handler
        .handle(LogHabitCommand {
            context,
            habit_id: habit.id().as_str().to_string(),
            input: LogHabitInput {
                date: Some("last tuesday".to_string()),
                completed: true,
            },
        })
        .await
        .unwrap();

    assert_eq!(result.date, "2024-01-10");
    assert_eq!(result.current_streak, 1);
}

#[tokio::test]
async fn test_log_habit_uncomplete_removes_the_day() {
    let fixture = HabitFixture::new();
    let context = ctx();
    let habit = fixture.habit_for(&context).await;
    for day in ["2024-01-09", "2024-01-10"] {
        fixture
            .completions
            .seed_raw(&context.user_id, habit.id(), day)
            .await;
    }

    let result = fixture
        .handler
        .handle(LogHabitCommand {
            context,
            habit_id: habit.id().as_str().to_string(),
            input: LogHabitInput {
                date: Some("2024-01-10".to_string()),
                completed: false,
            },
        })
        .await
        .unwrap();

    assert!(!result.completed);
    assert_eq!(result.current_streak, 0);
    assert_eq!(result.longest_streak, 1);
}

#[tokio::test]
async fn test_complete_habit_conflicts_on_same_day() {
    let fixture = HabitFixture::new();
    let context = ctx();
    let habit = fixture.habit_for(&context).await;
    let cmd = CompleteHabitCommand {
        context,
        habit_id: habit.id().as_str().to_string(),
        date: None,
    };

    let first = fixture.handler.handle(cmd.clone()).await.unwrap();
    assert_eq!(first.completion_date, "2024-01-10");
    assert_eq!(first.completed_at, "2024-01-10T12:00:00Z");
    assert_eq!(first.current_streak, 1);

    match fixture.handler.handle(cmd).await {
        Err(DomainError::Conflict(msg)) => assert!(msg.contains("2024-01-10")),
        other => panic!("Expected Conflict, got {other:?}"),
    }
}

#[tokio::test]
async fn test_complete_habit_backfill_does_not_count_as_today() {
    let fixture = HabitFixture::new();
    let context = ctx();
    let habit = fixture.habit_for(&context).await;

    let result = fixture
        .handler
        .handle(CompleteHabitCommand {
            context,
            habit_id: habit.id().as_str().to_string(),
            date: Some("2024-01-09".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(result.current_streak, 0);
    assert_eq!(result.longest_streak, 1);
}

#[tokio::test]
async fn test_uncomplete_missing_day_is_not_found() {
    let fixture = HabitFixture::new();
    let context = ctx();
    let habit = fixture.habit_for(&context).await;

    let result = fixture
        .handler
        .handle(UncompleteHabitCommand {
            context,
            habit_id: habit.id().as_str().to_string(),
            date: "2024-01-05".to_string(),
        })
        .await;

    assert!(matches!(result, Err(DomainError::NotFound(_))));
}

#[tokio::test]
async fn test_uncomplete_recomputes_streaks() {
    let fixture = HabitFixture::new();
    let context = ctx();
    let habit = fixture.habit_for(&context).await;
    for day in ["2024-01-08", "2024-01-09", "2024-01-10"] {
        fixture
            .completions
            .seed_raw(&context.user_id, habit.id(), day)
            .await;
    }

    let result = fixture
        .handler
        .handle(UncompleteHabitCommand {
            context,
            habit_id: habit.id().as_str().to_string(),
            date: "2024-01-09".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(result.current_streak, 1);
    assert_eq!(result.longest_streak, 1);
}

// ============================================================
// Task handlers
// ============================================================

async fn create_task(repo: &Arc<MockTaskRepository>, context: &UserContext, due: &str) -> TaskDto {
    CreateTaskHandler::new(repo.clone(), clock())
        .handle(CreateTaskCommand {
            context: context.clone(),
            input: CreateTaskInput {
                title: "Write report".to_string(),
                description: None,
                due_date: Some(due.to_string()),
                estimated_minutes: None,
                priority: Some("high".to_string()),
                category: None,
                effort_type: None,
            },
        })
        .await
        .unwrap()
}

#[tokio::test]
async fn test_create_task_parses_due_date_and_priority() {
    let repo = Arc::new(MockTaskRepository::new());
    let dto = create_task(&repo, &ctx(), "2024-01-09").await;

    assert_eq!(dto.priority, "high");
    assert_eq!(dto.status, "pending");
    assert_eq!(dto.estimated_minutes, 30);
    assert_eq!(dto.due_date.as_deref(), Some("2024-01-09T00:00:00Z"));
    assert!(dto.is_overdue);
}

#[tokio::test]
async fn test_create_task_rejects_unknown_priority() {
    let handler = CreateTaskHandler::new(Arc::new(MockTaskRepository::new()), clock());
    let result = handler
        .handle(CreateTaskCommand {
            context: ctx(),
            input: CreateTaskInput {
                title: "Call".to_string(),
                description: None,
                due_date: None,
                estimated_minutes: None,
                priority: Some("critical".to_string()),
                category: None,
                effort_type: None,
            },
        })
        .await;

    assert!(matches!(result, Err(DomainError::Validation(_))));
}

#[tokio::test]
async fn test_update_task_status_keeps_completed_at_in_step() {
    let repo = Arc::new(MockTaskRepository::new());
    let context = ctx();
    let task = create_task(&repo, &context, "2024-01-12").await;
    let handler = UpdateTaskHandler::new(repo.clone(), clock());

    let done = handler
        .handle(UpdateTaskCommand {
            context: context.clone(),
            task_id: task.id.clone(),
            input: UpdateTaskInput {
                status: Some("completed".to_string()),
                due_date: Some(String::new()),
                ..Default::default()
            },
        })
        .await
        .unwrap();
    assert!(done.completed);
    assert!(done.completed_at.is_some());
    assert!(done.due_date.is_none());

    let reopened = handler
        .handle(UpdateTaskCommand {
            context,
            task_id: task.id,
            input: UpdateTaskInput {
                status: Some("in_progress".to_string()),
                ..Default::default()
            },
        })
        .await
        .unwrap();
    assert!(!reopened.completed);
    assert!(reopened.completed_at.is_none());
}

#[tokio::test]
async fn test_set_task_completion_round_trip() {
    let repo = Arc::new(MockTaskRepository::new());
    let context = ctx();
    let task = create_task(&repo, &context, "2024-01-09").await;
    let handler = SetTaskCompletionHandler::new(repo.clone(), clock());

    let done = handler
        .handle(SetTaskCompletionCommand {
            context: context.clone(),
            task_id: task.id.clone(),
            completed: true,
        })
        .await
        .unwrap();
    assert_eq!(done.status, "completed");
    assert!(!done.is_overdue);

    let reopened = handler
        .handle(SetTaskCompletionCommand {
            context,
            task_id: task.id,
            completed: false,
        })
        .await
        .unwrap();
    assert_eq!(reopened.status, "pending");
    assert!(reopened.is_overdue);
}

#[tokio::test]
async fn test_delete_task_of_other_user_is_not_found() {
    let repo = Arc::new(MockTaskRepository::new());
    let task = create_task(&repo, &ctx(), "2024-01-12").await;

    let result = DeleteTaskHandler::new(repo.clone())
        .handle(DeleteTaskCommand {
            context: ctx(),
            task_id: task.id.clone(),
        })
        .await;

    assert!(matches!(result, Err(DomainError::NotFound(_))));
    assert!(repo
        .find_by_id(&TaskId::from_string(&task.id))
        .await
        .unwrap()
        .is_some());
}

// ============================================================
// Mood handlers
// ============================================================

fn mood_input(mood: &str, energy: u8) -> LogMoodInput {
    LogMoodInput {
        mood: mood.to_string(),
        energy,
        notes: Some("  ".to_string()),
        source: None,
    }
}

#[tokio::test]
async fn test_log_mood_replaces_same_day_entry() {
    let repo = Arc::new(MockMoodRepository::new());
    let handler = LogMoodHandler::new(repo.clone(), clock());
    let context = ctx();

    let first = handler
        .handle(LogMoodCommand {
            context: context.clone(),
            input: mood_input("good", 4),
        })
        .await
        .unwrap();
    let second = handler
        .handle(LogMoodCommand {
            context: context.clone(),
            input: mood_input("low", 2),
        })
        .await
        .unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.date, "2024-01-10");
    assert_eq!(second.mood, "low");
    assert_eq!(second.mood_score, 2);
    assert_eq!(second.notes, None);
    assert_eq!(second.source, "text");
}

#[tokio::test]
async fn test_log_mood_validates_input() {
    let handler = LogMoodHandler::new(Arc::new(MockMoodRepository::new()), clock());

    for input in [mood_input("ecstatic", 3), mood_input("good", 6)] {
        let result = handler
            .handle(LogMoodCommand {
                context: ctx(),
                input,
            })
            .await;
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }
}

#[tokio::test]
async fn test_delete_mood_log() {
    let repo = Arc::new(MockMoodRepository::new());
    let context = ctx();
    LogMoodHandler::new(repo.clone(), clock())
        .handle(LogMoodCommand {
            context: context.clone(),
            input: mood_input("neutral", 3),
        })
        .await
        .unwrap();

    let handler = DeleteMoodLogHandler::new(repo);
    let deleted = handler
        .handle(DeleteMoodLogCommand {
            context: context.clone(),
            date: "2024-01-10".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(deleted.message, "Mood log for 2024-01-10 deleted successfully");

    let again = handler
        .handle(DeleteMoodLogCommand {
            context,
            date: "2024-01-10".to_string(),
        })
        .await;
    assert!(matches!(again, Err(DomainError::NotFound(_))));
}

// ============================================================
// Notification handlers
// ============================================================

#[tokio::test]
async fn test_update_preferences_merges_with_defaults() {
    let mut repo = MockNotifications::new();
    repo.expect_find_preferences().times(1).returning(|_| Ok(None));
    repo.expect_save_preferences()
        .times(1)
        .withf(|prefs| prefs.habits_time().to_string() == "07:30" && prefs.tasks_enabled())
        .returning(|_| Ok(()));

    let handler = UpdatePreferencesHandler::new(Arc::new(repo));
    let dto = handler
        .handle(UpdatePreferencesCommand {
            context: ctx(),
            input: UpdatePreferencesInput {
                habits_time: Some("07:30".to_string()),
                snooze_minutes: Some(15),
                ..Default::default()
            },
        })
        .await
        .unwrap();

    assert_eq!(dto.habits_time, "07:30");
    assert_eq!(dto.tasks_time, "18:00");
    assert_eq!(dto.snooze_minutes, 15);
}

#[tokio::test]
async fn test_update_preferences_rejects_bad_time_without_saving() {
    let mut repo = MockNotifications::new();
    repo.expect_find_preferences().returning(|_| Ok(None));
    repo.expect_save_preferences().times(0);

    let handler = UpdatePreferencesHandler::new(Arc::new(repo));
    let result = handler
        .handle(UpdatePreferencesCommand {
            context: ctx(),
            input: UpdatePreferencesInput {
                tasks_time: Some("6pm".to_string()),
                ..Default::default()
            },
        })
        .await;

    assert!(matches!(result, Err(DomainError::Validation(_))));
}

#[tokio::test]
async fn test_snooze_uses_preferred_length_when_omitted() {
    let context = ctx();
    let user_id = context.user_id.clone();
    let mut repo = MockNotifications::new();
    repo.expect_find_preferences().returning(move |_| {
        let t = mindgarden_domain::notification::ReminderTime::hm(9, 0).unwrap();
        Ok(Some(
            NotificationPreferences::new(user_id.clone(), true, true, t, t, 45).unwrap(),
        ))
    });
    repo.expect_save_snooze().times(1).returning(|_| Ok(()));

    let handler = SnoozeNotificationHandler::new(Arc::new(repo), clock());
    let result = handler
        .handle(SnoozeNotificationCommand {
            context,
            input: SnoozeInput {
                notification_id: "habit-1".to_string(),
                minutes: None,
            },
        })
        .await
        .unwrap();

    assert_eq!(result.notification_id, "habit-1");
    assert_eq!(result.snooze_until, "2024-01-10T12:45:00Z");
}

// ============================================================
// User handlers
// ============================================================

fn register_input(email: &str) -> RegisterUserInput {
    RegisterUserInput {
        email: email.to_string(),
        name: "Ada".to_string(),
        timezone: Some("Europe/Berlin".to_string()),
    }
}

#[tokio::test]
async fn test_register_user_and_duplicate_email() {
    let repo = Arc::new(MockUserRepository::new());
    let handler = RegisterUserHandler::new(repo.clone(), clock());

    let user = handler
        .handle(RegisterUserCommand {
            input: register_input("Ada@Example.com"),
        })
        .await
        .unwrap();
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.timezone, "Europe/Berlin");

    let duplicate = handler
        .handle(RegisterUserCommand {
            input: register_input("ada@example.com"),
        })
        .await;
    assert!(matches!(duplicate, Err(DomainError::Conflict(_))));
}

#[tokio::test]
async fn test_update_profile_validates_timezone() {
    let repo = Arc::new(MockUserRepository::new());
    let user = RegisterUserHandler::new(repo.clone(), clock())
        .handle(RegisterUserCommand {
            input: register_input("grace@example.com"),
        })
        .await
        .unwrap();
    let context = UserContext::new(UserId::from_string(&user.id), UserTimezone::UTC);
    let handler = UpdateProfileHandler::new(repo.clone(), clock());

    let updated = handler
        .handle(UpdateProfileCommand {
            context: context.clone(),
            input: UpdateProfileInput {
                name: Some("Grace".to_string()),
                timezone: Some("Asia/Tokyo".to_string()),
            },
        })
        .await
        .unwrap();
    assert_eq!(updated.name, "Grace");
    assert_eq!(updated.timezone, "Asia/Tokyo");
    assert_eq!(updated.last_seen_at.as_deref(), Some("2024-01-10T12:00:00Z"));

    let bad = handler
        .handle(UpdateProfileCommand {
            context,
            input: UpdateProfileInput {
                name: None,
                timezone: Some("Mars/Olympus".to_string()),
            },
        })
        .await;
    assert!(matches!(bad, Err(DomainError::Validation(_))));
}

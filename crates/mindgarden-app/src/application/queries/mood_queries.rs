use log::debug;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::application::context::UserContext;
use crate::application::dtos::{
    MoodAnalyticsDto, MoodLogDto, MoodLogsParams, MoodTimelineDto, MoodTimelineEntryDto,
    MoodTodayDto, MoodTrendPointDto, MoodTrendsDto,
};
use crate::application::utils::{format_date, parse_day, validate_days};
use mindgarden_domain::analytics::{
    completion_rate, iso_week_key, mood_insights, round2, trailing_days, DateRange, MoodStats,
};
use mindgarden_domain::mood::{MoodLog, MoodLogRepository};
use mindgarden_domain::shared::{Clock, DomainError};

const NO_MOOD_DATA: &str = "No mood data available yet. Start logging your daily mood!";

pub struct MoodQueries {
    mood_repo: Arc<dyn MoodLogRepository>,
    clock: Arc<dyn Clock>,
}

impl MoodQueries {
    pub fn new(mood_repo: Arc<dyn MoodLogRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { mood_repo, clock }
    }

    /// Newest first.
    pub async fn logs(
        &self,
        ctx: &UserContext,
        params: MoodLogsParams,
    ) -> Result<Vec<MoodLogDto>, DomainError> {
        let range = match (params.start_date.as_deref(), params.end_date.as_deref()) {
            (Some(start), Some(end)) => {
                let range = DateRange::new(parse_day(start)?, parse_day(end)?);
                if range.start > range.end {
                    return Err(DomainError::Validation(
                        "start_date must not be after end_date".to_string(),
                    ));
                }
                range
            }
            (None, None) => {
                let days = validate_days(params.days, 30, 1, 365)?;
                trailing_days(ctx.today(self.clock.as_ref()), days)
            }
            _ => {
                return Err(DomainError::Validation(
                    "start_date and end_date must be given together".to_string(),
                ))
            }
        };

        let logs = self.load(ctx, range).await?;
        Ok(logs.iter().rev().map(MoodLogDto::from).collect())
    }

    /// One entry per day, oldest first, whether or not the day was logged.
    pub async fn timeline(
        &self,
        ctx: &UserContext,
        days: Option<u32>,
    ) -> Result<MoodTimelineDto, DomainError> {
        let days = validate_days(days, 7, 1, 90)?;
        let range = trailing_days(ctx.today(self.clock.as_ref()), days);
        let logs = self.load(ctx, range).await?;
        let by_date: HashMap<_, _> = logs.iter().map(|log| (log.date(), log)).collect();

        let timeline: Vec<MoodTimelineEntryDto> = range
            .days()
            .map(|date| match by_date.get(&date) {
                Some(log) => MoodTimelineEntryDto {
                    date: format_date(date),
                    mood: Some(log.mood().to_string()),
                    energy: Some(log.energy().value()),
                    notes: log.notes().map(str::to_string),
                    has_log: true,
                },
                None => MoodTimelineEntryDto {
                    date: format_date(date),
                    mood: None,
                    energy: None,
                    notes: None,
                    has_log: false,
                },
            })
            .collect();

        Ok(MoodTimelineDto {
            logged_days: logs.len() as u32,
            total_days: range.len_days(),
            start_date: format_date(range.start),
            end_date: format_date(range.end),
            timeline,
        })
    }

    pub async fn analytics(
        &self,
        ctx: &UserContext,
        days: Option<u32>,
    ) -> Result<MoodAnalyticsDto, DomainError> {
        let days = validate_days(days, 30, 7, 365)?;
        let range = trailing_days(ctx.today(self.clock.as_ref()), days);
        let logs = self.load(ctx, range).await?;

        if logs.is_empty() {
            return Ok(MoodAnalyticsDto {
                period_days: days,
                total_logs: 0,
                average_mood_score: 0.0,
                average_energy: 0.0,
                mood_distribution: BTreeMap::new(),
                energy_distribution: BTreeMap::new(),
                insights: vec![NO_MOOD_DATA.to_string()],
                logging_consistency: 0.0,
            });
        }

        let stats = MoodStats::from_logs(&logs);
        let mut mood_distribution = BTreeMap::new();
        let mut energy_distribution = BTreeMap::new();
        for log in &logs {
            *mood_distribution.entry(log.mood().to_string()).or_insert(0) += 1;
            *energy_distribution
                .entry(log.energy().value().to_string())
                .or_insert(0) += 1;
        }
        let consistency = completion_rate(stats.count, days);

        debug!(
            "[mood] analytics user_id={} days={} logs={}",
            ctx.user_id, days, stats.count
        );

        Ok(MoodAnalyticsDto {
            period_days: days,
            total_logs: stats.count,
            average_mood_score: round2(stats.average_mood),
            average_energy: round2(stats.average_energy),
            mood_distribution,
            energy_distribution,
            insights: mood_insights(stats.average_mood, stats.average_energy, consistency),
            logging_consistency: round2(consistency),
        })
    }

    pub async fn today(&self, ctx: &UserContext) -> Result<MoodTodayDto, DomainError> {
        let today = ctx.today(self.clock.as_ref());
        let log = self.mood_repo.find_on(&ctx.user_id, today).await?;

        Ok(match log {
            Some(log) => MoodTodayDto {
                has_log: true,
                mood_log: Some(MoodLogDto::from(&log)),
                message: None,
            },
            None => MoodTodayDto {
                has_log: false,
                mood_log: None,
                message: Some("No mood logged for today yet".to_string()),
            },
        })
    }

    /// Weekly averages keyed by ISO week, oldest week first.
    pub async fn trends(
        &self,
        ctx: &UserContext,
        days: Option<u32>,
    ) -> Result<MoodTrendsDto, DomainError> {
        let days = validate_days(days, 30, 7, 365)?;
        let range = trailing_days(ctx.today(self.clock.as_ref()), days);
        let logs = self.load(ctx, range).await?;

        let mut weeks: BTreeMap<String, Vec<&MoodLog>> = BTreeMap::new();
        for log in &logs {
            weeks.entry(iso_week_key(log.date())).or_default().push(log);
        }

        let trends = weeks
            .into_iter()
            .map(|(week, logs)| {
                let stats = MoodStats::from_logs(logs).rounded();
                MoodTrendPointDto {
                    week,
                    average_mood: stats.average_mood,
                    average_energy: stats.average_energy,
                    log_count: stats.count,
                }
            })
            .collect();

        Ok(MoodTrendsDto {
            trends,
            period: format!("{} to {}", format_date(range.start), format_date(range.end)),
        })
    }

    async fn load(
        &self,
        ctx: &UserContext,
        range: DateRange,
    ) -> Result<Vec<MoodLog>, DomainError> {
        self.mood_repo
            .list_between(&ctx.user_id, range.start, range.end)
            .await
    }
}

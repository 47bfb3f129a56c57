use super::scoring::round2;
use crate::mood::MoodLog;

/// Averages and spread over a set of mood logs.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MoodStats {
    pub count: u32,
    pub average_mood: f64,
    pub average_energy: f64,
    /// Population variance of the mood score.
    pub variance: f64,
    /// 0..=100, higher is steadier. One log is perfectly stable; none scores 0.
    pub stability: f64,
}

impl MoodStats {
    pub fn from_scores<I>(scores: I) -> Self
    where
        I: IntoIterator<Item = (u8, u8)>,
    {
        let (moods, energies): (Vec<f64>, Vec<f64>) = scores
            .into_iter()
            .map(|(mood, energy)| (f64::from(mood), f64::from(energy)))
            .unzip();

        if moods.is_empty() {
            return Self::default();
        }

        let n = moods.len() as f64;
        let average_mood = moods.iter().sum::<f64>() / n;
        let average_energy = energies.iter().sum::<f64>() / n;

        let (variance, stability) = if moods.len() > 1 {
            let variance = moods
                .iter()
                .map(|m| (m - average_mood).powi(2))
                .sum::<f64>()
                / n;
            (variance, (100.0 - variance * 20.0).max(0.0))
        } else {
            (0.0, 100.0)
        };

        Self {
            count: moods.len() as u32,
            average_mood,
            average_energy,
            variance,
            stability,
        }
    }

    pub fn from_logs<'a, I>(logs: I) -> Self
    where
        I: IntoIterator<Item = &'a MoodLog>,
    {
        Self::from_scores(
            logs.into_iter()
                .map(|log| (log.mood().score(), log.energy().value())),
        )
    }

    /// Same values rounded to two decimals for presentation.
    pub fn rounded(&self) -> Self {
        Self {
            count: self.count,
            average_mood: round2(self.average_mood),
            average_energy: round2(self.average_energy),
            variance: round2(self.variance),
            stability: round2(self.stability),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_logs() {
        let stats = MoodStats::from_scores(Vec::<(u8, u8)>::new());
        assert_eq!(stats, MoodStats::default());
        assert_eq!(stats.stability, 0.0);
    }

    #[test]
    fn test_single_log_is_fully_stable() {
        let stats = MoodStats::from_scores(vec![(2, 4)]);
        assert_eq!(stats.count, 1);
        assert_eq!(stats.average_mood, 2.0);
        assert_eq!(stats.average_energy, 4.0);
        assert_eq!(stats.variance, 0.0);
        assert_eq!(stats.stability, 100.0);
    }

    #[test]
    fn test_variance_and_stability() {
        // moods 1 and 5: mean 3, variance 4, stability 100 - 80 = 20
        let stats = MoodStats::from_scores(vec![(1, 2), (5, 4)]);
        assert_eq!(stats.average_mood, 3.0);
        assert_eq!(stats.average_energy, 3.0);
        assert_eq!(stats.variance, 4.0);
        assert_eq!(stats.stability, 20.0);
    }

    #[test]
    fn test_stability_floors_at_zero() {
        // Spread wider than the 1..=5 scale allows, to reach the floor.
        let stats = MoodStats::from_scores(vec![(0, 1), (10, 1)]);
        assert_eq!(stats.variance, 25.0);
        assert_eq!(stats.stability, 0.0);
    }
}

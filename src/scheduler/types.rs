/*!
 * Scheduler Types
 * Queue disciplines and the multilevel queue configuration
 */

use crate::core::errors::MlqError;
use crate::core::limits::{
    DEFAULT_Q1_QUANTUM, DEFAULT_Q2_QUANTUM, Q1_QUANTUM_ENV, Q2_QUANTUM_ENV, QUEUE_LEVELS,
};
use crate::core::types::{MlqResult, QueueId, Tick};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

/// Round-robin time quantum in ticks (always positive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TimeQuantum(Tick);

impl TimeQuantum {
    /// Create new time quantum
    pub fn new(ticks: Tick) -> MlqResult<Self> {
        if ticks == 0 {
            return Err(MlqError::Configuration(
                "round-robin quantum must be at least 1 tick".to_string(),
            ));
        }
        Ok(Self(ticks))
    }

    #[inline(always)]
    pub const fn ticks(&self) -> Tick {
        self.0
    }
}

impl<'de> Deserialize<'de> for TimeQuantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ticks = Tick::deserialize(deserializer)?;
        Self::new(ticks).map_err(serde::de::Error::custom)
    }
}

/// Dispatch discipline of one queue level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "discipline", rename_all = "snake_case")]
pub enum Discipline {
    /// Run at most `quantum` ticks, then rotate to the tail
    RoundRobin { quantum: TimeQuantum },
    /// Run to completion once dispatched
    Fcfs,
}

impl Discipline {
    /// Quantum handed to `ProcessRecord::run`; `None` means run to completion
    #[inline]
    pub const fn quantum(&self) -> Option<Tick> {
        match self {
            Discipline::RoundRobin { quantum } => Some(quantum.ticks()),
            Discipline::Fcfs => None,
        }
    }

    fn short_name(&self) -> String {
        match self {
            Discipline::RoundRobin { quantum } => format!("RR-{}", quantum.ticks()),
            Discipline::Fcfs => "FCFS".to_string(),
        }
    }
}

/// One queue level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueConfig {
    #[serde(flatten)]
    pub discipline: Discipline,
    /// Display label; derived from the discipline when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl QueueConfig {
    pub fn new(discipline: Discipline) -> Self {
        Self {
            discipline,
            label: None,
        }
    }

    /// Label used in traces, e.g. `Queue 1 (RR-3)`
    pub fn label_for(&self, id: QueueId) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| format!("Queue {} ({})", id, self.discipline.short_name()))
    }
}

/// Full multilevel queue configuration
///
/// Levels are ordered by strict dispatch priority: level 0 serves Queue 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    pub levels: [QueueConfig; QUEUE_LEVELS],
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            levels: [
                QueueConfig::new(Discipline::RoundRobin {
                    quantum: TimeQuantum(DEFAULT_Q1_QUANTUM),
                }),
                QueueConfig::new(Discipline::RoundRobin {
                    quantum: TimeQuantum(DEFAULT_Q2_QUANTUM),
                }),
                QueueConfig::new(Discipline::Fcfs),
            ],
        }
    }
}

impl SchedulerConfig {
    /// Parse a JSON configuration
    pub fn from_json_str(json: &str) -> MlqResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON configuration file
    pub fn from_file(path: impl AsRef<Path>) -> MlqResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| MlqError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&contents)
    }

    /// Defaults overridden by `MLQ_Q1_QUANTUM` / `MLQ_Q2_QUANTUM`
    pub fn from_env() -> MlqResult<Self> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply quantum overrides from an arbitrary key lookup
    pub fn with_overrides<F>(mut self, lookup: F) -> MlqResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        for (level, key) in [(0, Q1_QUANTUM_ENV), (1, Q2_QUANTUM_ENV)] {
            if let Some(raw) = lookup(key) {
                let ticks = raw.trim().parse::<Tick>().map_err(|_| {
                    MlqError::Configuration(format!("{} must be a positive integer, got '{}'", key, raw))
                })?;
                self.levels[level].discipline = Discipline::RoundRobin {
                    quantum: TimeQuantum::new(ticks)?,
                };
            }
        }
        Ok(self)
    }

    #[inline]
    pub fn level(&self, id: QueueId) -> &QueueConfig {
        &self.levels[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_quantum_validation() {
        assert!(TimeQuantum::new(0).is_err());
        assert_eq!(TimeQuantum::new(3).unwrap().ticks(), 3);
    }

    #[test]
    fn test_default_levels() {
        let config = SchedulerConfig::default();
        assert_eq!(config.level(QueueId::Q1).discipline.quantum(), Some(3));
        assert_eq!(config.level(QueueId::Q2).discipline.quantum(), Some(5));
        assert_eq!(config.level(QueueId::Q3).discipline.quantum(), None);
        assert_eq!(config.level(QueueId::Q1).label_for(QueueId::Q1), "Queue 1 (RR-3)");
        assert_eq!(config.level(QueueId::Q3).label_for(QueueId::Q3), "Queue 3 (FCFS)");
    }

    #[test]
    fn test_json_config() {
        let json = r#"{"levels": [
            {"discipline": "round_robin", "quantum": 2, "label": "fast"},
            {"discipline": "round_robin", "quantum": 4},
            {"discipline": "fcfs"}
        ]}"#;
        let config = SchedulerConfig::from_json_str(json).unwrap();
        assert_eq!(config.levels[0].discipline.quantum(), Some(2));
        assert_eq!(config.levels[0].label_for(QueueId::Q1), "fast");
        assert_eq!(config.levels[1].label_for(QueueId::Q2), "Queue 2 (RR-4)");
    }

    #[test]
    fn test_json_rejects_zero_quantum() {
        let json = r#"{"levels": [
            {"discipline": "round_robin", "quantum": 0},
            {"discipline": "round_robin", "quantum": 4},
            {"discipline": "fcfs"}
        ]}"#;
        assert!(matches!(
            SchedulerConfig::from_json_str(json),
            Err(MlqError::Configuration(_))
        ));
    }

    #[test]
    fn test_overrides() {
        let config = SchedulerConfig::default()
            .with_overrides(|key| (key == Q2_QUANTUM_ENV).then(|| "8".to_string()))
            .unwrap();
        assert_eq!(config.levels[0].discipline.quantum(), Some(3));
        assert_eq!(config.levels[1].discipline.quantum(), Some(8));

        let bad = SchedulerConfig::default().with_overrides(|_| Some("zero".to_string()));
        assert!(matches!(bad, Err(MlqError::Configuration(_))));
    }
}

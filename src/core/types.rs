/*!
 * Core Types
 * Common types used across the simulator
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// Simulated time in ticks
pub type Tick = u64;

/// Priority level (higher is more important, any sign allowed)
pub type Priority = i64;

/// Common result type for simulator operations
pub type MlqResult<T> = Result<T, super::errors::MlqError>;

/// Static queue assignment of a process (1, 2 or 3)
///
/// Queue 1 is the most important level; lower ids always win dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct QueueId(u8);

impl QueueId {
    pub const Q1: QueueId = QueueId(1);
    pub const Q2: QueueId = QueueId(2);
    pub const Q3: QueueId = QueueId(3);

    /// All queue levels in dispatch order
    pub const ALL: [QueueId; super::limits::QUEUE_LEVELS] = [Self::Q1, Self::Q2, Self::Q3];

    /// Build a queue id, rejecting anything outside 1..=3
    pub fn new(id: u8) -> Option<Self> {
        match id {
            1..=3 => Some(Self(id)),
            _ => None,
        }
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Zero-based level index used to address queue storage
    #[inline]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl TryFrom<u8> for QueueId {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("queue id {} outside 1..=3", value))
    }
}

impl From<QueueId> for u8 {
    fn from(id: QueueId) -> Self {
        id.0
    }
}

impl fmt::Display for QueueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_id_bounds() {
        assert!(QueueId::new(0).is_none());
        assert_eq!(QueueId::new(1), Some(QueueId::Q1));
        assert_eq!(QueueId::new(3).map(QueueId::index), Some(2));
        assert!(QueueId::new(4).is_none());
    }

    #[test]
    fn test_queue_id_display_honours_width() {
        assert_eq!(format!("{:<4}|", QueueId::Q2), "2   |");
        assert_eq!(format!("{:>3}", QueueId::Q1), "  1");
        assert_eq!(QueueId::Q3.to_string(), "3");
    }

    #[test]
    fn test_queue_id_serde() {
        let id: QueueId = serde_json::from_str("2").unwrap();
        assert_eq!(id, QueueId::Q2);
        assert!(serde_json::from_str::<QueueId>("7").is_err());
        assert_eq!(serde_json::to_string(&QueueId::Q3).unwrap(), "3");
    }
}

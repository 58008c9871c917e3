//! Operation domain — server-side asynchronous operations and the bounded
//! polling state machine used to wait on them.
//!
//! The disk API answers long-running requests (remote upload, async delete)
//! with an operation link. The client reads the status behind that link until
//! it equals the expected value or the attempt budget runs out:
//!
//! ```text
//! attempt = 1
//! loop:
//!     status == expected      -> Succeeded
//!     attempt > budget        -> Exhausted
//!     sleep(interval); attempt += 1
//! ```
//!
//! The first check is immediate, so a run that succeeds on check `k + 1`
//! sleeps exactly `k` times, and an operation that never finishes is checked
//! `budget + 1` times.

#[cfg(feature = "http")]
pub mod poll;
pub mod wire;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::time::Duration;

// ─── OperationStatus ─────────────────────────────────────────────────────────

/// Status of a server-side operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationStatus {
    Success,
    InProgress,
    Failed,
    /// Any value the server sends that we do not model.
    Other(String),
}

impl OperationStatus {
    pub fn as_str(&self) -> &str {
        match self {
            OperationStatus::Success => "success",
            OperationStatus::InProgress => "in-progress",
            OperationStatus::Failed => "failed",
            OperationStatus::Other(s) => s,
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "success" => OperationStatus::Success,
            "in-progress" => OperationStatus::InProgress,
            "failed" => OperationStatus::Failed,
            other => OperationStatus::Other(other.to_string()),
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for OperationStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for OperationStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(OperationStatus::parse(&s))
    }
}

// ─── Poll state machine ──────────────────────────────────────────────────────

/// Default pause between two status checks.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Attempt budget used when waiting on an async folder delete.
pub const DELETE_POLL_BUDGET: u32 = 30;

/// Where a poll run stands after a status check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    /// Not there yet; `attempt` is the number of the next check.
    Pending { attempt: u32 },
    /// The expected status was observed on check number `attempts`.
    Succeeded { attempts: u32 },
    /// The budget is spent; `attempts` checks were made.
    Exhausted { attempts: u32 },
}

impl PollState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, PollState::Pending { .. })
    }
}

/// Budget and pacing of a poll run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollConfig {
    /// Failed checks tolerated before giving up. Check `budget + 1` is the last.
    pub budget: u32,
    /// Pause between a failed check and the next one.
    pub interval: Duration,
}

impl PollConfig {
    pub fn new(budget: u32) -> Self {
        Self {
            budget,
            interval: DEFAULT_POLL_INTERVAL,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Next state after check number `attempt` (1-based) observed `matched`.
    pub fn transition(&self, attempt: u32, matched: bool) -> PollState {
        if matched {
            PollState::Succeeded { attempts: attempt }
        } else if attempt > self.budget {
            PollState::Exhausted { attempts: attempt }
        } else {
            PollState::Pending {
                attempt: attempt.saturating_add(1),
            }
        }
    }

    /// Worst-case time spent sleeping before exhaustion.
    pub fn max_wait(&self) -> Duration {
        self.interval * self.budget
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self::new(DELETE_POLL_BUDGET)
    }
}

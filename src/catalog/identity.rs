use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::num::NonZeroU64;

/// Key of the blank scaffold entry the host tool opens for free-form editing.
pub const CUSTOM_KEY: &str = "custom";

/// Stable identifier for an example entry (e.g., `basic-button-click`).
///
/// The host tool uses keys as menu ids and URL fragments, so they are never
/// renamed once published.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExampleKey(pub String);

impl ExampleKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the designated blank/custom entry.
    pub fn is_custom(&self) -> bool {
        self.0 == CUSTOM_KEY
    }

    /// Keys must match `^[A-Za-z0-9_.-]+$`.
    pub fn is_well_formed(&self) -> bool {
        !self.0.is_empty()
            && self
                .0
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
    }
}

impl From<&str> for ExampleKey {
    fn from(value: &str) -> Self {
        ExampleKey(value.to_string())
    }
}

impl Borrow<str> for ExampleKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExampleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How long the visualizer renders stream activity, in milliseconds.
///
/// Zero is unrepresentable; deserializing `0` fails.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeWindow(NonZeroU64);

impl TimeWindow {
    /// Window used by every built-in example.
    pub const DEFAULT: TimeWindow = TimeWindow::from_millis_const(10_000);

    const fn from_millis_const(millis: u64) -> Self {
        match NonZeroU64::new(millis) {
            Some(value) => TimeWindow(value),
            None => panic!("time window must be positive"),
        }
    }

    pub fn from_millis(millis: u64) -> Option<Self> {
        NonZeroU64::new(millis).map(TimeWindow)
    }

    pub fn as_millis(self) -> u64 {
        self.0.get()
    }
}

impl Default for TimeWindow {
    fn default() -> Self {
        TimeWindow::DEFAULT
    }
}

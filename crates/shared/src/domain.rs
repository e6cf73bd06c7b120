use std::{fmt, time::Duration};

use serde::{Deserialize, Serialize};

/// Largest value a sequence element may hold. Bars are scaled against it.
pub const MAX_NUMBER: u32 = 100;
/// Smallest value `randomize` draws.
pub const MIN_RANDOM_VALUE: u32 = 5;
pub const RANDOM_LEN_MIN: usize = 10;
pub const RANDOM_LEN_MAX: usize = 15;

/// Cursor value of a stepper that is not running.
pub const IDLE: isize = -1;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence(pub Vec<u32>);

impl Sequence {
    pub fn new(values: Vec<u32>) -> Self {
        Self(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn as_mut_slice(&mut self) -> &mut [u32] {
        &mut self.0
    }

    pub fn is_sorted(&self) -> bool {
        self.0.windows(2).all(|pair| pair[0] <= pair[1])
    }
}

impl From<Vec<u32>> for Sequence {
    fn from(values: Vec<u32>) -> Self {
        Self(values)
    }
}

/// Comma separated form used to echo a sequence back into the input field.
impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

/// Animation speed, 1 (slowest) to 10 (fastest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SpeedLevel(u8);

impl SpeedLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(level: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&level).then_some(Self(level))
    }

    pub fn clamped(level: u8) -> Self {
        Self(level.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Tick interval: 1000ms at level 1 down to 100ms at level 10.
    pub fn delay(self) -> Duration {
        Duration::from_millis(1100 - u64::from(self.0) * 100)
    }
}

impl Default for SpeedLevel {
    fn default() -> Self {
        Self(5)
    }
}

impl TryFrom<u8> for SpeedLevel {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level).ok_or_else(|| {
            format!(
                "speed level {level} is outside {}..={}",
                Self::MIN,
                Self::MAX
            )
        })
    }
}

impl From<SpeedLevel> for u8 {
    fn from(level: SpeedLevel) -> Self {
        level.0
    }
}

/// How a bar should be colored for a given cursor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarRole {
    /// Element about to be inserted.
    Current,
    Key,
    Comparing,
    Sorted,
    Unsorted,
}

impl BarRole {
    pub fn symbol(self) -> char {
        match self {
            Self::Current => 'C',
            Self::Key => 'K',
            Self::Comparing => '~',
            Self::Sorted => '=',
            Self::Unsorted => '.',
        }
    }
}

/// Color rule for index `i` given the stepper cursors.
///
/// The "key" arm fires one slot past `inner` while `outer` is further right,
/// which only lines up with the inserted element on the first tick of a pass.
pub fn bar_role(i: usize, outer: isize, inner: isize) -> BarRole {
    let i = i as isize;
    if i == outer {
        BarRole::Current
    } else if i == inner + 1 && outer > inner + 1 {
        BarRole::Key
    } else if i <= outer && i > inner {
        BarRole::Comparing
    } else if i <= inner {
        BarRole::Sorted
    } else {
        BarRole::Unsorted
    }
}

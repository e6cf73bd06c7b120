//! Ownership and construction of the working sequence.

use rand::Rng;
use shared::{
    domain::{Sequence, MAX_NUMBER, MIN_RANDOM_VALUE, RANDOM_LEN_MAX, RANDOM_LEN_MIN},
    error::ValidationError,
};

#[derive(Debug, Default, Clone)]
pub struct SequenceStore {
    sequence: Sequence,
}

impl SequenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub(crate) fn sequence_mut(&mut self) -> &mut Sequence {
        &mut self.sequence
    }

    /// Parses comma separated integers and replaces the stored sequence.
    ///
    /// Blank tokens are skipped. The first bad token decides the error and
    /// nothing is stored in that case.
    pub fn set_from_text(&mut self, text: &str) -> Result<&Sequence, ValidationError> {
        let values = parse_values(text)?;
        tracing::debug!(len = values.len(), "sequence loaded from text");
        self.sequence = Sequence::new(values);
        Ok(&self.sequence)
    }

    /// Replaces the stored sequence with 10 to 15 values drawn from `5..100`.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &Sequence {
        let count = RANDOM_LEN_MIN + rng.random_range(0..=RANDOM_LEN_MAX - RANDOM_LEN_MIN);
        let values = (0..count)
            .map(|_| MIN_RANDOM_VALUE + rng.random_range(0..MAX_NUMBER - MIN_RANDOM_VALUE))
            .collect();
        self.sequence = Sequence::new(values);
        tracing::debug!(len = count, "random sequence generated");
        &self.sequence
    }

    pub fn clear(&mut self) {
        self.sequence = Sequence::default();
    }
}

fn parse_values(text: &str) -> Result<Vec<u32>, ValidationError> {
    let mut values = Vec::new();
    for token in text.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let parsed = token
            .parse::<i64>()
            .map_err(|_| ValidationError::Parse {
                token: token.to_string(),
            })?;
        let value = u32::try_from(parsed)
            .ok()
            .filter(|v| (1..=MAX_NUMBER).contains(v))
            .ok_or(ValidationError::Range { value: parsed })?;
        values.push(value);
    }

    if values.is_empty() {
        return Err(ValidationError::Empty);
    }
    Ok(values)
}

//! Quantum prompt mixer.
//!
//! Flavour names over three plain list operations on a fixed prompt pool:
//!
//! | Operation   | Meaning                                        |
//! |-------------|------------------------------------------------|
//! | `superpose` | sample without replacement, in random order    |
//! | `entangle`  | random title + marker, bodies joined in order  |
//! | `collapse`  | pick one record                                |
//!
//! The mixer owns its pool and borrows its randomness, so callers decide
//! between `thread_rng()` and a seeded generator.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Appended to the title picked by [`PromptMixer::entangle`].
pub const ENTANGLED_SUFFIX: &str = " (Entangled)";

/// Joins bodies in [`PromptMixer::entangle`].
pub const BODY_SEPARATOR: &str = " | ";

/// The built-in prompt pool as `(title, body)` pairs.
pub const PROMPT_POOL: [(&str, &str); 3] = [
    (
        "Cold Email Quantum",
        "Reach out with entangled value propositions and superposed greetings.",
    ),
    (
        "Landing Page Quantum",
        "Present your product in a state of maximum uncertainty and appeal.",
    ),
    (
        "Competitor Analysis Quantum",
        "Analyze rivals with non-local insights and quantum feedback.",
    ),
];

/// One canned prompt.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PromptRecord {
    pub title: String,
    pub body: String,
}

impl PromptRecord {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// The three stages of one `quantum` run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuantumReport {
    pub superposed: Vec<PromptRecord>,
    pub entangled: PromptRecord,
    pub collapsed: PromptRecord,
}

/// Sample / merge / choose over a prompt pool.
#[derive(Debug, Clone)]
pub struct PromptMixer {
    pool: Vec<PromptRecord>,
}

impl PromptMixer {
    pub fn new(pool: Vec<PromptRecord>) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &[PromptRecord] {
        &self.pool
    }

    /// `min(n, pool size)` distinct records in random order.
    pub fn superpose<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<PromptRecord> {
        let mut records = self.pool.clone();
        records.shuffle(rng);
        records.truncate(n);
        records
    }

    /// Merge records into one: a random title with [`ENTANGLED_SUFFIX`], and
    /// every body joined by [`BODY_SEPARATOR`] in input order.
    pub fn entangle<R: Rng + ?Sized>(
        &self,
        records: &[PromptRecord],
        rng: &mut R,
    ) -> Result<PromptRecord, DomainError> {
        let base = records.choose(rng).ok_or(DomainError::EmptyPromptSet)?;
        let body = records
            .iter()
            .map(|r| r.body.as_str())
            .collect::<Vec<_>>()
            .join(BODY_SEPARATOR);

        Ok(PromptRecord {
            title: format!("{}{ENTANGLED_SUFFIX}", base.title),
            body,
        })
    }

    /// One record, chosen uniformly.
    pub fn collapse<R: Rng + ?Sized>(
        &self,
        records: &[PromptRecord],
        rng: &mut R,
    ) -> Result<PromptRecord, DomainError> {
        records
            .choose(rng)
            .cloned()
            .ok_or(DomainError::EmptyPromptSet)
    }

    /// Superpose `n` records, then entangle and collapse that same sample.
    ///
    /// Fails with [`DomainError::EmptyPromptSet`] when the sample is empty.
    pub fn measure<R: Rng + ?Sized>(
        &self,
        n: usize,
        rng: &mut R,
    ) -> Result<QuantumReport, DomainError> {
        let superposed = self.superpose(n, rng);
        let entangled = self.entangle(&superposed, rng)?;
        let collapsed = self.collapse(&superposed, rng)?;
        Ok(QuantumReport {
            superposed,
            entangled,
            collapsed,
        })
    }
}

impl Default for PromptMixer {
    fn default() -> Self {
        Self::new(
            PROMPT_POOL
                .iter()
                .map(|(title, body)| PromptRecord::new(*title, *body))
                .collect(),
        )
    }
}

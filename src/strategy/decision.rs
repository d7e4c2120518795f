use super::intent::Intent;
use super::memory::Memory;
use super::snapshot::Snapshot;
use crate::Error;
use crate::cards::Hole;
use rand::Rng;

/// What an agent sees when asked to act.
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    pub snapshot: &'a Snapshot,
    pub name: &'a str,
    pub pocket: Hole,
}

/// A betting policy.
///
/// Decisions read the agent's [`Memory`] but never write it; the caller
/// commits whichever intent it actually sends.
pub trait Strategy {
    fn decide<R: Rng>(&self, view: &View, memory: &Memory, rng: &mut R) -> Result<Intent, Error>;
}

use super::decision::Strategy;
use super::decision::View;
use super::intent::Intent;
use super::memory::Memory;
use super::snapshot::Snapshot;
use crate::Error;
use crate::cards::Hole;
use rand::Rng;

/// A seat at the table: a name, a pocket, a memory, and a strategy.
pub struct Agent<S: Strategy> {
    name: String,
    pocket: Option<Hole>,
    memory: Memory,
    strategy: S,
}

impl<S: Strategy> Agent<S> {
    pub fn new<R: Rng>(name: impl Into<String>, strategy: S, rng: &mut R) -> Self {
        Self {
            name: name.into(),
            pocket: None,
            memory: Memory::new(rng),
            strategy,
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn pocket(&self) -> Option<Hole> {
        self.pocket
    }
    pub fn memory(&self) -> &Memory {
        &self.memory
    }
    pub fn strategy(&self) -> &S {
        &self.strategy
    }
    pub fn deal(&mut self, pocket: Hole) {
        self.pocket = Some(pocket);
    }
    /// Start of a new game: counters go back to zero.
    pub fn reset(&mut self) {
        self.memory.reset();
    }
    /// Decide, then remember what we decided.
    pub fn act<R: Rng>(&mut self, snapshot: &Snapshot, rng: &mut R) -> Result<Intent, Error> {
        let pocket = self.pocket.ok_or(Error::NoPocket)?;
        let view = View {
            snapshot,
            name: &self.name,
            pocket,
        };
        let intent = self.strategy.decide(&view, &self.memory, rng)?;
        self.memory.commit(&intent);
        log::debug!("{:<32}{}", format!("{} {}", self.name, pocket), intent);
        Ok(intent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::Eager;
    use crate::strategy::HeadsUp;
    use crate::strategy::Passive;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    const FLOP: &str = r#"{
        "pot": 40,
        "board": ["Ah", "7c", "2d"],
        "players": [{"name": "hero", "stack": 980}, {"name": "villain", "stack": 980}],
        "history": [{"actor": null, "type": "DEAL", "amount": null}],
        "legal_actions": {"BET": {"min": 20, "max": 980}, "CHECK": {}}
    }"#;

    fn flop() -> Snapshot {
        serde_json::from_str(FLOP).unwrap()
    }

    #[test]
    fn acting_needs_a_pocket() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut agent = Agent::new("hero", Passive, rng);
        assert_eq!(agent.act(&flop(), rng), Err(Error::NoPocket));
    }

    #[test]
    fn acting_commits_to_memory() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut agent = Agent::new("hero", Passive, rng);
        agent.deal(Hole::try_from("Kd Qd").unwrap());
        assert_eq!(agent.act(&flop(), rng), Ok(Intent::Check));
        assert_eq!(agent.act(&flop(), rng), Ok(Intent::Check));
        assert_eq!(agent.memory().checks(), 2);
        agent.reset();
        assert_eq!(agent.memory().checks(), 0);
    }

    #[test]
    fn eager_counts_bets() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut agent = Agent::new("hero", Eager, rng);
        agent.deal(Hole::try_from("Kd Qd").unwrap());
        agent.act(&flop(), rng).unwrap();
        assert_eq!(agent.memory().bets(), 1);
        assert_eq!(agent.memory().checks(), 0);
    }

    #[test]
    fn failed_decision_leaves_memory_alone() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut agent = Agent::new("stranger", HeadsUp::<crate::evaluation::Bitwise>::default(), rng);
        agent.deal(Hole::try_from("Kd Qd").unwrap());
        let before = *agent.memory();
        assert!(agent.act(&flop(), rng).is_err());
        assert_eq!(*agent.memory(), before);
    }

    #[test]
    fn headsup_agent_is_reproducible() {
        let play = |seed| {
            let ref mut rng = SmallRng::seed_from_u64(seed);
            let mut agent = Agent::new("hero", HeadsUp::<crate::evaluation::Bitwise>::default(), rng);
            agent.deal(Hole::try_from("Kd Qd").unwrap());
            (agent.act(&flop(), rng), *agent.memory())
        };
        assert_eq!(play(17), play(17));
    }
}

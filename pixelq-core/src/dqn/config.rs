//! Configuration of [`Dqn`](super::Dqn) agent.
use crate::action::Action;
use anyhow::Result;
use log::info;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`Dqn`](super::Dqn) agent.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct DqnConfig {
    /// Legal actions, in evaluator column order.
    pub actions: Vec<Action>,

    /// Capacity of the replay memory.
    pub replay_capacity: usize,

    /// Discount factor of future rewards, in `[0, 1)`.
    pub discount_factor: f64,

    /// Number of transitions in a minibatch.
    pub batch_size: usize,

    /// Seed of the agent's random number generator.
    pub seed: u64,
}

impl Default for DqnConfig {
    fn default() -> Self {
        Self {
            actions: vec![],
            replay_capacity: 10_000,
            discount_factor: 0.99,
            batch_size: 32,
            seed: 0,
        }
    }
}

impl DqnConfig {
    /// Sets the legal actions.
    pub fn actions(mut self, actions: Vec<Action>) -> Self {
        self.actions = actions;
        self
    }

    /// Sets the capacity of the replay memory.
    pub fn replay_capacity(mut self, replay_capacity: usize) -> Self {
        self.replay_capacity = replay_capacity;
        self
    }

    /// Sets the discount factor.
    pub fn discount_factor(mut self, discount_factor: f64) -> Self {
        self.discount_factor = discount_factor;
        self
    }

    /// Sets the minibatch size.
    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Sets the seed of the random number generator.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Loads [`DqnConfig`] from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let rdr = BufReader::new(file);
        let config = serde_yaml::from_reader(rdr)?;
        info!("Loaded DQN agent config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Saves [`DqnConfig`] to a YAML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path.as_ref())?;
        file.write_all(serde_yaml::to_string(self)?.as_bytes())?;
        info!("Saved DQN agent config to {}", path.as_ref().display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn roundtrips_through_yaml() -> Result<()> {
        let config = DqnConfig::default()
            .actions(vec![Action(0), Action(1), Action(2)])
            .replay_capacity(500)
            .discount_factor(0.95)
            .batch_size(8)
            .seed(7);

        let dir = TempDir::new("dqn_config")?;
        let path = dir.path().join("dqn.yaml");
        config.save(&path)?;
        let loaded = DqnConfig::load(&path)?;

        assert_eq!(loaded, config);
        Ok(())
    }
}

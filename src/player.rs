use std::str::FromStr;

use rand::prelude::*;
use thiserror::Error;

use crate::game::WINNING_SCORE;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TurnDecision {
    Roll,
    Hold,
}

pub trait GamePlayer {
    fn decide(&mut self, score: u32, turn_total: u32) -> TurnDecision;
}

/// Holds once the turn total reaches min(25, points left to win).
pub struct PlayerThreshold;

impl GamePlayer for PlayerThreshold {
    fn decide(&mut self, score: u32, turn_total: u32) -> TurnDecision {
        if turn_total >= 25.min(WINNING_SCORE.saturating_sub(score)) {
            TurnDecision::Hold
        } else {
            TurnDecision::Roll
        }
    }
}

/// Baseline strategy, flips a coin between rolling and holding.
pub struct PlayerRand {
    rand: StdRng,
}

impl Default for PlayerRand {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerRand {
    pub fn new() -> Self {
        Self::from_seed(rand::rng().random())
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rand: StdRng::seed_from_u64(seed),
        }
    }
}

impl GamePlayer for PlayerRand {
    fn decide(&mut self, _score: u32, _turn_total: u32) -> TurnDecision {
        if self.rand.random() {
            TurnDecision::Roll
        } else {
            TurnDecision::Hold
        }
    }
}

pub struct Player {
    name: String,
    score: u32,
    strategy: Box<dyn GamePlayer>,
}

impl Player {
    pub fn new(name: impl Into<String>, strategy: Box<dyn GamePlayer>) -> Self {
        Self {
            name: name.into(),
            score: 0,
            strategy,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn add_score(&mut self, points: u32) {
        self.score += points;
    }

    pub fn decide(&mut self, turn_total: u32) -> TurnDecision {
        self.strategy.decide(self.score, turn_total)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PlayerType {
    Human,
    Computer,
}

#[derive(PartialEq, Eq, Debug, Error)]
#[error("invalid player type {0:?}, choose \"human\" or \"computer\"")]
pub struct InvalidPlayerType(pub String);

impl FromStr for PlayerType {
    type Err = InvalidPlayerType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(PlayerType::Human),
            "computer" => Ok(PlayerType::Computer),
            _ => Err(InvalidPlayerType(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_holds_at_25_from_zero() {
        let mut player = PlayerThreshold;
        assert_eq!(player.decide(0, 24), TurnDecision::Roll);
        assert_eq!(player.decide(0, 25), TurnDecision::Hold);
        assert_eq!(player.decide(0, 30), TurnDecision::Hold);
    }

    #[test]
    fn threshold_shrinks_near_the_win() {
        let mut player = PlayerThreshold;
        assert_eq!(player.decide(85, 14), TurnDecision::Roll);
        assert_eq!(player.decide(85, 15), TurnDecision::Hold);
        assert_eq!(player.decide(99, 0), TurnDecision::Roll);
        assert_eq!(player.decide(99, 1), TurnDecision::Hold);
    }

    #[test]
    fn add_score_accumulates() {
        let mut player = Player::new("Player 1", Box::new(PlayerThreshold));
        assert_eq!(player.score(), 0);
        player.add_score(10);
        player.add_score(0);
        player.add_score(7);
        assert_eq!(player.score(), 17);
    }

    #[test]
    fn player_feeds_its_own_score_to_the_strategy() {
        let mut player = Player::new("Player 2", Box::new(PlayerThreshold));
        assert_eq!(player.decide(24), TurnDecision::Roll);
        player.add_score(85);
        assert_eq!(player.decide(15), TurnDecision::Hold);
    }

    #[test]
    fn player_type_labels() {
        assert_eq!("human".parse(), Ok(PlayerType::Human));
        assert_eq!("HUMAN".parse(), Ok(PlayerType::Human));
        assert_eq!("Computer".parse(), Ok(PlayerType::Computer));
        assert_eq!("computer".parse(), Ok(PlayerType::Computer));
        assert_eq!(
            "alien".parse::<PlayerType>(),
            Err(InvalidPlayerType(String::from("alien")))
        );
    }

    #[test]
    fn rand_strategy_is_deterministic_per_seed() {
        let mut player1 = PlayerRand::from_seed(0xd1ce);
        let mut player2 = PlayerRand::from_seed(0xd1ce);
        for _ in 0..100 {
            assert_eq!(player1.decide(0, 0), player2.decide(0, 0));
        }
    }
}

use std::cmp::Ordering;
use std::time::{Duration, Instant};

use log::debug;

use crate::die::Die;
use crate::player::{Player, TurnDecision};

pub const WINNING_SCORE: u32 = 100;
pub const TIME_LIMIT: Duration = Duration::from_secs(60);

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum GameColor {
    Player1,
    Player2,
}

impl GameColor {
    pub fn opposite(&self) -> GameColor {
        match self {
            GameColor::Player1 => GameColor::Player2,
            GameColor::Player2 => GameColor::Player1,
        }
    }

    fn idx(&self) -> usize {
        match self {
            GameColor::Player1 => 0,
            GameColor::Player2 => 1,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RollOutcome {
    Bust,
    TurnTotal(u32),
}

pub fn apply_roll(turn_total: u32, roll: u32) -> RollOutcome {
    assert!((1..=6).contains(&roll));
    if roll == 1 {
        RollOutcome::Bust
    } else {
        RollOutcome::TurnTotal(turn_total + roll)
    }
}

pub struct PigGame {
    die: Die,
    players: [Player; 2],
    turn: GameColor,
    time_limit: Option<Duration>,
}

impl PigGame {
    pub fn new(player1: Player, player2: Player, die: Die) -> Self {
        Self {
            die,
            players: [player1, player2],
            turn: GameColor::Player1,
            time_limit: None,
        }
    }

    pub fn with_time_limit(
        player1: Player,
        player2: Player,
        die: Die,
        time_limit: Duration,
    ) -> Self {
        Self {
            time_limit: Some(time_limit),
            ..Self::new(player1, player2, die)
        }
    }

    pub fn player(&self, color: GameColor) -> &Player {
        &self.players[color.idx()]
    }

    fn switch_turn(&mut self) {
        self.turn = self.turn.opposite();
    }

    /// Plays the game to completion. Returns the winner, or `None` for a tie,
    /// which is reachable only when a time limit is set.
    pub fn play_until_over(&mut self) -> Option<GameColor> {
        let deadline = match self.time_limit {
            Some(limit) => {
                println!("Starting a timed game ({} seconds limit)...", limit.as_secs());
                Some(Instant::now() + limit)
            }
            None => {
                println!("Welcome to the Pig game!");
                None
            }
        };

        loop {
            if deadline_passed(deadline) {
                println!("\nTime is up! Determining the winner...");
                return self.winner_by_score();
            }

            let color = self.turn;
            let player = &self.players[color.idx()];
            println!("\n{}'s turn. Current score: {}", player.name(), player.score());

            let mut turn_total = 0;
            loop {
                /* The deadline is re-checked before every single decision, so a
                 * timed game stops mid-turn as well, discarding the turn total */
                if deadline_passed(deadline) {
                    println!("\nTime is up during the turn! Stopping the game.");
                    return self.winner_by_score();
                }

                let player = &mut self.players[color.idx()];
                let decision = player.decide(turn_total);
                debug!("{:?} decided to {:?} at turn total {}", color, decision, turn_total);
                match decision {
                    TurnDecision::Roll => {
                        let roll = self.die.roll();
                        println!("{} rolled a {}.", player.name(), roll);
                        match apply_roll(turn_total, roll) {
                            RollOutcome::Bust => {
                                println!("Rolled a 1! No points added. Turn over.");
                                break;
                            }
                            RollOutcome::TurnTotal(total) => {
                                turn_total = total;
                                println!(
                                    "Turn total: {}, Game score if held: {}",
                                    turn_total,
                                    player.score() + turn_total
                                );
                            }
                        }
                    }
                    TurnDecision::Hold => {
                        player.add_score(turn_total);
                        println!(
                            "{} holds. Added {} points. New score: {}",
                            player.name(),
                            turn_total,
                            player.score()
                        );
                        break;
                    }
                }
            }

            let player = &self.players[color.idx()];
            if player.score() >= WINNING_SCORE {
                println!("\n{} wins with a score of {}!", player.name(), player.score());
                return Some(color);
            }
            self.switch_turn();
        }
    }

    fn winner_by_score(&self) -> Option<GameColor> {
        let [player1, player2] = &self.players;
        match player1.score().cmp(&player2.score()) {
            Ordering::Greater => {
                println!("{} wins with {} points!", player1.name(), player1.score());
                Some(GameColor::Player1)
            }
            Ordering::Less => {
                println!("{} wins with {} points!", player2.name(), player2.score());
                Some(GameColor::Player2)
            }
            Ordering::Equal => {
                println!("It's a tie!");
                None
            }
        }
    }
}

fn deadline_passed(deadline: Option<Instant>) -> bool {
    deadline.is_some_and(|deadline| Instant::now() >= deadline)
}

use std::io::{self, Write};

use crate::player::{
    GamePlayer, InvalidPlayerType, Player, PlayerThreshold, PlayerType, TurnDecision,
};

/// Human player taking roll-or-hold decisions from stdin.
pub struct PigPlayerCmd;

impl GamePlayer for PigPlayerCmd {
    fn decide(&mut self, _score: u32, _turn_total: u32) -> TurnDecision {
        loop {
            match read_prompt("Enter 'r' to roll or 'h' to hold: ").as_str() {
                "r" => return TurnDecision::Roll,
                "h" => return TurnDecision::Hold,
                _ => println!("Invalid input. Please enter 'r' to roll or 'h' to hold."),
            }
        }
    }
}

pub fn create_player(type_label: &str, name: &str) -> Result<Player, InvalidPlayerType> {
    let strategy: Box<dyn GamePlayer> = match type_label.parse::<PlayerType>()? {
        PlayerType::Human => Box::new(PigPlayerCmd),
        PlayerType::Computer => Box::new(PlayerThreshold),
    };
    Ok(Player::new(name, strategy))
}

/// Prints the prompt without a trailing newline and reads one trimmed,
/// lowercased line from stdin.
pub fn read_prompt(prompt: &str) -> String {
    print!("{}", prompt);
    io::stdout().flush().expect("failed to flush stdout");
    let mut line = String::new();
    io::stdin().read_line(&mut line).expect("failed to read input");
    line.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use crate::player::{InvalidPlayerType, TurnDecision};

    use super::create_player;

    #[test]
    fn factory_accepts_both_types_case_insensitively() {
        let human = create_player("HUMAN", "A").unwrap();
        assert_eq!(human.name(), "A");

        let mut computer = create_player("Computer", "B").unwrap();
        assert_eq!(computer.name(), "B");
        assert_eq!(computer.decide(24), TurnDecision::Roll);
        assert_eq!(computer.decide(25), TurnDecision::Hold);
    }

    #[test]
    fn factory_rejects_unknown_types() {
        match create_player("alien", "C") {
            Err(err) => assert_eq!(err, InvalidPlayerType(String::from("alien"))),
            Ok(_) => panic!("expected an invalid player type error"),
        }
    }
}

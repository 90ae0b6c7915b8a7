use clap::Parser;

use pig::cli::{create_player, read_prompt};
use pig::die::Die;
use pig::game::{PigGame, TIME_LIMIT};

#[derive(Parser, Debug)]
#[clap(about, long_about = None)]
struct Args {
    /// Fixed die seed, for reproducible games
    #[clap(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    pig::util::init_globals();

    let args = Args::parse();

    let player1_type = read_prompt("Enter Player 1 type (human/computer): ");
    let player2_type = read_prompt("Enter Player 2 type (human/computer): ");
    let timed_mode = read_prompt("Do you want to play in timed mode? (yes/no): ");

    let player1 = create_player(&player1_type, "Player 1")?;
    let player2 = create_player(&player2_type, "Player 2")?;
    let die = match args.seed {
        Some(seed) => Die::from_seed(seed),
        None => Die::new(),
    };

    /* Any answer other than "yes" is an untimed game */
    let mut game = if timed_mode == "yes" {
        PigGame::with_time_limit(player1, player2, die, TIME_LIMIT)
    } else {
        PigGame::new(player1, player2, die)
    };
    game.play_until_over();

    Ok(())
}

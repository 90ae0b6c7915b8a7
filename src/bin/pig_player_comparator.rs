use std::fs;

use clap::Parser;
use itertools::Itertools;
use log::info;
use rand::prelude::*;

use pig::die::Die;
use pig::game::{GameColor, PigGame};
use pig::player::{GamePlayer, Player, PlayerRand, PlayerThreshold};

#[derive(Parser, Debug)]
#[clap(about, long_about = None)]
struct Args {
    #[clap(long, default_value = "threshold")]
    player1: String,
    #[clap(long, default_value = "random")]
    player2: String,
    #[clap(long, default_value = "100")]
    games_num: u32,
    #[clap(long)]
    seed: Option<u64>,
    #[clap(long, default_value = "_NONE_")]
    result_file: String,
}

fn build_strategy(label: &str, rand: &mut StdRng) -> Box<dyn GamePlayer> {
    match label {
        "threshold" => Box::new(PlayerThreshold),
        "random" => Box::new(PlayerRand::from_seed(rand.next_u64())),
        other => panic!(
            "unknown strategy: {:?}, choose \"threshold\" or \"random\"",
            other
        ),
    }
}

fn main() -> std::io::Result<()> {
    pig::util::init_globals();

    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    info!(
        "comparing {:?} vs {:?} over {} games, seed {}",
        args.player1, args.player2, args.games_num, seed
    );
    let mut rand = StdRng::seed_from_u64(seed);

    let results = (0..args.games_num)
        .map(|_| {
            let player1 = Player::new("Player 1", build_strategy(&args.player1, &mut rand));
            let player2 = Player::new("Player 2", build_strategy(&args.player2, &mut rand));
            let mut game = PigGame::new(player1, player2, Die::from_seed(rand.next_u64()));
            game.play_until_over()
        })
        .collect_vec();

    let wins = |color| results.iter().filter(|winner| **winner == Some(color)).count();
    let player1_wins = wins(GameColor::Player1);
    let player2_wins = wins(GameColor::Player2);

    println!(
        "\nPlayer 1 ({}) won {} games, Player 2 ({}) won {} games",
        args.player1, player1_wins, args.player2, player2_wins
    );

    if args.result_file != "_NONE_" {
        let json_obj = json::object! {
            player1_wins: player1_wins,
            player2_wins: player2_wins,
        };
        fs::write(&args.result_file, json_obj.dump())?;
    }

    Ok(())
}

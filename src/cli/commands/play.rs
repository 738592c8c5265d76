//! Play command - Show a single game move by move

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output::{print_kv, print_section},
    policies::PolicyKind,
    tictactoe::{GameOutcome, Player, run_game},
};

#[derive(Parser, Debug)]
#[command(about = "Play one game and print every position")]
pub struct PlayArgs {
    /// Policy playing X (moves first)
    #[arg(value_enum)]
    pub x: PolicyKind,

    /// Policy playing O
    #[arg(value_enum)]
    pub o: PolicyKind,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let mut x = args.x.build(Player::X, args.seed);
    let mut o = args.o.build(Player::O, args.seed.map(|s| s.wrapping_add(1)));

    print_section(&format!("{} (X) vs {} (O)", args.x, args.o));

    let log = run_game(x.as_mut(), o.as_mut())?;
    let mut to_move = Player::X;
    for (ply, (position, cell)) in log.positions()[1..].iter().zip(log.moves()).enumerate() {
        println!("\nMove {}: {to_move} plays {cell} (position {})", ply + 1, position.value());
        println!("{position}");
        to_move = to_move.opponent();
    }

    let outcome = match log.outcome() {
        GameOutcome::Win(player) => format!("{player} wins"),
        GameOutcome::Draw => "draw".to_string(),
    };
    println!();
    print_kv("Result", &outcome);
    print_kv("Positions", &format!("{:?}", log.values()));
    Ok(())
}

//! Compare command - Play a match between two fixed policies

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output::{print_kv, print_match_result, print_section},
    pipeline::{LogObserver, MatchRunner, MetricsObserver, ProgressObserver},
    policies::PolicyKind,
    tictactoe::Player,
};

#[derive(Parser, Debug)]
#[command(about = "Play a match between two fixed policies")]
pub struct CompareArgs {
    /// Policy playing X (moves first)
    #[arg(value_enum)]
    pub x: PolicyKind,

    /// Policy playing O
    #[arg(value_enum)]
    pub o: PolicyKind,

    /// Number of games in the match
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Show progress bar
    #[arg(long, default_value_t = false)]
    pub progress: bool,
}

pub fn execute(args: CompareArgs) -> Result<()> {
    let mut x = args.x.build(Player::X, args.seed);
    let mut o = args.o.build(Player::O, args.seed.map(|s| s.wrapping_add(1)));
    let mut metrics = MetricsObserver::new();

    print_section(&format!("{} (X) vs {} (O)", args.x, args.o));

    let mut runner = MatchRunner::new(args.games)
        .with_observer(Box::new(LogObserver::new(format!("{} vs {}", args.x, args.o))))
        .with_observer(Box::new(&mut metrics));
    if args.progress {
        runner = runner.with_observer(Box::new(ProgressObserver::new()));
    }
    let result = runner.run(x.as_mut(), o.as_mut())?;
    drop(runner);

    let summary = metrics.summary();
    print_match_result(&result);
    print_kv(
        "Game length",
        &format!(
            "{:.2} moves on average (shortest {}, longest {})",
            summary.avg_game_length, summary.shortest_game, summary.longest_game
        ),
    );
    Ok(())
}

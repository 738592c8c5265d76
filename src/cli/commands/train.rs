//! Train command - Train a value-table learner against a fixed opponent

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use log::{info, warn};

use crate::{
    cli::output::{format_percent, print_kv, print_match_result, print_section, print_subsection},
    pipeline::{TrainingConfig, TrainingSession},
    policies::PolicyKind,
    tictactoe::Player,
};

pub(crate) fn parse_player_token(value: &str, flag: &str) -> Result<Player> {
    match value.trim().to_ascii_lowercase().as_str() {
        "x" | "first" | "player1" | "p1" => Ok(Player::X),
        "o" | "second" | "player2" | "p2" => Ok(Player::O),
        other => Err(anyhow!(
            "Invalid value '{other}' for {flag} (expected 'x' or 'o')"
        )),
    }
}

fn sanitize_summary_path(raw: &Path) -> PathBuf {
    let mut normalized = raw.to_path_buf();
    let raw_str = raw.as_os_str().to_string_lossy();

    // Trailing separator or no file name: write into that directory.
    if raw_str.ends_with(std::path::MAIN_SEPARATOR) || normalized.file_name().is_none() {
        normalized.push("training_summary.json");
        return normalized;
    }

    match normalized.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => normalized,
        _ => {
            normalized.set_extension("json");
            normalized
        }
    }
}

#[derive(Parser, Debug)]
#[command(about = "Train a value-table learner")]
pub struct TrainArgs {
    /// JSON configuration file; flags below override its values
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Learning rate (0.0-1.0)
    #[arg(long)]
    pub alpha: Option<f64>,

    /// Probability of an exploratory move (0.0-1.0)
    #[arg(long)]
    pub curiosity: Option<f64>,

    /// Multiplier applied to curiosity after each round
    #[arg(long)]
    pub curiosity_decay: Option<f64>,

    /// Number of training rounds
    #[arg(long, short = 'r')]
    pub rounds: Option<usize>,

    /// Games per training round
    #[arg(long, short = 'g')]
    pub games: Option<usize>,

    /// Games in the greedy evaluation after training
    #[arg(long)]
    pub evaluation_games: Option<usize>,

    /// Opponent to train against
    #[arg(long, short = 'o', value_enum)]
    pub opponent: Option<PolicyKind>,

    /// Which token the learner controls (`x` or `o`)
    #[arg(long)]
    pub player: Option<String>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Optional path for writing a summary JSON file
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Show progress bar
    #[arg(long, default_value_t = false)]
    pub progress: bool,
}

fn override_field<T: PartialEq + std::fmt::Debug>(
    field: &mut T,
    value: Option<T>,
    flag: &str,
    from_file: bool,
) {
    if let Some(value) = value {
        if from_file && *field != value {
            warn!("{flag} {value:?} overrides the configuration file value {field:?}");
        }
        *field = value;
    }
}

/// Merge command-line flags into a configuration.
pub(crate) fn build_config(args: &TrainArgs) -> Result<TrainingConfig> {
    let (mut config, from_file) = match &args.config {
        Some(path) => (
            TrainingConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            true,
        ),
        None => (TrainingConfig::default(), false),
    };

    let player = args
        .player
        .as_deref()
        .map(|token| parse_player_token(token, "--player"))
        .transpose()?;

    override_field(&mut config.alpha, args.alpha, "--alpha", from_file);
    override_field(&mut config.curiosity, args.curiosity, "--curiosity", from_file);
    override_field(
        &mut config.curiosity_decay,
        args.curiosity_decay,
        "--curiosity-decay",
        from_file,
    );
    override_field(&mut config.rounds, args.rounds, "--rounds", from_file);
    override_field(&mut config.games_per_round, args.games, "--games", from_file);
    override_field(
        &mut config.evaluation_games,
        args.evaluation_games,
        "--evaluation-games",
        from_file,
    );
    override_field(&mut config.opponent, args.opponent, "--opponent", from_file);
    override_field(&mut config.learner_player, player, "--player", from_file);
    override_field(&mut config.seed, args.seed.map(Some), "--seed", from_file);

    config.validate()?;
    Ok(config)
}

pub fn execute(args: TrainArgs) -> Result<()> {
    let config = build_config(&args)?;

    print_section("Training value-table learner");
    print_kv("Learner plays", &config.learner_player.to_string());
    print_kv("Opponent", config.opponent.label());
    print_kv("Alpha", &config.alpha.to_string());
    print_kv("Curiosity", &config.curiosity.to_string());
    print_kv("Curiosity decay", &config.curiosity_decay.to_string());
    print_kv(
        "Schedule",
        &format!(
            "{} rounds x {} games, {} evaluation games",
            config.rounds, config.games_per_round, config.evaluation_games
        ),
    );
    if let Some(seed) = config.seed {
        print_kv("Seed", &seed.to_string());
    }

    let mut session = TrainingSession::new(config)?.with_progress(args.progress);
    let report = session.run()?;
    let player = report.learner_player;

    print_subsection("Rounds");
    for round in &report.rounds {
        println!(
            "  round {:>3}  curiosity {:.3}  wins {}  draws {}  losses {}",
            round.round,
            round.curiosity,
            round.result.wins_for(player),
            round.result.draws,
            round.result.wins_for(player.opponent()),
        );
    }

    if let Some(evaluation) = &report.evaluation {
        print_subsection("Evaluation (curiosity 0)");
        print_match_result(evaluation);
    }
    print_kv("Learner win rate", &format_percent(report.final_win_rate()));

    if let Some(raw) = &args.summary {
        let path = sanitize_summary_path(raw);
        report
            .save(&path)
            .with_context(|| format!("Failed to write summary {}", path.display()))?;
        info!("wrote training summary to {}", path.display());
        println!("\nSummary written to {}", path.display());
    }

    Ok(())
}

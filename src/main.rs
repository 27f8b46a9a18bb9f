use battleship_arena::{
    init_logging,
    render::{describe_turn, render_boards, status_line},
    BaselinePlayer, HuntTargetPlayer, Match, Player,
};

use clap::{Parser, Subcommand, ValueEnum};
use rand::Rng;
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PlayerKind {
    /// Random placement with a one-cell gap, hunt/target search.
    HuntTarget,
    /// Random touching placement, row-major sweep.
    Baseline,
}

impl PlayerKind {
    fn build(self, name: &str) -> Box<dyn Player> {
        match self {
            PlayerKind::HuntTarget => Box::new(HuntTargetPlayer::new(name)),
            PlayerKind::Baseline => Box::new(BaselinePlayer::new(name)),
        }
    }
}

#[derive(clap::Args, Clone, Debug)]
struct Lineup {
    #[arg(long, value_enum, default_value_t = PlayerKind::HuntTarget)]
    p1: PlayerKind,
    #[arg(long, value_enum, default_value_t = PlayerKind::Baseline)]
    p2: PlayerKind,
    #[arg(long, default_value = "Player")]
    name1: String,
    #[arg(long, default_value = "Default AI")]
    name2: String,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

impl Lineup {
    fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| rand::rng().random())
    }

    fn build(&self, seed: u64) -> anyhow::Result<Match> {
        Ok(Match::new(
            self.p1.build(&self.name1),
            self.p2.build(&self.name2),
            seed,
        )?)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Play a single match and show the boards as it goes.
    Play {
        #[command(flatten)]
        lineup: Lineup,
        #[arg(long, default_value_t = 0, help = "Print the boards every N turns (0: only at the end)")]
        step: usize,
        #[arg(long, help = "Only print the final status line")]
        quiet: bool,
    },
    /// Play a series of matches with distinct seeds and report a JSON tally.
    Series {
        #[command(flatten)]
        lineup: Lineup,
        #[arg(long, default_value_t = 100)]
        games: u64,
    },
}

fn play(lineup: &Lineup, step: usize, quiet: bool) -> anyhow::Result<()> {
    let seed = lineup.seed();
    let mut game = lineup.build(seed)?;
    if !quiet {
        println!("Seed: {}", seed);
        println!("{}", render_boards(&game));
    }

    while !game.is_game_over() {
        let batch = if step == 0 { usize::MAX } else { step };
        for report in game.advance(batch)? {
            if !quiet && step > 0 {
                println!("{}", describe_turn(&game, &report));
            }
        }
        if !quiet && step > 0 {
            println!("{}", render_boards(&game));
            println!("{}", status_line(&game));
        }
    }

    if !quiet && step == 0 {
        println!("{}", render_boards(&game));
    }
    if quiet || step == 0 {
        println!("{}", status_line(&game));
    }
    Ok(())
}

fn series(lineup: &Lineup, games: u64) -> anyhow::Result<()> {
    let base = lineup.seed();
    let mut wins = [0u64; 2];
    let mut total_turns = 0usize;
    for i in 0..games {
        let mut game = lineup.build(base.wrapping_add(i.wrapping_mul(2)))?;
        let summary = game.play_full_game()?;
        if let Some(w) = summary.winner {
            wins[w] += 1;
        }
        total_turns += summary.turns;
    }
    let avg_turns = if games == 0 {
        0.0
    } else {
        total_turns as f64 / games as f64
    };
    let result = json!({
        "seed": base,
        "games": games,
        "player1": {"name": lineup.name1, "kind": format!("{:?}", lineup.p1), "wins": wins[0]},
        "player2": {"name": lineup.name2, "kind": format!("{:?}", lineup.p2), "wins": wins[1]},
        "average_turns": avg_turns,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            lineup,
            step,
            quiet,
        } => play(&lineup, step, quiet),
        Commands::Series { lineup, games } => series(&lineup, games),
    }
}

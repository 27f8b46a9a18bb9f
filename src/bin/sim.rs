use battleship_arena::{BaselinePlayer, HuntTargetPlayer, Match};

fn main() -> anyhow::Result<()> {
    battleship_arena::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let mut game = Match::new(
        Box::new(HuntTargetPlayer::new("Player")),
        Box::new(BaselinePlayer::new("Default AI")),
        seed,
    )?;
    let summary = game.play_full_game()?;

    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}

use anyhow::{Context, Result};
use scalequiz_game::{Config, Quiz};

pub fn run_play(config: &Config) -> Result<()> {
    config.validate()?;

    match config.seed {
        Some(seed) => log::info!("Starting quiz with seed {}", seed),
        None => log::info!("Starting quiz"),
    }

    let mut quiz = Quiz::from_seed(config.seed).with_chord_count(config.chord_count);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let solved = quiz
        .play(&mut stdin.lock(), &mut stdout.lock())
        .context("Quiz session failed")?;

    log::info!("Session ended, {} rounds solved", solved);

    Ok(())
}

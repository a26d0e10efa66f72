use anyhow::Result;
use clap::Parser;
use scalequiz_game::Config;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "scalequiz", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for the random number generator (replays the same rounds)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Number of chords shown per round (0-7, default: 4)
    #[arg(long, global = true)]
    chords: Option<usize>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Play the quiz (the default when no command is given)
    ///
    /// Each round picks a random major or minor key and shows chords built
    /// on four of its degrees, in compact notation (C, Am, Bdim). Type the
    /// key as a note name, adding "m" for minor: C, F#, Bbm.
    ///
    /// The relative major/minor of the key is accepted too, since it
    /// shares the same chords. Wrong guesses are re-asked until correct.
    ///
    /// The quiz runs until interrupted (Ctrl-C) or input ends (Ctrl-D).
    Play,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Print an example config file
    Example,
    /// Create the config file with defaults
    Init,
}

fn init_logging(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Whether `command` needs the loaded configuration.
///
/// `config path`, `example` and `init` must keep working when the config
/// file or the environment is broken, so they never read it.
fn reads_config(command: Option<&Commands>) -> bool {
    match command {
        None | Some(Commands::Play) => true,
        Some(Commands::Config { command }) => matches!(command, ConfigCommands::Show),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = if reads_config(cli.command.as_ref()) {
        Config::load()?.with_overrides(cli.seed, cli.chords)
    } else {
        Config::default()
    };
    init_logging(&config.log_level);

    match cli.command {
        None | Some(Commands::Play) => {
            commands::run_play(&config)?;
        }
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => commands::config::show_config(&config)?,
            ConfigCommands::Path => commands::config::show_path(),
            ConfigCommands::Example => commands::config::show_example(),
            ConfigCommands::Init => commands::config::init_config()?,
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_no_arguments_plays() {
        let cli = parse(&["scalequiz"]);
        assert!(cli.command.is_none());
        assert!(reads_config(cli.command.as_ref()));
    }

    #[test]
    fn test_play_and_show_read_config() {
        for args in [&["scalequiz", "play"][..], &["scalequiz", "config", "show"][..]] {
            let cli = parse(args);
            assert!(reads_config(cli.command.as_ref()), "{args:?}");
        }
    }

    #[test]
    fn test_config_helpers_skip_config() {
        for sub in ["path", "example", "init"] {
            let cli = parse(&["scalequiz", "config", sub]);
            assert!(!reads_config(cli.command.as_ref()), "config {sub}");
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = parse(&["scalequiz", "--seed", "42", "--chords", "5"]);
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.chords, Some(5));
    }
}

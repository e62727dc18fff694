mod config;
mod input;
mod render;

use std::path::PathBuf;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::WatchStream;
use xo_engine::{GameSnapshot, PlacementRules, XoSession, log, logger};

use config::{ConsoleConfig, get_config_store};
use input::{Command, HELP, parse_command};

const DEFAULT_LOG_PREFIX: &str = "XO";

#[derive(Parser)]
#[command(name = "xo_console", about = "Play tic-tac-toe against the computer")]
struct Args {
    /// Config file, defaults to xo_console_config.yaml next to the executable
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed for the opponent, for reproducible sessions
    #[arg(long)]
    seed: Option<u64>,

    /// Allow overwriting marks and moving out of turn
    #[arg(long)]
    permissive: bool,

    #[arg(long)]
    use_log_prefix: bool,

    /// Write the default config to the config path and exit
    #[arg(long)]
    write_default_config: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let store = get_config_store(args.config.clone());

    if args.write_default_config {
        store.save(&ConsoleConfig::default())?;
        println!("Wrote default config to {}", store.source().path().display());
        return Ok(());
    }

    let mut config: ConsoleConfig = store.load_or_default()?;
    if args.seed.is_some() {
        config.session.seed = args.seed;
    }
    if args.permissive {
        config.session.rules = PlacementRules::Permissive;
    }

    let prefix = config
        .log_prefix
        .clone()
        .or_else(|| args.use_log_prefix.then(|| DEFAULT_LOG_PREFIX.to_string()));
    logger::init_logger(prefix);

    let session = XoSession::new(config.session);
    log!("Session seed {}, config {}", session.seed(), store.source().path().display());

    let driver = tokio::spawn(session.clone().run());
    let renderer = tokio::spawn(render_updates(session.subscribe()));

    if config.show_help {
        println!("{}", HELP);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => None,
        };
        let Some(line) = line else {
            break;
        };

        match parse_command(&line) {
            Ok(Command::Place { row, col }) => {
                if let Err(e) = session.place_mark(row, col).await {
                    println!("  {}", e);
                }
            }
            Ok(Command::Reset) => session.reset_round().await,
            Ok(Command::Help) => println!("{}", HELP),
            Ok(Command::Quit) => break,
            Err(e) => println!("  {}", e),
        }
    }

    session.shutdown();
    driver.await?;
    renderer.abort();

    let snapshot = session.snapshot();
    log!("Session over, final score {}", snapshot.score);
    println!("Final score: {}", snapshot.score);

    Ok(())
}

async fn render_updates(rx: watch::Receiver<GameSnapshot>) {
    let mut updates = WatchStream::new(rx);
    while let Some(snapshot) = updates.next().await {
        print!("{}", render::render(&snapshot));
    }
}

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;
use tracing::{error, info, warn};

use game_controller::commands::{Command, HELP, parse_command};
use game_controller::{GameController, GameRuntime, config::Config};
use game_types::Screen;

fn print_screen(screen: &Screen) {
    match serde_json::to_string(screen) {
        Ok(json) => println!("{}", json),
        Err(e) => error!("Failed to serialize screen: {}", e),
    }
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so stdout only carries screen snapshots
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    info!("Starting Sketch & Guess...");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    let words = match config.load_words() {
        Ok(words) => words,
        Err(e) => {
            error!("Failed to load words: {:#}", e);
            error!("Unset WORD_LIST_PATH to use the built-in word list.");
            std::process::exit(1);
        }
    };
    info!("{} words available", words.len());

    let runtime = GameRuntime::new(GameController::new(config, words));
    let mut screens = runtime.subscribe();
    eprintln!("{}", HELP);
    print_screen(&screens.borrow_and_update());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line,
            changed = screens.changed() => {
                if changed.is_err() {
                    break;
                }
                print_screen(&screens.borrow_and_update());
                continue;
            }
            _ = signal::ctrl_c() => {
                info!("Received Ctrl+C, shutting down...");
                break;
            }
        };

        let line = match line {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                error!("Failed to read input: {}", e);
                break;
            }
        };

        match parse_command(&line) {
            Ok(Command::Intent(intent)) => {
                // Accepted intents show up through the screen subscription
                if let Err(e) = runtime.dispatch(intent) {
                    warn!("{}", e);
                }
            }
            Ok(Command::Show) => print_screen(&runtime.screen()),
            Ok(Command::Help) => eprintln!("{}", HELP),
            Ok(Command::Exit) => break,
            Err(e) => warn!("{}", e),
        }
    }

    runtime.shutdown();
    info!("Goodbye.");
}

use game_types::{Intent, Point, PointerEvent, WordDifficulty};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Intent(Intent),
    Show,
    Help,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),
    #[error("{command} expects {expected}")]
    BadArguments {
        command: &'static str,
        expected: &'static str,
    },
}

pub const HELP: &str = "\
commands:
  begin                      leave the welcome screen
  easy | medium | hard       choose a difficulty
  draw                       start drawing (after the mascot flourish)
  start                      start drawing right away
  got                        the word was guessed
  skip                       skip to another word
  end                        end the round
  next                       next round
  quit                       back to the welcome screen
  press X Y | move X Y       pointer down / pointer move
  release | cancel           pointer up / gesture interrupted
  clear                      clear the canvas
  show | help | exit";

/// Parse one line typed into the driver
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let mut parts = line.split_whitespace();
    let Some(command) = parts.next() else {
        return Ok(Command::Show);
    };
    let args: Vec<&str> = parts.collect();

    let intent = match command.to_lowercase().as_str() {
        "show" => return Ok(Command::Show),
        "help" | "?" => return Ok(Command::Help),
        "exit" => return Ok(Command::Exit),
        "begin" => Intent::Begin,
        "easy" | "medium" | "hard" => Intent::SelectDifficulty {
            difficulty: command
                .parse::<WordDifficulty>()
                .map_err(|_| CommandError::Unknown(command.to_string()))?,
        },
        "draw" => Intent::RequestStart,
        "start" => Intent::StartGame,
        "got" => Intent::GuessCorrect,
        "skip" => Intent::SkipWord,
        "end" => Intent::EndRound,
        "next" => Intent::NextRound,
        "quit" | "back" => Intent::Quit,
        "clear" => Intent::ClearCanvas,
        "release" => Intent::Pointer(PointerEvent::Release),
        "cancel" => Intent::Pointer(PointerEvent::Cancel),
        "press" => Intent::Pointer(PointerEvent::Press(parse_point("press", &args)?)),
        "move" => Intent::Pointer(PointerEvent::Move(parse_point("move", &args)?)),
        _ => return Err(CommandError::Unknown(command.to_string())),
    };

    Ok(Command::Intent(intent))
}

fn parse_point(command: &'static str, args: &[&str]) -> Result<Point, CommandError> {
    let bad = || CommandError::BadArguments {
        command,
        expected: "two coordinates",
    };
    match args {
        [x, y] => Ok(Point::new(
            x.parse().map_err(|_| bad())?,
            y.parse().map_err(|_| bad())?,
        )),
        _ => Err(bad()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_commands() {
        assert_eq!(parse_command("begin"), Ok(Command::Intent(Intent::Begin)));
        assert_eq!(parse_command("  GOT "), Ok(Command::Intent(Intent::GuessCorrect)));
        assert_eq!(parse_command(""), Ok(Command::Show));
        assert_eq!(parse_command("exit"), Ok(Command::Exit));
        assert_eq!(
            parse_command("hard"),
            Ok(Command::Intent(Intent::SelectDifficulty {
                difficulty: WordDifficulty::Hard
            }))
        );
    }

    #[test]
    fn test_pointer_commands() {
        assert_eq!(
            parse_command("press 1 2.5"),
            Ok(Command::Intent(Intent::Pointer(PointerEvent::Press(
                Point::new(1.0, 2.5)
            ))))
        );
        assert_eq!(
            parse_command("release"),
            Ok(Command::Intent(Intent::Pointer(PointerEvent::Release)))
        );
        assert!(matches!(
            parse_command("move 1"),
            Err(CommandError::BadArguments { command: "move", .. })
        ));
        assert!(parse_command("press a b").is_err());
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            parse_command("dance"),
            Err(CommandError::Unknown("dance".to_string()))
        );
    }
}

use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;

use dashboard_logging::dash_warn;
use thiserror::Error;

use super::app::AppEvent;

/// A line typed on stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Same path as clicking a tab: any key is accepted.
    Tab(String),
    Open(String),
    Back,
    Forward,
    /// Feed a status by hand, for offline use without a poller.
    Status(String),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown command {0:?}, try `help`")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
}

pub const HELP: &str =
    "commands: tab <key> | open <href> | back | forward | status <VALUE> | help | quit";

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word {
        "tab" => Command::Tab(required("tab", rest)?),
        "open" => Command::Open(required("open", rest)?),
        "status" => Command::Status(required("status", rest)?),
        "back" => Command::Back,
        "forward" => Command::Forward,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(InputError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn required(name: &'static str, rest: &str) -> Result<String, InputError> {
    if rest.is_empty() {
        Err(InputError::MissingArgument(name))
    } else {
        Ok(rest.to_string())
    }
}

/// Reads stdin on a background thread. End of input counts as `quit`.
pub fn spawn_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    dash_warn!("stdin read failed: {}", err);
                    break;
                }
            };
            let event = match parse_command(&line) {
                Ok(Some(command)) => AppEvent::Input(command),
                Ok(None) => continue,
                Err(err) => AppEvent::InputRejected(err),
            };
            if tx.send(event).is_err() {
                return;
            }
        }
        let _ = tx.send(AppEvent::Input(Command::Quit));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands_with_arguments() {
        assert_eq!(
            parse_command("tab import"),
            Ok(Some(Command::Tab("import".to_string())))
        );
        assert_eq!(
            parse_command("  open /models/abc/reference?tab-metrics=model-quality "),
            Ok(Some(Command::Open(
                "/models/abc/reference?tab-metrics=model-quality".to_string()
            )))
        );
        assert_eq!(
            parse_command("status SUCCEEDED"),
            Ok(Some(Command::Status("SUCCEEDED".to_string())))
        );
        assert_eq!(parse_command("back"), Ok(Some(Command::Back)));
        assert_eq!(parse_command("q"), Ok(Some(Command::Quit)));
    }

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(parse_command("   "), Ok(None));
    }

    #[test]
    fn bad_input_is_reported() {
        assert_eq!(parse_command("tab"), Err(InputError::MissingArgument("tab")));
        assert_eq!(
            parse_command("reload now"),
            Err(InputError::Unknown("reload".to_string()))
        );
    }
}

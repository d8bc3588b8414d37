use crate::events::AppEvent;
use strum::{Display as StrumDisplay, EnumIter, EnumString};

pub const SOCKET_PATH: &str = "/tmp/circulo.sock";

/// Line-based commands accepted on the control socket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, EnumIter, StrumDisplay)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Command {
    Show,
    Hide,
    Toggle,
}

impl From<Command> for AppEvent {
    fn from(command: Command) -> Self {
        match command {
            Command::Show => AppEvent::Show,
            Command::Hide => AppEvent::Hide,
            Command::Toggle => AppEvent::Toggle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_command_parsing() {
        assert_eq!(Command::from_str("show").unwrap(), Command::Show);
        assert_eq!(Command::from_str("TOGGLE").unwrap(), Command::Toggle);
        assert!(Command::from_str("explode").is_err());
    }

    #[test]
    fn test_command_round_trips_through_display() {
        for command in Command::iter() {
            assert_eq!(Command::from_str(&command.to_string()).unwrap(), command);
        }
    }
}

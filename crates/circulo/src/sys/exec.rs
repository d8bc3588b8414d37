use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use std::process::{Command, Stdio};
use thiserror::Error;

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct ShellCommand(String);

circulo_core::impl_string_newtype!(ShellCommand);

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("Empty command")]
    Empty,
    #[error("Invalid command line: {0}")]
    Parse(#[from] shell_words::ParseError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub fn parse(command: &ShellCommand) -> Result<Vec<String>, ExecError> {
    let args = shell_words::split(command)?;
    if args.is_empty() {
        return Err(ExecError::Empty);
    }
    Ok(args)
}

/// Starts `command` detached from our stdio.
pub fn spawn(command: &ShellCommand) -> Result<(), ExecError> {
    let args = parse(command)?;
    Command::new(&args[0])
        .args(&args[1..])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(())
}

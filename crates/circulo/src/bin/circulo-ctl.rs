use circulo::config;
use circulo::sys::command::{Command, SOCKET_PATH};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::os::unix::net::UnixStream;

#[derive(Parser, Debug)]
#[command(name = "circulo-ctl", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Show the menu overlay
    Show,
    /// Hide the menu overlay
    Hide,
    /// Expand or collapse the menu (shows the overlay if hidden)
    Toggle,
    /// Write the default config file if missing and print its path
    Init,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Show => send_command(Command::Show),
        Commands::Hide => send_command(Command::Hide),
        Commands::Toggle => send_command(Command::Toggle),
        Commands::Init => {
            let path = config::write_default_config()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn send_command(command: Command) -> anyhow::Result<()> {
    let mut stream = UnixStream::connect(SOCKET_PATH).map_err(|e| {
        anyhow::anyhow!(
            "Failed to connect to circulo at {}: {}. Is circulo running?",
            SOCKET_PATH,
            e
        )
    })?;

    log::debug!("Sending '{}'", command);
    writeln!(stream, "{}", command)?;
    Ok(())
}

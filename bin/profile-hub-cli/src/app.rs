use profile_hub_client::Config;

use std::{
    io::{self, Write},
    path::PathBuf,
};

use crate::{
    cli_command::{parse_cli_command, CliCommand, DynCommand},
    state::State,
};

/// Runs the interactive client
pub async fn run(config: Config, storage_path: PathBuf) -> anyhow::Result<()> {
    let mut state = State::new(config, storage_path).await?;
    println!("Type \"help\" to view list of commands.");

    loop {
        match parse_input(&state) {
            Ok(command) => {
                if let Err(e) = command.execute(&mut state).await {
                    println!("Error: {e}");
                }
            }
            Err(e) => {
                println!("Unable to parse command: {e}");
            }
        };
    }
}

/// Reads next command from standard input.
///
/// Returns a dynamic trait representing the parsed command or an error if no
/// such command exist.
fn parse_input(state: &State) -> anyhow::Result<DynCommand> {
    if state.signed_in() {
        print!("> ");
    } else {
        print!("| ");
    }
    // Flush stdout so the prompt actually get printed
    io::stdout().flush()?;

    let mut input = String::new();
    let _ = io::stdin().read_line(&mut input)?;

    parse_cli_command(&input)
}

pub mod help;
pub mod login;
pub mod profile;
pub mod quit;
pub mod show_avatar;
pub mod sign_out;
pub mod update;
pub mod upload_avatar;
pub mod verify;

pub use help::Help;
pub use login::Login;
pub use profile::Profile;
pub use quit::Quit;
pub use show_avatar::ShowAvatar;
pub use sign_out::SignOut;
pub use update::Update;
pub use upload_avatar::UploadAvatar;
pub use verify::Verify;

use crate::state::State;
use anyhow::{anyhow, bail};
use async_trait::async_trait;
use std::fmt::Debug;
use tracing::debug;

pub type DynCommand = Box<dyn CliCommand>;

#[async_trait]
pub trait CliCommand: Debug {
    /// Execute the command against the shared interactive state.
    async fn execute(self: Box<Self>, state: &mut State) -> Result<(), anyhow::Error>;

    /// Given the proper string arguments to a command, return an instance of
    /// this command.
    fn parse_command_args(args: &[&str]) -> Option<Self>
    where
        Self: Sized;

    /// Expected format for this command such as "login \[email\]".
    /// Used for generating help string dynamically.
    fn format() -> &'static str
    where
        Self: Sized;

    fn aliases() -> Vec<&'static str>
    where
        Self: Sized;

    fn description() -> &'static str
    where
        Self: Sized;

    /// Convert a string into a `Box<dyn Command>` suitable for dynamically
    /// dispatching the execute function.
    fn to_dyn(self) -> DynCommand
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }

    fn from_str(s: &str) -> Result<Self, anyhow::Error>
    where
        Self: Sized,
    {
        let mut split = s.trim().split(' ');

        let command = split
            .next()
            .ok_or_else(|| anyhow!("Missing \"command\" part of argument."))?;
        debug!("Looking for match for \"{}\"", command);

        // Check if this command matches any of our aliases. Otherwise return.
        // We do this check here to avoid doing it inside every
        // `CliCommand::parse_command_args` function.
        if !Self::aliases().contains(&command) {
            bail!("Command does not match any known name or alias.");
        }

        match Self::parse_command_args(&split.collect::<Vec<_>>()) {
            Some(t) => Ok(t),
            None => bail!("Expected Format: {}", Self::format()),
        }
    }
}

// Iterate through our registered commands and see if any of them can parse
// this command.
pub fn parse_cli_command(input: &str) -> Result<DynCommand, anyhow::Error> {
    let input = input.trim();

    let parsers = get_cmd_functions::<Parse>();
    for cmd_parse in parsers {
        if let Ok(c) = cmd_parse(input) {
            return Ok(c);
        }
    }

    Err(anyhow!("No matching command."))
}

/// Helper type to implement [GetCmdFunction]. This returns the parsing
/// function for all commands and allows the [parse_cli_command] to iterate
/// through these functions.
struct Parse;

impl GetCmdFunction for Parse {
    type FunctionSignature = fn(&str) -> Result<DynCommand, anyhow::Error>;

    fn get_function<T: CliCommand + 'static>() -> Self::FunctionSignature {
        |s| T::from_str(s).map(|c| c.to_dyn())
    }
}

/// Get the analogous function for every registered command, specified via a
/// [GetCmdFunction] implementor.
///
/// If you want to add a new command to this CLI please specify your command
/// here! The rest of the code will know how to use it.
pub fn get_cmd_functions<F: GetCmdFunction>() -> Vec<F::FunctionSignature> {
    vec![
        F::get_function::<Help>(),
        F::get_function::<Login>(),
        F::get_function::<Profile>(),
        F::get_function::<Quit>(),
        F::get_function::<ShowAvatar>(),
        F::get_function::<SignOut>(),
        F::get_function::<Update>(),
        F::get_function::<UploadAvatar>(),
        F::get_function::<Verify>(),
    ]
}

/// Maps a command type to one of its associated functions, so that the same
/// operation can be generated for every registered command.
pub trait GetCmdFunction {
    /// The signature of the function this implementor will be returning.
    type FunctionSignature;
    /// Given a specific implementor of CliCommand, T, return the correct
    /// function implementation for that type.
    fn get_function<T: CliCommand + 'static>() -> Self::FunctionSignature;
}

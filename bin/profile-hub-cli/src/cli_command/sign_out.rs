use crate::{cli_command::CliCommand, state::State};
use anyhow::Error;
use async_trait::async_trait;

#[derive(Debug)]
pub struct SignOut {}

#[async_trait]
impl CliCommand for SignOut {
    async fn execute(self: Box<Self>, state: &mut State) -> Result<(), Error> {
        let workflow = state.account()?;
        workflow.sign_out().await?;
        state.controller.resync();

        // The session file is cleared regardless of whether the remote
        // revocation went through.
        state.session_file.clear()?;
        println!("Signed out.");
        Ok(())
    }

    fn parse_command_args(slice: &[&str]) -> Option<Self> {
        match slice {
            [] => Some(SignOut {}),
            _ => None,
        }
    }

    fn format() -> &'static str {
        "sign-out"
    }

    fn aliases() -> Vec<&'static str> {
        vec!["sign-out", "logout", "so"]
    }

    fn description() -> &'static str {
        "Sign out of the current session."
    }
}

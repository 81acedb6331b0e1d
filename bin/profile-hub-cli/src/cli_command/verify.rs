use crate::{cli_command::CliCommand, state::State};
use anyhow::Error;
use async_trait::async_trait;
use profile_hub::types::Email;
use profile_hub_client::controller::Screen;

#[derive(Debug)]
pub struct Verify {
    email: String,
    token: String,
}

#[async_trait]
impl CliCommand for Verify {
    async fn execute(self: Box<Self>, state: &mut State) -> Result<(), Error> {
        let email: Email = self.email.parse()?;
        state
            .controller
            .auth()
            .complete_login(&email, &self.token)
            .await?;
        state.controller.resync();

        if let Screen::Account(workflow) = state.controller.screen() {
            state
                .session_file
                .save(&workflow.session().tokens.refresh_token)?;
            println!("Signed in as {}", workflow.session().email);
        }
        Ok(())
    }

    fn parse_command_args(slice: &[&str]) -> Option<Self> {
        match slice {
            [email, token] => Some(Verify {
                email: email.to_string(),
                token: token.to_string(),
            }),
            _ => None,
        }
    }

    fn format() -> &'static str {
        "verify [email] [token]"
    }

    fn aliases() -> Vec<&'static str> {
        vec!["verify", "v"]
    }

    fn description() -> &'static str {
        "Complete a login link with the one-time token from the email."
    }
}

use crate::{cli_command::CliCommand, state::State};
use anyhow::Error;
use async_trait::async_trait;
use profile_hub::types::Email;

#[derive(Debug)]
pub struct Login {
    email: String,
}

#[async_trait]
impl CliCommand for Login {
    async fn execute(self: Box<Self>, state: &mut State) -> Result<(), Error> {
        let email: Email = self.email.parse()?;
        state.controller.auth().request_login_link(&email).await?;

        println!("Check your email for the login link!");
        println!("Complete it here with: verify {email} <token>");
        Ok(())
    }

    fn parse_command_args(slice: &[&str]) -> Option<Self> {
        match slice {
            [email] => Some(Login {
                email: email.to_string(),
            }),
            _ => None,
        }
    }

    fn format() -> &'static str {
        "login [email]"
    }

    fn aliases() -> Vec<&'static str> {
        vec!["login", "l"]
    }

    fn description() -> &'static str {
        "Request a one-time login link for the given email address."
    }
}

use crate::{cli_command::CliCommand, state::State};
use anyhow::Error;
use async_trait::async_trait;

#[derive(Debug)]
pub struct Update {
    username: String,
    website: Option<String>,
}

#[async_trait]
impl CliCommand for Update {
    async fn execute(self: Box<Self>, state: &mut State) -> Result<(), Error> {
        let workflow = state.account()?;

        let mut fields = workflow.fields();
        fields.username = Some(self.username);
        if self.website.is_some() {
            fields.website = self.website;
        }

        workflow.update_profile(fields).await?;
        println!("Profile updated.");
        Ok(())
    }

    fn parse_command_args(slice: &[&str]) -> Option<Self> {
        match slice {
            [username, website] => Some(Update {
                username: username.to_string(),
                website: Some(website.to_string()),
            }),
            [username] => Some(Update {
                username: username.to_string(),
                website: None,
            }),
            _ => None,
        }
    }

    fn format() -> &'static str {
        "update [username] [website (optional)]"
    }

    fn aliases() -> Vec<&'static str> {
        vec!["update", "u"]
    }

    fn description() -> &'static str {
        "Save the profile with a new username and, optionally, a new website."
    }
}

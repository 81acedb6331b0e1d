use crate::{cli_command::CliCommand, state::State};
use anyhow::Error;
use async_trait::async_trait;

#[derive(Debug)]
pub struct Profile {}

#[async_trait]
impl CliCommand for Profile {
    async fn execute(self: Box<Self>, state: &mut State) -> Result<(), Error> {
        let workflow = state.account()?;

        // Refresh from the tabular store; a missing row or a backend failure
        // just leaves the fields empty.
        workflow.load_profile().await?;

        let fields = workflow.fields();
        println!("Email:    {}", workflow.session().email);
        println!("Name:     {}", fields.username.as_deref().unwrap_or("-"));
        println!("Website:  {}", fields.website.as_deref().unwrap_or("-"));
        match &fields.avatar_path {
            Some(path) => println!("Avatar:   {path}"),
            None => println!("Avatar:   -"),
        }
        Ok(())
    }

    fn parse_command_args(slice: &[&str]) -> Option<Self> {
        match slice {
            [] => Some(Profile {}),
            _ => None,
        }
    }

    fn format() -> &'static str {
        "profile"
    }

    fn aliases() -> Vec<&'static str> {
        vec!["profile", "p"]
    }

    fn description() -> &'static str {
        "Show the signed-in user's profile."
    }
}

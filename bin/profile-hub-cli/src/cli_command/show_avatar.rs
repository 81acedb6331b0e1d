use crate::{cli_command::CliCommand, state::State};
use anyhow::Error;
use async_trait::async_trait;
use std::path::PathBuf;

#[derive(Debug)]
pub struct ShowAvatar {
    destination: PathBuf,
}

#[async_trait]
impl CliCommand for ShowAvatar {
    async fn execute(self: Box<Self>, state: &mut State) -> Result<(), Error> {
        let workflow = state.account()?;

        match workflow.download_avatar().await? {
            Some(image) => {
                std::fs::write(&self.destination, image.content())?;
                println!(
                    "Saved avatar {} to {}",
                    image.path(),
                    self.destination.display()
                );
            }
            None => println!("No avatar set."),
        }
        Ok(())
    }

    fn parse_command_args(slice: &[&str]) -> Option<Self> {
        match slice {
            [destination] => Some(ShowAvatar {
                destination: PathBuf::from(destination),
            }),
            _ => None,
        }
    }

    fn format() -> &'static str {
        "show-avatar [destination]"
    }

    fn aliases() -> Vec<&'static str> {
        vec!["show-avatar", "sa"]
    }

    fn description() -> &'static str {
        "Download the current avatar image to a local file."
    }
}

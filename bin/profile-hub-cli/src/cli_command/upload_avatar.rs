use crate::{cli_command::CliCommand, state::State};
use anyhow::Error;
use async_trait::async_trait;
use bytes::Bytes;
use std::path::PathBuf;

#[derive(Debug)]
pub struct UploadAvatar {
    file: PathBuf,
}

#[async_trait]
impl CliCommand for UploadAvatar {
    async fn execute(self: Box<Self>, state: &mut State) -> Result<(), Error> {
        let workflow = state.account()?;

        let file_name = self
            .file
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
            .to_string();
        let content = Bytes::from(std::fs::read(&self.file)?);

        let path = workflow.upload_avatar(&file_name, content).await?;
        println!("Avatar stored as {path}");
        Ok(())
    }

    fn parse_command_args(slice: &[&str]) -> Option<Self> {
        match slice {
            [file] => Some(UploadAvatar {
                file: PathBuf::from(file),
            }),
            _ => None,
        }
    }

    fn format() -> &'static str {
        "upload-avatar [file]"
    }

    fn aliases() -> Vec<&'static str> {
        vec!["upload-avatar", "ua"]
    }

    fn description() -> &'static str {
        "Upload an image file as the new avatar and save it on the profile."
    }
}

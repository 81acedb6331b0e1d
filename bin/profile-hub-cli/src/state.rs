//! Shared state for the interactive session.

use crate::session_file::SessionFile;
use anyhow::anyhow;
use profile_hub_client::{
    backend::RestBackend,
    controller::{RootController, Screen},
    AccountWorkflow, Config,
};
use std::{path::PathBuf, sync::Arc};
use tracing::warn;

pub struct State {
    pub controller: Arc<RootController>,
    pub session_file: SessionFile,
}

impl State {
    pub async fn new(config: Config, storage_path: PathBuf) -> anyhow::Result<Self> {
        let backend = Arc::new(RestBackend::new(config)?);
        let controller = RootController::new(backend.clone(), backend.clone(), backend);
        let _ = controller.spawn();

        let session_file = SessionFile::new(storage_path)?;

        // A refresh token from a previous run restores the session up front,
        // the way a browser picks its stored token up on page load.
        if let Some(refresh_token) = session_file.refresh_token()? {
            match controller.restore_session(&refresh_token).await {
                Ok(()) => {
                    if let Screen::Account(workflow) = controller.screen() {
                        session_file.save(&workflow.session().tokens.refresh_token)?;
                    }
                }
                Err(error) => {
                    warn!(%error, "Stored session could not be restored");
                    session_file.clear()?;
                }
            }
        }

        Ok(Self {
            controller,
            session_file,
        })
    }

    pub fn signed_in(&self) -> bool {
        matches!(self.controller.screen(), Screen::Account(_))
    }

    /// Account workflow for the signed-in user.
    pub fn account(&self) -> anyhow::Result<Arc<AccountWorkflow>> {
        match self.controller.screen() {
            Screen::Account(workflow) => Ok(workflow),
            Screen::SignIn => Err(anyhow!("Sign in first.")),
        }
    }
}

use std::sync::Arc;

use super::completions::{CompletionsApi, OpenAiClient};
use super::shell::{LocalShell, ShellRunner};
use crate::config::AppConfig;
use crate::tasks::TaskStore;

pub struct ServerState {
    pub completions: Arc<dyn CompletionsApi>,
    pub shell: Arc<dyn ShellRunner>,
    pub tasks: TaskStore,
}

impl ServerState {
    pub fn new(config: &AppConfig) -> Arc<Self> {
        let completions = OpenAiClient::new(
            &config.completions_base_url(),
            &config.completions_model(),
            AppConfig::completions_api_key(),
        );
        let shell = LocalShell::new(&config.shell_command());

        Self::with_backends(Arc::new(completions), Arc::new(shell))
    }

    pub fn with_backends(
        completions: Arc<dyn CompletionsApi>,
        shell: Arc<dyn ShellRunner>,
    ) -> Arc<Self> {
        Arc::new(Self {
            completions,
            shell,
            tasks: TaskStore::new(),
        })
    }
}

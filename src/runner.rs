use crate::api::CompletionClient;
use crate::error::Result;
use crate::history::{history_window, seed_if_empty, HistoryStore, HISTORY_WINDOW};
use crate::models::Message;
use crate::ui::{display_reply, log_verbose};
use std::io::Write;

/// Runs one conversational turn: load history, ask the model, print, save.
pub struct SessionRunner<S, C> {
    store: S,
    client: C,
    system_prompt: String,
    window: usize,
    verbose: bool,
}

impl<S: HistoryStore, C: CompletionClient> SessionRunner<S, C> {
    pub fn new(store: S, client: C, system_prompt: impl Into<String>) -> Self {
        Self {
            store,
            client,
            system_prompt: system_prompt.into(),
            window: HISTORY_WINDOW,
            verbose: false,
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Send `prompt` and write the reply to `out`.
    ///
    /// The history is saved only after a reply was received and printed; a
    /// failed request leaves the stored history untouched.
    pub async fn run<W: Write>(&self, prompt: &str, out: &mut W) -> Result<String> {
        let mut messages = self.store.load();

        if seed_if_empty(&mut messages, &self.system_prompt) {
            log_verbose(self.verbose, "Starting a new conversation");
        }

        messages.push(Message::user(prompt));

        let window = history_window(&messages, self.window);
        log_verbose(
            self.verbose,
            &format!(
                "Sending {} of {} messages",
                window.len(),
                messages.len()
            ),
        );

        let reply = self.client.complete(window).await?;

        display_reply(out, &reply)?;

        messages.push(Message::assistant(reply.clone()));
        self.store.save(&messages)?;

        Ok(reply)
    }
}

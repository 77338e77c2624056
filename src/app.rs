//! Application state and core logic

use crate::config::AppConfig;
use crate::error::ConfigError;
use crate::gateway::{self, FeedSource, HttpFeeds, HttpGateway, SubmissionGateway};
use crate::state::{
    AppState, CardAction, CardFocus, Feed, FeedStatus, FormKind, GatewayReply, Outcome, View,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// A gateway reply on its way back to the event loop
#[derive(Debug)]
pub struct SubmissionResult {
    pub kind: FormKind,
    pub attempt: u64,
    pub reply: GatewayReply,
}

/// Work finished by a background task
#[derive(Debug)]
pub enum BackgroundResult {
    Submission(SubmissionResult),
    Feed {
        feed: Feed,
        result: Result<String, String>,
    },
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Gateway per form
    gateways: HashMap<FormKind, Arc<dyn SubmissionGateway>>,
    /// Where the server data view reads from
    feeds: Arc<dyn FeedSource>,
    /// Upper bound on a single request to the backend
    request_timeout: Option<Duration>,
    results_tx: mpsc::UnboundedSender<BackgroundResult>,
    results_rx: mpsc::UnboundedReceiver<BackgroundResult>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create an App whose forms and feeds talk to the configured HTTP backend
    pub fn new(config: &AppConfig) -> Result<Self, ConfigError> {
        let base_url = config.gateway_url();
        let client = reqwest::Client::new();

        let mut gateways: HashMap<FormKind, Arc<dyn SubmissionGateway>> = HashMap::new();
        for kind in FormKind::ALL {
            let gateway = HttpGateway::with_client(client.clone(), &base_url, kind, &kind.config()?);
            debug!(form = kind.slug(), endpoint = gateway.endpoint(), "Gateway configured");
            gateways.insert(kind, Arc::new(gateway));
        }
        let feeds = Arc::new(HttpFeeds::with_client(client, &base_url));

        Self::with_backends(gateways, feeds, config.submit_timeout())
    }

    pub fn with_backends(
        gateways: HashMap<FormKind, Arc<dyn SubmissionGateway>>,
        feeds: Arc<dyn FeedSource>,
        request_timeout: Option<Duration>,
    ) -> Result<Self, ConfigError> {
        let (results_tx, results_rx) = mpsc::unbounded_channel();
        Ok(Self {
            state: AppState::new()?,
            gateways,
            feeds,
            request_timeout,
            results_tx,
            results_rx,
            quit: false,
        })
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => {
                self.state.current_view = self.state.current_view.next();
                return;
            }
            KeyCode::BackTab => {
                self.state.current_view = self.state.current_view.prev();
                return;
            }
            KeyCode::Esc => {
                if self.state.current_error().is_some() {
                    self.state.dismiss_error();
                } else {
                    self.quit = true;
                }
                return;
            }
            _ => {}
        }

        match self.state.current_view.form_kind() {
            Some(kind) => self.handle_form_key(kind, key),
            None => self.handle_widget_key(key),
        }
    }

    /// Handle keys in a form view
    fn handle_form_key(&mut self, kind: FormKind, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Enter => self.submit_form(kind),
            KeyCode::Char('r') if ctrl => {
                self.state.forms.get_mut(kind).on_reset();
                self.state.status_message = Some("Form reset".to_string());
            }
            KeyCode::Char(c) if !ctrl => self.state.forms.get_mut(kind).push_char(c),
            KeyCode::Backspace => self.state.forms.get_mut(kind).pop_char(),
            _ => {}
        }
    }

    /// Handle keys in the demo widget views
    fn handle_widget_key(&mut self, key: KeyEvent) {
        match (self.state.current_view, key.code) {
            (View::FileCard, code) => return self.handle_card_key(code),
            (View::ServerData, KeyCode::Char('r')) => return self.load_feeds(),
            _ => {}
        }

        let state = &mut self.state;
        match (state.current_view, key.code) {
            (View::Counter, KeyCode::Char('+') | KeyCode::Up | KeyCode::Enter) => {
                state.counter.increment()
            }
            (View::Counter, KeyCode::Char('-') | KeyCode::Down) => state.counter.decrement(),
            (View::LightSwitch, KeyCode::Enter | KeyCode::Char(' ')) => {
                state.theme.toggle();
                state.status_message = Some(format!("{} mode", state.theme.label()));
            }
            (View::Carousel, KeyCode::Right | KeyCode::Down) => state.carousel.next(),
            (View::Carousel, KeyCode::Left | KeyCode::Up) => state.carousel.prev(),
            (View::Carousel, KeyCode::Char('o')) => state.carousel.orientation.toggle(),
            (View::Tags, KeyCode::Right) => state.tags.move_cursor(true),
            (View::Tags, KeyCode::Left) => state.tags.move_cursor(false),
            (View::Tags, KeyCode::Enter | KeyCode::Char(' ')) => state.tags.toggle_current(),
            _ => {}
        }
    }

    /// Handle keys on the file card
    fn handle_card_key(&mut self, code: KeyCode) {
        let card = &mut self.state.file_card;
        let action = match code {
            KeyCode::Up => {
                card.focus_prev();
                None
            }
            KeyCode::Down => {
                card.focus_next();
                None
            }
            KeyCode::Backspace => {
                card.pop_char();
                None
            }
            KeyCode::Char(c) if card.focus == CardFocus::Name => {
                card.push_char(c);
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => card.activate(),
            _ => None,
        };

        let message = match action {
            Some(CardAction::Cancel) => "Deployment cancelled".to_string(),
            Some(CardAction::Deploy { name, framework }) => {
                let name = if name.is_empty() {
                    "untitled project".to_string()
                } else {
                    name
                };
                if framework {
                    format!("Deploying {name} with framework selection")
                } else {
                    format!("Deploying {name}")
                }
            }
            None => return,
        };
        info!("{message}");
        self.state.status_message = Some(message);
    }

    /// Start a submission in the background if the form allows one
    pub fn submit_form(&mut self, kind: FormKind) {
        let Some(gateway) = self.gateways.get(&kind).cloned() else {
            self.push_error(format!("No gateway configured for {}", kind.slug()));
            return;
        };
        let Some(submission) = self.state.forms.get_mut(kind).begin_submit() else {
            return;
        };

        let timeout = self.request_timeout;
        let results = self.results_tx.clone();
        tokio::spawn(async move {
            let reply = gateway::dispatch(gateway.as_ref(), &submission.value, timeout).await;
            let result = BackgroundResult::Submission(SubmissionResult {
                kind,
                attempt: submission.attempt,
                reply,
            });
            if results.send(result).is_err() {
                debug!("Submission finished after the app closed");
            }
        });
    }

    /// Fetch the text of every feed in the background
    pub fn load_feeds(&mut self) {
        for feed in Feed::ALL {
            self.state.page_data.set(feed, FeedStatus::Loading);

            let source = Arc::clone(&self.feeds);
            let timeout = self.request_timeout;
            let results = self.results_tx.clone();
            tokio::spawn(async move {
                let result = gateway::load_feed(source.as_ref(), feed, timeout)
                    .await
                    .map_err(|e| e.to_string());
                if results.send(BackgroundResult::Feed { feed, result }).is_err() {
                    debug!("Feed finished after the app closed");
                }
            });
        }
    }

    /// Apply every background result that has arrived
    pub fn poll_background(&mut self) {
        while let Ok(result) = self.results_rx.try_recv() {
            self.apply_result(result);
        }
    }

    fn apply_result(&mut self, result: BackgroundResult) {
        match result {
            BackgroundResult::Submission(submission) => self.apply_submission(submission),
            BackgroundResult::Feed { feed, result } => {
                let status = match result {
                    Ok(text) => FeedStatus::Loaded(text),
                    Err(reason) => {
                        warn!(feed = feed.label(), %reason, "Feed failed");
                        FeedStatus::Failed(reason)
                    }
                };
                self.state.page_data.set(feed, status);
            }
        }
    }

    fn apply_submission(&mut self, result: SubmissionResult) {
        let form = self.state.forms.get_mut(result.kind);
        if !form.settle(result.attempt, result.reply) {
            return;
        }

        let message = form.state().message.clone().unwrap_or_default();
        let outcome = form.state().last_outcome;
        match outcome {
            Outcome::Success => self.state.status_message = Some(message),
            Outcome::Failure => self.push_error(message),
            Outcome::None => warn!("Settled submission left no outcome"),
        }
    }
}

//! Application state definitions

use super::forms::{FormKind, FormMachine};
use super::page_data::PageData;
use super::showcase::{Article, Carousel, Counter, FileCard, TagToggle, ThemeMode};
use crate::error::ConfigError;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    StringForm,
    FolderForm,
    ContactForm,
    Article,
    FileCard,
    Counter,
    LightSwitch,
    Carousel,
    Tags,
    ServerData,
}

impl View {
    pub const ALL: [View; 10] = [
        View::StringForm,
        View::FolderForm,
        View::ContactForm,
        View::Article,
        View::FileCard,
        View::Counter,
        View::LightSwitch,
        View::Carousel,
        View::Tags,
        View::ServerData,
    ];

    fn index(&self) -> usize {
        Self::ALL.iter().position(|v| v == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::StringForm => "String Form",
            Self::FolderForm => "Folder Form",
            Self::ContactForm => "Contact",
            Self::Article => "Article",
            Self::FileCard => "File Card",
            Self::Counter => "Counter",
            Self::LightSwitch => "Light Switch",
            Self::Carousel => "Carousel",
            Self::Tags => "Tags",
            Self::ServerData => "Server Data",
        }
    }

    /// The form hosted by this view, if any
    pub fn form_kind(&self) -> Option<FormKind> {
        match self {
            Self::StringForm => Some(FormKind::StringInput),
            Self::FolderForm => Some(FormKind::FolderPath),
            Self::ContactForm => Some(FormKind::Contact),
            _ => None,
        }
    }
}

/// One machine per stock form
#[derive(Debug, Clone)]
pub struct Forms {
    string_input: FormMachine,
    folder_path: FormMachine,
    contact: FormMachine,
}

impl Forms {
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Self {
            string_input: FormMachine::new(FormKind::StringInput.config()?),
            folder_path: FormMachine::new(FormKind::FolderPath.config()?),
            contact: FormMachine::new(FormKind::Contact.config()?),
        })
    }

    pub fn get(&self, kind: FormKind) -> &FormMachine {
        match kind {
            FormKind::StringInput => &self.string_input,
            FormKind::FolderPath => &self.folder_path,
            FormKind::Contact => &self.contact,
        }
    }

    pub fn get_mut(&mut self, kind: FormKind) -> &mut FormMachine {
        match kind {
            FormKind::StringInput => &mut self.string_input,
            FormKind::FolderPath => &mut self.folder_path,
            FormKind::Contact => &mut self.contact,
        }
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub current_view: View,
    pub forms: Forms,
    pub article: Article,
    pub file_card: FileCard,
    pub counter: Counter,
    pub theme: ThemeMode,
    pub carousel: Carousel,
    pub tags: TagToggle,
    pub page_data: PageData,
    /// Last informational message for the status bar
    pub status_message: Option<String>,
    /// Errors waiting to be shown, oldest first
    pub error_queue: Vec<String>,
}

impl AppState {
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Self {
            current_view: View::default(),
            forms: Forms::new()?,
            article: Article::default(),
            file_card: FileCard::default(),
            counter: Counter::default(),
            theme: ThemeMode::default(),
            carousel: Carousel::default(),
            tags: TagToggle::default(),
            page_data: PageData::default(),
            status_message: None,
            error_queue: Vec::new(),
        })
    }

    pub fn push_error(&mut self, message: String) {
        self.error_queue.push(message);
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.first().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        if !self.error_queue.is_empty() {
            self.error_queue.remove(0);
        }
    }
}

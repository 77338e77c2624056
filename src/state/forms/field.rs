//! Field configuration value objects

use crate::error::ConfigError;
use serde::Serialize;

/// The stock forms hosted by the showcase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormKind {
    StringInput,
    FolderPath,
    Contact,
}

impl FormKind {
    pub const ALL: [FormKind; 3] = [FormKind::StringInput, FormKind::FolderPath, FormKind::Contact];

    /// URL path segment used by the HTTP backend
    pub fn slug(&self) -> &'static str {
        match self {
            Self::StringInput => "string-input",
            Self::FolderPath => "folder-path",
            Self::Contact => "contact",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.slug() == slug)
    }

    /// Build a fresh config for this form
    pub fn config(&self) -> Result<FieldConfig, ConfigError> {
        match self {
            Self::StringInput => FieldConfig::string_input(),
            Self::FolderPath => FieldConfig::folder_path(),
            Self::Contact => FieldConfig::contact(),
        }
    }
}

/// Immutable configuration for a single-field form.
///
/// Bounds are private so a constructed config always satisfies
/// `min_length <= max_length`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldConfig {
    /// Form-encoded field name sent to the gateway
    pub name: String,
    pub label: String,
    pub placeholder: String,
    /// What the value is, used in the description line
    pub noun: String,
    pub success_message: String,
    pub error_message: String,
    /// Value restored on reset
    pub initial_value: String,
    min_length: usize,
    max_length: usize,
}

impl FieldConfig {
    /// Create a config with the given inclusive length bounds
    pub fn new(min_length: usize, max_length: usize) -> Result<Self, ConfigError> {
        if min_length > max_length {
            return Err(ConfigError::InvertedBounds {
                min: min_length,
                max: max_length,
            });
        }
        Ok(Self {
            name: "value".to_string(),
            label: "Value".to_string(),
            placeholder: String::new(),
            noun: "value".to_string(),
            success_message: "Form submitted successfully!".to_string(),
            error_message: "Form submission failed".to_string(),
            initial_value: String::new(),
            min_length,
            max_length,
        })
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = placeholder.to_string();
        self
    }

    pub fn with_noun(mut self, noun: &str) -> Self {
        self.noun = noun.to_string();
        self
    }

    pub fn with_messages(mut self, success: &str, error: &str) -> Self {
        self.success_message = success.to_string();
        self.error_message = error.to_string();
        self
    }

    /// Description line shown under the input
    pub fn description(&self) -> String {
        format!(
            "Enter a {} between {} and {} characters.",
            self.noun, self.min_length, self.max_length
        )
    }

    /// Generic string input, 2 to 50 characters
    pub fn string_input() -> Result<Self, ConfigError> {
        Ok(Self::new(2, 50)?
            .with_name("stringInput")
            .with_label("String Input")
            .with_placeholder("Enter your text")
            .with_noun("string input")
            .with_messages("String submitted successfully!", "Failed to submit string"))
    }

    /// Folder path form, 2 to 50 characters
    pub fn folder_path() -> Result<Self, ConfigError> {
        Ok(Self::new(2, 50)?
            .with_name("folderPath")
            .with_label("Folder Path")
            .with_placeholder("path/to/folder")
            .with_noun("folder path")
            .with_messages("Folder path saved!", "Failed to save folder path"))
    }

    /// Contact form taking an email address
    pub fn contact() -> Result<Self, ConfigError> {
        Ok(Self::new(3, 254)?
            .with_name("email")
            .with_label("Email")
            .with_placeholder("you@example.com")
            .with_noun("email address")
            .with_messages("Thanks, we'll be in touch!", "Could not send your message"))
    }
}

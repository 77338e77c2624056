//! Small demo widgets shown next to the forms

/// Click counter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter {
    pub count: i64,
}

impl Counter {
    pub fn increment(&mut self) {
        self.count += 1;
    }

    pub fn decrement(&mut self) {
        self.count -= 1;
    }
}

/// Light/dark theme toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        };
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        };
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

/// Slide carousel that wraps at both ends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    pub slides: Vec<String>,
    pub current: usize,
    pub orientation: Orientation,
}

impl Default for Carousel {
    fn default() -> Self {
        Self::with_slide_count(3)
    }
}

impl Carousel {
    pub fn with_slide_count(count: usize) -> Self {
        Self {
            slides: (1..=count).map(|n| format!("Slide {n}")).collect(),
            current: 0,
            orientation: Orientation::default(),
        }
    }

    pub fn next(&mut self) {
        if !self.slides.is_empty() {
            self.current = (self.current + 1) % self.slides.len();
        }
    }

    pub fn prev(&mut self) {
        if self.slides.is_empty() {
            return;
        }
        if self.current == 0 {
            self.current = self.slides.len() - 1;
        } else {
            self.current -= 1;
        }
    }

    pub fn current_slide(&self) -> Option<&str> {
        self.slides.get(self.current).map(String::as_str)
    }
}

const DEFAULT_TAGS: &[&str] = &["svelte", "rust", "tailwind", "typescript"];

/// Group of on/off tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagToggle {
    pub tags: Vec<String>,
    pub active: Vec<bool>,
    pub cursor: usize,
}

impl Default for TagToggle {
    fn default() -> Self {
        Self::new(DEFAULT_TAGS.iter().map(|t| t.to_string()).collect())
    }
}

impl TagToggle {
    pub const GROUP_LABEL: &'static str = "Tags";

    pub fn new(tags: Vec<String>) -> Self {
        let active = vec![false; tags.len()];
        Self {
            tags,
            active,
            cursor: 0,
        }
    }

    /// Accessibility label of a single tag
    pub fn item_label(tag: &str) -> String {
        format!("Toggle {tag}")
    }

    pub fn toggle_current(&mut self) {
        if let Some(flag) = self.active.get_mut(self.cursor) {
            *flag = !*flag;
        }
    }

    pub fn move_cursor(&mut self, forward: bool) {
        let len = self.tags.len();
        if len == 0 {
            return;
        }
        self.cursor = if forward {
            (self.cursor + 1) % len
        } else {
            (self.cursor + len - 1) % len
        };
    }

    pub fn selected(&self) -> Vec<&str> {
        self.tags
            .iter()
            .zip(&self.active)
            .filter(|(_, on)| **on)
            .map(|(tag, _)| tag.as_str())
            .collect()
    }
}

/// Titled block of prose
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub text: String,
}

impl Default for Article {
    fn default() -> Self {
        Self::new(
            "Component Showcase",
            "Validated single-field forms, a handful of small widgets and a backend \
             that answers them. Move between views with Tab and Shift+Tab.",
        )
    }
}

impl Article {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }
}

/// Focusable parts of a file card, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardFocus {
    #[default]
    Name,
    Framework,
    Cancel,
    Deploy,
}

impl CardFocus {
    const ORDER: [CardFocus; 4] = [
        CardFocus::Name,
        CardFocus::Framework,
        CardFocus::Cancel,
        CardFocus::Deploy,
    ];

    fn index(&self) -> usize {
        Self::ORDER.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(&self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.index() + len - 1) % len]
    }
}

/// What pressing one of the card's buttons asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardAction {
    Cancel,
    Deploy { name: String, framework: bool },
}

/// Project card with a name input, a framework checkbox and two buttons
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCard {
    pub title: String,
    pub description: String,
    pub input_label: String,
    pub input_placeholder: String,
    pub checkbox_label: String,
    pub name: String,
    pub checked: bool,
    pub focus: CardFocus,
}

impl Default for FileCard {
    fn default() -> Self {
        Self {
            title: "Create project".to_string(),
            description: "Deploy your new project in one click.".to_string(),
            input_label: "Name".to_string(),
            input_placeholder: "Name of your project".to_string(),
            checkbox_label: "Enable Framework Selection".to_string(),
            name: String::new(),
            checked: false,
            focus: CardFocus::default(),
        }
    }
}

impl FileCard {
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Type into the name input; ignored unless it has focus
    pub fn push_char(&mut self, c: char) {
        if self.focus == CardFocus::Name {
            self.name.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if self.focus == CardFocus::Name {
            self.name.pop();
        }
    }

    pub fn toggle(&mut self) {
        self.checked = !self.checked;
    }

    /// Press whatever has focus
    pub fn activate(&mut self) -> Option<CardAction> {
        match self.focus {
            CardFocus::Name => {
                self.focus_next();
                None
            }
            CardFocus::Framework => {
                self.toggle();
                None
            }
            CardFocus::Cancel => Some(CardAction::Cancel),
            CardFocus::Deploy => Some(CardAction::Deploy {
                name: self.name.clone(),
                framework: self.checked,
            }),
        }
    }
}

//! Text fetched from the backend's proxy endpoints when the showcase loads

/// A proxy endpoint whose response is shown on the server data view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feed {
    OpenAi,
    Shell,
}

impl Feed {
    pub const ALL: [Feed; 2] = [Feed::OpenAi, Feed::Shell];

    /// Path on the backend, relative to the gateway base URL
    pub fn path(&self) -> &'static str {
        match self {
            Self::OpenAi => "/api/open-ai",
            Self::Shell => "/api/shell",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::OpenAi => "OpenAI",
            Self::Shell => "Shell",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FeedStatus {
    #[default]
    Idle,
    Loading,
    Loaded(String),
    Failed(String),
}

/// Latest status of every feed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageData {
    open_ai: FeedStatus,
    shell: FeedStatus,
}

impl PageData {
    pub fn get(&self, feed: Feed) -> &FeedStatus {
        match feed {
            Feed::OpenAi => &self.open_ai,
            Feed::Shell => &self.shell,
        }
    }

    pub fn set(&mut self, feed: Feed, status: FeedStatus) {
        match feed {
            Feed::OpenAi => self.open_ai = status,
            Feed::Shell => self.shell = status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub value: String,          // Destination URL or operator shorthand, unique
    pub bookmarked: bool,
    pub label: Option<String>,  // Display name, falls back to `value`
}

impl Entry {
    pub fn new(value: impl Into<String>, bookmarked: bool, label: Option<String>) -> Self {
        Self {
            value: value.into(),
            bookmarked,
            label,
        }
    }
}

/// What the host browser asked for, taken from the first CLI argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    BookmarkCapture,
    RawUri,
    Enhanced,
    BrowseBookmarks,
}

impl RequestKind {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "_SURF_BMARK" => Some(Self::BookmarkCapture),
            "_SURF_URI_RAW" => Some(Self::RawUri),
            "_SURF_URI" => Some(Self::Enhanced),
            "_SURF_URI_BMARK" => Some(Self::BrowseBookmarks),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub operator: String,
    pub argument: String,
}

/// Result of applying an operator to its argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Navigate {
        url: String,
        /// Shorthand stored via insert-if-absent once navigation succeeded
        remember: Option<String>,
    },
    Delete(String),
    NoOp,
}

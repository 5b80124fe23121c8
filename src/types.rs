/// A single `{{label}}` token occurrence, with byte offsets into the
/// scanned text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub label: String,
    pub start: usize,
    pub end: usize,
}

/// Background/foreground hex pair assigned to a label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorPair {
    pub background: String,
    pub foreground: String,
}

/// A distinct label together with how often it occurs and its colors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelEntry {
    pub label: String,
    pub count: usize,
    pub colors: ColorPair,
}

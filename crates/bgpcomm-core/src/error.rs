#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("label parse error at line {line}: {message}")]
    LabelParse { line: usize, message: String },

    #[error("duplicate label file ID `{0}`")]
    DuplicateLabelFile(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// The only way a lookup can fail: the walk did not end on a label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("community not found: {community}")]
pub struct NotFound {
    pub community: String,
}

impl NotFound {
    pub fn new(community: impl Into<String>) -> Self {
        Self {
            community: community.into(),
        }
    }
}

/// How tokens are inserted into the tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InsertMode {
    /// AVL insertion with rebalancing.
    #[default]
    Balanced,
    /// Plain binary search tree insertion, no rebalancing.
    Unbalanced,
}

/// Settings for a word count run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VocabConfig {
    pub mode: InsertMode,
    /// Drop tokens that normalize to the empty string instead of counting
    /// the empty string as a word.
    pub skip_empty: bool,
}

impl VocabConfig {
    pub fn with_mode(mut self, mode: InsertMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_skip_empty(mut self, skip_empty: bool) -> Self {
        self.skip_empty = skip_empty;
        self
    }
}

use crate::error::WalkError;
use crate::walker::Walker;
use std::path::PathBuf;

/// Configures a traversal of everything below a root directory.
#[derive(Clone, Debug)]
pub struct WalkBuilder {
    root: PathBuf,
    contents_first: bool,
}

impl WalkBuilder {
    /// Creates a builder for a pre-order walk below `root`.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            contents_first: false,
        }
    }

    /// Yields each directory after its contents instead of before them.
    #[must_use]
    pub const fn contents_first(mut self, enabled: bool) -> Self {
        self.contents_first = enabled;
        self
    }

    /// Lists the root and returns the iterator.
    pub fn build(self) -> Result<Walker, WalkError> {
        Walker::new(self.root, self.contents_first)
    }
}

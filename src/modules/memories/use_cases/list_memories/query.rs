#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListMemories {
    pub search: Option<String>,
}

impl ListMemories {
    /// The search term, if one was given. An empty term means no search.
    pub fn term(&self) -> Option<&str> {
        self.search.as_deref().filter(|t| !t.is_empty())
    }
}

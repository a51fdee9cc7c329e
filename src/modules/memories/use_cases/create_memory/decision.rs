use crate::modules::memories::core::entry::NewEntry;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("empty content")]
    EmptyContent,
}

pub enum Decision {
    Accepted { new_entry: NewEntry },
    Rejected { reason: DecideError },
}

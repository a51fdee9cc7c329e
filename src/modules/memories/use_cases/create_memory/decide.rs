use crate::modules::memories::core::entry::NewEntry;
use crate::modules::memories::use_cases::create_memory::command::CreateMemory;
use crate::modules::memories::use_cases::create_memory::decision::{DecideError, Decision};

pub fn decide_create(command: CreateMemory) -> Decision {
    match command.content {
        Some(content) if !content.is_empty() => Decision::Accepted {
            new_entry: NewEntry {
                content,
                created_at: command.created_at,
            },
        },
        _ => Decision::Rejected {
            reason: DecideError::EmptyContent,
        },
    }
}

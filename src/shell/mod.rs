// Composition root for the memories service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the in-memory store and wire it into the use case handlers.
// - Expose the HTTP router to the binary.

pub mod config;
pub mod http;
pub mod state;

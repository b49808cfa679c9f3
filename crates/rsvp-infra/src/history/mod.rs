mod session_history;

pub use session_history::InMemorySessionHistory;

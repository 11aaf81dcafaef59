pub(crate) mod formatting;
pub(crate) mod handler;
pub(crate) mod state;

pub use handler::{CACHE_STATS_COMMAND, CLEAR_CACHE_COMMAND};
pub use state::AbnfLanguageServer;

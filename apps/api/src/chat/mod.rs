// Conversational front-end: greeting replies, the slot-filling session, and the
// terminal loop that drives it.

pub mod repl;
pub mod replies;
pub mod session;

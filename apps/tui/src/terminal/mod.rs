mod setup;

pub use setup::{restore as cleanup, setup_terminal as setup, Tui};

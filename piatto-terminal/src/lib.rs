pub mod config;
pub mod session;

pub use config::TerminalConfig;
pub use session::Session;

//! Command implementations

mod init;
mod remove;
mod update;

pub use init::run_init;
pub use remove::run_remove;
pub use update::run_update;

pub mod audit;
mod command_result;
pub mod helper;
pub mod init;
pub mod missing;

pub use command_result::*;

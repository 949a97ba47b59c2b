mod command_result;
pub mod extract;
pub mod helper;
pub mod init;
pub mod keys;
pub mod scan;
pub mod typos;
pub mod unused;

pub use command_result::*;

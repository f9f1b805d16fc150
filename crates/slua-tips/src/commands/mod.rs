pub mod init;
pub mod plugins;
pub mod stubs;

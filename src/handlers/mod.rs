pub mod cats;
pub mod init;

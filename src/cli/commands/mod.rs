mod context;
pub mod convert;
pub mod init;
pub mod keys;
pub mod scan;
pub mod verify;

pub mod configure;
pub mod install;
pub mod uninstall;
pub mod verify;

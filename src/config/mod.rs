//! Configuration: on-disk locations and the user config file.

pub mod paths;
pub mod user;

//! Filesystem access inside the Zellij sandbox, where the host's home
//! directory is mounted at `/host`.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir, read_host_file};

pub mod admin;
pub mod file;
pub mod general;
pub mod snapshot;
pub mod torrent;
pub mod tracker;

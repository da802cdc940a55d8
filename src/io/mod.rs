pub mod config_io;
pub mod post_io;
pub mod saved_mentions;

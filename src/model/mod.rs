pub mod post;
pub mod draft;
pub mod mention;
pub mod config;

pub use post::*;
pub use draft::*;
pub use mention::*;
pub use config::*;

pub mod compose;
pub mod engine;
pub mod link;
pub mod mention_search;
pub mod random;
pub mod seed;

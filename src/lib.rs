pub mod huffman;
pub mod bitstreams;
pub mod properties;
pub mod error;

pub trait Symbol: Copy + Eq + std::hash::Hash + std::fmt::Debug {}

impl<T: Copy + Eq + std::hash::Hash + std::fmt::Debug> Symbol for T {}

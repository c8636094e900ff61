pub mod index;

pub use index::{IndexResponse, index};

pub mod app;

mod utils;
pub use utils::*;

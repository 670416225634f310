pub mod executor;
mod utils;

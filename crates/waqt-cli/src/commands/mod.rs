pub mod block;
pub mod config;
pub mod day;
pub mod next;
pub mod times;

mod common;

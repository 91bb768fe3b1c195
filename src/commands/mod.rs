pub mod board;
pub mod cache;
pub mod check;
pub mod common;
pub mod next;
pub mod resolve;
pub mod route;

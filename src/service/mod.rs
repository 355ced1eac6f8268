pub mod evaluate;
pub mod health;
pub mod questions;

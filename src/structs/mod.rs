pub mod evaluate;
pub mod question;
pub mod respond;

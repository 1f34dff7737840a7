pub mod chat;
pub mod seed;
pub mod studio;

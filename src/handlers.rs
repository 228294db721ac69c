pub mod common;
pub mod hackernews;
pub mod health;
pub mod news;
pub mod users;

//! API routes

pub mod activity;
pub mod arena;
pub mod badges;
pub mod health;
pub mod levels;
pub mod profiles;
pub mod quiz;

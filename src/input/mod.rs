pub mod capability;
pub mod controller;
pub mod database;
pub mod enumerate;
pub mod filter;
pub mod manager;

pub mod capability;
pub mod controller;
pub mod error;
pub mod factory;
pub mod repository;
pub mod types;
pub mod wood;
pub mod workshop;

#[cfg(test)]
mod tests;

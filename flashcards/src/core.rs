// src/core.rs
pub mod console;
pub mod deck;
pub mod quiz;
pub mod session;
pub mod storage;
pub mod transcript;

#![no_std]

//! Pieces shared by the CBD Gold contracts: the admin identity, the error
//! taxonomy, and the stake position layout that the prize contract reads
//! out of the staking contract's storage.

pub mod admin;
pub mod errors;
pub mod stake_position;
pub mod stake_reader;
pub mod types;

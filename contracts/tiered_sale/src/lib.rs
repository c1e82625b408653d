#![no_std]

mod contract;
mod errors;
mod purchase;
mod schedule;
mod storage;
mod types;


pub use contract::{TieredSaleContract, TieredSaleContractClient};
pub use errors::Error;
pub use types::{SaleConfig, TierSchedule};

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    // configuration
    EmptyTierSchedule = 3,
    InvalidChangeInterval = 4,
    InvalidTierPrice = 5,
    InvalidTimeRange = 6,
    InvalidBurnPercent = 7,
    InvalidExchangeRate = 8,
    // purchase preconditions
    OwnerCannotPurchase = 9,
    SaleNotActive = 10,
    InvalidAmount = 11,
    CapExceeded = 12,
    // checked arithmetic
    ArithmeticOverflow = 13,
    ArithmeticUnderflow = 14,
    InsufficientTokenInventory = 15,
    // lifecycle
    SaleAlreadyStarted = 16,
    SaleNotEnded = 17,
    NothingToWithdraw = 18,
    TokensAlreadySet = 19,
}

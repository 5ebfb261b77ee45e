use soroban_sdk::contracterror;

/// Every rejected precondition maps to exactly one variant so callers can
/// tell failures apart. A returned error rolls the whole invocation back.
#[contracterror]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    // Configuration
    NotInitialized = 1,
    AlreadyInitialized = 2,

    // Authorization
    Unauthorized = 3,

    // Not-found / duplicate
    StreamNotFound = 4,
    StreamAlreadyExists = 5,
    RecipientHasActiveStream = 6,

    // Validation
    InvalidAmount = 7,
    InvalidTaxPercent = 8,
    InvalidStartTime = 9,
    InvalidRecipient = 10,

    // Insufficient funds
    AmountExceedsAvailable = 11,
    NothingToWithdraw = 12,
    InsufficientTreasury = 13,
    InsufficientAllowance = 14,
    InsufficientBalance = 15,
    NoTaxToWithdraw = 16,

    // Invalid state transition
    AlreadyPaused = 17,
    NotPaused = 18,
    StreamCancelled = 19,

    ArithmeticOverflow = 20,
}

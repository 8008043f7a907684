use soroban_sdk::contracterror;

/// Contract error types. Codes are part of the public interface;
/// callers branch on them, so they must stay stable.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FundRegistryError {
    Paused = 100,              // Registry-wide pause blocks the operation
    Unauthorized = 101,        // Caller lacks the required role
    NotFound = 102,            // Referenced campaign does not exist
    InvalidAmount = 103,       // Amount fails a validation bound
    InvalidGoal = 104,         // Goal must be positive
    InvalidDuration = 105,     // Duration must be positive
    InvalidName = 106,         // Name empty or too long
    InvalidDescription = 107,  // Description too long
    DeadlinePassed = 108,      // Contribution after the campaign deadline
    FundsLocked = 109,         // Contribution while campaign funds are locked
    CapacityExceeded = 110,    // Campaign-count ceiling reached
    CampaignEnded = 111,       // Operation requires an active campaign
    AlreadyEnded = 112,        // Campaign was already ended
    CampaignStillActive = 113, // Withdrawal requires an ended campaign
    InsufficientFunds = 114,   // Withdrawal exceeds the remaining balance
    NotInitialized = 115,      // Registry not initialized yet
    AlreadyInitialized = 116,  // Registry already initialized
}

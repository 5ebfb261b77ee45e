use soroban_sdk::{contracttype, Address};

/// Global configuration for the PayStream contract.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub token: Address,
    pub admin: Address,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StreamStatus {
    Active = 0,
    Paused = 1,
    Cancelled = 2,
}

/// Where a stream's escrow was drawn from, and where its unvested
/// remainder goes back to on cancellation.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Funding {
    /// Pulled from the sender's wallet at creation.
    Escrow = 0,
    /// Reserved from the pooled employer treasury.
    Treasury = 1,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Stream {
    pub stream_id: u64,
    pub sender: Address,
    pub recipient: Address,
    pub funding: Funding,
    pub rate_per_second: i128,
    /// Escrowed total; the vesting cap. Only grows, through bonus spikes.
    pub deposit: i128,
    pub tax_percent: u32,
    pub start_time: u64,
    /// Nominal end of accrual, shifted by pauses and bonus spikes.
    pub stop_time: u64,
    /// Gross amount paid out so far (net + tax).
    pub withdrawn: i128,
    pub status: StreamStatus,
    pub paused_at: Option<u64>,
    pub total_paused_duration: u64,
    pub cancelled_at: Option<u64>,
}

impl Stream {
    pub fn is_active(&self) -> bool {
        self.status != StreamStatus::Cancelled
    }

    pub fn is_paused(&self) -> bool {
        self.status == StreamStatus::Paused
    }
}

/// Result of a payout: `gross == net + tax`.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Withdrawal {
    pub gross: i128,
    pub net: i128,
    pub tax: i128,
}

/// Namespace for all contract storage keys.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Config,                 // Instance storage for global settings (admin/token).
    TreasuryBalance,        // Instance storage, pooled employer funds.
    TaxVaultBalance,        // Instance storage, withheld tax awaiting sweep.
    Stream(u64),            // Persistent storage for individual stream data.
    SenderStreams(Address), // Persistent, append-only list of ids per sender.
    ActiveStream(Address),  // Persistent, the recipient's open treasury stream.
    Employer(Address),      // Persistent, employer allow-list.
    Employees,              // Persistent, append-only roster of treasury payees.
}

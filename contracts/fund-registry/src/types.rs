use soroban_sdk::{contracttype, Address, String};

/// Storage keys for contract data.
///
/// Registry-wide configuration lives in instance storage; per-campaign
/// records live in persistent storage under composite keys.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,                       // Registry administrator (instance)
    FeeToken,                    // Token used for fees and custody (instance)
    CreationFee,                 // Flat fee charged on campaign creation (instance)
    Paused,                      // Registry-wide pause flag (instance)
    NextCampaignId,              // Counter for campaign IDs, starts at 1 (instance)
    MaxCampaigns,                // Campaign-count ceiling (instance)
    Campaign(u32),               // Campaign ID -> Campaign (persistent)
    Contribution(u32, Address),  // (Campaign ID, contributor) -> Contribution (persistent)
    CampaignAdmin(u32, Address), // (Campaign ID, account) -> AdminGrant (persistent)
}

/// A fundraising campaign.
///
/// `raised` tracks the balance currently held in custody for the
/// campaign: it grows with contributions and shrinks with withdrawals.
/// `deadline` is an absolute ledger sequence number.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Campaign {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub goal: i128,
    pub raised: i128,
    pub deadline: u32,
    pub active: bool,
    pub creator: Address,
    pub funds_locked: bool,
}

/// Latest contribution of one contributor to one campaign.
///
/// A repeat contribution overwrites this record; only the campaign's
/// `raised` total accumulates.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Contribution {
    pub amount: i128,
    pub recorded_at: u32, // ledger sequence of the contribution
}

/// Per-campaign admin grant. Grants are deactivated, never deleted.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminGrant {
    pub active: bool,
}

/// Maximum byte length of a campaign name.
pub const MAX_NAME_LEN: u32 = 100;

/// Maximum byte length of a campaign description.
pub const MAX_DESCRIPTION_LEN: u32 = 500;

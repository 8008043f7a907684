#![no_std]
use soroban_sdk::{contract, contractimpl, Address, Env, String};

mod admin;
mod campaign;
mod errors;
mod events;
mod funding;
mod helpers;
mod types;

pub use errors::FundRegistryError;
pub use types::{AdminGrant, Campaign, Contribution};

#[contract]
pub struct FundRegistry;

#[contractimpl]
impl FundRegistry {
    /// Initializes the registry with its administrator, fee/custody
    /// token, flat creation fee, and campaign-count ceiling.
    ///
    /// Must be called once before any other mutating operation;
    /// subsequent calls fail with `AlreadyInitialized`.
    pub fn initialize(
        env: Env,
        admin: Address,
        fee_token: Address,
        creation_fee: i128,
        max_campaigns: u32,
    ) -> Result<(), FundRegistryError> {
        admin::initialize(&env, admin, fee_token, creation_fee, max_campaigns)
    }

    /// Replaces the registry administrator. Administrator only.
    pub fn set_admin(env: Env, caller: Address, new_admin: Address) -> Result<(), FundRegistryError> {
        admin::set_admin(&env, caller, new_admin)
    }

    /// Replaces the flat campaign creation fee. Administrator only.
    pub fn set_creation_fee(env: Env, caller: Address, new_fee: i128) -> Result<(), FundRegistryError> {
        admin::set_creation_fee(&env, caller, new_fee)
    }

    /// Flips the registry-wide pause flag and returns the new value.
    /// Administrator only. Pause blocks campaign creation and
    /// contribution; everything else stays available.
    pub fn toggle_pause(env: Env, caller: Address) -> Result<bool, FundRegistryError> {
        admin::toggle_pause(&env, caller)
    }

    /// Creates a campaign and returns its id.
    ///
    /// # Arguments
    /// * `creator` - The account creating (and paying the fee for) the campaign
    /// * `name` - Campaign name, non-empty, at most 100 bytes
    /// * `description` - Campaign description, at most 500 bytes
    /// * `goal` - Funding goal, must be positive
    /// * `duration` - Campaign lifetime in ledger sequences, must be positive
    pub fn create_campaign(
        env: Env,
        creator: Address,
        name: String,
        description: String,
        goal: i128,
        duration: u32,
    ) -> Result<u32, FundRegistryError> {
        campaign::create_campaign(&env, creator, name, description, goal, duration)
    }

    /// Contributes `amount` into the campaign's custody.
    ///
    /// A repeat contribution by the same contributor overwrites their
    /// contribution record; the campaign's `raised` total accumulates.
    pub fn contribute(
        env: Env,
        contributor: Address,
        campaign_id: u32,
        amount: i128,
    ) -> Result<(), FundRegistryError> {
        funding::contribute(&env, contributor, campaign_id, amount)
    }

    /// Blocks further contributions to the campaign. Campaign admin only.
    pub fn lock_funds(env: Env, caller: Address, campaign_id: u32) -> Result<(), FundRegistryError> {
        funding::lock_funds(&env, caller, campaign_id)
    }

    /// Re-enables contributions to the campaign. Campaign admin only.
    pub fn unlock_funds(env: Env, caller: Address, campaign_id: u32) -> Result<(), FundRegistryError> {
        funding::unlock_funds(&env, caller, campaign_id)
    }

    /// Ends the campaign, enabling withdrawal. Campaign admin only.
    /// One-way; an ended campaign is never reactivated.
    pub fn end_campaign(env: Env, caller: Address, campaign_id: u32) -> Result<(), FundRegistryError> {
        campaign::end_campaign(&env, caller, campaign_id)
    }

    /// Withdraws `amount` from an ended campaign's custody to
    /// `recipient`. Campaign admin only. Repeatable until the raised
    /// balance reaches zero.
    pub fn withdraw_funds(
        env: Env,
        caller: Address,
        campaign_id: u32,
        recipient: Address,
        amount: i128,
    ) -> Result<(), FundRegistryError> {
        funding::withdraw_funds(&env, caller, campaign_id, recipient, amount)
    }

    /// Grants `account` admin status on the campaign. Creator only.
    pub fn add_campaign_admin(
        env: Env,
        caller: Address,
        campaign_id: u32,
        account: Address,
    ) -> Result<(), FundRegistryError> {
        campaign::add_campaign_admin(&env, caller, campaign_id, account)
    }

    /// Revokes `account`'s admin status on the campaign. Creator only.
    pub fn remove_campaign_admin(
        env: Env,
        caller: Address,
        campaign_id: u32,
        account: Address,
    ) -> Result<(), FundRegistryError> {
        campaign::remove_campaign_admin(&env, caller, campaign_id, account)
    }

    pub fn get_campaign(env: Env, campaign_id: u32) -> Option<Campaign> {
        campaign::get_campaign(&env, campaign_id)
    }

    pub fn get_contribution(
        env: Env,
        campaign_id: u32,
        contributor: Address,
    ) -> Option<Contribution> {
        funding::get_contribution(&env, campaign_id, contributor)
    }

    /// Whether `account` holds an active admin grant for the campaign.
    pub fn is_admin(env: Env, campaign_id: u32, account: Address) -> bool {
        helpers::grant_is_active(&env, campaign_id, &account)
    }

    pub fn is_paused(env: Env) -> bool {
        helpers::is_paused(&env)
    }

    /// The next-campaign-id counter; 1 when no campaign exists yet.
    pub fn get_campaign_count(env: Env) -> u32 {
        admin::get_campaign_count(&env)
    }

    pub fn get_admin(env: Env) -> Option<Address> {
        admin::get_admin(&env)
    }

    pub fn get_creation_fee(env: Env) -> i128 {
        admin::get_creation_fee(&env)
    }

    pub fn get_fee_token(env: Env) -> Option<Address> {
        admin::get_fee_token(&env)
    }
}

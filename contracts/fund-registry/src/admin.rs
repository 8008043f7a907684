use crate::errors::FundRegistryError;
use crate::events;
use crate::helpers;
use crate::types::DataKey;
use soroban_sdk::{Address, Env};

pub fn initialize(
    env: &Env,
    admin: Address,
    fee_token: Address,
    creation_fee: i128,
    max_campaigns: u32,
) -> Result<(), FundRegistryError> {
    if helpers::is_initialized(env) {
        return Err(FundRegistryError::AlreadyInitialized);
    }
    if creation_fee < 0 {
        return Err(FundRegistryError::InvalidAmount);
    }
    admin.require_auth();

    env.storage().instance().set(&DataKey::Admin, &admin);
    env.storage().instance().set(&DataKey::FeeToken, &fee_token);
    env.storage()
        .instance()
        .set(&DataKey::CreationFee, &creation_fee);
    env.storage().instance().set(&DataKey::Paused, &false);
    env.storage().instance().set(&DataKey::NextCampaignId, &1u32);
    env.storage()
        .instance()
        .set(&DataKey::MaxCampaigns, &max_campaigns);
    Ok(())
}

pub fn set_admin(env: &Env, caller: Address, new_admin: Address) -> Result<(), FundRegistryError> {
    caller.require_auth();
    helpers::require_admin(env, &caller)?;

    env.storage().instance().set(&DataKey::Admin, &new_admin);
    Ok(())
}

pub fn set_creation_fee(
    env: &Env,
    caller: Address,
    new_fee: i128,
) -> Result<(), FundRegistryError> {
    caller.require_auth();
    helpers::require_admin(env, &caller)?;
    if new_fee < 0 {
        return Err(FundRegistryError::InvalidAmount);
    }

    env.storage().instance().set(&DataKey::CreationFee, &new_fee);
    Ok(())
}

/// Flips the registry-wide pause flag and returns the new value.
///
/// Pause blocks fund inflow only: campaign creation and contribution.
/// Lock, unlock, end, withdrawal, and all configuration operations stay
/// available while paused.
pub fn toggle_pause(env: &Env, caller: Address) -> Result<bool, FundRegistryError> {
    caller.require_auth();
    helpers::require_admin(env, &caller)?;

    let paused = !helpers::is_paused(env);
    env.storage().instance().set(&DataKey::Paused, &paused);

    events::pause_toggled(env, paused);
    Ok(paused)
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

pub fn get_creation_fee(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::CreationFee)
        .unwrap_or(0)
}

pub fn get_fee_token(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::FeeToken)
}

/// The next-campaign-id counter. Campaign IDs start at 1, so this is 1
/// for a registry that never created a campaign.
pub fn get_campaign_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::NextCampaignId)
        .unwrap_or(1)
}

use crate::errors::FundRegistryError;
use crate::types::{AdminGrant, Campaign, DataKey};
use soroban_sdk::{Address, Env};

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn read_admin(env: &Env) -> Result<Address, FundRegistryError> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(FundRegistryError::NotInitialized)
}

/// Identity check against the registry administrator. Authentication of
/// the caller happens at the entry point via `require_auth`.
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), FundRegistryError> {
    let admin = read_admin(env)?;
    if caller != &admin {
        return Err(FundRegistryError::Unauthorized);
    }
    Ok(())
}

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Paused)
        .unwrap_or(false)
}

pub fn ensure_not_paused(env: &Env) -> Result<(), FundRegistryError> {
    if is_paused(env) {
        return Err(FundRegistryError::Paused);
    }
    Ok(())
}

pub fn fee_token(env: &Env) -> Result<Address, FundRegistryError> {
    env.storage()
        .instance()
        .get(&DataKey::FeeToken)
        .ok_or(FundRegistryError::NotInitialized)
}

pub fn read_campaign(env: &Env, campaign_id: u32) -> Result<Campaign, FundRegistryError> {
    env.storage()
        .persistent()
        .get(&DataKey::Campaign(campaign_id))
        .ok_or(FundRegistryError::NotFound)
}

pub fn write_campaign(env: &Env, campaign: &Campaign) {
    env.storage()
        .persistent()
        .set(&DataKey::Campaign(campaign.id), campaign);
}

/// True when `account` holds an active admin grant for the campaign.
/// Absent grants count as inactive.
pub fn grant_is_active(env: &Env, campaign_id: u32, account: &Address) -> bool {
    env.storage()
        .persistent()
        .get::<_, AdminGrant>(&DataKey::CampaignAdmin(campaign_id, account.clone()))
        .map_or(false, |grant| grant.active)
}

/// Fund-lifecycle operations are gated on the grant table, not on the
/// `creator` field. The creator is auto-granted at creation.
pub fn require_active_grant(
    env: &Env,
    campaign_id: u32,
    caller: &Address,
) -> Result<(), FundRegistryError> {
    if !grant_is_active(env, campaign_id, caller) {
        return Err(FundRegistryError::Unauthorized);
    }
    Ok(())
}

pub fn write_grant(env: &Env, campaign_id: u32, account: &Address, active: bool) {
    env.storage().persistent().set(
        &DataKey::CampaignAdmin(campaign_id, account.clone()),
        &AdminGrant { active },
    );
}

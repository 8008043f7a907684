use crate::errors::FundRegistryError;
use crate::events;
use crate::helpers;
use crate::types::{Campaign, DataKey, MAX_DESCRIPTION_LEN, MAX_NAME_LEN};
use soroban_sdk::{token, Address, Env, String};

/// Creates a campaign and auto-grants the creator admin status on it.
///
/// The creation fee is transferred from the creator to the registry
/// administrator before any state is written; a failed transfer aborts
/// the whole invocation.
pub fn create_campaign(
    env: &Env,
    creator: Address,
    name: String,
    description: String,
    goal: i128,
    duration: u32,
) -> Result<u32, FundRegistryError> {
    creator.require_auth();

    helpers::ensure_not_paused(env)?;

    let campaign_id: u32 = env
        .storage()
        .instance()
        .get(&DataKey::NextCampaignId)
        .ok_or(FundRegistryError::NotInitialized)?;
    let max_campaigns: u32 = env
        .storage()
        .instance()
        .get(&DataKey::MaxCampaigns)
        .ok_or(FundRegistryError::NotInitialized)?;
    if campaign_id >= max_campaigns {
        return Err(FundRegistryError::CapacityExceeded);
    }

    if name.len() == 0 || name.len() > MAX_NAME_LEN {
        return Err(FundRegistryError::InvalidName);
    }
    if description.len() > MAX_DESCRIPTION_LEN {
        return Err(FundRegistryError::InvalidDescription);
    }
    if goal <= 0 {
        return Err(FundRegistryError::InvalidGoal);
    }
    if duration == 0 {
        return Err(FundRegistryError::InvalidDuration);
    }
    let deadline = env
        .ledger()
        .sequence()
        .checked_add(duration)
        .ok_or(FundRegistryError::InvalidDuration)?;

    let creation_fee: i128 = env
        .storage()
        .instance()
        .get(&DataKey::CreationFee)
        .ok_or(FundRegistryError::NotInitialized)?;
    if creation_fee > 0 {
        let admin = helpers::read_admin(env)?;
        let fee_token = helpers::fee_token(env)?;
        token::Client::new(env, &fee_token).transfer(&creator, &admin, &creation_fee);
    }

    let campaign = Campaign {
        id: campaign_id,
        name,
        description,
        goal,
        raised: 0,
        deadline,
        active: true,
        creator: creator.clone(),
        funds_locked: false,
    };
    helpers::write_campaign(env, &campaign);
    helpers::write_grant(env, campaign_id, &creator, true);
    env.storage()
        .instance()
        .set(&DataKey::NextCampaignId, &(campaign_id + 1));

    events::campaign_created(env, &campaign);
    Ok(campaign_id)
}

/// One-way transition; nothing reactivates an ended campaign.
pub fn end_campaign(env: &Env, caller: Address, campaign_id: u32) -> Result<(), FundRegistryError> {
    caller.require_auth();

    let mut campaign = helpers::read_campaign(env, campaign_id)?;
    helpers::require_active_grant(env, campaign_id, &caller)?;
    if !campaign.active {
        return Err(FundRegistryError::AlreadyEnded);
    }

    campaign.active = false;
    helpers::write_campaign(env, &campaign);

    events::campaign_ended(env, campaign_id);
    Ok(())
}

/// Admin management is gated on the `creator` field, unlike the
/// fund-lifecycle operations which check the grant table. Idempotent.
pub fn add_campaign_admin(
    env: &Env,
    caller: Address,
    campaign_id: u32,
    account: Address,
) -> Result<(), FundRegistryError> {
    caller.require_auth();

    let campaign = helpers::read_campaign(env, campaign_id)?;
    if caller != campaign.creator {
        return Err(FundRegistryError::Unauthorized);
    }

    helpers::write_grant(env, campaign_id, &account, true);

    events::admin_grant_changed(env, campaign_id, &account, true);
    Ok(())
}

/// Deactivates the grant; the record itself is kept. Idempotent.
pub fn remove_campaign_admin(
    env: &Env,
    caller: Address,
    campaign_id: u32,
    account: Address,
) -> Result<(), FundRegistryError> {
    caller.require_auth();

    let campaign = helpers::read_campaign(env, campaign_id)?;
    if caller != campaign.creator {
        return Err(FundRegistryError::Unauthorized);
    }

    helpers::write_grant(env, campaign_id, &account, false);

    events::admin_grant_changed(env, campaign_id, &account, false);
    Ok(())
}

pub fn get_campaign(env: &Env, campaign_id: u32) -> Option<Campaign> {
    env.storage()
        .persistent()
        .get(&DataKey::Campaign(campaign_id))
}

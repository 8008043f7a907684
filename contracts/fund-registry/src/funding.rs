use crate::errors::FundRegistryError;
use crate::events;
use crate::helpers;
use crate::types::{Contribution, DataKey};
use soroban_sdk::{token, Address, Env};

/// Accepts a contribution into the campaign's custody.
///
/// The contributor's record is overwritten with the latest amount and
/// ledger sequence; only the campaign's `raised` total accumulates.
pub fn contribute(
    env: &Env,
    contributor: Address,
    campaign_id: u32,
    amount: i128,
) -> Result<(), FundRegistryError> {
    contributor.require_auth();

    let mut campaign = helpers::read_campaign(env, campaign_id)?;
    helpers::ensure_not_paused(env)?;
    if !campaign.active {
        return Err(FundRegistryError::CampaignEnded);
    }
    let now = env.ledger().sequence();
    if now > campaign.deadline {
        return Err(FundRegistryError::DeadlinePassed);
    }
    if campaign.funds_locked {
        return Err(FundRegistryError::FundsLocked);
    }
    if amount <= 0 {
        return Err(FundRegistryError::InvalidAmount);
    }
    campaign.raised = campaign
        .raised
        .checked_add(amount)
        .ok_or(FundRegistryError::InvalidAmount)?;

    let fee_token = helpers::fee_token(env)?;
    token::Client::new(env, &fee_token).transfer(
        &contributor,
        &env.current_contract_address(),
        &amount,
    );

    helpers::write_campaign(env, &campaign);
    env.storage().persistent().set(
        &DataKey::Contribution(campaign_id, contributor.clone()),
        &Contribution {
            amount,
            recorded_at: now,
        },
    );

    events::contribution_received(env, campaign_id, &contributor, amount, campaign.raised);
    Ok(())
}

pub fn lock_funds(env: &Env, caller: Address, campaign_id: u32) -> Result<(), FundRegistryError> {
    set_funds_locked(env, caller, campaign_id, true)
}

pub fn unlock_funds(env: &Env, caller: Address, campaign_id: u32) -> Result<(), FundRegistryError> {
    set_funds_locked(env, caller, campaign_id, false)
}

/// While locked, contributions are rejected; withdrawal is unaffected
/// (withdrawal is gated on the campaign being ended, not on the lock).
fn set_funds_locked(
    env: &Env,
    caller: Address,
    campaign_id: u32,
    locked: bool,
) -> Result<(), FundRegistryError> {
    caller.require_auth();

    let mut campaign = helpers::read_campaign(env, campaign_id)?;
    helpers::require_active_grant(env, campaign_id, &caller)?;
    if !campaign.active {
        return Err(FundRegistryError::CampaignEnded);
    }

    campaign.funds_locked = locked;
    helpers::write_campaign(env, &campaign);

    events::funds_lock_changed(env, campaign_id, locked);
    Ok(())
}

/// Pays out part of the campaign's custody balance to `recipient`.
///
/// Only permitted once the campaign has ended; repeatable until
/// `raised` reaches zero.
pub fn withdraw_funds(
    env: &Env,
    caller: Address,
    campaign_id: u32,
    recipient: Address,
    amount: i128,
) -> Result<(), FundRegistryError> {
    caller.require_auth();

    let mut campaign = helpers::read_campaign(env, campaign_id)?;
    helpers::require_active_grant(env, campaign_id, &caller)?;
    if campaign.active {
        return Err(FundRegistryError::CampaignStillActive);
    }
    if amount > campaign.raised {
        return Err(FundRegistryError::InsufficientFunds);
    }
    if amount <= 0 {
        return Err(FundRegistryError::InvalidAmount);
    }

    let fee_token = helpers::fee_token(env)?;
    token::Client::new(env, &fee_token).transfer(
        &env.current_contract_address(),
        &recipient,
        &amount,
    );

    campaign.raised -= amount;
    helpers::write_campaign(env, &campaign);

    events::funds_withdrawn(env, campaign_id, &recipient, amount, campaign.raised);
    Ok(())
}

pub fn get_contribution(
    env: &Env,
    campaign_id: u32,
    contributor: Address,
) -> Option<Contribution> {
    env.storage()
        .persistent()
        .get(&DataKey::Contribution(campaign_id, contributor))
}

use crate::types::Campaign;
use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

// Symbol representing campaign lifecycle events.
pub const CAMPAIGN: Symbol = symbol_short!("CAMPAIGN");

// Symbol representing fund movement events.
pub const FUNDS: Symbol = symbol_short!("FUNDS");

// Symbol representing registry configuration events.
pub const REGISTRY: Symbol = symbol_short!("REGISTRY");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCreated {
    pub campaign_id: u32,
    pub creator: Address,
    pub goal: i128,
    pub deadline: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributionReceived {
    pub campaign_id: u32,
    pub contributor: Address,
    pub amount: i128,
    pub raised: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsWithdrawn {
    pub campaign_id: u32,
    pub recipient: Address,
    pub amount: i128,
    pub remaining: i128,
}

pub(crate) fn campaign_created(env: &Env, campaign: &Campaign) {
    env.events().publish(
        (CAMPAIGN, symbol_short!("created"), campaign.id),
        CampaignCreated {
            campaign_id: campaign.id,
            creator: campaign.creator.clone(),
            goal: campaign.goal,
            deadline: campaign.deadline,
        },
    );
}

pub(crate) fn contribution_received(
    env: &Env,
    campaign_id: u32,
    contributor: &Address,
    amount: i128,
    raised: i128,
) {
    env.events().publish(
        (CAMPAIGN, symbol_short!("funded"), campaign_id),
        ContributionReceived {
            campaign_id,
            contributor: contributor.clone(),
            amount,
            raised,
        },
    );
}

pub(crate) fn funds_lock_changed(env: &Env, campaign_id: u32, locked: bool) {
    let action = if locked {
        symbol_short!("locked")
    } else {
        symbol_short!("unlocked")
    };
    env.events().publish((FUNDS, action, campaign_id), locked);
}

pub(crate) fn campaign_ended(env: &Env, campaign_id: u32) {
    env.events()
        .publish((CAMPAIGN, symbol_short!("ended"), campaign_id), campaign_id);
}

pub(crate) fn funds_withdrawn(
    env: &Env,
    campaign_id: u32,
    recipient: &Address,
    amount: i128,
    remaining: i128,
) {
    env.events().publish(
        (FUNDS, symbol_short!("withdrawn"), campaign_id),
        FundsWithdrawn {
            campaign_id,
            recipient: recipient.clone(),
            amount,
            remaining,
        },
    );
}

pub(crate) fn admin_grant_changed(env: &Env, campaign_id: u32, account: &Address, active: bool) {
    let action = if active {
        symbol_short!("granted")
    } else {
        symbol_short!("revoked")
    };
    env.events()
        .publish((CAMPAIGN, action, campaign_id), account.clone());
}

pub(crate) fn pause_toggled(env: &Env, paused: bool) {
    env.events()
        .publish((REGISTRY, symbol_short!("paused")), paused);
}

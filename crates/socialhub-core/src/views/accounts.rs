//! Social accounts page

use super::StatCard;
use crate::fixtures;
use crate::format::{format_day_month_time, format_number};
use crate::models::{SocialAccount, SocialPlatform};
use chrono::TimeZone;
use serde::Serialize;

pub fn connected(accounts: &[SocialAccount]) -> Vec<&SocialAccount> {
    accounts.iter().filter(|a| a.is_connected).collect()
}

/// Followers summed over connected accounts only
pub fn total_followers(accounts: &[SocialAccount]) -> u64 {
    connected(accounts).iter().map(|a| a.followers).sum()
}

/// Follower line on a card; hidden for disconnected accounts
pub fn followers_label(account: &SocialAccount) -> Option<String> {
    account
        .is_connected
        .then(|| format!("{} followers", format_number(account.followers)))
}

/// "Dernière sync: 15 janv., 10:30"
pub fn last_sync_label<Tz: TimeZone>(account: &SocialAccount, tz: &Tz) -> Option<String> {
    account.last_sync.map(|at| {
        format!(
            "Dernière sync: {}",
            format_day_month_time(&at.with_timezone(tz))
        )
    })
}

/// Inert card action: sync when connected, connect otherwise
pub fn action_label(account: &SocialAccount) -> &'static str {
    if account.is_connected {
        "Synchroniser"
    } else {
        "Connecter"
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountsView {
    pub cards: Vec<StatCard>,
    pub total_followers: u64,
    pub accounts: Vec<SocialAccount>,
}

impl AccountsView {
    pub fn load() -> Self {
        let accounts = fixtures::accounts();
        let total = total_followers(&accounts);
        let cards = vec![
            StatCard::new(
                "Comptes Connectés",
                connected(&accounts).len().to_string(),
                format!("sur {} comptes totaux", accounts.len()),
            ),
            StatCard::new(
                "Followers Total",
                format_number(total),
                "sur tous les comptes connectés",
            ),
            StatCard::new(
                "Plateformes",
                SocialPlatform::SUPPORTED.len().to_string(),
                "plateformes supportées",
            ),
        ];

        Self {
            cards,
            total_followers: total,
            accounts,
        }
    }
}

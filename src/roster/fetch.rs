use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::roster::{Player, Roster, RosterError, Team};

/// How often and how patiently to retry a backend request.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub sleep: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            sleep: Duration::from_millis(3000),
        }
    }
}

impl Roster {
    /// Fetches teams and players from a PostgREST style backend.
    pub fn fetch(base_url: &str, api_key: &str, retry: RetryPolicy) -> Result<Self, RosterError> {
        let base_url = base_url.trim_end_matches('/');
        let teams: Vec<Team> = get(&format!("{base_url}/rest/v1/teams?select=id,name"), api_key, retry)?;
        let players: Vec<Player> = get(
            &format!("{base_url}/rest/v1/players?select=id,name,number,position,team_id"),
            api_key,
            retry,
        )?;
        info!(teams = teams.len(), players = players.len(), "Fetched roster");
        Ok(Self::new(teams, players))
    }
}

fn get<T: DeserializeOwned>(url: &str, api_key: &str, retry: RetryPolicy) -> Result<T, RosterError> {
    let mut attempt = 0;
    loop {
        debug!(url, attempt, "Requesting");
        let result = ureq::get(url)
            .set("apikey", api_key)
            .set("Authorization", &format!("Bearer {api_key}"))
            .call();
        return match result {
            Ok(response) => response.into_json::<T>().map_err(|e| RosterError::Decode {
                url: url.to_owned(),
                source: e,
            }),
            Err(e) if attempt < retry.max_retries && is_transient(&e) => {
                warn!(url, attempt, error = %e, "Request failed, retrying");
                attempt += 1;
                std::thread::sleep(retry.sleep);
                continue;
            }
            Err(e) => Err(RosterError::Request {
                url: url.to_owned(),
                source: Box::new(e),
            }),
        };
    }
}

fn is_transient(error: &ureq::Error) -> bool {
    match error {
        ureq::Error::Status(code, _) => *code >= 500 || *code == 429,
        ureq::Error::Transport(_) => true,
    }
}

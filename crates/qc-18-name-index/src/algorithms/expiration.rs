//! # Expiration Policy
//!
//! `expires_in = anchor_height + depth(current) - current`, where the anchor
//! is the record's last update (or registration, if so configured) and the
//! depth comes from the network's expiration schedule.
//!
//! A record is expired once `expires_in <= expiry_threshold`. With the
//! default threshold of 0 a name updated in the current block has
//! `expires_in == depth` and is live, and a name whose `expires_in` reaches
//! 0 is reported expired.

use crate::config::{ExpirationAnchor, ExpirationConfig};
use crate::domain::{Expiry, NameRecord};

/// Computes blocks-until-expiration for records at a given height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpirationPolicy {
    config: ExpirationConfig,
}

impl ExpirationPolicy {
    pub fn new(config: ExpirationConfig) -> Self {
        Self { config }
    }

    /// Evaluate `record` at `current_height`. Pure function of its inputs.
    pub fn evaluate(&self, record: &NameRecord, current_height: u64) -> Expiry {
        let anchor = match self.config.anchor {
            ExpirationAnchor::LastUpdate => record.last_update_height,
            ExpirationAnchor::Registration => record.registered_height,
        };
        let depth = self.config.schedule.depth_at(current_height);
        let expires_in = to_i64(anchor)
            .saturating_add(to_i64(depth))
            .saturating_sub(to_i64(current_height));

        Expiry {
            expires_in,
            expired: expires_in <= self.config.expiry_threshold,
        }
    }
}

fn to_i64(v: u64) -> i64 {
    i64::try_from(v).unwrap_or(i64::MAX)
}

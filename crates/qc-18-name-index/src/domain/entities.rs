//! # Domain Entities
//!
//! Core domain entities for the Name Index subsystem: name keys and their
//! total order, committed name records, the entries reported to callers,
//! and the block deltas the consensus layer feeds into the record store.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use super::errors::Hash;
use super::value_objects::Expiry;

/// The unique identifying byte string of a registration.
///
/// ## Total Order
///
/// Keys compare by `(length, bytes)`: shorter keys sort before longer keys
/// regardless of content, equal-length keys sort lexicographically. So
/// `"c" < "aa"`. This matches how the node's database lays names out
/// (length-prefixed keys) and is the order every enumeration uses.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NameKey(Vec<u8>);

impl NameKey {
    /// Create a key from raw bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Key length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the empty key (the smallest key in the order).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lossy UTF-8 rendering for RPC output and logs.
    pub fn to_display(&self) -> String {
        String::from_utf8_lossy(&self.0).into_owned()
    }
}

impl Ord for NameKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for NameKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<&str> for NameKey {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl From<&[u8]> for NameKey {
    fn from(b: &[u8]) -> Self {
        Self(b.to_vec())
    }
}

impl fmt::Debug for NameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NameKey({:?})", self.to_display())
    }
}

impl fmt::Display for NameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display())
    }
}

/// Immutable snapshot of a registration valid at some height.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRecord {
    /// Name key, unique among currently valid records.
    pub name: NameKey,
    /// Registration payload.
    pub value: Vec<u8>,
    /// Height at which the record was first created.
    pub registered_height: u64,
    /// Height of the most recent registration or update.
    pub last_update_height: u64,
    /// Transaction that created this version of the record.
    pub txid: Hash,
    /// Output index of the name output in `txid`.
    pub vout: u32,
    /// Address currently holding the name.
    pub address: String,
}

impl NameRecord {
    /// A fresh registration; `last_update_height` starts at `height`.
    pub fn registered(name: NameKey, value: Vec<u8>, height: u64, txid: Hash, vout: u32) -> Self {
        Self {
            name,
            value,
            registered_height: height,
            last_update_height: height,
            txid,
            vout,
            address: String::new(),
        }
    }

    /// Set the holding address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// The record after an update at `height`; the registration height is kept.
    pub fn updated(&self, value: Vec<u8>, height: u64, txid: Hash, vout: u32, address: String) -> Self {
        Self {
            name: self.name.clone(),
            value,
            registered_height: self.registered_height,
            last_update_height: height,
            txid,
            vout,
            address,
        }
    }
}

/// A name record as reported to RPC callers, evaluated at the current height.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameEntry {
    pub name: String,
    pub value: String,
    pub txid: String,
    pub vout: u32,
    pub address: String,
    /// Height of the last update.
    pub height: u64,
    pub expires_in: i64,
    pub expired: bool,
}

impl NameEntry {
    /// Render a record together with its expiry at the query height.
    pub fn from_record(record: &NameRecord, expiry: Expiry) -> Self {
        Self {
            name: record.name.to_display(),
            value: String::from_utf8_lossy(&record.value).into_owned(),
            txid: hex::encode(record.txid),
            vout: record.vout,
            address: record.address.clone(),
            height: record.last_update_height,
            expires_in: expiry.expires_in,
            expired: expiry.expired,
        }
    }
}

/// Aggregate result of a filter query in stats mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameStats {
    /// Current height at evaluation time.
    pub blocks: u64,
    /// Number of filtered records before pagination.
    pub count: usize,
}

/// Read-only chain context bound at query start.
///
/// Taken from the store snapshot once per query and never mutated while
/// the query runs. Synchronization is decided earlier, by the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryContext {
    /// Height of the snapshot the query reads.
    pub height: u64,
}

/// Kind of a name operation carried by a connected block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NameOpKind {
    /// First registration (or re-registration after expiry).
    Register,
    /// Value update or renewal of an existing registration.
    Update,
}

/// A single name operation as validated by consensus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameOperation {
    pub kind: NameOpKind,
    pub name: NameKey,
    pub value: Vec<u8>,
    pub txid: Hash,
    pub vout: u32,
    pub address: String,
}

/// Name operations confirmed in one block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameBlock {
    pub height: u64,
    pub operations: Vec<NameOperation>,
}

impl NameBlock {
    /// A block with no name operations.
    pub fn empty(height: u64) -> Self {
        Self {
            height,
            operations: Vec::new(),
        }
    }

    /// Append a registration.
    pub fn register(mut self, name: &str, value: &str, txid: Hash) -> Self {
        self.operations.push(NameOperation {
            kind: NameOpKind::Register,
            name: NameKey::from(name),
            value: value.as_bytes().to_vec(),
            txid,
            vout: 0,
            address: String::new(),
        });
        self
    }

    /// Append an update.
    pub fn update(mut self, name: &str, value: &str, txid: Hash) -> Self {
        self.operations.push(NameOperation {
            kind: NameOpKind::Update,
            name: NameKey::from(name),
            value: value.as_bytes().to_vec(),
            txid,
            vout: 0,
            address: String::new(),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorter_key_sorts_first() {
        assert!(NameKey::from("c") < NameKey::from("aa"));
        assert!(NameKey::from("zz") < NameKey::from("aaa"));
    }

    #[test]
    fn test_equal_length_is_lexicographic() {
        assert!(NameKey::from("a") < NameKey::from("b"));
        assert!(NameKey::from("ab") < NameKey::from("ba"));
    }

    #[test]
    fn test_empty_key_is_smallest() {
        assert!(NameKey::new(Vec::new()) < NameKey::from("\0"));
        assert!(NameKey::new(Vec::new()).is_empty());
    }

    #[test]
    fn test_sorting_matches_reference_order() {
        let mut keys: Vec<NameKey> = ["aa", "c", "a", "b"].iter().map(|s| NameKey::from(*s)).collect();
        keys.sort();
        let names: Vec<String> = keys.iter().map(|k| k.to_display()).collect();
        assert_eq!(names, vec!["a", "b", "c", "aa"]);
    }

    #[test]
    fn test_update_keeps_registration_height() {
        let rec = NameRecord::registered(NameKey::from("a"), b"v1".to_vec(), 10, [1; 32], 0);
        let upd = rec.updated(b"v2".to_vec(), 25, [2; 32], 1, "addr".into());
        assert_eq!(upd.registered_height, 10);
        assert_eq!(upd.last_update_height, 25);
        assert_eq!(upd.value, b"v2");
    }

    #[test]
    fn test_entry_from_record() {
        let rec = NameRecord::registered(NameKey::from("a"), b"value a".to_vec(), 232, [0xAB; 32], 1)
            .with_address("N1addr");
        let entry = NameEntry::from_record(
            &rec,
            Expiry {
                expires_in: 11,
                expired: false,
            },
        );
        assert_eq!(entry.name, "a");
        assert_eq!(entry.value, "value a");
        assert_eq!(entry.txid, "ab".repeat(32));
        assert_eq!(entry.height, 232);
        assert_eq!(entry.address, "N1addr");
        assert_eq!(entry.expires_in, 11);
    }

    #[test]
    fn test_stats_serialization() {
        let stats = NameStats {
            blocks: 201,
            count: 0,
        };
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json, serde_json::json!({"blocks": 201, "count": 0}));
    }
}

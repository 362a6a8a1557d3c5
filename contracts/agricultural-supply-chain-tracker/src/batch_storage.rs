use soroban_sdk::{contracttype, Address, Env, String, Vec};

use crate::access::Role;

/// A single environmental reading. Immutable once appended; insertion order
/// within a batch is chronological and is never reordered.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SensorLog {
    pub timestamp: u64,
    pub temperature: i32,
    pub humidity: i32,
    pub location: String,
    pub recorded_by: Address,
}

/// A tracked unit of product moving through the supply chain.
///
/// `sensor_logs` and `ownership_history` are append-only: entries are never
/// edited or removed, and the record itself is never deleted. The first
/// entry of `ownership_history` is always `farmer`, and the last entry is
/// always `current_owner`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Batch {
    pub batch_id: String,
    pub product_name: String,
    pub quantity: u32,
    pub farmer: Address,
    pub current_owner: Address,
    pub is_arrived: bool,
    pub passed_inspection: bool,
    pub sensor_logs: Vec<SensorLog>,
    pub ownership_history: Vec<Address>,
}

// Storage key types
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Admin,
    RoleGrant(Role, Address), // (role, actor) -> bool
    Batch(String),            // batch_id
    FarmerBatches(Address),   // farmer -> Vec<batch_id>
}

// Batch storage functions
pub fn has_batch(env: &Env, batch_id: &String) -> bool {
    let key = DataKey::Batch(batch_id.clone());
    env.storage().persistent().has(&key)
}

pub fn get_batch(env: &Env, batch_id: &String) -> Option<Batch> {
    let key = DataKey::Batch(batch_id.clone());
    env.storage().persistent().get(&key)
}

pub fn set_batch(env: &Env, batch: &Batch) {
    let key = DataKey::Batch(batch.batch_id.clone());
    env.storage().persistent().set(&key, batch);
}

// Farmer batch index functions
pub fn get_farmer_batch_ids(env: &Env, farmer: &Address) -> Vec<String> {
    let key = DataKey::FarmerBatches(farmer.clone());
    env.storage().persistent().get(&key).unwrap_or(Vec::new(env))
}

pub fn add_farmer_batch(env: &Env, farmer: &Address, batch_id: &String) {
    let key = DataKey::FarmerBatches(farmer.clone());
    let mut batches = get_farmer_batch_ids(env, farmer);
    batches.push_back(batch_id.clone());
    env.storage().persistent().set(&key, &batches);
}

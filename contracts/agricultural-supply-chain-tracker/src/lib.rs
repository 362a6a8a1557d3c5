#![no_std]

mod access;
mod batch_storage;
mod error;
mod events;
mod storage;
mod tracker;
mod utils;

#[cfg(test)]
mod tests;

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

pub use access::Role;
pub use batch_storage::{Batch, SensorLog};
pub use error::*;
pub use events::*;

#[contract]
pub struct AgriculturalSupplyChainTracker;

#[contractimpl]
impl AgriculturalSupplyChainTracker {
    /// Initialize the contract with the administrator identity. The admin
    /// is set once and cannot be rotated.
    pub fn initialize(env: Env, admin: Address) -> Result<(), ContractError> {
        if storage::has_admin(&env) {
            return Err(ContractError::AlreadyInitialized);
        }
        admin.require_auth();
        storage::set_admin(&env, &admin);
        Ok(())
    }

    /// Grant a supply chain role to an actor (admin only, idempotent)
    pub fn register_role(env: Env, role: Role, actor: Address) -> Result<(), ContractError> {
        access::grant_role(&env, role, &actor)
    }

    /// Check whether an actor holds a role
    pub fn has_role(env: Env, role: Role, actor: Address) -> bool {
        access::has_role(&env, role, &actor)
    }

    /// Create a new batch. The creating farmer becomes the first owner.
    pub fn create_batch(
        env: Env,
        batch_id: String,
        product_name: String,
        quantity: u32,
        farmer: Address,
    ) -> Result<(), ContractError> {
        farmer.require_auth();
        tracker::create_batch(&env, batch_id, product_name, quantity, &farmer)
    }

    /// Append an environmental reading to a batch's sensor log
    pub fn add_sensor_data(
        env: Env,
        batch_id: String,
        temperature: i32,
        humidity: i32,
        location: String,
        transporter: Address,
    ) -> Result<(), ContractError> {
        transporter.require_auth();
        tracker::add_sensor_data(&env, batch_id, temperature, humidity, location, &transporter)
    }

    /// Transfer custody of a batch to a new owner (current owner only)
    pub fn transfer_ownership(
        env: Env,
        batch_id: String,
        new_owner: Address,
        caller: Address,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        tracker::transfer_ownership(&env, batch_id, new_owner, &caller)
    }

    /// Record final arrival and the inspection verdict (retailer who
    /// currently owns the batch only)
    pub fn mark_as_arrived(
        env: Env,
        batch_id: String,
        passed_inspection: bool,
        retailer: Address,
    ) -> Result<(), ContractError> {
        retailer.require_auth();
        tracker::mark_as_arrived(&env, batch_id, passed_inspection, &retailer)
    }

    /// Get the full batch record including both provenance logs
    pub fn get_batch_history(env: Env, batch_id: String) -> Result<Batch, ContractError> {
        tracker::get_batch_history(&env, batch_id)
    }

    /// List batch ids created by a farmer
    pub fn get_farmer_batches(
        env: Env,
        farmer: Address,
        offset: u32,
        limit: u32,
    ) -> Result<Vec<String>, ContractError> {
        tracker::get_farmer_batches(&env, &farmer, offset, limit)
    }
}

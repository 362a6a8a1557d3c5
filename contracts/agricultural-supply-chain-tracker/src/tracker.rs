use soroban_sdk::{Address, Env, String, Vec};

use crate::access::{self, Role};
use crate::batch_storage::{self, Batch, SensorLog};
use crate::error::ContractError;
use crate::events;
use crate::utils;

pub fn create_batch(
    env: &Env,
    batch_id: String,
    product_name: String,
    quantity: u32,
    farmer: &Address,
) -> Result<(), ContractError> {
    access::require_role(env, Role::Farmer, farmer)?;

    if !utils::is_valid_batch_id(&batch_id) {
        return Err(ContractError::InvalidInput);
    }

    if !utils::is_valid_product_name(&product_name) {
        return Err(ContractError::InvalidInput);
    }

    if batch_storage::has_batch(env, &batch_id) {
        return Err(ContractError::BatchAlreadyExists);
    }

    let mut ownership_history = Vec::new(env);
    ownership_history.push_back(farmer.clone());

    let batch = Batch {
        batch_id: batch_id.clone(),
        product_name: product_name.clone(),
        quantity,
        farmer: farmer.clone(),
        current_owner: farmer.clone(),
        is_arrived: false,
        passed_inspection: false,
        sensor_logs: Vec::new(env),
        ownership_history,
    };

    batch_storage::set_batch(env, &batch);
    batch_storage::add_farmer_batch(env, farmer, &batch_id);

    events::emit_batch_created(env, batch_id, product_name, farmer.clone());

    Ok(())
}

pub fn add_sensor_data(
    env: &Env,
    batch_id: String,
    temperature: i32,
    humidity: i32,
    location: String,
    transporter: &Address,
) -> Result<(), ContractError> {
    access::require_role(env, Role::Transporter, transporter)?;

    let mut batch =
        batch_storage::get_batch(env, &batch_id).ok_or(ContractError::BatchNotFound)?;

    if !utils::is_valid_temperature(temperature) {
        return Err(ContractError::TemperatureOutOfRange);
    }

    if !utils::is_valid_humidity(humidity) {
        return Err(ContractError::HumidityOutOfRange);
    }

    if !utils::is_valid_location(&location) {
        return Err(ContractError::InvalidInput);
    }

    // Readings stay recordable after arrival; only ownership is frozen.
    let timestamp = env.ledger().timestamp();
    let log = SensorLog {
        timestamp,
        temperature,
        humidity,
        location: location.clone(),
        recorded_by: transporter.clone(),
    };

    batch.sensor_logs.push_back(log);
    batch_storage::set_batch(env, &batch);

    events::emit_sensor_data_added(
        env,
        batch_id,
        transporter.clone(),
        temperature,
        humidity,
        location,
        timestamp,
    );

    Ok(())
}

pub fn transfer_ownership(
    env: &Env,
    batch_id: String,
    new_owner: Address,
    caller: &Address,
) -> Result<(), ContractError> {
    let mut batch =
        batch_storage::get_batch(env, &batch_id).ok_or(ContractError::BatchNotFound)?;

    if batch.current_owner != *caller {
        return Err(ContractError::NotOwner);
    }

    if batch.is_arrived {
        return Err(ContractError::AlreadyArrived);
    }

    batch.current_owner = new_owner.clone();
    batch.ownership_history.push_back(new_owner.clone());
    batch_storage::set_batch(env, &batch);

    events::emit_ownership_transferred(
        env,
        batch_id,
        caller.clone(),
        new_owner,
        env.ledger().timestamp(),
    );

    Ok(())
}

pub fn mark_as_arrived(
    env: &Env,
    batch_id: String,
    passed_inspection: bool,
    retailer: &Address,
) -> Result<(), ContractError> {
    access::require_role(env, Role::Retailer, retailer)?;

    let mut batch =
        batch_storage::get_batch(env, &batch_id).ok_or(ContractError::BatchNotFound)?;

    if batch.current_owner != *retailer {
        return Err(ContractError::NotOwner);
    }

    // Terminal transition: is_arrived never reverts and ownership is
    // frozen from here on.
    batch.is_arrived = true;
    batch.passed_inspection = passed_inspection;
    batch_storage::set_batch(env, &batch);

    events::emit_batch_arrived(
        env,
        batch_id,
        retailer.clone(),
        passed_inspection,
        env.ledger().timestamp(),
    );

    Ok(())
}

pub fn get_batch_history(env: &Env, batch_id: String) -> Result<Batch, ContractError> {
    batch_storage::get_batch(env, &batch_id).ok_or(ContractError::BatchNotFound)
}

pub fn get_farmer_batches(
    env: &Env,
    farmer: &Address,
    offset: u32,
    limit: u32,
) -> Result<Vec<String>, ContractError> {
    let all_batches = batch_storage::get_farmer_batch_ids(env, farmer);
    let mut result = Vec::new(env);

    let start = offset as usize;
    let end = (offset + limit) as usize;
    let total_batches = all_batches.len() as usize;

    for i in start..end.min(total_batches) {
        if let Some(batch_id) = all_batches.get(i as u32) {
            result.push_back(batch_id);
        }
    }

    Ok(result)
}

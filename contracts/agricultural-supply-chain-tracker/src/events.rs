use soroban_sdk::{contracttype, Address, Env, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BatchCreatedEvent {
    pub batch_id: String,
    pub product_name: String,
    pub farmer: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SensorDataAddedEvent {
    pub batch_id: String,
    pub recorded_by: Address,
    pub temperature: i32,
    pub humidity: i32,
    pub location: String,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferredEvent {
    pub batch_id: String,
    pub from: Address,
    pub to: Address,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BatchArrivedEvent {
    pub batch_id: String,
    pub retailer: Address,
    pub passed_inspection: bool,
    pub timestamp: u64,
}

pub fn emit_batch_created(env: &Env, batch_id: String, product_name: String, farmer: Address) {
    let event = BatchCreatedEvent {
        batch_id,
        product_name,
        farmer,
    };
    env.events().publish(("batch_created",), event);
}

pub fn emit_sensor_data_added(
    env: &Env,
    batch_id: String,
    recorded_by: Address,
    temperature: i32,
    humidity: i32,
    location: String,
    timestamp: u64,
) {
    let event = SensorDataAddedEvent {
        batch_id,
        recorded_by,
        temperature,
        humidity,
        location,
        timestamp,
    };
    env.events().publish(("sensor_data_added",), event);
}

pub fn emit_ownership_transferred(
    env: &Env,
    batch_id: String,
    from: Address,
    to: Address,
    timestamp: u64,
) {
    let event = OwnershipTransferredEvent {
        batch_id,
        from,
        to,
        timestamp,
    };
    env.events().publish(("ownership_transferred",), event);
}

pub fn emit_batch_arrived(
    env: &Env,
    batch_id: String,
    retailer: Address,
    passed_inspection: bool,
    timestamp: u64,
) {
    let event = BatchArrivedEvent {
        batch_id,
        retailer,
        passed_inspection,
        timestamp,
    };
    env.events().publish(("batch_arrived",), event);
}

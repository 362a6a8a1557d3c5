use soroban_sdk::String;

// Accepted sensor ranges, inclusive. Out-of-range readings are rejected,
// never clamped.
pub const MIN_TEMPERATURE: i32 = -10;
pub const MAX_TEMPERATURE: i32 = 40;
pub const MIN_HUMIDITY: i32 = 0;
pub const MAX_HUMIDITY: i32 = 40;

pub fn is_valid_temperature(temperature: i32) -> bool {
    temperature >= MIN_TEMPERATURE && temperature <= MAX_TEMPERATURE
}

pub fn is_valid_humidity(humidity: i32) -> bool {
    humidity >= MIN_HUMIDITY && humidity <= MAX_HUMIDITY
}

// Validate batch identifier
pub fn is_valid_batch_id(batch_id: &String) -> bool {
    batch_id.len() > 0 && batch_id.len() <= 64
}

// Validate product name
pub fn is_valid_product_name(product_name: &String) -> bool {
    product_name.len() > 0 && product_name.len() <= 100
}

// Validate location
pub fn is_valid_location(location: &String) -> bool {
    location.len() > 0 && location.len() <= 100
}

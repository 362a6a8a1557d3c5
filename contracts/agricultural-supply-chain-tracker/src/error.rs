use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    // Initialization errors
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // Authorization errors
    Unauthorized = 3,
    NotOwner = 4,

    // Batch errors
    BatchNotFound = 5,
    BatchAlreadyExists = 6,
    AlreadyArrived = 7,

    // Validation errors
    TemperatureOutOfRange = 8,
    HumidityOutOfRange = 9,
    InvalidInput = 10,
}

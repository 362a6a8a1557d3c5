#![cfg(test)]

use crate::{AgriculturalSupplyChainTracker, AgriculturalSupplyChainTrackerClient, Role};
use soroban_sdk::{testutils::Address as _, Address, Env};

pub fn create_test_contract(env: &Env) -> AgriculturalSupplyChainTrackerClient<'_> {
    AgriculturalSupplyChainTrackerClient::new(
        env,
        &env.register(AgriculturalSupplyChainTracker {}, ()),
    )
}

pub struct Actors {
    pub admin: Address,
    pub farmer: Address,
    pub transporter: Address,
    pub distributor: Address,
    pub retailer: Address,
}

/// Initializes the contract and registers one actor per role.
pub fn setup_actors(env: &Env, contract: &AgriculturalSupplyChainTrackerClient<'_>) -> Actors {
    let admin = Address::generate(env);
    let farmer = Address::generate(env);
    let transporter = Address::generate(env);
    let distributor = Address::generate(env);
    let retailer = Address::generate(env);

    contract.initialize(&admin);
    contract.register_role(&Role::Farmer, &farmer);
    contract.register_role(&Role::Transporter, &transporter);
    contract.register_role(&Role::Distributor, &distributor);
    contract.register_role(&Role::Retailer, &retailer);

    Actors {
        admin,
        farmer,
        transporter,
        distributor,
        retailer,
    }
}

use soroban_sdk::{contracttype, Address, Env};

use crate::batch_storage::DataKey;
use crate::error::ContractError;
use crate::storage;

/// Supply chain capability roles. Grants are independent per role, so an
/// actor may hold zero, one, or several roles at once.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Role {
    Farmer,
    Transporter,
    Distributor,
    Retailer,
}

/// Grants `role` to `actor`. Only the stored administrator may authorize
/// this call; granting an already-held role is a no-op. There is no
/// revocation operation.
pub fn grant_role(env: &Env, role: Role, actor: &Address) -> Result<(), ContractError> {
    let admin = storage::get_admin(env).ok_or(ContractError::NotInitialized)?;
    admin.require_auth();

    let key = DataKey::RoleGrant(role, actor.clone());
    env.storage().persistent().set(&key, &true);

    Ok(())
}

pub fn has_role(env: &Env, role: Role, actor: &Address) -> bool {
    let key = DataKey::RoleGrant(role, actor.clone());
    env.storage().persistent().get(&key).unwrap_or(false)
}

/// Fails with `Unauthorized` unless `actor` holds `role`.
pub fn require_role(env: &Env, role: Role, actor: &Address) -> Result<(), ContractError> {
    if !has_role(env, role, actor) {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

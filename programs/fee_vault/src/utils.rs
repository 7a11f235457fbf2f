use anchor_lang::prelude::*;
use crate::errors::FeeVaultError;

/// Tiles per coin grid (10x10)
pub const TILE_COUNT: u8 = 100;

/// Registry tile layout:
/// - discriminator: 8 bytes
/// - owner: 32 bytes
/// - price, coin, ... (not read here)
pub const TILE_OWNER_OFFSET: usize = 8;

/// Extract the owner field from raw registry tile data
pub fn read_tile_owner(data: &[u8]) -> Result<Pubkey> {
    let end = TILE_OWNER_OFFSET + 32;
    if data.len() < end {
        return Err(FeeVaultError::InvalidRegistryTile.into());
    }

    let owner_bytes: [u8; 32] = data[TILE_OWNER_OFFSET..end]
        .try_into()
        .map_err(|_| FeeVaultError::InvalidRegistryTile)?;

    Ok(Pubkey::new_from_array(owner_bytes))
}

/// Live owner of a registry tile account. A tile that was never taken
/// over has no account yet and therefore no owner.
pub fn resolve_tile_owner(tile: &AccountInfo, registry_program: &Pubkey) -> Result<Pubkey> {
    if tile.data_is_empty() {
        return Ok(Pubkey::default());
    }
    require_keys_eq!(*tile.owner, *registry_program, FeeVaultError::InvalidRegistryTile);

    let data = tile.try_borrow_data()?;
    read_tile_owner(&data)
}

/// Deserialize an account owned by this program, `None` if it was never created.
pub fn load_program_account<T: AccountDeserialize>(info: &AccountInfo) -> Result<Option<T>> {
    if info.data_is_empty() {
        return Ok(None);
    }
    require_keys_eq!(*info.owner, crate::ID, FeeVaultError::Unauthorized);

    let data = info.try_borrow_data()?;
    Ok(Some(T::try_deserialize(&mut &data[..])?))
}

pub fn store_program_account<T: AccountSerialize>(info: &AccountInfo, value: &T) -> Result<()> {
    require_keys_eq!(*info.owner, crate::ID, FeeVaultError::Unauthorized);

    let mut data = info.try_borrow_mut_data()?;
    let mut dst: &mut [u8] = &mut data[..];
    value.try_serialize(&mut dst)?;
    Ok(())
}

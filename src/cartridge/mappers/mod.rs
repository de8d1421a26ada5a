// Mappers module - cartridge mapper implementations
//
// Contains the mapper factory and the individual mapper implementations.
// Only mapper 0 (NROM) is implemented; the factory is where further boards
// plug in without touching the CPU or PPU.

mod mapper0;

use super::{Cartridge, Mapper};
use mapper0::Mapper0;

/// Error type for mapper creation
#[derive(Debug)]
pub enum MapperError {
    /// The requested mapper number is not supported
    UnsupportedMapper(u8),
    /// Invalid cartridge configuration for the mapper
    InvalidConfiguration(String),
}

impl std::fmt::Display for MapperError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapperError::UnsupportedMapper(num) => {
                write!(f, "mapper {} is not supported", num)
            }
            MapperError::InvalidConfiguration(msg) => {
                write!(f, "invalid mapper configuration: {}", msg)
            }
        }
    }
}

impl std::error::Error for MapperError {}

/// Create a mapper instance for the cartridge's declared mapper number
///
/// # Errors
/// Returns `MapperError::UnsupportedMapper` for unimplemented boards and
/// `MapperError::InvalidConfiguration` when the ROM layout does not match
/// what the board allows.
pub fn create_mapper(cartridge: Cartridge) -> Result<Box<dyn Mapper>, MapperError> {
    match cartridge.mapper {
        0 => Ok(Box::new(Mapper0::new(cartridge)?)),
        n => Err(MapperError::UnsupportedMapper(n)),
    }
}

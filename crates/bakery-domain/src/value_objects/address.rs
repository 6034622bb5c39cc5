//! Container identity and cache keys

use crate::constants::{ADDRESS_KEY_SEPARATOR, ADDRESS_MAX_LENGTH};
use crate::error::{Error, Result};
use std::any::TypeId;
use std::fmt;

/// Identity of a container type
///
/// Wraps the Rust [`TypeId`] together with the type name used in logs and
/// error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContainerTypeId {
    id: TypeId,
    name: &'static str,
}

impl ContainerTypeId {
    /// Identity of `T`
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Underlying type id
    pub fn type_id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified type name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Last path segment of the type name
    pub fn short_name(&self) -> &'static str {
        self.name.rsplit("::").next().unwrap_or(self.name)
    }
}

impl fmt::Display for ContainerTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Cache key combining a container type and a logical address
///
/// Two keys are equal iff both the type and the address match exactly.
///
/// # Example
///
/// ```ignore
/// use bakery_domain::AddressKey;
///
/// let key = AddressKey::for_type::<GameData>("Config")?;
/// assert_eq!(key.address(), "Config");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AddressKey {
    container_type: ContainerTypeId,
    address: String,
}

impl AddressKey {
    /// Create a key, rejecting empty or malformed addresses
    pub fn new<S: Into<String>>(container_type: ContainerTypeId, address: S) -> Result<Self> {
        let address = address.into();
        validate_address(&address)?;
        Ok(Self {
            container_type,
            address,
        })
    }

    /// Create a key for container type `T`
    pub fn for_type<T: 'static>(address: impl Into<String>) -> Result<Self> {
        Self::new(ContainerTypeId::of::<T>(), address)
    }

    /// Container type part of the key
    pub fn container_type(&self) -> ContainerTypeId {
        self.container_type
    }

    /// Address part of the key
    pub fn address(&self) -> &str {
        &self.address
    }
}

impl fmt::Display for AddressKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.container_type.short_name(),
            ADDRESS_KEY_SEPARATOR,
            self.address
        )
    }
}

fn validate_address(address: &str) -> Result<()> {
    if address.trim().is_empty() {
        return Err(Error::invalid_argument(
            "Container address cannot be empty",
        ));
    }
    if address.len() > ADDRESS_MAX_LENGTH {
        return Err(Error::invalid_argument(format!(
            "Container address exceeds {ADDRESS_MAX_LENGTH} bytes"
        )));
    }
    if address.chars().any(char::is_control) {
        return Err(Error::invalid_argument(
            "Container address contains control characters",
        ));
    }
    Ok(())
}

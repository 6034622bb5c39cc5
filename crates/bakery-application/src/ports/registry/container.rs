//! Container Type Registry
//!
//! Explicit mapping from container type to constructor. Types are either
//! linked in at compile time with [`register_container!`](crate::register_container)
//! or registered by hand on a [`ContainerRegistry`].

use bakery_domain::error::{Error, Result};
use bakery_domain::ports::SheetContainer;
use bakery_domain::value_objects::ContainerTypeId;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{Span, debug};

/// Shared constructor producing an empty, bakeable container
///
/// The span is the diagnostic logger of the load that asked for the instance.
pub type ContainerConstructor =
    Arc<dyn Fn(&Span) -> Result<Box<dyn SheetContainer>> + Send + Sync>;

/// Registry entry for compile-time registered container types
pub struct ContainerTypeEntry {
    /// Type name shown in diagnostics
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Identity of the registered type
    pub container_type: fn() -> ContainerTypeId,
    /// Constructor of an empty instance
    pub constructor: fn(&Span) -> Result<Box<dyn SheetContainer>>,
}

#[linkme::distributed_slice]
pub static CONTAINER_TYPES: [ContainerTypeEntry] = [..];

/// Register a `Default` container type in [`CONTAINER_TYPES`]
///
/// # Example
///
/// ```ignore
/// #[derive(Debug, Default)]
/// struct GameData { /* rows */ }
///
/// bakery_application::register_container!(GameData, "Items, quests and drop tables");
/// ```
#[macro_export]
macro_rules! register_container {
    ($ty:ty, $description:expr) => {
        const _: () = {
            #[$crate::linkme::distributed_slice($crate::ports::registry::CONTAINER_TYPES)]
            #[linkme(crate = $crate::linkme)]
            static CONTAINER_TYPE_ENTRY: $crate::ports::registry::ContainerTypeEntry =
                $crate::ports::registry::ContainerTypeEntry {
                    name: stringify!($ty),
                    description: $description,
                    container_type: $crate::ports::registry::container::container_type_of::<$ty>,
                    constructor: $crate::ports::registry::container::default_constructor::<$ty>,
                };
        };
    };
}

#[doc(hidden)]
pub fn container_type_of<T: SheetContainer>() -> ContainerTypeId {
    ContainerTypeId::of::<T>()
}

#[doc(hidden)]
pub fn default_constructor<T: SheetContainer + Default>(
    _span: &Span,
) -> Result<Box<dyn SheetContainer>> {
    Ok(Box::new(T::default()))
}

/// List all compile-time registered container types as (name, description) tuples
pub fn list_container_types() -> Vec<(&'static str, &'static str)> {
    CONTAINER_TYPES
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}

#[derive(Clone)]
struct RegisteredContainer {
    description: String,
    constructor: ContainerConstructor,
}

/// Statically known mapping from container type to constructor
///
/// # Example
///
/// ```ignore
/// let mut registry = ContainerRegistry::from_linked();
/// registry
///     .register::<GameData>()
///     .register_with("Localised strings", |_span| Ok(Strings::for_locale("en")));
/// ```
#[derive(Clone, Default)]
pub struct ContainerRegistry {
    entries: HashMap<ContainerTypeId, RegisteredContainer>,
}

impl ContainerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every type from [`CONTAINER_TYPES`]
    pub fn from_linked() -> Self {
        let mut registry = Self::new();
        for entry in CONTAINER_TYPES {
            let constructor = entry.constructor;
            registry.insert(
                (entry.container_type)(),
                entry.description,
                Arc::new(move |span: &Span| constructor(span)),
            );
        }
        debug!(count = registry.len(), "Linked container types collected");
        registry
    }

    /// Register `T` with its `Default` constructor
    pub fn register<T: SheetContainer + Default>(&mut self) -> &mut Self {
        self.insert(
            ContainerTypeId::of::<T>(),
            ContainerTypeId::of::<T>().short_name(),
            Arc::new(|_span: &Span| Ok(Box::new(T::default()) as Box<dyn SheetContainer>)),
        );
        self
    }

    /// Register `T` with a custom constructor
    pub fn register_with<T, F>(&mut self, description: impl Into<String>, constructor: F) -> &mut Self
    where
        T: SheetContainer,
        F: Fn(&Span) -> Result<T> + Send + Sync + 'static,
    {
        self.insert(
            ContainerTypeId::of::<T>(),
            description,
            Arc::new(move |span: &Span| {
                constructor(span).map(|c| Box::new(c) as Box<dyn SheetContainer>)
            }),
        );
        self
    }

    fn insert(
        &mut self,
        container_type: ContainerTypeId,
        description: impl Into<String>,
        constructor: ContainerConstructor,
    ) {
        self.entries.insert(
            container_type,
            RegisteredContainer {
                description: description.into(),
                constructor,
            },
        );
    }

    /// True if a constructor is registered for `container_type`
    pub fn contains(&self, container_type: ContainerTypeId) -> bool {
        self.entries.contains_key(&container_type)
    }

    /// True if a constructor is registered for `T`
    pub fn is_registered<T: SheetContainer>(&self) -> bool {
        self.contains(ContainerTypeId::of::<T>())
    }

    /// Number of registered types
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered types as sorted (short name, description) tuples
    pub fn describe(&self) -> Vec<(&'static str, String)> {
        let mut described: Vec<_> = self
            .entries
            .iter()
            .map(|(id, entry)| (id.short_name(), entry.description.clone()))
            .collect();
        described.sort();
        described
    }

    /// Create an empty instance of `container_type`
    ///
    /// # Errors
    ///
    /// `Instantiation` when no constructor is registered or the constructor
    /// fails.
    pub fn create(
        &self,
        container_type: ContainerTypeId,
        span: &Span,
    ) -> Result<Box<dyn SheetContainer>> {
        let entry = self.entries.get(&container_type).ok_or_else(|| {
            Error::instantiation(
                container_type.name(),
                "no constructor registered for this container type",
            )
        })?;

        (entry.constructor)(span).map_err(|err| match err {
            err @ Error::Instantiation { .. } => err,
            other => Error::instantiation(container_type.name(), other.to_string()),
        })
    }
}

impl fmt::Debug for ContainerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContainerRegistry")
            .field("types", &self.describe())
            .finish()
    }
}

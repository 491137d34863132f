use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The entity families whose listings callers may cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Client,
    Product,
    Order,
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Client => write!(f, "client"),
            EntityKind::Product => write!(f, "product"),
            EntityKind::Order => write!(f, "order"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MutationKind {
    Created,
    Updated,
    Deleted,
}

/// Published after every *successful* create, update or delete of a client, product or order.
///
/// Contract for subscribers: once this event is received, any cached listing of `entity` is stale and must be
/// re-fetched before it is displayed again. Nothing is published when a mutation fails, so a cache can safely keep
/// serving its last listing until a signal arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityMutatedEvent {
    pub entity: EntityKind,
    pub mutation: MutationKind,
    pub id: i64,
}

impl EntityMutatedEvent {
    pub fn created(entity: EntityKind, id: i64) -> Self {
        Self { entity, mutation: MutationKind::Created, id }
    }

    pub fn updated(entity: EntityKind, id: i64) -> Self {
        Self { entity, mutation: MutationKind::Updated, id }
    }

    pub fn deleted(entity: EntityKind, id: i64) -> Self {
        Self { entity, mutation: MutationKind::Deleted, id }
    }
}

impl Display for EntityMutatedEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} #{} {:?}", self.entity, self.id, self.mutation)
    }
}

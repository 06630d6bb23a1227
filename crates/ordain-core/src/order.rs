//! Order records
//!
//! An [`Order`] describes one outstanding request for delegated access. The
//! requested scope (creator, users, labels, time and duration) is fixed at
//! creation. Only the delegation progress moves afterwards, and only through
//! the registry.

use crate::OrderId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One outstanding delegation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    creator: String,
    users: Vec<String>,
    id: OrderId,
    requested_at: DateTime<Utc>,
    requested_duration: Duration,
    delegated_count: u32,
    delegating_owners: Vec<String>,
    owners: Vec<String>,
    labels: Vec<String>,
}

impl Order {
    /// Build a record carrying exactly the supplied fields.
    ///
    /// Nothing is defaulted or normalised: duplicate users stay, label order
    /// is kept as given.
    pub fn new(
        creator: impl Into<String>,
        id: OrderId,
        requested_at: DateTime<Utc>,
        requested_duration: Duration,
        delegating_owners: Vec<String>,
        owners: Vec<String>,
        users: Vec<String>,
        labels: Vec<String>,
        delegated_count: u32,
    ) -> Self {
        Self {
            creator: creator.into(),
            users,
            id,
            requested_at,
            requested_duration,
            delegated_count,
            delegating_owners,
            owners,
            labels,
        }
    }

    /// Principal who requested the order
    pub fn creator(&self) -> &str {
        &self.creator
    }

    /// Principals to receive access
    pub fn users(&self) -> &[String] {
        &self.users
    }

    /// Registry key
    pub fn id(&self) -> &OrderId {
        &self.id
    }

    /// When the order was created
    pub fn requested_at(&self) -> DateTime<Utc> {
        self.requested_at
    }

    /// How long delegated access should last
    pub fn requested_duration(&self) -> Duration {
        self.requested_duration
    }

    /// Delegations granted so far
    pub fn delegated_count(&self) -> u32 {
        self.delegated_count
    }

    /// Owners who have already delegated
    pub fn delegating_owners(&self) -> &[String] {
        &self.delegating_owners
    }

    /// Owners eligible to delegate
    pub fn owners(&self) -> &[String] {
        &self.owners
    }

    /// Labels being requested
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// True when `user` is one of the order's recipients
    pub fn has_user(&self, user: &str) -> bool {
        self.users.iter().any(|u| u == user)
    }

    /// True when every label this order requires appears in `presented`.
    ///
    /// Extra presented labels do not matter. An order with no labels is
    /// never covered, so it cannot grant anything.
    pub fn labels_covered_by(&self, presented: &[String]) -> bool {
        !self.labels.is_empty()
            && self
                .labels
                .iter()
                .all(|required| presented.iter().any(|p| p == required))
    }

    /// True when this order serves `user` for the presented labels
    pub fn matches(&self, user: &str, presented: &[String]) -> bool {
        self.has_user(user) && self.labels_covered_by(presented)
    }

    /// Record one delegation by `owner`.
    ///
    /// The count is not checked against the owner list; keeping it in range
    /// is up to the delegation engine.
    pub(crate) fn record_delegation(&mut self, owner: impl Into<String>) {
        self.delegated_count = self.delegated_count.saturating_add(1);
        self.delegating_owners.push(owner.into());
    }
}

/// Summary of the order serving a particular requester
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderIndex {
    /// User the lookup was made for
    pub order_for: String,
    /// Matching order
    pub order_id: OrderId,
    /// Owners eligible to delegate toward it
    pub order_owners: Vec<String>,
}

impl OrderIndex {
    /// Index entry for `order` as seen by `user`
    pub fn new(user: impl Into<String>, order: &Order) -> Self {
        Self {
            order_for: user.into(),
            order_id: order.id().clone(),
            order_owners: order.owners().to_vec(),
        }
    }
}

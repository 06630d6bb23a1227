//! Order registry
//!
//! Owns every outstanding order and announces lifecycle events.
//!
//! ## Lock Usage
//!
//! A single `parking_lot::Mutex` guards the order map. It is held only for
//! the map access itself and never across a notification `await`, so a slow
//! webhook cannot stall lookups. Fulfillment that must not race uses
//! [`OrderRegistry::take_order`], which finds and removes under one lock.
//!
//! ## Lookup order
//!
//! Orders are kept in insertion order. When several orders match a lookup
//! the oldest one wins.

use crate::config::{DeliveryPolicy, RegistryConfig};
use crate::messages::{self, LinkQuery};
use crate::{Order, OrderError, OrderId, OrderIndex, OrderResult};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use ordain_notify::{Color, NotificationSink, NotifyError};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Everything needed to announce a new order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrderNotice {
    /// Principal who created the order
    pub creator: String,
    /// Order identifier placed in owner links
    pub order_num: String,
    /// Requested duration as shown to humans, e.g. `24h`
    pub duration: String,
    /// Users who will receive access
    pub users: Vec<String>,
    /// Labels requested
    pub labels: Vec<String>,
    /// Number of uses requested
    pub uses: u32,
    /// Owner principal to chat display name; one link is sent per entry
    pub owners: BTreeMap<String, String>,
}

impl NewOrderNotice {
    /// Notice for a stored order
    pub fn for_order(
        order: &Order,
        duration: impl Into<String>,
        uses: u32,
        owners: BTreeMap<String, String>,
    ) -> Self {
        Self {
            creator: order.creator().to_string(),
            order_num: order.id().to_string(),
            duration: duration.into(),
            users: order.users().to_vec(),
            labels: order.labels().to_vec(),
            uses,
            owners,
        }
    }
}

/// Registry of outstanding orders
pub struct OrderRegistry {
    config: RegistryConfig,
    sink: Arc<dyn NotificationSink>,
    orders: Mutex<IndexMap<OrderId, Order>>,
}

impl std::fmt::Debug for OrderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderRegistry")
            .field("config", &self.config)
            .field("sink", &self.sink.name())
            .field("orders", &self.orders.lock().len())
            .finish()
    }
}

impl OrderRegistry {
    /// Create an empty registry announcing through `sink`
    pub fn new(config: RegistryConfig, sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            config,
            sink,
            orders: Mutex::new(IndexMap::new()),
        }
    }

    /// Registry settings
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Build an order record without storing it
    pub fn create_record(
        creator: impl Into<String>,
        id: OrderId,
        requested_at: DateTime<Utc>,
        duration: Duration,
        delegating_owners: Vec<String>,
        owners: Vec<String>,
        users: Vec<String>,
        labels: Vec<String>,
        delegated_count: u32,
    ) -> Order {
        Order::new(
            creator,
            id,
            requested_at,
            duration,
            delegating_owners,
            owners,
            users,
            labels,
            delegated_count,
        )
    }

    /// Fresh random order identifier
    pub fn generate_identifier() -> OrderId {
        OrderId::generate()
    }

    /// Store `order`, replacing any record with the same id
    pub fn insert(&self, order: Order) -> OrderId {
        let id = order.id().clone();
        let replaced = self.orders.lock().insert(id.clone(), order);
        if replaced.is_some() {
            warn!(order = %id, "Replaced existing order record");
        } else {
            debug!(order = %id, "Stored order");
        }
        id
    }

    /// Generate an id, stamp the current time, store and return the order.
    ///
    /// Does not notify; call [`Self::notify_new_order`] once the caller
    /// has resolved owner display names.
    pub fn create_order(
        &self,
        creator: impl Into<String>,
        duration: Duration,
        owners: Vec<String>,
        users: Vec<String>,
        labels: Vec<String>,
    ) -> Order {
        let order = Self::create_record(
            creator,
            Self::generate_identifier(),
            Utc::now(),
            duration,
            Vec::new(),
            owners,
            users,
            labels,
            0,
        );
        self.insert(order.clone());
        order
    }

    /// Snapshot of one order
    pub fn get(&self, id: &OrderId) -> Option<Order> {
        self.orders.lock().get(id).cloned()
    }

    /// Snapshot of every order, oldest first
    pub fn orders(&self) -> Vec<Order> {
        self.orders.lock().values().cloned().collect()
    }

    /// Number of outstanding orders
    pub fn len(&self) -> usize {
        self.orders.lock().len()
    }

    /// True when no order is outstanding
    pub fn is_empty(&self) -> bool {
        self.orders.lock().is_empty()
    }

    /// Record a delegation by `owner` toward order `id`
    pub fn record_delegation(&self, id: &OrderId, owner: impl Into<String>) -> OrderResult<Order> {
        let mut orders = self.orders.lock();
        let order = orders
            .get_mut(id)
            .ok_or_else(|| OrderError::NotFound(id.clone()))?;
        order.record_delegation(owner);
        debug!(
            order = %id,
            delegated = order.delegated_count(),
            "Recorded delegation"
        );
        Ok(order.clone())
    }

    /// Retire order `id`
    pub fn remove(&self, id: &OrderId) -> Option<Order> {
        let removed = self.orders.lock().shift_remove(id);
        if removed.is_some() {
            debug!(order = %id, "Removed order");
        }
        removed
    }

    /// Id of the oldest order serving `user` whose labels are all in `labels`
    pub fn find_order(&self, user: &str, labels: &[String]) -> Option<OrderId> {
        let orders = self.orders.lock();
        let found = Self::find_in(&orders, user, labels).cloned();
        debug!(user, found = found.is_some(), "Order lookup");
        found
    }

    /// Find and remove the matching order in one step
    pub fn take_order(&self, user: &str, labels: &[String]) -> Option<Order> {
        let mut orders = self.orders.lock();
        let id = Self::find_in(&orders, user, labels)?.clone();
        let taken = orders.shift_remove(&id);
        debug!(order = %id, user, "Took order for fulfillment");
        taken
    }

    /// Index entry of the order serving `user` for `labels`
    pub fn index_for(&self, user: &str, labels: &[String]) -> Option<OrderIndex> {
        let orders = self.orders.lock();
        let id = Self::find_in(&orders, user, labels)?;
        orders.get(id).map(|order| OrderIndex::new(user, order))
    }

    fn find_in<'a>(
        orders: &'a IndexMap<OrderId, Order>,
        user: &str,
        labels: &[String],
    ) -> Option<&'a OrderId> {
        orders
            .iter()
            .find(|(_, order)| order.matches(user, labels))
            .map(|(id, _)| id)
    }

    /// Announce a new order, then ask each owner to delegate.
    ///
    /// Sends one broadcast followed by one approval link per owner, in owner
    /// order. A failed broadcast always aborts. A failed owner link aborts
    /// under [`DeliveryPolicy::FailFast`]; under
    /// [`DeliveryPolicy::BestEffort`] the remaining owners are still tried
    /// and the first failure is returned at the end.
    pub async fn notify_new_order(&self, notice: &NewOrderNotice) -> OrderResult<()> {
        let label_list = messages::join_list(&notice.labels);
        let name_list = messages::join_list(&notice.users);

        info!(
            order = %notice.order_num,
            owners = notice.owners.len(),
            "Announcing new order"
        );
        let broadcast =
            messages::new_order(&notice.creator, &label_list, notice.uses, &notice.duration);
        self.send(&broadcast, Color::Red).await?;

        let mut first_failure: Option<NotifyError> = None;
        for (owner, display_name) in &notice.owners {
            let query = LinkQuery {
                delegator: owner,
                label: &label_list,
                duration: &notice.duration,
                uses: notice.uses,
                ordernum: &notice.order_num,
                delegatee: &name_list,
            }
            .encode();
            let link = messages::order_link(display_name, &self.config.host, &query);

            if let Err(err) = self.send(&link, Color::Green).await {
                match self.config.delivery {
                    DeliveryPolicy::FailFast => return Err(err.into()),
                    DeliveryPolicy::BestEffort => {
                        first_failure.get_or_insert(err);
                    }
                }
            }
        }

        match first_failure {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }

    /// Announce that `delegator` delegated `labels` to `delegatee`
    pub async fn notify_delegation(
        &self,
        delegator: &str,
        delegatee: &str,
        order_num: &str,
        duration: &str,
        labels: &[String],
    ) -> OrderResult<()> {
        let label_list = messages::join_delegation_labels(labels);
        let message =
            messages::new_delegation(delegator, &label_list, delegatee, order_num, duration);
        info!(order = order_num, delegator, "Announcing delegation");
        Ok(self.send(&message, Color::Yellow).await?)
    }

    /// Announce that order `order_num` requested by `name` is fulfilled
    pub async fn notify_order_fulfilled(&self, name: &str, order_num: &str) -> OrderResult<()> {
        let message = messages::order_fulfilled(name, order_num);
        info!(order = order_num, "Announcing fulfilled order");
        Ok(self.send(&message, Color::Purple).await?)
    }

    async fn send(&self, message: &str, color: Color) -> Result<(), NotifyError> {
        self.sink.notify(message, color).await.map_err(|err| {
            warn!(
                sink = self.sink.name(),
                color = color.as_str(),
                "Notification failed: {}",
                err
            );
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordain_notify::testing::RecordingSink;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn registry() -> OrderRegistry {
        OrderRegistry::new(
            RegistryConfig::with_host("ro.example.com"),
            Arc::new(RecordingSink::new()),
        )
    }

    #[test]
    fn create_record_does_not_store() {
        let reg = registry();
        let order = OrderRegistry::create_record(
            "alice",
            OrderId::from("abcd1234"),
            Utc::now(),
            Duration::from_secs(60),
            Vec::new(),
            strings(&["dave"]),
            strings(&["bob"]),
            strings(&["prod-db"]),
            0,
        );
        assert!(reg.is_empty());
        assert_eq!(order.id().as_str(), "abcd1234");
    }

    #[test]
    fn oldest_matching_order_wins() {
        let reg = registry();
        let first = reg.create_order(
            "alice",
            Duration::from_secs(60),
            strings(&["dave"]),
            strings(&["bob"]),
            strings(&["a"]),
        );
        let second = reg.create_order(
            "erin",
            Duration::from_secs(60),
            strings(&["dave"]),
            strings(&["bob"]),
            strings(&["a"]),
        );

        assert_eq!(reg.find_order("bob", &strings(&["a"])), Some(first.id().clone()));
        reg.remove(first.id());
        assert_eq!(reg.find_order("bob", &strings(&["a"])), Some(second.id().clone()));
    }

    #[test]
    fn take_order_removes_exactly_once() {
        let reg = registry();
        let order = reg.create_order(
            "alice",
            Duration::from_secs(60),
            strings(&["dave"]),
            strings(&["bob"]),
            strings(&["a"]),
        );

        let taken = reg.take_order("bob", &strings(&["a"])).unwrap();
        assert_eq!(taken.id(), order.id());
        assert!(reg.take_order("bob", &strings(&["a"])).is_none());
        assert!(reg.is_empty());
    }

    #[test]
    fn record_delegation_of_unknown_order_fails() {
        let reg = registry();
        let result = reg.record_delegation(&OrderId::from("missing"), "dave");
        assert!(matches!(result, Err(OrderError::NotFound(id)) if id.as_str() == "missing"));
    }

    #[test]
    fn debug_output_summarises_state() {
        let reg = registry();
        let text = format!("{reg:?}");
        assert!(text.contains("recording"));
        assert!(text.contains("orders: 0"));
    }
}

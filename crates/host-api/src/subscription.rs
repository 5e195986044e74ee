use crate::object::Guid;

/// Token identifying one active subscription.
///
/// Handles are only meaningful to the bus that issued them; widgets store
/// them so the full set can be released when the bound object changes or the
/// widget unmounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionHandle(u64);

impl SubscriptionHandle {
    /// Wrap a raw handle value issued by a bus.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Return the raw handle value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Interest registration for change notifications.
///
/// With `attribute: None` the subscription covers any change to the object;
/// with an attribute name it narrows to that attribute only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionRequest {
    pub guid: Guid,
    pub attribute: Option<String>,
}

impl SubscriptionRequest {
    /// Subscribe to every change of the object.
    #[must_use]
    pub fn object(guid: Guid) -> Self {
        Self {
            guid,
            attribute: None,
        }
    }

    /// Subscribe to changes of a single attribute.
    #[must_use]
    pub fn attribute(guid: Guid, attribute: impl Into<String>) -> Self {
        Self {
            guid,
            attribute: Some(attribute.into()),
        }
    }
}

/// A change notification delivered by the host.
///
/// `attribute: None` reports an object-level change (commit, rollback or
/// refresh); otherwise the named attribute changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub guid: Guid,
    pub attribute: Option<String>,
}

impl ChangeEvent {
    /// Whether this event falls under the given registration.
    #[must_use]
    pub fn matches(&self, request: &SubscriptionRequest) -> bool {
        if self.guid != request.guid {
            return false;
        }
        match (&request.attribute, &self.attribute) {
            (None, _) => true,
            (Some(_), None) => true,
            (Some(wanted), Some(changed)) => wanted == changed,
        }
    }
}

/// Registration side of the host's change-notification system.
pub trait SubscriptionBus {
    /// Register interest and return a handle for later release.
    fn subscribe(&mut self, request: SubscriptionRequest) -> SubscriptionHandle;

    /// Release a previous registration. Returns `false` for unknown handles.
    fn unsubscribe(&mut self, handle: SubscriptionHandle) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_subscription_matches_every_change() {
        let request = SubscriptionRequest::object(Guid::new(1));
        let attribute_change = ChangeEvent {
            guid: Guid::new(1),
            attribute: Some("progress".to_string()),
        };
        let object_change = ChangeEvent {
            guid: Guid::new(1),
            attribute: None,
        };
        assert!(attribute_change.matches(&request));
        assert!(object_change.matches(&request));
    }

    #[test]
    fn attribute_subscription_ignores_other_attributes() {
        let request = SubscriptionRequest::attribute(Guid::new(1), "progress");
        let other = ChangeEvent {
            guid: Guid::new(1),
            attribute: Some("capacity".to_string()),
        };
        assert!(!other.matches(&request));
    }

    #[test]
    fn object_level_change_reaches_attribute_subscriptions() {
        let request = SubscriptionRequest::attribute(Guid::new(1), "progress");
        let refresh = ChangeEvent {
            guid: Guid::new(1),
            attribute: None,
        };
        assert!(refresh.matches(&request));
    }

    #[test]
    fn changes_for_other_objects_never_match() {
        let request = SubscriptionRequest::object(Guid::new(1));
        let other = ChangeEvent {
            guid: Guid::new(2),
            attribute: None,
        };
        assert!(!other.matches(&request));
    }
}

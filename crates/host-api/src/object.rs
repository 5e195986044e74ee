use std::fmt;

/// Opaque identifier of a business-data record held by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Guid(u64);

impl Guid {
    /// Wrap a raw host identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Return the raw identifier value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Handle to a business-data record bound to a widget instance.
///
/// Attribute values cross the boundary as strings, exactly as the host stores
/// them; use [`numeric_attribute`] for the standard decimal interpretation.
pub trait DataObject {
    /// Identifier of this record.
    fn guid(&self) -> Guid;

    /// Entity (type) name of this record.
    fn entity(&self) -> &str;

    /// Current value of the named attribute, if the attribute exists.
    fn get(&self, attribute: &str) -> Option<String>;
}

/// Read access to the host's current object snapshot.
pub trait DataApi {
    /// Look up an object by identifier.
    fn object(&self, guid: Guid) -> Option<&dyn DataObject>;
}

/// Read an attribute as a decimal number.
///
/// Absent attributes and values that do not parse as a decimal number are
/// both reported as `None`; widgets treat them as "no data" rather than as
/// errors.
#[must_use]
pub fn numeric_attribute(object: &dyn DataObject, attribute: &str) -> Option<f64> {
    let raw = object.get(attribute)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

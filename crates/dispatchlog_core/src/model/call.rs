//! Call-record domain model.
//!
//! # Responsibility
//! - Represent one recorded emergency call and its required services.
//! - Answer membership queries against the record's service set.
//!
//! # Invariants
//! - Records are immutable once constructed; there is no edit path anywhere
//!   in the system.
//! - Record identity is structural equality over every field. Two records
//!   with identical fields are the same call for removal purposes.
//! - The core trusts its inputs: name/phone/description shape and service-set
//!   non-emptiness are producer-side contracts, never checked here.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// One response service a call can require.
///
/// The enumeration is closed by design: filtering and equality rely on
/// exhaustive matching, so no open string form exists in the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Service {
    Fire,
    Police,
    Ambulance,
}

impl Service {
    /// Every service, in declaration order.
    pub const ALL: [Service; 3] = [Service::Fire, Service::Police, Service::Ambulance];

    /// Human-readable label used in one-line report rendering.
    pub fn label(self) -> &'static str {
        match self {
            Self::Fire => "Fire",
            Self::Police => "Police",
            Self::Ambulance => "Ambulance",
        }
    }

    /// Parses a service name case-insensitively.
    ///
    /// Returns `None` for anything outside the closed enumeration. This is
    /// the conversion embedding layers apply to their own service labels
    /// before touching the model.
    pub fn parse(value: &str) -> Option<Service> {
        match value.trim().to_ascii_lowercase().as_str() {
            "fire" => Some(Self::Fire),
            "police" => Some(Self::Police),
            "ambulance" => Some(Self::Ambulance),
            _ => None,
        }
    }

    fn bit(self) -> u8 {
        1u8 << (self as u8)
    }
}

impl Display for Service {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Closed set of [`Service`] values backed by a bit mask.
///
/// Membership and equality are by service identity only: insertion order is
/// not observable and duplicate insertions collapse. Serialization goes
/// through an ordered list of service names so persisted data stays
/// self-describing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Service>", into = "Vec<Service>")]
pub struct ServiceSet(u8);

impl ServiceSet {
    /// Returns the set containing no services.
    pub fn empty() -> Self {
        Self(0)
    }

    /// Builds a set from the given services; duplicates collapse.
    pub fn of(services: &[Service]) -> Self {
        services.iter().copied().collect()
    }

    /// Adds one service to the set.
    pub fn insert(&mut self, service: Service) {
        self.0 |= service.bit();
    }

    /// Whether the set contains `service`.
    pub fn contains(self, service: Service) -> bool {
        self.0 & service.bit() != 0
    }

    /// Whether the set contains no services.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of distinct services in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterates members in [`Service`] declaration order.
    pub fn iter(self) -> impl Iterator<Item = Service> {
        Service::ALL
            .into_iter()
            .filter(move |service| self.contains(*service))
    }
}

impl FromIterator<Service> for ServiceSet {
    fn from_iter<I: IntoIterator<Item = Service>>(iter: I) -> Self {
        let mut set = Self::empty();
        for service in iter {
            set.insert(service);
        }
        set
    }
}

impl From<Vec<Service>> for ServiceSet {
    fn from(services: Vec<Service>) -> Self {
        services.into_iter().collect()
    }
}

impl From<ServiceSet> for Vec<Service> {
    fn from(set: ServiceSet) -> Self {
        set.iter().collect()
    }
}

impl Display for ServiceSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for service in self.iter() {
            if !first {
                f.write_str(", ")?;
            }
            f.write_str(service.label())?;
            first = false;
        }
        Ok(())
    }
}

/// One immutable emergency-call report.
///
/// Constructed from parts an embedding layer has already validated; the core
/// stores whatever it is given. Fields are private and read-only so the
/// no-edit invariant holds by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallRecord {
    caller_name: String,
    phone_number: String,
    description: String,
    services_required: ServiceSet,
    recorded_at: i64,
}

impl CallRecord {
    /// Creates a record from collaborator-validated parts.
    ///
    /// # Contract
    /// - Performs no validation; always succeeds.
    /// - `phone_number` arrives already normalized with its country-code
    ///   prefix.
    /// - `recorded_at` is epoch milliseconds, fixed here for the record's
    ///   lifetime.
    pub fn new(
        caller_name: impl Into<String>,
        phone_number: impl Into<String>,
        description: impl Into<String>,
        services_required: ServiceSet,
        recorded_at: i64,
    ) -> Self {
        Self {
            caller_name: caller_name.into(),
            phone_number: phone_number.into(),
            description: description.into(),
            services_required,
            recorded_at,
        }
    }

    /// Name of the caller.
    pub fn caller_name(&self) -> &str {
        &self.caller_name
    }

    /// Caller's phone number, country-code prefixed.
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// Free-text description of the emergency.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Services this call requires.
    pub fn services_required(&self) -> ServiceSet {
        self.services_required
    }

    /// Epoch milliseconds when the call was recorded.
    pub fn recorded_at(&self) -> i64 {
        self.recorded_at
    }

    /// Whether this call requires the given service.
    pub fn requires(&self, service: Service) -> bool {
        self.services_required.contains(service)
    }
}

impl Display for CallRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Caller: {}, Phone: {}, Emergency: {}, Services: {}",
            self.caller_name, self.phone_number, self.description, self.services_required
        )
    }
}

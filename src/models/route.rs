use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Symbolic screen the host should navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RouteName {
    WarehouseCheckIn,
    WarehouseCheckOut,
    /// Shared by truck check-in and check-out; the screen toggles internally.
    TruckCheckInOut,
    EventCheckIn,
    EventCompletion,
    /// Event list / home. Also the fallback for anything unroutable.
    Home,
}

impl RouteName {
    /// Path of the host screen handling this route.
    pub fn path(&self) -> &'static str {
        match self {
            RouteName::WarehouseCheckIn => "/warehouse-check-in",
            RouteName::WarehouseCheckOut => "/warehouse-checkout",
            RouteName::TruckCheckInOut => "/truck-check-in-out",
            RouteName::EventCheckIn => "/check-in",
            RouteName::EventCompletion => "/completion",
            RouteName::Home => "/",
        }
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RouteName::WarehouseCheckIn => "WarehouseCheckIn",
            RouteName::WarehouseCheckOut => "WarehouseCheckOut",
            RouteName::TruckCheckInOut => "TruckCheckInOut",
            RouteName::EventCheckIn => "EventCheckIn",
            RouteName::EventCompletion => "EventCompletion",
            RouteName::Home => "Home",
        };
        f.write_str(name)
    }
}

/// Where the user should go next, independent of any navigation library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteIntent {
    pub destination: RouteName,
    #[serde(default)]
    pub params: BTreeMap<String, String>,
}

impl RouteIntent {
    pub fn new(destination: RouteName) -> Self {
        Self {
            destination,
            params: BTreeMap::new(),
        }
    }

    pub fn home() -> Self {
        Self::new(RouteName::Home)
    }

    pub fn is_home(&self) -> bool {
        self.destination == RouteName::Home
    }

    pub fn with_param(mut self, key: &str, value: impl Into<String>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

pub mod event_type;
pub mod feed;
pub mod location;
pub mod route;
pub mod snapshot;
pub mod stage;

pub use event_type::{EventType, ParseEventTypeError};
pub use feed::{Assignment, AssignmentContext, AssignmentStatus, EventsResponse};
pub use location::{
    Gate, GateKind, LocationCheckStatus, LocationRole, RecordedTime, SnapshotIssue,
};
pub use route::{RouteIntent, RouteName};
pub use snapshot::CheckinStatusSnapshot;
pub use stage::{ParseStageError, Stage};

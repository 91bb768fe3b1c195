pub mod board;
pub mod commands;
pub mod config;
pub mod fs;
pub mod logging;
pub mod models;
pub mod planner;
pub mod reconcile;
pub mod resolver;
pub mod validation;

pub use board::{BoardRow, EventsBoard, HintRow};
pub use fs::{FileStageCache, MemoryStageCache, StageCache};
pub use models::{
    Assignment, AssignmentContext, CheckinStatusSnapshot, EventType, EventsResponse, Gate,
    GateKind, LocationCheckStatus, LocationRole, RouteIntent, RouteName, Stage,
};
pub use planner::{
    destination_for, next_stage, next_stage_raw, plan, route_for, route_for_raw, Plan,
};
pub use reconcile::{reconcile, reconcile_snapshot, Reconciled, StageSource};
pub use resolver::{resolve_stage, resolve_stage_raw};

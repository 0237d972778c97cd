// Domain layer - Dashboard shape and invariants
pub mod dashboard;
pub mod validation;

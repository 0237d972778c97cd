// Application layer - Use cases and ports
pub mod dashboard_repository;
pub mod dashboard_service;
pub mod error;
pub mod fixture;

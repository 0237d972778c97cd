// Repository trait for dashboard data access
use crate::domain::dashboard::DashboardData;
use async_trait::async_trait;

#[async_trait]
pub trait DashboardRepository: Send + Sync {
    /// Fetch the dashboard payload. Implementations hand out a shared, read-only value.
    async fn fetch_dashboard(&self) -> anyhow::Result<&'static DashboardData>;
}

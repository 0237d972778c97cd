// Repository backed by the compiled-in dashboard fixture
use crate::application::dashboard_repository::DashboardRepository;
use crate::application::fixture::dashboard_data;
use crate::domain::dashboard::DashboardData;
use async_trait::async_trait;

#[derive(Debug, Clone, Default)]
pub struct FixtureRepository;

impl FixtureRepository {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DashboardRepository for FixtureRepository {
    async fn fetch_dashboard(&self) -> anyhow::Result<&'static DashboardData> {
        Ok(dashboard_data())
    }
}

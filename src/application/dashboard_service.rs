// Dashboard service - Read-only lookups over the dashboard payload
use crate::application::dashboard_repository::DashboardRepository;
use crate::application::error::DashboardError;
use crate::domain::dashboard::{ChannelStats, DashboardData};
use crate::domain::validation::ValidationReport;
use serde_json::Value;
use std::sync::Arc;

/// Top-level keys of the payload, in serialization order.
pub const SECTIONS: [&str; 9] = [
    "social",
    "overview",
    "funnel",
    "requestTypes",
    "leadSources",
    "dailyPerformance",
    "stepTimes",
    "recentLeads",
    "advancedMetrics",
];

#[derive(Clone)]
pub struct DashboardService {
    repository: Arc<dyn DashboardRepository>,
}

impl DashboardService {
    pub fn new(repository: Arc<dyn DashboardRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_dashboard(&self) -> Result<&'static DashboardData, DashboardError> {
        Ok(self.repository.fetch_dashboard().await?)
    }

    pub async fn get_channel(&self, name: &str) -> Result<&'static ChannelStats, DashboardError> {
        let data = self.get_dashboard().await?;
        data.social
            .channel(name)
            .ok_or_else(|| DashboardError::UnknownChannel(name.to_string()))
    }

    /// Serialize a single top-level section, addressed by its camelCase key.
    pub async fn get_section(&self, name: &str) -> Result<Value, DashboardError> {
        let data = self.get_dashboard().await?;
        let value = match name {
            "social" => serde_json::to_value(&data.social),
            "overview" => serde_json::to_value(&data.overview),
            "funnel" => serde_json::to_value(data.funnel),
            "requestTypes" => serde_json::to_value(&data.request_types),
            "leadSources" => serde_json::to_value(&data.lead_sources),
            "dailyPerformance" => serde_json::to_value(&data.daily_performance),
            "stepTimes" => serde_json::to_value(&data.step_times),
            "recentLeads" => serde_json::to_value(&data.recent_leads),
            "advancedMetrics" => serde_json::to_value(&data.advanced_metrics),
            _ => return Err(DashboardError::UnknownSection(name.to_string())),
        };
        value.map_err(|e| DashboardError::Repository(e.into()))
    }

    pub async fn validate(&self) -> Result<ValidationReport, DashboardError> {
        Ok(self.get_dashboard().await?.validate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::fixture_repository::FixtureRepository;
    use async_trait::async_trait;

    struct FailingRepository;

    #[async_trait]
    impl DashboardRepository for FailingRepository {
        async fn fetch_dashboard(&self) -> anyhow::Result<&'static DashboardData> {
            anyhow::bail!("source offline")
        }
    }

    fn service() -> DashboardService {
        DashboardService::new(Arc::new(FixtureRepository::new()))
    }

    #[tokio::test]
    async fn test_get_channel_ignores_case() {
        let channel = service().get_channel("WhatsApp").await.unwrap();
        assert_eq!(channel.total_leads, 320);
        assert_eq!(channel.top_interest, "Consulta Rotina");
    }

    #[tokio::test]
    async fn test_get_channel_unknown() {
        let err = service().get_channel("tiktok").await.unwrap_err();
        assert!(matches!(err, DashboardError::UnknownChannel(ref name) if name == "tiktok"));
    }

    #[tokio::test]
    async fn test_every_section_resolves() {
        let service = service();
        let full = serde_json::to_value(service.get_dashboard().await.unwrap()).unwrap();
        for name in SECTIONS {
            let section = service.get_section(name).await.unwrap();
            assert_eq!(section, full[name], "section {name}");
        }
    }

    #[tokio::test]
    async fn test_section_keys_are_case_sensitive() {
        let err = service().get_section("requesttypes").await.unwrap_err();
        assert!(matches!(err, DashboardError::UnknownSection(_)));
    }

    #[tokio::test]
    async fn test_heatmap_section() {
        let section = service().get_section("advancedMetrics").await.unwrap();
        assert_eq!(section["heatmap"]["data"][0][3], 90);
    }

    #[tokio::test]
    async fn test_repository_failure() {
        let service = DashboardService::new(Arc::new(FailingRepository));
        let err = service.validate().await.unwrap_err();
        assert!(matches!(err, DashboardError::Repository(_)));
    }
}

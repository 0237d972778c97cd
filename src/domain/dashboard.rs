// Dashboard domain model
use serde::{Deserialize, Serialize};

/// Root of the dashboard payload consumed by the charting front-end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub social: Social,
    pub overview: Overview,
    pub funnel: Funnel,
    pub request_types: LabeledSeries,
    pub lead_sources: LeadSources,
    pub daily_performance: DailyPerformance,
    pub step_times: LabeledSeries,
    pub recent_leads: Vec<LeadRecord>,
    pub advanced_metrics: AdvancedMetrics,
}

/// Per-network breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Social {
    pub instagram: ChannelStats,
    pub whatsapp: ChannelStats,
    pub facebook: ChannelStats,
}

impl Social {
    /// Looks up a channel by name, ignoring case.
    pub fn channel(&self, name: &str) -> Option<&ChannelStats> {
        match name.to_ascii_lowercase().as_str() {
            "instagram" => Some(&self.instagram),
            "whatsapp" => Some(&self.whatsapp),
            "facebook" => Some(&self.facebook),
            _ => None,
        }
    }

    /// Channels paired with their lowercase names, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ChannelStats)> {
        [
            ("instagram", &self.instagram),
            ("whatsapp", &self.whatsapp),
            ("facebook", &self.facebook),
        ]
        .into_iter()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStats {
    pub total_leads: u32,
    pub conversion_rate: f64,
    /// Leads captured today.
    pub daily_growth: i32,
    pub top_interest: String,
    pub recent_leads: Vec<LeadRecord>,
    /// Consulta, Exame, Cirurgia, Outros.
    pub chart_data: [u32; 4],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadRecord {
    pub name: String,
    /// Display text ("10:30", "Ontem"), not a timestamp.
    pub time: String,
    pub status: LeadStatus,
    pub phone: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeadStatus {
    #[serde(rename = "Novo Lead")]
    NewLead,
    #[serde(rename = "Agendado")]
    Scheduled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub total_leads: u32,
    pub conversions: u32,
    pub conversion_rate: f64,
    pub avg_wait_time: String,
    pub avg_handle_time: String,
    pub active_chats: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Funnel {
    pub leads: u32,
    pub interactions: u32,
    pub scheduling_started: u32,
    pub appointments: u32,
    pub confirmed: u32,
}

impl Funnel {
    /// Stages in conversion order.
    pub fn stages(&self) -> [(&'static str, u32); 5] {
        [
            ("leads", self.leads),
            ("interactions", self.interactions),
            ("schedulingStarted", self.scheduling_started),
            ("appointments", self.appointments),
            ("confirmed", self.confirmed),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledSeries {
    pub labels: Vec<String>,
    pub data: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadSources {
    pub labels: Vec<String>,
    pub data: Vec<u32>,
    pub colors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPerformance {
    pub labels: Vec<String>,
    pub leads: Vec<u32>,
    pub conversions: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedMetrics {
    /// Retention percentage per conversation step.
    pub churn: LabeledSeries,
    pub doctor_ranking: Vec<DoctorRankEntry>,
    pub interests: LabeledSeries,
    pub heatmap: Heatmap,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorRankEntry {
    pub name: String,
    pub count: u32,
    pub rating: f64,
}

/// Activity intensity (0-100) indexed `[day][hour]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heatmap {
    pub days: Vec<String>,
    pub hours: Vec<String>,
    pub data: Vec<Vec<u8>>,
}

impl Heatmap {
    pub fn intensity(&self, day: usize, hour: usize) -> Option<u8> {
        self.data.get(day)?.get(hour).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(source: Option<&str>) -> LeadRecord {
        LeadRecord {
            name: "Maria Silva".to_string(),
            time: "10:30".to_string(),
            status: LeadStatus::NewLead,
            phone: "96 99100-1234".to_string(),
            kind: "Consulta".to_string(),
            source: source.map(str::to_string),
        }
    }

    #[test]
    fn test_lead_record_wire_names() {
        let value = serde_json::to_value(lead(None)).unwrap();
        assert_eq!(value["status"], "Novo Lead");
        assert_eq!(value["type"], "Consulta");
        assert!(value.get("source").is_none());

        let value = serde_json::to_value(lead(Some("Instagram"))).unwrap();
        assert_eq!(value["source"], "Instagram");
    }

    #[test]
    fn test_lead_status_parses_display_text() {
        let status: LeadStatus = serde_json::from_str("\"Agendado\"").unwrap();
        assert_eq!(status, LeadStatus::Scheduled);
        assert!(serde_json::from_str::<LeadStatus>("\"Cancelado\"").is_err());
    }

    #[test]
    fn test_funnel_stages_order() {
        let funnel = Funnel {
            leads: 5,
            interactions: 4,
            scheduling_started: 3,
            appointments: 2,
            confirmed: 1,
        };
        let names: Vec<_> = funnel.stages().iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            ["leads", "interactions", "schedulingStarted", "appointments", "confirmed"]
        );
    }

    #[test]
    fn test_heatmap_intensity_out_of_bounds() {
        let heatmap = Heatmap {
            days: vec!["Seg".to_string()],
            hours: vec!["08-10h".to_string()],
            data: vec![vec![20]],
        };
        assert_eq!(heatmap.intensity(0, 0), Some(20));
        assert_eq!(heatmap.intensity(0, 1), None);
        assert_eq!(heatmap.intensity(1, 0), None);
    }
}

// Mock analytics for the Vizô dashboard
use crate::domain::dashboard::{
    AdvancedMetrics, ChannelStats, DailyPerformance, DashboardData, DoctorRankEntry, Funnel,
    Heatmap, LabeledSeries, LeadRecord, LeadSources, LeadStatus, Overview, Social,
};
use std::sync::LazyLock;

use crate::domain::dashboard::LeadStatus::{NewLead, Scheduled};

/// The dashboard payload. Built on first access and never mutated afterwards.
pub static DASHBOARD_DATA: LazyLock<DashboardData> = LazyLock::new(build);

pub fn dashboard_data() -> &'static DashboardData {
    &DASHBOARD_DATA
}

fn build() -> DashboardData {
    DashboardData {
        social: Social {
            instagram: ChannelStats {
                total_leads: 450,
                conversion_rate: 35.5,
                daily_growth: 15,
                top_interest: "Lentes EVO".to_string(),
                recent_leads: vec![
                    lead("Maria Silva", "10:30", NewLead, "96 99100-1234", "Lentes EVO", None),
                    lead("Carla Dias", "09:15", Scheduled, "96 98111-2233", "Consulta", None),
                ],
                chart_data: [40, 30, 20, 10],
            },
            whatsapp: ChannelStats {
                total_leads: 320,
                conversion_rate: 42.0,
                daily_growth: 22,
                top_interest: "Consulta Rotina".to_string(),
                recent_leads: vec![
                    lead("João Souza", "09:45", Scheduled, "96 98111-5566", "Consulta", None),
                    lead("Pedro Lima", "08:30", NewLead, "96 99988-7766", "Exames", None),
                ],
                chart_data: [60, 25, 10, 5],
            },
            facebook: ChannelStats {
                total_leads: 150,
                conversion_rate: 28.5,
                daily_growth: 8,
                top_interest: "Cirurgia Catarata".to_string(),
                recent_leads: vec![
                    lead("Ana Paula", "Ontem", NewLead, "96 99122-3344", "Cirurgia", None),
                    lead("Roberto Alves", "Ontem", Scheduled, "96 98877-6655", "Cirurgia", None),
                ],
                chart_data: [20, 20, 50, 10],
            },
        },
        overview: Overview {
            total_leads: 1248,
            conversions: 387,
            conversion_rate: 31.0,
            avg_wait_time: "45s".to_string(),
            avg_handle_time: "3m 12s".to_string(),
            active_chats: 12,
        },
        funnel: Funnel {
            leads: 1248,
            interactions: 1050,
            scheduling_started: 620,
            appointments: 387,
            confirmed: 350,
        },
        request_types: series(
            &["Agendamento", "Exames", "Cirurgias", "Especialistas", "Outros"],
            &[45, 25, 15, 10, 5],
        ),
        lead_sources: LeadSources {
            labels: strings(&["Instagram", "WhatsApp", "Facebook", "Site Direto", "Google Ads", "Outros"]),
            data: vec![450, 320, 150, 200, 120, 50],
            colors: strings(&["#E1306C", "#25D366", "#1877F2", "#2e70ce", "#FBBC05", "#6b7280"]),
        },
        daily_performance: DailyPerformance {
            labels: strings(&["Seg", "Ter", "Qua", "Qui", "Sex", "Sáb", "Dom"]),
            leads: vec![150, 180, 160, 190, 210, 120, 80],
            conversions: vec![45, 55, 50, 60, 75, 40, 25],
        },
        // seconds
        step_times: series(
            &["Saudação", "Menu", "Coleta Dados", "Escolha Médico", "Finalização"],
            &[5, 12, 45, 20, 15],
        ),
        recent_leads: vec![
            lead("Maria Silva", "10:30", NewLead, "96 99100-1234", "Consulta", Some("Instagram")),
            lead("João Souza", "09:45", Scheduled, "96 98111-5566", "Exames", Some("WhatsApp")),
            lead("Ana Paula", "09:15", NewLead, "96 99122-3344", "Lentes", Some("Facebook")),
            lead("Pedro Santos", "Ontem", Scheduled, "96 98877-6655", "Cirurgia", Some("Site Direto")),
            lead("Lucia Lima", "Ontem", NewLead, "96 99988-7744", "Consulta", Some("Google Ads")),
        ],
        advanced_metrics: AdvancedMetrics {
            churn: series(
                &["Início Conversa", "Menu Principal", "Solicitou Nome", "Informou WhatsApp", "Agendamento Final"],
                &[100, 85, 60, 45, 38],
            ),
            doctor_ranking: vec![
                doctor("Dr. Lucas Rezende", 145, 4.9),
                doctor("Dra. Ana Catarina", 132, 5.0),
                doctor("Dr. Tarcísio Guerra", 98, 4.8),
                doctor("Dra. Nabila Demachki", 87, 4.9),
                doctor("Dra. Roseni Lopes", 76, 4.7),
            ],
            interests: series(
                &["Consultas", "Exames Rotina", "Cirurgia Catarata", "Lentes EVO", "Urgência"],
                &[450, 300, 150, 80, 20],
            ),
            heatmap: Heatmap {
                days: strings(&["Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"]),
                hours: strings(&["08-10h", "10-12h", "14-16h", "16-18h", "18-20h"]),
                data: vec![
                    vec![20, 80, 60, 90, 40],
                    vec![30, 85, 55, 95, 50],
                    vec![25, 75, 50, 85, 45],
                    vec![20, 70, 45, 80, 40],
                    vec![15, 60, 40, 70, 30],
                    vec![10, 40, 20, 10, 5],
                ],
            },
        },
    }
}

fn lead(
    name: &str,
    time: &str,
    status: LeadStatus,
    phone: &str,
    kind: &str,
    source: Option<&str>,
) -> LeadRecord {
    LeadRecord {
        name: name.to_string(),
        time: time.to_string(),
        status,
        phone: phone.to_string(),
        kind: kind.to_string(),
        source: source.map(str::to_string),
    }
}

fn doctor(name: &str, count: u32, rating: f64) -> DoctorRankEntry {
    DoctorRankEntry {
        name: name.to_string(),
        count,
        rating,
    }
}

fn series(labels: &[&str], data: &[u32]) -> LabeledSeries {
    LabeledSeries {
        labels: strings(labels),
        data: data.to_vec(),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

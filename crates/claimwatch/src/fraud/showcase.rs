//! Fixed figures behind the dashboard and model-details pages.
//!
//! None of these numbers are computed; they are the product's showcase data.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_claims: u32,
    pub fraud_detected: u32,
    /// Percent of claims flagged, one decimal place.
    pub fraud_rate: f64,
    /// Average value of a flagged claim (loss avoided / fraud detected).
    pub average_claim: f64,
    pub loss_avoided: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub change: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyVolume {
    pub month: &'static str,
    pub total: u32,
    pub fraud: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub name: &'static str,
    pub value: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuspiciousActivity {
    pub claim_id: &'static str,
    pub policy_holder: &'static str,
    pub risk_score: u8,
    pub status: &'static str,
    pub date_flagged: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub stats: DashboardStats,
    pub stat_cards: Vec<StatCard>,
    pub monthly_volume: Vec<MonthlyVolume>,
    pub fraud_by_category: Vec<CategoryShare>,
    pub recent_suspicious: Vec<SuspiciousActivity>,
}

const TOTAL_CLAIMS: u32 = 12_482;
const FRAUD_DETECTED: u32 = 412;
const LOSS_AVOIDED: f64 = 2_100_000.0;

impl DashboardSnapshot {
    pub fn showcase() -> Self {
        let fraud_rate =
            (f64::from(FRAUD_DETECTED) / f64::from(TOTAL_CLAIMS) * 1_000.0).round() / 10.0;
        let average_claim = (LOSS_AVOIDED / f64::from(FRAUD_DETECTED)).round();

        let stats = DashboardStats {
            total_claims: TOTAL_CLAIMS,
            fraud_detected: FRAUD_DETECTED,
            fraud_rate,
            average_claim,
            loss_avoided: LOSS_AVOIDED,
        };

        let stat_cards = vec![
            StatCard {
                title: "Total Claims",
                value: group_thousands(TOTAL_CLAIMS),
                change: "+12%",
            },
            StatCard {
                title: "Fraud Detected",
                value: group_thousands(FRAUD_DETECTED),
                change: "+4%",
            },
            StatCard {
                title: "Fraud Percentage",
                value: format!("{fraud_rate:.1}%"),
                change: "-0.5%",
            },
            StatCard {
                title: "Loss Avoided",
                value: format!("${:.1}M", LOSS_AVOIDED / 1_000_000.0),
                change: "+18%",
            },
        ];

        let monthly_volume = [
            ("Jan", 4000, 120),
            ("Feb", 3000, 98),
            ("Mar", 2000, 86),
            ("Apr", 2780, 110),
            ("May", 1890, 72),
            ("Jun", 2390, 90),
            ("Jul", 3490, 130),
        ]
        .into_iter()
        .map(|(month, total, fraud)| MonthlyVolume {
            month,
            total,
            fraud,
        })
        .collect();

        let fraud_by_category = [
            ("Collision", 45),
            ("Theft", 25),
            ("Natural", 15),
            ("Medical", 15),
        ]
        .into_iter()
        .map(|(name, value)| CategoryShare { name, value })
        .collect();

        let recent_suspicious = vec![
            SuspiciousActivity {
                claim_id: "#CLM-92381",
                policy_holder: "James Wilson",
                risk_score: 94,
                status: "Under Review",
                date_flagged: "2024-05-12",
            },
            SuspiciousActivity {
                claim_id: "#CLM-92382",
                policy_holder: "Sarah Jenkins",
                risk_score: 82,
                status: "Flagged",
                date_flagged: "2024-05-11",
            },
            SuspiciousActivity {
                claim_id: "#CLM-92383",
                policy_holder: "Robert Chen",
                risk_score: 91,
                status: "Escalated",
                date_flagged: "2024-05-11",
            },
            SuspiciousActivity {
                claim_id: "#CLM-92384",
                policy_holder: "Emma Thompson",
                risk_score: 78,
                status: "Under Review",
                date_flagged: "2024-05-10",
            },
        ];

        Self {
            stats,
            stat_cards,
            monthly_volume,
            fraud_by_category,
            recent_suspicious,
        }
    }
}

fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelMetric {
    pub name: &'static str,
    pub value: f32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfusionMatrix {
    pub true_negative: u32,
    pub false_positive: u32,
    pub false_negative: u32,
    pub true_positive: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineStep {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchitectureSummary {
    pub layers: &'static str,
    pub parameters: &'static str,
    pub training_epochs: &'static str,
    pub loss_function: &'static str,
}

/// The advertised model card. Descriptive only; scoring never consults it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelCard {
    pub training_set: &'static str,
    pub metrics: Vec<ModelMetric>,
    pub confusion_matrix: ConfusionMatrix,
    pub features: Vec<&'static str>,
    pub architecture: ArchitectureSummary,
    pub pipeline: Vec<PipelineStep>,
}

impl ModelCard {
    pub fn showcase() -> Self {
        Self {
            training_set: "500,000+ historical claims across North America",
            metrics: vec![
                ModelMetric {
                    name: "Accuracy",
                    value: 94.2,
                },
                ModelMetric {
                    name: "Precision",
                    value: 91.8,
                },
                ModelMetric {
                    name: "Recall",
                    value: 89.5,
                },
                ModelMetric {
                    name: "F1 Score",
                    value: 90.6,
                },
            ],
            confusion_matrix: ConfusionMatrix {
                true_negative: 450,
                false_positive: 30,
                false_negative: 45,
                true_positive: 320,
            },
            features: vec![
                "Claim Amount",
                "Customer History",
                "Accident Type",
                "Location",
                "Police Report Status",
                "Witness Count",
                "Policy Age",
                "Previous Deductibles",
                "Time of Incident",
                "Vehicle Age",
                "Severity of Damage",
            ],
            architecture: ArchitectureSummary {
                layers: "14 Deep Convolutional",
                parameters: "2.4M Trainable",
                training_epochs: "150 Early Stopping",
                loss_function: "Binary Crossentropy",
            },
            pipeline: vec![
                PipelineStep {
                    number: "01",
                    title: "Data Upload",
                    description: "The investigator uploads claim details for processing.",
                },
                PipelineStep {
                    number: "02",
                    title: "Preprocessing",
                    description: "Cleaning, normalization, and feature scaling of the claim data.",
                },
                PipelineStep {
                    number: "03",
                    title: "EDA Analysis",
                    description: "Automated exploratory analysis checks for statistical outliers.",
                },
                PipelineStep {
                    number: "04",
                    title: "CNN Model",
                    description: "Pattern matching against historical fraud signatures.",
                },
                PipelineStep {
                    number: "05",
                    title: "AI Result",
                    description: "A probability score plus a generated explanation for the investigator.",
                },
            ],
        }
    }
}

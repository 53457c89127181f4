//! Campaign types (declared for the data model, no page renders them)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Draft,
    Active,
    Paused,
    Completed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CampaignAnalytics {
    pub reach: u64,
    pub impressions: u64,
    pub engagements: u64,
    pub conversions: u64,
    pub ctr: f64,
    pub cpm: f64,
    pub cpc: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: CampaignStatus,
    pub posts: Vec<String>,
    pub budget: f64,
    pub spent: f64,
    pub analytics: CampaignAnalytics,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_campaign_reads_camel_case() {
        let json = r#"{
            "id": "c1",
            "userId": "1",
            "name": "Lancement",
            "description": "",
            "startDate": "2024-02-01T00:00:00Z",
            "endDate": "2024-02-29T00:00:00Z",
            "status": "active",
            "posts": ["1", "2"],
            "budget": 500.0,
            "spent": 120.5,
            "analytics": {
                "reach": 1000, "impressions": 2000, "engagements": 90,
                "conversions": 4, "ctr": 4.5, "cpm": 6.0, "cpc": 1.3
            },
            "createdAt": "2024-01-15T10:30:00Z",
            "updatedAt": "2024-01-15T10:30:00Z"
        }"#;
        let campaign: Campaign = serde_json::from_str(json).unwrap();
        assert_eq!(campaign.status, CampaignStatus::Active);
        assert_eq!(campaign.posts.len(), 2);
        assert_eq!(campaign.analytics.conversions, 4);
    }
}

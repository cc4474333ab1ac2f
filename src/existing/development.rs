use crate::types::AccountAndRegion;
use super::{CatalogEntry, ChatbotChannel, ResourceCatalog};

pub const NAME: &str = "development";
pub const ACCOUNT: &str = "109189702753";
pub const US_WEST_2: &str = "us-west-2";

pub fn us_west_2() -> AccountAndRegion {
    AccountAndRegion::new(ACCOUNT, US_WEST_2)
}

pub fn catalog() -> ResourceCatalog {
    ResourceCatalog::new().with_entry(
        us_west_2(),
        CatalogEntry {
            vpc_id: Some("vpc-0a5f4ebabd3b5ed4c".to_string()),
            public_subnet_ids: vec![
                "subnet-0e1f9f7a3c1d9b2a1".to_string(),
                "subnet-05b6c0a4d2e8f7c93".to_string(),
            ],
            isolated_subnet_ids: vec![
                "subnet-0c7d21f4e9a6b3d58".to_string(),
                "subnet-0f3a8e6b1c2d4e5f7".to_string(),
            ],
            domain_name: Some("demo.pankbase.org".to_string()),
            certificate_arn: Some(
                "arn:aws:acm:us-west-2:109189702753:certificate/6e2b7c35-4f0e-4d3c-9a4e-0d8b3f6a1c27".to_string(),
            ),
            hosted_zone_id: Some("Z0413386235Q2Q1HCG9QC".to_string()),
            docker_hub_secret_arn: Some(
                "arn:aws:secretsmanager:us-west-2:109189702753:secret:docker-hub-credentials".to_string(),
            ),
            code_star_connection_arn: Some(
                "arn:aws:codestar-connections:us-west-2:109189702753:connection/1a2f4b7e-93c6-4e1d-8f0b-5c3d2a6e9b41"
                    .to_string(),
            ),
            chatbot: Some(ChatbotChannel {
                configuration_name: "pankbase-dev-alarms".to_string(),
                channel_id: "C04KQ0EMDPF".to_string(),
                workspace_id: "T1KMV4JJZ".to_string(),
            }),
            alarm_topic_arn: Some("arn:aws:sns:us-west-2:109189702753:NotificationStack-AlarmNotificationTopic".to_string()),
        },
    )
}

use crate::types::AccountAndRegion;
use super::{CatalogEntry, ChatbotChannel, ResourceCatalog};

pub const NAME: &str = "production";
pub const ACCOUNT: &str = "035226225042";
pub const US_WEST_2: &str = "us-west-2";

pub fn us_west_2() -> AccountAndRegion {
    AccountAndRegion::new(ACCOUNT, US_WEST_2)
}

pub fn catalog() -> ResourceCatalog {
    ResourceCatalog::new().with_entry(
        us_west_2(),
        CatalogEntry {
            vpc_id: Some("vpc-0d3c9a7e1b5f24c68".to_string()),
            public_subnet_ids: vec![
                "subnet-0b8e2d4f6a1c3e579".to_string(),
                "subnet-0a7c5e3b1d9f2468a".to_string(),
            ],
            isolated_subnet_ids: vec![
                "subnet-0e4d6b8a2c1f3579b".to_string(),
                "subnet-0c2a4e6f8b1d3579d".to_string(),
            ],
            domain_name: Some("pankbase.org".to_string()),
            certificate_arn: Some(
                "arn:aws:acm:us-west-2:035226225042:certificate/b9d17f2e-3c4a-4e6b-8d1f-7a2c5e9b3d60".to_string(),
            ),
            hosted_zone_id: Some("Z07925481Q3XUAR9EHJ6F".to_string()),
            docker_hub_secret_arn: Some(
                "arn:aws:secretsmanager:us-west-2:035226225042:secret:docker-hub-credentials".to_string(),
            ),
            code_star_connection_arn: Some(
                "arn:aws:codestar-connections:us-west-2:035226225042:connection/7c3e1a9d-2b5f-4d8e-a6c0-9f1b3e5d7a24"
                    .to_string(),
            ),
            chatbot: Some(ChatbotChannel {
                configuration_name: "pankbase-production-alarms".to_string(),
                channel_id: "C04L4A1CJ7X".to_string(),
                workspace_id: "T1KMV4JJZ".to_string(),
            }),
            alarm_topic_arn: Some("arn:aws:sns:us-west-2:035226225042:NotificationStack-AlarmNotificationTopic".to_string()),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::existing::{CatalogLocator, ExistingResourceLocator};

    fn locator() -> CatalogLocator {
        CatalogLocator::new(NAME, catalog())
    }

    #[test]
    fn test_resolves_us_west_2() {
        let resources = locator().resolve(&us_west_2()).unwrap();
        assert_eq!(resources.domain.name, "pankbase.org");
        assert!(!resources.network.public_subnet_ids.is_empty());
    }

    #[test]
    fn test_development_account_not_served() {
        let locator = locator();
        assert!(!locator.serves(&crate::existing::development::us_west_2()));
        assert!(locator.resolve(&crate::existing::development::us_west_2()).is_err());
    }
}

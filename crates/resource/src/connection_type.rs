//! Connection types accepted by the API (`provider` on authorization URLs,
//! `type` on passwordless sessions, `connection_type` filters).

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectionType {
    #[serde(rename = "ADFSSAML")]
    AdfsSaml,
    #[serde(rename = "AzureSAML")]
    AzureSaml,
    #[serde(rename = "GenericOIDC")]
    GenericOidc,
    #[serde(rename = "GenericSAML")]
    GenericSaml,
    #[serde(rename = "GitHubOAuth")]
    GitHubOAuth,
    #[serde(rename = "GoogleOAuth")]
    GoogleOAuth,
    #[serde(rename = "GoogleSAML")]
    GoogleSaml,
    #[serde(rename = "JumpCloudSAML")]
    JumpCloudSaml,
    #[serde(rename = "MagicLink")]
    MagicLink,
    #[serde(rename = "MicrosoftOAuth")]
    MicrosoftOAuth,
    #[serde(rename = "OktaSAML")]
    OktaSaml,
    #[serde(rename = "OneLoginSAML")]
    OneLoginSaml,
    #[serde(rename = "PingFederateSAML")]
    PingFederateSaml,
    #[serde(rename = "PingOneSAML")]
    PingOneSaml,
}

impl ConnectionType {
    /// Wire name, e.g. `GoogleOAuth`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionType::AdfsSaml => "ADFSSAML",
            ConnectionType::AzureSaml => "AzureSAML",
            ConnectionType::GenericOidc => "GenericOIDC",
            ConnectionType::GenericSaml => "GenericSAML",
            ConnectionType::GitHubOAuth => "GitHubOAuth",
            ConnectionType::GoogleOAuth => "GoogleOAuth",
            ConnectionType::GoogleSaml => "GoogleSAML",
            ConnectionType::JumpCloudSaml => "JumpCloudSAML",
            ConnectionType::MagicLink => "MagicLink",
            ConnectionType::MicrosoftOAuth => "MicrosoftOAuth",
            ConnectionType::OktaSaml => "OktaSAML",
            ConnectionType::OneLoginSaml => "OneLoginSAML",
            ConnectionType::PingFederateSaml => "PingFederateSAML",
            ConnectionType::PingOneSaml => "PingOneSAML",
        }
    }
}

impl fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

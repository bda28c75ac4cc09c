//! # Certificate Authorities
//!
//! Cluster and clients CA settings (`spec.clusterCa`, `spec.clientsCa`).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// What happens when a CA certificate expires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum CertificateExpirationPolicy {
    RenewCertificate,
    ReplaceKey,
}

/// Configuration of how TLS certificates are used within the cluster
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CertificateAuthority {
    /// If true then Certificate Authority certificates will be generated automatically. Otherwise the user will need to provide a Secret with the CA certificate. Default is true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generate_certificate_authority: Option<bool>,
    /// If `true`, the Cluster and Client CA Secrets are configured with the `ownerReference` set to the `Kafka` resource. Default is `true`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generate_secret_owner_reference: Option<bool>,
    /// The number of days generated certificates should be valid for. The default is 365.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1))]
    pub validity_days: Option<i32>,
    /// The number of days in the certificate renewal period. The default is 30.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1))]
    pub renewal_days: Option<i32>,
    /// How should CA certificate expiration be handled when `generateCertificateAuthority=true`. The default is for a new CA certificate to be generated reusing the existing private key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_expiration_policy: Option<CertificateExpirationPolicy>,
}

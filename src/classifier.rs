use serde::Serialize;

use crate::error::{Error, ErrorKind};
use crate::keys::{self, NetworkType};
use crate::registry::{ChainInfo, RegistryClient, RetryPolicy};

/// Where a classification's knowledge of the network came from.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ClassificationSource {
    /// The external catalogue recognized the chain.
    Chainlist,
    /// The chain is unknown to the catalogue; the user's descriptor stands.
    Manual,
    /// No catalogue was reachable at all; the descriptor stands unverified.
    ManualOffline,
}

/// Outcome of classifying one network descriptor.
///
/// Built fresh per call and handed to the caller; this crate never caches or
/// persists it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub network_type: NetworkType,
    pub validated: bool,
    /// Catalogue entry backing a standard classification; absent for custom.
    pub chain_info: Option<ChainInfo>,
    /// Deterministic identifying key, prefix agreeing with `network_type`.
    pub key: String,
    pub source: ClassificationSource,
}

impl Classification {
    fn standard(info: ChainInfo, key: String) -> Self {
        Self {
            network_type: NetworkType::Standard,
            validated: true,
            chain_info: Some(info),
            key,
            source: ClassificationSource::Chainlist,
        }
    }

    fn custom(key: String, source: ClassificationSource) -> Self {
        Self {
            network_type: NetworkType::Custom,
            validated: false,
            chain_info: None,
            key,
            source,
        }
    }
}

/// Decides whether a network descriptor refers to a catalogued ("standard")
/// or ad-hoc ("custom") network, verifying a supplied RPC endpoint against
/// the chain it claims to serve.
///
/// Holds no mutable state; concurrent use is safe whenever the injected
/// [`RegistryClient`] is.
pub struct NetworkClassifier<'r> {
    registry: Option<&'r dyn RegistryClient>,
    retry: RetryPolicy,
}

impl<'r> NetworkClassifier<'r> {
    pub fn new(registry: &'r dyn RegistryClient) -> Self {
        Self {
            registry: Some(registry),
            retry: RetryPolicy::Single,
        }
    }

    /// Classifier with no registry collaborator; every lookup fails as
    /// [`ErrorKind::RegistryUnavailable`].
    pub fn offline() -> Self {
        Self {
            registry: None,
            retry: RetryPolicy::Single,
        }
    }

    /// Override the retry policy passed to the registry on metadata fetches.
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Confirms `chain_id` against the catalogue and resolves a working RPC
    /// endpoint for it.
    ///
    /// Without an endpoint this is a metadata-only lookup; the working RPC is
    /// the first published endpoint, if any. With an endpoint, membership in
    /// the published list (case-insensitive) short-circuits the check; only
    /// an unlisted endpoint is probed live, and it must report the requested
    /// chain id to be accepted.
    pub fn validate_against_registry(
        &self,
        chain_id: u64,
        rpc_endpoint: Option<&str>,
    ) -> Result<(ChainInfo, Option<String>), Error> {
        let registry = self
            .registry
            .ok_or_else(|| Error::registry_unavailable("validate_against_registry"))?;
        let info = registry.chain_info(chain_id, self.retry)?;

        let Some(url) = rpc_endpoint.filter(|u| !u.is_empty()) else {
            let working = info.rpc.first().map(|e| e.url.clone());
            return Ok((info, working));
        };

        if let Some(published) = info.rpc.iter().find(|e| e.url.eq_ignore_ascii_case(url)) {
            let working = published.url.clone();
            tracing::debug!(chain_id, url = %working, "endpoint is published, skipping probe");
            return Ok((info, Some(working)));
        }

        registry.validate_rpc_endpoint(url)?;
        let reported = registry.chain_id_from_rpc(url)?;
        if reported != chain_id {
            return Err(Error::chain_id_mismatch(
                "validate_against_registry",
                chain_id,
                reported,
            ));
        }
        Ok((info, Some(url.to_string())))
    }

    /// Classifies a network descriptor. Never fails: any registry or probe
    /// failure yields a custom classification, with the source tag
    /// distinguishing an unreachable catalogue from an unknown chain.
    pub fn classify(
        &self,
        chain_id: u64,
        name: &str,
        rpc_endpoint: Option<&str>,
    ) -> Classification {
        match self.validate_against_registry(chain_id, rpc_endpoint) {
            Ok((info, _working_rpc)) => {
                let key = keys::generate_key(NetworkType::Standard, &info.name, chain_id);
                Classification::standard(info, key)
            }
            Err(err) => {
                let source = if err.kind() == ErrorKind::RegistryUnavailable {
                    ClassificationSource::ManualOffline
                } else {
                    ClassificationSource::Manual
                };
                tracing::debug!(
                    chain_id,
                    source = source.as_ref(),
                    error = %err,
                    "registry validation failed, classifying as custom"
                );
                let key = keys::generate_key(NetworkType::Custom, name, chain_id);
                Classification::custom(key, source)
            }
        }
    }

    /// Migration-aware classification for a previously persisted descriptor.
    ///
    /// Keys that already carry a type prefix keep it: a standard key is
    /// revalidated (falling back to custom under the same key when the
    /// catalogue no longer confirms it) and a custom key short-circuits
    /// without touching the registry. A legacy key without a prefix is
    /// classified from scratch, but a custom outcome preserves the original
    /// key string so persisted entries are never renamed.
    pub fn classify_existing(
        &self,
        key: &str,
        chain_id: u64,
        name: &str,
        rpc_endpoint: Option<&str>,
    ) -> Classification {
        if keys::is_standard_key(key) {
            return match self.validate_against_registry(chain_id, rpc_endpoint) {
                Ok((info, _working_rpc)) => Classification::standard(info, key.to_string()),
                Err(err) => {
                    tracing::warn!(
                        chain_id,
                        key,
                        error = %err,
                        "standard network failed revalidation, keeping key as custom"
                    );
                    Classification::custom(key.to_string(), ClassificationSource::Manual)
                }
            };
        }

        if keys::is_custom_key(key) {
            return Classification::custom(key.to_string(), ClassificationSource::Manual);
        }

        // legacy key persisted before type metadata existed
        let mut classification = self.classify(chain_id, name, rpc_endpoint);
        if classification.network_type == NetworkType::Custom {
            classification.key = key.to_string();
        }
        classification
    }
}

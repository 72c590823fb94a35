use aws_config::BehaviorVersion;
use aws_sdk_codeartifact::error::DisplayErrorContext;
use aws_sdk_codeartifact::Client;
use tracing::debug;

use crate::error::{Error, Result};
use crate::source::TokenSource;

/// CodeArtifact authorization token source backed by the default AWS
/// credential and region chain.
#[derive(Debug, Clone)]
pub struct CodeArtifactSource {
    client: Client,
}

impl CodeArtifactSource {
    /// Build the client from ambient AWS configuration (environment,
    /// profile, instance metadata). Fails early when no region resolves;
    /// missing credentials only surface once the token request is sent.
    pub async fn from_env() -> Result<Self> {
        let config = aws_config::defaults(BehaviorVersion::latest()).load().await;
        if config.region().is_none() {
            return Err(Error::AwsConfig("no AWS region configured".to_owned()));
        }
        Ok(Self {
            client: Client::new(&config),
        })
    }

    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl TokenSource for CodeArtifactSource {
    async fn fetch_token(&self, domain: &str, domain_owner: &str) -> Result<String> {
        let output = self
            .client
            .get_authorization_token()
            .domain(domain)
            .domain_owner(domain_owner)
            .send()
            .await
            .map_err(|err| Error::TokenFetch(DisplayErrorContext(err).to_string()))?;

        let token = output
            .authorization_token()
            .filter(|token| !token.is_empty())
            .ok_or(Error::EmptyToken)?;

        debug!("received fresh CodeArtifact token");
        Ok(token.to_owned())
    }
}

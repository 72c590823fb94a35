/// Token sources
///
/// One production source: AWS CodeArtifact. The trait is the seam the tests
/// use to drive the refresh pipeline without live AWS credentials.
use crate::error::Result;

pub mod codeartifact;

pub use codeartifact::CodeArtifactSource;

pub trait TokenSource {
    fn fetch_token(
        &self,
        domain: &str,
        domain_owner: &str,
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

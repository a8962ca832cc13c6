//! Command implementations for the unitpath CLI

pub mod classpath;
pub mod describe;

use unitpath::error::Result;
use unitpath::factory::ArtifactDescriptorFactory;
use unitpath::resolver::LocalRepositoryResolver;
use unitpath::settings::Settings;

/// Factory resolving against the repository configured in `settings`
pub fn factory(settings: &Settings) -> Result<ArtifactDescriptorFactory<LocalRepositoryResolver>> {
    let resolver = LocalRepositoryResolver::from_settings(settings)?;
    tracing::debug!(repository = %resolver.root().display(), "using repository");
    Ok(ArtifactDescriptorFactory::from_settings(settings, resolver))
}

//! Tests for the null asset resolver

use bakery_application::ports::registry::{
    ResolverProviderConfig, list_asset_resolvers, resolve_asset_resolver,
};
use bakery_domain::{AssetResolver, CancellationToken};
use bakery_providers::NullAssetResolver;

#[tokio::test]
async fn test_null_resolver_never_finds() {
    let resolver = NullAssetResolver::new();
    let err = resolver
        .resolve("Anything", &CancellationToken::new())
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_all_resolvers_are_registered() {
    let names: Vec<&str> = list_asset_resolvers().iter().map(|(n, _)| *n).collect();
    for expected in ["filesystem", "memory", "null"] {
        assert!(names.contains(&expected), "missing {expected} in {names:?}");
    }
}

#[test]
fn test_unknown_resolver_lists_available() {
    let err = resolve_asset_resolver(&ResolverProviderConfig::new("s3")).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Unknown asset resolver 's3'"));
    assert!(message.contains("null"));
}

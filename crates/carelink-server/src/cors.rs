use carelink_config::{AnyOrArray, CorsConfig};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Build a Tower CORS layer from configuration
///
/// The gateway is called straight from browser frontends, so methods and
/// headers are always unrestricted; only origins are configurable.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods(AllowMethods::any())
        .allow_headers(AllowHeaders::any());

    match &config.origins {
        AnyOrArray::Any => layer.allow_origin(AllowOrigin::any()),
        AnyOrArray::List(origins) => {
            let origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            layer.allow_origin(origins)
        }
    }
}

//! Configuration module

mod site;

pub use site::ApiConfig;
pub use site::FeaturesConfig;
pub use site::OgImageConfig;
pub use site::RenderConfig;
pub use site::RoutingMode;
pub use site::SiteConfig;

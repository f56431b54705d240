pub mod site_config;

pub use site_config::{
    BannerConfig, EnhancerConfig, FormConfig, LoggingConfig, NavigationConfig, ScrollSpyConfig,
    SiteConfig, SiteInfo,
};

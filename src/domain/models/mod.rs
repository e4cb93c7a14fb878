pub mod app_config;
pub mod code_icon;
pub mod jsly;
pub mod link;

pub use app_config::{
    AppConfig, AsideConfig, FooterConfig, HeaderConfig, Logo, MainConfig, SearchConfig, SiteMeta,
    Theme, ThemeColor, TocConfig,
};
pub use code_icon::CodeIconMap;
pub use link::{ExternalLink, LinkTarget, NavGroup, NavLink};

pub mod regions;
pub mod settings;

pub use regions::RegionRegistry;
pub use settings::ViewerSettings;

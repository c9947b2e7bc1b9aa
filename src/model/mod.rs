// Type descriptor model consumed by the diagram renderers

pub mod catalog;
pub mod reference;
pub mod scope;
pub mod types;

pub use catalog::Catalog;
pub use reference::TypeReference;
pub use scope::Scope;
pub use types::*;

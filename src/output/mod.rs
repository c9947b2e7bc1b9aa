// Output generation module

pub mod classes;
pub mod diagrams;
pub mod enums;
pub mod markdown;
pub mod names;
pub mod relationships;

pub use classes::render_class;
pub use diagrams::*;
pub use enums::render_enum;
pub use markdown::*;
pub use names::friendly_name;
pub use relationships::*;

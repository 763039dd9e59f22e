pub mod color;
pub mod element;
pub mod fade;
pub mod highlight;
pub mod registry;

pub use color::*;
pub use element::*;
pub use fade::*;
pub use highlight::*;
pub use registry::*;

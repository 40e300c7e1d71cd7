//! Concrete placement rules.

mod draining;
mod memory;
mod requirements;

pub use draining::DrainingFilter;
pub use memory::AvailableMemoryFilter;
pub use requirements::RequirementsFilter;

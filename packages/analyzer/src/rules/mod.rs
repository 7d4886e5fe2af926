pub mod src {
    pub mod call_site;
    pub mod classifier;
    pub mod container_access;
}

pub use src::call_site::*;
pub use src::classifier::*;
pub use src::container_access::*;

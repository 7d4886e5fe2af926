pub mod src {
    pub mod fixtures;
    pub mod oracle;
}

pub use src::fixtures::*;
pub use src::oracle::*;

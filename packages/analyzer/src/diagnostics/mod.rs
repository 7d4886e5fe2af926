pub mod src {
    pub mod diagnostic;
    pub mod error;
}

pub use src::diagnostic::*;
pub use src::error::*;

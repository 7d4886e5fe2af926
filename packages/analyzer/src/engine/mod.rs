pub mod src {
    pub mod driver;
    pub mod sink;
}

pub use src::driver::*;
pub use src::sink::*;

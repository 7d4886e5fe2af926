pub mod src {
    pub mod expr;
    pub mod host;
    pub mod oracle;
    pub mod trinary;
}

pub use src::expr::*;
pub use src::host::*;
pub use src::oracle::*;
pub use src::trinary::*;

#[cfg(test)]
mod test;

pub mod src {
    pub mod autowire_locator;
    pub mod service_definition;
    pub mod service_map;
}

pub use src::autowire_locator::*;
pub use src::service_definition::*;
pub use src::service_map::*;

#[cfg(test)]
mod test;

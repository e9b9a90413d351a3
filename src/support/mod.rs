#[macro_use]
pub mod map_with_default;

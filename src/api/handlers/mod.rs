pub mod meta;
pub mod relay;

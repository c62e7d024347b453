pub mod builder;
pub mod client;
pub mod executor;
pub mod timing;

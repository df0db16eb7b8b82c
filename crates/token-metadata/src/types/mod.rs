pub mod network;
pub mod token;

/// RPC boundary to the membership agent: one connection, one call.
pub mod client;
pub mod errors;
pub mod proto;

pub use client::RpcClient;
pub use errors::RpcError;

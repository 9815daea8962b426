mod form;
mod gateway;
mod message;
mod store;

pub use form::*;
pub use gateway::*;
pub use message::*;
pub use store::*;

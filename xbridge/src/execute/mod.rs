//! Execute handlers for the xbridge contract.
//!
//! - `lock` - outbound transfers (Lock and the cw20 Receive hook)
//! - `unlock` - validator-authorized inbound transfers
//! - `registry` - token registration and removal
//! - `admin` - owner, fee collector, validator key, enable flag, fee rate

mod admin;
mod lock;
mod registry;
mod unlock;

pub use admin::*;
pub use lock::*;
pub use registry::*;
pub use unlock::*;

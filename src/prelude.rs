/* 

This is intended to quickly import commonly used modules across
the crate.

*/

// Almost every module logs something, so it is re-exported here
pub use tracing::{info, error, warn, debug};
pub use smart_default::SmartDefault;
pub use std::sync::Arc;

pub use crate::numeric::{*};

//! Resource and request-parameter types.

mod params;
mod record;
mod zone;

pub use params::{CreateRecordParams, CreateZoneParams, UpdateRecordParams, UpdateZoneParams};
pub use record::Record;
pub use zone::Zone;

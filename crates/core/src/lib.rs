pub mod record;

pub use record::{SourceTag, StockRecord, VendorRecord};

mod error;
mod normalize;
mod operations;
mod requests;
mod types;

pub use error::ValidationError;
pub use normalize::{lowercase, title_case};
pub use operations::{find_merge_target, name_matches};
pub use requests::ItemPayload;
pub use types::{AddOutcome, InventoryItem, NewItem};

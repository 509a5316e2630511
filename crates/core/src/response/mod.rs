//! Classification of raw responses: success statuses, error bodies and success decoding.

mod error;
mod normalize;

pub use error::ApiError;
pub use normalize::{decode_success, extract_message, is_success, normalize_error, SUCCESS_RANGE};

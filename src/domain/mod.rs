mod request;
mod result;

pub use request::ProductRequest;
pub use result::{
    AnswerField, ProductResult, HIGH_CONFIDENCE, LOW_CONFIDENCE, NOT_AVAILABLE,
    PARSE_ERROR_MARKER, TRANSPORT_ERROR_MARKER, UNKNOWN,
};

pub mod error_handler;
pub mod request_id;

pub use error_handler::{
    configure_extractors, error_response, json_error_handler, log_error, ErrorHandler,
};
pub use request_id::{request_id_of, RequestId, RequestIdValue, REQUEST_ID_HEADER};

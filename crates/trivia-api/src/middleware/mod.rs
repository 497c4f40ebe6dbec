pub mod cors;
pub mod error_envelope;
pub mod request_id;
pub mod security_headers;

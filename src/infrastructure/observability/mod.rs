mod request_id;
mod telemetry;

pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
pub use telemetry::{LogFormat, init_telemetry};

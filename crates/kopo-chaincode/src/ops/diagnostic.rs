use kopo_shim::Response;

/// Payload of the `error` function.
pub const ERROR_PAYLOAD: &str = "{\"message\" : \"Error111\"}";

/// Fixed success response used to exercise the host's response path.
/// Touches no state.
pub fn error_payload() -> Response {
    Response::success(ERROR_PAYLOAD)
}

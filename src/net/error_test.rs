use super::*;

#[test]
fn status_error_names_endpoint_and_code() {
    let err = ApiError::Status { endpoint: "/v1/tools".to_owned(), status: 502 };
    assert_eq!(err.to_string(), "/v1/tools failed: 502");
}

#[test]
fn unavailable_error_message() {
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}

#[test]
fn network_and_decode_messages_carry_detail() {
    assert_eq!(ApiError::Network("offline".to_owned()).to_string(), "request failed: offline");
    assert_eq!(ApiError::Decode("eof".to_owned()).to_string(), "invalid response body: eof");
}

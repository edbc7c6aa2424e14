use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::Config;
use crate::error::GatewayError;

/// Network gateway for the account service
///
/// Three JSON POST operations against a configured base URL. The response
/// body is parsed as JSON regardless of HTTP status: error bodies may carry
/// a human-readable `message` that is surfaced to the user verbatim.

/// Successful check-user payload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckUserResponse {
    /// Whether the account has an email address on file
    pub has_email: bool,
}

/// Error payload shared by all three endpoints
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Debug, Serialize)]
struct CheckUserRequest<'a> {
    mobile: &'a str,
}

#[derive(Debug, Serialize)]
struct SendVerificationRequest<'a> {
    mobile: &'a str,
    email: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DeleteAccountRequest<'a> {
    mobile: &'a str,
    email: &'a str,
    verification_code: &'a str,
}

/// Operations the wizard needs from the account service.
///
/// The flow is written against this trait so tests can substitute a scripted
/// implementation and assert which calls were (not) made.
pub trait AccountService {
    /// Look up an account by mobile number
    fn check_user(&self, mobile: &str) -> Result<CheckUserResponse, GatewayError>;

    /// Ask the service to email a one-time code
    fn send_verification(&self, mobile: &str, email: &str) -> Result<(), GatewayError>;

    /// Delete the account, authorized by the one-time code
    fn delete_account(&self, mobile: &str, email: &str, code: &str) -> Result<(), GatewayError>;
}

/// HTTP-backed account service client
pub struct HttpAccountService {
    agent: ureq::Agent,
    base_url: String,
}

impl HttpAccountService {
    /// Build a client from the resolved configuration
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build();

        Self {
            agent,
            base_url: config.api_base_url.clone(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issue a POST and map both failure classes.
    ///
    /// Non-2xx becomes `Rejected` with the message extracted from the JSON
    /// error body when parseable. Everything transport-level becomes
    /// `Transport` so no ureq error ever reaches the flow.
    fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<ureq::Response, GatewayError> {
        let url = self.endpoint(path);
        log::debug!("[gateway] POST {}", url);

        match self.agent.post(&url).send_json(body) {
            Ok(response) => Ok(response),
            Err(ureq::Error::Status(status, response)) => {
                let message = response
                    .into_json::<ErrorBody>()
                    .ok()
                    .and_then(|body| body.message);
                log::warn!(
                    "[gateway] {} returned status {} (message: {:?})",
                    path,
                    status,
                    message
                );
                Err(GatewayError::Rejected { message })
            }
            Err(err) => {
                log::error!("[gateway] {} transport failure: {}", path, err);
                Err(GatewayError::Transport(err.to_string()))
            }
        }
    }
}

/// Validate a 2xx body whose fields the wizard does not use.
///
/// The body is still parsed as JSON: a success status with a garbage body is
/// not a success, it is a transport failure.
fn consume_success_body(response: ureq::Response) -> Result<(), GatewayError> {
    response
        .into_json::<serde_json::Value>()
        .map(|_| ())
        .map_err(|e| GatewayError::Transport(format!("Failed to parse response: {}", e)))
}

impl AccountService for HttpAccountService {
    fn check_user(&self, mobile: &str) -> Result<CheckUserResponse, GatewayError> {
        let response = self.post("/user/check-user", &CheckUserRequest { mobile })?;
        response
            .into_json::<CheckUserResponse>()
            .map_err(|e| GatewayError::Transport(format!("Failed to parse response: {}", e)))
    }

    fn send_verification(&self, mobile: &str, email: &str) -> Result<(), GatewayError> {
        let response = self.post(
            "/user/send-verification",
            &SendVerificationRequest { mobile, email },
        )?;
        consume_success_body(response)
    }

    fn delete_account(&self, mobile: &str, email: &str, code: &str) -> Result<(), GatewayError> {
        let response = self.post(
            "/user/delete-account",
            &DeleteAccountRequest {
                mobile,
                email,
                verification_code: code,
            },
        )?;
        consume_success_body(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_format() {
        let req = CheckUserRequest {
            mobile: "5551234567",
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value, serde_json::json!({ "mobile": "5551234567" }));

        let req = DeleteAccountRequest {
            mobile: "5551234567",
            email: "a@b.com",
            verification_code: "1234",
        };
        let value = serde_json::to_value(&req).unwrap();
        // Wire field names are camelCase
        assert_eq!(
            value,
            serde_json::json!({
                "mobile": "5551234567",
                "email": "a@b.com",
                "verificationCode": "1234",
            })
        );
    }

    #[test]
    fn test_check_user_response_parsing() {
        let parsed: CheckUserResponse =
            serde_json::from_str(r#"{ "hasEmail": true }"#).unwrap();
        assert!(parsed.has_email);
    }

    #[test]
    fn test_error_body_message_optional() {
        let with: ErrorBody = serde_json::from_str(r#"{ "message": "no such user" }"#).unwrap();
        assert_eq!(with.message.as_deref(), Some("no such user"));

        let without: ErrorBody = serde_json::from_str(r#"{}"#).unwrap();
        assert!(without.message.is_none());
    }

    #[test]
    fn test_endpoint_joining() {
        let config = Config {
            api_base_url: "https://api.example.com".to_string(),
            timeout_secs: 10,
        };
        let client = HttpAccountService::new(&config);
        assert_eq!(
            client.endpoint("/user/check-user"),
            "https://api.example.com/user/check-user"
        );
    }

    /// Serve a single canned HTTP response on a local port
    fn spawn_one_shot_server(response: &'static str) -> HttpAccountService {
        use std::io::{Read, Write};

        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        std::thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 4096];
                let _ = stream.read(&mut buf);
                let _ = stream.write_all(response.as_bytes());
            }
        });

        let config = Config {
            api_base_url: format!("http://{}", addr),
            timeout_secs: 5,
        };
        HttpAccountService::new(&config)
    }

    #[test]
    fn test_send_verification_rejects_non_json_success_body() {
        let client = spawn_one_shot_server(
            "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 16\r\n\r\nthis is not json",
        );

        let result = client.send_verification("5551234567", "a@b.com");
        assert!(matches!(result, Err(GatewayError::Transport(_))));
    }

    #[test]
    fn test_delete_account_rejects_non_json_success_body() {
        let client = spawn_one_shot_server(
            "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: 13\r\n\r\n<html></html>",
        );

        let result = client.delete_account("5551234567", "a@b.com", "1234");
        assert!(matches!(result, Err(GatewayError::Transport(_))));
    }

    #[test]
    fn test_delete_account_accepts_json_success_body() {
        let client = spawn_one_shot_server(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 2\r\n\r\n{}",
        );

        let result = client.delete_account("5551234567", "a@b.com", "1234");
        assert!(result.is_ok());
    }

    #[test]
    fn test_rejection_message_extracted_from_error_body() {
        let client = spawn_one_shot_server(
            "HTTP/1.1 404 Not Found\r\nContent-Type: application/json\r\nContent-Length: 29\r\n\r\n{\"message\":\"no such account\"}",
        );

        let result = client.check_user("5551234567");
        match result {
            Err(GatewayError::Rejected { message }) => {
                assert_eq!(message.as_deref(), Some("no such account"));
            }
            other => panic!("expected Rejected, got {:?}", other),
        }
    }
}

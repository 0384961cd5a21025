//! Wire contract of the calculator endpoint and the submission call.

use gloo_net::http::Request;
use serde::Deserialize;
use thiserror::Error;
use web_sys::UrlSearchParams;

pub const CALC_ENDPOINT: &str = "/calcular";

/// Raw response shape of `POST /calcular`.
#[derive(Deserialize)]
struct CalcResponse {
    status: String,
    #[serde(default)]
    dados_html: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Parsed outcome of a calculation request.
#[derive(Clone, PartialEq, Debug)]
pub enum CalcOutcome {
    Success { html: String },
    Failure { message: String },
}

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("falha de rede: {0}")]
    Transport(String),
    #[error("resposta inválida do servidor: {0}")]
    MalformedResponse(String),
}

/// Trims the amount field. Empty or whitespace-only input is rejected here,
/// before any request is built.
pub fn validate_amount(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// What the form sends. `tipos` is only present when the user opted into a
/// custom allocation.
pub struct CalcPayload {
    pub valor: String,
    pub tipos: Option<Vec<String>>,
}

impl CalcPayload {
    /// Form-encoded fields, in the order the backend reads them.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![("valorInvestimento", self.valor.clone())];
        if let Some(tipos) = &self.tipos {
            let encoded = serde_json::to_string(tipos).unwrap_or_else(|_| "[]".to_string());
            fields.push(("tiposInvestimento", encoded));
            fields.push(("distribuicaoPersonalizada", "true".to_string()));
        }
        fields
    }
}

/// Validates and parses a response body into an outcome. A body that does not
/// match the contract (bad JSON, `success` without `dados_html`, a failure
/// without `message`) is rejected as malformed.
pub fn parse_outcome(body: &str) -> Result<CalcOutcome, SubmitError> {
    let response: CalcResponse =
        serde_json::from_str(body).map_err(|e| SubmitError::MalformedResponse(e.to_string()))?;

    if response.status == "success" {
        match response.dados_html {
            Some(html) => Ok(CalcOutcome::Success { html }),
            None => Err(SubmitError::MalformedResponse(
                "resposta de sucesso sem dados_html".to_string(),
            )),
        }
    } else {
        match response.message {
            Some(message) => Ok(CalcOutcome::Failure { message }),
            None => Err(SubmitError::MalformedResponse(format!(
                "status \"{}\" sem mensagem",
                response.status
            ))),
        }
    }
}

/// Sends the calculation request and parses the reply.
pub async fn submit(payload: &CalcPayload) -> Result<CalcOutcome, SubmitError> {
    let params =
        UrlSearchParams::new().map_err(|_| SubmitError::Transport("UrlSearchParams".to_string()))?;
    for (name, value) in payload.fields() {
        params.append(name, &value);
    }

    let request = Request::post(CALC_ENDPOINT)
        .body(params)
        .map_err(|e| SubmitError::Transport(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| SubmitError::Transport(e.to_string()))?;
    let body = response
        .text()
        .await
        .map_err(|e| SubmitError::Transport(e.to_string()))?;

    parse_outcome(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_response_yields_the_fragment() {
        let outcome =
            parse_outcome(r#"{"status":"success","dados_html":"<p>ok</p>"}"#).unwrap();
        assert_eq!(
            outcome,
            CalcOutcome::Success {
                html: "<p>ok</p>".to_string()
            }
        );
    }

    #[test]
    fn error_response_yields_the_server_message() {
        let outcome =
            parse_outcome(r#"{"status":"error","message":"bad input"}"#).unwrap();
        assert_eq!(
            outcome,
            CalcOutcome::Failure {
                message: "bad input".to_string()
            }
        );
    }

    #[test]
    fn success_without_fragment_is_malformed() {
        let err = parse_outcome(r#"{"status":"success"}"#).unwrap_err();
        assert!(matches!(err, SubmitError::MalformedResponse(_)));
    }

    #[test]
    fn failure_without_message_is_malformed() {
        let err = parse_outcome(r#"{"status":"error"}"#).unwrap_err();
        assert!(matches!(err, SubmitError::MalformedResponse(_)));
    }

    #[test]
    fn non_json_body_is_malformed() {
        let err = parse_outcome("<html>proxy error</html>").unwrap_err();
        assert!(matches!(err, SubmitError::MalformedResponse(_)));
    }

    #[test]
    fn empty_or_whitespace_amount_is_rejected() {
        assert_eq!(validate_amount(""), None);
        assert_eq!(validate_amount("   "), None);
        assert_eq!(validate_amount("\t \n"), None);
    }

    #[test]
    fn valid_amount_is_trimmed() {
        assert_eq!(validate_amount(" 1.234,56 "), Some("1.234,56".to_string()));
        assert_eq!(validate_amount("1000"), Some("1000".to_string()));
    }

    #[test]
    fn default_payload_sends_only_the_amount() {
        let payload = CalcPayload {
            valor: "1.234,56".to_string(),
            tipos: None,
        };
        assert_eq!(
            payload.fields(),
            vec![("valorInvestimento", "1.234,56".to_string())]
        );
    }

    #[test]
    fn custom_allocation_payload_carries_types_and_flag() {
        let payload = CalcPayload {
            valor: "1000".to_string(),
            tipos: Some(vec!["FIIs".to_string(), "RendaFixa".to_string()]),
        };
        let fields = payload.fields();
        assert_eq!(fields[0], ("valorInvestimento", "1000".to_string()));
        assert_eq!(
            fields[1],
            ("tiposInvestimento", r#"["FIIs","RendaFixa"]"#.to_string())
        );
        assert_eq!(fields[2], ("distribuicaoPersonalizada", "true".to_string()));
    }
}

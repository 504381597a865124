//! CEP (Brazilian postal code) formatting, validation and lookup state.
//!
//! The network call itself lives in `utils::viacep`; everything here is
//! pure so the outcome handling can be exercised without a browser.

use serde::Deserialize;
use thiserror::Error;

/// A CEP has exactly this many digits.
pub const CEP_DIGITS: usize = 8;

/// Address record returned by ViaCEP for a known postal code.
#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Address {
    pub logradouro: String,
    pub bairro: String,
    pub localidade: String,
    pub uf: String,
}

/// Inline, non-fatal errors of the shipping-estimate flow. Messages are
/// shown verbatim under the CEP field.
#[derive(Error, Clone, Copy, PartialEq, Debug)]
pub enum CepError {
    #[error("CEP deve conter 8 dígitos")]
    InvalidLength,
    #[error("CEP não encontrado")]
    NotFound,
    #[error("Erro ao buscar CEP. Tente novamente.")]
    Transport,
}

/// Digits only, unformatted. Used for the 8-digit lookup gate.
pub fn clean_cep(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Mask user input as `NNNNN-NNN`. Five digits or fewer pass through
/// unhyphenated; anything longer is truncated to eight digits.
pub fn format_cep(raw: &str) -> String {
    let digits = clean_cep(raw);
    if digits.len() <= 5 {
        return digits;
    }
    let tail_end = digits.len().min(CEP_DIGITS);
    format!("{}-{}", &digits[..5], &digits[5..tail_end])
}

/// Whether the input is complete enough to hit the lookup service.
pub fn ready_for_lookup(raw: &str) -> bool {
    clean_cep(raw).len() == CEP_DIGITS
}

/// Interpret a ViaCEP response body.
///
/// ViaCEP signals an unknown (but well-formed) code with `{"erro": true}`;
/// older deployments send the string `"true"`. A body that is neither an
/// error marker nor a full address record counts as a transport failure,
/// the same as malformed JSON.
pub fn parse_lookup_body(body: serde_json::Value) -> Result<Address, CepError> {
    if let Some(flag) = body.get("erro") {
        let not_found = flag.as_bool().unwrap_or(false) || flag.as_str() == Some("true");
        if not_found {
            return Err(CepError::NotFound);
        }
    }
    serde_json::from_value(body).map_err(|_| CepError::Transport)
}

/// Fence for overlapping lookups. Each request takes a ticket; a response
/// whose ticket is no longer the latest is discarded, so a slow reply can
/// never overwrite the result of a newer input.
#[derive(Default, Debug)]
pub struct LookupSequence {
    latest: u64,
}

impl LookupSequence {
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn clean_strips_everything_but_digits() {
        assert_eq!(clean_cep("01310-930"), "01310930");
        assert_eq!(clean_cep("ab 12.3/45"), "12345");
        assert_eq!(clean_cep(""), "");
    }

    #[test]
    fn short_input_stays_unhyphenated() {
        assert_eq!(format_cep("123"), "123");
        assert_eq!(format_cep("12345"), "12345");
    }

    #[test]
    fn long_input_gains_hyphen_and_truncates() {
        assert_eq!(format_cep("123456"), "12345-6");
        assert_eq!(format_cep("01310930"), "01310-930");
        assert_eq!(format_cep("013109301234"), "01310-930");
    }

    #[test]
    fn format_is_idempotent() {
        for raw in ["", "1", "12345", "123456", "01310930", "01310-930", "x01y310930z"] {
            let once = format_cep(raw);
            assert_eq!(format_cep(&once), once, "input {raw:?}");
        }
    }

    #[test]
    fn lookup_gate_requires_exactly_eight_digits() {
        assert!(!ready_for_lookup("0131093"));
        assert!(ready_for_lookup("01310-930"));
        assert!(!ready_for_lookup("013109301"));
        assert!(!ready_for_lookup(""));
    }

    #[test]
    fn erro_body_is_not_found() {
        assert_eq!(
            parse_lookup_body(json!({"erro": true})),
            Err(CepError::NotFound)
        );
        assert_eq!(
            parse_lookup_body(json!({"erro": "true"})),
            Err(CepError::NotFound)
        );
    }

    #[test]
    fn valid_record_deserializes_exactly() {
        let body = json!({
            "cep": "01310-930",
            "logradouro": "Avenida Paulista",
            "complemento": "2100",
            "bairro": "Bela Vista",
            "localidade": "São Paulo",
            "uf": "SP",
        });
        let address = parse_lookup_body(body).expect("address");
        assert_eq!(address.logradouro, "Avenida Paulista");
        assert_eq!(address.bairro, "Bela Vista");
        assert_eq!(address.localidade, "São Paulo");
        assert_eq!(address.uf, "SP");
    }

    #[test]
    fn unexpected_shape_is_a_transport_failure() {
        assert_eq!(
            parse_lookup_body(json!({"foo": 1})),
            Err(CepError::Transport)
        );
        assert_eq!(parse_lookup_body(json!([1, 2])), Err(CepError::Transport));
    }

    #[test]
    fn error_messages_match_the_inline_copy() {
        assert_eq!(CepError::InvalidLength.to_string(), "CEP deve conter 8 dígitos");
        assert_eq!(CepError::NotFound.to_string(), "CEP não encontrado");
        assert_eq!(
            CepError::Transport.to_string(),
            "Erro ao buscar CEP. Tente novamente."
        );
    }

    #[test]
    fn stale_tickets_are_discarded() {
        let mut seq = LookupSequence::default();
        let first = seq.issue();
        let second = seq.issue();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }
}

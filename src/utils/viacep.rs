//! Thin client for the public ViaCEP address lookup service.

use gloo_net::http::Request;

use crate::cep::{parse_lookup_body, Address, CepError};
use crate::config;

/// Look up the address for a cleaned 8-digit CEP.
///
/// The service is an untrusted external collaborator: a failed request, a
/// non-2xx status or a body that is not valid JSON all collapse into
/// `CepError::Transport`; a well-formed "unknown code" body becomes
/// `CepError::NotFound`.
pub async fn fetch_address(clean_cep: &str) -> Result<Address, CepError> {
    let url = format!("{}/ws/{}/json/", config::VIACEP_BASE_URL, clean_cep);
    let response = Request::get(&url).send().await.map_err(|err| {
        log::warn!("ViaCEP request failed: {err:?}");
        CepError::Transport
    })?;
    if !response.ok() {
        log::warn!("ViaCEP returned status {}", response.status());
        return Err(CepError::Transport);
    }
    let body: serde_json::Value = response.json().await.map_err(|err| {
        log::warn!("ViaCEP body was not valid JSON: {err:?}");
        CepError::Transport
    })?;
    parse_lookup_body(body)
}

//! Fixed product identity and external endpoints.
//!
//! The page has no backend of its own: the only collaborators are the
//! public ViaCEP lookup service and the external checkout origin that
//! receives the handoff parameters.

pub const PRODUCT_NAME: &str = "GlicoMax Original - Medidor de Açúcar a Laser";
pub const ITEM_CODE: &str = "33399154";
pub const UNITS_SOLD: u32 = 18204;

pub const VIACEP_BASE_URL: &str = "https://viacep.com.br";
pub const CHECKOUT_BASE_URL: &str = "https://checkout-five-ruby.vercel.app";

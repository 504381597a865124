//! Checkout handoff: serialize the selection into the external checkout URL.
//!
//! This page's responsibility ends at the navigation; no order object is
//! created locally and no response is processed.

use urlencoding::encode;

use crate::catalog::{self, Kit};
use crate::config;

/// Build the full checkout URL for the current selection. Exactly six
/// parameters, in this order: product name, kit size, unit price, quantity,
/// discount percent, original price.
pub fn checkout_url(kit: &Kit, quantity: u32) -> String {
    let params = [
        ("produto", config::PRODUCT_NAME.to_string()),
        ("kit", kit.units.to_string()),
        ("preco", catalog::format_plain(kit.price)),
        ("quantidade", quantity.to_string()),
        ("desconto", kit.discount.to_string()),
        ("valorOriginal", catalog::format_plain(kit.original_price)),
    ];
    let query = params
        .iter()
        .map(|(key, value)| format!("{key}={}", encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}/?{}", config::CHECKOUT_BASE_URL, query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::KIT_OPTIONS;

    fn query_pairs(url: &str) -> Vec<(String, String)> {
        let (_, query) = url.split_once("/?").expect("query string");
        query
            .split('&')
            .map(|pair| {
                let (key, value) = pair.split_once('=').expect("key=value");
                (key.to_string(), value.to_string())
            })
            .collect()
    }

    #[test]
    fn url_targets_the_fixed_checkout_origin() {
        let url = checkout_url(&KIT_OPTIONS[0], 1);
        assert!(url.starts_with("https://checkout-five-ruby.vercel.app/?"));
    }

    #[test]
    fn exactly_six_parameters_in_documented_order() {
        let url = checkout_url(&KIT_OPTIONS[1], 3);
        let pairs = query_pairs(&url);
        let keys: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            ["produto", "kit", "preco", "quantidade", "desconto", "valorOriginal"]
        );
    }

    #[test]
    fn values_come_from_the_selected_kit_and_quantity() {
        let url = checkout_url(&KIT_OPTIONS[1], 3);
        let pairs = query_pairs(&url);
        let value = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
                .unwrap()
        };
        assert_eq!(value("kit"), "2");
        assert_eq!(value("preco"), "239.9");
        assert_eq!(value("quantidade"), "3");
        assert_eq!(value("desconto"), "54");
        assert_eq!(value("valorOriginal"), "520");
    }

    #[test]
    fn product_name_is_percent_encoded() {
        let url = checkout_url(&KIT_OPTIONS[0], 1);
        assert!(url.contains("produto=GlicoMax%20Original"));
        assert!(!url.contains(' '));
    }

    #[test]
    fn whole_prices_encode_without_decimals() {
        let url = checkout_url(&KIT_OPTIONS[0], 2);
        let pairs = query_pairs(&url);
        assert!(pairs.contains(&("preco".into(), "127".into())));
        assert!(pairs.contains(&("valorOriginal".into(), "260".into())));
    }
}

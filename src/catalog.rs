//! Static purchase-kit catalog and price display helpers.
//!
//! Every value here is hand-authored marketing data, defined at build time.
//! The discount fields are intentionally NOT derived from the prices: the
//! authored numbers round differently than an exact computation would
//! (kit 1 advertises R$ 133 off while 51% of 260 is 132.60).

/// A purchasable bundle of N devices with its own pricing.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Kit {
    pub units: u32,
    pub image: &'static str,
    pub price: f64,
    pub original_price: f64,
    /// Discount in whole percent, for the badge next to the price.
    pub discount: u32,
    pub discount_amount: f64,
    /// Per-installment value of the 12x plan.
    pub installment: f64,
}

pub const KIT_OPTIONS: [Kit; 3] = [
    Kit {
        units: 1,
        image: "/kit-1-single-device.png",
        price: 127.0,
        original_price: 260.0,
        discount: 51,
        discount_amount: 133.0,
        installment: 12.87,
    },
    Kit {
        units: 2,
        image: "/kit-2-two-devices.png",
        price: 239.9,
        original_price: 520.0,
        discount: 54,
        discount_amount: 280.1,
        installment: 23.99,
    },
    Kit {
        units: 3,
        image: "/kit-3-three-devices.png",
        price: 329.9,
        original_price: 780.0,
        discount: 58,
        discount_amount: 450.1,
        installment: 32.99,
    },
];

/// Marketing shots shared by every kit, shown after the kit's lead image.
pub const MARKETING_IMAGES: [&str; 4] = [
    "/marketing-multiple-views.png",
    "/marketing-usage-finger.png",
    "/marketing-lifestyle.png",
    "/marketing-person-holding.png",
];

/// Look a kit up by unit count. Falls back to the first kit; unreachable
/// through the UI since only the three defined unit counts are selectable.
pub fn kit_for_units(units: u32) -> &'static Kit {
    KIT_OPTIONS
        .iter()
        .find(|kit| kit.units == units)
        .unwrap_or(&KIT_OPTIONS[0])
}

/// Carousel image list for a kit: its lead image plus the shared shots.
pub fn gallery_for_kit(units: u32) -> Vec<&'static str> {
    let kit = kit_for_units(units);
    std::iter::once(kit.image)
        .chain(MARKETING_IMAGES.iter().copied())
        .collect()
}

/// Parse a manually typed purchase quantity. Empty, non-numeric or zero
/// input falls back to the minimum of 1.
pub fn parse_quantity(raw: &str) -> u32 {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|qty| *qty >= 1)
        .unwrap_or(1)
}

/// Quantity floor. Decrementing never goes below 1.
pub fn clamp_quantity(qty: u32) -> u32 {
    qty.max(1)
}

/// `239.9` -> `"239,90"`, the two-decimal comma form used for prices.
pub fn format_brl(value: f64) -> String {
    format!("{value:.2}").replace('.', ",")
}

/// Minimal decimal form used in the checkout query string: `127` -> `"127"`,
/// `239.9` -> `"239.9"`.
pub fn format_plain(value: f64) -> String {
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kit_lookup_finds_each_defined_kit() {
        for units in [1, 2, 3] {
            assert_eq!(kit_for_units(units).units, units);
        }
    }

    #[test]
    fn kit_lookup_falls_back_to_first_kit() {
        assert_eq!(kit_for_units(7).units, 1);
        assert_eq!(kit_for_units(0).units, 1);
    }

    #[test]
    fn gallery_leads_with_the_kit_image() {
        for kit in &KIT_OPTIONS {
            let gallery = gallery_for_kit(kit.units);
            assert_eq!(gallery[0], kit.image);
            assert_eq!(gallery.len(), 1 + MARKETING_IMAGES.len());
            assert_eq!(&gallery[1..], &MARKETING_IMAGES);
        }
    }

    #[test]
    fn parse_quantity_floors_at_one() {
        assert_eq!(parse_quantity(""), 1);
        assert_eq!(parse_quantity("0"), 1);
        assert_eq!(parse_quantity("abc"), 1);
        assert_eq!(parse_quantity("-3"), 1);
        assert_eq!(parse_quantity("4"), 4);
        assert_eq!(parse_quantity(" 12 "), 12);
    }

    #[test]
    fn clamp_quantity_blocks_decrement_below_one() {
        assert_eq!(clamp_quantity(0), 1);
        assert_eq!(clamp_quantity(1), 1);
        assert_eq!(clamp_quantity(9), 9);
    }

    #[test]
    fn brl_formatting_uses_comma_and_two_decimals() {
        assert_eq!(format_brl(127.0), "127,00");
        assert_eq!(format_brl(239.9), "239,90");
        assert_eq!(format_brl(32.99), "32,99");
    }

    #[test]
    fn plain_formatting_matches_checkout_expectations() {
        assert_eq!(format_plain(127.0), "127");
        assert_eq!(format_plain(239.9), "239.9");
        assert_eq!(format_plain(780.0), "780");
    }
}

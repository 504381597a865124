//! Visibility rule for the fixed call-to-action bar.

/// Debounce window for re-evaluating the rule on scroll.
pub const SCROLL_DEBOUNCE_MS: u32 = 100;

/// The sticky bar shows exactly when the primary buy button's bottom edge
/// has scrolled above the viewport top. The boundary is strict: a bottom
/// offset of 0 keeps the bar hidden.
pub fn sticky_visible(button_bottom: f64) -> bool {
    button_bottom < 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_hidden_while_button_is_on_screen() {
        assert!(!sticky_visible(480.0));
        assert!(!sticky_visible(1.0));
    }

    #[test]
    fn boundary_at_zero_is_hidden() {
        assert!(!sticky_visible(0.0));
    }

    #[test]
    fn bar_visible_once_button_scrolls_past_the_top() {
        assert!(sticky_visible(-1.0));
        assert!(sticky_visible(-250.5));
    }
}

#[cfg(target_arch = "wasm32")]
use crate::i18n::bundle::with_bundle;
#[cfg(target_arch = "wasm32")]
use js_sys::{Function, Intl, Object};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

fn group_thousands(whole: u64) -> String {
    let digits = whole.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a whole number with locale grouping (`12,500`).
#[must_use]
pub fn fmt_number(num: u64) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        with_bundle(|bundle| {
            let locales = js_sys::Array::new();
            locales.push(&JsValue::from_str(&bundle.lang));
            let nf = Intl::NumberFormat::new(&locales, &Object::new());
            let format_fn: Function = nf.format();
            let value = ecoroute_core::numbers::u64_to_f64(num);
            format_fn
                .call1(&nf, &JsValue::from_f64(value))
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_else(|| group_thousands(num))
        })
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        group_thousands(num)
    }
}

/// Reward points, grouped.
#[must_use]
pub fn fmt_points(points: u64) -> String {
    fmt_number(points)
}

/// Whole won amount with the currency sign (`₩145,000`).
#[must_use]
pub fn fmt_krw(amount: u64) -> String {
    format!("₩{}", fmt_number(amount))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn host_fallback_groups_thousands() {
        assert_eq!(fmt_number(0), "0");
        assert_eq!(fmt_number(999), "999");
        assert_eq!(fmt_number(12_500), "12,500");
        assert_eq!(fmt_number(1_234_567), "1,234,567");
    }

    #[test]
    fn currency_and_points() {
        assert_eq!(fmt_krw(145_000), "₩145,000");
        assert_eq!(fmt_points(500), "500");
    }
}

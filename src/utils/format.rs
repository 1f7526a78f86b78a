use crate::context::language::Language;
use crate::models::menu::Price;
use crate::utils::i18n::t;

/// `₹100`, or `Full: ₹200 / Half: ₹120` with labels in the active language
pub fn format_price(price: &Price, language: &Language) -> String {
    let currency = t("price", language);
    match price {
        Price::Single(amount) => format!("{}{}", currency, amount),
        Price::Split { full, half } => format!(
            "{}: {}{} / {}: {}{}",
            t("fullPlate", language),
            currency,
            full,
            t("halfPlate", language),
            currency,
            half
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_price() {
        assert_eq!(format_price(&Price::Single(100.0), &Language::English), "₹100");
        assert_eq!(format_price(&Price::Single(42.5), &Language::Marathi), "₹42.5");
    }

    #[test]
    fn split_price_uses_language_labels() {
        let price = Price::Split { full: 200.0, half: 120.0 };
        assert_eq!(format_price(&price, &Language::English), "Full: ₹200 / Half: ₹120");
        assert_eq!(format_price(&price, &Language::Marathi), "फुल: ₹200 / हाफ: ₹120");
    }
}

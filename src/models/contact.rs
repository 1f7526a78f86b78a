use serde::{Deserialize, Serialize};

use super::menu::Localized;
use crate::config::ContactConfig;

/// Outbound hand-off to another app or site
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub enum OrderAction {
    Call(String),
    WhatsApp(String),
    External(String),
}

impl OrderAction {
    pub fn href(&self) -> String {
        match self {
            OrderAction::Call(phone) => format!("tel:{}", phone),
            OrderAction::WhatsApp(phone) => format!("https://wa.me/{}", digits_only(phone)),
            OrderAction::External(url) => url.clone(),
        }
    }
}

pub fn digits_only(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum OrderingChannel {
    Phone,
    WhatsApp,
    Swiggy,
    Zomato,
}

impl OrderingChannel {
    pub fn icon(&self) -> &'static str {
        match self {
            OrderingChannel::Phone => "📞",
            OrderingChannel::WhatsApp => "💬",
            OrderingChannel::Swiggy => "🍴",
            OrderingChannel::Zomato => "🚚",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            OrderingChannel::Phone => "bg-restaurant-green",
            OrderingChannel::WhatsApp => "bg-restaurant-saffron",
            OrderingChannel::Swiggy => "bg-restaurant-terracotta",
            OrderingChannel::Zomato => "bg-restaurant-gold",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct OrderingOption {
    pub channel: OrderingChannel,
    pub title: Localized,
    pub description: Localized,
    pub action: OrderAction,
}

#[derive(Clone, PartialEq, Debug)]
pub struct ContactInfo {
    pub phone_primary: String,
    pub phone_secondary: String,
    pub whatsapp: String,
    pub address: Localized,
    pub hours: Localized,
    pub swiggy_url: String,
    pub zomato_url: String,
}

impl ContactInfo {
    pub fn from_config(config: &ContactConfig) -> Self {
        Self {
            phone_primary: config.phone_primary.clone(),
            phone_secondary: config.phone_secondary.clone(),
            whatsapp: config.whatsapp.clone(),
            address: Localized::new(
                "Shop No. 15, Ground Floor, Shivaji Nagar, Pune - 411005, Maharashtra",
                "दुकान क्र. १५, तळमजला, शिवाजीनगर, पुणे - ४११००५, महाराष्ट्र",
            ),
            hours: Localized::new(
                "Open Daily: 11:00 AM - 10:00 PM",
                "दररोज उघडे: सकाळी ११:०० - रात्री १०:००",
            ),
            swiggy_url: config.swiggy_url.clone(),
            zomato_url: config.zomato_url.clone(),
        }
    }

    pub fn call_action(&self) -> OrderAction {
        OrderAction::Call(self.phone_primary.clone())
    }

    pub fn whatsapp_action(&self) -> OrderAction {
        OrderAction::WhatsApp(self.whatsapp.clone())
    }

    pub fn swiggy_action(&self) -> OrderAction {
        OrderAction::External(self.swiggy_url.clone())
    }

    pub fn zomato_action(&self) -> OrderAction {
        OrderAction::External(self.zomato_url.clone())
    }

    pub fn ordering_options(&self) -> Vec<OrderingOption> {
        vec![
            OrderingOption {
                channel: OrderingChannel::Phone,
                title: Localized::new("Call to Order", "फोन करून ऑर्डर करा"),
                description: Localized::new("Call us directly for quick orders", "त्वरीत ऑर्डरसाठी आम्हाला कॉल करा"),
                action: self.call_action(),
            },
            OrderingOption {
                channel: OrderingChannel::WhatsApp,
                title: Localized::new("WhatsApp Order", "व्हाट्सअॅप ऑर्डर"),
                description: Localized::new("Order via WhatsApp for convenience", "सोयीसाठी व्हाट्सअॅपद्वारे ऑर्डर करा"),
                action: self.whatsapp_action(),
            },
            OrderingOption {
                channel: OrderingChannel::Swiggy,
                title: Localized::new("Swiggy Delivery", "स्विगी डिलिव्हरी"),
                description: Localized::new("Order online via Swiggy", "स्विगीद्वारे ऑनलाइन ऑर्डर करा"),
                action: self.swiggy_action(),
            },
            OrderingOption {
                channel: OrderingChannel::Zomato,
                title: Localized::new("Zomato Delivery", "झोमॅटो डिलिव्हरी"),
                description: Localized::new("Order online via Zomato", "झोमॅटोद्वारे ऑनलाइन ऑर्डर करा"),
                action: self.zomato_action(),
            },
        ]
    }
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self::from_config(&ContactConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_link_keeps_number_verbatim() {
        let info = ContactInfo::default();
        assert_eq!(info.call_action().href(), "tel:+91 98765 43210");
    }

    #[test]
    fn whatsapp_link_strips_everything_but_digits() {
        assert_eq!(OrderAction::WhatsApp("+91 (98765) 43-210".into()).href(), "https://wa.me/919876543210");
        assert_eq!(digits_only("abc"), "");
    }

    #[test]
    fn four_ordering_channels_in_fixed_order() {
        let options = ContactInfo::default().ordering_options();
        let channels: Vec<OrderingChannel> = options.iter().map(|o| o.channel).collect();
        assert_eq!(
            channels,
            vec![OrderingChannel::Phone, OrderingChannel::WhatsApp, OrderingChannel::Swiggy, OrderingChannel::Zomato]
        );
        assert_eq!(options[2].action.href(), "https://www.swiggy.com");
        assert_eq!(options[3].action.href(), "https://www.zomato.com");
    }
}

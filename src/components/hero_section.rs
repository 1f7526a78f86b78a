use yew::prelude::*;

use crate::config::CONFIG;
use crate::context::language::use_language;
use crate::models::contact::ContactInfo;
use crate::services::open_order_action;

#[derive(Properties, PartialEq)]
pub struct HeroSectionProps {
    pub on_view_menu: Callback<()>,
}

#[function_component(HeroSection)]
pub fn hero_section(props: &HeroSectionProps) -> Html {
    let lang = use_language();

    let on_view_menu = {
        let cb = props.on_view_menu.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(()))
    };
    let on_order = Callback::from(|_e: MouseEvent| {
        open_order_action(&ContactInfo::from_config(&CONFIG.contact).call_action());
    });

    let features = [
        ("🌱", "bg-restaurant-green", "featureFreshTitle", "featureFreshText"),
        ("🏠", "bg-restaurant-gold", "featureHomeTitle", "featureHomeText"),
        ("🚚", "bg-restaurant-terracotta", "featureDeliveryTitle", "featureDeliveryText"),
    ];

    html! {
        <div class="hero">
            <div class="hero-backdrop" />
            <div class="container hero-content">
                <h1 class="hero-welcome">{lang.t("welcome")}</h1>
                <h2 class="hero-title">{lang.t("restaurantName")}</h2>
                <p class="hero-subtitle">{lang.t("heroSubtitle")}</p>

                <div class="hero-actions">
                    <button class="btn btn-primary btn-lg" onclick={on_order}>
                        {"📞 "}{lang.t("orderNow")}
                    </button>
                    <button class="btn btn-outline btn-lg" onclick={on_view_menu}>
                        {"👁 "}{lang.t("viewMenu")}
                    </button>
                </div>

                <div class="hero-features">
                    { for features.iter().map(|(icon, color, title, text)| html! {
                        <div class="feature">
                            <div class={classes!("feature-icon", *color)}>{*icon}</div>
                            <h3>{lang.t(title)}</h3>
                            <p>{lang.t(text)}</p>
                        </div>
                    }) }
                </div>
            </div>
        </div>
    }
}

use yew::prelude::*;

use crate::config::CONFIG;
use crate::context::language::{use_language, Language};
use crate::models::contact::ContactInfo;
use crate::models::section::Section;
use crate::services::open_order_action;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub active_section: Section,
    pub on_section_change: Callback<Section>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let lang = use_language();

    let nav_button = |section: Section, mobile: bool| {
        let onclick = {
            let cb = props.on_section_change.clone();
            Callback::from(move |_e: MouseEvent| cb.emit(section))
        };
        let active = props.active_section == section;
        let class = match (mobile, active) {
            (false, true) => "nav-link active",
            (false, false) => "nav-link",
            (true, true) => "nav-link-mobile active",
            (true, false) => "nav-link-mobile",
        };
        html! {
            <button key={section.id()} class={class} onclick={onclick}>
                {lang.t(section.label_key())}
                if active && !mobile {
                    <div class="nav-underline" />
                }
            </button>
        }
    };

    let language_buttons = Language::ALL.iter().map(|&language| {
        let onclick = {
            let lang = lang.clone();
            Callback::from(move |_e: MouseEvent| lang.set(language))
        };
        let class = if lang.language == language { "lang-btn active" } else { "lang-btn" };
        html! {
            <button key={language.as_str()} class={class} onclick={onclick}>
                {language.switch_label()}
            </button>
        }
    });

    let on_call = Callback::from(|_e: MouseEvent| {
        open_order_action(&ContactInfo::from_config(&CONFIG.contact).call_action());
    });

    html! {
        <header class="site-header">
            <div class="container header-row">
                <div class="logo">
                    <div class="logo-mark">{"न"}</div>
                    <div>
                        <h1 class="logo-title">{lang.t("restaurantName")}</h1>
                        <p class="logo-tagline">{lang.t("tagline")}</p>
                    </div>
                </div>

                <nav class="nav-desktop">
                    { for Section::ALL.iter().map(|&s| nav_button(s, false)) }
                </nav>

                <div class="header-actions">
                    <div class="language-switch">
                        { for language_buttons }
                    </div>
                    <button class="btn btn-call" onclick={on_call}>
                        <span>{"📞"}</span>
                        <span>{lang.t("callToOrder")}</span>
                    </button>
                </div>
            </div>

            <nav class="container nav-mobile">
                { for Section::ALL.iter().map(|&s| nav_button(s, true)) }
            </nav>
        </header>
    }
}

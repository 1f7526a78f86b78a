use yew::prelude::*;

use crate::config::CONFIG;
use crate::context::language::use_language;
use crate::hooks::use_menu_data::UseMenuDataHandle;
use crate::hooks::use_menu_filter::classify_category;
use crate::models::contact::ContactInfo;
use crate::models::specials::{featured_dishes, thali_categories, thali_inclusions_key};
use crate::services::open_order_action;
use crate::utils::format_price;

#[function_component(SpecialsSection)]
pub fn specials_section() -> Html {
    let lang = use_language();
    let menu = use_context::<UseMenuDataHandle>();

    let Some(menu) = menu else {
        log::error!("❌ [SPECIALS] SpecialsSection rendered outside MenuDataProvider");
        return html! {};
    };

    if menu.loading() {
        return html! { <div class="section-status">{lang.t("loadingSpecials")}</div> };
    }
    let Some(document) = menu.document() else {
        let message = menu.error().unwrap_or_default();
        return html! { <div class="section-status">{format!("{}: {}", lang.t("error"), message)}</div> };
    };

    let on_order = Callback::from(|_e: MouseEvent| {
        open_order_action(&ContactInfo::from_config(&CONFIG.contact).call_action());
    });

    let featured = featured_dishes(&document);
    let thalis = thali_categories(&document);
    let heading_key = if document.todays_specials().is_empty() { "specials" } else { "todaysSpecial" };

    html! {
        <div class="section specials-section">
            <div class="container">
                <div class="section-heading">
                    <h2>{lang.t(heading_key)}</h2>
                    <p>{lang.t("specialsSubtitle")}</p>
                </div>

                <div class="featured-grid">
                    { for featured.iter().map(|dish| html! {
                        <div class="card featured-card">
                            <div class="featured-emoji">{dish.emoji}</div>
                            <h3>{dish.name.get(&lang.language).to_string()}</h3>
                            <p class="featured-description">{dish.description.get(&lang.language).to_string()}</p>
                            <p class="price">{format_price(&dish.price, &lang.language)}</p>
                            <button class="btn btn-primary btn-sm" onclick={on_order.clone()}>
                                {"📞 "}{lang.t("orderNow")}
                            </button>
                        </div>
                    }) }
                </div>

                <div class="thali-menu">
                    <h3 class="thali-heading">{lang.t("thaliMenu")}</h3>
                    { for thalis.into_iter().map(|category| {
                        let inclusions = thali_inclusions_key(&category.name).map(|key| lang.t(key));
                        html! {
                            <div class="card thali-card" key={category.name.clone()}>
                                <div class="thali-title">
                                    <span class="category-icon">{classify_category(&category.name).icon()}</span>
                                    <span>{category.name.clone()}</span>
                                </div>
                                { for category.items.iter().map(|item| html! {
                                    <div class="menu-item" key={item.id.clone()}>
                                        <div class="menu-item-body">
                                            <h4>{item.name.get(&lang.language).to_string()}</h4>
                                            if let Some(text) = inclusions.clone() {
                                                <p class="menu-item-note">{text}</p>
                                            }
                                        </div>
                                        <div class="menu-item-price">
                                            <p>{format_price(&item.price, &lang.language)}</p>
                                            <button class="btn btn-outline btn-sm" onclick={on_order.clone()}>
                                                {lang.t("orderNow")}
                                            </button>
                                        </div>
                                    </div>
                                }) }
                            </div>
                        }
                    }) }
                </div>
            </div>
        </div>
    }
}

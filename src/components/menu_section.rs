use yew::prelude::*;

use crate::context::language::use_language;
use crate::hooks::use_menu_data::UseMenuDataHandle;
use crate::hooks::use_menu_filter::{filter_categories, use_menu_filter, DietFilter};
use super::menu_category_card::MenuCategoryCard;

#[function_component(MenuSection)]
pub fn menu_section() -> Html {
    let lang = use_language();
    let filter = use_menu_filter();
    let menu = use_context::<UseMenuDataHandle>();

    let Some(menu) = menu else {
        log::error!("❌ [MENU] MenuSection rendered outside MenuDataProvider");
        return html! {};
    };

    if menu.loading() {
        return html! { <div class="section-status">{lang.t("loadingMenu")}</div> };
    }
    let Some(document) = menu.document() else {
        let message = menu.error().unwrap_or_default();
        return html! { <div class="section-status">{format!("{}: {}", lang.t("error"), message)}</div> };
    };

    let on_search = {
        let set_search = filter.set_search.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                set_search.emit(input.value());
            }
        })
    };

    let filter_buttons = DietFilter::ALL.iter().map(|&option| {
        let onclick = {
            let set_filter = filter.set_filter.clone();
            Callback::from(move |_e: MouseEvent| set_filter.emit(option))
        };
        let class = if filter.filter == option { "btn btn-filter active" } else { "btn btn-filter" };
        html! {
            <button class={class} onclick={onclick}>{lang.t(option.label_key())}</button>
        }
    });

    let on_refresh = {
        let refresh = menu.refresh.clone();
        Callback::from(move |_e: MouseEvent| refresh.emit(()))
    };

    let categories = filter_categories(&document, filter.filter, &filter.search);

    html! {
        <div class="section menu-section">
            <div class="container">
                <div class="section-heading">
                    <h2>{lang.t("menu")}</h2>
                    <p>{lang.t("menuSubtitle")}</p>
                    <p class="section-meta">
                        {format!("{}: {}", lang.t("lastUpdated"), document.last_updated_display())}
                        <button class="btn-link" onclick={on_refresh}>{"🔄 "}{lang.t("refresh")}</button>
                    </p>
                    // A failed refresh keeps the previous menu on screen
                    if let Some(error) = menu.error() {
                        <p class="section-error">{format!("{}: {}", lang.t("error"), error)}</p>
                    }
                </div>

                <div class="menu-controls">
                    <div class="search-box">
                        <span class="search-icon">{"🔍"}</span>
                        <input
                            type="text"
                            placeholder={lang.t("searchPlaceholder")}
                            value={filter.search.clone()}
                            oninput={on_search}
                        />
                    </div>
                    <div class="filter-buttons">
                        { for filter_buttons }
                    </div>
                </div>

                <div class="category-grid">
                    if categories.is_empty() {
                        <p class="section-status">{lang.t("noResults")}</p>
                    }
                    { for categories.into_iter().map(|category| html! {
                        <MenuCategoryCard
                            key={category.name.clone()}
                            category={category.clone()}
                            open={filter.expanded.is_open(&category.name)}
                            on_toggle={filter.toggle_category.clone()}
                        />
                    }) }
                </div>
            </div>
        </div>
    }
}

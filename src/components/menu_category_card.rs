use yew::prelude::*;

use crate::context::language::use_language;
use crate::hooks::use_menu_filter::classify_category;
use crate::models::menu::{MenuCategory, MenuItem};
use crate::utils::format_price;

#[derive(Properties, PartialEq)]
pub struct MenuCategoryCardProps {
    pub category: MenuCategory,
    pub open: bool,
    pub on_toggle: Callback<String>,
}

#[function_component(MenuCategoryCard)]
pub fn menu_category_card(props: &MenuCategoryCardProps) -> Html {
    let lang = use_language();
    let category = &props.category;

    let onclick = {
        let cb = props.on_toggle.clone();
        let name = category.name.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(name.clone()))
    };

    html! {
        <div class="card category-card">
            <div class="category-trigger" onclick={onclick}>
                <div class="category-title">
                    <span class="category-icon">{classify_category(&category.name).icon()}</span>
                    <h3>{category.name.clone()}</h3>
                </div>
                <div class="category-meta">
                    <span class="category-count">{format!("{} {}", category.items.len(), lang.t("items"))}</span>
                    <span class="chevron">{if props.open { "▲" } else { "▼" }}</span>
                </div>
            </div>

            if props.open {
                <div class="category-items">
                    { for category.items.iter().map(|item| html! {
                        <MenuItemRow key={item.id.clone()} item={item.clone()} />
                    }) }
                </div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MenuItemRowProps {
    pub item: MenuItem,
}

#[function_component(MenuItemRow)]
pub fn menu_item_row(props: &MenuItemRowProps) -> Html {
    let lang = use_language();
    let item = &props.item;
    let class = if item.is_available { "menu-item" } else { "menu-item unavailable" };

    html! {
        <div class={class}>
            <div class="menu-item-body">
                <h4>{item.name.get(&lang.language).to_string()}</h4>
                if let Some(note) = &item.note {
                    <p class="menu-item-note">{note.get(&lang.language).to_string()}</p>
                }
                if !item.is_available {
                    <p class="menu-item-note">{lang.t("unavailable")}</p>
                }
            </div>
            <div class="menu-item-price">
                <p>{format_price(&item.price, &lang.language)}</p>
            </div>
        </div>
    }
}

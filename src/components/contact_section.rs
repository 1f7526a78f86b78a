use yew::prelude::*;

use crate::config::CONFIG;
use crate::context::language::use_language;
use crate::models::contact::{ContactInfo, OrderAction};
use crate::services::open_order_action;

fn action_callback(action: OrderAction) -> Callback<MouseEvent> {
    Callback::from(move |_e: MouseEvent| open_order_action(&action))
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let lang = use_language();
    let info = use_memo((), |_| ContactInfo::from_config(&CONFIG.contact));

    html! {
        <div class="section contact-section">
            <div class="container">
                <div class="section-heading">
                    <h2>{lang.t("contactTitle")}</h2>
                    <p>{lang.t("contactSubtitle")}</p>
                </div>

                <div class="ordering-grid">
                    { for info.ordering_options().into_iter().map(|option| html! {
                        <div class="card ordering-card" onclick={action_callback(option.action.clone())}>
                            <div class={classes!("ordering-icon", option.channel.css_class())}>
                                {option.channel.icon()}
                            </div>
                            <h3>{option.title.get(&lang.language).to_string()}</h3>
                            <p>{option.description.get(&lang.language).to_string()}</p>
                        </div>
                    }) }
                </div>

                <div class="contact-grid">
                    <div class="card">
                        <h3 class="card-title">{lang.t("contactInformation")}</h3>
                        <div class="contact-row">
                            <span class="contact-icon">{"📞"}</span>
                            <div>
                                <h4>{lang.t("phoneNumbers")}</h4>
                                <p>{info.phone_primary.clone()}</p>
                                <p>{info.phone_secondary.clone()}</p>
                            </div>
                        </div>
                        <div class="contact-row">
                            <span class="contact-icon">{"💬"}</span>
                            <div>
                                <h4>{lang.t("whatsapp")}</h4>
                                <p>{info.whatsapp.clone()}</p>
                            </div>
                        </div>
                        <div class="contact-row">
                            <span class="contact-icon">{"📍"}</span>
                            <div>
                                <h4>{lang.t("address")}</h4>
                                <p>{info.address.get(&lang.language).to_string()}</p>
                            </div>
                        </div>
                        <div class="contact-row">
                            <span class="contact-icon">{"🕒"}</span>
                            <div>
                                <h4>{lang.t("operatingHours")}</h4>
                                <p>{info.hours.get(&lang.language).to_string()}</p>
                            </div>
                        </div>
                    </div>

                    <div class="card">
                        <h3 class="card-title">{lang.t("quickOrder")}</h3>
                        <p>{lang.t("quickOrderPrompt")}</p>
                        <button class="btn btn-primary btn-block" onclick={action_callback(info.call_action())}>
                            {"📞 "}{lang.t("callNow")}
                        </button>
                        <button class="btn btn-outline btn-block" onclick={action_callback(info.whatsapp_action())}>
                            {"💬 "}{lang.t("whatsappOrder")}
                        </button>
                        <div class="delivery-buttons">
                            <button class="btn btn-secondary" onclick={action_callback(info.swiggy_action())}>
                                {"🍴 Swiggy"}
                            </button>
                            <button class="btn btn-secondary" onclick={action_callback(info.zomato_action())}>
                                {"🚚 Zomato"}
                            </button>
                        </div>
                        <div class="delivery-banner">
                            <p>{lang.t("freeDelivery")}</p>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

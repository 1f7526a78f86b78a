use yew::prelude::*;

use crate::context::language::use_language;

#[function_component(Footer)]
pub fn footer() -> Html {
    let lang = use_language();

    html! {
        <footer class="site-footer">
            <div class="container">
                <h3>{lang.t("footerName")}</h3>
                <p class="footer-tagline">{lang.t("tagline")}</p>
                <p class="footer-copyright">{lang.t("copyright")}</p>
            </div>
        </footer>
    }
}

// ============================================================================
// APP - page shell
// ============================================================================
// LanguageProvider > MenuDataProvider > Header + sections + Footer.
// Owns the active navigation section.
// ============================================================================

use yew::prelude::*;

use super::{ContactSection, Footer, Header, HeroSection, MenuSection, SpecialsSection};
use crate::context::language::LanguageProvider;
use crate::hooks::use_menu_data::MenuDataProvider;
use crate::models::section::Section;
use crate::services::scroll_to_section;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <LanguageProvider>
            <MenuDataProvider>
                <PageShell />
            </MenuDataProvider>
        </LanguageProvider>
    }
}

#[function_component(PageShell)]
pub fn page_shell() -> Html {
    let active_section = use_state(Section::default);

    let on_section_change = {
        let active_section = active_section.clone();
        Callback::from(move |section: Section| {
            log::debug!("🧭 [NAV] {}", section.id());
            active_section.set(section);
            scroll_to_section(section.id());
        })
    };

    let on_view_menu = {
        let on_section_change = on_section_change.clone();
        Callback::from(move |_| on_section_change.emit(Section::Menu))
    };

    html! {
        <div class="page">
            <Header active_section={*active_section} on_section_change={on_section_change} />

            <main>
                <section id={Section::Home.id()}>
                    <HeroSection on_view_menu={on_view_menu} />
                </section>
                <section id={Section::Menu.id()}>
                    <MenuSection />
                </section>
                <section id={Section::Specials.id()}>
                    <SpecialsSection />
                </section>
                <section id={Section::Contact.id()}>
                    <ContactSection />
                </section>
            </main>

            <Footer />
        </div>
    }
}

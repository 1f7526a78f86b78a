// ============================================================================
// USE MENU DATA HOOK
// ============================================================================
// Loads the menu once on mount and on every refresh. The document is only
// ever replaced whole; a failed load keeps the previous one.
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::config::CONFIG;
use crate::models::menu::MenuDocument;
use crate::services::{MenuLoadError, MenuService};

#[derive(Clone, PartialEq, Debug)]
pub struct MenuState {
    pub document: Option<Rc<MenuDocument>>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for MenuState {
    fn default() -> Self {
        Self {
            document: None,
            loading: true,
            error: None,
        }
    }
}

impl MenuState {
    pub fn begin_load(&self) -> Self {
        Self {
            document: self.document.clone(),
            loading: true,
            error: None,
        }
    }

    pub fn finish_load(&self, result: Result<MenuDocument, MenuLoadError>) -> Self {
        match result {
            Ok(document) => Self {
                document: Some(Rc::new(document)),
                loading: false,
                error: None,
            },
            Err(e) => Self {
                document: self.document.clone(),
                loading: false,
                error: Some(e.to_string()),
            },
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct UseMenuDataHandle {
    pub state: UseStateHandle<MenuState>,
    pub refresh: Callback<()>,
}

impl UseMenuDataHandle {
    pub fn document(&self) -> Option<Rc<MenuDocument>> {
        self.state.document.clone()
    }

    pub fn loading(&self) -> bool {
        self.state.loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.error.clone()
    }
}

fn run_load(state: UseStateHandle<MenuState>) {
    state.set(state.begin_load());
    wasm_bindgen_futures::spawn_local(async move {
        let service = MenuService::from_config(&CONFIG);
        let result = service.load().await;
        if let Err(e) = &result {
            log::error!("❌ [MENU] {}", e);
        }
        // Overlapping refreshes are not serialized: last write wins
        state.set(state.finish_load(result));
    });
}

#[hook]
pub fn use_menu_data() -> UseMenuDataHandle {
    let state = use_state(MenuState::default);

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            run_load(state);
            || ()
        });
    }

    let refresh = {
        let state = state.clone();
        Callback::from(move |_| {
            log::info!("🔄 [MENU] Refresh requested");
            run_load(state.clone());
        })
    };

    UseMenuDataHandle { state, refresh }
}

/// Shares one menu load between the menu and specials sections
#[function_component(MenuDataProvider)]
pub fn menu_data_provider(props: &MenuDataProviderProps) -> Html {
    let handle = use_menu_data();

    html! {
        <ContextProvider<UseMenuDataHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<UseMenuDataHandle>>
    }
}

#[derive(Properties, PartialEq)]
pub struct MenuDataProviderProps {
    pub children: Children,
}

use std::rc::Rc;

use yew::prelude::*;
use log::{error, info};

mod config;
mod content;
mod view {
    pub mod layout;
    pub mod reveal;
    pub mod chrome;
    pub mod store;
    pub mod dom;
}
mod components {
    pub mod nav;
    pub mod animated_section;
    pub mod scroll_top;
    pub mod contact_form;
    pub mod footer;
}
mod pages {
    pub mod portfolio;
}

use content::Portfolio;
use pages::portfolio::PortfolioPage;


#[function_component]
fn App() -> Html {
    let content = use_memo(|_| Portfolio::bundled().map(Rc::new), ());

    match &*content {
        Ok(content) => html! {
            <PortfolioPage content={content.clone()} />
        },
        Err(e) => {
            error!("Failed to load page content: {}", e);
            html! {
                <div class="content-error" style="padding: 4rem; text-align: center;">
                    <h1>{"Something went wrong"}</h1>
                    <p>{"This page could not be loaded. Please try again later."}</p>
                </div>
            }
        }
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(e) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting portfolio");
    yew::Renderer::<App>::new().render();
}

use yew::prelude::*;
use web_sys::MouseEvent;

use crate::content::{section_id, NavLink};
use crate::view::store::{ViewAction, ViewContext};

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub brand: AttrValue,
    pub links: Vec<NavLink>,
    pub store: ViewContext,
}

fn render_link(link: &NavLink, active: bool, onclick: Option<Callback<MouseEvent>>) -> Html {
    html! {
        <a
            href={format!("#{}", link.id)}
            class={classes!("nav-link", active.then(|| "active"))}
            onclick={onclick}
        >
            <span class="nav-icon">{&link.icon}</span>
            {&link.label}
        </a>
    }
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { brand, links, store } = props;
    let chrome = store.chrome();
    let menu_open = store.menu_open();

    let toggle_menu = {
        let store = store.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            store.dispatch(ViewAction::ToggleMenu);
        })
    };

    // No prevent_default here, the anchor still has to jump
    let close_menu = {
        let store = store.clone();
        Callback::from(move |_: MouseEvent| {
            store.dispatch(ViewAction::Navigate);
        })
    };

    html! {
        <header class={classes!("top-nav", chrome.nav_opaque.then(|| "scrolled"))}>
            <div class="nav-content">
                <a href={format!("#{}", section_id::HOME)} class="nav-logo">
                    <span class="gradient-text">{brand}</span>
                </a>

                <nav class="nav-desktop">
                    { for links.iter().map(|link| render_link(link, store.is_active(&link.id), None)) }
                    <a href={format!("#{}", section_id::CONTACT)} class="btn btn-primary">{"✉ Contact"}</a>
                </nav>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle navigation">
                    { if menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            {
                if menu_open {
                    html! {
                        <div class="mobile-menu">
                            { for links.iter().map(|link| {
                                render_link(link, store.is_active(&link.id), Some(close_menu.clone()))
                            }) }
                            <a href={format!("#{}", section_id::CONTACT)} class="btn btn-primary" onclick={close_menu.clone()}>
                                {"✉ Contact"}
                            </a>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        padding: 1.25rem 0;
                        background: transparent;
                        transition: all 0.3s ease;
                    }
                    .top-nav.scrolled {
                        padding: 0.75rem 0;
                        background: rgba(255, 255, 255, 0.9);
                        backdrop-filter: blur(4px);
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                    }
                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 1rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .nav-logo {
                        font-size: 1.5rem;
                        font-weight: 700;
                        text-decoration: none;
                    }
                    .nav-desktop {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }
                    .nav-link {
                        display: flex;
                        align-items: center;
                        gap: 0.25rem;
                        color: #374151;
                        text-decoration: none;
                        position: relative;
                    }
                    .nav-link.active {
                        color: #4f46e5;
                    }
                    .nav-link.active::after {
                        content: '';
                        position: absolute;
                        left: 0;
                        right: 0;
                        bottom: -4px;
                        height: 2px;
                        background: #4f46e5;
                    }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        font-size: 1.5rem;
                        color: #374151;
                        cursor: pointer;
                    }
                    .mobile-menu {
                        display: none;
                        flex-direction: column;
                        gap: 1rem;
                        padding: 1rem;
                        background: white;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        animation: menuOpen 0.2s ease-out;
                    }
                    @keyframes menuOpen {
                        from { opacity: 0; transform: translateY(-8px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @media (max-width: 768px) {
                        .nav-desktop { display: none; }
                        .burger-menu { display: block; }
                        .mobile-menu { display: flex; }
                    }
                "#}
            </style>
        </header>
    }
}

use yew::prelude::*;
use web_sys::MouseEvent;

use crate::view::dom::scroll_to_top;
use crate::view::store::ViewContext;

#[derive(Properties, PartialEq)]
pub struct ScrollTopProps {
    pub store: ViewContext,
}

#[function_component(ScrollTopButton)]
pub fn scroll_top_button(props: &ScrollTopProps) -> Html {
    if !props.store.chrome().show_scroll_top {
        return html! {};
    }

    let onclick = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_top();
    });

    html! {
        <button class="scroll-top" onclick={onclick} aria-label="Back to top">
            {"↑"}
            <style>
                {r#"
                    .scroll-top {
                        position: fixed;
                        bottom: 2rem;
                        right: 2rem;
                        width: 3rem;
                        height: 3rem;
                        border: none;
                        border-radius: 9999px;
                        background: #4f46e5;
                        color: white;
                        font-size: 1.5rem;
                        cursor: pointer;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
                        animation: scrollTopIn 0.3s ease-out;
                        z-index: 40;
                    }
                    .scroll-top:hover {
                        background: #4338ca;
                    }
                    @keyframes scrollTopIn {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                "#}
            </style>
        </button>
    }
}

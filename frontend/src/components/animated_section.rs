use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::ViewConfig;
use crate::view::dom::use_reveal_observer;
use crate::view::reveal::{stagger_delay, Entrance, RevealState};
use crate::view::store::{ViewAction, ViewState};

/// Reveal state of the enclosing section, for nested reveal items.
#[derive(Clone, PartialEq)]
pub struct RevealContext {
    pub state: RevealState,
    pub config: ViewConfig,
}

fn entrance_style(entrance: Entrance, config: &ViewConfig, delay: f64) -> String {
    let (dx, dy) = entrance.hidden_offset(config);
    format!(
        "--reveal-dx: {}px; --reveal-dy: {}px; --reveal-duration: {}s; transition-delay: {:.1}s;",
        dx, dy, config.entry_duration_secs, delay
    )
}

/// Holds nothing scroll-derived, so a scroll frame leaves these props equal.
#[derive(Properties, PartialEq)]
pub struct AnimatedSectionProps {
    pub id: AttrValue,
    pub reveal: RevealState,
    pub config: ViewConfig,
    pub dispatcher: UseReducerDispatcher<ViewState>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// A page section whose content fades in the first time it scrolls into view.
#[function_component(AnimatedSection)]
pub fn animated_section(props: &AnimatedSectionProps) -> Html {
    let node = use_node_ref();
    let config = props.config;
    let state = props.reveal;

    {
        let dispatcher = props.dispatcher.clone();
        let id = props.id.to_string();
        use_mount(move || dispatcher.dispatch(ViewAction::SectionMounted(id)));
    }
    {
        let dispatcher = props.dispatcher.clone();
        let id = props.id.to_string();
        use_unmount(move || dispatcher.dispatch(ViewAction::SectionUnmounted(id)));
    }
    use_reveal_observer(
        props.id.clone(),
        node.clone(),
        config.reveal_threshold,
        props.dispatcher.clone(),
    );

    let context = RevealContext { state, config };

    html! {
        <section id={props.id.clone()} class={classes!("page-section", props.class.clone())}>
            <ContextProvider<RevealContext> context={context}>
                <div
                    ref={node}
                    class={classes!("container", "reveal", Entrance::FadeUp.class(), state.class())}
                    style={entrance_style(Entrance::FadeUp, &config, 0.0)}
                >
                    { for props.children.iter() }
                </div>
            </ContextProvider<RevealContext>>
        </section>
    }
}

fn standalone_reveal() -> RevealContext {
    // Outside an animated section there is nothing to wait for
    RevealContext {
        state: RevealState::Revealed,
        config: ViewConfig::default(),
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealItemProps {
    #[prop_or_default]
    pub entrance: Entrance,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Block that follows its section's reveal with its own entrance.
#[function_component(RevealItem)]
pub fn reveal_item(props: &RevealItemProps) -> Html {
    let reveal = use_context::<RevealContext>().unwrap_or_else(standalone_reveal);

    html! {
        <div
            class={classes!("reveal", props.entrance.class(), reveal.state.class(), props.class.clone())}
            style={entrance_style(props.entrance, &reveal.config, 0.0)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StaggerGroupProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Reveals its direct children one after another.
#[function_component(StaggerGroup)]
pub fn stagger_group(props: &StaggerGroupProps) -> Html {
    let reveal = use_context::<RevealContext>().unwrap_or_else(standalone_reveal);

    html! {
        <div class={classes!("stagger", props.class.clone())}>
            { for props.children.iter().enumerate().map(|(index, child)| {
                let delay = stagger_delay(index, &reveal.config);
                html! {
                    <div
                        class={classes!("reveal", Entrance::FadeUp.class(), reveal.state.class())}
                        style={entrance_style(Entrance::FadeUp, &reveal.config, delay)}
                    >
                        { child }
                    </div>
                }
            }) }
        </div>
    }
}

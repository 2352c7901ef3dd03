use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::content::Profile;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub profile: Profile,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let profile = &props.profile;
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div>
                    <h2><span class="gradient-text">{&profile.brand}</span></h2>
                    <p class="footer-role">{&profile.role}</p>
                </div>
                <div class="footer-links">
                    <a href={profile.github_url.clone()} target="_blank" rel="noopener noreferrer">{"GitHub"}</a>
                    <a href={profile.linkedin_url.clone()} target="_blank" rel="noopener noreferrer">{"LinkedIn"}</a>
                    <a href={format!("mailto:{}", profile.email)}>{"Email"}</a>
                </div>
            </div>
            <p class="copyright">
                {format!("© {} {}. All rights reserved.", year, profile.name)}
            </p>
        </footer>
    }
}

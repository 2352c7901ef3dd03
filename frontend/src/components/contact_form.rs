use log::info;
use yew::prelude::*;

/// Message form. There is no endpoint behind it yet, so a submit only
/// stays on the page.
#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let onsubmit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        info!("Contact form submitted with no endpoint configured");
    });

    html! {
        <form class="contact-form" onsubmit={onsubmit}>
            <div class="form-row">
                <div class="form-field">
                    <label for="name">{"Name"}</label>
                    <input type="text" id="name" placeholder="Your Name" />
                </div>
                <div class="form-field">
                    <label for="email">{"Email"}</label>
                    <input type="email" id="email" placeholder="Your Email" />
                </div>
            </div>
            <div class="form-field">
                <label for="subject">{"Subject"}</label>
                <input type="text" id="subject" placeholder="Subject" />
            </div>
            <div class="form-field">
                <label for="message">{"Message"}</label>
                <textarea id="message" rows="5" placeholder="Your Message"></textarea>
            </div>
            <button type="submit" class="btn btn-primary">{"💬 Send Message"}</button>
        </form>
    }
}

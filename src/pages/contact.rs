use yew::prelude::*;

use crate::components::forms::ContactForm;

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    html! {
        <div class="container contact">
            <h2 class="section__title">{"Contact Us"}</h2>
            <div class="contact__info">
                <p>{"hello@thinkbitedge.org"}</p>
                <p>{"(555) 014-2290"}</p>
                <p>{"Mon-Fri, 9am-5pm"}</p>
            </div>
            <ContactForm />
        </div>
    }
}

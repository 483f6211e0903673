use yew::prelude::*;

use crate::actions::ActionKind;
use crate::components::action_button::ActionButton;
use crate::components::forms::NewsletterForm;
use crate::components::reveal::Reveal;
use crate::reveal::RevealRole;

#[function_component(GetInvolvedSection)]
pub fn get_involved_section() -> Html {
    html! {
        <div class="container">
            <h2 class="section__title">{"Get Involved"}</h2>
            <div class="involvement-grid">
                <Reveal role={RevealRole::InvolvementCard} index={0}>
                    <h3>{"Volunteer"}</h3>
                    <p>{"Mentor a student, lead a workshop or help at weekend labs."}</p>
                    <ActionButton action={ActionKind::VolunteerSignup} label="Volunteer Now" />
                </Reveal>
                <Reveal role={RevealRole::InvolvementCard} index={1}>
                    <h3>{"Donate"}</h3>
                    <p>{"Every gift funds laptops, kits and free seats in our programs."}</p>
                    <ActionButton action={ActionKind::Donation} label="Donate" />
                </Reveal>
                <Reveal role={RevealRole::InvolvementCard} index={2}>
                    <h3>{"Partner"}</h3>
                    <p>{"Schools and companies can host programs or sponsor a cohort."}</p>
                    <ActionButton
                        action={ActionKind::PartnershipInquiry}
                        label="Partner With Us"
                        class={classes!("btn", "btn--outline")}
                    />
                </Reveal>
            </div>
            <div class="newsletter">
                <h3>{"Stay in the loop"}</h3>
                <p>{"Program news and student stories, once a month."}</p>
                <NewsletterForm />
            </div>
        </div>
    }
}

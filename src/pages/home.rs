use yew::prelude::*;

use crate::components::counter::Counter;
use crate::components::reveal::Reveal;
use crate::components::section::SectionLink;
use crate::reveal::RevealRole;

const METRICS: &[(&str, &str, &str)] = &[
    ("2500", "+", "Students Reached"),
    ("45", "", "Partner Schools"),
    ("92", "%", "Program Completion"),
    ("120", "+", "Volunteer Mentors"),
];

#[function_component(HomeSection)]
pub fn home_section() -> Html {
    html! {
        <>
            <div class="hero">
                <div class="container hero__content">
                    <h1 class="hero__title">{"Empowering Youth Through Technology"}</h1>
                    <p class="hero__subtitle">
                        {"ThinkBit Edge Corp opens doors to coding, robotics and digital literacy for young people who would otherwise never get the chance."}
                    </p>
                    <div class="hero__actions">
                        <SectionLink href="#programs" class={classes!("btn", "btn--primary", "btn--lg")}>
                            {"Explore Programs"}
                        </SectionLink>
                        <SectionLink href="#get-involved" class={classes!("btn", "btn--outline", "btn--lg")}>
                            {"Get Involved"}
                        </SectionLink>
                    </div>
                </div>
            </div>
            <div class="container metrics">
                { for METRICS.iter().enumerate().map(|(index, (target, suffix, label))| html! {
                    <Reveal role={RevealRole::Metric} index={index}>
                        <Counter target={*target} suffix={*suffix} />
                        <p class="metric__label">{*label}</p>
                    </Reveal>
                }) }
            </div>
        </>
    }
}

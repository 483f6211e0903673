use yew::prelude::*;

use crate::actions::ActionKind;
use crate::components::action_button::ActionButton;
use crate::components::reveal::Reveal;
use crate::reveal::RevealRole;

const PROGRAMS: &[(&str, &str, &str)] = &[
    (
        "Code Foundations",
        "Ages 10-13",
        "Block-based and Python programming through games and storytelling.",
    ),
    (
        "Robotics Lab",
        "Ages 12-17",
        "Design, wire and program robots for regional competitions.",
    ),
    (
        "Digital Futures",
        "Ages 15-18",
        "Web development, internships and portfolio reviews with industry mentors.",
    ),
];

#[function_component(ProgramsSection)]
pub fn programs_section() -> Html {
    html! {
        <div class="container">
            <h2 class="section__title">{"Our Programs"}</h2>
            <div class="programs-grid">
                { for PROGRAMS.iter().enumerate().map(|(index, (name, ages, summary))| html! {
                    <Reveal role={RevealRole::ProgramCard} index={index}>
                        <h3>{*name}</h3>
                        <span class="program-card__ages">{*ages}</span>
                        <p>{*summary}</p>
                        <ActionButton
                            action={ActionKind::ProgramApplication { program: name.to_string() }}
                            label="Apply Now"
                            aria_label={AttrValue::from(format!("Apply to {}", name))}
                        />
                    </Reveal>
                }) }
            </div>
        </div>
    }
}

use yew::prelude::*;

use crate::components::counter::Counter;
use crate::components::reveal::Reveal;
use crate::reveal::RevealRole;

const STATS: &[(&str, &str, &str)] = &[
    ("15000", "+", "Hours of Instruction"),
    ("87", "%", "Pursue STEM Studies"),
    ("60", "", "Scholarships Awarded"),
];

const STORIES: &[(&str, &str)] = &[
    (
        "Jasmine, 16",
        "Built an app that helps her neighbourhood food bank track donations.",
    ),
    (
        "Marcus, 14",
        "Went from his first line of code to captaining our robotics team in two years.",
    ),
];

#[function_component(ImpactSection)]
pub fn impact_section() -> Html {
    html! {
        <div class="container">
            <h2 class="section__title">{"Our Impact"}</h2>
            <div class="impact-stats">
                { for STATS.iter().enumerate().map(|(index, (target, suffix, label))| html! {
                    <Reveal role={RevealRole::ImpactStat} index={index}>
                        <Counter target={*target} class="impact-stat__number" suffix={*suffix} />
                        <p class="impact-stat__label">{*label}</p>
                    </Reveal>
                }) }
            </div>
            <div class="stories">
                { for STORIES.iter().enumerate().map(|(index, (name, story))| html! {
                    <Reveal role={RevealRole::StoryCard} index={index}>
                        <blockquote>{*story}</blockquote>
                        <cite>{*name}</cite>
                    </Reveal>
                }) }
            </div>
        </div>
    }
}

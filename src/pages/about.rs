use yew::prelude::*;

use crate::components::counter::Counter;
use crate::components::reveal::Reveal;
use crate::reveal::RevealRole;

const TIMELINE: &[(&str, &str)] = &[
    ("2016", "Founded as a weekend coding club in a borrowed classroom."),
    ("2018", "First robotics team competes at the state championship."),
    ("2021", "Digital literacy curriculum adopted by 20 partner schools."),
    ("2024", "Opened the Edge Lab, a free makerspace for teens."),
];

const VALUES: &[(&str, &str)] = &[
    ("Access", "Every program is free for the students we serve."),
    ("Curiosity", "We teach by building, breaking and rebuilding."),
    ("Community", "Mentors, families and schools learn alongside students."),
];

const TEAM: &[(&str, &str)] = &[
    ("Amara Okafor", "Executive Director"),
    ("Luis Ortega", "Head of Programs"),
    ("Mei Chen", "Community Partnerships"),
];

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    html! {
        <div class="container">
            <h2 class="section__title">{"About Us"}</h2>
            <div class="mission-vision">
                <Reveal role={RevealRole::MissionVisionItem} index={0}>
                    <h3>{"Our Mission"}</h3>
                    <p>{"Equip young people with the technical skills and confidence to shape the digital world."}</p>
                </Reveal>
                <Reveal role={RevealRole::MissionVisionItem} index={1}>
                    <h3>{"Our Vision"}</h3>
                    <p>{"A future where every student can see themselves as a builder of technology."}</p>
                </Reveal>
            </div>
            <div class="about__stats">
                <Counter target="8" class="metric__number" suffix=" years" />
                <Counter target="30" class="metric__number" suffix=" programs run" />
            </div>
            <div class="timeline">
                { for TIMELINE.iter().enumerate().map(|(index, (year, text))| html! {
                    <Reveal role={RevealRole::TimelineItem} index={index}>
                        <span class="timeline__year">{*year}</span>
                        <p>{*text}</p>
                    </Reveal>
                }) }
            </div>
            <div class="values">
                { for VALUES.iter().enumerate().map(|(index, (name, text))| html! {
                    <Reveal role={RevealRole::ValueCard} index={index}>
                        <h4>{*name}</h4>
                        <p>{*text}</p>
                    </Reveal>
                }) }
            </div>
            <div class="team">
                { for TEAM.iter().enumerate().map(|(index, (name, role))| html! {
                    <Reveal role={RevealRole::TeamMember} index={index}>
                        <h4>{*name}</h4>
                        <p class="team-member__role">{*role}</p>
                    </Reveal>
                }) }
            </div>
        </div>
    }
}

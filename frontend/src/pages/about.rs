use yew::prelude::*;

use crate::components::team_member::TeamMember;

struct TeamProfile {
    name: &'static str,
    role: &'static str,
    bio: &'static str,
    image_src: &'static str,
    email: &'static str,
}

const TEAM: &[TeamProfile] = &[
    TeamProfile {
        name: "Sukin Yang",
        role: "CEO",
        bio: "Sets the direction for Tri-Snap and keeps the team pointed at patients.",
        image_src: "/images/team/sukin.jpg",
        email: "sukin@tri-snap.com",
    },
    TeamProfile {
        name: "Andrew Wu",
        role: "COO",
        bio: "Runs operations, partnerships and everything between the clinic and the app.",
        image_src: "/images/team/andrew.jpg",
        email: "andrew.wu@tri-snap.com",
    },
    TeamProfile {
        name: "Thien Hoang",
        role: "CTO",
        bio: "Builds the triage engine and keeps the lights on.",
        image_src: "/images/team/thien.jpg",
        email: "thien@tri-snap.com",
    },
];

#[function_component(TeamSection)]
pub fn team_section() -> Html {
    html! {
        <section id="about" class="team-section">
            <div class="section-heading">
                <h2>{"Meet Our Team"}</h2>
                <p>{"We believe Generative AI is safe enough for diagnosis."}</p>
            </div>
            <div class="team-grid">
                { for TEAM.iter().map(|member| html! {
                    <TeamMember
                        name={member.name}
                        role={member.role}
                        bio={member.bio}
                        image_src={member.image_src}
                        linkedin={Some(AttrValue::from("https://linkedin.com"))}
                        email={Some(AttrValue::from(member.email))}
                    />
                }) }
            </div>
            <style>
                {r#"
                .team-section {
                    padding: 5rem 2rem;
                }
                .team-grid {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 2rem;
                }
                "#}
            </style>
        </section>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="page page-about">
            <TeamSection />
        </div>
    }
}

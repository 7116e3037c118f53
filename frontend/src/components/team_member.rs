use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TeamMemberProps {
    pub name: AttrValue,
    pub role: AttrValue,
    pub bio: AttrValue,
    pub image_src: AttrValue,
    #[prop_or_default]
    pub linkedin: Option<AttrValue>,
    #[prop_or_default]
    pub email: Option<AttrValue>,
}

#[function_component(TeamMember)]
pub fn team_member(props: &TeamMemberProps) -> Html {
    let hovered = use_state(|| false);

    let on_enter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let on_leave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    html! {
        <div class="team-member" onmouseenter={on_enter} onmouseleave={on_leave}>
            <div class="team-member__photo">
                <img
                    src={props.image_src.clone()}
                    alt={props.name.clone()}
                    style={if *hovered { "transform: scale(1.05);" } else { "transform: scale(1);" }}
                />
                <div class="team-member__caption">
                    <h3>{ props.name.clone() }</h3>
                    <p>{ props.role.clone() }</p>
                </div>
            </div>
            <div class="team-member__body">
                <p>{ props.bio.clone() }</p>
                <div class="team-member__links">
                    if let Some(url) = props.linkedin.clone() {
                        <a href={url} target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">{"in"}</a>
                    }
                    if let Some(email) = props.email.clone() {
                        <a href={format!("mailto:{}", email)} aria-label="Email">{"✉"}</a>
                    }
                </div>
            </div>
            <style>
                {r#"
                .team-member {
                    background: white;
                    border-radius: 0.75rem;
                    overflow: hidden;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.08);
                }
                .team-member__photo {
                    position: relative;
                    height: 16rem;
                    overflow: hidden;
                    background: #e2e8f0;
                }
                .team-member__photo img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.5s ease;
                }
                .team-member__caption {
                    position: absolute;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    padding: 1.5rem;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.7), transparent);
                    color: white;
                }
                .team-member__caption h3 {
                    margin: 0;
                    font-size: 1.25rem;
                }
                .team-member__caption p {
                    margin: 0;
                    color: #a7f3d0;
                }
                .team-member__body {
                    padding: 1.5rem;
                    color: #374151;
                }
                .team-member__links {
                    display: flex;
                    gap: 0.75rem;
                }
                .team-member__links a {
                    width: 2.25rem;
                    height: 2.25rem;
                    border-radius: 50%;
                    background: rgba(0, 169, 157, 0.1);
                    color: #00A99D;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-decoration: none;
                    font-weight: 700;
                }
                "#}
            </style>
        </div>
    }
}

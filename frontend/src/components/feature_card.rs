use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub icon: AttrValue,
    pub title: AttrValue,
    pub description: AttrValue,
    #[prop_or_default]
    pub delay_ms: u32,
    /// Compact cards are used for the connection modes grid.
    #[prop_or_default]
    pub compact: bool,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    html! {
        <div
            class={classes!("feature-card", props.compact.then_some("feature-card--compact"))}
            style={format!("animation-delay: {}ms", props.delay_ms)}
        >
            <div class="feature-card__icon">{ props.icon.clone() }</div>
            <h3>{ props.title.clone() }</h3>
            <p>{ props.description.clone() }</p>
        </div>
    }
}

/// Card styles, rendered once per page that uses cards.
#[function_component(FeatureCardStyles)]
pub fn feature_card_styles() -> Html {
    html! {
        <style>
            {r#"
            .feature-card {
                background: rgba(255, 255, 255, 0.9);
                backdrop-filter: blur(8px);
                padding: 2rem;
                border-radius: 0.75rem;
                box-shadow: 0 10px 15px rgba(0, 0, 0, 0.08);
                opacity: 0;
                animation: cardIn 0.5s ease-out forwards;
                transition: transform 0.3s ease, box-shadow 0.3s ease;
            }
            .feature-card:hover {
                transform: translateY(-10px);
                box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04);
            }
            .feature-card__icon {
                width: 4rem;
                height: 4rem;
                margin-bottom: 1.5rem;
                border-radius: 50%;
                background: rgba(0, 169, 157, 0.1);
                display: flex;
                align-items: center;
                justify-content: center;
                font-size: 1.75rem;
            }
            .feature-card h3 {
                color: #0f3d57;
                font-size: 1.25rem;
                margin-bottom: 1rem;
            }
            .feature-card p {
                color: #374151;
                line-height: 1.6;
            }
            .feature-card--compact {
                padding: 1.5rem;
                text-align: center;
            }
            .feature-card--compact .feature-card__icon {
                margin: 0 auto 1rem;
            }
            .feature-card--compact h3 {
                font-size: 1.1rem;
                margin-bottom: 0.5rem;
            }
            @keyframes cardIn {
                from { opacity: 0; transform: translateY(20px); }
                to { opacity: 1; transform: translateY(0); }
            }
            "#}
        </style>
    }
}

use yew::prelude::*;

use crate::components::{
    app_demo::AppDemo,
    call_demo::CallDemoView,
    contact_form::ContactForm,
    early_access_form::EarlyAccessForm,
    feature_card::{FeatureCard, FeatureCardStyles},
};
use crate::pages::about::TeamSection;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const WHY_TRI_SNAP: &[Feature] = &[
    Feature {
        icon: "⏱",
        title: "Instant Access",
        description: "Get immediate clinical triage without waiting for appointments or spending hours in waiting rooms.",
    },
    Feature {
        icon: "🩺",
        title: "Clinical Accuracy",
        description: "Powered by advanced AI trained on medical data to provide accurate initial assessments.",
    },
    Feature {
        icon: "🛡",
        title: "Privacy First",
        description: "Your health data is encrypted and secure, with privacy built into every aspect of our platform.",
    },
];

const WAYS_TO_CONNECT: &[Feature] = &[
    Feature {
        icon: "📷",
        title: "Photo",
        description: "Capture and analyze visible symptoms instantly.",
    },
    Feature {
        icon: "🎙",
        title: "Voice",
        description: "Describe symptoms verbally for hands-free interaction.",
    },
    Feature {
        icon: "💬",
        title: "Chat",
        description: "Text with our AI for detailed symptom assessment.",
    },
    Feature {
        icon: "🤟",
        title: "Sign Language",
        description: "Communicate using sign language for accessible care.",
    },
];

fn feature_grid(features: &[Feature], compact: bool) -> Html {
    html! {
        <div class={classes!("feature-grid", compact.then_some("feature-grid--four"))}>
            { for features.iter().enumerate().map(|(i, feature)| html! {
                <FeatureCard
                    icon={feature.icon}
                    title={feature.title}
                    description={feature.description}
                    delay_ms={i as u32 * 100}
                    compact={compact}
                />
            }) }
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="landing">
            <FeatureCardStyles />
            <section class="hero">
                <div class="hero__bubbles">
                    { for (0..6).map(|i| html! {
                        <span style={format!("left: {}%; animation-delay: {}s;", 8 + i * 15, i)}></span>
                    }) }
                </div>
                <div class="hero__grid">
                    <div class="hero__content">
                        <p class="hero__eyebrow">
                            {"World's first instant clinical triage straight from your smartphone."}
                        </p>
                        <h1>{"The Future of Healthcare is here."}</h1>
                        <p class="hero__text">
                            {"The fastest, most accurate, real-time way to access primary care, anytime, anywhere."}
                        </p>
                        <a href="#early-access" class="cta-button">
                            <span>{"Get Early Access"}</span>
                            <i class="arrow">{"→"}</i>
                        </a>
                    </div>
                    <div class="hero__demo">
                        <AppDemo />
                    </div>
                </div>
            </section>

            <section id="demo" class="landing-section">
                <div class="section-heading">
                    <h2>{"See Tri-Snap in Action"}</h2>
                    <p>{"Watch how Tri-Snap provides instant clinical triage with just a few taps on your smartphone."}</p>
                </div>
                <CallDemoView />
            </section>

            <section class="landing-section landing-section--tinted">
                <div class="section-heading">
                    <h2>{"Why Tri-Snap?"}</h2>
                </div>
                { feature_grid(WHY_TRI_SNAP, false) }
            </section>

            <section class="landing-section">
                <div class="section-heading">
                    <h2>{"Multiple Ways to Connect"}</h2>
                </div>
                { feature_grid(WAYS_TO_CONNECT, true) }
            </section>

            <TeamSection />

            <section id="early-access" class="landing-section landing-section--accent">
                <div class="section-heading">
                    <h2>{"Get Early Access"}</h2>
                    <p>{"Be among the first to experience the future of healthcare. Join our waitlist today."}</p>
                </div>
                <EarlyAccessForm />
            </section>

            <section id="contact" class="landing-section">
                <div class="section-heading">
                    <h2>{"Contact Us"}</h2>
                    <p>{"Have questions or feedback? We'd love to hear from you."}</p>
                </div>
                <ContactForm />
            </section>

            <style>
                {r#"
                .landing {
                    overflow-x: hidden;
                }
                .hero {
                    position: relative;
                    min-height: 100vh;
                    padding: 8rem 2rem 4rem;
                    background: linear-gradient(135deg, #e6f7f6, #ffffff 60%);
                    overflow: hidden;
                }
                .hero__bubbles span {
                    position: absolute;
                    bottom: -120px;
                    width: 80px;
                    height: 80px;
                    border-radius: 50%;
                    background: rgba(0, 169, 157, 0.08);
                    animation: floatUp 14s linear infinite;
                }
                .hero__grid {
                    position: relative;
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    align-items: center;
                    gap: 3rem;
                }
                .hero__eyebrow {
                    color: #00A99D;
                    font-weight: 600;
                }
                .hero h1 {
                    font-size: 3.5rem;
                    line-height: 1.1;
                    color: #0f3d57;
                    margin: 1rem 0;
                    animation: slideIn 0.8s ease-out;
                }
                .hero__text {
                    color: #374151;
                    font-size: 1.2rem;
                    line-height: 1.6;
                    margin-bottom: 2rem;
                }
                .hero__demo {
                    display: flex;
                    justify-content: center;
                }
                .landing-section {
                    padding: 5rem 2rem;
                }
                .landing-section--tinted {
                    background: #f1f5f9;
                }
                .landing-section--accent {
                    background: linear-gradient(to right, #0f3d57, #00A99D);
                }
                .landing-section--accent .section-heading h2,
                .landing-section--accent .section-heading p {
                    color: white;
                }
                .feature-grid {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .feature-grid--four {
                    grid-template-columns: repeat(4, 1fr);
                }
                @keyframes slideIn {
                    from { opacity: 0; transform: translateX(-50px); }
                    to { opacity: 1; transform: translateX(0); }
                }
                @keyframes floatUp {
                    from { transform: translateY(0); opacity: 0.8; }
                    to { transform: translateY(-120vh); opacity: 0; }
                }
                @media (max-width: 900px) {
                    .hero__grid, .feature-grid, .feature-grid--four {
                        grid-template-columns: 1fr;
                    }
                    .hero h1 {
                        font-size: 2.5rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}

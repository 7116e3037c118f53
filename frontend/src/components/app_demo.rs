use std::rc::Rc;

use yew::prelude::*;
use yew_hooks::use_interval;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DemoScreen {
    Chat,
    SignVideo,
    SignRecognition,
    VoiceCall,
}

impl DemoScreen {
    pub const ALL: [DemoScreen; 4] = [
        DemoScreen::Chat,
        DemoScreen::SignVideo,
        DemoScreen::SignRecognition,
        DemoScreen::VoiceCall,
    ];

    pub fn title(self) -> &'static str {
        match self {
            DemoScreen::Chat => "Tri-Snap",
            DemoScreen::SignVideo => "Sign Language",
            DemoScreen::SignRecognition => "Sign Recognition",
            DemoScreen::VoiceCall => "Voice Call",
        }
    }
}

/// Which phone screen the mockup shows. Cycles through every screen in
/// order and wraps around.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DemoCarousel {
    index: usize,
}

pub enum CarouselAction {
    Advance,
    Select(usize),
}

impl DemoCarousel {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn active(&self) -> DemoScreen {
        DemoScreen::ALL[self.index]
    }

    pub fn advance(&mut self) {
        self.index = (self.index + 1) % DemoScreen::ALL.len();
    }

    pub fn select(&mut self, index: usize) -> bool {
        if index >= DemoScreen::ALL.len() || index == self.index {
            return false;
        }
        self.index = index;
        true
    }
}

impl Reducible for DemoCarousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        let changed = match action {
            CarouselAction::Advance => {
                next.advance();
                true
            }
            CarouselAction::Select(index) => next.select(index),
        };
        if changed { next.into() } else { self }
    }
}

fn dot_class(carousel: &DemoCarousel, index: usize) -> Classes {
    classes!("demo-dot", (carousel.index() == index).then_some("active"))
}

fn render_screen(screen: DemoScreen) -> Html {
    let body = match screen {
        DemoScreen::Chat => html! {
            <div class="demo-chat">
                <div class="bubble bubble--bot">{"How can we help you today?"}</div>
                <div class="bubble bubble--user">
                    {"I've been having chest pain and shortness of breath since yesterday."}
                </div>
                <div class="typing"><span></span><span></span><span></span></div>
                <div class="demo-chat__input">{"Type your message..."}</div>
            </div>
        },
        DemoScreen::SignVideo => html! {
            <div class="demo-sign">
                <div class="demo-sign__frame">{"🤟"}</div>
                <div class="demo-sign__badge">{"Live translation"}</div>
            </div>
        },
        DemoScreen::SignRecognition => html! {
            <div class="demo-sign">
                <div class="demo-sign__frame">{"✋"}</div>
                <div class="demo-sign__badge">{"Analyzing gestures"}</div>
                <div class="demo-sign__result">{"Recognized: \"I need medical help\""}</div>
            </div>
        },
        DemoScreen::VoiceCall => html! {
            <div class="demo-voice">
                <div class="demo-voice__avatar">
                    <span class="wave"></span>
                    <span class="wave"></span>
                    <img src="/images/doctor.jpg" alt="Virtual Doctor" />
                </div>
                <div class="demo-voice__name">{"Dr. Sarah"}</div>
                <div class="demo-voice__bars">
                    { for (0..12).map(|i| html! {
                        <span style={format!("animation-delay: {}ms", i * 90)}></span>
                    }) }
                </div>
            </div>
        },
    };

    html! {
        <div class="demo-screen" key={screen.title()}>
            <div class="demo-screen__header">
                <span>{ screen.title() }</span>
            </div>
            { body }
        </div>
    }
}

#[function_component(AppDemo)]
pub fn app_demo() -> Html {
    let carousel = use_reducer(DemoCarousel::default);

    {
        let carousel = carousel.clone();
        use_interval(
            move || carousel.dispatch(CarouselAction::Advance),
            config::DEMO_SCREEN_INTERVAL_MS,
        );
    }

    let dots = DemoScreen::ALL.iter().enumerate().map(|(i, screen)| {
        let class = dot_class(&carousel, i);
        let dispatcher = carousel.dispatcher();
        let onclick = Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselAction::Select(i)));
        html! {
            <button
                class={class}
                aria-label={screen.title()}
                onclick={onclick}
            />
        }
    });

    html! {
        <div class="app-demo">
            <div class="phone-frame">
                <div class="phone-notch"></div>
                { render_screen(carousel.active()) }
            </div>
            <div class="demo-dots">{ for dots }</div>
            <style>
                {r#"
                .app-demo {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1.5rem;
                }
                .phone-frame {
                    position: relative;
                    width: 280px;
                    height: 560px;
                    border-radius: 40px;
                    border: 10px solid #111827;
                    background: #f8fafc;
                    overflow: hidden;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .phone-notch {
                    position: absolute;
                    top: 0;
                    left: 50%;
                    transform: translateX(-50%);
                    width: 40%;
                    height: 24px;
                    background: #111827;
                    border-radius: 0 0 16px 16px;
                    z-index: 2;
                }
                .demo-screen {
                    height: 100%;
                    display: flex;
                    flex-direction: column;
                    animation: fadeIn 0.5s ease;
                }
                .demo-screen__header {
                    padding: 2rem 1rem 0.75rem;
                    background: linear-gradient(to right, #0f3d57, #00A99D);
                    color: white;
                    font-weight: 600;
                    font-size: 0.875rem;
                }
                .demo-chat {
                    flex: 1;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    padding: 1rem;
                }
                .bubble {
                    max-width: 80%;
                    padding: 0.75rem;
                    border-radius: 1rem;
                    font-size: 0.875rem;
                }
                .bubble--bot {
                    background: #e6f7f6;
                    color: #0f3d57;
                    font-weight: 500;
                }
                .bubble--user {
                    align-self: flex-end;
                    background: #00A99D;
                    color: white;
                }
                .typing span {
                    display: inline-block;
                    width: 6px;
                    height: 6px;
                    margin-right: 3px;
                    border-radius: 50%;
                    background: #94a3b8;
                    animation: bounce 0.6s infinite;
                }
                .typing span:nth-child(2) { animation-delay: 0.15s; }
                .typing span:nth-child(3) { animation-delay: 0.3s; }
                .demo-chat__input {
                    margin-top: auto;
                    padding: 0.75rem 1rem;
                    border-radius: 9999px;
                    background: white;
                    color: #94a3b8;
                    font-size: 0.8rem;
                    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
                }
                .demo-sign {
                    flex: 1;
                    position: relative;
                    background: #0f172a;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    color: white;
                }
                .demo-sign__frame {
                    font-size: 6rem;
                    animation: wave 2s ease-in-out infinite;
                }
                .demo-sign__badge {
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    background: rgba(0, 169, 157, 0.8);
                    font-size: 0.75rem;
                }
                .demo-sign__result {
                    font-size: 0.8rem;
                    font-weight: 500;
                }
                .demo-voice {
                    flex: 1;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                }
                .demo-voice__avatar {
                    position: relative;
                    width: 128px;
                    height: 128px;
                }
                .demo-voice__avatar img {
                    position: relative;
                    width: 100%;
                    height: 100%;
                    border-radius: 50%;
                    object-fit: cover;
                }
                .wave {
                    position: absolute;
                    inset: 0;
                    border-radius: 50%;
                    border: 2px solid #00A99D;
                    animation: ripple 2s infinite;
                }
                .wave:nth-child(2) { animation-delay: 0.6s; }
                .demo-voice__name {
                    color: #0f3d57;
                    font-weight: 600;
                }
                .demo-voice__bars {
                    display: flex;
                    gap: 3px;
                    height: 32px;
                    align-items: center;
                }
                .demo-voice__bars span {
                    width: 4px;
                    height: 100%;
                    background: #00A99D;
                    border-radius: 2px;
                    animation: pulseBar 1s ease-in-out infinite;
                }
                .demo-dots {
                    display: flex;
                    gap: 0.5rem;
                }
                .demo-dot {
                    width: 10px;
                    height: 10px;
                    border: none;
                    border-radius: 50%;
                    background: #cbd5e1;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .demo-dot.active {
                    width: 24px;
                    border-radius: 5px;
                    background: #00A99D;
                }
                @keyframes fadeIn {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                @keyframes bounce {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(-3px); }
                }
                @keyframes wave {
                    0%, 100% { transform: rotate(-8deg); }
                    50% { transform: rotate(8deg); }
                }
                @keyframes ripple {
                    from { transform: scale(1); opacity: 0.6; }
                    to { transform: scale(1.5); opacity: 0; }
                }
                @keyframes pulseBar {
                    0%, 100% { transform: scaleY(0.3); }
                    50% { transform: scaleY(1); }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_wraps_after_last_screen() {
        let mut carousel = DemoCarousel::default();
        let seen: Vec<DemoScreen> = (0..5)
            .map(|_| {
                let screen = carousel.active();
                carousel.advance();
                screen
            })
            .collect();
        assert_eq!(
            seen,
            vec![
                DemoScreen::Chat,
                DemoScreen::SignVideo,
                DemoScreen::SignRecognition,
                DemoScreen::VoiceCall,
                DemoScreen::Chat,
            ]
        );
    }

    #[test]
    fn select_ignores_out_of_range_and_current() {
        let mut carousel = DemoCarousel::default();
        assert!(!carousel.select(0));
        assert!(!carousel.select(4));
        assert_eq!(carousel.index(), 0);

        assert!(carousel.select(3));
        assert_eq!(carousel.active(), DemoScreen::VoiceCall);
        carousel.advance();
        assert_eq!(carousel.active(), DemoScreen::Chat);
    }

    #[test]
    fn only_the_active_dot_is_highlighted() {
        let mut carousel = DemoCarousel::default();
        carousel.select(2);
        let active: Vec<bool> = (0..DemoScreen::ALL.len())
            .map(|i| dot_class(&carousel, i).contains("active"))
            .collect();
        assert_eq!(active, vec![false, false, true, false]);
        assert!(dot_class(&carousel, 0).contains("demo-dot"));
    }
}

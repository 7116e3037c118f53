use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_hooks::use_interval;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Speaker {
    Doctor,
    Patient,
}

pub struct TranscriptLine {
    pub speaker: Speaker,
    pub text: &'static str,
}

pub const TRANSCRIPT: &[TranscriptLine] = &[
    TranscriptLine { speaker: Speaker::Doctor, text: "Hello, this is Dr. Sarah from Tri-Snap. How can I help you today?" },
    TranscriptLine { speaker: Speaker::Patient, text: "Hi doctor, I've been having severe headaches for the past three days." },
    TranscriptLine { speaker: Speaker::Doctor, text: "I'm sorry to hear that. Can you describe the pain and its location?" },
    TranscriptLine { speaker: Speaker::Patient, text: "It's mostly on the right side of my head, and it gets worse when I'm in bright light." },
    TranscriptLine { speaker: Speaker::Doctor, text: "Are you experiencing any nausea or visual disturbances with these headaches?" },
    TranscriptLine { speaker: Speaker::Patient, text: "Yes, I feel nauseous in the mornings, and sometimes my vision gets a bit blurry." },
    TranscriptLine { speaker: Speaker::Doctor, text: "Based on your symptoms, this sounds like it could be migraine headaches. I recommend..." },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallPhase {
    Incoming,
    Active,
    Ended,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallDemo {
    phase: CallPhase,
    elapsed_secs: u32,
    revealed: usize,
}

impl Default for CallDemo {
    fn default() -> Self {
        Self {
            phase: CallPhase::Incoming,
            elapsed_secs: 0,
            revealed: 0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallAction {
    Answer,
    Tick,
    RevealNext,
    HangUp,
    CallAgain,
}

impl CallDemo {
    pub fn phase(&self) -> CallPhase {
        self.phase
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    pub fn visible_lines(&self) -> &'static [TranscriptLine] {
        &TRANSCRIPT[..self.revealed]
    }

    pub fn transcript_done(&self) -> bool {
        self.revealed == TRANSCRIPT.len()
    }

    /// What the call does on its own next, and after how long. Depends only
    /// on the phase and how many lines are showing, never on the clock.
    pub fn next_step(&self) -> Option<(u32, CallAction)> {
        match self.phase {
            CallPhase::Incoming => Some((config::CALL_RING_MS, CallAction::Answer)),
            CallPhase::Active if self.transcript_done() => {
                Some((config::TRANSCRIPT_STEP_MS, CallAction::HangUp))
            }
            CallPhase::Active => Some((config::TRANSCRIPT_STEP_MS, CallAction::RevealNext)),
            CallPhase::Ended => None,
        }
    }

    /// Changes whenever the pending step has to be rescheduled.
    pub fn step_key(&self) -> (CallPhase, usize) {
        (self.phase, self.revealed)
    }

    pub fn apply(&mut self, action: CallAction) -> bool {
        match (action, self.phase) {
            (CallAction::Answer, CallPhase::Incoming) => {
                self.phase = CallPhase::Active;
                true
            }
            (CallAction::Tick, CallPhase::Active) => {
                self.elapsed_secs += 1;
                true
            }
            (CallAction::RevealNext, CallPhase::Active) if !self.transcript_done() => {
                self.revealed += 1;
                true
            }
            (CallAction::HangUp, CallPhase::Active) => {
                self.phase = CallPhase::Ended;
                true
            }
            (CallAction::CallAgain, CallPhase::Ended) => {
                *self = Self::default();
                true
            }
            _ => false,
        }
    }
}

impl Reducible for CallDemo {
    type Action = CallAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        if next.apply(action) { next.into() } else { self }
    }
}

/// `MM:SS`, minutes are not capped at 59.
pub fn format_duration(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[function_component(CallDemoView)]
pub fn call_demo_view() -> Html {
    let call = use_reducer(CallDemo::default);

    // One pending step at a time: ring, next line, or hang up after the last line.
    {
        let dispatcher = call.dispatcher();
        let step = call.next_step();
        use_effect_with_deps(
            move |_| {
                let timeout = step.map(|(delay, action)| {
                    Timeout::new(delay, move || dispatcher.dispatch(action))
                });
                move || drop(timeout)
            },
            call.step_key(),
        );
    }

    {
        let call = call.clone();
        let active = call.phase() == CallPhase::Active;
        use_interval(
            move || call.dispatch(CallAction::Tick),
            if active { 1_000 } else { 0 },
        );
    }

    let dispatch = |action: fn() -> CallAction| {
        let call = call.clone();
        Callback::from(move |_: MouseEvent| call.dispatch(action()))
    };

    let status = match call.phase() {
        CallPhase::Incoming => html! { <span class="pulse">{"Incoming call..."}</span> },
        CallPhase::Active => html! {
            <span><span class="live-dot"></span>{ format_duration(call.elapsed_secs()) }</span>
        },
        CallPhase::Ended => html! { <span>{"Call ended"}</span> },
    };

    html! {
        <div class="call-demo">
            <div class="call-demo__header">
                <div class="call-demo__who">
                    <img src="/images/doctor.jpg" alt="Doctor" />
                    <div>
                        <h3>{"Dr. Sarah"}</h3>
                        <div class="call-demo__status">{ status }</div>
                    </div>
                </div>
                <div class="call-demo__controls">
                    if call.phase() == CallPhase::Incoming {
                        <button class="accept" aria-label="Accept call" onclick={dispatch(|| CallAction::Answer)}>{"📞"}</button>
                    }
                    if call.phase() == CallPhase::Active {
                        <button class="hang-up" aria-label="End call" onclick={dispatch(|| CallAction::HangUp)}>{"✕"}</button>
                    }
                </div>
            </div>
            <div class="call-demo__body">
                { for call.visible_lines().iter().map(|line| {
                    let side = match line.speaker {
                        Speaker::Doctor => "line--doctor",
                        Speaker::Patient => "line--patient",
                    };
                    html! { <div class={classes!("line", side)}>{ line.text }</div> }
                }) }
                if call.phase() == CallPhase::Ended {
                    <div class="call-demo__ended">
                        <p>{"Thanks for trying Tri-Snap."}</p>
                        <button onclick={dispatch(|| CallAction::CallAgain)}>{"Call Again"}</button>
                    </div>
                }
            </div>
            <style>
                {r#"
                .call-demo {
                    display: flex;
                    flex-direction: column;
                    height: 500px;
                    max-width: 28rem;
                    width: 100%;
                    margin: 0 auto;
                    border-radius: 0.75rem;
                    overflow: hidden;
                    background: linear-gradient(135deg, rgba(15, 61, 87, 0.1), rgba(0, 169, 157, 0.1));
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.12);
                }
                .call-demo__header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1rem;
                    background: linear-gradient(to right, #0f3d57, #00A99D);
                    color: white;
                }
                .call-demo__who {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .call-demo__who img {
                    width: 40px;
                    height: 40px;
                    border-radius: 50%;
                    object-fit: cover;
                }
                .call-demo__who h3 {
                    margin: 0;
                    font-size: 1rem;
                    font-weight: 500;
                }
                .call-demo__status {
                    font-size: 0.75rem;
                    color: #e5e7eb;
                }
                .live-dot {
                    display: inline-block;
                    width: 6px;
                    height: 6px;
                    margin-right: 4px;
                    border-radius: 50%;
                    background: #4ade80;
                }
                .pulse, .live-dot {
                    animation: blink 1s infinite;
                }
                .call-demo__controls button {
                    width: 2.5rem;
                    height: 2.5rem;
                    border: none;
                    border-radius: 50%;
                    color: white;
                    cursor: pointer;
                    transition: transform 0.2s ease;
                }
                .call-demo__controls button:hover {
                    transform: scale(1.1);
                }
                .accept { background: #22c55e; }
                .hang-up { background: #ef4444; }
                .call-demo__body {
                    flex: 1;
                    overflow-y: auto;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    padding: 1rem;
                }
                .line {
                    max-width: 80%;
                    padding: 0.75rem;
                    border-radius: 0.75rem;
                    font-size: 0.875rem;
                    animation: rise 0.3s ease-out;
                }
                .line--doctor {
                    background: white;
                    color: #0f3d57;
                }
                .line--patient {
                    align-self: flex-end;
                    background: #00A99D;
                    color: white;
                }
                .call-demo__ended {
                    margin-top: auto;
                    text-align: center;
                    color: #374151;
                }
                .call-demo__ended button {
                    padding: 0.5rem 1.5rem;
                    border: none;
                    border-radius: 9999px;
                    background: #00A99D;
                    color: white;
                    cursor: pointer;
                }
                @keyframes blink {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.5; }
                }
                @keyframes rise {
                    from { opacity: 0; transform: translateY(10px); }
                    to { opacity: 1; transform: translateY(0); }
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
    fn formats_zero_padded_minutes_and_seconds() {
        assert_eq!(format_duration(0), "00:00");
        assert_eq!(format_duration(9), "00:09");
        assert_eq!(format_duration(75), "01:15");
        assert_eq!(format_duration(6_000), "100:00");
    }

    #[test]
    fn full_call_runs_through_transcript() {
        let mut call = CallDemo::default();
        assert!(!call.apply(CallAction::Tick));
        assert!(!call.apply(CallAction::RevealNext));

        assert!(call.apply(CallAction::Answer));
        assert_eq!(call.phase(), CallPhase::Active);

        while !call.transcript_done() {
            assert!(call.apply(CallAction::RevealNext));
            call.apply(CallAction::Tick);
        }
        assert_eq!(call.visible_lines().len(), TRANSCRIPT.len());
        assert_eq!(call.elapsed_secs(), TRANSCRIPT.len() as u32);
        assert!(!call.apply(CallAction::RevealNext));

        assert!(call.apply(CallAction::HangUp));
        assert_eq!(call.phase(), CallPhase::Ended);
        assert!(!call.apply(CallAction::Tick));
    }

    #[test]
    fn each_reveal_schedules_a_fresh_step() {
        let mut call = CallDemo::default();
        assert_eq!(call.next_step(), Some((config::CALL_RING_MS, CallAction::Answer)));
        call.apply(CallAction::Answer);

        let mut key = call.step_key();
        for _ in 0..TRANSCRIPT.len() {
            assert_eq!(
                call.next_step(),
                Some((config::TRANSCRIPT_STEP_MS, CallAction::RevealNext))
            );
            let (_, action) = call.next_step().unwrap();
            assert!(call.apply(action));
            assert_ne!(call.step_key(), key);
            key = call.step_key();
        }

        assert_eq!(call.next_step(), Some((config::TRANSCRIPT_STEP_MS, CallAction::HangUp)));
        let (_, action) = call.next_step().unwrap();
        call.apply(action);
        assert_eq!(call.phase(), CallPhase::Ended);
        assert_eq!(call.next_step(), None);
    }

    #[test]
    fn clock_ticks_do_not_reschedule() {
        let mut call = CallDemo::default();
        call.apply(CallAction::Answer);
        let key = call.step_key();
        call.apply(CallAction::Tick);
        call.apply(CallAction::Tick);
        assert_eq!(call.step_key(), key);
    }

    #[test]
    fn early_hang_up_and_call_again_resets() {
        let mut call = CallDemo::default();
        assert!(!call.apply(CallAction::HangUp));
        call.apply(CallAction::Answer);
        call.apply(CallAction::RevealNext);
        call.apply(CallAction::Tick);

        assert!(!call.apply(CallAction::CallAgain));
        assert!(call.apply(CallAction::HangUp));
        assert!(call.apply(CallAction::CallAgain));
        assert_eq!(call, CallDemo::default());
        assert!(call.visible_lines().is_empty());
    }
}

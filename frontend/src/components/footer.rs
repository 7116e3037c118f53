use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="site-footer__grid">
                <div>
                    <Link<Route> to={Route::Home} classes="site-footer__logo">
                        <img src="/images/tri-snap-logo.png" alt="Tri-Snap Logo" />
                        <span>{"Tri-Snap"}</span>
                    </Link<Route>>
                    <p>{"Instant clinical triage straight from your smartphone."}</p>
                </div>
                <div>
                    <h3>{"Quick Links"}</h3>
                    <ul>
                        <li><Link<Route> to={Route::Home}>{"Home"}</Link<Route>></li>
                        <li><Link<Route> to={Route::About}>{"About Us"}</Link<Route>></li>
                        <li><a href="/#early-access">{"Early Access"}</a></li>
                    </ul>
                </div>
                <div>
                    <h3>{"Contact"}</h3>
                    <p>
                        {"Email: "}
                        <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{ config::CONTACT_EMAIL }</a>
                    </p>
                </div>
            </div>
            <div class="site-footer__bottom">
                { format!("© {} Tri-Snap. All rights reserved.", year) }
            </div>
            <style>
                {r#"
                .site-footer {
                    background: #0f3d57;
                    color: white;
                    padding: 3rem 2rem 1.5rem;
                }
                .site-footer__grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 2rem;
                }
                .site-footer__logo {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-bottom: 1rem;
                    color: white;
                    font-weight: 700;
                    text-decoration: none;
                }
                .site-footer__logo img {
                    width: 32px;
                    height: 32px;
                }
                .site-footer p, .site-footer li a {
                    color: #d1d5db;
                }
                .site-footer ul {
                    list-style: none;
                    padding: 0;
                    line-height: 2;
                }
                .site-footer a {
                    text-decoration: none;
                }
                .site-footer a:hover {
                    color: #00A99D;
                }
                .site-footer__grid a[href^="mailto"] {
                    color: #00A99D;
                }
                .site-footer__bottom {
                    max-width: 1200px;
                    margin: 2rem auto 0;
                    padding-top: 1.5rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    text-align: center;
                    color: #9ca3af;
                    font-size: 0.875rem;
                }
                "#}
            </style>
        </footer>
    }
}

use yew::prelude::*;

use crate::background::Backdrop;
use crate::widgets::clock::Clock;
use crate::widgets::nav::{Nav, NavItem};
use crate::widgets::reveal::use_reveal;
use crate::widgets::toast::SentToast;

#[function_component(Landing)]
pub fn landing() -> Html {
    use_reveal();

    let nav_items = vec![
        NavItem::new("#work", "Work"),
        NavItem::new("#services", "Services"),
        NavItem::new("#about", "About"),
        NavItem::new("#contact", "Contact"),
    ];

    html! {
        <>
            <Backdrop />
            <header class="top-bar">
                <a href="#top" class="brand">{"Northlight Studio"}</a>
                <Nav items={nav_items} />
                <Clock label={AttrValue::from("Helsinki")} />
            </header>

            <main id="top" class="landing-page">
                <section class="hero reveal">
                    <h1>{"Quiet software for loud problems."}</h1>
                    <p class="hero-subtitle">
                        {"We design and build web products, from first sketch to production."}
                    </p>
                    <a href="#contact" class="hero-cta">{"Start a project"}</a>
                </section>

                <section id="work" class="section">
                    <h2 class="reveal">{"Selected work"}</h2>
                    <div class="card-grid">
                        <article class="card reveal">
                            <h3>{"Harbor"}</h3>
                            <p>{"Booking flow rebuilt for a ferry operator."}</p>
                        </article>
                        <article class="card reveal">
                            <h3>{"Lumen"}</h3>
                            <p>{"Energy dashboard for housing cooperatives."}</p>
                        </article>
                        <article class="card reveal">
                            <h3>{"Tundra"}</h3>
                            <p>{"Field data app that works offline for weeks."}</p>
                        </article>
                    </div>
                </section>

                <section id="services" class="section">
                    <h2 class="reveal">{"Services"}</h2>
                    <ul class="feature-list reveal">
                        <li>{"Product design"}</li>
                        <li>{"Web and mobile development"}</li>
                        <li>{"Performance audits"}</li>
                    </ul>
                </section>

                <section id="about" class="section reveal">
                    <h2>{"About"}</h2>
                    <p>{"A small team in Helsinki. We answer email within a working day."}</p>
                </section>

                <section id="contact" class="section reveal">
                    <h2>{"Contact"}</h2>
                    <form class="contact-form" action="/contact" method="post">
                        <input type="email" name="email" placeholder="you@company.com" required={true} />
                        <textarea name="message" placeholder="Tell us about your project" required={true}></textarea>
                        <button type="submit">{"Send"}</button>
                    </form>
                </section>
            </main>

            <SentToast />
        </>
    }
}

use crate::animation::use_reveal_on_scroll;
use crate::config;
use crate::contact::form::{ContactForm, JobOpenings};
use crate::disclosure::cards::{ServiceCard, TeamCard};
use crate::disclosure::{DisclosureAction, DisclosureGroup};
use crate::navigation::anchors::use_smooth_anchor_scroll;
use crate::navigation::navbar::Navbar;
use crate::pages::content::{ABOUT_CARDS, JOB_OPENINGS, SERVICES, TEAM};
use crate::theme::provider::ThemeProvider;
use yew::prelude::*;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <ThemeProvider>
            <Navbar />
            <HomeSections />
        </ThemeProvider>
    }
}

#[function_component(HomeSections)]
fn home_sections() -> Html {
    let services = use_reducer(DisclosureGroup::default);
    let team = use_reducer(DisclosureGroup::default);

    use_smooth_anchor_scroll();
    use_reveal_on_scroll();

    let toggle_service = {
        let services = services.clone();
        Callback::from(move |id: String| services.dispatch(DisclosureAction::Toggle(id)))
    };
    let toggle_team = {
        let team = team.clone();
        Callback::from(move |id: String| team.dispatch(DisclosureAction::Toggle(id)))
    };

    html! {
        <main>
            <section id="home" class="hero">
                <div class="hero-content">
                    <h1 class="hero-title">{"Engineering Silicon. Building Boards."}</h1>
                    <p class="hero-subtitle">
                        {"Chip design, PCB design and verification for teams that need hardware to work the first time."}
                    </p>
                    <div class="hero-buttons">
                        <a href="#services" class="btn btn-primary">{"Our Services"}</a>
                        <a href="#contact" class="btn btn-secondary">{"Get in Touch"}</a>
                    </div>
                </div>
            </section>

            <section id="about" class="about">
                <div class="container">
                    <h2 class="section-title">{format!("About {}", config::get_company_name())}</h2>
                    <div class="about-grid">
                        {
                            ABOUT_CARDS.iter().map(|(icon, title, text)| html! {
                                <div class="about-card">
                                    <i class={*icon}></i>
                                    <h3>{*title}</h3>
                                    <p>{*text}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <section id="services" class="services">
                <div class="container">
                    <h2 class="section-title">{"Services"}</h2>
                    <div class="services-grid">
                        {
                            SERVICES.iter().map(|service| html! {
                                <ServiceCard
                                    key={service.id}
                                    service={service}
                                    state={services.state_of(service.id)}
                                    on_toggle={toggle_service.clone()}
                                />
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <section id="team" class="team">
                <div class="container">
                    <h2 class="section-title">{"Team"}</h2>
                    <div class="team-grid">
                        {
                            TEAM.iter().map(|member| html! {
                                <TeamCard
                                    key={member.id}
                                    member={member}
                                    state={team.state_of(member.id)}
                                    on_toggle={toggle_team.clone()}
                                />
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <section id="careers" class="careers">
                <div class="container">
                    <h2 class="section-title">{"Careers"}</h2>
                    <p class="section-subtitle">{"We are hiring engineers who like hard problems."}</p>
                    <JobOpenings openings={&JOB_OPENINGS[..]} />
                </div>
            </section>

            <section id="contact" class="contact">
                <div class="container">
                    <h2 class="section-title">{"Contact"}</h2>
                    <div class="contact-content">
                        <div class="contact-info">
                            <p><i class="fas fa-envelope"></i>{" "}{config::get_contact_email()}</p>
                        </div>
                        <ContactForm />
                    </div>
                </div>
            </section>

            <footer class="footer">
                <p>{format!("© {}. All rights reserved.", config::get_company_name())}</p>
            </footer>
        </main>
    }
}

use crate::disclosure::{details_id, PanelState, PanelVariant};
use crate::pages::content::{Service, TeamMember};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub service: &'static Service,
    pub state: PanelState,
    pub on_toggle: Callback<String>,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let service = props.service;
    let variant = PanelVariant::Service;
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(service.id.to_string()))
    };
    let expanded = (props.state == PanelState::Expanded).then_some("expanded");

    html! {
        <div class="service-card">
            <div class="service-icon"><i class={service.icon}></i></div>
            <h3>{service.title}</h3>
            <p>{service.summary}</p>
            <button class="learn-more-btn" {onclick}>
                if let Some(icon) = variant.icon(props.state) {
                    <i class={icon}></i>
                }
                {" "}{variant.label(props.state)}
            </button>
            <div id={details_id(service.id)} class={classes!(variant.details_class(), expanded)}>
                <ul>
                    { for service.details.iter().map(|line| html! { <li>{*line}</li> }) }
                </ul>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TeamCardProps {
    pub member: &'static TeamMember,
    pub state: PanelState,
    pub on_toggle: Callback<String>,
}

#[function_component(TeamCard)]
pub fn team_card(props: &TeamCardProps) -> Html {
    let member = props.member;
    let variant = PanelVariant::Team;
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(member.id.to_string()))
    };
    let expanded = (props.state == PanelState::Expanded).then_some("expanded");

    html! {
        <div class="team-card">
            <div class="team-avatar"><i class="fas fa-user"></i></div>
            <h3>{member.name}</h3>
            <p class="team-role">{member.role}</p>
            <div id={details_id(member.id)} class={classes!(variant.details_class(), expanded)}>
                <p>{member.bio}</p>
            </div>
            <div class="team-actions">
                <button class="read-more-btn" {onclick}>{variant.label(props.state)}</button>
            </div>
        </div>
    }
}

use crate::dom::{self, EventListener};
use crate::navigation::{active_section, MenuAction, MenuState, NAV_LINKS};
use crate::theme::provider::ThemeSelect;
use yew::prelude::*;

/// Top navigation bar: hamburger menu, theme selector and scroll-tracked section links.
#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu = use_reducer(MenuState::default);
    let active = use_state_eq(|| None::<String>);

    {
        let active = active.clone();
        let menu = menu.dispatcher();
        use_effect_with_deps(
            move |_| {
                let update_active = move || match dom::section_offsets().and_then(|offsets| {
                    let scroll_y = dom::scroll_y()?;
                    Ok(active_section(offsets.iter().map(|(id, top)| (id.as_str(), *top)), scroll_y)
                        .map(str::to_owned))
                }) {
                    Ok(current) => active.set(current),
                    Err(e) => log::error!("Failed to update active nav link: {}", e),
                };
                update_active();

                let mut listeners = Vec::new();
                match dom::window() {
                    Ok(window) => {
                        match EventListener::new(&window, "scroll", move |_| update_active()) {
                            Ok(listener) => listeners.push(listener),
                            Err(e) => log::error!("Failed to listen for scroll: {}", e),
                        }
                        let on_resize = move |_| match dom::inner_width() {
                            Ok(width) => menu.dispatch(MenuAction::Resized(width)),
                            Err(e) => log::error!("Failed to read viewport width: {}", e),
                        };
                        match EventListener::new(&window, "resize", on_resize) {
                            Ok(listener) => listeners.push(listener),
                            Err(e) => log::error!("Failed to listen for resize: {}", e),
                        }
                    }
                    Err(e) => log::error!("Navigation listeners not installed: {}", e),
                }

                move || drop(listeners)
            },
            (),
        );
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.dispatch(MenuAction::Toggle))
    };
    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.dispatch(MenuAction::Close))
    };

    let open = menu.open.then_some("active");

    html! {
        <nav class="navbar">
            <div class="nav-container">
                <a href="#home" class="nav-logo">{crate::config::get_company_name()}</a>
                <ul class={classes!("nav-menu", open)}>
                    {
                        NAV_LINKS.iter().map(|(id, label)| {
                            let is_active = active.as_deref() == Some(*id);
                            html! {
                                <li class="nav-item">
                                    <a
                                        href={format!("#{}", id)}
                                        class={classes!("nav-link", is_active.then_some("active"))}
                                        onclick={close_menu.clone()}
                                    >
                                        {*label}
                                    </a>
                                </li>
                            }
                        }).collect::<Html>()
                    }
                    <li class="nav-item">
                        <ThemeSelect />
                    </li>
                </ul>
                <div class={classes!("hamburger", open)} onclick={toggle_menu}>
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </div>
            </div>
        </nav>
    }
}

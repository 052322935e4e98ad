use crate::config::{THEME_ROTATION_MS, VIDEO_PRELOAD_DELAY_MS};
use crate::dom::{self, DomError};
use crate::theme::{show_theme_video, sync_control, BackgroundVideo, Theme, ThemeAction, ThemeControl, ThemeState};
use crate::utils::timer::{BrowserScheduler, BrowserTimer, Scheduler, TimerSlot};
use wasm_bindgen::JsCast;
use web_sys::{HtmlMediaElement, HtmlSelectElement, HtmlVideoElement};
use yew::prelude::*;

pub type ThemeContext = UseReducerHandle<ThemeState>;

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Owns the current theme, the background video and the rotation timer.
#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let state = use_reducer(ThemeState::default);
    let video_ref = use_node_ref();
    let rotation = use_mut_ref(TimerSlot::<BrowserTimer>::default);

    {
        let dispatcher = state.dispatcher();
        let video_ref = video_ref.clone();
        let current = state.current;
        use_effect_with_deps(
            move |_| {
                if let Err(e) = apply_theme(current, &video_ref) {
                    log::error!("Failed to apply theme {}: {}", current.id(), e);
                }
                rotation.borrow_mut().replace(|| {
                    BrowserScheduler.every(THEME_ROTATION_MS, move || {
                        log::debug!("Rotating background theme");
                        dispatcher.dispatch(ThemeAction::Rotate);
                    })
                });
                move || {
                    rotation.borrow_mut().cancel();
                }
            },
            state.epoch,
        );
    }

    // Warm up the other videos once the page has settled
    use_effect_with_deps(
        |_| {
            BrowserScheduler::detach(BrowserScheduler.after(VIDEO_PRELOAD_DELAY_MS, || {
                if let Err(e) = preload_videos() {
                    log::warn!("Video preloading failed: {}", e);
                }
            }));
            || ()
        },
        (),
    );

    html! {
        <ContextProvider<ThemeContext> context={state.clone()}>
            <video
                id="backgroundVideo"
                class="background-video"
                ref={video_ref}
                autoplay=true
                muted=true
                loop=true
                playsinline=true
            ></video>
            { for props.children.iter() }
        </ContextProvider<ThemeContext>>
    }
}

fn apply_theme(theme: Theme, video_ref: &NodeRef) -> Result<(), DomError> {
    dom::body()?.set_attribute("data-theme", theme.id())?;

    let video = video_ref
        .cast::<HtmlVideoElement>()
        .ok_or_else(|| DomError::MissingElement("#backgroundVideo".to_string()))?;
    if show_theme_video(&video, theme) {
        log::debug!("Background video switched to {}", theme.video());
    }
    Ok(())
}

impl BackgroundVideo for HtmlVideoElement {
    fn source(&self) -> Option<String> {
        self.get_attribute("src")
    }

    fn mute(&self) {
        // the `muted` attribute alone does not set the property on a created element
        HtmlMediaElement::set_muted(self, true);
    }

    fn play_source(&self, src: &str) {
        HtmlMediaElement::set_src(self, src);
        HtmlMediaElement::load(self);
    }
}

impl ThemeControl for HtmlSelectElement {
    fn shown(&self) -> String {
        HtmlSelectElement::value(self)
    }

    fn show(&self, id: &str) {
        HtmlSelectElement::set_value(self, id);
    }
}

fn preload_videos() -> Result<(), DomError> {
    let document = dom::document()?;
    for theme in Theme::ALL {
        let video: HtmlVideoElement = document
            .create_element("video")?
            .dyn_into()
            .map_err(|_| DomError::WrongType("video".to_string(), "HtmlVideoElement"))?;
        video.set_preload("metadata");
        video.set_src(theme.video());
        log::debug!("Preloading {}", theme.video());
    }
    Ok(())
}

/// Drop-down in the navigation bar. Always shows the current theme, including after rotation.
#[function_component(ThemeSelect)]
pub fn theme_select() -> Html {
    let theme = use_context::<ThemeContext>();
    let select_ref = use_node_ref();

    {
        let select_ref = select_ref.clone();
        let shown = theme.as_ref().map(|theme| (theme.current, theme.epoch));
        use_effect_with_deps(
            move |shown| {
                // set the value property; option attributes stop counting once the visitor picks one
                if let (Some((current, _)), Some(select)) = (shown, select_ref.cast::<HtmlSelectElement>()) {
                    sync_control(&select, *current);
                }
                || ()
            },
            shown,
        );
    }

    let theme = match theme {
        Some(theme) => theme,
        None => {
            log::error!("ThemeSelect rendered outside of ThemeProvider");
            return html! {};
        }
    };

    let onchange = {
        let theme = theme.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            match Theme::from_id(&value) {
                Some(selected) => theme.dispatch(ThemeAction::Select(selected)),
                None => log::warn!("Ignoring unknown theme `{}`", value),
            }
        })
    };

    html! {
        <select id="themeSelect" class="theme-select" aria-label="Background theme" ref={select_ref} {onchange}>
            {
                Theme::ALL.iter().map(|option| html! {
                    <option value={option.id()} selected={*option == theme.current}>
                        {option.label()}
                    </option>
                }).collect::<Html>()
            }
        </select>
    }
}

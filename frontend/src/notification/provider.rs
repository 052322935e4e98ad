use crate::notification::{present, NotificationKind, NotificationList};
use crate::utils::timer::BrowserScheduler;
use yew::prelude::*;

/// Handle for showing banners from anywhere below a [`NotificationProvider`].
#[derive(Clone, PartialEq)]
pub struct Notifier {
    list: UseReducerDispatcher<NotificationList>,
}

impl Notifier {
    pub fn notify(&self, message: impl Into<String>, kind: NotificationKind) {
        let list = self.list.clone();
        present(BrowserScheduler, move |action| list.dispatch(action), message.into(), kind);
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationProviderProps {
    #[prop_or_default]
    pub children: Children,
}

const NOTIFICATION_CSS: &str = r#"
    @keyframes slideInRight {
        from { transform: translateX(100%); opacity: 0; }
        to { transform: translateX(0); opacity: 1; }
    }
    .notification-content {
        display: flex;
        align-items: center;
        gap: 10px;
    }
"#;

#[function_component(NotificationProvider)]
pub fn notification_provider(props: &NotificationProviderProps) -> Html {
    let list = use_reducer(NotificationList::default);
    let notifier = Notifier {
        list: list.dispatcher(),
    };

    html! {
        <ContextProvider<Notifier> context={notifier}>
            <style>{NOTIFICATION_CSS}</style>
            { for props.children.iter() }
            {
                list.items.iter().map(|item| {
                    let animation = if item.leaving {
                        "slideInRight 0.3s ease-out reverse"
                    } else {
                        "slideInRight 0.3s ease-out"
                    };
                    let style = format!(
                        "position: fixed; top: 100px; right: 20px; background: {}; color: white; \
                         padding: 1rem 1.5rem; border-radius: 8px; box-shadow: 0 10px 25px rgba(0,0,0,0.3); \
                         z-index: 10000; animation: {}; max-width: 400px;",
                        item.kind.background(),
                        animation
                    );
                    html! {
                        <div
                            key={item.id}
                            class={format!("notification notification-{}", item.kind.css_suffix())}
                            {style}
                        >
                            <div class="notification-content">
                                <i class={item.kind.icon()}></i>
                                <span>{&item.message}</span>
                            </div>
                        </div>
                    }
                }).collect::<Html>()
            }
        </ContextProvider<Notifier>>
    }
}

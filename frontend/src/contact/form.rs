use crate::contact::{compose_contact_email, compose_job_application, open_mail_client, ContactError, ContactSubmission};
use crate::dom::DomError;
use crate::notification::provider::Notifier;
use crate::notification::NotificationKind;
use crate::pages::content::{JobOpening, SERVICE_OPTIONS};
use wasm_bindgen::JsCast;
use web_sys::js_sys::{try_iter, Array};
use web_sys::{FormData, HtmlFormElement};
use yew::prelude::*;

const CONTACT_SUCCESS: &str = "Email client opened! Please send the email to complete your inquiry.";
const CONTACT_RETRY: &str = "Something went wrong reading the form. Please try again.";
const APPLY_SUCCESS: &str = "Email client opened! Please attach your resume and send the email.";

fn read_form(form: &HtmlFormElement) -> Result<ContactSubmission, ContactError> {
    let data = FormData::new_with_form(form).map_err(DomError::from)?;
    let mut fields = Vec::new();
    if let Some(entries) = try_iter(&data).map_err(DomError::from)? {
        for entry in entries {
            let pair: Array = entry.map_err(DomError::from)?.unchecked_into();
            // file inputs yield Blobs, which are not part of the record
            if let (Some(key), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
                fields.push((key, value));
            }
        }
    }
    ContactSubmission::from_fields(fields)
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let notifier = use_context::<Notifier>();

    let onsubmit = Callback::from(move |e: SubmitEvent| {
        e.prevent_default();
        let form: HtmlFormElement = e.target_unchecked_into();
        let submission = match read_form(&form) {
            Ok(submission) => submission,
            Err(e) => {
                log::error!("Failed to read contact form: {}", e);
                if let Some(notifier) = &notifier {
                    notifier.notify(CONTACT_RETRY, NotificationKind::Info);
                }
                return;
            }
        };

        let draft = compose_contact_email(&submission);
        if let Err(e) = open_mail_client(&draft) {
            log::error!("Failed to open mail client: {}", e);
        }
        if let Some(notifier) = &notifier {
            notifier.notify(CONTACT_SUCCESS, NotificationKind::Success);
        }
        form.reset();
    });

    html! {
        <form id="contactForm" class="contact-form" {onsubmit}>
            <div class="form-group">
                <input type="text" name="name" placeholder="Your Name" required=true />
            </div>
            <div class="form-group">
                <input type="email" name="email" placeholder="Your Email" required=true />
            </div>
            <div class="form-group">
                <input type="text" name="company" placeholder="Company (optional)" />
            </div>
            <div class="form-group">
                <select name="service" required=true>
                    <option value="" selected=true disabled=true>{"Select a Service"}</option>
                    { for SERVICE_OPTIONS.iter().map(|option| html! { <option value={*option}>{*option}</option> }) }
                </select>
            </div>
            <div class="form-group">
                <textarea name="message" rows="5" placeholder="Tell us about your project" required=true></textarea>
            </div>
            <button type="submit" class="btn btn-primary">
                <i class="fas fa-paper-plane"></i>{" Send Message"}
            </button>
        </form>
    }
}

#[derive(Properties, PartialEq)]
pub struct JobOpeningsProps {
    pub openings: &'static [JobOpening],
}

/// Job listings with an apply button that opens a pre-filled application draft.
#[function_component(JobOpenings)]
pub fn job_openings(props: &JobOpeningsProps) -> Html {
    let notifier = use_context::<Notifier>();
    let openings: &'static [JobOpening] = props.openings;

    let apply = Callback::from(move |job_title: &'static str| {
        let draft = compose_job_application(job_title);
        if let Err(e) = open_mail_client(&draft) {
            log::error!("Failed to open mail client: {}", e);
        }
        if let Some(notifier) = &notifier {
            notifier.notify(APPLY_SUCCESS, NotificationKind::Success);
        }
    });

    html! {
        <div class="jobs-grid">
            {
                openings.iter().map(|job| {
                    let onclick = apply.reform(move |_: MouseEvent| job.title);
                    html! {
                        <div class="job-card">
                            <h3>{job.title}</h3>
                            <p class="job-location"><i class="fas fa-map-marker-alt"></i>{" "}{job.location}</p>
                            <p>{job.summary}</p>
                            <button class="btn btn-secondary" {onclick}>{"Apply Now"}</button>
                        </div>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}

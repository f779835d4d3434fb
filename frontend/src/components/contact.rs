use chrono::Local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::models::catalog::{CONTACT_DETAILS, RESERVATION_PHONE};
use crate::state::reservation::{record_request, PartySize, ReservationDraft, ReservationError};

#[derive(Clone, PartialEq)]
enum FormStatus {
    Editing,
    Invalid(ReservationError),
    Noted,
}

#[derive(Properties, PartialEq)]
pub struct ContactSectionProps {
    pub reveal: &'static str,
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactSectionProps) -> Html {
    let draft = use_state(ReservationDraft::default);
    let status = use_state(|| FormStatus::Editing);

    let edit = |apply: fn(&mut ReservationDraft, String)| {
        let draft = draft.clone();
        let status = status.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            apply(&mut next, input.value());
            draft.set(next);
            status.set(FormStatus::Editing);
        })
    };
    let on_name = edit(|d, v| d.name = v);
    let on_email = edit(|d, v| d.email = v);
    let on_date = edit(|d, v| d.date = v);

    let on_party_size = {
        let draft = draft.clone();
        let status = status.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.party_size = PartySize::from_value(&select.value());
            draft.set(next);
            status.set(FormStatus::Editing);
        })
    };

    let on_reserve = {
        let draft = draft.clone();
        let status = status.clone();
        Callback::from(move |_: MouseEvent| {
            let today = Local::now().date_naive();
            match draft.validate(today) {
                Ok(request) => {
                    record_request(&request);
                    status.set(FormStatus::Noted);
                }
                Err(e) => status.set(FormStatus::Invalid(e)),
            }
        })
    };

    let notice = match &*status {
        FormStatus::Editing => html! {},
        FormStatus::Invalid(e) => html! { <p class="form-error">{e.to_string()}</p> },
        FormStatus::Noted => html! {
            <p class="form-notice">
                {format!("Thank you! Please call {} to confirm your table.", RESERVATION_PHONE)}
            </p>
        },
    };
    let selected_size = draft.party_size.map(PartySize::value).unwrap_or("");

    html! {
        <section id="contact" class="page-section">
            <div class={classes!("section-inner", "narrow", props.reveal)}>
                <h2 class="section-title">{"Visit Our Studio"}</h2>
                <div class="contact-grid">
                    <div class="contact-details">
                        { for CONTACT_DETAILS.iter().enumerate().map(|(index, item)| html! {
                            <div
                                key={item.title}
                                class="contact-detail"
                                style={format!("animation-delay: {}ms;", index * 100)}
                            >
                                <i class={item.icon.class()}></i>
                                <div>
                                    <div class="contact-detail-title">{item.title}</div>
                                    <div class="contact-detail-text">{item.detail}</div>
                                </div>
                            </div>
                        }) }
                    </div>
                    <div class="reservation-card">
                        <h3>{"Reserve Your Experience"}</h3>
                        <div class="reservation-fields">
                            <input type="text" placeholder="Name" value={draft.name.clone()} oninput={on_name} />
                            <input type="email" placeholder="Email" value={draft.email.clone()} oninput={on_email} />
                            <input type="date" value={draft.date.clone()} oninput={on_date} />
                            <select onchange={on_party_size}>
                                <option value="" selected={selected_size.is_empty()}>{"Party Size"}</option>
                                { for PartySize::ALL.iter().map(|size| html! {
                                    <option
                                        key={size.value()}
                                        value={size.value()}
                                        selected={selected_size == size.value()}
                                    >
                                        {size.label()}
                                    </option>
                                }) }
                            </select>
                            <button class="reserve-button" onclick={on_reserve}>{"Reserve Table"}</button>
                            { notice }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

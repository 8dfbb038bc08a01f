use super::model::{ContactField, ContactPhase};
use super::view_model::ContactFormViewModel;
use crate::domain::a001_profile::ui::model::ContactCard;
use crate::shared::components::section_heading::SectionHeading;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn ContactSection(cards: Option<Vec<ContactCard>>) -> impl IntoView {
    let Some(cards) = cards else {
        return ().into_any();
    };

    view! {
        <section id="contact" class="section">
            <div class="container">
                <SectionHeading number="05" title="Get In Touch" />

                <p class="contact__intro">
                    "I'm currently open to new opportunities and collaborations. "
                    "Whether you have a project in mind or just want to say hello, I'd love to hear from you!"
                </p>

                <div class="contact__grid">
                    <div class="contact__cards">
                        {cards.into_iter().map(contact_card).collect_view()}
                    </div>

                    <div class="card contact__form-card">
                        <ContactFormPanel />
                    </div>
                </div>
            </div>
        </section>
    }
    .into_any()
}

fn contact_card(card: ContactCard) -> impl IntoView {
    let target = card.external.then_some("_blank");

    view! {
        <a href=card.href target=target rel="noopener noreferrer" class="card contact-card">
            <span class="contact-card__icon">{icon(card.icon)}</span>
            <div>
                <p class="contact-card__label">{card.label}</p>
                <p class="contact-card__value">{card.value}</p>
            </div>
        </a>
    }
}

#[component]
fn ContactFormPanel() -> impl IntoView {
    let vm = ContactFormViewModel::new();
    let submitting = Signal::derive(move || vm.is_submitting());

    view! {
        <Show
            when=move || vm.phase() != ContactPhase::Submitted
            fallback=move || view! {
                <div class="contact__sent">
                    <span class="contact__sent-icon">{icon("check-circle")}</span>
                    <h3>"Message Sent!"</h3>
                    <p>"Thank you for reaching out. I'll get back to you soon."</p>
                    <Button
                        variant="secondary"
                        on_click=Callback::new(move |_| vm.send_another_command())
                    >
                        "Send Another Message"
                    </Button>
                </div>
            }
        >
            <form
                class="contact__form"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    vm.submit_command();
                }
            >
                <div class="form-group">
                    <label for="name">"Name"</label>
                    <input
                        type="text"
                        id="name"
                        required
                        placeholder="Your name"
                        prop:value=vm.value(ContactField::Name)
                        on:input=move |ev| vm.set(ContactField::Name, event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="email">"Email"</label>
                    <input
                        type="email"
                        id="email"
                        required
                        placeholder="your@email.com"
                        prop:value=vm.value(ContactField::Email)
                        on:input=move |ev| vm.set(ContactField::Email, event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="message">"Message"</label>
                    <textarea
                        id="message"
                        required
                        rows="4"
                        placeholder="Your message..."
                        prop:value=vm.value(ContactField::Message)
                        on:input=move |ev| vm.set(ContactField::Message, event_target_value(&ev))
                    />
                </div>

                <Button button_type="submit" size="lg" class="button--block" disabled=submitting>
                    {move || if submitting.get() { "Sending..." } else { "Send Message" }}
                    {icon("send")}
                </Button>
            </form>
        </Show>
    }
}

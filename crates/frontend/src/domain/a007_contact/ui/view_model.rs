use super::model::{ContactField, ContactForm, ContactPhase};
use crate::shared::api::{HttpPortfolioApi, PortfolioApi};
use leptos::prelude::*;

/// ViewModel for the contact form
#[derive(Clone, Copy)]
pub struct ContactFormViewModel {
    pub form: RwSignal<ContactForm>,
}

impl ContactFormViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ContactForm::default()),
        }
    }

    pub fn value(&self, field: ContactField) -> impl Fn() -> String + Copy + Send + Sync + 'static {
        let form = self.form;
        move || {
            form.with(|f| match field {
                ContactField::Name => f.fields.name.clone(),
                ContactField::Email => f.fields.email.clone(),
                ContactField::Message => f.fields.message.clone(),
            })
        }
    }

    pub fn set(&self, field: ContactField, value: String) {
        self.form.update(|f| f.set(field, value));
    }

    pub fn phase(&self) -> ContactPhase {
        self.form.with(|f| f.phase)
    }

    pub fn is_submitting(&self) -> bool {
        self.form.with(ContactForm::is_submitting)
    }

    /// Submit the form; the request runs in the background.
    pub fn submit_command(&self) {
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            vm.submit_with(&HttpPortfolioApi).await;
        });
    }

    /// Send the entered message through `api` and apply the outcome.
    /// Does nothing while a send is in flight, after confirmation, or with
    /// an incomplete form.
    pub async fn submit_with(&self, api: &impl PortfolioApi) {
        let form = self.form;
        let Some(message) = form.try_update(ContactForm::begin_submit).flatten() else {
            return;
        };
        log::debug!("Submitting contact form");

        let result = api.submit_contact(&message).await;
        form.update(|f| f.finish_submit(result));
    }

    pub fn send_another_command(&self) {
        self.form.update(ContactForm::send_another);
    }
}

impl Default for ContactFormViewModel {
    fn default() -> Self {
        Self::new()
    }
}

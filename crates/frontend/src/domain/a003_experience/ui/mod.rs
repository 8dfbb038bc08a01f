use crate::shared::components::section_heading::SectionHeading;
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use contracts::domain::a003_experience::aggregate::Experience;
use leptos::prelude::*;

/// Work history in the order received from the backend.
#[component]
pub fn ExperienceSection(experiences: Vec<Experience>) -> impl IntoView {
    view! {
        <section id="experience" class="section section--tinted">
            <div class="container">
                <SectionHeading number="02" title="Experience" />

                <div class="experience__list">
                    {experiences.into_iter().map(experience_card).collect_view()}
                </div>
            </div>
        </section>
    }
}

fn experience_card(exp: Experience) -> impl IntoView {
    let date_span = exp.date_span();
    let responsibilities = exp.responsibilities;
    let technologies = exp.technologies;

    view! {
        <article class="card experience-card">
            <header class="card__header experience-card__header">
                <div class="experience-card__role">
                    <span class="experience-card__icon">{icon("briefcase")}</span>
                    <div>
                        <h3 class="card__title">{exp.title}</h3>
                        <p class="experience-card__company">{exp.company}</p>
                        {exp.location.map(|location| view! {
                            <p class="experience-card__location">{location}</p>
                        })}
                    </div>
                </div>
                {date_span.map(|span| view! { <span class="experience-card__dates">{span}</span> })}
            </header>

            <div class="card__content">
                {exp.description.map(|description| view! {
                    <p class="experience-card__description">{description}</p>
                })}

                {(!responsibilities.is_empty()).then(|| view! {
                    <ul class="bullet-list">
                        {responsibilities
                            .into_iter()
                            .map(|resp| view! {
                                <li class="bullet-list__item">
                                    <span class="bullet-list__marker">"▹"</span>
                                    <span>{resp.description}</span>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                })}

                {(!technologies.is_empty()).then(|| view! {
                    <div class="tag-row">
                        {technologies
                            .into_iter()
                            .map(|tech| view! { <Badge variant="primary">{tech}</Badge> })
                            .collect_view()}
                    </div>
                })}
            </div>
        </article>
    }
}

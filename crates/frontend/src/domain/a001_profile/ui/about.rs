use super::model::AboutModel;
use crate::shared::components::section_heading::SectionHeading;
use crate::shared::components::stat_card::StatCard;
use leptos::prelude::*;

#[component]
pub fn About(model: Option<AboutModel>) -> impl IntoView {
    let Some(about) = model else {
        return ().into_any();
    };

    view! {
        <section id="about" class="section">
            <div class="container">
                <SectionHeading number="01" title="About Me" />

                <div class="about__grid">
                    <div class="about__text">
                        {about
                            .paragraphs
                            .into_iter()
                            .map(|paragraph| view! { <p class="about__paragraph">{paragraph}</p> })
                            .collect_view()}

                        <div class="about__stats">
                            {about
                                .stats
                                .into_iter()
                                .map(|stat| view! { <StatCard value=stat.value label=stat.label /> })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="about__aside">
                        <div class="about__avatar">
                            <span class="text-gradient">{about.initials}</span>
                        </div>

                        {about.education.map(|edu| view! {
                            <div class="education-card">
                                <h3 class="education-card__institution">{edu.institution}</h3>
                                <p class="education-card__degree">{edu.degree}</p>
                                {edu.detail.map(|detail| view! {
                                    <p class="education-card__detail">{detail}</p>
                                })}
                                {edu.location.map(|location| view! {
                                    <p class="education-card__detail">{location}</p>
                                })}
                            </div>
                        })}
                    </div>
                </div>
            </div>
        </section>
    }
    .into_any()
}

use super::model::{SkillCategoryModel, SkillLayout, SkillsModel};
use crate::shared::components::section_heading::SectionHeading;
use crate::shared::icons::{icon, skill_icon_name};
use contracts::domain::a006_certification::aggregate::Certification;
use leptos::prelude::*;

#[component]
pub fn SkillsSection(model: SkillsModel) -> impl IntoView {
    let SkillsModel { categories, certifications } = model;

    view! {
        <section id="skills" class="section section--tinted">
            <div class="container">
                <SectionHeading number="04" title="Skills & Technologies" />

                <div class="skills__grid">
                    {categories.into_iter().map(category_card).collect_view()}
                    {(!certifications.is_empty()).then(|| certifications_card(certifications))}
                </div>
            </div>
        </section>
    }
}

fn category_card(category: SkillCategoryModel) -> impl IntoView {
    let body = match category.layout {
        SkillLayout::Bars(bars) => view! {
            <div class="skill-bars">
                {bars
                    .into_iter()
                    .map(|bar| {
                        let label = bar.label();
                        let style = bar.width_style();
                        view! {
                            <div class="skill-bar">
                                <div class="skill-bar__header">
                                    <span>{bar.name}</span>
                                    <span class="skill-bar__value">{label}</span>
                                </div>
                                <div class="skill-bar__track">
                                    <div class="skill-bar__fill" style=style></div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
        SkillLayout::Chips { class, names } => view! {
            <div class="skill-chips">
                {names
                    .into_iter()
                    .map(|name| view! { <span class=class>{name}</span> })
                    .collect_view()}
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="card skill-card">
            <div class="skill-card__header">
                <span class="skill-card__icon">{icon(skill_icon_name(category.icon))}</span>
                <h3 class="skill-card__title">{category.name}</h3>
            </div>
            {body}
        </div>
    }
}

fn certifications_card(certifications: Vec<Certification>) -> impl IntoView {
    view! {
        <div class="card skill-card">
            <div class="skill-card__header">
                <span class="skill-card__icon">{icon("award")}</span>
                <h3 class="skill-card__title">"Certifications"</h3>
            </div>
            <ul class="certifications">
                {certifications
                    .into_iter()
                    .map(|cert| view! {
                        <li class="certification">
                            <span class="certification__medal">"🏅"</span>
                            <div>
                                <p class="certification__title">
                                    {match cert.link {
                                        Some(href) => view! {
                                            <a href=href target="_blank" rel="noopener noreferrer">{cert.title}</a>
                                        }
                                        .into_any(),
                                        None => cert.title.into_any(),
                                    }}
                                </p>
                                <p class="certification__issuer">{cert.issuer}</p>
                                {cert.date.map(|date| view! { <p class="certification__date">{date}</p> })}
                            </div>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

use super::model::{ProjectCardModel, ProjectsModel};
use crate::shared::components::section_heading::SectionHeading;
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn ProjectsSection(model: ProjectsModel) -> impl IntoView {
    let ProjectsModel { featured, other } = model;

    view! {
        <section id="projects" class="section">
            <div class="container">
                <SectionHeading number="03" title="Featured Projects" />

                <div class="projects__featured">
                    {featured.into_iter().map(featured_card).collect_view()}
                </div>

                {(!other.is_empty()).then(|| view! {
                    <h3 class="projects__subheading">"Other Projects"</h3>
                    <div class="projects__grid">
                        {other.into_iter().map(other_card).collect_view()}
                    </div>
                })}
            </div>
        </section>
    }
}

fn external_link(href: Option<String>, icon_name: &'static str, label: &'static str) -> impl IntoView {
    href.map(|href| view! {
        <a href=href target="_blank" rel="noopener noreferrer" class="icon-link" aria-label=label>
            {icon(icon_name)}
        </a>
    })
}

fn featured_card(project: ProjectCardModel) -> impl IntoView {
    let highlights = project.highlights;
    let technologies = project.technologies;

    view! {
        <article class="card project-card project-card--featured">
            <header class="card__header project-card__header">
                <div class="project-card__heading">
                    <span class="project-card__icon">{icon("sparkles")}</span>
                    <div>
                        <span class="project-card__eyebrow">"Featured Project"</span>
                        <h3 class="card__title">{project.title}</h3>
                    </div>
                </div>
                <div class="project-card__links">
                    {external_link(project.github, "github", "GitHub")}
                    {external_link(project.link, "external-link", "Live site")}
                </div>
            </header>

            <div class="card__content">
                {project.description.map(|d| view! { <p class="card__description">{d}</p> })}

                {(!highlights.is_empty()).then(|| view! {
                    <ul class="bullet-list">
                        {highlights
                            .into_iter()
                            .map(|highlight| view! {
                                <li class="bullet-list__item">
                                    <span class="bullet-list__marker">"▹"</span>
                                    <span>{highlight}</span>
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

fn other_card(project: ProjectCardModel) -> impl IntoView {
    let technology_line = project.technology_line();
    let highlights = project.highlights;

    view! {
        <article class="card project-card">
            <header class="card__header project-card__header">
                <h3 class="card__title">{project.title}</h3>
                <div class="project-card__links">
                    {external_link(project.github, "github", "GitHub")}
                </div>
            </header>

            <div class="card__content">
                {project.description.map(|d| view! { <p class="card__description">{d}</p> })}

                {(!highlights.is_empty()).then(|| view! {
                    <div class="tag-row">
                        {highlights
                            .into_iter()
                            .map(|highlight| view! { <Badge variant="accent">{highlight}</Badge> })
                            .collect_view()}
                    </div>
                })}

                {(!technology_line.is_empty()).then(|| view! {
                    <p class="project-card__tech-line">{technology_line}</p>
                })}
            </div>
        </article>
    }
}

use super::model::HeroModel;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Hero(model: Option<HeroModel>) -> impl IntoView {
    let Some(hero) = model else {
        return ().into_any();
    };

    let code_name = format!("\"{}\"", hero.name);
    let code_role = format!("\"{}\"", hero.title);

    view! {
        <section id="home" class="hero">
            <div class="hero__grid"></div>
            <div class="hero__inner">
                <div class="hero__text">
                    <p class="hero__greeting">"Hello, I'm"</p>
                    <h1 class="hero__name">
                        <span class="text-gradient">{hero.name}</span>
                    </h1>
                    <p class="hero__title">{hero.title}</p>
                    {hero.tagline.map(|tagline| view! { <p class="hero__tagline">{tagline}</p> })}

                    <div class="hero__actions">
                        <a href="#projects" class="button button--primary button--large">
                            "View My Work"
                            {icon("arrow-right")}
                        </a>
                        <a href="#contact" class="button button--secondary button--large">
                            "Get In Touch"
                        </a>
                    </div>

                    <div class="hero__social">
                        {hero
                            .links
                            .into_iter()
                            .map(|link| {
                                let target = link.external.then_some("_blank");
                                view! {
                                    <a
                                        href=link.href
                                        target=target
                                        rel="noopener noreferrer"
                                        class="hero__social-link"
                                        aria-label=link.label
                                    >
                                        {icon(link.icon)}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="code-card">
                    <div class="code-card__bar">
                        <span class="code-card__dot code-card__dot--red"></span>
                        <span class="code-card__dot code-card__dot--yellow"></span>
                        <span class="code-card__dot code-card__dot--green"></span>
                        <span class="code-card__file">"profile.rs"</span>
                    </div>
                    <pre class="code-card__body"><code>
                        <span class="code--keyword">"let"</span>" me = "
                        <span class="code--type">"Engineer"</span>" {\n"
                        "    name: "<span class="code--string">{code_name}</span>",\n"
                        "    role: "<span class="code--string">{code_role}</span>",\n"
                        "};"
                    </code></pre>
                </div>
            </div>

            <a href="#about" class="hero__scroll" aria-label="Scroll to about">
                {icon("chevrons-down")}
            </a>
        </section>
    }
    .into_any()
}

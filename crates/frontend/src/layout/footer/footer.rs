use crate::domain::a001_profile::ui::model::SocialLink;
use crate::shared::icons::icon;
use chrono::Datelike;
use leptos::prelude::*;

pub fn copyright_line(year: i32) -> String {
    format!("© {} All rights reserved.", year)
}

#[component]
pub fn Footer(
    /// Profile name credited in the footer
    owner: Option<String>,
    links: Vec<SocialLink>,
) -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer class="footer">
            <div class="footer__inner">
                {owner.map(|name| view! {
                    <p class="footer__credit">
                        "Designed & Built by " <span class="footer__owner">{name}</span>
                    </p>
                })}

                <div class="footer__links">
                    {links
                        .into_iter()
                        .map(|link| {
                            let target = link.external.then_some("_blank");
                            view! {
                                <a
                                    href=link.href
                                    target=target
                                    rel="noopener noreferrer"
                                    class="footer__link"
                                    aria-label=link.label
                                >
                                    {icon(link.icon)}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>

                <p class="footer__copyright">{copyright_line(year)}</p>
            </div>
        </footer>
    }
}

use crate::domain::a001_profile::ui::model::{contact_cards, social_links, AboutModel, ContactCard, HeroModel, SocialLink};
use crate::domain::a001_profile::ui::{About, Hero};
use crate::domain::a003_experience::ui::ExperienceSection;
use crate::domain::a004_project::ui::model::ProjectsModel;
use crate::domain::a004_project::ui::ProjectsSection;
use crate::domain::a005_skill_category::ui::model::SkillsModel;
use crate::domain::a005_skill_category::ui::SkillsSection;
use crate::domain::a007_contact::ui::ContactSection;
use crate::layout::{Footer, Navbar};
use contracts::domain::a003_experience::aggregate::Experience;
use contracts::Portfolio;
use leptos::prelude::*;

/// The loaded portfolio split into the slice each section renders.
#[derive(Debug, Clone, PartialEq)]
pub struct PageModel {
    pub brand: String,
    pub hero: Option<HeroModel>,
    pub about: Option<AboutModel>,
    pub experiences: Vec<Experience>,
    pub projects: ProjectsModel,
    pub skills: SkillsModel,
    pub contact: Option<Vec<ContactCard>>,
    pub owner: Option<String>,
    pub footer_links: Vec<SocialLink>,
}

impl PageModel {
    pub fn from_portfolio(portfolio: &Portfolio) -> Self {
        let profile = portfolio.profile.as_ref();
        Self {
            brand: profile.map(|p| p.initials()).unwrap_or_default(),
            hero: HeroModel::build(profile),
            about: AboutModel::build(
                profile,
                portfolio.primary_education(),
                portfolio.experiences.len(),
                portfolio.projects.len(),
            ),
            experiences: portfolio.experiences.clone(),
            projects: ProjectsModel::new(&portfolio.projects),
            skills: SkillsModel::new(&portfolio.skill_categories, &portfolio.certifications),
            contact: contact_cards(profile),
            owner: profile.map(|p| p.name.clone()),
            footer_links: profile.map(social_links).unwrap_or_default(),
        }
    }
}

#[component]
pub fn PortfolioPage(model: PageModel) -> impl IntoView {
    let PageModel {
        brand,
        hero,
        about,
        experiences,
        projects,
        skills,
        contact,
        owner,
        footer_links,
    } = model;

    view! {
        <div class="page">
            <Navbar brand=brand />
            <main>
                <Hero model=hero />
                <About model=about />
                <ExperienceSection experiences=experiences />
                <ProjectsSection model=projects />
                <SkillsSection model=skills />
                <ContactSection cards=contact />
            </main>
            <Footer owner=owner links=footer_links />
        </div>
    }
}

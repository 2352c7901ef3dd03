use std::rc::Rc;

use yew::prelude::*;

use crate::components::animated_section::{AnimatedSection, RevealItem, StaggerGroup};
use crate::components::contact_form::ContactForm;
use crate::components::footer::Footer;
use crate::components::nav::Nav;
use crate::components::scroll_top::ScrollTopButton;
use crate::content::{
    section_id, About, Certification, Education, Experience, Portfolio, Position, Profile, Project,
    SkillGroup,
};
use crate::view::chrome::Parallax;
use crate::view::dom::use_scroll_tracking;
use crate::view::reveal::Entrance;
use crate::view::store::{ViewContext, ViewState};

fn render_tags(tags: &[String], class: &'static str) -> Html {
    html! {
        <div class="tag-list">
            { for tags.iter().map(|tag| html! { <span class={class}>{tag}</span> }) }
        </div>
    }
}

fn render_bullets(items: &[String]) -> Html {
    html! {
        <ul class="bullet-list">
            { for items.iter().map(|item| html! {
                <li><span class="chevron">{"›"}</span><span>{item}</span></li>
            }) }
        </ul>
    }
}

fn render_hero(profile: &Profile, parallax: Parallax) -> Html {
    let (lead, highlight, tail) = &profile.headline;
    let rise = format!(
        "transform: translateY({:.1}px); opacity: {:.3};",
        parallax.rise_px, parallax.opacity
    );
    let sink = format!(
        "transform: translateY({:.1}px); opacity: {:.3};",
        parallax.sink_px, parallax.opacity
    );

    html! {
        <section id={section_id::HOME} class="hero">
            <div class="hero-blob hero-blob-top" style={rise}></div>
            <div class="hero-blob hero-blob-bottom" style={sink}></div>

            <div class="container hero-content">
                <div class="hero-text slide-in-left">
                    <div class="role-badge">{&profile.role}</div>
                    <h1>{"Hi, I'm "}<span class="gradient-text">{&profile.name}</span></h1>
                    <h2 class="hero-headline">
                        {lead}<span class="highlight">{highlight}</span>{tail}
                    </h2>
                    <p class="hero-summary">{&profile.summary}</p>
                    <div class="hero-actions">
                        <a href={format!("#{}", section_id::CONTACT)} class="btn btn-primary">{"✉ Contact Me"}</a>
                        <a href={profile.resume_url.clone()} class="btn btn-outline">{"⬇ Download CV"}</a>
                    </div>
                    <div class="hero-socials">
                        <a href={profile.github_url.clone()} target="_blank" rel="noopener noreferrer">{"GitHub"}</a>
                        <a href={profile.linkedin_url.clone()} target="_blank" rel="noopener noreferrer">{"LinkedIn"}</a>
                        <a href={format!("mailto:{}", profile.email)}>{"Email"}</a>
                    </div>
                </div>
                <div class="hero-portrait slide-in-right">
                    <div class="portrait-ring"></div>
                    <img src={profile.photo.clone()} alt={profile.name.clone()} class="portrait" />
                    <div class="status-dot"></div>
                </div>
            </div>

            <a href={format!("#{}", section_id::ABOUT)} class="scroll-hint">{"↓"}</a>
        </section>
    }
}

fn render_about(about: &About) -> Html {
    html! {
        <div class="two-column">
            <RevealItem entrance={Entrance::FadeLeft}>
                <h2 class="section-heading">{"About Me"}</h2>
                { for about.paragraphs.iter().map(|paragraph| html! { <p class="lead">{paragraph}</p> }) }
                <div class="traits">
                    { for about.traits.iter().map(|t| html! {
                        <span class="trait"><span class="check">{"✔"}</span>{t}</span>
                    }) }
                </div>
            </RevealItem>
            <RevealItem entrance={Entrance::FadeRight}>
                <div class="card-grid">
                    { for about.focus_areas.iter().map(|area| html! {
                        <div class="card focus-card">
                            <div class="card-icon">{&area.icon}</div>
                            <h3>{&area.title}</h3>
                            <p>{&area.text}</p>
                        </div>
                    }) }
                </div>
            </RevealItem>
        </div>
    }
}

fn render_experience(entries: &[Experience]) -> Html {
    html! {
        <>
            <h2 class="section-heading centered">{"Professional Experience"}</h2>
            <div class="timeline">
                { for entries.iter().map(|entry| html! {
                    <RevealItem class={classes!("card", "experience-card")}>
                        <div class="experience-header">
                            <h3>{&entry.role}</h3>
                            <div class="experience-dates">
                                <span class="badge">{&entry.period}</span>
                                <span class="badge muted">{&entry.duration}</span>
                            </div>
                        </div>
                        <h4>{&entry.organization}</h4>
                        { render_bullets(&entry.highlights) }
                        <h5>{"Key Technologies:"}</h5>
                        { render_tags(&entry.technologies, "tag") }
                    </RevealItem>
                }) }
            </div>
        </>
    }
}

fn render_skills(groups: &[SkillGroup]) -> Html {
    html! {
        <>
            <h2 class="section-heading centered">{"Technical Skills"}</h2>
            <StaggerGroup class={classes!("card-grid", "wide")}>
                { for groups.iter().map(|group| html! {
                    <div class="card skill-card">
                        <h3><span class="card-icon inline">{&group.icon}</span>{&group.title}</h3>
                        { render_tags(&group.items, "skill-tag") }
                    </div>
                }) }
            </StaggerGroup>
        </>
    }
}

fn render_projects(projects: &[Project]) -> Html {
    html! {
        <>
            <h2 class="section-heading centered">{"Featured Projects"}</h2>
            <StaggerGroup class={classes!("card-grid", "wide")}>
                { for projects.iter().map(|project| html! {
                    <div class="card project-card">
                        {
                            if project.featured {
                                html! { <span class="featured-badge">{"★ Featured"}</span> }
                            } else {
                                html! {}
                            }
                        }
                        <img src={project.image.clone()} alt={format!("{} Project", project.name)} loading="lazy" />
                        <div class="project-body">
                            <h3>{&project.name}</h3>
                            <p class="tagline">{&project.tagline}</p>
                            { render_bullets(&project.highlights) }
                            { render_tags(&project.technologies, "tag") }
                            <a href={project.source_url.clone()} class="source-link" target="_blank" rel="noopener noreferrer">
                                {"Source Code ↗"}
                            </a>
                        </div>
                    </div>
                }) }
            </StaggerGroup>
        </>
    }
}

fn render_education(entries: &[Education]) -> Html {
    html! {
        <>
            <h2 class="section-heading centered">{"Education"}</h2>
            <StaggerGroup class={classes!("timeline")}>
                { for entries.iter().map(|entry| html! {
                    <div class="timeline-entry">
                        <div class="timeline-dot"></div>
                        <div class="card">
                            <div class="experience-header">
                                <h3>{&entry.degree}</h3>
                                <div class="experience-dates">
                                    <span class="badge">{&entry.period}</span>
                                    <span class="badge muted">{&entry.score}</span>
                                </div>
                            </div>
                            <h4>{&entry.institution}</h4>
                            {
                                if entry.coursework.is_empty() {
                                    html! {}
                                } else {
                                    html! {
                                        <>
                                            <p>{"Relevant coursework:"}</p>
                                            { render_tags(&entry.coursework, "tag") }
                                        </>
                                    }
                                }
                            }
                        </div>
                    </div>
                }) }
            </StaggerGroup>
        </>
    }
}

fn render_positions(positions: &[Position]) -> Html {
    html! {
        <>
            <h2 class="section-heading centered">{"Leadership Experience"}</h2>
            <StaggerGroup class={classes!("card-grid")}>
                { for positions.iter().map(|position| html! {
                    <div class="card">
                        <div class="card-icon">{&position.icon}</div>
                        <h3>{&position.title}</h3>
                        <p>{&position.organization}</p>
                        <p class="muted">{&position.period}</p>
                    </div>
                }) }
            </StaggerGroup>
        </>
    }
}

fn render_certifications(certifications: &[Certification]) -> Html {
    html! {
        <>
            <h2 class="section-heading centered">{"Certifications & Achievements"}</h2>
            <StaggerGroup class={classes!("card-grid")}>
                { for certifications.iter().map(|cert| html! {
                    <div class="card cert-card">
                        <div class="card-icon">{"🏅"}</div>
                        <h3>{&cert.title}</h3>
                        <p class="issuer">{&cert.issuer}</p>
                        <p class="muted">{&cert.period}</p>
                        <p>{&cert.summary}</p>
                        {
                            match &cert.url {
                                Some(url) => html! {
                                    <a href={url.clone()} target="_blank" rel="noopener noreferrer">{"View Certificate"}</a>
                                },
                                None => html! {},
                            }
                        }
                    </div>
                }) }
            </StaggerGroup>
        </>
    }
}

fn render_contact(content: &Portfolio) -> Html {
    let profile = &content.profile;
    html! {
        <>
            <h2 class="section-heading centered">{"Get In Touch"}</h2>
            <div class="two-column">
                <RevealItem entrance={Entrance::FadeLeft}>
                    <h3>{&content.contact.heading}</h3>
                    <p class="lead">{&content.contact.text}</p>
                    <div class="contact-channel">
                        <h4>{"Email"}</h4>
                        <a href={format!("mailto:{}", profile.email)}>{&profile.email}</a>
                    </div>
                    <div class="contact-channel">
                        <h4>{"LinkedIn"}</h4>
                        <a href={profile.linkedin_url.clone()} target="_blank" rel="noopener noreferrer">{&profile.linkedin_label}</a>
                    </div>
                    <div class="contact-channel">
                        <h4>{"GitHub"}</h4>
                        <a href={profile.github_url.clone()} target="_blank" rel="noopener noreferrer">{&profile.github_label}</a>
                    </div>
                </RevealItem>
                <RevealItem entrance={Entrance::FadeRight} class={classes!("card")}>
                    <h3>{"Send a Message"}</h3>
                    <ContactForm />
                </RevealItem>
            </div>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct PortfolioProps {
    pub content: Rc<Portfolio>,
}

#[function_component(PortfolioPage)]
pub fn portfolio_page(props: &PortfolioProps) -> Html {
    let store: ViewContext = use_reducer(ViewState::default);
    use_scroll_tracking(store.dispatcher());

    let content = &props.content;
    let config = *store.config();
    let dispatcher = store.dispatcher();

    html! {
        <div class="portfolio-page">
            <Nav brand={content.profile.brand.clone()} links={content.nav.clone()} store={store.clone()} />

            <div class="blob blob-left"></div>
            <div class="blob blob-right"></div>

            { render_hero(&content.profile, store.parallax()) }

            <AnimatedSection id={section_id::ABOUT} class={classes!("bg-white")}
                reveal={store.reveal_state(section_id::ABOUT)} config={config} dispatcher={dispatcher.clone()}>
                { render_about(&content.about) }
            </AnimatedSection>

            <AnimatedSection id={section_id::EXPERIENCE} class={classes!("bg-gray")}
                reveal={store.reveal_state(section_id::EXPERIENCE)} config={config} dispatcher={dispatcher.clone()}>
                { render_experience(&content.experience) }
            </AnimatedSection>

            <AnimatedSection id={section_id::SKILLS} class={classes!("bg-white")}
                reveal={store.reveal_state(section_id::SKILLS)} config={config} dispatcher={dispatcher.clone()}>
                { render_skills(&content.skills) }
            </AnimatedSection>

            <AnimatedSection id={section_id::PROJECTS} class={classes!("bg-gray")}
                reveal={store.reveal_state(section_id::PROJECTS)} config={config} dispatcher={dispatcher.clone()}>
                { render_projects(&content.projects) }
            </AnimatedSection>

            <AnimatedSection id={section_id::EDUCATION} class={classes!("bg-gray")}
                reveal={store.reveal_state(section_id::EDUCATION)} config={config} dispatcher={dispatcher.clone()}>
                { render_education(&content.education) }
            </AnimatedSection>

            <AnimatedSection id={section_id::RESPONSIBILITIES} class={classes!("bg-white")}
                reveal={store.reveal_state(section_id::RESPONSIBILITIES)} config={config} dispatcher={dispatcher.clone()}>
                { render_positions(&content.positions) }
            </AnimatedSection>

            <AnimatedSection id={section_id::CERTIFICATIONS} class={classes!("bg-gray")}
                reveal={store.reveal_state(section_id::CERTIFICATIONS)} config={config} dispatcher={dispatcher.clone()}>
                { render_certifications(&content.certifications) }
            </AnimatedSection>

            <div class="cta-band">
                <div class="container centered">
                    <h2>{&content.cta.heading}</h2>
                    <p>{&content.cta.text}</p>
                    <div class="hero-actions centered">
                        <a href={format!("#{}", section_id::CONTACT)} class="btn btn-light">{"✉ Get in Touch"}</a>
                        <a href={content.profile.resume_url.clone()} class="btn btn-ghost">{"⬇ Download Resume"}</a>
                    </div>
                </div>
            </div>

            <AnimatedSection id={section_id::CONTACT} class={classes!("bg-white")}
                reveal={store.reveal_state(section_id::CONTACT)} config={config} dispatcher={dispatcher.clone()}>
                { render_contact(content) }
            </AnimatedSection>

            <Footer profile={content.profile.clone()} />
            <ScrollTopButton store={store.clone()} />

            <style>{PAGE_CSS}</style>
        </div>
    }
}

const PAGE_CSS: &str = r#"
    * { box-sizing: border-box; }
    html { scroll-behavior: smooth; }
    body {
        margin: 0;
        font-family: 'Inter', -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
        color: #1f2937;
        background: #f9fafb;
    }
    h1, h2, h3 { font-family: 'Montserrat', sans-serif; }
    .container {
        max-width: 1200px;
        margin: 0 auto;
        padding: 0 1rem;
    }
    .centered { text-align: center; justify-content: center; }
    .gradient-text {
        background: linear-gradient(90deg, #4f46e5, #db2777);
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }
    .highlight {
        background: linear-gradient(transparent 60%, rgba(79, 70, 229, 0.25) 60%);
    }

    /* reveal */
    .reveal {
        transition:
            opacity var(--reveal-duration, 0.6s) ease-out,
            transform var(--reveal-duration, 0.6s) ease-out;
    }
    .reveal.hidden {
        opacity: 0;
        transform: translate(var(--reveal-dx, 0px), var(--reveal-dy, 20px));
    }
    .reveal.visible {
        opacity: 1;
        transform: translate(0, 0);
    }

    /* hero */
    .hero {
        min-height: 100vh;
        display: flex;
        align-items: center;
        padding-top: 5rem;
        position: relative;
        overflow: hidden;
    }
    .hero-content {
        display: flex;
        align-items: center;
        gap: 2.5rem;
        position: relative;
        z-index: 10;
    }
    .hero-text, .hero-portrait { flex: 1; }
    .hero-portrait {
        position: relative;
        display: flex;
        justify-content: center;
    }
    .hero-blob {
        position: absolute;
        width: 16rem;
        height: 16rem;
        border-radius: 9999px;
        filter: blur(64px);
    }
    .hero-blob-top { top: 5rem; right: 2.5rem; background: #e0e7ff; }
    .hero-blob-bottom { bottom: 5rem; left: 2.5rem; background: #fce7f3; }
    .role-badge {
        display: inline-block;
        padding: 0.25rem 1rem;
        margin-bottom: 1rem;
        border-radius: 9999px;
        background: #e0e7ff;
        color: #3730a3;
        font-weight: 500;
    }
    .hero h1 { font-size: 3.5rem; margin: 0 0 1rem; }
    .hero-headline { font-size: 1.75rem; color: #374151; margin: 0 0 1.5rem; }
    .hero-summary { font-size: 1.125rem; color: #4b5563; max-width: 32rem; margin-bottom: 2rem; }
    .hero-actions { display: flex; flex-wrap: wrap; gap: 1rem; }
    .hero-socials { display: flex; gap: 1rem; margin-top: 2rem; }
    .hero-socials a {
        padding: 0.5rem 1rem;
        border-radius: 9999px;
        background: #f3f4f6;
        color: #374151;
        text-decoration: none;
    }
    .portrait-ring {
        width: 20rem;
        height: 20rem;
        border-radius: 9999px;
        background: linear-gradient(135deg, #818cf8, #ec4899);
        animation: pulseSlow 3s ease-in-out infinite;
    }
    .portrait {
        position: absolute;
        width: 20rem;
        height: 20rem;
        border-radius: 9999px;
        object-fit: cover;
        border: 4px solid white;
        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
    }
    .status-dot {
        position: absolute;
        bottom: 0;
        right: 25%;
        width: 1.5rem;
        height: 1.5rem;
        border-radius: 9999px;
        background: #22c55e;
        border: 4px solid white;
    }
    .scroll-hint {
        position: absolute;
        bottom: 2.5rem;
        left: 50%;
        transform: translateX(-50%);
        color: #9ca3af;
        font-size: 1.5rem;
        text-decoration: none;
        animation: bounce 1.5s infinite;
    }
    .slide-in-left { animation: slideInLeft 0.8s ease-out both; }
    .slide-in-right { animation: slideInRight 0.8s ease-out 0.2s both; }
    @keyframes slideInLeft {
        from { opacity: 0; transform: translateX(-50px); }
        to { opacity: 1; transform: translateX(0); }
    }
    @keyframes slideInRight {
        from { opacity: 0; transform: translateX(50px); }
        to { opacity: 1; transform: translateX(0); }
    }
    @keyframes pulseSlow {
        0%, 100% { opacity: 1; }
        50% { opacity: 0.7; }
    }
    @keyframes bounce {
        0%, 100% { transform: translate(-50%, 0); }
        50% { transform: translate(-50%, -10px); }
    }

    /* sections */
    .page-section { padding: 5rem 0; }
    .bg-white { background: white; }
    .bg-gray { background: #f9fafb; }
    .section-heading { font-size: 2.25rem; margin: 0 0 2.5rem; }
    .lead { color: #374151; font-size: 1.0625rem; line-height: 1.7; }
    .muted { color: #6b7280; }
    .two-column { display: flex; gap: 2.5rem; }
    .two-column > * { flex: 1; }
    .traits { display: flex; flex-wrap: wrap; gap: 1rem; }
    .trait { display: flex; align-items: center; gap: 0.5rem; }
    .check { color: #4f46e5; }
    .card-grid {
        display: grid;
        grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
        gap: 1.5rem;
    }
    .card-grid.wide { grid-template-columns: repeat(auto-fill, minmax(320px, 1fr)); }
    .card {
        background: white;
        border-radius: 0.75rem;
        padding: 1.5rem;
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.06);
        border: 1px solid #f3f4f6;
        transition: transform 0.2s ease;
        height: 100%;
    }
    .card:hover { transform: translateY(-5px); }
    .card-icon { font-size: 2rem; margin-bottom: 1rem; }
    .card-icon.inline { font-size: 1.25rem; margin: 0 0.5rem 0 0; }
    .timeline { display: flex; flex-direction: column; gap: 2rem; max-width: 56rem; margin: 0 auto; }
    .timeline-entry { position: relative; padding-left: 2rem; }
    .timeline-dot {
        position: absolute;
        left: 0;
        top: 1.75rem;
        width: 1rem;
        height: 1rem;
        border-radius: 9999px;
        background: #4f46e5;
    }
    .experience-header { display: flex; justify-content: space-between; flex-wrap: wrap; gap: 0.5rem; }
    .experience-header h3 { margin: 0; }
    .experience-dates { display: flex; gap: 0.5rem; }
    .badge {
        padding: 0.25rem 0.75rem;
        border-radius: 9999px;
        background: #e0e7ff;
        color: #3730a3;
        font-size: 0.875rem;
    }
    .badge.muted { background: #f3f4f6; color: #4b5563; }
    .bullet-list { list-style: none; padding: 0; }
    .bullet-list li { display: flex; gap: 0.5rem; margin-bottom: 0.5rem; }
    .chevron { color: #4f46e5; font-weight: 700; }
    .tag-list { display: flex; flex-wrap: wrap; gap: 0.5rem; margin: 0.75rem 0; }
    .tag, .skill-tag {
        padding: 0.25rem 0.75rem;
        border-radius: 9999px;
        font-size: 0.875rem;
    }
    .tag { background: #f3f4f6; color: #374151; }
    .skill-tag { background: #eef2ff; color: #4338ca; }
    .project-card { padding: 0; overflow: hidden; position: relative; }
    .project-card img { width: 100%; height: 12rem; object-fit: cover; }
    .project-body { padding: 1.5rem; }
    .tagline { color: #4f46e5; font-weight: 500; }
    .featured-badge {
        position: absolute;
        top: 1rem;
        right: 1rem;
        padding: 0.25rem 0.75rem;
        border-radius: 9999px;
        background: #fbbf24;
        color: #78350f;
        font-size: 0.75rem;
        font-weight: 700;
    }
    .source-link { color: #4f46e5; font-weight: 600; text-decoration: none; }
    .issuer { font-weight: 600; color: #4338ca; }
    .contact-channel { margin-bottom: 1.25rem; }
    .contact-channel h4 { margin: 0 0 0.25rem; }
    .contact-form { display: flex; flex-direction: column; gap: 1rem; }
    .form-row { display: flex; gap: 1rem; }
    .form-row > * { flex: 1; }
    .form-field { display: flex; flex-direction: column; gap: 0.25rem; }
    .form-field input, .form-field textarea {
        padding: 0.75rem 1rem;
        border: 1px solid #d1d5db;
        border-radius: 0.5rem;
        font: inherit;
    }

    /* call to action */
    .cta-band {
        padding: 5rem 0;
        color: white;
        background: linear-gradient(90deg, #4f46e5, #db2777);
    }
    .cta-band h2 { font-size: 2.25rem; margin: 0 0 1.5rem; }
    .cta-band p { font-size: 1.25rem; max-width: 42rem; margin: 0 auto 2rem; }

    /* buttons */
    .btn {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        padding: 0.75rem 1.5rem;
        border-radius: 0.5rem;
        font-weight: 600;
        text-decoration: none;
        cursor: pointer;
        border: 2px solid transparent;
    }
    .btn-primary { background: #4f46e5; color: white; }
    .btn-primary:hover { background: #4338ca; }
    .btn-outline { border-color: #4f46e5; color: #4f46e5; }
    .btn-light { background: white; color: #4f46e5; }
    .btn-ghost { border-color: white; color: white; }

    /* decorative */
    .blob {
        position: absolute;
        width: 24rem;
        height: 24rem;
        border-radius: 9999px;
        filter: blur(80px);
        opacity: 0.4;
        z-index: -1;
    }
    .blob-left { top: 5rem; left: -12rem; background: #c7d2fe; }
    .blob-right { bottom: 5rem; right: -12rem; background: #fbcfe8; }

    /* footer */
    .site-footer { background: #111827; color: white; padding: 2.5rem 0; }
    .footer-content {
        max-width: 1200px;
        margin: 0 auto;
        padding: 0 1rem;
        display: flex;
        justify-content: space-between;
        align-items: center;
    }
    .footer-role { color: #9ca3af; }
    .footer-links { display: flex; gap: 1rem; }
    .footer-links a { color: #9ca3af; text-decoration: none; }
    .footer-links a:hover { color: white; }
    .copyright { text-align: center; color: #6b7280; margin-top: 2rem; }

    @media (max-width: 768px) {
        .hero-content, .two-column, .form-row, .footer-content { flex-direction: column; }
        .hero h1 { font-size: 2.5rem; }
        .portrait-ring, .portrait { width: 16rem; height: 16rem; }
    }
"#;

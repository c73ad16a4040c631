use serde_json::json;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use web_sys::{window, Event, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::{
    catalog::{self, Project, PROFILE, PROJECTS, SKILLS},
    config::SiteConfig,
    listener::ScopedListener,
    logging::{log_event, LogLevel},
    nav::{self, NavigationPlan, ScrollTarget, Section},
    state::{ViewAction, ViewState},
};

impl Reducible for ViewState {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match self.applied(action) {
            Some(next) => Rc::new(next),
            None => self,
        }
    }
}

fn log(config: SiteConfig, level: LogLevel, event: &str, fields: serde_json::Value) {
    log_event(config.log_level, level, event, fields);
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn scroll_behavior() -> ScrollBehavior {
    if prefers_reduced_motion() {
        ScrollBehavior::Auto
    } else {
        ScrollBehavior::Smooth
    }
}

fn current_scroll_y() -> u32 {
    window()
        .and_then(|w| w.scroll_y().ok())
        .map(|value| value.max(0.0) as u32)
        .unwrap_or(0)
}

fn apply_navigation(plan: NavigationPlan) {
    let Some(win) = window() else {
        return;
    };

    let _ = win.location().set_hash(plan.fragment);

    match plan.scroll {
        ScrollTarget::Top => win.scroll_to_with_x_and_y(0.0, 0.0),
        ScrollTarget::Element(id) => {
            let Some(element) = win.document().and_then(|d| d.get_element_by_id(id)) else {
                return;
            };
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(scroll_behavior());
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

#[derive(Properties, PartialEq)]
struct NavBarProps {
    menu_open: bool,
    on_toggle_menu: Callback<()>,
    on_navigate: Callback<Section>,
    on_menu_select: Callback<Section>,
}

#[function_component(NavBar)]
fn nav_bar(props: &NavBarProps) -> Html {
    let on_toggle = {
        let on_toggle_menu = props.on_toggle_menu.clone();
        Callback::from(move |_: MouseEvent| on_toggle_menu.emit(()))
    };

    html! {
        <nav class="site-nav">
            <div class="nav-inner">
                <a href={Section::Home.href()} class="brand">{PROFILE.initials}</a>

                <div class="nav-desktop">
                    { for Section::ALL.into_iter().map(|section| {
                        let on_navigate = props.on_navigate.clone();
                        html! {
                            <button
                                key={section.id()}
                                class="nav-button"
                                type="button"
                                onclick={Callback::from(move |_: MouseEvent| on_navigate.emit(section))}
                            >
                                {section.label()}
                            </button>
                        }
                    }) }
                </div>

                <button
                    class="nav-toggle"
                    type="button"
                    aria-label={if props.menu_open { "Close menu" } else { "Open menu" }}
                    aria-expanded={props.menu_open.to_string()}
                    onclick={on_toggle}
                >
                    <span aria-hidden="true">{if props.menu_open { "✕" } else { "☰" }}</span>
                </button>
            </div>

            if props.menu_open {
                <div class="nav-mobile">
                    { for Section::ALL.into_iter().map(|section| {
                        let on_menu_select = props.on_menu_select.clone();
                        html! {
                            <a
                                key={section.id()}
                                class="nav-mobile-link"
                                href={section.href()}
                                onclick={Callback::from(move |_: MouseEvent| on_menu_select.emit(section))}
                            >
                                {section.label()}
                            </a>
                        }
                    }) }
                </div>
            }
        </nav>
    }
}

#[derive(Properties, PartialEq)]
struct HeroProps {
    on_view_work: Callback<()>,
}

#[function_component(Hero)]
fn hero(props: &HeroProps) -> Html {
    let on_view_work = {
        let on_view_work = props.on_view_work.clone();
        Callback::from(move |_: MouseEvent| on_view_work.emit(()))
    };

    html! {
        <section id={Section::Home.id()} class="hero">
            <div class="hero-inner">
                <div class="welcome-pill">{"Welcome to my portfolio"}</div>

                <div class="availability">
                    <span class="availability-dot" aria-hidden="true"></span>
                    <span>{PROFILE.availability}</span>
                </div>

                <div class="avatar-frame">
                    <div class="avatar-glow" aria-hidden="true"></div>
                    <img class="avatar" src={PROFILE.photo_url} alt={PROFILE.name} />
                </div>

                <h1 class="hero-title">
                    {"Hi, I'm "}<span class="gradient-text">{PROFILE.name}</span>
                </h1>
                <p class="hero-role">
                    <span class="gradient-text">{PROFILE.role}</span>
                    {" @ "}
                    <span class="gradient-text alt">{PROFILE.employer}</span>
                </p>
                <p class="hero-tagline">{PROFILE.tagline}</p>

                <div class="hero-actions">
                    <button class="button primary" type="button" onclick={on_view_work}>{"View My Work"}</button>
                    <a class="button outline" href={Section::Contact.href()}>{"Get In Touch"}</a>
                </div>

                <div class="scroll-hint" aria-hidden="true">{"⌄"}</div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct FlipCardProps {
    index: usize,
    project: Project,
    flipped: bool,
    on_flip: Callback<usize>,
}

#[function_component(FlipCard)]
fn flip_card(props: &FlipCardProps) -> Html {
    let onclick = {
        let on_flip = props.on_flip.clone();
        let index = props.index;
        Callback::from(move |_: MouseEvent| on_flip.emit(index))
    };
    let project = props.project;

    html! {
        <div class="flip-card" {onclick}>
            <div class={classes!("flip-card-inner", props.flipped.then_some("is-flipped"))}>
                <div class={classes!("flip-card-face", "front", project.color)}>
                    <div class="flip-card-glyph">{project.image}</div>
                    <h3>{project.title}</h3>
                    <p class="muted">{"Click to see details"}</p>
                </div>

                <div class="flip-card-face back">
                    <div>
                        <span class={classes!("metric-pill", project.color)}>{project.metrics}</span>
                        <p>{project.description}</p>
                        <p class="eyebrow">{"TECHNOLOGIES"}</p>
                        <div class="tag-row">
                            { for project.tags.iter().map(|tag| html! { <span class="tag">{*tag}</span> }) }
                        </div>
                    </div>
                    <div class="card-actions">
                        <button class="button small" type="button">{"Code"}</button>
                        <button class="button small alt" type="button">{"Details"}</button>
                    </div>
                    <p class="muted">{"Click to flip back"}</p>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct GalleryModalProps {
    flipped: Vec<bool>,
    on_close: Callback<()>,
    on_flip: Callback<usize>,
}

#[function_component(GalleryModal)]
fn gallery_modal(props: &GalleryModalProps) -> Html {
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="gallery-overlay" role="dialog" aria-modal="true" aria-labelledby="gallery-heading">
            <div class="gallery">
                <div class="gallery-header">
                    <h2 id="gallery-heading">{"My Project Collection"}</h2>
                    <button class="gallery-close" type="button" aria-label="Close gallery" onclick={on_close}>{"✕"}</button>
                </div>

                <div class="gallery-grid">
                    { for PROJECTS.iter().enumerate().map(|(index, project)| html! {
                        <FlipCard
                            key={project.title}
                            index={index}
                            project={*project}
                            flipped={props.flipped.get(index).copied().unwrap_or(false)}
                            on_flip={props.on_flip.clone()}
                        />
                    }) }
                </div>

                <p class="gallery-hint muted">{"Click any card to flip and see project details"}</p>
            </div>
        </div>
    }
}

#[function_component(AllProjects)]
fn all_projects() -> Html {
    html! {
        <section id={Section::AllProjects.id()} class="section">
            <div class="section-inner centered">
                <div class="folder-pill">{"📁 My Projects Folder"}</div>
                <h2>{"All My Data Science Projects"}</h2>
                <p class="counter">
                    {"Total Projects Completed: "}
                    <span class="gradient-text">{catalog::total_projects_label()}</span>
                </p>
                <p class="muted">{"Explore my complete collection of end-to-end data science projects"}</p>
            </div>
        </section>
    }
}

#[function_component(FeaturedProjects)]
fn featured_projects() -> Html {
    html! {
        <section id={Section::Projects.id()} class="section">
            <div class="section-inner">
                <h2 class="centered">{"Featured Projects"}</h2>
                <p class="centered muted">{"Showcasing my best work across different domains"}</p>

                <div class="project-list">
                    { for PROJECTS.iter().map(|project| html! {
                        <article key={project.title} class="project-row">
                            <div class={classes!("project-media", project.color)}>
                                <img src={project.image_url} alt={project.title} loading="lazy" />
                                <div class="project-glyph" aria-hidden="true">{project.image}</div>
                            </div>
                            <div class="project-copy">
                                <span class={classes!("metric-pill", project.color)}>{project.metrics}</span>
                                <h3>{project.title}</h3>
                                <p>{project.description}</p>
                                <div class="tag-row">
                                    { for project.tags.iter().map(|tag| html! { <span class="tag">{*tag}</span> }) }
                                </div>
                                <button class="link-button" type="button">{"View Code ↗"}</button>
                            </div>
                        </article>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct SkillsGridProps {
    hovered: Option<usize>,
    on_hover: Callback<Option<usize>>,
}

#[function_component(SkillsGrid)]
fn skills_grid(props: &SkillsGridProps) -> Html {
    html! {
        <section id={Section::Skills.id()} class="section">
            <div class="section-inner">
                <h2 class="centered">{"Technical Skills"}</h2>
                <div class="skills-grid">
                    { for SKILLS.iter().enumerate().map(|(index, skill)| {
                        let onmouseenter = {
                            let on_hover = props.on_hover.clone();
                            Callback::from(move |_: MouseEvent| on_hover.emit(Some(index)))
                        };
                        let onmouseleave = {
                            let on_hover = props.on_hover.clone();
                            Callback::from(move |_: MouseEvent| on_hover.emit(None))
                        };

                        html! {
                            <div
                                key={skill.category}
                                class={classes!("skill-card", (props.hovered == Some(index)).then_some("is-hovered"))}
                                {onmouseenter}
                                {onmouseleave}
                            >
                                <h3>{skill.category}</h3>
                                <ul>
                                    { for skill.items.iter().map(|item| html! { <li>{*item}</li> }) }
                                </ul>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(ContactSection)]
fn contact_section() -> Html {
    html! {
        <section id={Section::Contact.id()} class="section">
            <div class="section-inner centered">
                <div class="freelance-banner">
                    <h3>{"✨ "}{PROFILE.freelance_heading}{" ✨"}</h3>
                    <p>{PROFILE.freelance_body}</p>
                </div>
                <h2>{PROFILE.contact_heading}</h2>
                <p class="muted">{PROFILE.contact_body}</p>
                <div class="contact-actions">
                    <button class="button success" type="button">{"Send Email"}</button>
                    <button class="button outline" type="button">{"Schedule Call"}</button>
                </div>
            </div>
        </section>
    }
}

#[function_component(App)]
fn app() -> Html {
    let config = SiteConfig::from_build_env();
    let view = use_reducer(ViewState::default);

    {
        let dispatcher = view.dispatcher();
        let active_project = view.active_project_index();
        use_effect_with((), move |_| {
            let listener = window().map(|win| {
                let handler = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                    dispatcher.dispatch(ViewAction::RecordScroll(current_scroll_y()));
                });
                ScopedListener::attach(win, "scroll", handler)
            });

            match listener.as_ref() {
                Some(listener) if listener.is_attached() => {
                    log(config, LogLevel::Debug, "scroll_listener_attached", json!({}));
                }
                _ => log(config, LogLevel::Info, "scroll_listener_attach_failed", json!({})),
            }
            log(config, LogLevel::Info, "app_mounted", json!({ "projects": catalog::project_count(), "active_project": active_project }));

            move || {
                drop(listener);
                log(config, LogLevel::Debug, "scroll_listener_detached", json!({}));
            }
        });
    }

    let on_toggle_menu = {
        let view = view.clone();
        Callback::from(move |()| {
            log(config, LogLevel::Debug, "menu_toggled", json!({ "open": !view.menu_open() }));
            view.dispatch(ViewAction::ToggleMenu);
        })
    };

    let on_navigate = {
        let dispatcher = view.dispatcher();
        Callback::from(move |section: Section| {
            apply_navigation(nav::plan(section));
            dispatcher.dispatch(ViewAction::Navigate(section));
            log(config, LogLevel::Info, "navigated", json!({ "section": section.id() }));
        })
    };

    // Mobile links are plain anchors; the browser follows the fragment itself.
    let on_menu_select = {
        let dispatcher = view.dispatcher();
        Callback::from(move |section: Section| {
            dispatcher.dispatch(ViewAction::CloseMenu);
            log(config, LogLevel::Info, "navigated", json!({ "section": section.id(), "via": "menu" }));
        })
    };

    let on_view_work = {
        let view = view.clone();
        Callback::from(move |()| {
            log(
                config,
                LogLevel::Info,
                "gallery_toggled",
                json!({ "open": true, "flipped_cards": view.flipped().len() }),
            );
            view.dispatch(ViewAction::OpenGallery);
        })
    };

    let on_close_gallery = {
        let dispatcher = view.dispatcher();
        Callback::from(move |()| {
            log(config, LogLevel::Info, "gallery_toggled", json!({ "open": false }));
            dispatcher.dispatch(ViewAction::CloseGallery);
        })
    };

    let on_flip = {
        let view = view.clone();
        Callback::from(move |index: usize| {
            log(
                config,
                LogLevel::Debug,
                "card_flipped",
                json!({ "project": index, "flipped": !view.is_flipped(index) }),
            );
            view.dispatch(ViewAction::ToggleFlip(index));
        })
    };

    let on_hover_skill = {
        let dispatcher = view.dispatcher();
        Callback::from(move |index: Option<usize>| dispatcher.dispatch(ViewAction::SetHoveredSkill(index)))
    };

    let flipped: Vec<bool> = (0..catalog::project_count())
        .map(|index| view.is_flipped(index))
        .collect();
    let backdrop_style = format!(
        "--parallax-offset: {:.2}px;",
        config.parallax_offset(view.scroll_y())
    );

    html! {
        <div class="page">
            <div class="backdrop" style={backdrop_style} aria-hidden="true">
                <div class="blob blue"></div>
                <div class="blob purple"></div>
                <div class="blob pink"></div>
            </div>

            <NavBar
                menu_open={view.menu_open()}
                on_toggle_menu={on_toggle_menu}
                on_navigate={on_navigate}
                on_menu_select={on_menu_select}
            />

            <Hero on_view_work={on_view_work} />

            if view.gallery_open() {
                <GalleryModal flipped={flipped} on_close={on_close_gallery} on_flip={on_flip} />
            }

            <AllProjects />
            <FeaturedProjects />
            <SkillsGrid hovered={view.hovered_skill()} on_hover={on_hover_skill} />
            <ContactSection />

            <footer class="site-footer">
                <p>{PROFILE.footer}</p>
            </footer>
        </div>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}

use leptos::prelude::*;

use crate::types::Project;

/// Class list of a card; every card but the last gets a separator below.
pub fn card_class(add_separator_below: bool) -> &'static str {
    if add_separator_below {
        "project separated"
    } else {
        "project"
    }
}

#[component]
pub fn ProjectCard(
    #[prop(into)] project: Project,
    add_separator_below: bool,
) -> impl IntoView {
    let tags = project
        .tags
        .into_iter()
        .map(|tag| view! { <span class="tag">{tag}</span> })
        .collect_view();
    let skills = project
        .skills
        .into_iter()
        .map(|skill| view! { <span class="skill">{skill}</span> })
        .collect_view();

    view! {
        <article class=card_class(add_separator_below)>
            <a class="project-name" href=project.url>{project.name}</a>
            <div class="project-tags">{tags}</div>
            <p class="project-description">{project.short_description}</p>
            <div class="project-skills">{skills}</div>
        </article>
    }
}
